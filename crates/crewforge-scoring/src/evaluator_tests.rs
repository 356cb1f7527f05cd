//! Tests for conflict evaluation.

use crewforge_core::{Airplane, City, Cost, Pilot, PilotId, Roster};
use crewforge_test::{
    hub_roster, pilot, roster, three_leg_schedule, zigzag_schedule, ScheduleBuilder, HUB, PLANE,
    SPOKE,
};

use crate::{ConflictAnalysis, ConflictEvaluator, ConflictWeights, HubCities, ScheduleEvaluator};

fn evaluator() -> ConflictEvaluator {
    ConflictEvaluator::new(HubCities::new([HUB]))
}

#[test]
fn test_reference_schedule_costs_80() {
    let analysis = evaluator().analyze(&three_leg_schedule(), &hub_roster());

    assert_eq!(
        analysis,
        ConflictAnalysis {
            hub_violations: 0,
            location_conflicts: 0,
            airplane_continuations: 2,
            airplane_switches: 0,
            idle_jumps: 0,
            pilots_used: 1,
        }
    );
    assert_eq!(
        evaluator().evaluate(&three_leg_schedule(), &hub_roster()),
        Cost::of(80)
    );
}

#[test]
fn test_second_pilot_from_spoke_city() {
    // B starts at Y, so flying H→X is a location conflict. A then lands
    // back at H after leg 1 and cannot depart X on leg 3 either.
    let roster = roster(vec![pilot("A", HUB), pilot("B", "Y")]);
    let schedule = ScheduleBuilder::new()
        .leg(HUB, HUB, PLANE, "A")
        .leg(HUB, SPOKE, PLANE, "B")
        .leg(SPOKE, HUB, PLANE, "A")
        .build();

    let analysis = evaluator().analyze(&schedule, &roster);

    assert_eq!(analysis.location_conflicts, 2);
    assert_eq!(analysis.pilots_used, 2);
    assert_eq!(analysis.airplane_continuations, 1);
    assert_eq!(analysis.idle_jumps, 0);
    assert_eq!(evaluator().evaluate(&schedule, &roster), Cost::of(390));
}

#[test]
fn test_hub_rule_exempts_first_and_last() {
    let roster = roster(vec![pilot("A", "Q")]);
    let schedule = ScheduleBuilder::new()
        .leg("Q", "R", PLANE, "A")
        .leg("R", "S", PLANE, "A")
        .leg("S", "T", PLANE, "A")
        .leg("T", "U", PLANE, "A")
        .build();

    let analysis = evaluator().analyze(&schedule, &roster);
    assert_eq!(analysis.hub_violations, 2);
}

#[test]
fn test_single_flight_has_no_hub_or_idle_penalty() {
    let roster = roster(vec![pilot("A", "Q")]);
    let schedule = ScheduleBuilder::new().leg("Q", "R", PLANE, "A").build();

    let analysis = evaluator().analyze(&schedule, &roster);

    assert_eq!(analysis.hub_violations, 0);
    assert_eq!(analysis.idle_jumps, 0);
    assert_eq!(evaluator().evaluate(&schedule, &roster), Cost::of(100));
}

#[test]
fn test_two_flights_score_only_continuity() {
    let roster = roster(vec![pilot("A", "Q")]);
    let schedule = ScheduleBuilder::new()
        .leg("Q", "R", PLANE, "A")
        .leg("S", "T", PLANE, "A")
        .build();

    let analysis = evaluator().analyze(&schedule, &roster);

    assert_eq!(analysis.hub_violations, 0);
    assert_eq!(analysis.location_conflicts, 1);
    assert_eq!(analysis.idle_jumps, 1);
    assert_eq!(analysis.airplane_continuations, 1);
    assert_eq!(
        evaluator().evaluate(&schedule, &roster),
        Cost::of(100 + 250 - 10 + 100)
    );
}

#[test]
fn test_airplane_switch_penalty() {
    let schedule = ScheduleBuilder::new()
        .leg(HUB, SPOKE, "P1", "A")
        .leg(SPOKE, HUB, "P2", "A")
        .build();

    let analysis = evaluator().analyze(&schedule, &hub_roster());

    assert_eq!(analysis.airplane_switches, 1);
    assert_eq!(analysis.airplane_continuations, 0);
    assert_eq!(evaluator().evaluate(&schedule, &hub_roster()), Cost::of(150));
}

#[test]
fn test_starting_airplane_is_compared_on_first_leg() {
    let roster = Roster::new(vec![
        Pilot::new("A", City::new(HUB)).with_starting_airplane(Airplane::new("P9")),
    ])
    .unwrap();
    let schedule = ScheduleBuilder::new()
        .leg(HUB, SPOKE, PLANE, "A")
        .leg(SPOKE, HUB, PLANE, "A")
        .build();

    let analysis = evaluator().analyze(&schedule, &roster);

    assert_eq!(analysis.airplane_switches, 1);
    assert_eq!(analysis.airplane_continuations, 1);
}

#[test]
fn test_idle_jump_needs_same_pilot_back_to_back() {
    let schedule = ScheduleBuilder::new()
        .leg(HUB, SPOKE, PLANE, "A")
        .leg(HUB, SPOKE, PLANE, "B")
        .leg(HUB, SPOKE, PLANE, "B")
        .build();

    let analysis = evaluator().analyze(&schedule, &hub_roster());

    // Only legs 2→3 share a pilot and fail to connect.
    assert_eq!(analysis.idle_jumps, 1);
    assert_eq!(analysis.location_conflicts, 1);
}

#[test]
fn test_pilot_missing_from_roster_starts_without_state() {
    let schedule = ScheduleBuilder::new()
        .leg(SPOKE, HUB, PLANE, "Ghost")
        .leg(HUB, SPOKE, PLANE, "Ghost")
        .build();

    let analysis = evaluator().analyze(&schedule, &hub_roster());

    assert_eq!(analysis.location_conflicts, 0);
    assert_eq!(analysis.airplane_continuations, 1);
    assert_eq!(analysis.airplane_switches, 0);
    assert_eq!(analysis.pilots_used, 1);
}

#[test]
fn test_unused_pilots_do_not_count() {
    let analysis = evaluator().analyze(&three_leg_schedule(), &hub_roster());
    assert_eq!(analysis.pilots_used, 1);
}

#[test]
fn test_evaluate_is_pure() {
    let roster = hub_roster();
    let schedule = zigzag_schedule(6, &["A", "B"]);
    let schedule_before = schedule.clone();

    let first = evaluator().evaluate(&schedule, &roster);
    let second = evaluator().evaluate(&schedule, &roster);

    assert_eq!(first, second);
    assert_eq!(schedule, schedule_before);
    assert_eq!(
        roster.get(&PilotId::new("B")).unwrap().home_city(),
        &City::new(HUB)
    );
}

#[test]
fn test_custom_weights() {
    let weights = ConflictWeights::default()
        .with_pilot_count(0)
        .with_airplane_continuity(0);
    let evaluator = evaluator().with_weights(weights);

    assert_eq!(
        evaluator.evaluate(&three_leg_schedule(), &hub_roster()),
        Cost::ZERO
    );
}

#[test]
fn test_analysis_cost_matches_evaluate() {
    let evaluator = evaluator();
    let roster = hub_roster();
    let schedule = zigzag_schedule(7, &["A", "B", "A"]);

    let analysis = evaluator.analyze(&schedule, &roster);
    assert_eq!(
        analysis.cost(evaluator.weights()),
        evaluator.evaluate(&schedule, &roster)
    );
}
