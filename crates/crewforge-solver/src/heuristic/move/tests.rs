//! Tests for move types.

use crewforge_test::{three_leg_schedule, zigzag_schedule};

use super::*;

#[test]
fn test_adjacent_swap_indices() {
    let m = AdjacentSwapMove::new(3);
    assert_eq!(m.left(), 3);
    assert_eq!(m.right(), 4);
    assert_eq!(m.flight_indices(), &[3, 4]);
}

#[test]
fn test_adjacent_swap_is_doable() {
    let schedule = zigzag_schedule(3, &["A", "B"]);

    assert!(AdjacentSwapMove::new(0).is_doable(&schedule));
    assert!(AdjacentSwapMove::new(1).is_doable(&schedule));
    assert!(!AdjacentSwapMove::new(2).is_doable(&schedule));
}

#[test]
fn test_adjacent_swap_apply_out_of_range() {
    let mut schedule = zigzag_schedule(2, &["A", "B"]);
    assert!(AdjacentSwapMove::new(1).apply(&mut schedule).is_err());
}

#[test]
fn test_adjacent_swap_noop_detection() {
    let schedule = three_leg_schedule();
    assert!(AdjacentSwapMove::new(0).is_noop(&schedule));

    let schedule = zigzag_schedule(2, &["A", "B"]);
    assert!(!AdjacentSwapMove::new(0).is_noop(&schedule));
}
