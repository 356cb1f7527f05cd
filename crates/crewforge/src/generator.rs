//! Seeded synthetic instances.

use chrono::{NaiveDateTime, TimeDelta};
use crewforge_config::GeneratorConfig;
use crewforge_core::{Airplane, City, CrewForgeError, Flight, Pilot, Result, Roster, Schedule};
use rand::Rng;
use tracing::debug;

/// A generated problem: the roster plus the schedule to improve.
#[derive(Debug, Clone)]
pub struct Instance {
    pub roster: Roster,
    pub schedule: Schedule,
    pub cities: Vec<City>,
    pub airplanes: Vec<Airplane>,
}

/// Builds random but airplane-consistent schedules.
///
/// Every airplane starts at a hub (alternating through the hub list) and
/// each flight departs from where its airplane last landed, so the initial
/// schedule is always physically flyable by the airplanes. Pilots are
/// assigned at random, which is what the search then repairs.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crewforge::{GeneratorConfig, InstanceGenerator};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let generator = InstanceGenerator::new(GeneratorConfig::default(), ["Riga", "Liepaja"]).unwrap();
/// let start = NaiveDate::from_ymd_opt(2024, 5, 1)
///     .and_then(|d| d.and_hms_opt(6, 0, 0))
///     .unwrap();
///
/// let instance = generator.generate(start, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
/// assert_eq!(instance.schedule.len(), 30);
/// assert_eq!(instance.roster.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    config: GeneratorConfig,
    hubs: Vec<City>,
}

impl InstanceGenerator {
    /// Creates a generator; `hubs` order decides where airplanes start.
    pub fn new<I, C>(config: GeneratorConfig, hubs: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<City>,
    {
        config
            .validate()
            .map_err(|e| CrewForgeError::Config(e.to_string()))?;
        Ok(Self {
            config,
            hubs: hubs.into_iter().map(Into::into).collect(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn hubs(&self) -> &[City] {
        &self.hubs
    }

    /// Generates an instance whose first flight departs at `start`.
    pub fn generate<R: Rng + ?Sized>(&self, start: NaiveDateTime, rng: &mut R) -> Result<Instance> {
        let cities: Vec<City> = self.config.cities.iter().map(City::new).collect();
        let airplanes: Vec<Airplane> = self.config.airplanes.iter().map(Airplane::new).collect();

        let home = self.hubs.first().unwrap_or(&cities[0]).clone();
        let roster = Roster::new(
            (1..=self.config.pilot_count)
                .map(|i| Pilot::new(format!("Pilot {i}"), home.clone()))
                .collect(),
        )?;

        let starts = if self.hubs.is_empty() { &cities } else { &self.hubs };
        let mut locations: Vec<City> = (0..airplanes.len())
            .map(|i| starts[i % starts.len()].clone())
            .collect();

        let interval = TimeDelta::hours(i64::from(self.config.departure_interval_hours));
        let mut departure = start;
        let mut flights = Vec::with_capacity(self.config.flight_count);

        for i in 0..self.config.flight_count {
            if i > 0 {
                departure = departure.checked_add_signed(interval).ok_or_else(|| {
                    CrewForgeError::invalid_input("departure time out of range")
                })?;
            }

            let plane = rng.random_range(0..airplanes.len());
            let from = locations[plane].clone();
            let to = self.choose_destination(&cities, &from, rng)?;
            let pilot = roster.pilots()[rng.random_range(0..roster.len())].id().clone();

            flights.push(Flight::new(
                from,
                to.clone(),
                airplanes[plane].clone(),
                pilot,
                departure,
            ));
            locations[plane] = to;
        }

        let schedule = Schedule::new(flights)?;
        debug!(
            flight_count = schedule.len(),
            pilot_count = roster.len(),
            airplane_count = airplanes.len(),
            "generated instance"
        );

        Ok(Instance {
            roster,
            schedule,
            cities,
            airplanes,
        })
    }

    // With probability `hub_bias` a hub, otherwise any city; never `from`.
    fn choose_destination<R: Rng + ?Sized>(
        &self,
        cities: &[City],
        from: &City,
        rng: &mut R,
    ) -> Result<City> {
        if !self.hubs.is_empty() && rng.random_bool(self.config.hub_bias) {
            let hub = &self.hubs[rng.random_range(0..self.hubs.len())];
            if hub != from {
                return Ok(hub.clone());
            }
        }

        let others: Vec<&City> = cities.iter().filter(|c| *c != from).collect();
        if others.is_empty() {
            return Err(CrewForgeError::invalid_input(format!(
                "no destination other than {from} available"
            )));
        }
        Ok(others[rng.random_range(0..others.len())].clone())
    }
}
