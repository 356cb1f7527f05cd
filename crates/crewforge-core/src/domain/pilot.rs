//! Pilots and the roster they belong to.

use std::collections::HashMap;

use super::{Airplane, City, PilotId};
use crate::error::{CrewForgeError, Result};

/// A pilot and its reference starting state.
///
/// The starting state seeds conflict evaluation. A pilot's running location
/// and airplane during a schedule are derived per evaluation and are never
/// written back here.
///
/// # Example
///
/// ```
/// use crewforge_core::{Airplane, City, Pilot};
///
/// let pilot = Pilot::new("Pilot 1", City::new("Riga"))
///     .with_starting_airplane(Airplane::new("Airplane 2"));
///
/// assert_eq!(pilot.name(), "Pilot 1");
/// assert_eq!(pilot.home_city().as_str(), "Riga");
/// assert!(pilot.starting_airplane().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pilot {
    id: PilotId,
    home_city: City,
    #[cfg_attr(feature = "serde", serde(default))]
    starting_airplane: Option<Airplane>,
}

impl Pilot {
    pub fn new(name: impl Into<PilotId>, home_city: City) -> Self {
        Self {
            id: name.into(),
            home_city,
            starting_airplane: None,
        }
    }

    /// Sets the airplane the pilot last flew before the schedule starts.
    pub fn with_starting_airplane(mut self, airplane: Airplane) -> Self {
        self.starting_airplane = Some(airplane);
        self
    }

    pub fn id(&self) -> &PilotId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    pub fn home_city(&self) -> &City {
        &self.home_city
    }

    pub fn starting_airplane(&self) -> Option<&Airplane> {
        self.starting_airplane.as_ref()
    }
}

/// The pilots available to a run, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pilots: Vec<Pilot>,
    index: HashMap<PilotId, usize>,
}

impl Roster {
    /// Creates a roster, rejecting duplicate pilot names.
    pub fn new(pilots: Vec<Pilot>) -> Result<Self> {
        let mut index = HashMap::with_capacity(pilots.len());
        for (i, pilot) in pilots.iter().enumerate() {
            if index.insert(pilot.id().clone(), i).is_some() {
                return Err(CrewForgeError::invalid_input(format!(
                    "duplicate pilot name '{}' in roster",
                    pilot.id()
                )));
            }
        }
        Ok(Self { pilots, index })
    }

    pub fn get(&self, id: &PilotId) -> Option<&Pilot> {
        self.index.get(id).map(|&i| &self.pilots[i])
    }

    pub fn contains(&self, id: &PilotId) -> bool {
        self.index.contains_key(id)
    }

    pub fn pilots(&self) -> &[Pilot] {
        &self.pilots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pilot> {
        self.pilots.iter()
    }

    pub fn len(&self) -> usize {
        self.pilots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pilots.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Pilot;
    type IntoIter = std::slice::Iter<'a, Pilot>;

    fn into_iter(self) -> Self::IntoIter {
        self.pilots.iter()
    }
}
