//! Hub city set.

use std::collections::HashSet;

use crewforge_core::{City, Flight};

/// The cities that inner legs must start or end at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubCities {
    cities: HashSet<City>,
}

impl HubCities {
    pub fn new<I, C>(cities: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<City>,
    {
        Self {
            cities: cities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, city: &City) -> bool {
        self.cities.contains(city)
    }

    /// Returns true if either endpoint of `flight` is a hub.
    pub fn touches(&self, flight: &Flight) -> bool {
        self.contains(flight.from_city()) || self.contains(flight.to_city())
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl<C: Into<City>> FromIterator<C> for HubCities {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        HubCities::new(iter)
    }
}
