//! Itinerary type.

use serde::Serialize;

use super::{DomainError, Trip};

/// All trip options returned for one origin/destination lookup.
///
/// Non-empty, in the order the API listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    trips: Vec<Trip>,
}

impl Itinerary {
    /// Constructs an itinerary.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyItinerary` if `trips` is empty.
    pub fn new(trips: Vec<Trip>) -> Result<Self, DomainError> {
        if trips.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Self { trips })
    }

    /// Returns the trips in API order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Returns the number of trips (always at least one).
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Iterates the trips in API order.
    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
