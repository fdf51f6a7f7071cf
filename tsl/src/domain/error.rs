//! Domain error types.
//!
//! These errors represent violated model invariants. They are distinct from
//! transport and response-shape errors.

/// Domain-level errors raised by the model constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Station name is empty or whitespace
    #[error("station name must not be empty")]
    EmptyStationName,

    /// Trip has no edges
    #[error("trip must have at least one edge")]
    EmptyTrip,

    /// Itinerary has no trips
    #[error("itinerary must have at least one trip")]
    EmptyItinerary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyStationName;
        assert_eq!(err.to_string(), "station name must not be empty");

        let err = DomainError::EmptyTrip;
        assert_eq!(err.to_string(), "trip must have at least one edge");

        let err = DomainError::EmptyItinerary;
        assert_eq!(err.to_string(), "itinerary must have at least one trip");
    }
}
