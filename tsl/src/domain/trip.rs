//! Trip type.

use serde::Serialize;

use super::{DomainError, Edge, Station};

/// One complete journey option from origin to destination.
///
/// # Invariants
///
/// - At least one edge
/// - Edges are kept in travel order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    duration: String,
    edges: Vec<Edge>,
}

impl Trip {
    /// Constructs a trip from its duration text and its edges in travel order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyTrip` if `edges` is empty.
    pub fn new(duration: impl Into<String>, edges: Vec<Edge>) -> Result<Self, DomainError> {
        if edges.is_empty() {
            return Err(DomainError::EmptyTrip);
        }

        Ok(Self {
            duration: duration.into(),
            edges,
        })
    }

    /// Returns the total travel time in minutes, as sent by the API.
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Returns the edges in travel order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the station the trip starts from.
    pub fn departure(&self) -> &Station {
        // Non-empty by construction
        self.edges[0].origin()
    }

    /// Returns the station the trip ends at.
    pub fn arrival(&self) -> &Station {
        self.edges[self.edges.len() - 1].destination()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(kind: &str, from: (&str, &str), to: (&str, &str)) -> Edge {
        Edge::new(
            kind,
            Station::new(from.0, from.1).unwrap(),
            Station::new(to.0, to.1).unwrap(),
        )
    }

    #[test]
    fn reject_empty_edges() {
        assert_eq!(Trip::new("23", vec![]).unwrap_err(), DomainError::EmptyTrip);
    }

    #[test]
    fn single_edge_trip() {
        let trip = Trip::new(
            "23",
            vec![edge("Bus 176", ("Duvbo", "10:00"), ("Universitetet", "10:23"))],
        )
        .unwrap();

        assert_eq!(trip.duration(), "23");
        assert_eq!(trip.edges().len(), 1);
        assert_eq!(trip.departure().name(), "Duvbo");
        assert_eq!(trip.arrival().name(), "Universitetet");
    }

    #[test]
    fn multi_edge_trip_keeps_order() {
        let trip = Trip::new(
            "31",
            vec![
                edge("Pendeltåg 43", ("Duvbo", "10:02"), ("Stockholm City", "10:14")),
                edge("Gång", ("Stockholm City", "10:14"), ("T-Centralen", "10:19")),
                edge("Tunnelbana 14", ("T-Centralen", "10:21"), ("Universitetet", "10:33")),
            ],
        )
        .unwrap();

        let kinds: Vec<_> = trip.edges().iter().map(Edge::kind).collect();
        assert_eq!(kinds, ["Pendeltåg 43", "Gång", "Tunnelbana 14"]);
        assert_eq!(trip.departure().time(), "10:02");
        assert_eq!(trip.arrival().time(), "10:33");
    }
}
