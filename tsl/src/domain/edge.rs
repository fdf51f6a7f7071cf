//! Edge (leg) type.

use serde::Serialize;

use super::Station;

/// One segment of travel by a single mode between two stations.
///
/// `kind` is free text from the API, such as "Bus 176", "tunnelbanans
/// gröna linje 19" or "Gång" for a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    kind: String,
    origin: Station,
    destination: Station,
}

impl Edge {
    /// Creates an edge that owns both of its stations.
    pub fn new(kind: impl Into<String>, origin: Station, destination: Station) -> Self {
        Self {
            kind: kind.into(),
            origin,
            destination,
        }
    }

    /// Returns the mode of travel.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the station where this edge starts.
    pub fn origin(&self) -> &Station {
        &self.origin
    }

    /// Returns the station where this edge ends.
    pub fn destination(&self) -> &Station {
        &self.destination
    }
}
