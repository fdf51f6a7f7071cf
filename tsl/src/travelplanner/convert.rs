//! Conversion from the Travel Planner JSON tree to domain types.
//!
//! The tree is walked by hand rather than deserialized into DTOs because its
//! shape is not fixed: `TripList.Trip` and `LegList.Leg` are arrays when
//! there are several entries and bare objects when there is exactly one.
//! Every required field must be present and hold a string; nothing is
//! defaulted.

use serde_json::Value;

use crate::domain::{DomainError, Edge, Itinerary, Station, Trip};

/// Error during JSON tree to domain conversion.
///
/// Paths are dotted JSON paths with array indices, e.g.
/// `TripList.Trip[1].LegList.Leg[0].Origin.time`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Required key is absent
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Node holding required keys is not an object
    #[error("expected an object: {0}")]
    NotObject(String),

    /// Key is present but its value is not a string
    #[error("field is not text: {0}")]
    NotText(String),

    /// Expected an object or an array of objects
    #[error("expected an object or array: {0}")]
    NotSequence(String),

    /// Array with no elements where at least one is required
    #[error("empty array: {0}")]
    EmptySequence(String),

    /// Values present but violating a model invariant
    #[error("invalid value at {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: DomainError,
    },
}

/// Normalize a node that may be an array or a single bare object.
///
/// An array yields its elements in order; an object yields itself as the
/// only element. Anything else, and an empty array, is an error reported
/// against `path`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tsl::travelplanner::as_sequence;
///
/// let single = json!({"dur": "23"});
/// assert_eq!(as_sequence(&single, "Trip").unwrap(), vec![&single]);
///
/// let many = json!([{"dur": "23"}, {"dur": "27"}]);
/// assert_eq!(as_sequence(&many, "Trip").unwrap().len(), 2);
///
/// assert!(as_sequence(&json!("23"), "Trip").is_err());
/// ```
pub fn as_sequence<'a>(node: &'a Value, path: &str) -> Result<Vec<&'a Value>, ConversionError> {
    match node {
        Value::Array(items) if items.is_empty() => {
            Err(ConversionError::EmptySequence(path.to_string()))
        }
        Value::Array(items) => Ok(items.iter().collect()),
        Value::Object(_) => Ok(vec![node]),
        _ => Err(ConversionError::NotSequence(path.to_string())),
    }
}

/// Extract the whole itinerary from a parsed response body.
pub fn extract_itinerary(root: &Value) -> Result<Itinerary, ConversionError> {
    let trip_list = field(root, "TripList", "")?;
    let trips_path = "TripList.Trip";
    let trips = as_sequence(field(trip_list, "Trip", "TripList")?, trips_path)?
        .into_iter()
        .enumerate()
        .map(|(i, node)| extract_trip(node, &format!("{trips_path}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Itinerary::new(trips).map_err(|source| ConversionError::Invalid {
        path: trips_path.to_string(),
        source,
    })
}

/// Extract one trip: its duration and its legs in order.
fn extract_trip(node: &Value, path: &str) -> Result<Trip, ConversionError> {
    let duration = text(node, "dur", path)?;

    let leg_list_path = join(path, "LegList");
    let leg_list = field(node, "LegList", path)?;
    let legs_path = join(&leg_list_path, "Leg");
    let edges = as_sequence(field(leg_list, "Leg", &leg_list_path)?, &legs_path)?
        .into_iter()
        .enumerate()
        .map(|(i, leg)| extract_edge(leg, &format!("{legs_path}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Trip::new(duration, edges).map_err(|source| ConversionError::Invalid {
        path: path.to_string(),
        source,
    })
}

/// Extract one leg and its two stations.
fn extract_edge(node: &Value, path: &str) -> Result<Edge, ConversionError> {
    let kind = text(node, "name", path)?;
    let origin = extract_station(field(node, "Origin", path)?, &join(path, "Origin"))?;
    let destination = extract_station(
        field(node, "Destination", path)?,
        &join(path, "Destination"),
    )?;

    Ok(Edge::new(kind, origin, destination))
}

/// Extract a station; both `name` and `time` are required.
fn extract_station(node: &Value, path: &str) -> Result<Station, ConversionError> {
    let name = text(node, "name", path)?;
    let time = text(node, "time", path)?;

    Station::new(name, time).map_err(|source| ConversionError::Invalid {
        path: join(path, "name"),
        source,
    })
}

/// Look up a required key in the object at `path`.
fn field<'a>(node: &'a Value, key: &str, path: &str) -> Result<&'a Value, ConversionError> {
    let Value::Object(map) = node else {
        return Err(ConversionError::NotObject(path.to_string()));
    };
    map.get(key)
        .ok_or_else(|| ConversionError::MissingField(join(path, key)))
}

/// Look up a required key holding a string.
fn text(node: &Value, key: &str, path: &str) -> Result<String, ConversionError> {
    match field(node, key, path)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ConversionError::NotText(join(path, key))),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
