//! Station type.

use std::fmt;

use serde::Serialize;

use super::DomainError;

/// A named stop with the clock time at which an edge leaves or reaches it.
///
/// The time is kept exactly as the API sent it ("10:00"); it is display
/// text and is not validated as a time of day.
///
/// # Examples
///
/// ```
/// use tsl::domain::Station;
///
/// let duvbo = Station::new("Duvbo", "10:00").unwrap();
/// assert_eq!(duvbo.name(), "Duvbo");
/// assert_eq!(duvbo.time(), "10:00");
///
/// // A station always has a name
/// assert!(Station::new("", "10:00").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    name: String,
    time: String,
}

impl Station {
    /// Creates a station.
    ///
    /// Returns `DomainError::EmptyStationName` if `name` is empty or only
    /// whitespace.
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyStationName);
        }

        Ok(Self {
            name,
            time: time.into(),
        })
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arrival or departure time, as sent by the API.
    pub fn time(&self) -> &str {
        &self.time
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.time)
    }
}
