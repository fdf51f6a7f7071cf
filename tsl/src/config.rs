//! Environment configuration.
//!
//! | Variable           | Default     |
//! |--------------------|-------------|
//! | `SL_API_KEY`       | empty       |
//! | `SL_HOST`          | `api.sl.se` |
//! | `SL_PORT`          | `80`        |
//! | `TSL_CAPACITY`     | `200000`    |
//! | `TSL_TIMEOUT_SECS` | `30`        |
//! | `TSL_REPLAY_DIR`   | unset       |

use std::path::PathBuf;
use std::str::FromStr;

use crate::travelplanner::TravelPlannerConfig;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Everything the binary reads from its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Live client configuration
    pub travel_planner: TravelPlannerConfig,
    /// Serve captured responses from this directory instead of the network
    pub replay_dir: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `get`, which returns a variable's value if set.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = TravelPlannerConfig::new(get("SL_API_KEY").unwrap_or_default());

        if let Some(host) = get("SL_HOST").filter(|h| !h.is_empty()) {
            config = config.with_host(host);
        }
        if let Some(port) = parse_var(&get, "SL_PORT")? {
            config = config.with_port(port);
        }
        if let Some(capacity) = parse_positive::<usize>(&get, "TSL_CAPACITY")? {
            config = config.with_capacity(capacity);
        }
        if let Some(secs) = parse_positive::<u64>(&get, "TSL_TIMEOUT_SECS")? {
            config = config.with_timeout(secs);
        }

        Ok(Self {
            travel_planner: config,
            replay_dir: get("TSL_REPLAY_DIR")
                .filter(|d| !d.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_var<T>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = get(var) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError {
            var,
            value,
            reason: e.to_string(),
        })
}

/// Like [`parse_var`], but zero is rejected.
fn parse_positive<T>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr + Default + PartialEq + ToString,
    T::Err: std::fmt::Display,
{
    match parse_var::<T>(get, var)? {
        Some(n) if n == T::default() => Err(ConfigError {
            var,
            value: n.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        parsed => Ok(parsed),
    }
}
