//! Mock Travel Planner for working without API access.
//!
//! Serves captured raw HTTP responses from disk as if they had just been
//! read off the socket, so the whole pipeline (including header stripping)
//! runs against real bytes.

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;

use tracing::debug;

use super::error::TransportError;
use super::source::{RawResponse, TripSource};

/// Extension of captured response files.
const CAPTURE_EXTENSION: &str = "http";

/// Separator between origin and destination in a capture file name.
const ROUTE_SEPARATOR: &str = "--";

/// Mock client that serves captured responses, keyed by route.
#[derive(Debug, Clone)]
pub struct MockTravelPlanner {
    /// Raw responses keyed by (origin, destination).
    responses: HashMap<(String, String), Vec<u8>>,
    capacity: usize,
}

impl MockTravelPlanner {
    /// Create a mock by loading capture files from a directory.
    ///
    /// Expects files named `{origin}--{destination}.http` (e.g.
    /// `Duvbo--Universitetet.http`) holding a complete raw response: status
    /// line, headers, blank line and body. Responses longer than `capacity`
    /// are cut to `capacity` bytes, as the live client would.
    pub fn new(data_dir: impl AsRef<Path>, capacity: usize) -> Result<Self, TransportError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| TransportError::Replay {
            message: format!("failed to read capture directory {:?}: {}", data_dir, e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TransportError::Replay {
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file()
                || path.extension().and_then(|s| s.to_str()) != Some(CAPTURE_EXTENSION)
            {
                continue;
            }

            let (origin, destination) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|stem| stem.split_once(ROUTE_SEPARATOR))
                .ok_or_else(|| TransportError::Replay {
                    message: format!("capture file name is not origin--destination: {:?}", path),
                })?;

            let bytes = std::fs::read(&path).map_err(|e| TransportError::Replay {
                message: format!("failed to read {:?}: {}", path, e),
            })?;

            debug!(origin, destination, bytes = bytes.len(), "loaded captured response");
            responses.insert((origin.to_string(), destination.to_string()), bytes);
        }

        if responses.is_empty() {
            return Err(TransportError::Replay {
                message: format!("no captured responses found in {:?}", data_dir),
            });
        }

        Ok(Self {
            responses,
            capacity,
        })
    }

    /// Create a mock serving a single in-memory response.
    pub fn with_response(
        origin: impl Into<String>,
        destination: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        capacity: usize,
    ) -> Self {
        let mut responses = HashMap::new();
        responses.insert((origin.into(), destination.into()), bytes.into());
        Self {
            responses,
            capacity,
        }
    }

    /// Serve the captured response for a route.
    ///
    /// Mimics the real `TravelPlannerClient::fetch` interface.
    pub async fn fetch(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RawResponse, TransportError> {
        let bytes = self
            .responses
            .get(&(origin.to_string(), destination.to_string()))
            .ok_or_else(|| TransportError::Replay {
                message: format!(
                    "no captured response for {} -> {}. Available: {:?}",
                    origin,
                    destination,
                    self.available_routes()
                ),
            })?;

        let end = bytes.len().min(self.capacity);
        Ok(RawResponse::new(bytes[..end].to_vec(), self.capacity))
    }

    /// List the routes with a captured response, sorted.
    pub fn available_routes(&self) -> Vec<(String, String)> {
        let mut routes: Vec<_> = self.responses.keys().cloned().collect();
        routes.sort();
        routes
    }
}

impl TripSource for MockTravelPlanner {
    fn fetch(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        MockTravelPlanner::fetch(self, origin, destination)
    }
}
