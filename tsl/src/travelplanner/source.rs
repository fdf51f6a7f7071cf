//! Raw responses and the sources that produce them.

use std::future::Future;

use super::error::TransportError;

/// The bytes of one HTTP response, exactly as received, bounded by a capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    bytes: Vec<u8>,
    capacity: usize,
}

impl RawResponse {
    /// Wraps received bytes together with the capacity they were read into.
    pub fn new(bytes: Vec<u8>, capacity: usize) -> Self {
        Self { bytes, capacity }
    }

    /// Returns the received bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of bytes received.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing was received.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the capacity the response was read into.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the response filled its capacity.
    ///
    /// Reading stops at the capacity, so a full buffer may be missing the
    /// end of the body.
    pub fn is_truncated(&self) -> bool {
        self.bytes.len() >= self.capacity
    }

    /// Returns the HTTP status line, if the response starts with one.
    ///
    /// Only used for logging; headers are never interpreted.
    pub fn status_line(&self) -> Option<&str> {
        let end = self.bytes.iter().position(|&b| b == b'\r' || b == b'\n')?;
        let line = std::str::from_utf8(&self.bytes[..end]).ok()?;
        line.starts_with("HTTP/").then_some(line)
    }
}

/// Something that can produce the raw trip-plan response for a route.
///
/// Implemented by the live [`TravelPlannerClient`](super::TravelPlannerClient)
/// and by [`MockTravelPlanner`](super::MockTravelPlanner), which serves
/// captured responses from disk.
pub trait TripSource {
    /// Fetches the raw response for `origin` to `destination`.
    fn fetch(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
