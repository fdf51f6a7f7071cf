//! Transport error types.

use std::io;

/// Errors from fetching a raw response.
///
/// Each network variant names the phase that failed, so a failed lookup can
/// be told apart as "could not reach", "could not ask" or "could not hear".
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Could not open the connection (resolution, refusal or timeout)
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Could not write the request
    #[error("failed to send request to {addr}: {source}")]
    Send {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Reading the response failed or timed out
    #[error("failed to receive response from {addr}: {source}")]
    Receive {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Captured responses could not be loaded or have no entry for a route
    #[error("replay error: {message}")]
    Replay { message: String },
}
