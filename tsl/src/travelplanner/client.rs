//! SL Travel Planner socket client.
//!
//! Sends one hand-composed HTTP/1.1 request per lookup over a fresh TCP
//! connection and reads the reply until the server closes, a read fails, or
//! the capacity bound is reached.

use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace};

use super::error::TransportError;
use super::source::{RawResponse, TripSource};

/// Default API host.
const DEFAULT_HOST: &str = "api.sl.se";

/// Default API port (plain HTTP).
const DEFAULT_PORT: u16 = 80;

/// Default upper bound on the response size in bytes.
const DEFAULT_CAPACITY: usize = 200_000;

/// Default connect and read timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bytes requested from the socket per read.
const READ_CHUNK: usize = 8 * 1024;

/// Response format selector in the request path. Only JSON is understood.
pub const RESPONSE_FORMAT: &str = "json";

/// Configuration for the Travel Planner client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelPlannerConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Server host name or literal IP address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Maximum number of response bytes to read
    pub capacity: usize,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Per-read (and write) timeout in seconds
    pub read_timeout_secs: u64,
}

impl TravelPlannerConfig {
    /// Create a new config with the given API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            capacity: DEFAULT_CAPACITY,
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom host (for testing or a proxy).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set a custom port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the response capacity in bytes.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set both the connect and read timeouts.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self.read_timeout_secs = secs;
        self
    }

    /// `host` or `host:port`, as written in the request URL and `Host` header.
    ///
    /// The port is omitted when it is the HTTP default.
    pub fn authority(&self) -> String {
        if self.port == DEFAULT_PORT {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for TravelPlannerConfig {
    fn default() -> Self {
        Self::new("")
    }
}

/// Compose the full request text for a trip lookup.
///
/// Query values are percent-encoded so station names with spaces or
/// non-ASCII letters still form a valid request line.
///
/// # Examples
///
/// ```
/// use tsl::travelplanner::{TravelPlannerConfig, compose_request};
///
/// let config = TravelPlannerConfig::new("secret");
/// let request = compose_request(&config, "Duvbo", "Universitetet");
/// assert!(request.starts_with(
///     "GET http://api.sl.se/api2/travelplannerv2/trip.json?key=secret&originId=Duvbo&destId=Universitetet HTTP/1.1\r\n"
/// ));
/// assert!(request.ends_with("Connection: close\r\n\r\n"));
/// ```
pub fn compose_request(config: &TravelPlannerConfig, origin: &str, destination: &str) -> String {
    let authority = config.authority();
    format!(
        "GET http://{authority}/api2/travelplannerv2/trip.{RESPONSE_FORMAT}?\
         key={}&originId={}&destId={} HTTP/1.1\r\n\
         Host: {authority}\r\n\
         Connection: close\r\n\
         \r\n",
        urlencoding::encode(&config.api_key),
        urlencoding::encode(origin),
        urlencoding::encode(destination),
    )
}

/// SL Travel Planner client.
///
/// Opens exactly one connection per [`fetch`](Self::fetch) and closes it on
/// every exit path when the stream is dropped.
#[derive(Debug, Clone)]
pub struct TravelPlannerClient {
    config: TravelPlannerConfig,
}

impl TravelPlannerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TravelPlannerConfig) -> Self {
        Self { config }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &TravelPlannerConfig {
        &self.config
    }

    /// Fetch the raw response for a trip from `origin` to `destination`.
    ///
    /// Reading stops when the server closes the connection or when
    /// `capacity` bytes have been received. A full buffer is not an error
    /// here; check [`RawResponse::is_truncated`].
    pub async fn fetch(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RawResponse, TransportError> {
        let addr = self.config.socket_addr();
        let request = compose_request(&self.config, origin, destination);

        debug!(%addr, origin, destination, "connecting to travel planner");
        let mut stream = connect(&self.config, &addr).await?;

        send(&mut stream, request.as_bytes(), self.read_timeout())
            .await
            .map_err(|source| TransportError::Send {
                addr: addr.clone(),
                source,
            })?;
        trace!(bytes = request.len(), "request sent");

        let bytes = receive(&mut stream, self.config.capacity, self.read_timeout())
            .await
            .map_err(|source| TransportError::Receive {
                addr: addr.clone(),
                source,
            })?;
        debug!(bytes = bytes.len(), capacity = self.config.capacity, "response received");

        Ok(RawResponse::new(bytes, self.config.capacity))
    }

    fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.config.read_timeout_secs)
    }
}

impl TripSource for TravelPlannerClient {
    fn fetch(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        TravelPlannerClient::fetch(self, origin, destination)
    }
}

/// Resolve and connect, bounded by the connect timeout.
async fn connect(config: &TravelPlannerConfig, addr: &str) -> Result<TcpStream, TransportError> {
    let limit = Duration::from_secs(config.connect_timeout_secs);

    let stream = timeout(limit, TcpStream::connect((config.host.as_str(), config.port)))
        .await
        .map_err(|_| TransportError::Connect {
            addr: addr.to_string(),
            source: io::Error::new(io::ErrorKind::TimedOut, "connect timed out"),
        })?
        .map_err(|source| TransportError::Connect {
            addr: addr.to_string(),
            source,
        })?;

    Ok(stream)
}

/// Write the whole request in one operation.
///
/// A peer that stops accepting bytes surfaces as `WriteZero` from
/// `write_all`.
async fn send<W>(stream: &mut W, request: &[u8], limit: Duration) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    timeout(limit, stream.write_all(request))
        .await
        .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "write timed out"))?
}

/// Read until EOF or until `capacity` bytes have arrived.
///
/// Every read is bounded by `limit`; a read that fails or times out fails
/// the whole receive, so a partial body is never handed on.
async fn receive<R>(stream: &mut R, capacity: usize, limit: Duration) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    while bytes.len() < capacity {
        let want = (capacity - bytes.len()).min(READ_CHUNK);
        let read = timeout(limit, stream.read(&mut chunk[..want]))
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "read timed out"))??;

        if read == 0 {
            break;
        }
        trace!(read, total = bytes.len() + read, "read chunk");
        bytes.extend_from_slice(&chunk[..read]);
    }

    Ok(bytes)
}
