//! Trip lookup pipeline.
//!
//! Runs one lookup end to end: fetch the raw response, reject it if it may
//! be truncated, cut out the JSON body, parse it, and extract the domain
//! model. Every failure is terminal; no partial itinerary is ever returned.

use serde_json::Value;
use tracing::{debug, info, trace};

use crate::domain::Itinerary;
use crate::travelplanner::{
    ConversionError, NoJson, TransportError, TripSource, extract_itinerary, isolate,
};

/// Errors from a trip lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Connecting, sending or receiving failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response filled the whole buffer, so its end may be missing
    #[error("response filled the {capacity}-byte buffer and may be truncated")]
    Truncated { capacity: usize },

    /// No `{ ... }` span in the response
    #[error(transparent)]
    NoJson(#[from] NoJson),

    /// The isolated span is not valid JSON
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Valid JSON without the expected trip structure
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] ConversionError),
}

/// Looks up trips through any [`TripSource`].
#[derive(Debug, Clone)]
pub struct TripLookup<S> {
    source: S,
}

impl<S: TripSource> TripLookup<S> {
    /// Create a lookup over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Look up all trips from `origin` to `destination`.
    pub async fn lookup(&self, origin: &str, destination: &str) -> Result<Itinerary, LookupError> {
        let response = self.source.fetch(origin, destination).await?;
        if let Some(status) = response.status_line() {
            debug!(status, "response status");
        }

        if response.is_truncated() {
            return Err(LookupError::Truncated {
                capacity: response.capacity(),
            });
        }

        let itinerary = parse_itinerary(response.as_bytes())?;
        info!(origin, destination, trips = itinerary.len(), "trip lookup complete");
        Ok(itinerary)
    }
}

/// Extract an itinerary from a complete raw HTTP response.
pub fn parse_itinerary(response: &[u8]) -> Result<Itinerary, LookupError> {
    let json = isolate(response)?;
    trace!(
        json_len = json.len(),
        skipped = response.len() - json.len(),
        "isolated JSON body"
    );

    let tree: Value = serde_json::from_slice(json)?;
    Ok(extract_itinerary(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travelplanner::{MockTravelPlanner, TravelPlannerClient, TravelPlannerConfig};

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const SINGLE_TRIP: &str = r#"{"TripList":{"Trip":{"dur":"23","LegList":{"Leg":{"name":"Bus 176","Origin":{"name":"Duvbo","time":"10:00"},"Destination":{"name":"Universitetet","time":"10:23"}}}}}}"#;

    fn http_response(body: &str) -> Vec<u8> {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json;charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
        .into_bytes()
    }

    #[test]
    fn parse_single_trip_response() {
        let itinerary = parse_itinerary(&http_response(SINGLE_TRIP)).unwrap();

        assert_eq!(itinerary.len(), 1);
        let trip = &itinerary.trips()[0];
        assert_eq!(trip.duration(), "23");
        assert_eq!(trip.edges()[0].kind(), "Bus 176");
        assert_eq!(trip.departure().name(), "Duvbo");
        assert_eq!(trip.arrival().time(), "10:23");
    }

    #[test]
    fn error_page_has_no_json() {
        let response = b"HTTP/1.1 503 Service Unavailable\r\nContent-Type: text/plain\r\n\r\nTry again later\r\n";

        let err = parse_itinerary(response).unwrap_err();
        assert!(matches!(err, LookupError::NoJson(NoJson)));
    }

    #[test]
    fn cut_body_is_invalid_json() {
        // A closing brace survives but the document is incomplete
        let response = http_response(r#"{"TripList":{"Trip":{"dur":"23"}"#);

        let err = parse_itinerary(&response).unwrap_err();
        assert!(matches!(err, LookupError::InvalidJson(_)));
    }

    #[test]
    fn api_error_body_is_malformed() {
        let response = http_response(r#"{"StatusCode":1002,"Message":"Key is invalid"}"#);

        let err = parse_itinerary(&response).unwrap_err();
        match err {
            LookupError::MalformedResponse(ConversionError::MissingField(path)) => {
                assert_eq!(path, "TripList");
            }
            other => panic!("expected malformed response, got {other:?}"),
        }
    }

    #[test]
    fn error_display() {
        let err = LookupError::Truncated { capacity: 200_000 };
        assert_eq!(
            err.to_string(),
            "response filled the 200000-byte buffer and may be truncated"
        );

        let err = LookupError::NoJson(NoJson);
        assert_eq!(err.to_string(), "no JSON object found in response");

        let err = LookupError::MalformedResponse(ConversionError::MissingField(
            "TripList.Trip[0].dur".into(),
        ));
        assert_eq!(
            err.to_string(),
            "malformed response: missing required field: TripList.Trip[0].dur"
        );
    }

    #[tokio::test]
    async fn lookup_captured_response() {
        let mock = MockTravelPlanner::new("data/captured", 200_000).unwrap();
        let itinerary = TripLookup::new(mock)
            .lookup("Duvbo", "Universitetet")
            .await
            .unwrap();

        assert_eq!(itinerary.len(), 2);

        let direct = &itinerary.trips()[0];
        assert_eq!(direct.duration(), "23");
        assert_eq!(direct.edges().len(), 1);
        assert_eq!(direct.edges()[0].kind(), "buss 176");

        let with_change = &itinerary.trips()[1];
        assert_eq!(with_change.duration(), "31");
        let kinds: Vec<_> = with_change.edges().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, ["Gång", "pendeltåg 43", "buss 50"]);
        assert_eq!(with_change.departure().name(), "Duvbo");
        assert_eq!(with_change.arrival().name(), "Universitetet");
        assert_eq!(with_change.arrival().time(), "10:35");
    }

    #[tokio::test]
    async fn truncated_response_is_rejected() {
        let response = http_response(SINGLE_TRIP);
        let capacity = response.len() - 5;
        let mock = MockTravelPlanner::with_response("Duvbo", "Universitetet", response, capacity);

        let err = TripLookup::new(mock)
            .lookup("Duvbo", "Universitetet")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Truncated { capacity: c } if c == capacity));
    }

    #[tokio::test]
    async fn response_exactly_at_capacity_is_rejected() {
        let response = http_response(SINGLE_TRIP);
        let capacity = response.len();
        let mock = MockTravelPlanner::with_response("A", "B", response, capacity);

        let err = TripLookup::new(mock).lookup("A", "B").await.unwrap_err();
        assert!(matches!(err, LookupError::Truncated { .. }));
    }

    #[tokio::test]
    async fn unknown_route_is_transport_error() {
        let mock = MockTravelPlanner::with_response("A", "B", http_response(SINGLE_TRIP), 10_000);

        let err = TripLookup::new(mock).lookup("B", "A").await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(TransportError::Replay { .. })));
    }

    #[tokio::test]
    async fn connection_reset_mid_body_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.ends_with(b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            // Enough for the brace scan to find a span, then an RST
            socket
                .write_all(b"HTTP/1.1 200 OK\r\n\r\n{\"TripList\":{\"Trip\":{}}")
                .await
                .unwrap();
            socket.flush().await.unwrap();
            #[allow(deprecated)]
            socket.set_linger(Some(std::time::Duration::ZERO)).unwrap();
            drop(socket);
        });

        let config = TravelPlannerConfig::new("test-key")
            .with_host("127.0.0.1")
            .with_port(port)
            .with_timeout(5);
        let err = TripLookup::new(TravelPlannerClient::new(config))
            .lookup("Duvbo", "Universitetet")
            .await
            .unwrap_err();

        match err {
            LookupError::Transport(TransportError::Receive { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::ConnectionReset);
            }
            other => panic!("expected transport failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lookup_over_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let body = r#"{"TripList":{"Trip":[{"dur":"23","LegList":{"Leg":{"name":"Bus 176","Origin":{"name":"Duvbo","time":"10:00"},"Destination":{"name":"Universitetet","time":"10:23"}}}},{"dur":"31","LegList":{"Leg":[{"name":"Pendeltåg 43","Origin":{"name":"Duvbo","time":"10:02"},"Destination":{"name":"Karlberg","time":"10:12"}},{"name":"Buss 50","Origin":{"name":"Karlberg","time":"10:15"},"Destination":{"name":"Universitetet","time":"10:33"}}]}}]}}"#;
        let response = http_response(body);

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.ends_with(b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(&response).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8(request).unwrap()
        });

        let config = TravelPlannerConfig::new("test-key")
            .with_host("127.0.0.1")
            .with_port(port)
            .with_timeout(5);
        let lookup = TripLookup::new(TravelPlannerClient::new(config));
        let itinerary = lookup.lookup("Duvbo", "Universitetet").await.unwrap();

        assert_eq!(itinerary.len(), 2);
        assert_eq!(itinerary.trips()[0].edges().len(), 1);
        assert_eq!(itinerary.trips()[1].edges().len(), 2);
        assert_eq!(itinerary.trips()[1].edges()[0].kind(), "Pendeltåg 43");
        assert_eq!(itinerary.trips()[1].edges()[1].kind(), "Buss 50");

        let request = server.await.unwrap();
        assert!(request.starts_with(&format!(
            "GET http://127.0.0.1:{port}/api2/travelplannerv2/trip.json?key=test-key&originId=Duvbo&destId=Universitetet HTTP/1.1\r\n"
        )));
        assert!(request.contains("\r\nConnection: close\r\n"));
    }
}
