//! SL Travel Planner client.
//!
//! This module talks to the SL Travel Planner v2 API (`api.sl.se`) over a
//! plain TCP socket and turns its responses into domain types.
//!
//! Key characteristics of the API as consumed here:
//! - One unencrypted HTTP/1.1 request per lookup, `Connection: close`, so the
//!   response ends when the server closes the socket
//! - The JSON body is cut out of the raw response by brace scanning rather
//!   than by parsing headers (see [`isolate`])
//! - Any list in the body (`Trip`, `Leg`) is sent as a bare object when it
//!   has a single element (see [`as_sequence`])

mod client;
mod convert;
mod error;
mod mock;
mod payload;
mod source;

pub use client::{RESPONSE_FORMAT, TravelPlannerClient, TravelPlannerConfig, compose_request};
pub use convert::{ConversionError, as_sequence, extract_itinerary};
pub use error::TransportError;
pub use mock::MockTravelPlanner;
pub use payload::{NoJson, isolate};
pub use source::{RawResponse, TripSource};
