//! Domain types for a looked-up trip plan.
//!
//! The model is a plain owned tree: an `Itinerary` owns its trips, a `Trip`
//! owns its edges, and an `Edge` owns its two stations. Every type enforces
//! its invariants at construction time, so code that receives one can trust
//! that no field is missing and no collection is empty.

mod edge;
mod error;
mod itinerary;
mod station;
mod trip;

pub use edge::Edge;
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use station::Station;
pub use trip::Trip;
