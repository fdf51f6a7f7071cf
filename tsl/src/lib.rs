//! Public-transit trip lookup.
//!
//! Asks the SL Travel Planner for trips between two stations over a raw
//! HTTP socket, cuts the JSON body out of the response, and turns it into
//! an itinerary of trips, edges and stations for console output.

pub mod cli;
pub mod config;
pub mod domain;
pub mod lookup;
pub mod render;
pub mod travelplanner;
