//! Flight feed - remote acquisition and navigation of flight records.
//!
//! `AviationClient` talks to the aviationstack-style HTTP API;
//! [`FlightFeed`] owns the filtered ordered set and the navigation cursor.

pub mod client;
pub mod feed;

pub use client::{AviationClient, FeedError};
pub use feed::FlightFeed;
