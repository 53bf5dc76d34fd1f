//! Helper Match - matching and ranking service for household helper bookings
//!
//! Given a service request (skill, preferred time window, free-text address)
//! and a pool of available helpers, the engine scores every helper, drops
//! non-matches and returns the top five.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{Gazetteer, Matcher, RankOutcome, MAX_RESULTS};
pub use error::MatchError;
pub use models::{Candidate, FindMatchesRequest, MatchResponse, MatchResult, ServiceRequest};
