// Core algorithm exports
pub mod location;
pub mod matcher;
pub mod scoring;

pub use location::{Gazetteer, ResolvedLocation};
pub use matcher::{Matcher, RankOutcome, MAX_RESULTS};
pub use scoring::{calculate_match_score, score_breakdown};
