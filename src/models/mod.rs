// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, MatchResult, ScoreBreakdown, ServiceRequest, SkillCategory, TimeWindow, WorkingHours,
};
pub use requests::{ExtractAreasRequest, FindMatchesRequest};
pub use responses::{ErrorResponse, ExtractAreasResponse, HealthResponse, MatchEntry, MatchResponse};
