use crate::models::domain::{MatchResult, ScoreBreakdown, SkillCategory, WorkingHours};
use serde::{Deserialize, Serialize};

/// A ranked helper as returned to the booking layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub name: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    pub skill: SkillCategory,
    #[serde(rename = "experienceYears")]
    pub experience_years: Option<u32>,
    pub languages: Vec<String>,
    #[serde(rename = "preferredAreas")]
    pub preferred_areas: Vec<String>,
    #[serde(rename = "workingHours")]
    pub working_hours: Option<WorkingHours>,
    pub gender: Option<String>,
    pub score: u8,
    #[serde(rename = "scoreBreakdown")]
    pub score_breakdown: ScoreBreakdown,
}

impl From<MatchResult> for MatchEntry {
    fn from(result: MatchResult) -> Self {
        let candidate = result.candidate;
        Self {
            candidate_id: candidate.id,
            name: candidate.name,
            contact_number: candidate.contact_number,
            skill: candidate.skill,
            experience_years: candidate.experience_years,
            languages: candidate.languages,
            preferred_areas: candidate.preferred_areas,
            working_hours: candidate.working_hours,
            gender: candidate.gender,
            score: result.score,
            score_breakdown: result.breakdown,
        }
    }
}

/// Response for the find matches endpoint, successful or not
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub success: bool,
    #[serde(rename = "requestId")]
    pub request_id: Option<String>,
    pub matches: Vec<MatchEntry>,
    pub message: String,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "extractedAreas")]
    pub extracted_areas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl MatchResponse {
    /// Failed response: no matches, an error code and a message
    pub fn failure(error: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: None,
            matches: Vec::new(),
            message: message.into(),
            total_candidates: 0,
            extracted_areas: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// Response for the location preview endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractAreasResponse {
    pub address: String,
    pub areas: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub repository: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
