use crate::error::MatchError;
use crate::models::domain::{ServiceRequest, SkillCategory, TimeWindow};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find helpers for a booking
///
/// Fields default to empty so that missing values surface as validation
/// errors rather than JSON payload errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(rename = "requestId", alias = "request_id", default)]
    pub request_id: Option<String>,
    #[validate(length(min = 1, message = "skill is required"))]
    #[serde(alias = "skillCategory", default)]
    pub skill: String,
    #[validate(length(min = 1, message = "timeWindow is required"))]
    #[serde(rename = "timeWindow", alias = "preferredTime", alias = "time_window", default)]
    pub time_window: String,
    #[validate(length(min = 1, max = 500, message = "address must be 1-500 characters"))]
    #[serde(default)]
    pub address: String,
}

impl FindMatchesRequest {
    /// Validate the raw payload and convert it into a [`ServiceRequest`]
    ///
    /// A missing request id is replaced by a generated one.
    pub fn into_service_request(self) -> Result<ServiceRequest, MatchError> {
        self.validate()
            .map_err(|errors| MatchError::Validation(errors.to_string()))?;

        let skill: SkillCategory = self.skill.parse().map_err(MatchError::Validation)?;
        let time_window: TimeWindow = self.time_window.parse().map_err(MatchError::Validation)?;

        let address = self.address.trim();
        if address.is_empty() {
            return Err(MatchError::Validation("address must not be blank".to_string()));
        }

        let request_id = self
            .request_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(ServiceRequest {
            request_id,
            skill,
            time_window,
            address: address.to_string(),
        })
    }
}

/// Request to preview which areas an address resolves to
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractAreasRequest {
    #[validate(length(min = 1, max = 500))]
    pub address: String,
}
