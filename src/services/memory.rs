use crate::models::Candidate;
use crate::services::{CandidateRepository, RepositoryError};
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed candidate pool held in memory
///
/// Used for local runs and tests. Only available, unassigned helpers are
/// returned, in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    candidates: Vec<Candidate>,
}

impl InMemoryRepository {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Load helpers from a JSON array file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let candidates: Vec<Candidate> = serde_json::from_str(&contents)?;

        tracing::info!(
            "Loaded {} helpers from {}",
            candidates.len(),
            path.as_ref().display()
        );

        Ok(Self::new(candidates))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[async_trait]
impl CandidateRepository for InMemoryRepository {
    async fn available_candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self
            .candidates
            .iter()
            .filter(|candidate| candidate.is_open())
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillCategory;

    fn helper(id: &str, is_available: bool, is_assigned: bool) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: id.to_string(),
            contact_number: "0".to_string(),
            skill: SkillCategory::Cleaning,
            experience_years: None,
            languages: vec![],
            preferred_areas: vec![],
            working_hours: None,
            gender: None,
            is_available,
            is_assigned,
        }
    }

    #[test]
    fn test_only_open_helpers_returned() {
        let repository = InMemoryRepository::new(vec![
            helper("open", true, false),
            helper("busy", true, true),
            helper("away", false, false),
        ]);

        let pool = tokio_test::block_on(repository.available_candidates()).unwrap();

        assert_eq!(repository.len(), 3);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, "open");
    }

    #[test]
    fn test_missing_seed_file() {
        let result = InMemoryRepository::from_json_file("/nonexistent/helpers.json");
        assert!(matches!(result, Err(SeedError::Io(_))));
    }

    #[test]
    fn test_seed_file_round_trip() {
        let path = std::env::temp_dir().join(format!("helpers-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"id": "h1", "name": "Asha", "contactNumber": "1", "skill": "Cook"}]"#,
        )
        .unwrap();

        let repository = InMemoryRepository::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(repository.len(), 1);
    }
}
