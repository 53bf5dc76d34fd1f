// Service exports
pub mod appwrite;
pub mod memory;
pub mod postgres;

pub use appwrite::{AppwriteClient, AppwriteError};
pub use memory::{InMemoryRepository, SeedError};
pub use postgres::{PostgresClient, PostgresError};

use crate::models::Candidate;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while querying a candidate repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("PostgreSQL: {0}")]
    Postgres(#[from] PostgresError),

    #[error("Appwrite: {0}")]
    Appwrite(#[from] AppwriteError),

    #[error("Seed data: {0}")]
    Seed(#[from] SeedError),
}

/// Source of the candidate pool
///
/// Implementations return every helper that is currently available and
/// unassigned, of any skill. Skill filtering is left to scoring.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn available_candidates(&self) -> Result<Vec<Candidate>, RepositoryError>;

    async fn health_check(&self) -> bool;

    /// Backend name for health reporting and logs
    fn name(&self) -> &'static str;
}
