use super::domain::{PlanId, PlanRecord};

/// Storage abstraction so the plan service can be exercised without the hosted database.
pub trait PlanRepository: Send + Sync {
    fn insert(&self, record: PlanRecord) -> Result<PlanRecord, RepositoryError>;
    fn fetch(&self, id: &PlanId) -> Result<Option<PlanRecord>, RepositoryError>;
    /// Most recently created plans first.
    fn recent(&self, limit: usize) -> Result<Vec<PlanRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
