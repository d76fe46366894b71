use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{PlanId, PlanQuote, PlanRecord, PlanRequest};
use super::quote::PlanQuoter;
use super::repository::{PlanRepository, RepositoryError};
use super::PlanError;
use crate::catalog::RecipeCatalog;
use crate::nutrition::profile::DogProfile;
use crate::nutrition::NutritionError;
use crate::recommendation::Recommendation;

/// Service composing the quoter with plan storage.
pub struct PlanService<R> {
    quoter: Arc<PlanQuoter>,
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> PlanService<R>
where
    R: PlanRepository + 'static,
{
    pub fn new(repository: Arc<R>, quoter: PlanQuoter) -> Self {
        Self {
            quoter: Arc::new(quoter),
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_plan_id(&self) -> PlanId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        PlanId(format!("plan-{id:06}"))
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        self.quoter.catalog()
    }

    pub fn recommend(
        &self,
        profile: &DogProfile,
        limit: usize,
    ) -> Result<Recommendation, PlanServiceError> {
        Ok(self.quoter.recommend(profile, limit)?)
    }

    /// Price a plan without saving it.
    pub fn quote(&self, request: &PlanRequest) -> Result<PlanQuote, PlanServiceError> {
        Ok(self.quoter.quote(request)?)
    }

    /// Quote and persist a plan so checkout can pick it up later.
    pub fn save(&self, request: PlanRequest) -> Result<PlanRecord, PlanServiceError> {
        let quote = self.quoter.quote(&request)?;
        let record = PlanRecord {
            id: self.next_plan_id(),
            created_at: Utc::now(),
            request,
            quote,
        };

        let stored = self.repository.insert(record)?;
        info!(
            plan_id = %stored.id.0,
            dogs = stored.quote.dogs.len(),
            total_cents = stored.quote.total_cents,
            "saved plan"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &PlanId) -> Result<PlanRecord, PlanServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<PlanRecord>, PlanServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the plan service.
#[derive(Debug, thiserror::Error)]
pub enum PlanServiceError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Nutrition(#[from] NutritionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
