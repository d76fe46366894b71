use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::nutrition::profile::DogProfile;
use crate::nutrition::portions::MealPortion;
use crate::nutrition::units::{Age, Weight};
use crate::plans::domain::{DogPlanRequest, PlanId, PlanRecord, PlanRequest};
use crate::plans::repository::{PlanRepository, RepositoryError};
use crate::plans::{plan_router, PlanQuoter, PlanService};

/// 16 kg neutered adult: RER 560 kcal, DER 896 kcal.
pub(super) fn biscuit() -> DogProfile {
    DogProfile::new("Biscuit", Weight::kilograms(16.0), Age::years(3.0))
}

/// 8 kg adult on a half topper.
pub(super) fn pepper() -> DogProfile {
    DogProfile::new("Pepper", Weight::kilograms(8.0), Age::years(6.0))
}

pub(super) fn single_dog_request(recipes: &[&str]) -> PlanRequest {
    let mut dog = DogPlanRequest::new(biscuit());
    dog.recipes = recipes.iter().map(|slug| slug.to_string()).collect();
    PlanRequest {
        dogs: vec![dog],
        cadence_weeks: 2,
        first_box: false,
        start_on: None,
    }
}

pub(super) fn two_dog_request() -> PlanRequest {
    let mut first = DogPlanRequest::new(biscuit());
    first.recipes = vec!["beef".to_string()];

    let mut second = DogPlanRequest::new(pepper());
    second.recipes = vec!["turkey".to_string(), "chicken".to_string()];
    second.portion = MealPortion::Topper50;

    PlanRequest {
        dogs: vec![first, second],
        cadence_weeks: 2,
        first_box: true,
        start_on: None,
    }
}

pub(super) fn quoter() -> PlanQuoter {
    PlanQuoter::standard()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<PlanRecord>>>,
}

impl PlanRepository for MemoryRepository {
    fn insert(&self, record: PlanRecord) -> Result<PlanRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &PlanId) -> Result<Option<PlanRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<PlanRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

pub(super) struct ConflictRepository;

impl PlanRepository for ConflictRepository {
    fn insert(&self, _record: PlanRecord) -> Result<PlanRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &PlanId) -> Result<Option<PlanRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<PlanRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl PlanRepository for UnavailableRepository {
    fn insert(&self, _record: PlanRecord) -> Result<PlanRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &PlanId) -> Result<Option<PlanRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<PlanRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (PlanService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = PlanService::new(Arc::new(repository.clone()), quoter());
    (service, repository)
}

pub(super) fn router_with_service(service: PlanService<MemoryRepository>) -> axum::Router {
    plan_router(Arc::new(service))
}

pub(super) fn assert_status(response: &Response, status: StatusCode) {
    assert_eq!(response.status(), status);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
