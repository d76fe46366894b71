use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{PlanId, PlanRequest, PlanSummaryView};
use super::repository::{PlanRepository, RepositoryError};
use super::service::{PlanService, PlanServiceError};
use crate::nutrition::profile::DogProfile;
use crate::recommendation::DEFAULT_RECOMMENDATION_LIMIT;

const DEFAULT_RECENT_LIMIT: usize = 10;
const MAX_RECENT_LIMIT: usize = 100;

/// Router builder exposing the plan builder endpoints.
pub fn plan_router<R>(service: Arc<PlanService<R>>) -> Router
where
    R: PlanRepository + 'static,
{
    Router::new()
        .route("/api/v1/recipes", get(recipes_handler::<R>))
        .route(
            "/api/v1/recommendations",
            post(recommendations_handler::<R>),
        )
        .route("/api/v1/plans/quote", post(quote_handler::<R>))
        .route(
            "/api/v1/plans",
            post(save_handler::<R>).get(recent_handler::<R>),
        )
        .route("/api/v1/plans/:plan_id", get(plan_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    pub(crate) profile: DogProfile,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecentQuery {
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn recipes_handler<R>(State(service): State<Arc<PlanService<R>>>) -> Response
where
    R: PlanRepository + 'static,
{
    let recipes = service.catalog().recipes().to_vec();
    (StatusCode::OK, axum::Json(json!({ "recipes": recipes }))).into_response()
}

pub(crate) async fn recommendations_handler<R>(
    State(service): State<Arc<PlanService<R>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    R: PlanRepository + 'static,
{
    let limit = request.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    match service.recommend(&request.profile, limit) {
        Ok(recommendation) => (StatusCode::OK, axum::Json(recommendation)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn quote_handler<R>(
    State(service): State<Arc<PlanService<R>>>,
    axum::Json(request): axum::Json<PlanRequest>,
) -> Response
where
    R: PlanRepository + 'static,
{
    match service.quote(&request) {
        Ok(quote) => (StatusCode::OK, axum::Json(quote)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_handler<R>(
    State(service): State<Arc<PlanService<R>>>,
    axum::Json(request): axum::Json<PlanRequest>,
) -> Response
where
    R: PlanRepository + 'static,
{
    match service.save(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recent_handler<R>(
    State(service): State<Arc<PlanService<R>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: PlanRepository + 'static,
{
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .min(MAX_RECENT_LIMIT);
    match service.recent(limit) {
        Ok(records) => {
            let plans: Vec<PlanSummaryView> =
                records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, axum::Json(json!({ "plans": plans }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn plan_handler<R>(
    State(service): State<Arc<PlanService<R>>>,
    Path(plan_id): Path<String>,
) -> Response
where
    R: PlanRepository + 'static,
{
    let id = PlanId(plan_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(PlanServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "plan not found",
                "plan_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

fn error_response(error: PlanServiceError) -> Response {
    let status = match &error {
        PlanServiceError::Plan(_) | PlanServiceError::Nutrition(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PlanServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        PlanServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        PlanServiceError::Repository(RepositoryError::Unavailable(_)) => {
            tracing::warn!(%error, "plan repository unavailable");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
