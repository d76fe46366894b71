use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::plans::router::{plan_handler, save_handler};
use crate::plans::PlanService;

fn json_request(uri: &str, payload: &Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn quote_route_prices_a_plan() {
    let (service, repository) = build_service();
    let router = router_with_service(service);
    let payload = serde_json::to_value(two_dog_request()).expect("serializes");

    let response = router
        .oneshot(json_request("/api/v1/plans/quote", &payload))
        .await
        .expect("route executes");

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("total_cents").and_then(Value::as_u64), Some(3843));
    assert_eq!(body["discounts"][1]["kind"], json!("first_box"));
    assert_eq!(repository.len(), 0, "quotes are not persisted");
}

#[tokio::test]
async fn quote_route_accepts_minimal_storefront_payload() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let payload = json!({
        "dogs": [{
            "profile": {
                "name": "Scout",
                "weight": {"value": 52, "unit": "lb"},
                "age": {"value": 18, "unit": "months"},
                "activity": "active"
            },
            "recipes": ["chicken"],
            "portion": "topper25"
        }]
    });

    let response = router
        .oneshot(json_request("/api/v1/plans/quote", &payload))
        .await
        .expect("route executes");

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["cadence_weeks"], json!(2));
    assert_eq!(body["dogs"][0]["portions"][0]["daily_cents"], json!(155));
}

#[tokio::test]
async fn quote_route_rejects_invalid_plans() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let payload = serde_json::to_value(single_dog_request(&["venison"])).expect("serializes");

    let response = router
        .oneshot(json_request("/api/v1/plans/quote", &payload))
        .await
        .expect("route executes");

    assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("venison"));
}

#[tokio::test]
async fn save_route_creates_and_get_route_returns_plan() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let router = crate::plans::plan_router(service.clone());
    let payload = serde_json::to_value(single_dog_request(&["beef"])).expect("serializes");

    let response = router
        .clone()
        .oneshot(json_request("/api/v1/plans", &payload))
        .await
        .expect("route executes");
    assert_status(&response, StatusCode::CREATED);
    let created = read_json_body(response).await;
    let id = created["id"].as_str().expect("id present").to_string();

    let response = router
        .oneshot(
            Request::get(format!("/api/v1/plans/{id}"))
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_status(&response, StatusCode::OK);
    let fetched = read_json_body(response).await;
    assert_eq!(fetched["quote"]["total_cents"], json!(6300));
}

#[tokio::test]
async fn recent_route_lists_summaries() {
    let (service, _) = build_service();
    service.save(two_dog_request()).expect("plan saves");
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/plans?limit=5")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["plans"][0]["dogs"], json!(["Biscuit", "Pepper"]));
}

#[tokio::test]
async fn plan_handler_returns_not_found_for_unknown_id() {
    let (service, _) = build_service();

    let response = plan_handler::<MemoryRepository>(
        State(Arc::new(service)),
        Path("plan-404404".to_string()),
    )
    .await;

    assert_status(&response, StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["plan_id"], json!("plan-404404"));
}

#[tokio::test]
async fn save_handler_maps_repository_errors() {
    let conflict = Arc::new(PlanService::new(Arc::new(ConflictRepository), quoter()));
    let response =
        save_handler::<ConflictRepository>(State(conflict), axum::Json(single_dog_request(&["beef"])))
            .await;
    assert_status(&response, StatusCode::CONFLICT);

    let offline = Arc::new(PlanService::new(Arc::new(UnavailableRepository), quoter()));
    let response = save_handler::<UnavailableRepository>(
        State(offline),
        axum::Json(single_dog_request(&["beef"])),
    )
    .await;
    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn recommendations_route_ranks_recipes() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let payload = json!({
        "profile": {
            "name": "Waffles",
            "weight": {"value": 30, "unit": "kg"},
            "age": {"value": 5, "unit": "years"},
            "body_condition": 8,
            "allergies": ["chicken"]
        },
        "limit": 3
    });

    let response = router
        .oneshot(json_request("/api/v1/recommendations", &payload))
        .await
        .expect("route executes");

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["ranked"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["ranked"][0]["recipe"], json!("turkey"));
    assert_eq!(body["excluded"][0]["recipe"], json!("chicken"));
    assert_eq!(body["weight_goal"], json!("lose"));
}

#[tokio::test]
async fn recipes_route_lists_catalog() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/recipes")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_status(&response, StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["recipes"].as_array().map(Vec::len), Some(5));
}
