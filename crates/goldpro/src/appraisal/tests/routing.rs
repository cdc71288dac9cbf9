use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::appraisal::router::{appraisal_router, summary_handler, undo_article_handler};
use crate::appraisal::service::AppraisalService;

#[tokio::test]
async fn add_article_route_creates_entries() {
    let (service, _) = build_service();
    let router = appraisal_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/appraisal/articles")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&necklace_request()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("net"), Some(&json!(8.075)));
    assert!(payload.get("id").is_some());
}

#[tokio::test]
async fn add_article_route_rejects_zero_gross() {
    let (service, _) = build_service();
    let router = appraisal_router(service);

    let mut request = necklace_request();
    request.gross = 0.0;

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/appraisal/articles")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&request).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("gross weight"));
}

#[tokio::test]
async fn import_route_rejects_malformed_sheets() {
    let (service, _) = build_service();
    let router = appraisal_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/appraisal/articles/import")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({
                        "csv": "Article,Qty,Gross,Stone,Purity\nChain,1,heavy,0,85\n"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn undo_handler_reports_removed_article() {
    let (service, _) = build_service();
    service.add_article(necklace_request()).expect("seed");

    let response = undo_article_handler::<MemoryStore>(State(service.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("removed").map(Value::is_object).unwrap_or(false));

    let response = undo_article_handler::<MemoryStore>(State(service)).await;
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("removed"), Some(&Value::Null));
}

#[tokio::test]
async fn summary_handler_returns_snapshot() {
    let (service, _) = build_service();
    service.add_article(necklace_request()).expect("seed");

    let response = summary_handler::<MemoryStore>(State(service)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .pointer("/totals/net_display")
            .and_then(Value::as_str),
        Some("8.075")
    );
    assert_eq!(
        payload
            .pointer("/articles/0/purity_label")
            .and_then(Value::as_str),
        Some("85%")
    );
}

#[tokio::test]
async fn receipt_route_requires_entries() {
    let (service, _) = build_service();
    let router = appraisal_router(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/appraisal/receipt")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn market_and_reset_routes_mutate_the_session() {
    let (service, store) = build_service();
    let router = appraisal_router(service.clone());

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::put("/api/v1/appraisal/market")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({ "gold_rate": 6350.0, "ltv": 75.0 })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(store.snapshot().market().loan_rate_per_gram(), 4762.5);

    service.add_article(necklace_request()).expect("seed");
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/appraisal/reset")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(store.snapshot().articles().is_empty());
}

#[tokio::test]
async fn handlers_surface_store_failures_as_internal_errors() {
    let service = Arc::new(AppraisalService::new(Arc::new(UnavailableStore)));
    let response = summary_handler::<UnavailableStore>(State(service)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
