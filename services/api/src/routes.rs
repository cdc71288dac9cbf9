use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use goldpro::appraisal::{appraisal_router, AppraisalService, SessionRepository};

pub(crate) fn with_appraisal_routes<R>(service: Arc<AppraisalService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    appraisal_router(service.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/appraisal/image",
            axum::routing::put(attach_image_endpoint::<R>),
        )
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageRequest {
    /// Opaque storage reference for the collateral photo. `null` clears
    /// the attachment.
    pub(crate) reference: Option<String>,
}

/// Attach or clear the collateral image reference. The reference is kept
/// opaque, but it must at least look like an image file.
pub(crate) async fn attach_image_endpoint<R>(
    Extension(service): Extension<Arc<AppraisalService<R>>>,
    Json(request): Json<ImageRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    if let Some(reference) = &request.reference {
        let looks_like_image = mime_guess::from_path(reference)
            .first()
            .map(|mime| mime.type_() == mime_guess::mime::IMAGE)
            .unwrap_or(false);
        if !looks_like_image {
            let payload = json!({
                "error": format!("'{reference}' does not name an image file"),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    }

    match service.attach_image(request.reference) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
