use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AppraiserDetails, ArticleRequest, CustomerDetails, LoanDetails};
use super::repository::SessionRepository;
use super::service::{AppraisalService, AppraisalServiceError};
use super::valuation::MarketInputs;

/// Router builder exposing the appraisal session over HTTP.
pub fn appraisal_router<R>(service: Arc<AppraisalService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/appraisal/articles", post(add_article_handler::<R>))
        .route(
            "/api/v1/appraisal/articles/import",
            post(import_articles_handler::<R>),
        )
        .route(
            "/api/v1/appraisal/articles/last",
            delete(undo_article_handler::<R>),
        )
        .route("/api/v1/appraisal/summary", get(summary_handler::<R>))
        .route("/api/v1/appraisal/receipt", get(receipt_handler::<R>))
        .route("/api/v1/appraisal/market", put(market_handler::<R>))
        .route("/api/v1/appraisal/appraiser", put(appraiser_handler::<R>))
        .route("/api/v1/appraisal/customer", put(customer_handler::<R>))
        .route("/api/v1/appraisal/loan", put(loan_handler::<R>))
        .route("/api/v1/appraisal/reset", post(reset_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImportRequest {
    pub(crate) csv: String,
}

pub(crate) async fn add_article_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(request): axum::Json<ArticleRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.add_article(request) {
        Ok(article) => (StatusCode::CREATED, axum::Json(article)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn import_articles_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(request): axum::Json<ImportRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.import_articles(&request.csv) {
        Ok(articles) => {
            let payload = json!({
                "imported": articles.len(),
                "articles": articles,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn undo_article_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.undo_last() {
        Ok(removed) => {
            let payload = json!({ "removed": removed });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn summary_handler<R>(State(service): State<Arc<AppraisalService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.summary() {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn receipt_handler<R>(State(service): State<Arc<AppraisalService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.receipt() {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn market_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(market): axum::Json<MarketInputs>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.update_market(market) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn appraiser_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(appraiser): axum::Json<AppraiserDetails>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.update_appraiser(appraiser) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn customer_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(customer): axum::Json<CustomerDetails>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.update_customer(customer) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn loan_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(loan): axum::Json<LoanDetails>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.update_loan(loan) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn reset_handler<R>(State(service): State<Arc<AppraisalService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.reset() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AppraisalServiceError) -> Response {
    let status = match &err {
        AppraisalServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppraisalServiceError::Import(_) => StatusCode::BAD_REQUEST,
        AppraisalServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
