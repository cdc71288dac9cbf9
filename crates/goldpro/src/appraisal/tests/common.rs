use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::appraisal::domain::ArticleRequest;
use crate::appraisal::purity::PurityMode;
use crate::appraisal::repository::{RepositoryError, SessionRepository};
use crate::appraisal::service::AppraisalService;
use crate::appraisal::session::AppraisalSession;

pub(crate) fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid session date")
}

/// In-memory store used across the service and routing tests.
#[derive(Clone)]
pub(crate) struct MemoryStore {
    session: Arc<Mutex<AppraisalSession>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            session: Arc::new(Mutex::new(AppraisalSession::new(session_date()))),
        }
    }
}

impl SessionRepository for MemoryStore {
    fn load(&self) -> Result<AppraisalSession, RepositoryError> {
        Ok(self.session.lock().expect("session mutex poisoned").clone())
    }

    fn store(&self, session: AppraisalSession) -> Result<(), RepositoryError> {
        *self.session.lock().expect("session mutex poisoned") = session;
        Ok(())
    }
}

impl MemoryStore {
    pub(crate) fn snapshot(&self) -> AppraisalSession {
        self.session.lock().expect("session mutex poisoned").clone()
    }
}

/// Store that always fails, for exercising the 500 paths.
pub(crate) struct UnavailableStore;

impl SessionRepository for UnavailableStore {
    fn load(&self) -> Result<AppraisalSession, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn store(&self, _session: AppraisalSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(crate) fn build_service() -> (Arc<AppraisalService<MemoryStore>>, MemoryStore) {
    let store = MemoryStore::default();
    let service = Arc::new(AppraisalService::new(Arc::new(store.clone())));
    (service, store)
}

pub(crate) fn necklace_request() -> ArticleRequest {
    ArticleRequest {
        name: "Necklace".to_string(),
        qty: 1,
        gross: 10.0,
        stone: 0.5,
        purity_mode: PurityMode::Touch,
        selector: Some("85".to_string()),
    }
}

pub(crate) fn karat_ring_request() -> ArticleRequest {
    ArticleRequest {
        name: "Rings".to_string(),
        qty: 2,
        gross: 4.25,
        stone: 0.0,
        purity_mode: PurityMode::Karat,
        selector: Some("22krt".to_string()),
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
