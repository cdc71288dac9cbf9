use chrono::NaiveDate;
use goldpro::appraisal::{AppraisalSession, MarketInputs, RepositoryError, SessionRepository};
use goldpro::config::MarketConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Single-session in-memory store. The service clones the session out,
/// mutates the clone, and replaces it, so readers never observe a
/// half-applied operation.
pub(crate) struct InMemorySessionRepository {
    session: Mutex<AppraisalSession>,
}

impl InMemorySessionRepository {
    pub(crate) fn new(session: AppraisalSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self) -> Result<AppraisalSession, RepositoryError> {
        Ok(self.session.lock().expect("session mutex poisoned").clone())
    }

    fn store(&self, session: AppraisalSession) -> Result<(), RepositoryError> {
        *self.session.lock().expect("session mutex poisoned") = session;
        Ok(())
    }
}

/// Session seeded from configuration: today's dates plus the configured
/// market inputs.
pub(crate) fn seeded_session(today: NaiveDate, market: &MarketConfig) -> AppraisalSession {
    let mut session = AppraisalSession::new(today);
    session.set_market(MarketInputs {
        gold_rate: market.gold_rate,
        ltv: market.ltv,
    });
    session
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
