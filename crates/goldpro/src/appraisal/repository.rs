use super::session::AppraisalSession;

/// Storage seam for the single active session so the service module can be
/// exercised in isolation. Implementations hand out a snapshot and accept
/// a replacement; the service mutates only the snapshot, so a failed
/// operation leaves the stored session untouched.
pub trait SessionRepository: Send + Sync {
    fn load(&self) -> Result<AppraisalSession, RepositoryError>;
    fn store(&self, session: AppraisalSession) -> Result<(), RepositoryError>;
}

/// Error enumeration for session store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
