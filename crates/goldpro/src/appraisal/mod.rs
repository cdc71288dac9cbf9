//! Gold-loan appraisal: session state, valuation core, CSV intake, and
//! receipt composition.
//!
//! The valuation math lives in [`valuation`] and is pure; all mutation goes
//! through [`session::AppraisalSession`], and the service/router pair
//! exposes the single active session behind the [`repository`] seam.

pub mod domain;
pub mod import;
pub mod purity;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;
pub mod valuation;

#[cfg(test)]
mod tests;

pub use domain::{
    AppraisalError, AppraiserDetails, Article, ArticleCategory, ArticleId, ArticleRequest,
    CustomerDetails, LoanDetails, BANKS,
};
pub use import::{ArticleImportError, CsvArticleImporter};
pub use purity::{KaratGrade, Purity, PurityMode, FALLBACK_TOUCH_PERCENT, TOUCH_PERCENT_OPTIONS};
pub use report::{
    compose_receipt, render_receipt_text, rupees_in_words, ArticleView, EligibilityView,
    ReceiptView, TotalsView, ValuationSnapshot,
};
pub use repository::{RepositoryError, SessionRepository};
pub use router::appraisal_router;
pub use service::{AppraisalService, AppraisalServiceError};
pub use session::{AppraisalSession, ArticleDraft};
pub use valuation::{net_weight, Eligibility, MarketInputs, Totals};
