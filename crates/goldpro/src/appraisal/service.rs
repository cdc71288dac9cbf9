use std::io::Cursor;
use std::sync::Arc;

use super::domain::{
    AppraisalError, AppraiserDetails, Article, ArticleRequest, CustomerDetails, LoanDetails,
};
use super::import::{ArticleImportError, CsvArticleImporter};
use super::report::views::ValuationSnapshot;
use super::report::{compose_receipt, ReceiptView};
use super::repository::{RepositoryError, SessionRepository};
use super::session::ArticleDraft;
use super::valuation::MarketInputs;

/// Service composing the session operations over the storage seam. Every
/// operation loads a snapshot, mutates it, and stores it back only on
/// success, so partial failures never leave a half-applied session.
pub struct AppraisalService<R> {
    repository: Arc<R>,
}

impl<R> AppraisalService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolve, validate, and commit one article.
    pub fn add_article(&self, request: ArticleRequest) -> Result<Article, AppraisalServiceError> {
        let mut session = self.repository.load()?;
        let article = session.commit_article(ArticleDraft::from(request))?;
        self.repository.store(session)?;
        Ok(article)
    }

    /// Parse a CSV article sheet and commit every row. The whole batch is
    /// applied atomically: a malformed row or a validation failure leaves
    /// the stored session unchanged.
    pub fn import_articles(&self, csv: &str) -> Result<Vec<Article>, AppraisalServiceError> {
        let requests = CsvArticleImporter::from_reader(Cursor::new(csv.as_bytes()))?;

        let mut session = self.repository.load()?;
        let mut committed = Vec::with_capacity(requests.len());
        for request in requests {
            committed.push(session.commit_article(ArticleDraft::from(request))?);
        }
        self.repository.store(session)?;
        Ok(committed)
    }

    /// Remove the last-committed article, if any.
    pub fn undo_last(&self) -> Result<Option<Article>, AppraisalServiceError> {
        let mut session = self.repository.load()?;
        let removed = session.undo_last();
        self.repository.store(session)?;
        Ok(removed)
    }

    /// Clear the valuation while keeping the appraiser block.
    pub fn reset(&self) -> Result<(), AppraisalServiceError> {
        let mut session = self.repository.load()?;
        session.reset();
        self.repository.store(session)?;
        Ok(())
    }

    /// Current ledger, totals, and eligibility figures for display.
    pub fn summary(&self) -> Result<ValuationSnapshot, AppraisalServiceError> {
        let session = self.repository.load()?;
        Ok(ValuationSnapshot::from_session(&session))
    }

    /// Printable receipt data; fails while the ledger is empty.
    pub fn receipt(&self) -> Result<ReceiptView, AppraisalServiceError> {
        let session = self.repository.load()?;
        Ok(compose_receipt(&session)?)
    }

    pub fn update_market(&self, market: MarketInputs) -> Result<(), AppraisalServiceError> {
        let mut session = self.repository.load()?;
        session.set_market(market);
        self.repository.store(session)?;
        Ok(())
    }

    pub fn update_appraiser(
        &self,
        appraiser: AppraiserDetails,
    ) -> Result<(), AppraisalServiceError> {
        let mut session = self.repository.load()?;
        session.set_appraiser(appraiser);
        self.repository.store(session)?;
        Ok(())
    }

    pub fn update_customer(&self, customer: CustomerDetails) -> Result<(), AppraisalServiceError> {
        let mut session = self.repository.load()?;
        session.set_customer(customer);
        self.repository.store(session)?;
        Ok(())
    }

    pub fn update_loan(&self, loan: LoanDetails) -> Result<(), AppraisalServiceError> {
        let mut session = self.repository.load()?;
        session.set_loan(loan);
        self.repository.store(session)?;
        Ok(())
    }

    pub fn attach_image(&self, reference: Option<String>) -> Result<(), AppraisalServiceError> {
        let mut session = self.repository.load()?;
        session.attach_image(reference);
        self.repository.store(session)?;
        Ok(())
    }
}

/// Error raised by the appraisal service.
#[derive(Debug, thiserror::Error)]
pub enum AppraisalServiceError {
    #[error(transparent)]
    Validation(#[from] AppraisalError),
    #[error(transparent)]
    Import(#[from] ArticleImportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
