use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    AppraisalError, AppraiserDetails, Article, ArticleCategory, ArticleId, ArticleRequest,
    CustomerDetails, LoanDetails,
};
use super::purity::{Purity, PurityMode};
use super::valuation::{net_weight, Eligibility, MarketInputs, Totals};

/// Editable article form state accumulated before commit. Validation
/// happens once, at commit; until then the draft is free to hold any
/// combination of weights.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft {
    pub category: ArticleCategory,
    pub qty: u32,
    pub gross: f64,
    pub stone: f64,
    pub purity: Purity,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self {
            category: ArticleCategory::Necklace,
            qty: 1,
            gross: 0.0,
            stone: 0.0,
            purity: Purity::default_touch(),
        }
    }
}

impl ArticleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switching notation discards the prior selector and installs the
    /// target mode's default.
    pub fn set_purity_mode(&mut self, mode: PurityMode) {
        if self.purity.mode() != mode {
            self.purity = match mode {
                PurityMode::Touch => Purity::default_touch(),
                PurityMode::Karat => Purity::default_karat(),
            };
        }
    }

    /// Derived net weight for live display; recomputed on every call.
    pub fn net_preview(&self) -> f64 {
        net_weight(self.gross, self.stone, self.purity.fraction())
    }

    /// After an "add another" commit the weights reset while category and
    /// purity selection stick for the next entry.
    pub fn clear_weights(&mut self) {
        self.qty = 1;
        self.gross = 0.0;
        self.stone = 0.0;
    }
}

impl From<ArticleRequest> for ArticleDraft {
    fn from(request: ArticleRequest) -> Self {
        Self {
            category: ArticleCategory::parse(&request.name),
            qty: request.qty,
            gross: request.gross,
            stone: request.stone,
            purity: Purity::resolve(request.purity_mode, request.selector.as_deref()),
        }
    }
}

/// In-memory appraisal session: one operator, one borrower, one ledger.
/// Totals and eligibility are derived from the article collection on every
/// read; nothing derived is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalSession {
    appraiser: AppraiserDetails,
    customer: CustomerDetails,
    loan: LoanDetails,
    market: MarketInputs,
    collateral_image: Option<String>,
    articles: Vec<Article>,
    article_sequence: u64,
}

impl AppraisalSession {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            appraiser: AppraiserDetails::default(),
            customer: CustomerDetails::default(),
            loan: LoanDetails::starting(today),
            market: MarketInputs::default(),
            collateral_image: None,
            articles: Vec::new(),
            article_sequence: 0,
        }
    }

    /// Validate and append a drafted article. The stone weight may be zero
    /// or exceed the gross (net clamps to zero); only a non-positive gross
    /// is rejected.
    pub fn commit_article(&mut self, draft: ArticleDraft) -> Result<Article, AppraisalError> {
        if draft.gross <= 0.0 {
            return Err(AppraisalError::InvalidGrossWeight { gross: draft.gross });
        }

        self.article_sequence += 1;
        let article = Article {
            id: ArticleId(format!("art-{:06}", self.article_sequence)),
            net: net_weight(draft.gross, draft.stone, draft.purity.fraction()),
            category: draft.category,
            qty: draft.qty,
            gross: draft.gross,
            stone: draft.stone,
            purity: draft.purity,
        };

        self.articles.push(article.clone());
        Ok(article)
    }

    /// Remove the last-committed article. Articles can only be removed
    /// from the tail; an empty ledger is a no-op.
    pub fn undo_last(&mut self) -> Option<Article> {
        self.articles.pop()
    }

    /// Clear the ledger, collateral image, customer block, loan number,
    /// and sanction amount. The appraiser block and loan dates survive so
    /// the operator can start the next valuation immediately.
    pub fn reset(&mut self) {
        self.articles.clear();
        self.collateral_image = None;
        self.customer = CustomerDetails::default();
        self.loan.loan_number.clear();
        self.loan.sanction_amount = 0.0;
    }

    pub fn totals(&self) -> Totals {
        Totals::aggregate(&self.articles)
    }

    pub fn eligibility(&self) -> Eligibility {
        Eligibility::compute(self.market, &self.totals())
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn appraiser(&self) -> &AppraiserDetails {
        &self.appraiser
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    pub fn loan(&self) -> &LoanDetails {
        &self.loan
    }

    pub fn market(&self) -> MarketInputs {
        self.market
    }

    pub fn collateral_image(&self) -> Option<&str> {
        self.collateral_image.as_deref()
    }

    pub fn set_appraiser(&mut self, appraiser: AppraiserDetails) {
        self.appraiser = appraiser;
    }

    pub fn set_customer(&mut self, customer: CustomerDetails) {
        self.customer = customer;
    }

    pub fn set_loan(&mut self, loan: LoanDetails) {
        self.loan = loan;
    }

    pub fn set_market(&mut self, market: MarketInputs) {
        self.market = market;
    }

    pub fn attach_image(&mut self, reference: Option<String>) {
        self.collateral_image = reference;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appraisal::purity::KaratGrade;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    }

    fn necklace_draft() -> ArticleDraft {
        ArticleDraft {
            gross: 10.0,
            stone: 0.5,
            ..ArticleDraft::default()
        }
    }

    #[test]
    fn commit_assigns_sequential_ids_and_derives_net() {
        let mut session = AppraisalSession::new(today());

        let first = session
            .commit_article(necklace_draft())
            .expect("valid draft commits");
        assert_eq!(first.id, ArticleId("art-000001".to_string()));
        assert_eq!(first.net, 8.075);

        let second = session
            .commit_article(necklace_draft())
            .expect("valid draft commits");
        assert_eq!(second.id, ArticleId("art-000002".to_string()));
    }

    #[test]
    fn commit_rejects_non_positive_gross() {
        let mut session = AppraisalSession::new(today());
        let mut draft = ArticleDraft::new();
        draft.gross = 0.0;

        let err = session.commit_article(draft).expect_err("zero gross rejected");
        assert_eq!(err, AppraisalError::InvalidGrossWeight { gross: 0.0 });
        assert!(session.articles().is_empty());
    }

    #[test]
    fn stone_exceeding_gross_clamps_net_to_zero() {
        let mut session = AppraisalSession::new(today());
        let draft = ArticleDraft {
            gross: 1.0,
            stone: 2.5,
            ..ArticleDraft::default()
        };

        let article = session.commit_article(draft).expect("clamped, not rejected");
        assert_eq!(article.net, 0.0);
    }

    #[test]
    fn undo_restores_prior_totals() {
        let mut session = AppraisalSession::new(today());
        session
            .commit_article(necklace_draft())
            .expect("first commit");
        let before = session.totals();

        session
            .commit_article(ArticleDraft {
                gross: 4.2,
                stone: 0.1,
                purity: Purity::Karat(KaratGrade::K22),
                ..ArticleDraft::default()
            })
            .expect("second commit");
        assert_ne!(session.totals(), before);

        let removed = session.undo_last().expect("tail article removed");
        assert_eq!(removed.id, ArticleId("art-000002".to_string()));
        assert_eq!(session.totals(), before);
    }

    #[test]
    fn undo_on_empty_ledger_is_noop() {
        let mut session = AppraisalSession::new(today());
        assert!(session.undo_last().is_none());
    }

    #[test]
    fn reset_keeps_appraiser_and_loan_dates() {
        let mut session = AppraisalSession::new(today());
        session.commit_article(necklace_draft()).expect("commit");
        session.set_customer(CustomerDetails {
            name: "K. Lakshmi".to_string(),
            mobile: "9876543210".to_string(),
            village: "Tuni".to_string(),
            address: "Main Road".to_string(),
        });
        let mut loan = session.loan().clone();
        loan.loan_number = "GL-2026-014".to_string();
        loan.sanction_amount = 38000.0;
        session.set_loan(loan);
        session.attach_image(Some("collateral-014.jpg".to_string()));

        session.reset();

        assert!(session.articles().is_empty());
        assert!(session.collateral_image().is_none());
        assert_eq!(session.customer(), &CustomerDetails::default());
        assert!(session.loan().loan_number.is_empty());
        assert_eq!(session.loan().sanction_amount, 0.0);
        assert_eq!(session.loan().date, today());
        assert_eq!(session.appraiser(), &AppraiserDetails::default());
    }

    #[test]
    fn ids_stay_unique_across_reset() {
        let mut session = AppraisalSession::new(today());
        let first = session.commit_article(necklace_draft()).expect("commit");
        session.reset();
        let next = session.commit_article(necklace_draft()).expect("commit");
        assert_ne!(first.id, next.id);
    }

    #[test]
    fn draft_mode_switch_resets_selector() {
        let mut draft = ArticleDraft::new();
        draft.purity = Purity::Touch(92.0);

        draft.set_purity_mode(PurityMode::Karat);
        assert_eq!(draft.purity, Purity::default_karat());

        draft.set_purity_mode(PurityMode::Touch);
        assert_eq!(draft.purity, Purity::default_touch());
    }

    #[test]
    fn draft_mode_switch_to_same_mode_keeps_selector() {
        let mut draft = ArticleDraft::new();
        draft.purity = Purity::Touch(92.0);
        draft.set_purity_mode(PurityMode::Touch);
        assert_eq!(draft.purity, Purity::Touch(92.0));
    }

    #[test]
    fn clear_weights_keeps_category_and_purity() {
        let mut draft = ArticleDraft {
            category: ArticleCategory::Bracelet,
            qty: 3,
            gross: 12.5,
            stone: 0.75,
            purity: Purity::Karat(KaratGrade::K21),
        };
        draft.clear_weights();
        assert_eq!(draft.qty, 1);
        assert_eq!(draft.gross, 0.0);
        assert_eq!(draft.stone, 0.0);
        assert_eq!(draft.category, ArticleCategory::Bracelet);
        assert_eq!(draft.purity, Purity::Karat(KaratGrade::K21));
    }

    #[test]
    fn request_resolves_category_and_purity() {
        let request = ArticleRequest {
            name: "Vaddanam".to_string(),
            qty: 2,
            gross: 24.3,
            stone: 1.1,
            purity_mode: PurityMode::Karat,
            selector: Some("25krt".to_string()),
        };
        let draft = ArticleDraft::from(request);
        assert_eq!(draft.category, ArticleCategory::Vaddanam);
        assert_eq!(draft.purity, Purity::default_karat());
    }
}
