use serde::Serialize;

use super::super::domain::{Article, ArticleCategory, ArticleId};
use super::super::session::AppraisalSession;
use super::super::valuation::{Eligibility, Totals};
use super::format::{format_grams, format_inr, format_inr_exact};

/// One ledger row ready for display: raw figures plus their rendered
/// forms.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub serial: usize,
    pub id: ArticleId,
    pub category: ArticleCategory,
    pub category_label: String,
    pub qty: u32,
    pub gross: f64,
    pub gross_display: String,
    pub stone: f64,
    pub stone_display: String,
    pub purity_label: String,
    pub net: f64,
    pub net_display: String,
}

impl ArticleView {
    pub fn from_article(article: &Article, serial: usize) -> Self {
        Self {
            serial,
            id: article.id.clone(),
            category: article.category.clone(),
            category_label: article.category.label().to_string(),
            qty: article.qty,
            gross: article.gross,
            gross_display: format_grams(article.gross),
            stone: article.stone,
            stone_display: format_grams(article.stone),
            purity_label: article.purity.label(),
            net: article.net,
            net_display: format_grams(article.net),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub qty: u32,
    pub gross: f64,
    pub gross_display: String,
    pub stone: f64,
    pub stone_display: String,
    pub net: f64,
    pub net_display: String,
}

impl TotalsView {
    pub fn from_totals(totals: &Totals) -> Self {
        Self {
            qty: totals.qty,
            gross: totals.gross,
            gross_display: format_grams(totals.gross),
            stone: totals.stone,
            stone_display: format_grams(totals.stone),
            net: totals.net,
            net_display: format_grams(totals.net),
        }
    }
}

/// Eligibility figures with presentation rounding applied to the display
/// fields only: the per-gram rate keeps two decimals, the loan and
/// valuation amounts floor to whole rupees.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityView {
    pub loan_rate_per_gram: f64,
    pub loan_rate_display: String,
    pub eligible_loan: f64,
    pub eligible_loan_display: String,
    pub market_valuation: f64,
    pub market_valuation_display: String,
}

impl EligibilityView {
    pub fn from_eligibility(eligibility: &Eligibility) -> Self {
        Self {
            loan_rate_per_gram: eligibility.loan_rate_per_gram,
            loan_rate_display: format_inr_exact(eligibility.loan_rate_per_gram),
            eligible_loan: eligibility.eligible_loan,
            eligible_loan_display: format_inr(eligibility.eligible_loan),
            market_valuation: eligibility.market_valuation,
            market_valuation_display: format_inr(eligibility.market_valuation),
        }
    }
}

/// On-screen valuation snapshot: the full ledger plus the derived totals
/// and eligibility, recomputed from the session on every request.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationSnapshot {
    pub articles: Vec<ArticleView>,
    pub totals: TotalsView,
    pub eligibility: EligibilityView,
}

impl ValuationSnapshot {
    pub fn from_session(session: &AppraisalSession) -> Self {
        let articles = session
            .articles()
            .iter()
            .enumerate()
            .map(|(index, article)| ArticleView::from_article(article, index + 1))
            .collect();
        Self {
            articles,
            totals: TotalsView::from_totals(&session.totals()),
            eligibility: EligibilityView::from_eligibility(&session.eligibility()),
        }
    }
}

/// Everything the printable receipt needs, already formatted: header
/// identity, pledgor block, loan metadata, ledger rows, consolidated
/// totals, and the disbursed amount in figures and words.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptView {
    pub bank: String,
    pub branch: String,
    pub staff_code: String,
    pub appraiser_name: String,
    pub customer_name: String,
    pub customer_mobile: String,
    pub customer_village: String,
    pub customer_address: String,
    pub loan_number: String,
    pub loan_date: String,
    pub due_date: String,
    pub articles: Vec<ArticleView>,
    pub totals: TotalsView,
    pub eligibility: EligibilityView,
    pub sanction_amount: f64,
    pub sanction_display: String,
    pub sanction_in_words: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collateral_image: Option<String>,
}
