use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::purity::{Purity, PurityMode};

/// Identifier wrapper for committed articles, unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub String);

/// Banking partners offered on the appraiser form.
pub const BANKS: [&str; 11] = [
    "Union Bank of India",
    "Canara Bank",
    "UCO Bank",
    "IOB Bank",
    "Punjab National Bank",
    "State Bank of India",
    "Bank of Baroda",
    "IDBI Bank",
    "Indian Bank",
    "ICICI Bank",
    "Other Bank",
];

/// Jewellery categories offered on the article form, with a free-form
/// escape hatch for anything the catalog does not cover.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleCategory {
    Necklace,
    Haram,
    Chain,
    ChainWithLocket,
    Rings,
    BlackBeads,
    EarRings,
    Vanki,
    Vaddanam,
    Matees,
    Bracelet,
    Chadraharam,
    Palakasarlu,
    Thadu,
    EarringWithMatees,
    Other(String),
}

impl ArticleCategory {
    pub fn catalog() -> [Self; 15] {
        [
            Self::Necklace,
            Self::Haram,
            Self::Chain,
            Self::ChainWithLocket,
            Self::Rings,
            Self::BlackBeads,
            Self::EarRings,
            Self::Vanki,
            Self::Vaddanam,
            Self::Matees,
            Self::Bracelet,
            Self::Chadraharam,
            Self::Palakasarlu,
            Self::Thadu,
            Self::EarringWithMatees,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Necklace => "Necklace",
            Self::Haram => "Haram",
            Self::Chain => "Chain",
            Self::ChainWithLocket => "Chain with locket",
            Self::Rings => "Rings",
            Self::BlackBeads => "Black Beads",
            Self::EarRings => "Ear rings",
            Self::Vanki => "Vanki",
            Self::Vaddanam => "Vaddanam",
            Self::Matees => "Matees",
            Self::Bracelet => "Bracelet",
            Self::Chadraharam => "Chadraharam",
            Self::Palakasarlu => "Palakasarlu",
            Self::Thadu => "Thadu",
            Self::EarringWithMatees => "Earring with Matees",
            Self::Other(name) => name,
        }
    }

    /// Matches a free-form label against the catalog, case-insensitively.
    /// Anything unrecognized becomes `Other` with the trimmed label.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self::catalog()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Other(trimmed.to_string()))
    }
}

/// Bank and appraiser identity block printed on the receipt header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppraiserDetails {
    pub name: String,
    pub bank: String,
    pub branch: String,
    pub code: String,
}

impl Default for AppraiserDetails {
    fn default() -> Self {
        Self {
            name: "S. Rajesh".to_string(),
            bank: BANKS[0].to_string(),
            branch: "Tuni".to_string(),
            code: "UBI-9921".to_string(),
        }
    }
}

/// Borrower identity block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub mobile: String,
    pub village: String,
    pub address: String,
}

/// Loan metadata captured alongside the valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDetails {
    pub loan_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub sanction_amount: f64,
}

impl LoanDetails {
    /// Fresh loan block dated `today` with the due date one year out.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            loan_number: String::new(),
            date: today,
            due_date: today + Months::new(12),
            sanction_amount: 0.0,
        }
    }
}

/// One committed appraisal entry. `net` is derived from the weights and
/// purity at commit time and is never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub category: ArticleCategory,
    pub qty: u32,
    pub gross: f64,
    pub stone: f64,
    pub purity: Purity,
    pub net: f64,
}

/// Wire-level article submission as the presentation layer supplies it:
/// a loose category label and a loose purity selector, resolved with the
/// conservative defaults before commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRequest {
    pub name: String,
    #[serde(default = "default_article_qty")]
    pub qty: u32,
    pub gross: f64,
    #[serde(default)]
    pub stone: f64,
    pub purity_mode: PurityMode,
    #[serde(default)]
    pub selector: Option<String>,
}

fn default_article_qty() -> u32 {
    1
}

/// Validation failures surfaced before an article or receipt leaves the
/// session boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppraisalError {
    #[error("gross weight must be greater than zero (got {gross})")]
    InvalidGrossWeight { gross: f64 },
    #[error("no articles committed; the valuation ledger is empty")]
    EmptyValuation,
}
