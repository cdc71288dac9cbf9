use serde::{Deserialize, Serialize};

use super::domain::Article;

/// Net gold weight in grams after removing stones and applying the purity
/// multiplier. Truncated (not rounded) to three decimals so the recoverable
/// weight is never overstated, and clamped at zero when stones outweigh the
/// gross.
pub fn net_weight(gross: f64, stone: f64, purity_fraction: f64) -> f64 {
    let adjusted = (gross - stone) * purity_fraction;
    (adjusted.max(0.0) * 1000.0).floor() / 1000.0
}

/// Running totals over the committed article ledger. Recomputed from the
/// collection on every read; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub qty: u32,
    pub gross: f64,
    pub stone: f64,
    pub net: f64,
}

impl Totals {
    pub fn aggregate<'a, I>(articles: I) -> Self
    where
        I: IntoIterator<Item = &'a Article>,
    {
        articles.into_iter().fold(Self::default(), |acc, article| Self {
            qty: acc.qty + article.qty,
            gross: acc.gross + article.gross,
            stone: acc.stone + article.stone,
            net: acc.net + article.net,
        })
    }
}

/// Market inputs for eligibility. Zero means "unset" and is a valid input
/// that yields zero figures downstream, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    pub gold_rate: f64,
    pub ltv: f64,
}

impl MarketInputs {
    /// Currency the lender advances per gram of net gold.
    pub fn loan_rate_per_gram(&self) -> f64 {
        self.gold_rate * self.ltv / 100.0
    }
}

/// Loan-eligibility figures derived from totals and market inputs. No
/// currency rounding happens here; flooring to whole rupees is a rendering
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    pub loan_rate_per_gram: f64,
    pub eligible_loan: f64,
    pub market_valuation: f64,
}

impl Eligibility {
    pub fn compute(market: MarketInputs, totals: &Totals) -> Self {
        let loan_rate_per_gram = market.loan_rate_per_gram();
        Self {
            loan_rate_per_gram,
            eligible_loan: totals.net * loan_rate_per_gram,
            market_valuation: market.gold_rate * totals.net,
        }
    }
}
