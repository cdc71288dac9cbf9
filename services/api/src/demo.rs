use crate::infra::{parse_date, seeded_session, InMemorySessionRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use goldpro::appraisal::{
    render_receipt_text, AppraisalService, ArticleRequest, CustomerDetails, PurityMode,
    ValuationSnapshot,
};
use goldpro::config::MarketConfig;
use goldpro::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ReceiptArgs {
    /// CSV article sheet with the columns Article,Qty,Gross,Stone,Purity
    #[arg(long)]
    pub(crate) articles_csv: PathBuf,
    /// 916 gold rate in rupees per gram
    #[arg(long, default_value_t = 0.0)]
    pub(crate) gold_rate: f64,
    /// Loan-to-value percentage
    #[arg(long, default_value_t = 0.0)]
    pub(crate) ltv: f64,
    /// Borrower name printed on the receipt
    #[arg(long)]
    pub(crate) customer_name: Option<String>,
    /// Borrower mobile number
    #[arg(long)]
    pub(crate) customer_mobile: Option<String>,
    /// Borrower village
    #[arg(long)]
    pub(crate) customer_village: Option<String>,
    /// Borrower address
    #[arg(long)]
    pub(crate) customer_address: Option<String>,
    /// Loan reference number
    #[arg(long)]
    pub(crate) loan_number: Option<String>,
    /// Disbursed amount in rupees
    #[arg(long)]
    pub(crate) sanction: Option<f64>,
    /// Loan date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Due date (YYYY-MM-DD). Defaults to one year after the loan date.
    #[arg(long, value_parser = parse_date)]
    pub(crate) due_date: Option<NaiveDate>,
    /// Collateral image reference to print on the receipt
    #[arg(long)]
    pub(crate) image: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// 916 gold rate in rupees per gram
    #[arg(long, default_value_t = 6350.0)]
    pub(crate) gold_rate: f64,
    /// Loan-to-value percentage
    #[arg(long, default_value_t = 75.0)]
    pub(crate) ltv: f64,
    /// Disbursed amount to print and check against eligibility
    #[arg(long)]
    pub(crate) sanction: Option<f64>,
    /// Render the printable receipt after the valuation summary
    #[arg(long)]
    pub(crate) include_receipt: bool,
}

pub(crate) fn run_receipt(args: ReceiptArgs) -> Result<(), AppError> {
    let ReceiptArgs {
        articles_csv,
        gold_rate,
        ltv,
        customer_name,
        customer_mobile,
        customer_village,
        customer_address,
        loan_number,
        sanction,
        date,
        due_date,
        image,
    } = args;

    let loan_date = date.unwrap_or_else(|| Local::now().date_naive());
    let session = seeded_session(loan_date, &MarketConfig { gold_rate, ltv });
    let service = AppraisalService::new(Arc::new(InMemorySessionRepository::new(session)));

    let sheet = std::fs::read_to_string(&articles_csv)?;
    service.import_articles(&sheet).map_err(AppError::from)?;

    service
        .update_customer(CustomerDetails {
            name: customer_name.unwrap_or_default(),
            mobile: customer_mobile.unwrap_or_default(),
            village: customer_village.unwrap_or_default(),
            address: customer_address.unwrap_or_default(),
        })
        .map_err(AppError::from)?;

    let snapshot = service.summary().map_err(AppError::from)?;
    let mut loan = goldpro::appraisal::LoanDetails::starting(loan_date);
    if let Some(due) = due_date {
        loan.due_date = due;
    }
    if let Some(number) = loan_number {
        loan.loan_number = number;
    }
    if let Some(amount) = sanction {
        loan.sanction_amount = amount;
        warn_if_over_eligibility(amount, &snapshot);
    }
    service.update_loan(loan).map_err(AppError::from)?;
    service.attach_image(image).map_err(AppError::from)?;

    let receipt = service.receipt().map_err(AppError::from)?;
    println!("{}", render_receipt_text(&receipt));

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        gold_rate,
        ltv,
        sanction,
        include_receipt,
    } = args;

    let today = Local::now().date_naive();
    let session = seeded_session(today, &MarketConfig { gold_rate, ltv });
    let service = AppraisalService::new(Arc::new(InMemorySessionRepository::new(session)));

    println!("Gold-loan appraisal demo");
    println!("916 rate Rs. {gold_rate}/g at {ltv}% LTV\n");

    for request in sample_articles() {
        let article = service.add_article(request).map_err(AppError::from)?;
        println!(
            "committed {} ({}) net {:.3}g",
            article.id.0,
            article.category.label(),
            article.net
        );
    }

    service
        .update_customer(CustomerDetails {
            name: "K. Lakshmi".to_string(),
            mobile: "9876543210".to_string(),
            village: "Tuni".to_string(),
            address: "Main Road, Tuni".to_string(),
        })
        .map_err(AppError::from)?;

    let snapshot = service.summary().map_err(AppError::from)?;
    println!();
    render_valuation(&snapshot);

    if let Some(amount) = sanction {
        let mut loan = goldpro::appraisal::LoanDetails::starting(today);
        loan.sanction_amount = amount;
        warn_if_over_eligibility(amount, &snapshot);
        service.update_loan(loan).map_err(AppError::from)?;
    }

    if include_receipt {
        let receipt = service.receipt().map_err(AppError::from)?;
        println!("\n{}", render_receipt_text(&receipt));
    }

    Ok(())
}

fn sample_articles() -> Vec<ArticleRequest> {
    vec![
        ArticleRequest {
            name: "Necklace".to_string(),
            qty: 1,
            gross: 10.0,
            stone: 0.5,
            purity_mode: PurityMode::Touch,
            selector: Some("85".to_string()),
        },
        ArticleRequest {
            name: "Rings".to_string(),
            qty: 2,
            gross: 4.25,
            stone: 0.0,
            purity_mode: PurityMode::Karat,
            selector: Some("22krt".to_string()),
        },
        ArticleRequest {
            name: "Haram".to_string(),
            qty: 1,
            gross: 24.5,
            stone: 1.2,
            purity_mode: PurityMode::Touch,
            selector: Some("91".to_string()),
        },
    ]
}

fn render_valuation(snapshot: &ValuationSnapshot) {
    println!(
        "{:<4}{:<24}{:>5}{:>10}{:>10}{:>8}{:>10}",
        "SN", "Asset", "Qty", "Gross", "Stone", "Touch", "Net"
    );
    for article in &snapshot.articles {
        println!(
            "{:<4}{:<24}{:>5}{:>10}{:>10}{:>8}{:>10}",
            article.serial,
            article.category_label,
            article.qty,
            article.gross_display,
            article.stone_display,
            article.purity_label,
            article.net_display,
        );
    }
    println!(
        "{:<4}{:<24}{:>5}{:>10}{:>10}{:>8}{:>10}",
        "",
        "Totals",
        snapshot.totals.qty,
        snapshot.totals.gross_display,
        snapshot.totals.stone_display,
        "-",
        format!("{}g", snapshot.totals.net_display),
    );

    println!();
    println!(
        "Loan rate per gram: Rs. {}",
        snapshot.eligibility.loan_rate_display
    );
    println!(
        "Total eligibility:  Rs. {}",
        snapshot.eligibility.eligible_loan_display
    );
    println!(
        "Market valuation:   Rs. {}",
        snapshot.eligibility.market_valuation_display
    );
}

fn warn_if_over_eligibility(sanction: f64, snapshot: &ValuationSnapshot) {
    if sanction > snapshot.eligibility.eligible_loan {
        println!(
            "warning: disbursed amount Rs. {:.0} exceeds eligibility Rs. {}",
            sanction, snapshot.eligibility.eligible_loan_display
        );
    }
}
