//! Receipt composition for the printable valuation report.

pub mod format;
pub mod views;
pub mod words;

pub use views::{ArticleView, EligibilityView, ReceiptView, TotalsView, ValuationSnapshot};
pub use words::rupees_in_words;

use super::domain::AppraisalError;
use super::session::AppraisalSession;
use format::format_inr;

/// Build the receipt data from the current session. A receipt without
/// ledger entries is rejected; there is nothing to print.
pub fn compose_receipt(session: &AppraisalSession) -> Result<ReceiptView, AppraisalError> {
    if session.articles().is_empty() {
        return Err(AppraisalError::EmptyValuation);
    }

    let appraiser = session.appraiser();
    let customer = session.customer();
    let loan = session.loan();

    let articles: Vec<ArticleView> = session
        .articles()
        .iter()
        .enumerate()
        .map(|(index, article)| ArticleView::from_article(article, index + 1))
        .collect();

    let sanction = loan.sanction_amount;

    Ok(ReceiptView {
        bank: appraiser.bank.clone(),
        branch: appraiser.branch.clone(),
        staff_code: appraiser.code.clone(),
        appraiser_name: appraiser.name.clone(),
        customer_name: customer.name.clone(),
        customer_mobile: customer.mobile.clone(),
        customer_village: customer.village.clone(),
        customer_address: customer.address.clone(),
        loan_number: loan.loan_number.clone(),
        loan_date: loan.date.format("%d/%m/%Y").to_string(),
        due_date: loan.due_date.format("%d/%m/%Y").to_string(),
        articles,
        totals: TotalsView::from_totals(&session.totals()),
        eligibility: EligibilityView::from_eligibility(&session.eligibility()),
        sanction_amount: sanction,
        sanction_display: format_inr(sanction),
        sanction_in_words: rupees_in_words(sanction.max(0.0).floor() as u64),
        collateral_image: session.collateral_image().map(str::to_string),
    })
}

/// Render the receipt as a printable plain-text document for the CLI.
pub fn render_receipt_text(receipt: &ReceiptView) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(receipt.bank.to_uppercase());
    lines.push("Professional Valuation Report".to_string());
    lines.push(format!(
        "{} Branch (Staff ID: {})",
        receipt.branch, receipt.staff_code
    ));
    lines.push(String::new());

    lines.push("Pledgor Details".to_string());
    lines.push(format!("  Name:    {}", or_dash(&receipt.customer_name)));
    lines.push(format!("  Mobile:  {}", or_dash(&receipt.customer_mobile)));
    if !receipt.customer_village.is_empty() {
        lines.push(format!("  Village: {}", receipt.customer_village));
    }
    if !receipt.customer_address.is_empty() {
        lines.push(format!("  Address: {}", receipt.customer_address));
    }
    lines.push(String::new());

    lines.push("Loan Metadata".to_string());
    lines.push(format!("  Ref No:   {}", or_dash(&receipt.loan_number)));
    lines.push(format!("  Date:     {}", receipt.loan_date));
    lines.push(format!("  Due Date: {}", receipt.due_date));
    lines.push(String::new());

    lines.push(format!(
        "{:<4}{:<24}{:>5}{:>10}{:>10}{:>8}{:>10}",
        "SN", "Article Description", "Qty", "Gross", "Stone", "Touch", "Net Wt"
    ));
    for article in &receipt.articles {
        lines.push(format!(
            "{:<4}{:<24}{:>5}{:>10}{:>10}{:>8}{:>10}",
            article.serial,
            article.category_label.to_uppercase(),
            article.qty,
            article.gross_display,
            article.stone_display,
            article.purity_label,
            article.net_display,
        ));
    }
    lines.push(format!(
        "{:<4}{:<24}{:>5}{:>10}{:>10}{:>8}{:>10}",
        "",
        "Consolidated Totals",
        receipt.totals.qty,
        receipt.totals.gross_display,
        receipt.totals.stone_display,
        "-",
        format!("{}g", receipt.totals.net_display),
    ));
    lines.push(String::new());

    if let Some(image) = &receipt.collateral_image {
        lines.push(format!("Asset Visual Record: {image}"));
        lines.push(String::new());
    }

    lines.push(format!(
        "Disbursed Amount: Rs. {}/-",
        receipt.sanction_display
    ));
    lines.push(format!("  ({})", receipt.sanction_in_words));
    lines.push(String::new());

    lines.push("Borrower's Signature          Authorized Appraiser".to_string());
    lines.push(format!("{:>42}", format!("({})", receipt.appraiser_name)));

    lines.join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "---"
    } else {
        value
    }
}
