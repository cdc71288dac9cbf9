//! Display formatting for weights and rupee amounts.

/// Gram weights always render with three decimals, matching the scale the
/// valuation core truncates to.
pub fn format_grams(value: f64) -> String {
    format!("{value:.3}")
}

/// Whole-rupee display: floored (never rounded up) and grouped in the
/// Indian style, e.g. `1234567.89` -> `12,34,567`.
pub fn format_inr(amount: f64) -> String {
    group_indian(amount.max(0.0).floor() as u64)
}

/// Rate display keeping two decimals, e.g. `4762.5` -> `4,762.50`.
pub fn format_inr_exact(amount: f64) -> String {
    let clamped = amount.max(0.0);
    let rupees = clamped.floor() as u64;
    let paise = ((clamped - clamped.floor()) * 100.0).round() as u64;
    if paise >= 100 {
        // carry from rounding .999... up
        return format!("{}.00", group_indian(rupees + 1));
    }
    format!("{}.{:02}", group_indian(rupees), paise)
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
