//! Rupee amounts in words, Indian numbering (crore/lakh/thousand).

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell a whole-rupee amount for the receipt, e.g.
/// `Thirty Eight Thousand Four Hundred and Sixty Two Rupees Only`.
/// Amounts above nine digits return the `overflow` sentinel.
pub fn rupees_in_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero Rupees Only".to_string();
    }
    if amount > 999_999_999 {
        return "overflow".to_string();
    }

    let crore = amount / 10_000_000 % 100;
    let lakh = amount / 100_000 % 100;
    let thousand = amount / 1_000 % 100;
    let hundred = amount / 100 % 10;
    let tail = amount % 100;

    let mut parts: Vec<String> = Vec::new();
    if let Some(words) = two_digits(crore) {
        parts.push(format!("{words} Crore"));
    }
    if let Some(words) = two_digits(lakh) {
        parts.push(format!("{words} Lakh"));
    }
    if let Some(words) = two_digits(thousand) {
        parts.push(format!("{words} Thousand"));
    }
    if hundred != 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }
    if let Some(words) = two_digits(tail) {
        if parts.is_empty() {
            parts.push(words);
        } else {
            parts.push(format!("and {words}"));
        }
    }

    format!("{} Rupees Only", parts.join(" "))
}

fn two_digits(value: u64) -> Option<String> {
    match value {
        0 => None,
        1..=19 => Some(ONES[value as usize].to_string()),
        _ => {
            let tens = TENS[(value / 10) as usize];
            let ones = ONES[(value % 10) as usize];
            if ones.is_empty() {
                Some(tens.to_string())
            } else {
                Some(format!("{tens} {ones}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_spells_out() {
        assert_eq!(rupees_in_words(0), "Zero Rupees Only");
    }

    #[test]
    fn worked_sanction_amount() {
        assert_eq!(
            rupees_in_words(38_462),
            "Thirty Eight Thousand Four Hundred and Sixty Two Rupees Only"
        );
    }

    #[test]
    fn round_hundreds_have_no_and() {
        assert_eq!(rupees_in_words(100), "One Hundred Rupees Only");
        assert_eq!(rupees_in_words(5_000), "Five Thousand Rupees Only");
    }

    #[test]
    fn bare_tens_and_teens() {
        assert_eq!(rupees_in_words(15), "Fifteen Rupees Only");
        assert_eq!(rupees_in_words(20), "Twenty Rupees Only");
        assert_eq!(rupees_in_words(42), "Forty Two Rupees Only");
    }

    #[test]
    fn full_indian_grouping() {
        assert_eq!(
            rupees_in_words(123_456_789),
            "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred and Eighty Nine Rupees Only"
        );
    }

    #[test]
    fn crore_cap_is_nine_digits() {
        assert_eq!(rupees_in_words(999_999_999).contains("overflow"), false);
        assert_eq!(rupees_in_words(1_000_000_000), "overflow");
    }
}
