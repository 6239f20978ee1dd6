//! Currency conversion and display formatting.
//!
//! The model works in base currency throughout. Conversion to the display
//! currency happens here and only here.

use crate::model::CurrencyCode;

/// Convert a base-currency amount to the display currency
#[must_use]
pub fn to_display(amount: f64, currency: CurrencyCode) -> f64 {
    amount * currency.rate()
}

/// Convert a display-currency amount back to base currency
#[must_use]
pub fn from_display(amount: f64, currency: CurrencyCode) -> f64 {
    amount / currency.rate()
}

/// Format a base-currency amount in the display currency with no decimals,
/// e.g. `€2,161,920,000`, `US$1,090`, `-£84`.
///
/// Non-finite input is shown as zero.
pub fn format_currency(amount: f64, currency: CurrencyCode) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = to_display(amount, currency).round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}{}",
        currency.amount_prefix(),
        group_thousands(rounded.abs())
    )
}

/// Format a head count: rounded, grouped, no symbol. Non-finite input is
/// shown as zero.
pub fn format_count(n: f64) -> String {
    let n = if n.is_finite() { n } else { 0.0 };
    let rounded = n.round();
    if rounded < 0.0 {
        format!("-{}", group_thousands(rounded.abs()))
    } else {
        group_thousands(rounded)
    }
}

/// Chart tooltip text for a value already in millions of display currency
pub fn format_millions(millions: i64, currency: CurrencyCode) -> String {
    format!("{millions} M{}", currency.symbol())
}

/// Thousands-separated digits of a non-negative whole number
fn group_thousands(value: f64) -> String {
    let digits = format!("{value:.0}");
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
        assert_eq!(
            group_thousands(1e20),
            "100,000,000,000,000,000,000"
        );
    }

    #[test]
    fn test_format_beyond_u64_range() {
        assert_eq!(
            format_currency(1e20, CurrencyCode::Eur),
            "€100,000,000,000,000,000,000"
        );
        assert_eq!(format_count(-1e20), "-100,000,000,000,000,000,000");
    }

    #[test]
    fn test_format_currency_eur() {
        assert_eq!(
            format_currency(2_161_920_000.0, CurrencyCode::Eur),
            "€2,161,920,000"
        );
        assert_eq!(format_currency(20.4, CurrencyCode::Eur), "€20");
        assert_eq!(format_currency(20.5, CurrencyCode::Eur), "€21");
    }

    #[test]
    fn test_format_currency_converts() {
        assert_eq!(format_currency(1_000.0, CurrencyCode::Usd), "US$1,090");
        assert_eq!(format_currency(1_000.0, CurrencyCode::Gbp), "£840");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1_234.0, CurrencyCode::Eur), "-€1,234");
        assert_eq!(format_currency(-100.0, CurrencyCode::Gbp), "-£84");
    }

    #[test]
    fn test_format_currency_small_negative_has_no_sign() {
        assert_eq!(format_currency(-0.4, CurrencyCode::Eur), "€0");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN, CurrencyCode::Usd), "US$0");
        assert_eq!(format_currency(f64::INFINITY, CurrencyCode::Eur), "€0");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(10_809_600.0), "10,809,600");
        assert_eq!(format_count(5_945_279.6), "5,945,280");
        assert_eq!(format_count(f64::NAN), "0");
        assert_eq!(format_count(-1_500.0), "-1,500");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(2_162, CurrencyCode::Eur), "2162 M€");
        assert_eq!(format_millions(-5, CurrencyCode::Usd), "-5 M$");
    }
}
