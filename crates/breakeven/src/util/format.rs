//! Display formatting for parameter controls
//!
//! Monetary fields are stored in base currency; everything here takes the
//! stored value and converts as needed.

use breakeven_core::currency::{from_display, to_display};
use breakeven_core::{CurrencyCode, ParamField, ParameterEdit, ParameterError};

/// Control readout, e.g. `20.0%`, `0.8 visits`, `€20/user`, `US$55`
pub fn format_field_value(field: ParamField, value: f64, currency: CurrencyCode) -> String {
    match field {
        ParamField::HsShare => format!("{:.1}%", value * 100.0),
        ParamField::SeekCare | ParamField::Adoption | ParamField::ResponseRate => {
            format!("{:.0}%", value * 100.0)
        }
        ParamField::GpAvoided => format!("{:.1} visits", value),
        ParamField::DaysSaved => format!("{:.1} days", value),
        ParamField::PlatformCost => format!(
            "{}{}/user",
            currency.symbol(),
            display_whole(value, currency)
        ),
        ParamField::UnitGp | ParamField::ValuePerDay => {
            format!("{}{}", currency.symbol(), display_whole(value, currency))
        }
    }
}

/// Text pre-filled in the edit modal, in the units the user types
pub fn input_default(field: ParamField, value: f64, currency: CurrencyCode) -> String {
    match field {
        ParamField::HsShare => format!("{:.1}", value * 100.0),
        f if f.is_fraction() => format!("{:.0}", value * 100.0),
        f if f.is_monetary() => display_whole(value, currency).to_string(),
        _ => format!("{:.1}", value),
    }
}

/// Unit hint shown next to the edit prompt
pub fn input_unit(field: ParamField, currency: CurrencyCode) -> String {
    match field {
        f if f.is_fraction() => "%".to_string(),
        ParamField::GpAvoided => "visits".to_string(),
        ParamField::DaysSaved => "days".to_string(),
        _ => currency.code().to_string(),
    }
}

/// Turn typed text into a store edit.
///
/// Percent fields take whole percentages (a trailing `%` is allowed) and the
/// platform cost is typed in display currency. Direct-entry fields are handed
/// to the store as typed.
pub fn parse_field_input(
    field: ParamField,
    input: &str,
    currency: CurrencyCode,
) -> Result<ParameterEdit, ParameterError> {
    if field.is_direct_entry() {
        return Ok(ParameterEdit::CurrencyEntry(field, input.to_string()));
    }

    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let typed: f64 = trimmed
        .parse()
        .map_err(|_| ParameterError::InvalidEntry {
            field,
            input: input.to_string(),
        })?;

    let value = if field.is_fraction() {
        typed / 100.0
    } else if field.is_monetary() {
        from_display(typed, currency)
    } else {
        typed
    };
    Ok(ParameterEdit::Field(field, value))
}

/// Position of a slider value within its range, 0..=1
pub fn slider_ratio(field: ParamField, value: f64) -> Option<f64> {
    let (min, max) = field.bounds()?;
    if max <= min {
        return Some(0.0);
    }
    Some(((value - min) / (max - min)).clamp(0.0, 1.0))
}

/// Text slider track such as `━━━━●────`
pub fn slider_track(ratio: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let knob = ((ratio.clamp(0.0, 1.0) * (width - 1) as f64).round()) as usize;
    (0..width)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

/// Rounded display-currency amount as a whole number
fn display_whole(value: f64, currency: CurrencyCode) -> i64 {
    to_display(value, currency).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_readouts() {
        let eur = CurrencyCode::Eur;
        assert_eq!(format_field_value(ParamField::HsShare, 0.2, eur), "20.0%");
        assert_eq!(format_field_value(ParamField::HsShare, 0.055, eur), "5.5%");
        assert_eq!(format_field_value(ParamField::Adoption, 0.3, eur), "30%");
        assert_eq!(format_field_value(ParamField::ResponseRate, 0.55, eur), "55%");
    }

    #[test]
    fn test_count_readouts() {
        let eur = CurrencyCode::Eur;
        assert_eq!(format_field_value(ParamField::GpAvoided, 0.8, eur), "0.8 visits");
        assert_eq!(format_field_value(ParamField::DaysSaved, 2.0, eur), "2.0 days");
    }

    #[test]
    fn test_money_readouts_convert() {
        assert_eq!(
            format_field_value(ParamField::PlatformCost, 20.0, CurrencyCode::Eur),
            "€20/user"
        );
        // 20 * 1.09 = 21.8
        assert_eq!(
            format_field_value(ParamField::PlatformCost, 20.0, CurrencyCode::Usd),
            "$22/user"
        );
        // 50 * 0.84 = 42
        assert_eq!(
            format_field_value(ParamField::UnitGp, 50.0, CurrencyCode::Gbp),
            "£42"
        );
    }

    #[test]
    fn test_input_defaults() {
        let usd = CurrencyCode::Usd;
        assert_eq!(input_default(ParamField::HsShare, 0.25, usd), "25.0");
        assert_eq!(input_default(ParamField::SeekCare, 0.4, usd), "40");
        assert_eq!(input_default(ParamField::DaysSaved, 5.0, usd), "5.0");
        assert_eq!(input_default(ParamField::ValuePerDay, 180.0, usd), "196");
    }

    #[test]
    fn test_parse_percent_input() {
        let edit = parse_field_input(ParamField::Adoption, " 45% ", CurrencyCode::Eur).unwrap();
        assert_eq!(edit, ParameterEdit::Field(ParamField::Adoption, 0.45));
    }

    #[test]
    fn test_parse_platform_cost_in_display_currency() {
        let edit = parse_field_input(ParamField::PlatformCost, "84", CurrencyCode::Gbp).unwrap();
        match edit {
            ParameterEdit::Field(ParamField::PlatformCost, v) => assert!((v - 100.0).abs() < 1e-9),
            other => panic!("unexpected edit {other:?}"),
        }
    }

    #[test]
    fn test_parse_direct_entry_is_deferred_to_store() {
        let edit = parse_field_input(ParamField::UnitGp, "abc", CurrencyCode::Eur).unwrap();
        assert_eq!(
            edit,
            ParameterEdit::CurrencyEntry(ParamField::UnitGp, "abc".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_field_input(ParamField::DaysSaved, "two", CurrencyCode::Eur),
            Err(ParameterError::InvalidEntry { .. })
        ));
        assert!(parse_field_input(ParamField::DaysSaved, "", CurrencyCode::Eur).is_err());
    }

    #[test]
    fn test_slider_ratio_and_track() {
        assert_eq!(slider_ratio(ParamField::PlatformCost, 5.0), Some(0.0));
        assert_eq!(slider_ratio(ParamField::PlatformCost, 60.0), Some(1.0));
        assert_eq!(slider_ratio(ParamField::UnitGp, 50.0), None);
        assert_eq!(slider_track(0.0, 5), "●────");
        assert_eq!(slider_track(1.0, 5), "━━━━●");
        assert_eq!(slider_track(0.5, 5), "━━●──");
    }
}
