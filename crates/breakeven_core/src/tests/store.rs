//! Tests for the parameter store
//!
//! These tests verify:
//! - Scenario application overwrites all nine fields and nothing else
//! - Single-field edits touch exactly one field
//! - Rejected direct entries keep the last valid value

use crate::error::ParameterError;
use crate::model::{CurrencyCode, ParamField, PopulationPreset, ScenarioPreset};
use crate::store::{ParameterEdit, ParameterStore};

#[test]
fn test_best_sets_hs_share_exactly() {
    let mut store = ParameterStore::new();
    store.apply_scenario(ScenarioPreset::Best);
    assert_eq!(store.assumptions().hs_share, 0.25);
    assert_eq!(store.scenario(), ScenarioPreset::Best);
}

#[test]
fn test_low_then_medium_leaves_no_residue() {
    let mut store = ParameterStore::new();
    store.apply_scenario(ScenarioPreset::Low);
    store.apply_scenario(ScenarioPreset::Medium);
    assert_eq!(*store.assumptions(), ScenarioPreset::Medium.assumptions());
}

#[test]
fn test_scenario_overwrites_manual_edits() {
    let mut store = ParameterStore::new();
    store.set_field(ParamField::DaysSaved, 6.5).unwrap();
    store.enter_currency_amount(ParamField::UnitGp, "90").unwrap();
    store.apply_scenario(ScenarioPreset::Medium);
    assert_eq!(*store.assumptions(), ScenarioPreset::Medium.assumptions());
}

#[test]
fn test_scenario_keeps_population_and_currency() {
    let mut store = ParameterStore::new();
    store.select_population(PopulationPreset::Us);
    store.select_currency(CurrencyCode::Gbp);
    store.apply_scenario(ScenarioPreset::Low);
    assert_eq!(store.population(), PopulationPreset::Us);
    assert_eq!(store.currency(), CurrencyCode::Gbp);
}

#[test]
fn test_single_edit_touches_one_field() {
    for field in ParamField::ALL {
        let mut store = ParameterStore::new();
        let before = *store.assumptions();
        let target = match field.bounds() {
            Some((min, _)) => min,
            None => 1.0,
        };
        store.set_field(field, target).unwrap();

        for other in ParamField::ALL {
            if other == field {
                assert_eq!(store.value(other), target);
            } else {
                assert_eq!(store.value(other), other.get(&before), "{field} leaked into {other}");
            }
        }
        assert_eq!(store.scenario(), ScenarioPreset::Medium);
    }
}

#[test]
fn test_editing_unit_gp_does_not_change_scenario() {
    let mut store = ParameterStore::new();
    store.apply_scenario(ScenarioPreset::Best);
    store.enter_currency_amount(ParamField::UnitGp, "10").unwrap();
    assert_eq!(store.scenario(), ScenarioPreset::Best);
}

#[test]
fn test_slider_values_are_clamped() {
    let mut store = ParameterStore::new();
    assert_eq!(store.set_field(ParamField::ResponseRate, 1.5), Ok(0.90));
    assert_eq!(store.set_field(ParamField::GpAvoided, -1.0), Ok(0.0));
}

#[test]
fn test_rejected_entries_keep_last_value() {
    let mut store = ParameterStore::new();
    store.enter_currency_amount(ParamField::ValuePerDay, "150").unwrap();

    for bad in ["", "   ", "abc", "12abc", "-5", "NaN", "inf"] {
        let err = store.enter_currency_amount(ParamField::ValuePerDay, bad);
        assert!(err.is_err(), "'{bad}' should be rejected");
        assert_eq!(store.value(ParamField::ValuePerDay), 150.0);
    }
}

#[test]
fn test_entry_tolerates_whitespace() {
    let mut store = ParameterStore::new();
    store.enter_currency_amount(ParamField::UnitGp, "  65 ").unwrap();
    assert_eq!(store.value(ParamField::UnitGp), 65.0);
}

#[test]
fn test_currency_entry_on_slider_field_is_rejected() {
    let mut store = ParameterStore::new();
    let err = store.enter_currency_amount(ParamField::PlatformCost, "30");
    assert_eq!(err, Err(ParameterError::NotCurrencyField(ParamField::PlatformCost)));
    assert_eq!(store.value(ParamField::PlatformCost), 20.0);
}

#[test]
fn test_non_finite_field_value_rejected() {
    let mut store = ParameterStore::new();
    let result = store.apply(ParameterEdit::Field(ParamField::Adoption, f64::NAN));
    assert!(matches!(result, Err(ParameterError::NonFinite { .. })));
    assert_eq!(store.value(ParamField::Adoption), 0.30);
}

#[test]
fn test_result_recomputes_after_edit() {
    let mut store = ParameterStore::new();
    let before = store.result();
    store.apply(ParameterEdit::Step(ParamField::Adoption, 10)).unwrap();
    let after = store.result();
    assert!(after.active_users > before.active_users);
    assert_eq!(store.sensitivity().len(), 11);
}

#[test]
fn test_huge_direct_entry_formats_in_full() {
    let mut store = ParameterStore::new();
    store
        .enter_currency_amount(ParamField::UnitGp, "10000000000000")
        .unwrap();
    let gp_savings = store.result().gp_savings;
    assert!(gp_savings > u64::MAX as f64);

    let formatted = crate::currency::format_currency(gp_savings, CurrencyCode::Eur);
    assert!(formatted.starts_with("€47,562,240,000,000,0"));
    assert_eq!(formatted.chars().filter(|c| c.is_ascii_digit()).count(), 20);
}
