//! Tests for currency conversion
//!
//! These tests verify:
//! - Base -> display -> base round trips for every currency
//! - Direct entry is stored in base currency
//! - Formatted output of the reference case in each currency

use super::assert_close;
use crate::currency::{format_currency, from_display, to_display};
use crate::funnel::compute_params;
use crate::model::{CurrencyCode, ParamField};
use crate::store::ParameterStore;

#[test]
fn test_round_trip_every_currency() {
    let amounts = [0.0, 0.01, 1.0, 50.0, 180.0, 2_161_920_000.0, -216_192_000.0];
    for currency in CurrencyCode::ALL {
        for amount in amounts {
            let back = from_display(to_display(amount, currency), currency);
            assert_close(back, amount, currency.code());
        }
    }
}

#[test]
fn test_entered_amount_is_stored_in_base_currency() {
    let mut store = ParameterStore::new();
    store.select_currency(CurrencyCode::Usd);
    let stored = store.enter_currency_amount(ParamField::UnitGp, "109").unwrap();
    assert_close(stored, 100.0, "US$109 -> €100");
    assert_close(store.value(ParamField::UnitGp), 100.0, "stored");
    assert_close(store.display_value(ParamField::UnitGp), 109.0, "shown");
}

#[test]
fn test_entry_then_currency_switch_keeps_base_value() {
    let mut store = ParameterStore::new();
    store.select_currency(CurrencyCode::Gbp);
    store.enter_currency_amount(ParamField::ValuePerDay, "168").unwrap();
    store.select_currency(CurrencyCode::Eur);
    assert_close(store.value(ParamField::ValuePerDay), 200.0, "£168 -> €200");
    assert_close(store.display_value(ParamField::ValuePerDay), 200.0, "shown in EUR");
}

#[test]
fn test_displayed_value_re_entered_is_stable() {
    for currency in CurrencyCode::ALL {
        let mut store = ParameterStore::new();
        store.select_currency(currency);
        let shown = store.display_value(ParamField::UnitGp);
        store
            .enter_currency_amount(ParamField::UnitGp, &shown.to_string())
            .unwrap();
        assert_close(store.value(ParamField::UnitGp), 50.0, currency.code());
    }
}

#[test]
fn test_reference_net_formatted() {
    let mut store = ParameterStore::new();
    let net = compute_params(store.params()).net;
    assert_eq!(format_currency(net, store.currency()), "€2,161,920,000");

    store.select_currency(CurrencyCode::Gbp);
    assert_eq!(format_currency(net, store.currency()), "£1,816,012,800");

    store.select_currency(CurrencyCode::Usd);
    assert_eq!(format_currency(net, store.currency()), "US$2,356,492,800");
}

#[test]
fn test_currency_change_does_not_change_model() {
    let mut store = ParameterStore::new();
    let before = store.result();
    store.select_currency(CurrencyCode::Usd);
    assert_eq!(store.result(), before);
}
