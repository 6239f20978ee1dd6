//! Integration tests for the break-even model
//!
//! Tests are organized by topic:
//! - `funnel` - Funnel arithmetic, invariants and the EU-27 reference case
//! - `sensitivity` - Adoption sweep and agreement with the main result
//! - `currency` - Conversion round trips and display formatting
//! - `store` - Scenario application and field-level edits
//! - `builder_dsl` - Builder DSL for fluent parameter setup

mod currency;
mod funnel;
mod store;

/// Relative comparison for large monetary values
pub(crate) fn assert_close(actual: f64, expected: f64, what: &str) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: expected {expected}, got {actual}"
    );
}
