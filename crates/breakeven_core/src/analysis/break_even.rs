//! Break-even search for single-parameter problems
//!
//! Net savings are monotonic in every one of the nine inputs when the others
//! are held fixed, so bisection on the sign of `net` finds the crossing.

use serde::{Deserialize, Serialize};

use crate::model::{ModelParameters, ParamField};

use super::config::BreakEvenConfig;
use super::evaluator::evaluate_at;

/// Where net savings cross zero, if anywhere in the search range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BreakEvenOutcome {
    /// Net changes sign at this value
    Crossing(f64),
    /// Net is non-negative across the whole range
    AlwaysProfitable,
    /// Net is negative across the whole range
    NeverProfitable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    pub field: ParamField,
    pub outcome: BreakEvenOutcome,
    /// Bisection steps taken (0 when no crossing was bracketed)
    pub iterations: usize,
    pub converged: bool,
}

impl BreakEvenResult {
    /// The crossing value, if there is one
    pub fn value(&self) -> Option<f64> {
        match self.outcome {
            BreakEvenOutcome::Crossing(v) => Some(v),
            _ => None,
        }
    }
}

/// Find the value of `field` at which net savings are zero.
///
/// All other inputs stay at their current values. The search range is the
/// field's slider range, or `[0, direct_entry_max]` for direct-entry fields.
pub fn break_even(
    params: &ModelParameters,
    field: ParamField,
    config: &BreakEvenConfig,
) -> BreakEvenResult {
    let population = params.population_count();
    let net_at = |value: f64| evaluate_at(population, &params.assumptions, field, value).net;

    let (min_val, max_val) = config.range(field);
    let mut low = min_val;
    let mut high = max_val;
    let low_net = net_at(low);
    let high_net = net_at(high);

    // Same sign at both ends: nothing to bracket
    if (low_net >= 0.0) == (high_net >= 0.0) {
        let outcome = if low_net >= 0.0 {
            BreakEvenOutcome::AlwaysProfitable
        } else {
            BreakEvenOutcome::NeverProfitable
        };
        return BreakEvenResult {
            field,
            outcome,
            iterations: 0,
            converged: true,
        };
    }

    let low_is_profitable = low_net >= 0.0;
    let width = max_val - min_val;
    let mut iteration = 0;

    while iteration < config.max_iterations && (high - low) > config.tolerance * width {
        iteration += 1;
        let mid = f64::midpoint(low, high);

        if (net_at(mid) >= 0.0) == low_is_profitable {
            low = mid;
        } else {
            high = mid;
        }
    }

    BreakEvenResult {
        field,
        outcome: BreakEvenOutcome::Crossing(f64::midpoint(low, high)),
        iterations: iteration,
        converged: (high - low) <= config.tolerance * width,
    }
}

/// Break-even results for every field that has a crossing in range
pub fn break_even_all(params: &ModelParameters, config: &BreakEvenConfig) -> Vec<BreakEvenResult> {
    ParamField::ALL
        .into_iter()
        .map(|field| break_even(params, field, config))
        .filter(|r| r.value().is_some())
        .collect()
}
