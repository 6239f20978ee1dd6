//! Sweep evaluator: re-runs the funnel with one parameter replaced.

use serde::{Deserialize, Serialize};

use crate::currency::to_display;
use crate::funnel;
use crate::model::{
    Assumptions, CurrencyCode, DerivedResult, ModelParameters, ParamField, SensitivityPoint,
};

use super::SweepParameter;

/// Result at one sweep value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub result: DerivedResult,
}

/// Evaluate the funnel at every value of `sweep`, holding all other
/// assumptions at their current values. Sweep values are used as given, not
/// clamped to slider bounds.
pub fn sweep_evaluate(params: &ModelParameters, sweep: &SweepParameter) -> Vec<SweepPoint> {
    sweep
        .sweep_values()
        .into_iter()
        .map(|value| SweepPoint {
            value,
            result: evaluate_at(params.population_count(), &params.assumptions, sweep.field, value),
        })
        .collect()
}

/// Run the funnel with a single field overridden
pub fn evaluate_at(population: u64, base: &Assumptions, field: ParamField, value: f64) -> DerivedResult {
    let mut assumptions = *base;
    field.set(&mut assumptions, value);
    funnel::compute(population, &assumptions)
}

/// Adoption sensitivity series for the chart.
///
/// Eleven points at adoption `i * 0.1` for `i` in `0..=10`. Net savings are
/// converted to the display currency, divided by one million and rounded.
pub fn sensitivity(params: &ModelParameters) -> Vec<SensitivityPoint> {
    adoption_sweep(params.population_count(), &params.assumptions, params.currency)
}

/// [`sensitivity`] with the population and currency given explicitly
pub fn adoption_sweep(
    population: u64,
    assumptions: &Assumptions,
    currency: CurrencyCode,
) -> Vec<SensitivityPoint> {
    SweepParameter::adoption()
        .sweep_values()
        .into_iter()
        .map(|adoption| {
            let result = funnel::compute_with_adoption(population, assumptions, adoption);
            SensitivityPoint {
                adoption_percent: (adoption * 100.0).round() as u32,
                net_millions: round_half_up(to_display(result.net, currency) / 1e6) as i64,
            }
        })
        .collect()
}

/// Nearest integer, with halves going toward positive infinity
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScenarioPreset;

    #[test]
    fn test_evaluate_at_leaves_base_untouched() {
        let base = ScenarioPreset::Medium.assumptions();
        let _ = evaluate_at(1_000, &base, ParamField::UnitGp, 999.0);
        assert_eq!(base, ScenarioPreset::Medium.assumptions());
    }

    #[test]
    fn test_sweep_evaluate_point_count() {
        let params = ModelParameters::default();
        let sweep = SweepParameter::over_bounds(ParamField::DaysSaved, 8).unwrap();
        let points = sweep_evaluate(&params, &sweep);
        assert_eq!(points.len(), 8);
        assert_eq!(points[0].value, 0.0);
        assert_eq!(points[7].value, 7.0);
    }

    #[test]
    fn test_adoption_percent_labels() {
        let points = sensitivity(&ModelParameters::default());
        let labels: Vec<u32> = points.iter().map(|p| p.adoption_percent).collect();
        assert_eq!(labels, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_round_half_up_on_negative_halves() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }

    #[test]
    fn test_sensitivity_negative_half_million_rounds_up() {
        // One seeker; net at full adoption is exactly -0.5 M€
        let assumptions = Assumptions {
            hs_share: 1.0,
            seek_care: 1.0,
            adoption: 0.3,
            response_rate: 0.0,
            gp_avoided: 0.0,
            days_saved: 0.0,
            unit_gp: 0.0,
            value_per_day: 0.0,
            platform_cost: 500_000.0,
        };
        let points = adoption_sweep(1, &assumptions, CurrencyCode::Eur);
        assert_eq!(points[10].net_millions, 0);
        assert_eq!(points[0].net_millions, 0);
    }
}
