//! Non-interactive summary for `--report`: plain text or JSON.

use breakeven_core::analysis::{BreakEvenConfig, BreakEvenOutcome, break_even_all};
use breakeven_core::currency::{format_count, format_currency, format_millions};
use breakeven_core::model::SensitivityPoint;
use breakeven_core::{
    Assumptions, CurrencyCode, DerivedResult, ParamField, ParameterStore, PopulationPreset,
    ScenarioPreset,
};
use serde::Serialize;

use crate::util::format::format_field_value;

/// A parameter value at which net savings reach zero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Threshold {
    pub field: ParamField,
    /// Stored units (base currency for money)
    pub value: f64,
}

/// Everything the dashboard shows, as plain data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub population: PopulationPreset,
    pub population_count: u64,
    pub scenario: ScenarioPreset,
    pub currency: CurrencyCode,
    /// Monetary values in base currency
    pub assumptions: Assumptions,
    /// Monetary values in base currency
    pub result: DerivedResult,
    pub net_per_user: f64,
    pub sensitivity: Vec<SensitivityPoint>,
    pub break_even: Vec<Threshold>,
}

impl Report {
    pub fn from_store(store: &ParameterStore, config: &BreakEvenConfig) -> Self {
        let result = store.result();
        let break_even = break_even_all(store.params(), config)
            .into_iter()
            .filter_map(|r| match r.outcome {
                BreakEvenOutcome::Crossing(value) => Some(Threshold {
                    field: r.field,
                    value,
                }),
                _ => None,
            })
            .collect();

        Self {
            population: store.population(),
            population_count: store.population().count(),
            scenario: store.scenario(),
            currency: store.currency(),
            assumptions: *store.assumptions(),
            net_per_user: result.net_per_user(),
            result,
            sensitivity: store.sensitivity(),
            break_even,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary in the display currency
    pub fn to_text(&self) -> String {
        let c = self.currency;
        let r = &self.result;
        let mut out = String::new();

        out.push_str("Break-even Dashboard\n");
        out.push_str(&format!(
            "{} ({} people) | {} scenario | {}\n\n",
            self.population,
            format_count(self.population_count as f64),
            self.scenario,
            c
        ));

        out.push_str("Model controls\n");
        for field in ParamField::ALL {
            out.push_str(&format!(
                "  {:<48}{}\n",
                field.label(),
                format_field_value(field, field.get(&self.assumptions), c)
            ));
        }

        out.push_str("\nKey outputs\n");
        let rows = [
            ("Active users (annual)", format_count(r.active_users)),
            ("Responders (symptom improved)", format_count(r.responders)),
            ("Total gross savings (annual)", format_currency(r.total_gross, c)),
            ("Program costs (annual)", format_currency(r.program_costs, c)),
            ("Net annual savings", format_currency(r.net, c)),
            ("Net per active user", format_currency(self.net_per_user, c)),
        ];
        for (label, value) in rows {
            out.push_str(&format!("  {:<32}{}\n", label, value));
        }

        out.push_str(&format!(
            "\nAdoption sensitivity (net savings in {} millions)\n",
            c.symbol()
        ));
        for point in &self.sensitivity {
            out.push_str(&format!(
                "  {:>3}%  {}\n",
                point.adoption_percent,
                format_millions(point.net_millions, c)
            ));
        }

        out.push_str("\nBreak-even thresholds\n");
        if self.break_even.is_empty() {
            out.push_str("  none within parameter ranges\n");
        }
        for threshold in &self.break_even {
            out.push_str(&format!(
                "  {:<48}{}\n",
                threshold.field.label(),
                format_field_value(threshold.field, threshold.value, c)
            ));
        }

        out
    }
}
