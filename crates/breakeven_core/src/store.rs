//! Parameter store: the single mutable copy of the model inputs.
//!
//! Every change goes through a field-level mutation. Results are recomputed
//! from scratch on request; nothing is cached.

use crate::analysis;
use crate::currency::{from_display, to_display};
use crate::error::{ParameterError, Result};
use crate::funnel;
use crate::model::{
    Assumptions, CurrencyCode, DerivedResult, ModelParameters, ParamField, PopulationPreset,
    ScenarioPreset, SensitivityPoint,
};

/// A single user edit
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterEdit {
    Population(PopulationPreset),
    Currency(CurrencyCode),
    Scenario(ScenarioPreset),
    /// Set a field to a base-currency / unitless value
    Field(ParamField, f64),
    /// Move a slider by a number of steps
    Step(ParamField, i32),
    /// Typed amount in the display currency for a direct-entry field
    CurrencyEntry(ParamField, String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterStore {
    params: ModelParameters,
}

impl ParameterStore {
    /// EU-27, Medium scenario, EUR
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: ModelParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.params.assumptions
    }

    pub fn population(&self) -> PopulationPreset {
        self.params.population
    }

    pub fn scenario(&self) -> ScenarioPreset {
        self.params.scenario
    }

    pub fn currency(&self) -> CurrencyCode {
        self.params.currency
    }

    /// Overwrite all nine continuous fields with a preset bundle and record
    /// the scenario. Population and currency are left alone.
    pub fn apply_scenario(&mut self, scenario: ScenarioPreset) {
        self.params.scenario = scenario;
        self.params.assumptions = scenario.assumptions();
    }

    pub fn select_population(&mut self, population: PopulationPreset) {
        self.params.population = population;
    }

    pub fn select_currency(&mut self, currency: CurrencyCode) {
        self.params.currency = currency;
    }

    /// Set one field. The recorded scenario does not change.
    ///
    /// Returns the value actually stored (slider fields are clamped).
    pub fn set_field(&mut self, field: ParamField, value: f64) -> Result<f64> {
        let value = field.validate(value)?;
        field.set(&mut self.params.assumptions, value);
        Ok(value)
    }

    /// Nudge a slider field by `steps` increments
    pub fn step_field(&mut self, field: ParamField, steps: i32) -> Result<f64> {
        let value = field.stepped(self.value(field), steps)?;
        field.set(&mut self.params.assumptions, value);
        Ok(value)
    }

    /// Accept a typed amount in the display currency for `unit_gp` or
    /// `value_per_day` and store it in base currency.
    ///
    /// Empty, non-numeric, non-finite and negative input is rejected and the
    /// previous value kept.
    pub fn enter_currency_amount(&mut self, field: ParamField, input: &str) -> Result<f64> {
        if !field.is_direct_entry() {
            return Err(ParameterError::NotCurrencyField(field));
        }
        let entered: f64 = input
            .trim()
            .parse()
            .map_err(|_| ParameterError::InvalidEntry {
                field,
                input: input.to_string(),
            })?;
        let entered = field.validate(entered)?;
        let base = from_display(entered, self.params.currency);
        field.set(&mut self.params.assumptions, base);
        Ok(base)
    }

    /// Apply an edit event
    pub fn apply(&mut self, edit: ParameterEdit) -> Result<()> {
        match edit {
            ParameterEdit::Population(p) => self.select_population(p),
            ParameterEdit::Currency(c) => self.select_currency(c),
            ParameterEdit::Scenario(s) => self.apply_scenario(s),
            ParameterEdit::Field(field, value) => {
                self.set_field(field, value)?;
            }
            ParameterEdit::Step(field, steps) => {
                self.step_field(field, steps)?;
            }
            ParameterEdit::CurrencyEntry(field, input) => {
                self.enter_currency_amount(field, &input)?;
            }
        }
        Ok(())
    }

    /// Stored value of a field (base currency for money)
    pub fn value(&self, field: ParamField) -> f64 {
        field.get(&self.params.assumptions)
    }

    /// Value as shown to the user: monetary fields in display currency
    pub fn display_value(&self, field: ParamField) -> f64 {
        let value = self.value(field);
        if field.is_monetary() {
            to_display(value, self.params.currency)
        } else {
            value
        }
    }

    /// Fresh funnel result for the current inputs
    pub fn result(&self) -> DerivedResult {
        funnel::compute_params(&self.params)
    }

    /// Fresh adoption sensitivity series for the current inputs
    pub fn sensitivity(&self) -> Vec<SensitivityPoint> {
        analysis::sensitivity(&self.params)
    }
}
