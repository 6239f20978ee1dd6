//! Model Builder
//!
//! Fluent construction of [`ModelParameters`]. The scenario preset is laid
//! down first and individual field overrides are applied on top of it, so
//! `.unit_gp(75.0).scenario(ScenarioPreset::Low)` still ends with a unit GP
//! cost of 75.

use crate::error::ParameterError;
use crate::model::{
    CurrencyCode, ModelParameters, ParamField, PopulationPreset, ScenarioPreset,
};

/// Builder for [`ModelParameters`]
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    population: PopulationPreset,
    scenario: ScenarioPreset,
    currency: CurrencyCode,

    // Resolved during build, in insertion order
    overrides: Vec<(ParamField, f64)>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn population(mut self, population: PopulationPreset) -> Self {
        self.population = population;
        self
    }

    pub fn scenario(mut self, scenario: ScenarioPreset) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    /// Override one field (base currency for money)
    pub fn field(mut self, field: ParamField, value: f64) -> Self {
        self.overrides.push((field, value));
        self
    }

    pub fn hs_share(self, value: f64) -> Self {
        self.field(ParamField::HsShare, value)
    }

    pub fn seek_care(self, value: f64) -> Self {
        self.field(ParamField::SeekCare, value)
    }

    pub fn adoption(self, value: f64) -> Self {
        self.field(ParamField::Adoption, value)
    }

    pub fn response_rate(self, value: f64) -> Self {
        self.field(ParamField::ResponseRate, value)
    }

    pub fn gp_avoided(self, value: f64) -> Self {
        self.field(ParamField::GpAvoided, value)
    }

    pub fn days_saved(self, value: f64) -> Self {
        self.field(ParamField::DaysSaved, value)
    }

    pub fn platform_cost(self, value: f64) -> Self {
        self.field(ParamField::PlatformCost, value)
    }

    pub fn unit_gp(self, value: f64) -> Self {
        self.field(ParamField::UnitGp, value)
    }

    pub fn value_per_day(self, value: f64) -> Self {
        self.field(ParamField::ValuePerDay, value)
    }

    /// Build without validating overrides. Values are stored as given, which
    /// lets tests and benchmarks probe inputs outside the slider ranges.
    pub fn build(self) -> ModelParameters {
        let mut params = self.base();
        for (field, value) in self.overrides {
            field.set(&mut params.assumptions, value);
        }
        params
    }

    /// Build with the same validation the parameter store applies to edits:
    /// slider fields are clamped, non-finite or negative direct entries fail.
    pub fn build_validated(self) -> Result<ModelParameters, ParameterError> {
        let mut params = self.base();
        for (field, value) in self.overrides {
            let value = field.validate(value)?;
            field.set(&mut params.assumptions, value);
        }
        Ok(params)
    }

    fn base(&self) -> ModelParameters {
        ModelParameters {
            population: self.population,
            scenario: self.scenario,
            currency: self.currency,
            assumptions: self.scenario.assumptions(),
        }
    }
}
