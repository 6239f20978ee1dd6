//! Configuration types for sweeps and break-even search.

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::model::ParamField;

/// Number of bars in the adoption sensitivity chart
pub const SENSITIVITY_POINTS: usize = 11;

/// Single-parameter sweep definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepParameter {
    /// The input to vary
    pub field: ParamField,
    /// Minimum value for the sweep
    pub min_value: f64,
    /// Maximum value for the sweep
    pub max_value: f64,
    /// Number of steps (points) in the sweep
    pub step_count: usize,
}

impl SweepParameter {
    pub fn new(field: ParamField, min_value: f64, max_value: f64, step_count: usize) -> Self {
        Self {
            field,
            min_value,
            max_value,
            step_count,
        }
    }

    /// Adoption from 0% to 100% in 10% steps. Deliberately wider than the
    /// adoption slider.
    pub fn adoption() -> Self {
        Self::new(ParamField::Adoption, 0.0, 1.0, SENSITIVITY_POINTS)
    }

    /// Sweep a slider field across its full range
    pub fn over_bounds(field: ParamField, step_count: usize) -> Result<Self, ParameterError> {
        let (min, max) = field
            .bounds()
            .ok_or(ParameterError::NotSliderField(field))?;
        Ok(Self::new(field, min, max, step_count))
    }

    /// Generate the sweep values.
    ///
    /// Computed as `min + step * i` rather than by accumulation, so value `i`
    /// of the adoption sweep is exactly `i * 0.1`.
    pub fn sweep_values(&self) -> Vec<f64> {
        if self.step_count <= 1 {
            return vec![self.min_value];
        }
        let step_size = (self.max_value - self.min_value) / (self.step_count - 1) as f64;
        (0..self.step_count)
            .map(|i| self.min_value + step_size * i as f64)
            .collect()
    }

    /// Get a descriptive label for display
    pub fn label(&self) -> String {
        format!("{} ({} points)", self.field.label(), self.step_count)
    }
}

/// Search settings for [`super::break_even`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenConfig {
    /// Upper end of the search range for fields without slider bounds, in
    /// base currency. The lower end is 0.
    pub direct_entry_max: f64,
    /// Stop when the bracket is narrower than this fraction of the range
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for BreakEvenConfig {
    fn default() -> Self {
        Self {
            direct_entry_max: 1_000.0,
            tolerance: 1e-9,
            max_iterations: 100,
        }
    }
}

impl BreakEvenConfig {
    /// Search range for a field
    pub fn range(&self, field: ParamField) -> (f64, f64) {
        field.bounds().unwrap_or((0.0, self.direct_entry_max))
    }
}
