use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::presets::{PopulationPreset, ScenarioPreset};
use super::rates::CurrencyCode;
use crate::error::ParameterError;

/// The nine continuous model inputs.
///
/// Monetary fields (`platform_cost`, `unit_gp`, `value_per_day`) are always in
/// base currency, whatever the display currency is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Share of the population with food hypersensitivities
    pub hs_share: f64,
    /// Share of those who seek care for symptoms
    pub seek_care: f64,
    /// Share of care-seekers who adopt the app
    pub adoption: f64,
    /// Share of active users whose symptoms improve
    pub response_rate: f64,
    /// GP visits avoided per responder per year
    pub gp_avoided: f64,
    /// Workdays saved per responder per year
    pub days_saved: f64,
    /// Platform cost per active user per year
    pub platform_cost: f64,
    /// Cost of one GP visit
    pub unit_gp: f64,
    /// Value of one workday
    pub value_per_day: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        ScenarioPreset::default().assumptions()
    }
}

/// Complete input state for one computation pass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelParameters {
    pub population: PopulationPreset,
    pub scenario: ScenarioPreset,
    pub currency: CurrencyCode,
    pub assumptions: Assumptions,
}

impl ModelParameters {
    /// Head count of the selected population
    pub fn population_count(&self) -> u64 {
        self.population.count()
    }
}

/// Identifies one of the nine continuous inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamField {
    HsShare,
    SeekCare,
    Adoption,
    ResponseRate,
    GpAvoided,
    DaysSaved,
    PlatformCost,
    UnitGp,
    ValuePerDay,
}

impl ParamField {
    /// Fields in control-panel order
    pub const ALL: [ParamField; 9] = [
        ParamField::HsShare,
        ParamField::SeekCare,
        ParamField::Adoption,
        ParamField::ResponseRate,
        ParamField::GpAvoided,
        ParamField::DaysSaved,
        ParamField::PlatformCost,
        ParamField::UnitGp,
        ParamField::ValuePerDay,
    ];

    /// Machine name, as used in config files
    pub fn name(&self) -> &'static str {
        match self {
            ParamField::HsShare => "hs_share",
            ParamField::SeekCare => "seek_care",
            ParamField::Adoption => "adoption",
            ParamField::ResponseRate => "response_rate",
            ParamField::GpAvoided => "gp_avoided",
            ParamField::DaysSaved => "days_saved",
            ParamField::PlatformCost => "platform_cost",
            ParamField::UnitGp => "unit_gp",
            ParamField::ValuePerDay => "value_per_day",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParamField::HsShare => "Food hypersensitivity share of population",
            ParamField::SeekCare => "Care-seeking rate (among those with symptoms)",
            ParamField::Adoption => "App adoption (among care-seekers)",
            ParamField::ResponseRate => "Response rate (symptom improvement)",
            ParamField::GpAvoided => "GP visits avoided per responder (per year)",
            ParamField::DaysSaved => "Workdays saved per responder (per year)",
            ParamField::PlatformCost => "Platform cost per active user",
            ParamField::UnitGp => "GP visit unit cost",
            ParamField::ValuePerDay => "Value per workday",
        }
    }

    /// Slider range. `None` for the direct-entry currency fields.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            ParamField::HsShare => Some((0.05, 0.25)),
            ParamField::SeekCare => Some((0.10, 0.80)),
            ParamField::Adoption => Some((0.01, 0.80)),
            ParamField::ResponseRate => Some((0.20, 0.90)),
            ParamField::GpAvoided => Some((0.0, 3.0)),
            ParamField::DaysSaved => Some((0.0, 7.0)),
            ParamField::PlatformCost => Some((5.0, 60.0)),
            ParamField::UnitGp | ParamField::ValuePerDay => None,
        }
    }

    /// Slider increment
    pub fn step(&self) -> Option<f64> {
        match self {
            ParamField::HsShare => Some(0.005),
            ParamField::SeekCare
            | ParamField::Adoption
            | ParamField::ResponseRate => Some(0.01),
            ParamField::GpAvoided | ParamField::DaysSaved => Some(0.1),
            ParamField::PlatformCost => Some(1.0),
            ParamField::UnitGp | ParamField::ValuePerDay => None,
        }
    }

    /// Whether the value is a fraction shown as a percentage
    pub fn is_fraction(&self) -> bool {
        matches!(
            self,
            ParamField::HsShare
                | ParamField::SeekCare
                | ParamField::Adoption
                | ParamField::ResponseRate
        )
    }

    /// Whether the value is an amount of money (stored in base currency)
    pub fn is_monetary(&self) -> bool {
        matches!(
            self,
            ParamField::PlatformCost | ParamField::UnitGp | ParamField::ValuePerDay
        )
    }

    /// Whether the field is typed in, in display currency, rather than slid
    pub fn is_direct_entry(&self) -> bool {
        self.bounds().is_none()
    }

    pub fn get(&self, a: &Assumptions) -> f64 {
        match self {
            ParamField::HsShare => a.hs_share,
            ParamField::SeekCare => a.seek_care,
            ParamField::Adoption => a.adoption,
            ParamField::ResponseRate => a.response_rate,
            ParamField::GpAvoided => a.gp_avoided,
            ParamField::DaysSaved => a.days_saved,
            ParamField::PlatformCost => a.platform_cost,
            ParamField::UnitGp => a.unit_gp,
            ParamField::ValuePerDay => a.value_per_day,
        }
    }

    /// Write a value without any validation
    pub fn set(&self, a: &mut Assumptions, value: f64) {
        let slot = match self {
            ParamField::HsShare => &mut a.hs_share,
            ParamField::SeekCare => &mut a.seek_care,
            ParamField::Adoption => &mut a.adoption,
            ParamField::ResponseRate => &mut a.response_rate,
            ParamField::GpAvoided => &mut a.gp_avoided,
            ParamField::DaysSaved => &mut a.days_saved,
            ParamField::PlatformCost => &mut a.platform_cost,
            ParamField::UnitGp => &mut a.unit_gp,
            ParamField::ValuePerDay => &mut a.value_per_day,
        };
        *slot = value;
    }

    /// Check a candidate value and bring it into the field's domain.
    ///
    /// Slider fields are clamped to their bounds. Direct-entry fields reject
    /// negative values outright.
    pub fn validate(&self, value: f64) -> Result<f64, ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::NonFinite {
                field: *self,
                value,
            });
        }
        match self.bounds() {
            Some((min, max)) => Ok(value.clamp(min, max)),
            None if value < 0.0 => Err(ParameterError::Negative {
                field: *self,
                value,
            }),
            None => Ok(value),
        }
    }

    /// Move a slider value by `steps` increments, snapping to the step grid
    /// anchored at the lower bound.
    pub fn stepped(&self, current: f64, steps: i32) -> Result<f64, ParameterError> {
        let (Some((min, max)), Some(step)) = (self.bounds(), self.step()) else {
            return Err(ParameterError::NotSliderField(*self));
        };
        let ticks = ((current - min) / step).round() + f64::from(steps);
        Ok((min + ticks * step).clamp(min, max))
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamField {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|f| f.name().replace('_', "") == key)
            .ok_or_else(|| ParameterError::UnknownField(s.to_string()))
    }
}
