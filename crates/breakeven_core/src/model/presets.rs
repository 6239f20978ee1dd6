//! Fixed population and scenario tables.
//!
//! Scenario bundles come from ranges explored by an external Monte Carlo study
//! (no tele-dietitian, specialist or emergency components). They are constants
//! here, nothing is sampled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::params::Assumptions;
use crate::error::ParameterError;

/// How a population preset is grouped in selection lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopulationGroup {
    CombinedRegions,
    ContinentalRegions,
    Countries,
}

impl PopulationGroup {
    pub fn name(&self) -> &'static str {
        match self {
            PopulationGroup::CombinedRegions => "Combined regions",
            PopulationGroup::ContinentalRegions => "Continental regions",
            PopulationGroup::Countries => "Countries",
        }
    }
}

/// Population the model is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PopulationPreset {
    #[serde(rename = "North America + Europe")]
    NorthAmericaEurope,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "Europe")]
    Europe,
    #[default]
    #[serde(rename = "EU-27")]
    Eu27,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "Germany")]
    Germany,
}

impl PopulationPreset {
    /// Presets in display order
    pub const ALL: [PopulationPreset; 7] = [
        PopulationPreset::NorthAmericaEurope,
        PopulationPreset::NorthAmerica,
        PopulationPreset::Europe,
        PopulationPreset::Eu27,
        PopulationPreset::Us,
        PopulationPreset::Uk,
        PopulationPreset::Germany,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PopulationPreset::NorthAmericaEurope => "North America + Europe",
            PopulationPreset::NorthAmerica => "North America",
            PopulationPreset::Europe => "Europe",
            PopulationPreset::Eu27 => "EU-27",
            PopulationPreset::Us => "US",
            PopulationPreset::Uk => "UK",
            PopulationPreset::Germany => "Germany",
        }
    }

    /// Head count
    pub fn count(&self) -> u64 {
        match self {
            PopulationPreset::NorthAmericaEurope => 1_252_900_000,
            PopulationPreset::NorthAmerica => 502_900_000,
            PopulationPreset::Europe => 750_000_000,
            PopulationPreset::Eu27 => 450_400_000,
            PopulationPreset::Us => 334_900_000,
            PopulationPreset::Uk => 67_700_000,
            PopulationPreset::Germany => 84_400_000,
        }
    }

    pub fn group(&self) -> PopulationGroup {
        match self {
            PopulationPreset::NorthAmericaEurope => PopulationGroup::CombinedRegions,
            PopulationPreset::NorthAmerica | PopulationPreset::Europe | PopulationPreset::Eu27 => {
                PopulationGroup::ContinentalRegions
            }
            PopulationPreset::Us | PopulationPreset::Uk | PopulationPreset::Germany => {
                PopulationGroup::Countries
            }
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|p| p == self)
            .unwrap_or_default()
    }

    /// Next preset in display order, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PopulationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop everything but letters and digits, so "EU-27",
/// "eu27" and "Eu 27" all compare equal.
fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for PopulationPreset {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|p| normalize_key(p.name()) == key)
            .ok_or_else(|| ParameterError::UnknownPopulation(s.to_string()))
    }
}

/// Named bundle of the nine continuous assumptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScenarioPreset {
    Low,
    #[default]
    Medium,
    Best,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 3] = [
        ScenarioPreset::Low,
        ScenarioPreset::Medium,
        ScenarioPreset::Best,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioPreset::Low => "Low",
            ScenarioPreset::Medium => "Medium",
            ScenarioPreset::Best => "Best",
        }
    }

    /// The preset's parameter values
    pub fn assumptions(&self) -> Assumptions {
        match self {
            ScenarioPreset::Low => Assumptions {
                hs_share: 0.05,
                seek_care: 0.30,
                adoption: 0.10,
                response_rate: 0.40,
                gp_avoided: 0.5,
                days_saved: 1.0,
                platform_cost: 30.0,
                unit_gp: 40.0,
                value_per_day: 120.0,
            },
            ScenarioPreset::Medium => Assumptions {
                hs_share: 0.20,
                seek_care: 0.40,
                adoption: 0.30,
                response_rate: 0.55,
                gp_avoided: 0.8,
                days_saved: 2.0,
                platform_cost: 20.0,
                unit_gp: 50.0,
                value_per_day: 180.0,
            },
            ScenarioPreset::Best => Assumptions {
                hs_share: 0.25,
                seek_care: 0.60,
                adoption: 0.50,
                response_rate: 0.70,
                gp_avoided: 1.5,
                days_saved: 5.0,
                platform_cost: 10.0,
                unit_gp: 60.0,
                value_per_day: 268.0,
            },
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ScenarioPreset::Low => 0,
            ScenarioPreset::Medium => 1,
            ScenarioPreset::Best => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioPreset {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|p| normalize_key(p.name()) == key)
            .ok_or_else(|| ParameterError::UnknownScenario(s.to_string()))
    }
}
