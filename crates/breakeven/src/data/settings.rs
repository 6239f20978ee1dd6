//! Startup settings read from `config.yaml`.
//!
//! ```yaml
//! population: Germany
//! scenario: Low
//! currency: GBP
//! fields:
//!   platform_cost: 25     # base currency (EUR)
//!   days_saved: 2.5
//! ```
//!
//! Every key is optional. Field overrides are applied on top of the scenario
//! bundle; monetary overrides are in base currency.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use breakeven_core::{
    CurrencyCode, ModelBuilder, ModelParameters, ParamField, PopulationPreset, ScenarioPreset,
};
use serde::{Deserialize, Serialize};

/// Config file name inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "IO error: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub population: Option<String>,
    pub scenario: Option<String>,
    pub currency: Option<String>,
    /// Per-field overrides keyed by field name
    pub fields: BTreeMap<String, f64>,
}

impl Settings {
    /// Default config path for a data directory
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        serde_saphyr::from_str(yaml).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Read settings from `path`. A missing file yields `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("{}: {}", path.display(), e)))?;
        // An empty file is a valid, empty config
        if content.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        Self::from_yaml(&content).map(Some)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(settings)) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                tracing::debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolve names and overrides into model parameters
    pub fn to_params(&self) -> Result<ModelParameters, SettingsError> {
        let mut builder = ModelBuilder::new();

        if let Some(name) = &self.population {
            builder = builder.population(parse_setting::<PopulationPreset>(name)?);
        }
        if let Some(name) = &self.scenario {
            builder = builder.scenario(parse_setting::<ScenarioPreset>(name)?);
        }
        if let Some(code) = &self.currency {
            builder = builder.currency(parse_setting::<CurrencyCode>(code)?);
        }
        for (key, value) in &self.fields {
            builder = builder.field(parse_setting::<ParamField>(key)?, *value);
        }

        builder
            .build_validated()
            .map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Resolve into parameters, falling back to defaults if a name or value
    /// is invalid
    pub fn to_params_or_default(&self) -> ModelParameters {
        self.to_params().unwrap_or_else(|e| {
            tracing::warn!("Invalid settings, using defaults: {}", e);
            ModelParameters::default()
        })
    }
}

fn parse_setting<T>(value: &str) -> Result<T, SettingsError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| SettingsError::Parse(e.to_string()))
}
