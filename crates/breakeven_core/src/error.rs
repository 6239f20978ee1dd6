use std::fmt;

use crate::model::ParamField;

/// Errors raised when an edit cannot be applied to the parameter store.
///
/// A rejected edit never reaches the model: the store keeps the last valid
/// value for the field.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// NaN or infinite value
    NonFinite { field: ParamField, value: f64 },
    /// Negative value for a field that has no slider bounds
    Negative { field: ParamField, value: f64 },
    /// Direct entry text that does not parse as a number
    InvalidEntry { field: ParamField, input: String },
    /// Direct currency entry attempted on a non-currency field
    NotCurrencyField(ParamField),
    /// Slider step attempted on a field without slider bounds
    NotSliderField(ParamField),
    UnknownPopulation(String),
    UnknownScenario(String),
    UnknownCurrency(String),
    UnknownField(String),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonFinite { field, value } => {
                write!(f, "{} must be a finite number (got {value})", field.label())
            }
            ParameterError::Negative { field, value } => {
                write!(f, "{} cannot be negative (got {value})", field.label())
            }
            ParameterError::InvalidEntry { field, input } => {
                write!(f, "'{input}' is not a valid amount for {}", field.label())
            }
            ParameterError::NotCurrencyField(field) => {
                write!(f, "{} is not a currency amount", field.label())
            }
            ParameterError::NotSliderField(field) => {
                write!(f, "{} has no slider range", field.label())
            }
            ParameterError::UnknownPopulation(name) => write!(f, "unknown population '{name}'"),
            ParameterError::UnknownScenario(name) => write!(f, "unknown scenario '{name}'"),
            ParameterError::UnknownCurrency(code) => write!(f, "unknown currency '{code}'"),
            ParameterError::UnknownField(name) => write!(f, "unknown parameter '{name}'"),
        }
    }
}

impl std::error::Error for ParameterError {}

pub type Result<T> = std::result::Result<T, ParameterError>;
