//! Break-even model for a symptom-tracking programme
//!
//! This crate converts population and behavioural-funnel assumptions into
//! annual cost and savings projections. It provides:
//! - Population, scenario and currency presets
//! - A parameter store with field-level edits and scenario bulk overwrite
//! - The funnel model (population -> responders -> savings/costs)
//! - Adoption sensitivity sweeps and general single-parameter sweeps
//! - Break-even search over any continuous parameter
//! - Currency conversion and display formatting
//!
//! Everything here is pure and synchronous. The caller owns a
//! [`ParameterStore`], mutates it, and asks for a fresh result afterwards.
//!
//! # Builder DSL
//!
//! ```ignore
//! use breakeven_core::{ModelBuilder, funnel};
//! use breakeven_core::model::{CurrencyCode, PopulationPreset, ScenarioPreset};
//!
//! let params = ModelBuilder::new()
//!     .population(PopulationPreset::Germany)
//!     .scenario(ScenarioPreset::Low)
//!     .currency(CurrencyCode::Gbp)
//!     .platform_cost(15.0)
//!     .build();
//!
//! let result = funnel::compute_params(&params);
//! println!("net: {}", breakeven_core::currency::format_currency(result.net, params.currency));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod currency;
pub mod error;
pub mod funnel;
pub mod store;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::ModelBuilder;
pub use error::ParameterError;
pub use model::{
    Assumptions, CurrencyCode, DerivedResult, ModelParameters, ParamField, PopulationPreset,
    ScenarioPreset,
};
pub use store::{ParameterEdit, ParameterStore};
