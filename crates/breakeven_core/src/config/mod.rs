//! Model configuration
//!
//! The main configuration type is [`ModelParameters`](crate::model::ModelParameters).
//! The builder DSL assembles one from presets plus individual overrides:
//!
//! ```ignore
//! use breakeven_core::config::ModelBuilder;
//! use breakeven_core::model::{CurrencyCode, PopulationPreset, ScenarioPreset};
//!
//! let params = ModelBuilder::new()
//!     .population(PopulationPreset::Us)
//!     .scenario(ScenarioPreset::Best)
//!     .currency(CurrencyCode::Usd)
//!
//!     // Overrides are applied on top of the scenario, whatever the call order
//!     .adoption(0.2)
//!     .unit_gp(75.0)
//!
//!     .build();
//! ```

mod builder;

pub use builder::ModelBuilder;
