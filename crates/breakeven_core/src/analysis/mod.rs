//! Sensitivity and break-even analysis.
//!
//! Everything here re-runs the funnel with one parameter overridden and all
//! others held at their live values.
//!
//! # Adoption sensitivity
//!
//! The dashboard chart is eleven points at 0%, 10%, ..., 100% adoption, net
//! savings in millions of the display currency:
//!
//! ```ignore
//! use breakeven_core::analysis::sensitivity;
//!
//! let bars = sensitivity(&params);
//! assert_eq!(bars.len(), 11);
//! ```
//!
//! # General sweeps
//!
//! ```ignore
//! use breakeven_core::analysis::{SweepParameter, sweep_evaluate};
//! use breakeven_core::model::ParamField;
//!
//! let sweep = SweepParameter::over_bounds(ParamField::PlatformCost, 12)?;
//! for point in sweep_evaluate(&params, &sweep) {
//!     println!("{:.0} -> {:.0}", point.value, point.result.net);
//! }
//! ```
//!
//! # Break-even search
//!
//! Bisection for the value of one parameter at which net savings are zero:
//!
//! ```ignore
//! use breakeven_core::analysis::{BreakEvenConfig, break_even};
//!
//! let result = break_even(&params, ParamField::PlatformCost, &BreakEvenConfig::default());
//! ```

mod break_even;
mod config;
mod evaluator;

pub use break_even::*;
pub use config::*;
pub use evaluator::*;
