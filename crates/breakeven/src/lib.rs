//! Terminal front-end for the break-even model
//!
//! Renders the parameter controls, key outputs and adoption sensitivity chart
//! of [`breakeven_core`] in a ratatui dashboard, and offers a non-interactive
//! report mode for scripting.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod modals;
pub mod report;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
