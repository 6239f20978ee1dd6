mod app_state;
mod controls;
mod modal;
mod tabs;

pub use app_state::*;
pub use controls::*;
pub use modal::*;
pub use tabs::*;
