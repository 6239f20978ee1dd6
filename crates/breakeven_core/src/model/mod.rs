mod params;
mod presets;
mod rates;
mod results;

pub use params::{Assumptions, ModelParameters, ParamField};
pub use presets::{PopulationGroup, PopulationPreset, ScenarioPreset};
pub use rates::{BASE_CURRENCY, CurrencyCode};
pub use results::{DerivedResult, SensitivityPoint};
