use serde::{Deserialize, Serialize};

/// Output of one funnel pass. Monetary fields are in base currency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedResult {
    /// People with food hypersensitivities
    pub pop_hs: f64,
    /// ...who seek care for symptoms
    pub seekers: f64,
    /// ...who adopt the app
    pub active_users: f64,
    /// ...whose symptoms improve with the app
    pub responders: f64,

    /// Savings from fewer GP visits
    pub gp_savings: f64,
    /// Productivity savings from workdays regained
    pub prod_savings: f64,
    /// Platform cost for all active users
    pub program_costs: f64,

    pub total_gross: f64,
    pub net: f64,

    /// Gross savings per active user, 0 when there are no users
    pub gross_per_user: f64,
    /// Programme cost per active user, 0 when there are no users
    pub cost_per_user: f64,
}

impl DerivedResult {
    /// Net savings per active user, 0 when there are no users
    #[must_use]
    pub fn net_per_user(&self) -> f64 {
        if self.active_users > 0.0 {
            self.net / self.active_users
        } else {
            0.0
        }
    }

    /// Savings cover costs
    #[must_use]
    pub fn breaks_even(&self) -> bool {
        self.net >= 0.0
    }
}

/// One bar of the adoption sensitivity chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Adoption among care-seekers, 0..=100
    pub adoption_percent: u32,
    /// Net annual savings in millions of the display currency, rounded
    pub net_millions: i64,
}
