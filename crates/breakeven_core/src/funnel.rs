//! The break-even funnel model.
//!
//! Each stage narrows the previous population by a share, then savings and
//! costs are priced per responder and per active user. No tele-dietitian,
//! specialist or emergency components.

use crate::model::{Assumptions, DerivedResult, ModelParameters};

/// Run the funnel for a population head count.
///
/// Pure and total: every finite input produces a finite result. Per-user
/// ratios are defined as 0 when nobody adopts.
#[must_use]
pub fn compute(population: u64, a: &Assumptions) -> DerivedResult {
    let pop_hs = population as f64 * a.hs_share;
    let seekers = pop_hs * a.seek_care;
    price(pop_hs, seekers, seekers * a.adoption, a)
}

/// Run the funnel for the population selected in `params`
#[must_use]
pub fn compute_params(params: &ModelParameters) -> DerivedResult {
    compute(params.population_count(), &params.assumptions)
}

/// Run the funnel with adoption replaced by `adoption`, holding every other
/// assumption at its current value.
#[must_use]
pub fn compute_with_adoption(population: u64, a: &Assumptions, adoption: f64) -> DerivedResult {
    let pop_hs = population as f64 * a.hs_share;
    let seekers = pop_hs * a.seek_care;
    price(pop_hs, seekers, seekers * adoption, a)
}

/// Stages from active users onward
fn price(pop_hs: f64, seekers: f64, active_users: f64, a: &Assumptions) -> DerivedResult {
    let responders = active_users * a.response_rate;

    let gp_savings = responders * a.gp_avoided * a.unit_gp;
    let prod_savings = responders * a.days_saved * a.value_per_day;
    let program_costs = active_users * a.platform_cost;

    let total_gross = gp_savings + prod_savings;
    let net = total_gross - program_costs;

    let (gross_per_user, cost_per_user) = if active_users > 0.0 {
        (total_gross / active_users, program_costs / active_users)
    } else {
        (0.0, 0.0)
    };

    DerivedResult {
        pop_hs,
        seekers,
        active_users,
        responders,
        gp_savings,
        prod_savings,
        program_costs,
        total_gross,
        net,
        gross_per_user,
        cost_per_user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScenarioPreset;

    #[test]
    fn test_zero_population_is_all_zero() {
        let r = compute(0, &ScenarioPreset::Best.assumptions());
        assert_eq!(r, DerivedResult::default());
    }

    #[test]
    fn test_adoption_override_matches_plain_compute() {
        let a = ScenarioPreset::Low.assumptions();
        let plain = compute(1_000_000, &a);
        let overridden = compute_with_adoption(1_000_000, &a, a.adoption);
        assert_eq!(plain, overridden);
    }

    #[test]
    fn test_net_per_user() {
        let r = compute(1_000_000, &ScenarioPreset::Medium.assumptions());
        let expected = r.gross_per_user - r.cost_per_user;
        assert!((r.net_per_user() - expected).abs() < 1e-9);
        assert_eq!(DerivedResult::default().net_per_user(), 0.0);
    }
}
