//! Tests for the funnel model
//!
//! These tests verify:
//! - The EU-27 / Medium reference figures
//! - Monotone narrowing of the funnel for every preset combination
//! - Exact additive identities for gross and net
//! - Zero-adoption per-user ratios

use super::assert_close;
use crate::config::ModelBuilder;
use crate::funnel::{compute, compute_params};
use crate::model::{Assumptions, ParamField, PopulationPreset, ScenarioPreset};

/// EU-27, Medium scenario, EUR
#[test]
fn test_eu27_medium_reference_case() {
    let params = ModelBuilder::new()
        .population(PopulationPreset::Eu27)
        .scenario(ScenarioPreset::Medium)
        .build();
    assert_eq!(params.population_count(), 450_400_000);

    let r = compute_params(&params);

    assert_close(r.pop_hs, 90_080_000.0, "popHS");
    assert_close(r.seekers, 36_032_000.0, "seekers");
    assert_close(r.active_users, 10_809_600.0, "activeUsers");
    assert_close(r.responders, 5_945_280.0, "responders");
    assert_close(r.gp_savings, 237_811_200.0, "gpSavings");
    assert_close(r.prod_savings, 2_140_300_800.0, "prodSavings");
    assert_close(r.program_costs, 216_192_000.0, "programCosts");
    assert_close(r.total_gross, 2_378_112_000.0, "totalGross");
    assert_close(r.net, 2_161_920_000.0, "net");
    assert_close(r.gross_per_user, 220.0, "grossPerUser");
    assert_close(r.cost_per_user, 20.0, "costPerUser");
    assert!(r.breaks_even());
}

/// responders <= activeUsers <= seekers <= popHS <= population
#[test]
fn test_funnel_narrows_for_all_presets() {
    for population in PopulationPreset::ALL {
        for scenario in ScenarioPreset::ALL {
            let r = compute(population.count(), &scenario.assumptions());
            let p = population.count() as f64;
            assert!(r.responders <= r.active_users, "{population}/{scenario}");
            assert!(r.active_users <= r.seekers, "{population}/{scenario}");
            assert!(r.seekers <= r.pop_hs, "{population}/{scenario}");
            assert!(r.pop_hs <= p, "{population}/{scenario}");
        }
    }
}

/// Narrowing also holds at the slider extremes
#[test]
fn test_funnel_narrows_at_slider_bounds() {
    let fractions = [
        ParamField::HsShare,
        ParamField::SeekCare,
        ParamField::Adoption,
        ParamField::ResponseRate,
    ];
    for pick_max in [false, true] {
        let mut a = Assumptions::default();
        for field in fractions {
            let (min, max) = field.bounds().unwrap();
            field.set(&mut a, if pick_max { max } else { min });
        }
        let r = compute(1_252_900_000, &a);
        assert!(r.responders <= r.active_users);
        assert!(r.active_users <= r.seekers);
        assert!(r.seekers <= r.pop_hs);
        assert!(r.pop_hs <= 1_252_900_000.0);
    }
}

#[test]
fn test_gross_and_net_identities_are_exact() {
    for population in PopulationPreset::ALL {
        for scenario in ScenarioPreset::ALL {
            let r = compute(population.count(), &scenario.assumptions());
            assert_eq!(r.total_gross, r.gp_savings + r.prod_savings);
            assert_eq!(r.net, r.total_gross - r.program_costs);
        }
    }
}

#[test]
fn test_zero_adoption_gives_zero_per_user_ratios() {
    let params = ModelBuilder::new().adoption(0.0).build();
    let r = compute_params(&params);
    assert_eq!(r.active_users, 0.0);
    assert_eq!(r.gross_per_user, 0.0);
    assert_eq!(r.cost_per_user, 0.0);
    assert_eq!(r.net_per_user(), 0.0);
    assert!(r.gross_per_user.is_finite());
}

#[test]
fn test_zero_population_gives_zero_per_user_ratios() {
    let r = compute(0, &ScenarioPreset::Low.assumptions());
    assert_eq!(r.gross_per_user, 0.0);
    assert_eq!(r.cost_per_user, 0.0);
}

#[test]
fn test_costly_platform_goes_negative() {
    let params = ModelBuilder::new()
        .scenario(ScenarioPreset::Low)
        .platform_cost(60.0)
        .build();
    let r = compute_params(&params);
    // Low gross per user is 56, below the 60 cost
    assert!(r.net < 0.0);
    assert!(!r.breaks_even());
    assert_close(r.net_per_user(), -4.0, "net per user");
}

#[test]
fn test_savings_scale_linearly_with_population() {
    let a = ScenarioPreset::Best.assumptions();
    let small = compute(PopulationPreset::Uk.count(), &a);
    let doubled = compute(PopulationPreset::Uk.count() * 2, &a);
    assert_close(doubled.net, small.net * 2.0, "net doubles");
    assert_close(doubled.gross_per_user, small.gross_per_user, "per-user unchanged");
}
