use crate::estimator::{project_costs, project_costs_named};
use crate::roi::compare_scenarios;
use crate::scenarios::{Scenario, ALL_SCENARIOS, MIGRATION_TRIGGER};
use qguard_core::types::*;
use qguard_risk::analysis::run_analysis;

fn asset(id: &str, algorithm: &str, category: AssetCategory) -> CryptoAsset {
    CryptoAsset {
        id: id.into(),
        name: format!("asset {id}"),
        category,
        algorithm: Algorithm::from(algorithm.to_string()),
        key_size_bits: 2048,
        criticality: CriticalityTier::High,
        data_sensitivity: DataSensitivity::High,
        exposure: ExposureSurface::External,
    }
}

fn safe_asset(id: &str) -> CryptoAsset {
    CryptoAsset {
        criticality: CriticalityTier::Low,
        data_sensitivity: DataSensitivity::Low,
        exposure: ExposureSurface::Internal,
        ..asset(id, "AES-256", AssetCategory::InternalCommunications)
    }
}

fn scored(inventory: &[CryptoAsset]) -> Vec<ScoredAsset> {
    run_analysis(inventory, &GlobalParameters::default())
        .unwrap()
        .scored
}

fn at_risk_portfolio() -> Vec<ScoredAsset> {
    scored(&[
        asset("tls", "RSA-2048", AssetCategory::CoreBanking),
        asset("pay", "RSA-2048", AssetCategory::PaymentProcessing),
        asset("atm", "3DES", AssetCategory::AtmNetwork),
        asset("auth", "ECC-256", AssetCategory::CustomerAuthentication),
    ])
}

#[test]
fn phase_schedule_is_contiguous_and_sums_to_total() {
    let params = GlobalParameters::default();
    let projection = project_costs(&at_risk_portfolio(), Scenario::Standard, &params);
    let mut expected_start = 1;
    let mut sum = 0.0;
    for phase in &projection.phases {
        assert_eq!(phase.start_month, expected_start);
        assert!(phase.end_month >= phase.start_month);
        expected_start = phase.end_month + 1;
        sum += phase.cost;
    }
    assert!((sum - projection.total_cost).abs() < 1e-6);
    assert_eq!(projection.timeline_months, 36);
}

#[test]
fn cost_figures_are_never_negative() {
    let params = GlobalParameters::default();
    let portfolio = at_risk_portfolio();
    for scenario in ALL_SCENARIOS {
        let projection = project_costs(&portfolio, scenario, &params);
        assert!(projection.total_cost >= 0.0);
        for phase in &projection.phases {
            assert!(phase.cost >= 0.0);
            assert!(phase.cumulative_cost >= 0.0);
        }
        for row in &projection.roi {
            assert!(row.avoided_cost >= 0.0);
            assert!(row.cumulative_avoided >= 0.0);
            assert!(row.cumulative_spend >= 0.0);
        }
    }
}

#[test]
fn safe_portfolio_costs_exactly_zero() {
    let params = GlobalParameters::default();
    let portfolio = scored(&[safe_asset("a"), safe_asset("b")]);
    assert!(portfolio.iter().all(|s| s.risk_class < MIGRATION_TRIGGER));
    for scenario in ALL_SCENARIOS {
        let projection = project_costs(&portfolio, scenario, &params);
        assert_eq!(projection.triggered_assets, 0);
        assert_eq!(projection.total_cost, 0.0);
        assert!(projection.phases.iter().all(|p| p.cost == 0.0));
        assert!(projection.roi.iter().all(|r| r.avoided_cost == 0.0));
        assert_eq!(projection.payback_year, None);
    }
}

#[test]
fn empty_portfolio_is_a_valid_zeroed_projection() {
    let params = GlobalParameters::default();
    let projection = project_costs(&[], Scenario::Standard, &params);
    assert_eq!(projection.triggered_assets, 0);
    assert_eq!(projection.total_cost, 0.0);
    assert_eq!(projection.roi.len(), 10);
}

#[test]
fn untriggered_assets_contribute_nothing() {
    let params = GlobalParameters::default();
    let mixed = scored(&[
        asset("tls", "RSA-2048", AssetCategory::CoreBanking),
        safe_asset("mail"),
    ]);
    let only_risky = scored(&[asset("tls", "RSA-2048", AssetCategory::CoreBanking)]);
    let mixed_cost = project_costs(&mixed, Scenario::Standard, &params).total_cost;
    let risky_cost = project_costs(&only_risky, Scenario::Standard, &params).total_cost;
    assert!((mixed_cost - risky_cost).abs() < 1e-6);
}

#[test]
fn bank_size_scales_costs_not_scores() {
    let portfolio = at_risk_portfolio();
    let large = GlobalParameters::default();
    let enterprise = GlobalParameters {
        bank_size: BankSize::Enterprise,
        ..large
    };
    let large_cost = project_costs(&portfolio, Scenario::Standard, &large).total_cost;
    let enterprise_cost = project_costs(&portfolio, Scenario::Standard, &enterprise).total_cost;
    assert!((enterprise_cost - large_cost * 1.5).abs() < 1e-6);
}

#[test]
fn scenarios_compare_on_equal_footing() {
    let params = GlobalParameters::default();
    let comparison = compare_scenarios(&at_risk_portfolio(), &params);
    assert_eq!(comparison.len(), 3);
    let by_scenario = |s: Scenario| comparison.iter().find(|c| c.scenario == s).unwrap();
    let aggressive = by_scenario(Scenario::Aggressive);
    let standard = by_scenario(Scenario::Standard);
    let conservative = by_scenario(Scenario::Conservative);
    // Rush premium vs. slack discount on the same asset set.
    assert!(aggressive.total_cost > standard.total_cost);
    assert!(standard.total_cost > conservative.total_cost);
    assert!(aggressive.timeline_months < conservative.timeline_months);
}

#[test]
fn high_risk_portfolio_pays_back_inside_the_horizon() {
    let params = GlobalParameters::default();
    let projection = project_costs(&at_risk_portfolio(), Scenario::Aggressive, &params);
    assert!(projection.payback_year.is_some());
    let last = projection.roi.last().unwrap();
    assert!(last.net_benefit > 0.0);
}

#[test]
fn benefits_start_only_after_migration_completes() {
    let params = GlobalParameters::default();
    let projection = project_costs(&at_risk_portfolio(), Scenario::Conservative, &params);
    // Conservative runs 60 months: no avoided losses in years 1–5.
    for row in projection.roi.iter().take(5) {
        assert_eq!(row.avoided_cost, 0.0);
    }
    assert!(projection.roi[5].avoided_cost > 0.0);
}

#[test]
fn scenario_lookup_by_name() {
    let params = GlobalParameters::default();
    let projection = project_costs_named(&[], "aggressive", &params).unwrap();
    assert_eq!(projection.scenario, Scenario::Aggressive);
    assert!(project_costs_named(&[], "yolo", &params).is_err());
}
