//! Ten-year ROI projection: discounted avoided breach losses vs. spend.

use crate::estimator::project_costs;
use crate::scenarios::{
    baseline_breach_cost, Scenario, ALL_SCENARIOS, ANNUAL_BREACH_PROBABILITY,
    ANNUAL_DISCOUNT_RATE, BREACH_COST_GROWTH, ROI_HORIZON_YEARS,
};
use qguard_core::types::{GlobalParameters, ScoredAsset};
use serde::{Deserialize, Serialize};

/// One year of the projection. Cost columns are non-negative; `net_benefit`
/// is the one signed figure (negative while the program is under water).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiYear {
    pub year: u32,
    pub avoided_cost: f64,
    pub cumulative_avoided: f64,
    pub cumulative_spend: f64,
    pub net_benefit: f64,
}

/// Side-by-side scenario figures over the same portfolio and horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub scenario: Scenario,
    pub total_cost: f64,
    pub timeline_months: u32,
    pub net_benefit_at_horizon: f64,
    pub payback_year: Option<u32>,
}

/// Share of the expected annual breach loss this migration removes:
/// the triggered assets' vulnerability mass relative to a portfolio where
/// every asset scored 100.
fn risk_reduction(scored: &[ScoredAsset], triggered: &[&ScoredAsset]) -> f64 {
    if scored.is_empty() {
        return 0.0;
    }
    let reduced: f64 = triggered.iter().map(|s| s.vulnerability_score).sum();
    (reduced / (scored.len() as f64 * 100.0)).clamp(0.0, 1.0)
}

pub(crate) fn roi_schedule(
    scored: &[ScoredAsset],
    triggered: &[&ScoredAsset],
    total_cost: f64,
    timeline_months: u32,
    params: &GlobalParameters,
) -> (Vec<RoiYear>, Option<u32>) {
    let reduction = risk_reduction(scored, triggered);
    let annual_avoided_base =
        baseline_breach_cost(params.bank_size) * ANNUAL_BREACH_PROBABILITY * reduction;

    let mut rows = Vec::with_capacity(ROI_HORIZON_YEARS as usize);
    let mut cumulative_avoided = 0.0;
    let mut payback_year = None;

    for year in 1..=ROI_HORIZON_YEARS {
        // Benefits accrue only once migration is complete: the covered
        // fraction of year N is however much of it lies past the timeline.
        let months_elapsed = year * 12;
        let covered_months = months_elapsed.saturating_sub(timeline_months).min(12);
        let coverage = covered_months as f64 / 12.0;

        let grown = annual_avoided_base * (1.0 + BREACH_COST_GROWTH).powi(year as i32 - 1);
        let discounted = grown / (1.0 + ANNUAL_DISCOUNT_RATE).powi(year as i32);
        let avoided = discounted * coverage;
        cumulative_avoided += avoided;

        // Spend is pro-rated across the phase schedule.
        let spend_fraction = if timeline_months == 0 {
            1.0
        } else {
            (months_elapsed.min(timeline_months)) as f64 / timeline_months as f64
        };
        let cumulative_spend = total_cost * spend_fraction;

        let net_benefit = cumulative_avoided - cumulative_spend;
        if payback_year.is_none() && total_cost > 0.0 && net_benefit >= 0.0 {
            payback_year = Some(year);
        }

        rows.push(RoiYear {
            year,
            avoided_cost: avoided,
            cumulative_avoided,
            cumulative_spend,
            net_benefit,
        });
    }

    (rows, payback_year)
}

/// Project all three scenarios over the same portfolio, same horizon, same
/// ROI assumptions. Only the phase schedules differ.
pub fn compare_scenarios(
    scored: &[ScoredAsset],
    params: &GlobalParameters,
) -> Vec<ScenarioComparison> {
    ALL_SCENARIOS
        .iter()
        .map(|&scenario| {
            let projection = project_costs(scored, scenario, params);
            let net_benefit_at_horizon = projection
                .roi
                .last()
                .map(|row| row.net_benefit)
                .unwrap_or(0.0);
            ScenarioComparison {
                scenario,
                total_cost: projection.total_cost,
                timeline_months: projection.timeline_months,
                net_benefit_at_horizon,
                payback_year: projection.payback_year,
            }
        })
        .collect()
}
