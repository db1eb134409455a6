//! Phased cost schedule for a scored portfolio.

use crate::roi::{roi_schedule, RoiYear};
use crate::scenarios::{category_base_cost, Scenario, MIGRATION_TRIGGER};
use qguard_core::error::AnalysisResult;
use qguard_core::types::{GlobalParameters, ScoredAsset};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCost {
    pub phase: String,
    pub start_month: u32,
    pub end_month: u32,
    pub cost: f64,
    pub cumulative_cost: f64,
}

/// Fully materialized cost and ROI projection for one scenario. Every cost
/// figure is non-negative by construction; the only signed quantities are
/// the `net_benefit` columns of the ROI rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    pub scenario: Scenario,
    /// Assets at or above the migration trigger.
    pub triggered_assets: u32,
    pub phases: Vec<PhaseCost>,
    pub total_cost: f64,
    pub timeline_months: u32,
    pub roi: Vec<RoiYear>,
    /// First year in which cumulative avoided losses cover cumulative
    /// spend; `None` if that never happens inside the horizon.
    pub payback_year: Option<u32>,
}

/// Project migration costs and ROI for one scenario.
///
/// Per phase: Σ over triggered assets of category base cost × bank-size
/// multiplier × phase cost multiplier. Assets below the trigger contribute
/// zero to every phase, so a clean portfolio costs exactly zero.
pub fn project_costs(
    scored: &[ScoredAsset],
    scenario: Scenario,
    params: &GlobalParameters,
) -> CostProjection {
    let size_multiplier = params.bank_size.cost_multiplier();
    let triggered: Vec<&ScoredAsset> = scored
        .iter()
        .filter(|s| s.risk_class >= MIGRATION_TRIGGER)
        .collect();
    let migration_base: f64 = triggered
        .iter()
        .map(|s| category_base_cost(s.asset.category) * size_multiplier)
        .sum();

    let mut phases = Vec::with_capacity(scenario.phases().len());
    let mut month = 0u32;
    let mut cumulative = 0.0;
    for def in scenario.phases() {
        let cost = migration_base * def.cost_multiplier;
        cumulative += cost;
        phases.push(PhaseCost {
            phase: def.name.to_string(),
            start_month: month + 1,
            end_month: month + def.duration_months,
            cost,
            cumulative_cost: cumulative,
        });
        month += def.duration_months;
    }
    let total_cost = cumulative;
    let timeline_months = month;

    let (roi, payback_year) = roi_schedule(scored, &triggered, total_cost, timeline_months, params);

    debug!(
        scenario = %scenario,
        triggered = triggered.len(),
        total_cost,
        timeline_months,
        "Cost projection complete"
    );

    CostProjection {
        scenario,
        triggered_assets: triggered.len() as u32,
        phases,
        total_cost,
        timeline_months,
        roi,
        payback_year,
    }
}

/// Scenario selected by name (CLI surface).
pub fn project_costs_named(
    scored: &[ScoredAsset],
    name: &str,
    params: &GlobalParameters,
) -> AnalysisResult<CostProjection> {
    let scenario: Scenario = name.parse()?;
    Ok(project_costs(scored, scenario, params))
}
