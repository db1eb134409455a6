//! Portfolio Aggregator — migration ranking and roll-up statistics.

use crate::scorer::ScoredDraft;
use qguard_core::types::{AssetCategory, CriticalityTier, RiskClass, ScoredAsset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One populated cell of the category × criticality heatmap. Cells with no
/// matching assets are simply absent, so downstream rendering cannot
/// mistake "no data" for "zero risk".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub category: AssetCategory,
    pub criticality: CriticalityTier,
    pub mean_score: f64,
    pub asset_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_assets: u64,
    pub counts_by_class: BTreeMap<RiskClass, u64>,
    pub average_vulnerability: f64,
    /// The portfolio's most urgent timeline. `None` for an empty portfolio.
    pub min_years_to_threat: Option<f64>,
    /// How many scores were produced by the unknown-algorithm fail-safe.
    pub assumed_worst_case_count: u64,
    pub heatmap: Vec<HeatmapCell>,
}

/// Assign migration ranks and compute the portfolio summary.
///
/// Sort keys, in order: risk class severity (desc), years-to-threat (asc),
/// vulnerability score (desc), asset id (asc). The id tiebreak makes the
/// order total: no two assets can share a rank.
pub fn aggregate(drafts: Vec<ScoredDraft>) -> (Vec<ScoredAsset>, PortfolioSummary) {
    let mut drafts = drafts;
    drafts.sort_by(|a, b| {
        b.risk_class
            .cmp(&a.risk_class)
            .then_with(|| a.years_to_threat.total_cmp(&b.years_to_threat))
            .then_with(|| b.vulnerability_score.total_cmp(&a.vulnerability_score))
            .then_with(|| a.asset.id.cmp(&b.asset.id))
    });

    let mut scored = Vec::with_capacity(drafts.len());
    let mut counts_by_class: BTreeMap<RiskClass, u64> = BTreeMap::new();
    let mut score_sum = 0.0;
    let mut min_years: Option<f64> = None;
    let mut worst_case = 0u64;
    let mut cells: BTreeMap<(AssetCategory, CriticalityTier), (f64, u64)> = BTreeMap::new();

    for (idx, draft) in drafts.into_iter().enumerate() {
        *counts_by_class.entry(draft.risk_class).or_insert(0) += 1;
        score_sum += draft.vulnerability_score;
        min_years = Some(match min_years {
            Some(current) => current.min(draft.years_to_threat),
            None => draft.years_to_threat,
        });
        if draft.assumed_worst_case {
            worst_case += 1;
        }
        let cell = cells
            .entry((draft.asset.category, draft.asset.criticality))
            .or_insert((0.0, 0));
        cell.0 += draft.vulnerability_score;
        cell.1 += 1;

        scored.push(ScoredAsset {
            asset: draft.asset,
            vulnerability_score: draft.vulnerability_score,
            years_to_threat: draft.years_to_threat,
            risk_class: draft.risk_class,
            migration_rank: idx as u32 + 1,
            assumed_worst_case: draft.assumed_worst_case,
        });
    }

    let total = scored.len() as u64;
    let summary = PortfolioSummary {
        total_assets: total,
        counts_by_class,
        average_vulnerability: if total > 0 { score_sum / total as f64 } else { 0.0 },
        min_years_to_threat: min_years,
        assumed_worst_case_count: worst_case,
        heatmap: cells
            .into_iter()
            .map(|((category, criticality), (sum, count))| HeatmapCell {
                category,
                criticality,
                mean_score: sum / count as f64,
                asset_count: count,
            })
            .collect(),
    };

    (scored, summary)
}
