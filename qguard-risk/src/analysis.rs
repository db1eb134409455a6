//! Analysis-run entry point: validate a batch, score it, aggregate it.

use crate::portfolio::{aggregate, PortfolioSummary};
use crate::scorer::score;
use qguard_core::error::{AnalysisError, AnalysisResult};
use qguard_core::types::{CryptoAsset, GlobalParameters, ScoredAsset};
use std::collections::HashSet;
use tracing::info;

/// Fully materialized output of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRun {
    /// Sorted by migration rank (rank 1 first).
    pub scored: Vec<ScoredAsset>,
    pub summary: PortfolioSummary,
}

/// Score and rank a full inventory.
///
/// Any malformed record, or a duplicate asset id, rejects the whole batch:
/// silently dropping one asset would skew every downstream aggregate. An
/// empty inventory is valid and yields an empty run.
pub fn run_analysis(
    inventory: &[CryptoAsset],
    params: &GlobalParameters,
) -> AnalysisResult<AnalysisRun> {
    params.validate()?;

    let mut seen = HashSet::with_capacity(inventory.len());
    for asset in inventory {
        asset.validate()?;
        if !seen.insert(asset.id.as_str()) {
            return Err(AnalysisError::InvalidAsset {
                asset_id: asset.id.clone(),
                reason: "duplicate asset id in batch".into(),
            });
        }
    }

    let drafts = inventory.iter().map(|a| score(a, params)).collect();
    let (scored, summary) = aggregate(drafts);

    info!(
        assets = summary.total_assets,
        avg_score = summary.average_vulnerability,
        min_years = ?summary.min_years_to_threat,
        worst_case_assumed = summary.assumed_worst_case_count,
        "Analysis run complete"
    );

    Ok(AnalysisRun { scored, summary })
}
