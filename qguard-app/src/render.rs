//! Plain-text rendering of engine results for the terminal.
//!
//! Rendering lives in the app on purpose: the engine crates return data
//! only, and anything fancier (charts, CSV, Markdown) belongs to external
//! consumers of those types.

use qguard_compliance::ComplianceReport;
use qguard_cost::{CostProjection, ScenarioComparison};
use qguard_risk::{algorithm_profile, AnalysisRun};
use std::fmt::Write;

const TOP_PRIORITIES: usize = 10;

pub fn render_summary(run: &AnalysisRun) -> String {
    let mut out = String::new();
    let s = &run.summary;
    let _ = writeln!(out, "Portfolio: {} assets, average vulnerability {:.1}", s.total_assets, s.average_vulnerability);
    match s.min_years_to_threat {
        Some(years) => {
            let _ = writeln!(out, "Most urgent timeline: {years:.1} years");
        }
        None => {
            let _ = writeln!(out, "Most urgent timeline: n/a (empty portfolio)");
        }
    }
    if s.assumed_worst_case_count > 0 {
        let _ = writeln!(
            out,
            "Warning: {} asset(s) use unrecognized algorithms, scored at maximum risk",
            s.assumed_worst_case_count
        );
    }
    for (class, count) in s.counts_by_class.iter().rev() {
        let _ = writeln!(out, "  {class:<8} {count}");
    }

    let _ = writeln!(out, "\nMigration priorities:");
    for scored in run.scored.iter().take(TOP_PRIORITIES) {
        let _ = writeln!(
            out,
            "  #{:<3} {:<28} {:<10} score {:>5.1}  {:.1}y  [{}]  migrate to: {}",
            scored.migration_rank,
            scored.asset.name,
            scored.asset.algorithm.to_string(),
            scored.vulnerability_score,
            scored.years_to_threat,
            scored.risk_class,
            algorithm_profile(&scored.asset.algorithm).replacement,
        );
    }

    if !s.heatmap.is_empty() {
        let _ = writeln!(out, "\nRisk heatmap (category x criticality, mean score):");
        for cell in &s.heatmap {
            let _ = writeln!(
                out,
                "  {:<26} {:<9?} {:>5.1}  ({} asset(s))",
                cell.category.to_string(),
                cell.criticality,
                cell.mean_score,
                cell.asset_count,
            );
        }
    }
    out
}

pub fn render_compliance(reports: &[ComplianceReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Compliance posture:");
    for report in reports {
        let _ = writeln!(
            out,
            "  {:<10} {:>5.1}%  ({}/{} requirements)",
            report.framework.to_string(),
            report.score_pct,
            report.passing,
            report.total_requirements,
        );
        for gap in &report.gaps {
            let _ = writeln!(out, "    gap {}: {}", gap.requirement_id, gap.description);
            let _ = writeln!(out, "        {}", gap.remediation);
        }
    }
    out
}

pub fn render_costs(projection: &CostProjection) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Cost projection ({} scenario, {} asset(s) to migrate, {} months):",
        projection.scenario, projection.triggered_assets, projection.timeline_months,
    );
    for phase in &projection.phases {
        let _ = writeln!(
            out,
            "  months {:>2}-{:<2} {:<24} ${:>12.0}  (cumulative ${:.0})",
            phase.start_month, phase.end_month, phase.phase, phase.cost, phase.cumulative_cost,
        );
    }
    let _ = writeln!(out, "  total: ${:.0}", projection.total_cost);
    match projection.payback_year {
        Some(year) => {
            let _ = writeln!(out, "  payback in year {year}");
        }
        None => {
            let _ = writeln!(out, "  no payback inside the 10-year horizon");
        }
    }
    out
}

pub fn render_comparison(comparison: &[ScenarioComparison]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scenario comparison (10-year horizon):");
    for entry in comparison {
        let _ = writeln!(
            out,
            "  {:<13} ${:>12.0} over {:>2} months, net benefit ${:>12.0}, payback {}",
            entry.scenario.to_string(),
            entry.total_cost,
            entry.timeline_months,
            entry.net_benefit_at_horizon,
            match entry.payback_year {
                Some(year) => format!("year {year}"),
                None => "beyond horizon".into(),
            },
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::sample_inventory;
    use qguard_core::types::GlobalParameters;
    use qguard_risk::run_analysis;

    #[test]
    fn priority_lines_carry_the_replacement_recommendation() {
        let run = run_analysis(&sample_inventory(), &GlobalParameters::default()).unwrap();
        let text = render_summary(&run);
        assert!(text.contains("migrate to: ML-KEM-768 + ML-DSA-65"));
        assert!(text.contains("migrate to: AES-256"));
    }
}
