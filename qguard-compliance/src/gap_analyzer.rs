//! Gap analysis: evaluate scored assets against framework catalogs.

use crate::frameworks::{Framework, Requirement, RequirementRule, ALL_FRAMEWORKS};
use qguard_core::error::AnalysisResult;
use qguard_core::types::ScoredAsset;
use qguard_risk::scorer::algorithm_profile;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One failed requirement, with every offending asset named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceGap {
    pub requirement_id: String,
    pub description: String,
    pub failing_assets: Vec<String>,
    /// Generated remediation: required minimum, what is deployed, and the
    /// recommended replacement per offending algorithm.
    pub remediation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub framework: Framework,
    pub total_requirements: u32,
    pub passing: u32,
    pub failing: u32,
    /// passing / total × 100, rounded to exactly one decimal place so the
    /// figure is reproducible bit-for-bit. 100.0 for an empty portfolio:
    /// every requirement quantifies over in-scope assets, and with none,
    /// nothing violates.
    pub score_pct: f64,
    pub gaps: Vec<ComplianceGap>,
}

fn rule_violated(rule: RequirementRule, scored: &ScoredAsset) -> bool {
    match rule {
        RequirementRule::MinQuantumBits(min) => {
            algorithm_profile(&scored.asset.algorithm).quantum_security_bits < min
        }
        RequirementRule::MaxRiskClass(ceiling) => scored.risk_class > ceiling,
    }
}

fn remediation_for(rule: RequirementRule, failing: &[&ScoredAsset]) -> String {
    let deployed = failing
        .iter()
        .map(|s| {
            let profile = algorithm_profile(&s.asset.algorithm);
            format!(
                "{} ({}, {}-bit PQ; migrate to {})",
                s.asset.name,
                s.asset.algorithm,
                profile.quantum_security_bits,
                profile.replacement
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    match rule {
        RequirementRule::MinQuantumBits(min) => format!(
            "requires >= {min}-bit post-quantum security; currently deployed: {deployed}"
        ),
        RequirementRule::MaxRiskClass(ceiling) => format!(
            "requires risk class at or below {ceiling}; currently deployed: {deployed}"
        ),
    }
}

fn assess_requirement(req: &Requirement, scored: &[ScoredAsset]) -> Option<ComplianceGap> {
    let failing: Vec<&ScoredAsset> = scored
        .iter()
        .filter(|s| req.scope.covers(s.asset.category) && rule_violated(req.rule, s))
        .collect();
    if failing.is_empty() {
        return None;
    }
    Some(ComplianceGap {
        requirement_id: req.id.to_string(),
        description: req.description.to_string(),
        failing_assets: failing.iter().map(|s| s.asset.id.clone()).collect(),
        remediation: remediation_for(req.rule, &failing),
    })
}

/// Assess one framework against a scored portfolio.
pub fn assess_framework(scored: &[ScoredAsset], framework: Framework) -> ComplianceReport {
    let requirements = framework.requirements();
    let gaps: Vec<ComplianceGap> = requirements
        .iter()
        .filter_map(|req| assess_requirement(req, scored))
        .collect();

    for gap in &gaps {
        warn!(
            framework = %framework,
            requirement = %gap.requirement_id,
            failing = gap.failing_assets.len(),
            "Compliance gap"
        );
    }

    let total = requirements.len() as u32;
    let failing = gaps.len() as u32;
    let passing = total - failing;
    // One fixed rounding step keeps the score reproducible bit-for-bit.
    let score_pct = if total == 0 {
        100.0
    } else {
        (passing as f64 / total as f64 * 1000.0).round() / 10.0
    };

    ComplianceReport {
        framework,
        total_requirements: total,
        passing,
        failing,
        score_pct,
        gaps,
    }
}

/// Assess a framework selected by name (CLI surface). Unknown names are a
/// caller error, unlike unknown algorithms.
pub fn assess_framework_named(
    scored: &[ScoredAsset],
    name: &str,
) -> AnalysisResult<ComplianceReport> {
    let framework: Framework = name.parse()?;
    Ok(assess_framework(scored, framework))
}

/// Assess all eight frameworks, in catalog order.
pub fn assess_all(scored: &[ScoredAsset]) -> Vec<ComplianceReport> {
    ALL_FRAMEWORKS
        .iter()
        .map(|&fw| assess_framework(scored, fw))
        .collect()
}
