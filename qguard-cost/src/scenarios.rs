//! Static cost catalogs: scenarios, phase schedules, unit costs.
//!
//! Phase cost multipliers are fractions of one asset's full migration cost.
//! They sum to 1.15 for Aggressive (rush premium), 1.00 for Standard and
//! 0.90 for Conservative (slack absorbs rework).

use qguard_core::error::AnalysisError;
use qguard_core::types::{AssetCategory, BankSize, RiskClass};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Assets at this risk class or above are scheduled for migration; anything
/// below contributes zero cost to every phase.
pub const MIGRATION_TRIGGER: RiskClass = RiskClass::Medium;

// ── ROI assumptions, shared by all scenarios ────────────────────────────────

pub const ROI_HORIZON_YEARS: u32 = 10;
pub const ANNUAL_DISCOUNT_RATE: f64 = 0.06;
pub const ANNUAL_BREACH_PROBABILITY: f64 = 0.15;
/// Breach costs trend upward year over year.
pub const BREACH_COST_GROWTH: f64 = 0.05;

/// Expected loss of a quantum-enabled breach, before probability weighting.
pub fn baseline_breach_cost(size: BankSize) -> f64 {
    match size {
        BankSize::Small => 2_000_000.0,
        BankSize::Medium => 6_000_000.0,
        BankSize::Large => 12_000_000.0,
        BankSize::Enterprise => 30_000_000.0,
    }
}

/// Full migration cost of one asset in this category, at bank-size
/// multiplier 1.0, before phase splitting.
pub fn category_base_cost(category: AssetCategory) -> f64 {
    match category {
        AssetCategory::CoreBanking => 500_000.0,
        AssetCategory::PaymentProcessing => 750_000.0,
        AssetCategory::CustomerAuthentication => 300_000.0,
        AssetCategory::InternalCommunications => 100_000.0,
        AssetCategory::DataStorage => 400_000.0,
        AssetCategory::ApiSecurity => 250_000.0,
        AssetCategory::MobileBanking => 350_000.0,
        AssetCategory::AtmNetwork => 600_000.0,
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    Aggressive,
    Standard,
    Conservative,
}

pub const ALL_SCENARIOS: [Scenario; 3] =
    [Scenario::Aggressive, Scenario::Standard, Scenario::Conservative];

impl Scenario {
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Aggressive => "Aggressive",
            Scenario::Standard => "Standard",
            Scenario::Conservative => "Conservative",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggressive" => Ok(Scenario::Aggressive),
            "standard" => Ok(Scenario::Standard),
            "conservative" => Ok(Scenario::Conservative),
            _ => Err(AnalysisError::UnknownScenario(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDef {
    pub name: &'static str,
    pub duration_months: u32,
    /// Fraction of the per-asset migration cost billed in this phase.
    pub cost_multiplier: f64,
}

const AGGRESSIVE_PHASES: &[PhaseDef] = &[
    PhaseDef { name: "Assessment & Planning", duration_months: 3, cost_multiplier: 0.12 },
    PhaseDef { name: "Pilot Implementation", duration_months: 4, cost_multiplier: 0.18 },
    PhaseDef { name: "Full Migration", duration_months: 10, cost_multiplier: 0.50 },
    PhaseDef { name: "Testing & Validation", duration_months: 3, cost_multiplier: 0.17 },
    PhaseDef { name: "Production Deployment", duration_months: 4, cost_multiplier: 0.18 },
];

const STANDARD_PHASES: &[PhaseDef] = &[
    PhaseDef { name: "Assessment & Planning", duration_months: 4, cost_multiplier: 0.10 },
    PhaseDef { name: "Pilot Implementation", duration_months: 6, cost_multiplier: 0.15 },
    PhaseDef { name: "Full Migration", duration_months: 14, cost_multiplier: 0.45 },
    PhaseDef { name: "Testing & Validation", duration_months: 6, cost_multiplier: 0.15 },
    PhaseDef { name: "Production Deployment", duration_months: 6, cost_multiplier: 0.15 },
];

const CONSERVATIVE_PHASES: &[PhaseDef] = &[
    PhaseDef { name: "Assessment & Planning", duration_months: 6, cost_multiplier: 0.09 },
    PhaseDef { name: "Pilot Implementation", duration_months: 9, cost_multiplier: 0.13 },
    PhaseDef { name: "Full Migration", duration_months: 24, cost_multiplier: 0.40 },
    PhaseDef { name: "Testing & Validation", duration_months: 9, cost_multiplier: 0.13 },
    PhaseDef { name: "Production Deployment", duration_months: 12, cost_multiplier: 0.15 },
];

impl Scenario {
    pub fn phases(self) -> &'static [PhaseDef] {
        match self {
            Scenario::Aggressive => AGGRESSIVE_PHASES,
            Scenario::Standard => STANDARD_PHASES,
            Scenario::Conservative => CONSERVATIVE_PHASES,
        }
    }

    pub fn timeline_months(self) -> u32 {
        self.phases().iter().map(|p| p.duration_months).sum()
    }
}
