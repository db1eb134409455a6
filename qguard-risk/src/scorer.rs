//! Vulnerability Scorer — per-asset quantum exposure.
//!
//! Every constant in this module is policy, not measurement: base weights
//! reflect quantum-attack feasibility (Shor-class breaks score high,
//! Grover-only exposure low), baseline years track the consensus timeline
//! to a cryptanalytically relevant machine. Swap the tables, keep the math.

use qguard_core::types::{
    Algorithm, CriticalityTier, CryptoAsset, DataSensitivity, ExposureSurface, GlobalParameters,
    ReadinessLevel, RiskClass, RiskTolerance,
};
use tracing::warn;

// ── Algorithm Vulnerability Table ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmProfile {
    /// Base vulnerability weight, 0–100.
    pub base_weight: f64,
    /// Consensus years until practically broken, at nominal advancement.
    pub baseline_years: f64,
    /// Effective security bits remaining under quantum attack
    /// (0 for anything Shor-breakable).
    pub quantum_security_bits: u32,
    pub replacement: &'static str,
}

/// Fail-safe profile for algorithms not in the table: maximum risk, short
/// timeline, zero residual security. Applied, flagged, never an error.
pub const WORST_CASE_PROFILE: AlgorithmProfile = AlgorithmProfile {
    base_weight: 100.0,
    baseline_years: 5.0,
    quantum_security_bits: 0,
    replacement: "unknown algorithm, manual review required",
};

pub fn algorithm_profile(algorithm: &Algorithm) -> AlgorithmProfile {
    match algorithm {
        Algorithm::Rsa2048 => AlgorithmProfile {
            base_weight: 95.0,
            baseline_years: 12.0,
            quantum_security_bits: 0,
            replacement: "ML-KEM-768 + ML-DSA-65",
        },
        Algorithm::Rsa4096 => AlgorithmProfile {
            base_weight: 85.0,
            baseline_years: 15.0,
            quantum_security_bits: 0,
            replacement: "ML-KEM-1024 + ML-DSA-87",
        },
        Algorithm::Ecc256 => AlgorithmProfile {
            base_weight: 90.0,
            baseline_years: 13.0,
            quantum_security_bits: 0,
            replacement: "ML-KEM-768",
        },
        Algorithm::Ecc384 => AlgorithmProfile {
            base_weight: 80.0,
            baseline_years: 14.0,
            quantum_security_bits: 0,
            replacement: "ML-KEM-1024",
        },
        Algorithm::Aes128 => AlgorithmProfile {
            base_weight: 40.0,
            baseline_years: 22.0,
            quantum_security_bits: 64,
            replacement: "AES-256",
        },
        Algorithm::Aes256 => AlgorithmProfile {
            base_weight: 20.0,
            baseline_years: 30.0,
            quantum_security_bits: 128,
            replacement: "already quantum-resistant",
        },
        Algorithm::Sha256 => AlgorithmProfile {
            base_weight: 35.0,
            baseline_years: 20.0,
            quantum_security_bits: 85,
            replacement: "SHA-3-256",
        },
        Algorithm::Sha3 => AlgorithmProfile {
            base_weight: 15.0,
            baseline_years: 32.0,
            quantum_security_bits: 128,
            replacement: "already quantum-resistant",
        },
        Algorithm::Des => AlgorithmProfile {
            base_weight: 100.0,
            baseline_years: 3.0,
            quantum_security_bits: 0,
            replacement: "AES-256 as interim, then re-review",
        },
        Algorithm::TripleDes => AlgorithmProfile {
            base_weight: 70.0,
            baseline_years: 6.0,
            quantum_security_bits: 56,
            replacement: "AES-256",
        },
        Algorithm::Other(_) => WORST_CASE_PROFILE,
    }
}

// ── Scoring weights ─────────────────────────────────────────────────────────
// The four weights sum to exactly 1.0 and every factor term is on a 0–100
// scale, so the clamp below is exact: no input can silently overflow 100.

const W_BASE: f64 = 0.55;
const W_CRITICALITY: f64 = 0.20;
const W_EXPOSURE: f64 = 0.15;
const W_SENSITIVITY: f64 = 0.10;

fn criticality_factor(tier: CriticalityTier) -> f64 {
    match tier {
        CriticalityTier::Low => 25.0,
        CriticalityTier::Medium => 50.0,
        CriticalityTier::High => 75.0,
        CriticalityTier::Critical => 100.0,
    }
}

fn exposure_factor(surface: ExposureSurface) -> f64 {
    match surface {
        ExposureSurface::Internal => 30.0,
        ExposureSurface::External => 70.0,
        ExposureSurface::Public => 100.0,
    }
}

fn sensitivity_factor(tier: DataSensitivity) -> f64 {
    match tier {
        DataSensitivity::Low => 25.0,
        DataSensitivity::Medium => 50.0,
        DataSensitivity::High => 75.0,
        DataSensitivity::Critical => 100.0,
    }
}

/// Mitigation-lag factor: lower organizational readiness shortens the
/// effective threat window, because exploitation outruns remediation.
fn readiness_factor(level: ReadinessLevel) -> f64 {
    match level {
        ReadinessLevel::None => 0.70,
        ReadinessLevel::Planning => 0.85,
        ReadinessLevel::InProgress => 1.00,
        ReadinessLevel::Advanced => 1.15,
    }
}

// ── Classification bands ────────────────────────────────────────────────────
// Compared against the urgency index `score × 10 / (years + 1)`, which is
// finite for every score in [0,100] and years ≥ 0. Low tolerance tightens
// the bands (more assets classified urgent), high tolerance relaxes them.

const BAND_CRITICAL: f64 = 60.0;
const BAND_HIGH: f64 = 35.0;
const BAND_MEDIUM: f64 = 15.0;
const BAND_LOW: f64 = 5.0;

fn tolerance_scale(tolerance: RiskTolerance) -> f64 {
    match tolerance {
        RiskTolerance::Low => 0.75,
        RiskTolerance::Medium => 1.0,
        RiskTolerance::High => 1.25,
    }
}

/// Joint risk classification. Total: every (score, years, tolerance) triple
/// maps to exactly one class.
pub fn classify(vulnerability_score: f64, years_to_threat: f64, tolerance: RiskTolerance) -> RiskClass {
    let urgency = vulnerability_score * 10.0 / (years_to_threat + 1.0);
    let scale = tolerance_scale(tolerance);
    if urgency >= BAND_CRITICAL * scale {
        RiskClass::Critical
    } else if urgency >= BAND_HIGH * scale {
        RiskClass::High
    } else if urgency >= BAND_MEDIUM * scale {
        RiskClass::Medium
    } else if urgency >= BAND_LOW * scale {
        RiskClass::Low
    } else {
        RiskClass::Minimal
    }
}

// ── Scorer ──────────────────────────────────────────────────────────────────

/// A scored asset before the aggregator has assigned its migration rank.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDraft {
    pub asset: CryptoAsset,
    pub vulnerability_score: f64,
    pub years_to_threat: f64,
    pub risk_class: RiskClass,
    pub assumed_worst_case: bool,
}

/// Score one asset. Deterministic: identical inputs give bit-identical
/// output.
pub fn score(asset: &CryptoAsset, params: &GlobalParameters) -> ScoredDraft {
    let profile = algorithm_profile(&asset.algorithm);
    let assumed_worst_case = !asset.algorithm.is_known();
    if assumed_worst_case {
        warn!(
            asset = %asset.id,
            algorithm = %asset.algorithm,
            "Unknown algorithm, assuming maximum-risk profile"
        );
    }

    let weighted = W_BASE * profile.base_weight
        + W_CRITICALITY * criticality_factor(asset.criticality)
        + W_EXPOSURE * exposure_factor(asset.exposure)
        + W_SENSITIVITY * sensitivity_factor(asset.data_sensitivity);
    let vulnerability_score = weighted.clamp(0.0, 100.0);

    let years_to_threat =
        (profile.baseline_years / params.advancement_factor * readiness_factor(params.readiness))
            .max(0.0);

    let risk_class = classify(vulnerability_score, years_to_threat, params.risk_tolerance);

    ScoredDraft {
        asset: asset.clone(),
        vulnerability_score,
        years_to_threat,
        risk_class,
        assumed_worst_case,
    }
}
