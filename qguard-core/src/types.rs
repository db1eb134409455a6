//! Asset schema, global parameters and scored results.

use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Algorithms ──────────────────────────────────────────────────────────────

/// Declared cryptographic algorithm of an asset.
///
/// `Other` carries any name that does not resolve to a catalog entry. It is
/// not an error: the scorer applies the fail-safe maximum-risk profile and
/// flags the result so callers can audit the assumption.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Algorithm {
    Rsa2048,
    Rsa4096,
    Ecc256,
    Ecc384,
    Aes128,
    Aes256,
    Sha256,
    Sha3,
    Des,
    TripleDes,
    Other(String),
}

impl Algorithm {
    pub fn canonical_name(&self) -> &str {
        match self {
            Algorithm::Rsa2048 => "RSA-2048",
            Algorithm::Rsa4096 => "RSA-4096",
            Algorithm::Ecc256 => "ECC-256",
            Algorithm::Ecc384 => "ECC-384",
            Algorithm::Aes128 => "AES-128",
            Algorithm::Aes256 => "AES-256",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha3 => "SHA-3",
            Algorithm::Des => "DES",
            Algorithm::TripleDes => "3DES",
            Algorithm::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Algorithm::Other(_))
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "RSA-2048" => Algorithm::Rsa2048,
            "RSA-4096" => Algorithm::Rsa4096,
            "ECC-256" => Algorithm::Ecc256,
            "ECC-384" => Algorithm::Ecc384,
            "AES-128" => Algorithm::Aes128,
            "AES-256" => Algorithm::Aes256,
            "SHA-256" => Algorithm::Sha256,
            "SHA-3" => Algorithm::Sha3,
            "DES" => Algorithm::Des,
            "3DES" | "TRIPLE-DES" => Algorithm::TripleDes,
            _ => Algorithm::Other(name),
        }
    }
}

impl From<Algorithm> for String {
    fn from(algo: Algorithm) -> Self {
        algo.canonical_name().to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

// ── Asset attributes ────────────────────────────────────────────────────────

/// Where in the bank an asset lives. Drives cost bases and the heatmap rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    CoreBanking,
    PaymentProcessing,
    CustomerAuthentication,
    InternalCommunications,
    DataStorage,
    ApiSecurity,
    MobileBanking,
    AtmNetwork,
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssetCategory::CoreBanking => "Core Banking",
            AssetCategory::PaymentProcessing => "Payment Processing",
            AssetCategory::CustomerAuthentication => "Customer Authentication",
            AssetCategory::InternalCommunications => "Internal Communications",
            AssetCategory::DataStorage => "Data Storage",
            AssetCategory::ApiSecurity => "API Security",
            AssetCategory::MobileBanking => "Mobile Banking",
            AssetCategory::AtmNetwork => "ATM Network",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CriticalityTier {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataSensitivity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExposureSurface {
    Internal,
    External,
    Public,
}

// ── Assets ──────────────────────────────────────────────────────────────────

/// One cryptographic asset in the bank's inventory. Immutable per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoAsset {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    pub algorithm: Algorithm,
    pub key_size_bits: u32,
    pub criticality: CriticalityTier,
    pub data_sensitivity: DataSensitivity,
    pub exposure: ExposureSurface,
}

impl CryptoAsset {
    /// Ingestion validation. A failure here rejects the whole batch.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.id.trim().is_empty() {
            return Err(AnalysisError::InvalidAsset {
                asset_id: "<unset>".into(),
                reason: "asset id must not be empty".into(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(AnalysisError::InvalidAsset {
                asset_id: self.id.clone(),
                reason: "asset name must not be empty".into(),
            });
        }
        if self.key_size_bits == 0 {
            return Err(AnalysisError::InvalidAsset {
                asset_id: self.id.clone(),
                reason: "key size must be non-zero".into(),
            });
        }
        if let Algorithm::Other(name) = &self.algorithm {
            if name.trim().is_empty() {
                return Err(AnalysisError::InvalidAsset {
                    asset_id: self.id.clone(),
                    reason: "algorithm name must not be empty".into(),
                });
            }
        }
        Ok(())
    }
}

// ── Global parameters ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankSize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl BankSize {
    /// Scales asset counts and costs, never scores.
    pub fn cost_multiplier(self) -> f64 {
        match self {
            BankSize::Small => 0.5,
            BankSize::Medium => 0.8,
            BankSize::Large => 1.0,
            BankSize::Enterprise => 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadinessLevel {
    None,
    Planning,
    InProgress,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

pub const MIN_ADVANCEMENT_FACTOR: f64 = 0.5;
pub const MAX_ADVANCEMENT_FACTOR: f64 = 2.0;

/// Run-wide knobs for an analysis. Defaults model a large bank with a
/// nominal quantum timeline and a migration program still on paper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalParameters {
    pub bank_size: BankSize,
    /// Speed of quantum advancement relative to the consensus timeline.
    /// 1.0 = nominal; 2.0 compresses every threat window by half.
    pub advancement_factor: f64,
    pub readiness: ReadinessLevel,
    pub risk_tolerance: RiskTolerance,
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self {
            bank_size: BankSize::Large,
            advancement_factor: 1.0,
            readiness: ReadinessLevel::Planning,
            risk_tolerance: RiskTolerance::Medium,
        }
    }
}

impl GlobalParameters {
    pub fn validate(&self) -> AnalysisResult<()> {
        if !self.advancement_factor.is_finite()
            || self.advancement_factor < MIN_ADVANCEMENT_FACTOR
            || self.advancement_factor > MAX_ADVANCEMENT_FACTOR
        {
            return Err(AnalysisError::InvalidParameters(format!(
                "advancement factor {} outside [{}, {}]",
                self.advancement_factor, MIN_ADVANCEMENT_FACTOR, MAX_ADVANCEMENT_FACTOR
            )));
        }
        Ok(())
    }
}

// ── Scored results ──────────────────────────────────────────────────────────

/// Ordinal severity bucket. Variant order matters: derived `Ord` must rank
/// `Critical` above everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskClass {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskClass::Critical => "CRITICAL",
            RiskClass::High => "HIGH",
            RiskClass::Medium => "MEDIUM",
            RiskClass::Low => "LOW",
            RiskClass::Minimal => "MINIMAL",
        };
        f.write_str(label)
    }
}

/// A scored asset. Created once per analysis run, never mutated afterwards;
/// both the compliance and the cost projections consume it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAsset {
    pub asset: CryptoAsset,
    /// 0–100 heuristic exposure to quantum-enabled cryptanalysis.
    pub vulnerability_score: f64,
    /// Estimated years until the algorithm is practically broken. Never
    /// negative.
    pub years_to_threat: f64,
    pub risk_class: RiskClass,
    /// Unique within a run; 1 = migrate first.
    pub migration_rank: u32,
    /// True when the algorithm was unknown and the maximum-risk profile was
    /// assumed. Observable so callers can audit the assumption.
    pub assumed_worst_case: bool,
}
