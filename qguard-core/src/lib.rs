//! # QGuard Core — Shared data model for the quantum risk suite
//!
//! Every QGuard engine crate links against this library. It owns:
//! - the cryptographic asset schema and global analysis parameters,
//! - the scored-asset result type produced by the risk engine,
//! - the error taxonomy for the whole pipeline,
//! - the TOML configuration loader used by the CLI.
//!
//! The asset schema is deliberately enum-based and validated at ingestion:
//! a typo'd algorithm name degrades to the fail-safe `Algorithm::Other`
//! carrier (maximum assumed risk, flagged in output) instead of silently
//! misclassifying.

pub mod config_loader;
pub mod error;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};
pub use types::{
    Algorithm, AssetCategory, BankSize, CriticalityTier, CryptoAsset, DataSensitivity,
    ExposureSurface, GlobalParameters, ReadinessLevel, RiskClass, RiskTolerance, ScoredAsset,
};

#[cfg(test)]
mod tests;
