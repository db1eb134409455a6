//! # Config Loader — Loads and validates TOML configuration
//!
//! Reads `qguard.toml` (or a custom path) and deserializes into typed config
//! structs. A missing file is not an error: defaults apply, with a warning.

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{BankSize, GlobalParameters, ReadinessLevel, RiskTolerance};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Top-level QGuard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QguardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub log_level: String,
    /// Default inventory file; the CLI flag overrides it.
    pub inventory_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            inventory_path: None,
        }
    }
}

/// Default analysis parameters; each maps onto one `GlobalParameters` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub bank_size: BankSize,
    pub advancement_factor: f64,
    pub readiness: ReadinessLevel,
    pub risk_tolerance: RiskTolerance,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let p = GlobalParameters::default();
        Self {
            bank_size: p.bank_size,
            advancement_factor: p.advancement_factor,
            readiness: p.readiness,
            risk_tolerance: p.risk_tolerance,
        }
    }
}

impl QguardConfig {
    /// Load config from a TOML file path.
    pub fn load(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: QguardConfig = toml::from_str(&content)
            .map_err(|e| AnalysisError::Config(format!("failed to parse config: {e}")))?;
        info!(
            path = %path.display(),
            bank_size = ?config.analysis.bank_size,
            advancement = config.analysis.advancement_factor,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Save current config to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> AnalysisResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AnalysisError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn parameters(&self) -> GlobalParameters {
        GlobalParameters {
            bank_size: self.analysis.bank_size,
            advancement_factor: self.analysis.advancement_factor,
            readiness: self.analysis.readiness,
            risk_tolerance: self.analysis.risk_tolerance,
        }
    }
}
