//! Static regulatory catalogs.
//!
//! Requirement thresholds are policy constants chosen against the effective
//! post-quantum security bits of the algorithm table (0 for Shor-breakable,
//! 56/64/85 for Grover-weakened ciphers and hashes, 128 for quantum-safe).

use qguard_core::error::AnalysisError;
use qguard_core::types::{AssetCategory, RiskClass};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    Nist,
    PciDss,
    Gdpr,
    Sox,
    BaselIii,
    Ffiec,
    Iso27001,
    SwiftCsp,
}

pub const ALL_FRAMEWORKS: [Framework; 8] = [
    Framework::Nist,
    Framework::PciDss,
    Framework::Gdpr,
    Framework::Sox,
    Framework::BaselIii,
    Framework::Ffiec,
    Framework::Iso27001,
    Framework::SwiftCsp,
];

impl Framework {
    pub fn name(self) -> &'static str {
        match self {
            Framework::Nist => "NIST",
            Framework::PciDss => "PCI-DSS",
            Framework::Gdpr => "GDPR",
            Framework::Sox => "SOX",
            Framework::BaselIii => "Basel III",
            Framework::Ffiec => "FFIEC",
            Framework::Iso27001 => "ISO 27001",
            Framework::SwiftCsp => "SWIFT CSP",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Framework {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "NIST" | "NISTPQC" => Ok(Framework::Nist),
            "PCIDSS" | "PCI" => Ok(Framework::PciDss),
            "GDPR" => Ok(Framework::Gdpr),
            "SOX" => Ok(Framework::Sox),
            "BASELIII" | "BASEL3" | "BASEL" => Ok(Framework::BaselIii),
            "FFIEC" => Ok(Framework::Ffiec),
            "ISO27001" | "ISO" => Ok(Framework::Iso27001),
            "SWIFTCSP" | "SWIFT" => Ok(Framework::SwiftCsp),
            _ => Err(AnalysisError::UnknownFramework(s.to_string())),
        }
    }
}

/// Which assets a requirement quantifies over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Categories(&'static [AssetCategory]),
}

impl Scope {
    pub fn covers(&self, category: AssetCategory) -> bool {
        match self {
            Scope::All => true,
            Scope::Categories(list) => list.contains(&category),
        }
    }
}

/// Pass/fail rule, evaluated per in-scope asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementRule {
    /// Algorithm must retain at least this many effective security bits
    /// under quantum attack.
    MinQuantumBits(u32),
    /// Asset's risk classification must not exceed this ceiling —
    /// a migration-readiness threshold rather than an algorithm one.
    MaxRiskClass(RiskClass),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub id: &'static str,
    pub description: &'static str,
    pub scope: Scope,
    pub rule: RequirementRule,
}

use AssetCategory::*;
use RequirementRule::*;

const NIST_REQUIREMENTS: &[Requirement] = &[
    Requirement {
        id: "NIST-PQC-1",
        description: "No Shor-breakable public-key cryptography in production",
        scope: Scope::All,
        rule: MinQuantumBits(64),
    },
    Requirement {
        id: "NIST-PQC-2",
        description: "128-bit post-quantum security for long-lived data stores",
        scope: Scope::Categories(&[DataStorage]),
        rule: MinQuantumBits(128),
    },
    Requirement {
        id: "NIST-PQC-3",
        description: "No assets awaiting migration at CRITICAL risk",
        scope: Scope::All,
        rule: MaxRiskClass(RiskClass::High),
    },
];

const PCI_REQUIREMENTS: &[Requirement] = &[
    Requirement {
        id: "PCI-4.0-3.5",
        description: "Strong cryptography protects stored cardholder data",
        scope: Scope::Categories(&[DataStorage, CoreBanking]),
        rule: MinQuantumBits(128),
    },
    Requirement {
        id: "PCI-4.0-4.2",
        description: "Strong cryptography for cardholder data in transit",
        scope: Scope::Categories(&[PaymentProcessing, ApiSecurity]),
        rule: MinQuantumBits(64),
    },
    Requirement {
        id: "PCI-4.0-12.3",
        description: "Payment channels held below HIGH quantum risk",
        scope: Scope::Categories(&[PaymentProcessing, AtmNetwork]),
        rule: MaxRiskClass(RiskClass::Medium),
    },
];

const GDPR_REQUIREMENTS: &[Requirement] = &[
    Requirement {
        id: "GDPR-Art-32",
        description: "State-of-the-art protection for personal data at rest",
        scope: Scope::Categories(&[DataStorage, CustomerAuthentication]),
        rule: MinQuantumBits(64),
    },
    Requirement {
        id: "GDPR-Art-25",
        description: "Data protection by design on customer-facing channels",
        scope: Scope::Categories(&[MobileBanking, CustomerAuthentication]),
        rule: MaxRiskClass(RiskClass::High),
    },
];

const SOX_REQUIREMENTS: &[Requirement] = &[
    Requirement {
        id: "SOX-404-ITGC",
        description: "Financial reporting systems free of critical crypto risk",
        scope: Scope::Categories(&[CoreBanking]),
        rule: MaxRiskClass(RiskClass::High),
    },
    Requirement {
        id: "SOX-302-SIGN",
        description: "Report integrity controls use quantum-resilient hashing",
        scope: Scope::Categories(&[CoreBanking, DataStorage]),
        rule: MinQuantumBits(64),
    },
];

const BASEL_REQUIREMENTS: &[Requirement] = &[
    Requirement {
        id: "BASEL-OPR-1",
        description: "Quantum threat managed as operational risk: no CRITICAL assets",
        scope: Scope::All,
        rule: MaxRiskClass(RiskClass::High),
    },
    Requirement {
        id: "BASEL-OPR-2",
        description: "Core settlement infrastructure fully quantum-resistant",
        scope: Scope::Categories(&[CoreBanking, PaymentProcessing]),
        rule: MinQuantumBits(128),
    },
];

const FFIEC_REQUIREMENTS: &[Requirement] = &[
    Requirement {
        id: "FFIEC-CAT-1",
        description: "Customer authentication resists quantum attack",
        scope: Scope::Categories(&[CustomerAuthentication]),
        rule: MinQuantumBits(64),
    },
    Requirement {
        id: "FFIEC-CAT-2",
        description: "ATM and branch networks held below HIGH risk",
        scope: Scope::Categories(&[AtmNetwork]),
        rule: MaxRiskClass(RiskClass::Medium),
    },
];

const ISO_REQUIREMENTS: &[Requirement] = &[
    Requirement {
        id: "ISO-A.10-1",
        description: "Cryptographic controls meet 128-bit quantum security at rest",
        scope: Scope::Categories(&[DataStorage]),
        rule: MinQuantumBits(128),
    },
    Requirement {
        id: "ISO-A.10-2",
        description: "No algorithms with zero residual post-quantum security",
        scope: Scope::All,
        rule: MinQuantumBits(1),
    },
];

const SWIFT_REQUIREMENTS: &[Requirement] = &[
    Requirement {
        id: "SWIFT-CSP-2.1",
        description: "Messaging and settlement integrity quantum-safe",
        scope: Scope::Categories(&[PaymentProcessing, CoreBanking]),
        rule: MinQuantumBits(85),
    },
    Requirement {
        id: "SWIFT-CSP-2.4",
        description: "Interbank channels held below CRITICAL risk",
        scope: Scope::Categories(&[PaymentProcessing]),
        rule: MaxRiskClass(RiskClass::High),
    },
];

impl Framework {
    pub fn requirements(self) -> &'static [Requirement] {
        match self {
            Framework::Nist => NIST_REQUIREMENTS,
            Framework::PciDss => PCI_REQUIREMENTS,
            Framework::Gdpr => GDPR_REQUIREMENTS,
            Framework::Sox => SOX_REQUIREMENTS,
            Framework::BaselIii => BASEL_REQUIREMENTS,
            Framework::Ffiec => FFIEC_REQUIREMENTS,
            Framework::Iso27001 => ISO_REQUIREMENTS,
            Framework::SwiftCsp => SWIFT_REQUIREMENTS,
        }
    }
}
