//! # QGuard Compliance — Regulatory gap analysis over scored portfolios
//!
//! Eight regulatory catalogs (NIST PQC, PCI-DSS, GDPR, SOX, Basel III,
//! FFIEC, ISO 27001, SWIFT CSP), each a static requirement table. A
//! requirement passes only if every in-scope asset satisfies its rule;
//! a single failing asset fails the requirement and produces a gap with a
//! generated remediation line.

pub mod frameworks;
pub mod gap_analyzer;

pub use frameworks::{Framework, Requirement, RequirementRule, Scope};
pub use gap_analyzer::{
    assess_all, assess_framework, assess_framework_named, ComplianceGap, ComplianceReport,
};

#[cfg(test)]
mod tests;
