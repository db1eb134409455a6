//! # QGuard Risk — Quantum vulnerability scoring and portfolio aggregation
//!
//! The quantitative half of the suite:
//! - `scorer` maps one asset + global parameters to a vulnerability score,
//!   a years-to-threat estimate and a risk class,
//! - `portfolio` ranks a scored inventory into a migration order and rolls
//!   it up into portfolio statistics and a category × criticality heatmap,
//! - `analysis` is the batch entry point: validate, score, aggregate.
//!
//! All figures are deterministic heuristics over declared algorithm
//! metadata. Nothing here models an actual quantum attack.

pub mod analysis;
pub mod portfolio;
pub mod scorer;

pub use analysis::{run_analysis, AnalysisRun};
pub use portfolio::{aggregate, HeatmapCell, PortfolioSummary};
pub use scorer::{algorithm_profile, classify, score, AlgorithmProfile, ScoredDraft};
