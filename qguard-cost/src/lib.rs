//! # QGuard Cost — Migration cost scheduling and ROI projection
//!
//! Turns a scored portfolio into money: which assets must migrate (risk
//! class at or above the trigger), what each scenario's phase schedule
//! costs, and how the spend compares against discounted avoided breach
//! losses over a ten-year horizon.
//!
//! The three named scenarios share every ROI assumption and differ only in
//! their phase schedules, so they compare on equal footing.

pub mod estimator;
pub mod roi;
pub mod scenarios;

pub use estimator::{project_costs, project_costs_named, CostProjection, PhaseCost};
pub use roi::{compare_scenarios, RoiYear, ScenarioComparison};
pub use scenarios::{PhaseDef, Scenario, MIGRATION_TRIGGER};

#[cfg(test)]
mod tests;
