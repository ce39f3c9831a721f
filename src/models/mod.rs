//! Core data models for Finboard
//!
//! The three dashboard datasets (KPI summary, monthly series, daily series)
//! and the envelope they may be sealed in.

pub mod daily;
pub mod envelope;
pub mod kpi;
pub mod monthly;

pub use daily::{DailyData, Transaction};
pub use envelope::{Envelope, Resource};
pub use kpi::KpiSummary;
pub use monthly::MonthlyData;

/// The three datasets, fully decoded
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub kpi: KpiSummary,
    pub monthly: Vec<MonthlyData>,
    pub daily: Vec<DailyData>,
}
