//! Reports module for finboard
//!
//! Text reports over the unlocked datasets: KPI overview, monthly trend,
//! daily activity and the category breakdown of the current month.

pub mod category_breakdown;
pub mod daily_activity;
pub mod kpi_overview;
pub mod monthly_trend;

pub use category_breakdown::{CategoryBreakdown, CategorySpending};
pub use daily_activity::DailyActivityReport;
pub use kpi_overview::{Flow, KpiOverview};
pub use monthly_trend::MonthlyTrendReport;
