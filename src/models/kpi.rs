//! KPI summary
//!
//! Aggregate scalars computed by the export: month and year totals, a
//! three-month moving-average forecast, and the best and worst months.

use serde::{Deserialize, Serialize};

use super::monthly::MonthlyData;

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_income_current_month: f64,
    pub total_expense_current_month: f64,
    pub total_income_last_month: f64,
    pub total_expense_last_month: f64,
    pub highest_month: MonthlyData,
    pub lowest_month: MonthlyData,
    pub forecast_next_month_income: f64,
    pub forecast_next_month_expense: f64,
    pub total_income_current_year: f64,
    pub total_expense_current_year: f64,
    pub total_income_last_year: f64,
    pub total_expense_last_year: f64,
}

impl KpiSummary {
    /// Net flow for the current month
    pub fn net_current_month(&self) -> f64 {
        self.total_income_current_month - self.total_expense_current_month
    }

    /// Net flow for the previous month
    pub fn net_last_month(&self) -> f64 {
        self.total_income_last_month - self.total_expense_last_month
    }

    /// Net flow for the current year
    pub fn net_current_year(&self) -> f64 {
        self.total_income_current_year - self.total_expense_current_year
    }

    /// Net flow for the previous year
    pub fn net_last_year(&self) -> f64 {
        self.total_income_last_year - self.total_expense_last_year
    }

    /// Forecast net flow for next month
    pub fn forecast_net(&self) -> f64 {
        self.forecast_next_month_income - self.forecast_next_month_expense
    }
}
