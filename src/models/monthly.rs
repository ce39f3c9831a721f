//! Monthly income/expense records
//!
//! One record per `(year, month)` as computed by the export. `net` is always
//! `income - expense`; the highest/lowest flags are set on at most one record
//! each.

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyData {
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
    #[serde(default)]
    pub is_highest_net: bool,
    #[serde(default)]
    pub is_lowest_net: bool,
}

impl MonthlyData {
    /// Create a record, computing `net` from income and expense
    pub fn new(year: i32, month: u32, income: f64, expense: f64) -> Self {
        Self {
            year,
            month,
            income,
            expense,
            net: income - expense,
            is_highest_net: false,
            is_lowest_net: false,
        }
    }

    /// Check that `net == income - expense`
    pub fn net_is_consistent(&self) -> bool {
        self.net == self.income - self.expense
    }

    /// Short month name, e.g. "Sep"
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| &m.name()[..3])
            .unwrap_or("???")
    }
}

impl fmt::Display for MonthlyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Find the record flagged as the highest net month
pub fn highest_net(series: &[MonthlyData]) -> Option<&MonthlyData> {
    series.iter().find(|m| m.is_highest_net)
}

/// Find the record flagged as the lowest net month
pub fn lowest_net(series: &[MonthlyData]) -> Option<&MonthlyData> {
    series.iter().find(|m| m.is_lowest_net)
}
