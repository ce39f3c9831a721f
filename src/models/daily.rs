//! Daily expense records for the current month
//!
//! One record per day-of-month with the day's expense total and the
//! transactions behind it.

use serde::{Deserialize, Deserializer, Serialize};

/// A single expense transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Empty when the source row had no description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Expense activity for one day of the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyData {
    /// Day of month, 1-31
    pub day: u32,
    /// Total expense for the day
    pub amount: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl DailyData {
    /// Check if anything was spent on this day
    pub fn has_activity(&self) -> bool {
        !self.transactions.is_empty()
    }

    /// Sum of the day's transaction amounts
    ///
    /// Equals `amount` for data written by the export.
    pub fn transactions_total(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}

/// Total expense across a daily series
pub fn total_expense(series: &[DailyData]) -> f64 {
    series.iter().map(|d| d.amount).sum()
}
