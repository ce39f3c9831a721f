//! Daily Activity Report
//!
//! Day-by-day expenses for the current month with the transactions behind
//! each day. Days without activity are counted but not listed.

use crate::display::{format_money, left_align, right_align, truncate};
use crate::models::daily::total_expense;
use crate::models::DailyData;

/// Daily activity report
#[derive(Debug, Clone)]
pub struct DailyActivityReport {
    /// Days with at least one transaction, in day order
    pub active_days: Vec<DailyData>,
    /// Days in the series, active or not
    pub day_count: usize,
    pub total_expense: f64,
}

impl DailyActivityReport {
    /// Build the report from a daily series
    pub fn generate(daily: &[DailyData]) -> Self {
        let mut active_days: Vec<DailyData> =
            daily.iter().filter(|d| d.has_activity()).cloned().collect();
        active_days.sort_by_key(|d| d.day);

        Self {
            active_days,
            day_count: daily.len(),
            total_expense: total_expense(daily),
        }
    }

    /// The day with the largest expense
    pub fn busiest_day(&self) -> Option<&DailyData> {
        self.active_days
            .iter()
            .max_by(|a, b| a.amount.total_cmp(&b.amount))
    }

    /// Average expense per day in the series
    pub fn daily_average(&self) -> f64 {
        if self.day_count == 0 {
            0.0
        } else {
            self.total_expense / self.day_count as f64
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Daily Activity\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.day_count == 0 {
            output.push_str("No daily data for this month.\n");
            return output;
        }

        for day in &self.active_days {
            output.push_str(&format!(
                "Day {:>2} {}\n",
                day.day,
                right_align(&format_money(day.amount, symbol), 10)
            ));
            for txn in &day.transactions {
                let category = match &txn.sub_category {
                    Some(sub) => format!("{} / {}", txn.category, sub),
                    None => txn.category.clone(),
                };
                output.push_str(&format!(
                    "    {} {} {}\n",
                    left_align(&truncate(&txn.description, 24), 24),
                    left_align(&truncate(&category, 20), 20),
                    right_align(&format_money(txn.amount, symbol), 8)
                ));
            }
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{} active of {} days, total {}, average {}/day\n",
            self.active_days.len(),
            self.day_count,
            format_money(self.total_expense, symbol),
            format_money(self.daily_average(), symbol)
        ));
        if let Some(day) = self.busiest_day() {
            output.push_str(&format!(
                "Busiest day: {} ({})\n",
                day.day,
                format_money(day.amount, symbol)
            ));
        }

        output
    }
}
