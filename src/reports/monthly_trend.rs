//! Monthly Trend Report
//!
//! Income, expense and net per month in chronological order, with the
//! best/worst month markers and a check that every `net` adds up.

use crate::display::{format_bar, format_money, format_signed_money, left_align, right_align};
use crate::models::MonthlyData;

const BAR_WIDTH: usize = 20;

/// Monthly trend report
#[derive(Debug, Clone)]
pub struct MonthlyTrendReport {
    /// Months in chronological order
    pub months: Vec<MonthlyData>,
    pub total_income: f64,
    pub total_expense: f64,
    /// Months whose `net` is not `income - expense`
    pub inconsistent: Vec<MonthlyData>,
}

impl MonthlyTrendReport {
    /// Build the report from a monthly series
    pub fn generate(series: &[MonthlyData]) -> Self {
        let mut months = series.to_vec();
        months.sort_by_key(|m| (m.year, m.month));

        let inconsistent: Vec<MonthlyData> = months
            .iter()
            .filter(|m| !m.net_is_consistent())
            .cloned()
            .collect();
        if !inconsistent.is_empty() {
            tracing::warn!(count = inconsistent.len(), "monthly records with inconsistent net");
        }

        Self {
            total_income: months.iter().map(|m| m.income).sum(),
            total_expense: months.iter().map(|m| m.expense).sum(),
            months,
            inconsistent,
        }
    }

    /// Net across all months
    pub fn total_net(&self) -> f64 {
        self.total_income - self.total_expense
    }

    /// Average monthly expense
    pub fn average_expense(&self) -> Option<f64> {
        if self.months.is_empty() {
            None
        } else {
            Some(self.total_expense / self.months.len() as f64)
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Trend\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No monthly data.\n");
            return output;
        }

        output.push_str(&format!(
            "{} {} {} {}  {}\n",
            left_align("Month", 10),
            right_align("Income", 12),
            right_align("Expense", 12),
            right_align("Net", 12),
            "Expense"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        let max_expense = self
            .months
            .iter()
            .map(|m| m.expense)
            .fold(0.0_f64, f64::max);

        for month in &self.months {
            let marker = if month.is_highest_net {
                " ▲ best"
            } else if month.is_lowest_net {
                " ▼ worst"
            } else {
                ""
            };
            output.push_str(&format!(
                "{} {} {} {}  {}{}\n",
                left_align(&month.to_string(), 10),
                right_align(&format_money(month.income, symbol), 12),
                right_align(&format_money(month.expense, symbol), 12),
                right_align(&format_signed_money(month.net, symbol), 12),
                format_bar(month.expense, max_expense, BAR_WIDTH),
                marker
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{} {} {} {}\n",
            left_align("Total", 10),
            right_align(&format_money(self.total_income, symbol), 12),
            right_align(&format_money(self.total_expense, symbol), 12),
            right_align(&format_signed_money(self.total_net(), symbol), 12)
        ));
        if let Some(average) = self.average_expense() {
            output.push_str(&format!(
                "Average monthly expense: {}\n",
                format_money(average, symbol)
            ));
        }

        for month in &self.inconsistent {
            output.push_str(&format!(
                "warning: {} net {} does not match income - expense\n",
                month, month.net
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<MonthlyData> {
        let mut sep = MonthlyData::new(2026, 9, 5100.0, 2800.0);
        sep.is_highest_net = true;
        let mut aug = MonthlyData::new(2026, 8, 4200.0, 4650.25);
        aug.is_lowest_net = true;
        vec![sep, aug, MonthlyData::new(2025, 12, 3000.0, 1000.0)]
    }

    #[test]
    fn test_sorted_chronologically() {
        let report = MonthlyTrendReport::generate(&series());
        let keys: Vec<_> = report.months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(keys, vec![(2025, 12), (2026, 8), (2026, 9)]);
    }

    #[test]
    fn test_totals() {
        let report = MonthlyTrendReport::generate(&series());
        assert_eq!(report.total_income, 12300.0);
        assert_eq!(report.total_expense, 8450.25);
        assert_eq!(report.total_net(), 3849.75);
        assert!(report.inconsistent.is_empty());
    }

    #[test]
    fn test_flags_inconsistent_net() {
        let mut months = series();
        months[0].net = 0.0;

        let report = MonthlyTrendReport::generate(&months);
        assert_eq!(report.inconsistent.len(), 1);
        assert!(report.format_terminal("$").contains("warning: Sep 2026"));
    }

    #[test]
    fn test_format_terminal_markers() {
        let output = MonthlyTrendReport::generate(&series()).format_terminal("$");

        assert!(output.contains("▲ best"));
        assert!(output.contains("▼ worst"));
        assert!(output.contains("-$450"));
        assert!(output.contains("Dec 2025"));
    }

    #[test]
    fn test_empty_series() {
        let report = MonthlyTrendReport::generate(&[]);
        assert_eq!(report.average_expense(), None);
        assert!(report.format_terminal("$").contains("No monthly data."));
    }
}
