//! Category Breakdown Report
//!
//! Aggregates the current month's transactions by category. Percentages are
//! relative to the month's total expense (the sum of the daily amounts).

use std::collections::HashMap;

use crate::display::{format_bar, format_money, format_percentage, left_align, right_align, truncate};
use crate::models::daily::total_expense;
use crate::models::DailyData;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    pub transaction_count: usize,
    /// Share of the month's total expense
    pub percentage: f64,
}

/// Category breakdown report
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// Categories, largest first
    pub categories: Vec<CategorySpending>,
    pub total_expense: f64,
    pub total_transactions: usize,
}

impl CategoryBreakdown {
    /// Build the breakdown from a daily series
    pub fn generate(daily: &[DailyData]) -> Self {
        let total = total_expense(daily);

        let mut by_category: HashMap<&str, (f64, usize)> = HashMap::new();
        let mut total_transactions = 0;
        for txn in daily.iter().flat_map(|d| &d.transactions) {
            let entry = by_category.entry(txn.category.as_str()).or_insert((0.0, 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            total_transactions += 1;
        }

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (amount, count))| CategorySpending {
                category: category.to_string(),
                amount,
                transaction_count: count,
                percentage: if total > 0.0 { amount / total * 100.0 } else { 0.0 },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.amount
                .total_cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            categories,
            total_expense: total,
            total_transactions,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Category Breakdown\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No spending recorded this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{} {} {} {}\n",
            left_align("Category", 24),
            right_align("Amount", 10),
            right_align("Count", 6),
            right_align("%", 6)
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        let max = self.categories.first().map(|c| c.amount).unwrap_or(0.0);
        for category in &self.categories {
            output.push_str(&format!(
                "{} {} {} {}  {}\n",
                left_align(&truncate(&category.category, 24), 24),
                right_align(&format_money(category.amount, symbol), 10),
                right_align(&category.transaction_count.to_string(), 6),
                right_align(&format_percentage(category.percentage), 6),
                format_bar(category.amount, max, 16)
            ));
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{} {} {}\n",
            left_align("Total Expenses", 24),
            right_align(&format_money(self.total_expense, symbol), 10),
            right_align(&self.total_transactions.to_string(), 6)
        ));

        output
    }
}
