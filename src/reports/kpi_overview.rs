//! KPI Overview Report
//!
//! Headline figures: this month against last month, the year so far against
//! last year, next month's forecast, and the best and worst months.

use crate::display::{format_money, format_signed_money, left_align, right_align};
use crate::models::{KpiSummary, MonthlyData};

/// Income and expense over one period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flow {
    pub income: f64,
    pub expense: f64,
}

impl Flow {
    /// Income minus expense
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    /// Share of income left over, as a percentage
    ///
    /// `None` when there was no income.
    pub fn savings_rate(&self) -> Option<f64> {
        if self.income > 0.0 {
            Some(self.net() / self.income * 100.0)
        } else {
            None
        }
    }
}

/// KPI overview report
#[derive(Debug, Clone)]
pub struct KpiOverview {
    pub current_month: Flow,
    pub last_month: Flow,
    pub forecast: Flow,
    pub current_year: Flow,
    pub last_year: Flow,
    pub highest_month: MonthlyData,
    pub lowest_month: MonthlyData,
}

impl KpiOverview {
    /// Build the overview from a KPI summary
    pub fn generate(kpi: &KpiSummary) -> Self {
        Self {
            current_month: Flow {
                income: kpi.total_income_current_month,
                expense: kpi.total_expense_current_month,
            },
            last_month: Flow {
                income: kpi.total_income_last_month,
                expense: kpi.total_expense_last_month,
            },
            forecast: Flow {
                income: kpi.forecast_next_month_income,
                expense: kpi.forecast_next_month_expense,
            },
            current_year: Flow {
                income: kpi.total_income_current_year,
                expense: kpi.total_expense_current_year,
            },
            last_year: Flow {
                income: kpi.total_income_last_year,
                expense: kpi.total_expense_last_year,
            },
            highest_month: kpi.highest_month.clone(),
            lowest_month: kpi.lowest_month.clone(),
        }
    }

    /// Change in monthly expense against last month, as a percentage
    pub fn expense_change(&self) -> Option<f64> {
        if self.last_month.expense > 0.0 {
            Some((self.current_month.expense - self.last_month.expense) / self.last_month.expense * 100.0)
        } else {
            None
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("KPI Overview\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{} {} {} {}\n",
            left_align("", 16),
            right_align("Income", 13),
            right_align("Expense", 13),
            right_align("Net", 13)
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let rows = [
            ("Current Month", &self.current_month),
            ("Last Month", &self.last_month),
            ("Forecast", &self.forecast),
            ("Current Year", &self.current_year),
            ("Last Year", &self.last_year),
        ];
        for (label, flow) in rows {
            output.push_str(&format!(
                "{} {} {} {}\n",
                left_align(label, 16),
                right_align(&format_money(flow.income, symbol), 13),
                right_align(&format_money(flow.expense, symbol), 13),
                right_align(&format_signed_money(flow.net(), symbol), 13)
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "Best month:  {} ({})\n",
            self.highest_month,
            format_signed_money(self.highest_month.net, symbol)
        ));
        output.push_str(&format!(
            "Worst month: {} ({})\n",
            self.lowest_month,
            format_signed_money(self.lowest_month.net, symbol)
        ));

        if let Some(rate) = self.current_month.savings_rate() {
            output.push_str(&format!("Savings rate this month: {:.0}%\n", rate));
        }
        if let Some(change) = self.expense_change() {
            output.push_str(&format!("Spending vs last month: {:+.0}%\n", change));
        }

        output
    }
}
