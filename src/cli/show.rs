//! CLI commands that read the unlocked dashboard
//!
//! `show` prints the text reports, `verify` checks a password against the
//! sealed datasets, and `export` writes the unlocked datasets as plain JSON.

use chrono::Local;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::session::{open_dashboard, PasswordSource};
use crate::config::Settings;
use crate::display::double_separator;
use crate::error::{FinboardError, FinboardResult};
use crate::export::export_dashboard_json;
use crate::models::monthly::{highest_net, lowest_net};
use crate::models::DashboardData;
use crate::reports::{CategoryBreakdown, DailyActivityReport, KpiOverview, MonthlyTrendReport};
use crate::storage::Loader;

/// Which part of the dashboard to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ShowSection {
    Kpi,
    Monthly,
    Daily,
    Categories,
    #[default]
    All,
}

impl ShowSection {
    fn includes(self, other: ShowSection) -> bool {
        self == ShowSection::All || self == other
    }
}

/// Render the requested sections as text
pub fn render_dashboard(data: &DashboardData, section: ShowSection, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Finboard dashboard ({})\n",
        Local::now().format("%Y-%m-%d")
    ));
    output.push_str(&double_separator(60));
    output.push_str("\n\n");

    let mut parts = Vec::new();
    if section.includes(ShowSection::Kpi) {
        parts.push(KpiOverview::generate(&data.kpi).format_terminal(symbol));
    }
    if section.includes(ShowSection::Monthly) {
        parts.push(MonthlyTrendReport::generate(&data.monthly).format_terminal(symbol));
    }
    if section.includes(ShowSection::Daily) {
        parts.push(DailyActivityReport::generate(&data.daily).format_terminal(symbol));
    }
    if section.includes(ShowSection::Categories) {
        parts.push(CategoryBreakdown::generate(&data.daily).format_terminal(symbol));
    }

    output.push_str(&parts.join("\n"));
    output
}

/// Handle `finboard show`
pub fn handle_show_command(
    loader: &Loader,
    settings: &Settings,
    password: &PasswordSource,
    section: ShowSection,
) -> FinboardResult<()> {
    let unlocked = open_dashboard(loader, password)?;
    print!(
        "{}",
        render_dashboard(&unlocked.data, section, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `finboard verify`
pub fn handle_verify_command(loader: &Loader, password: &PasswordSource) -> FinboardResult<()> {
    let unlocked = open_dashboard(loader, password)?;

    if unlocked.was_sealed {
        println!("Password OK. Datasets at {} unlocked.", loader.describe());
    } else {
        println!("Datasets at {} are not sealed.", loader.describe());
    }
    println!(
        "  {} monthly records, {} daily records",
        unlocked.data.monthly.len(),
        unlocked.data.daily.len()
    );

    let inconsistent = unlocked
        .data
        .monthly
        .iter()
        .filter(|m| !m.net_is_consistent())
        .count();
    if inconsistent > 0 {
        println!("  warning: {} monthly records have an inconsistent net", inconsistent);
    }
    match (highest_net(&unlocked.data.monthly), lowest_net(&unlocked.data.monthly)) {
        (Some(best), Some(worst)) => println!("  best month {}, worst month {}", best, worst),
        _ => println!("  warning: best/worst month flags missing from the monthly series"),
    }

    Ok(())
}

/// Handle `finboard export`
pub fn handle_export_command(
    loader: &Loader,
    password: &PasswordSource,
    output: Option<PathBuf>,
    compact: bool,
) -> FinboardResult<()> {
    let unlocked = open_dashboard(loader, password)?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                FinboardError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_dashboard_json(&unlocked.data, &mut writer, !compact)?;
            writer.flush()?;
            eprintln!("Exported unlocked datasets to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_dashboard_json(&unlocked.data, &mut writer, !compact)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::loader::tests::{daily_json, kpi_json, monthly_json};

    fn data() -> DashboardData {
        DashboardData {
            kpi: serde_json::from_value(kpi_json()).unwrap(),
            monthly: serde_json::from_value(monthly_json()).unwrap(),
            daily: serde_json::from_value(daily_json()).unwrap(),
        }
    }

    #[test]
    fn test_render_all_sections() {
        let output = render_dashboard(&data(), ShowSection::All, "$");
        assert!(output.contains("KPI Overview"));
        assert!(output.contains("Monthly Trend"));
        assert!(output.contains("Daily Activity"));
        assert!(output.contains("Category Breakdown"));
    }

    #[test]
    fn test_render_single_section() {
        let output = render_dashboard(&data(), ShowSection::Categories, "€");
        assert!(output.contains("Category Breakdown"));
        assert!(output.contains("€20"));
        assert!(!output.contains("KPI Overview"));
        assert!(!output.contains("Monthly Trend"));
    }
}
