//! JSON export of the unlocked dashboard
//!
//! Writes the decoded datasets as one plain JSON document with schema
//! versioning, e.g. to feed a chart tool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{DailyData, DashboardData, KpiSummary, MonthlyData};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full dashboard export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub kpi_summary: KpiSummary,
    pub monthly_summary: Vec<MonthlyData>,
    pub current_month_daily: Vec<DailyData>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of monthly records
    pub month_count: usize,

    /// Number of daily records
    pub day_count: usize,

    /// Number of transactions across the daily series
    pub transaction_count: usize,

    /// First month in the series (`YYYY-MM`)
    pub first_month: Option<String>,

    /// Last month in the series (`YYYY-MM`)
    pub last_month: Option<String>,
}

impl DashboardExport {
    /// Build an export from unlocked data
    pub fn from_data(data: &DashboardData) -> Self {
        let key = |m: &MonthlyData| format!("{:04}-{:02}", m.year, m.month);

        let metadata = ExportMetadata {
            month_count: data.monthly.len(),
            day_count: data.daily.len(),
            transaction_count: data.daily.iter().map(|d| d.transactions.len()).sum(),
            first_month: data.monthly.iter().min_by_key(|m| (m.year, m.month)).map(key),
            last_month: data.monthly.iter().max_by_key(|m| (m.year, m.month)).map(key),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            kpi_summary: data.kpi.clone(),
            monthly_summary: data.monthly.clone(),
            current_month_daily: data.daily.clone(),
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if let Some(bad) = self.monthly_summary.iter().find(|m| !m.net_is_consistent()) {
            return Err(format!(
                "Monthly record {} has net {} but income - expense is {}",
                bad,
                bad.net,
                bad.income - bad.expense
            ));
        }

        Ok(())
    }
}

/// Export the unlocked dashboard to JSON
pub fn export_dashboard_json<W: Write>(
    data: &DashboardData,
    writer: &mut W,
    pretty: bool,
) -> FinboardResult<()> {
    let export = DashboardExport::from_data(data);
    if let Err(problem) = export.validate() {
        tracing::warn!(%problem, "exporting data that fails validation");
    }

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinboardError::Json(format!("Failed to write export: {}", e)))
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
    fn test_export_metadata() {
        let export = DashboardExport::from_data(&data());

        assert_eq!(export.metadata.month_count, 2);
        assert_eq!(export.metadata.day_count, 2);
        assert_eq!(export.metadata.transaction_count, 1);
        assert_eq!(export.metadata.first_month.as_deref(), Some("2026-09"));
        assert_eq!(export.metadata.last_month.as_deref(), Some("2026-10"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_net_mismatch() {
        let mut export = DashboardExport::from_data(&data());
        export.monthly_summary[0].net += 1.0;

        let err = export.validate().unwrap_err();
        assert!(err.contains("Sep 2026"));
    }

    #[test]
    fn test_export_writes_plain_json() {
        let mut buffer = Vec::new();
        export_dashboard_json(&data(), &mut buffer, false).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["schema_version"], "1.0.0");
        assert_eq!(parsed["kpi_summary"]["total_income_current_month"], 1000.0);
        assert!(parsed.get("encrypted").is_none());
    }
}
