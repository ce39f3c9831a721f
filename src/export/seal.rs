//! Dataset sealing
//!
//! Turns plain dataset files into password-protected envelopes laid out as a
//! deployment root (`<output>/data/<file>.json`). Each file gets its own
//! random salt and IV.

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

use crate::crypto;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{DailyData, KpiSummary, MonthlyData, Resource};
use crate::storage::{read_json_required, write_json_atomic, Dataset};

/// Outcome of sealing one input directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SealReport {
    /// Datasets written, with their output paths
    pub sealed: Vec<(Dataset, PathBuf)>,
    /// Optional datasets with no input file
    pub skipped: Vec<Dataset>,
}

/// Seal every dataset found in `input_dir` into `output_dir`
///
/// Input files are looked up by name directly in `input_dir` (e.g.
/// `input_dir/kpi_summary.json`). Mandatory datasets must be present, and
/// each input must already match its typed shape so a broken dataset is
/// never sealed. Inputs that are already envelopes are rejected.
pub fn seal_directory(
    input_dir: &Path,
    output_dir: &Path,
    password: &str,
) -> FinboardResult<SealReport> {
    if password.is_empty() {
        return Err(FinboardError::Seal("Password must not be empty".into()));
    }

    let mut report = SealReport::default();

    for dataset in Dataset::ALL {
        let input = input_dir.join(dataset.file_name());
        if !input.exists() && !dataset.is_mandatory() {
            tracing::info!(dataset = %dataset, "no input file, skipping");
            report.skipped.push(dataset);
            continue;
        }

        let output = output_dir.join(dataset.path());
        match dataset {
            Dataset::Kpi => seal_file::<KpiSummary>(dataset, &input, &output, password)?,
            Dataset::Monthly => seal_file::<Vec<MonthlyData>>(dataset, &input, &output, password)?,
            Dataset::Daily => seal_file::<Vec<DailyData>>(dataset, &input, &output, password)?,
        }
        report.sealed.push((dataset, output));
    }

    Ok(report)
}

fn seal_file<T>(dataset: Dataset, input: &Path, output: &Path, password: &str) -> FinboardResult<()>
where
    T: DeserializeOwned + Serialize,
{
    let raw: serde_json::Value = read_json_required(input)?;

    let value: T = match Resource::from_value(raw) {
        Ok(Resource::Plain(value)) => value,
        Ok(Resource::Sealed(_)) => {
            return Err(FinboardError::Seal(format!(
                "{} is already sealed",
                input.display()
            )))
        }
        Err(e) => {
            return Err(FinboardError::Seal(format!(
                "{} is not a valid {}: {}",
                input.display(),
                dataset,
                e
            )))
        }
    };

    let envelope = crypto::seal(&value, password)?;
    write_json_atomic(output, &envelope)?;

    tracing::info!(dataset = %dataset, path = %output.display(), "dataset sealed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{derive_key, open};
    use crate::models::Envelope;
    use crate::storage::loader::tests::{daily_json, kpi_json, monthly_json};
    use std::fs;
    use tempfile::TempDir;

    const PASSWORD: &str = "test1234";

    fn write_input(dir: &Path, dataset: Dataset, value: &serde_json::Value) {
        fs::write(
            dir.join(dataset.file_name()),
            serde_json::to_vec_pretty(value).unwrap(),
        )
        .unwrap();
    }

    fn full_input() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_input(dir.path(), Dataset::Kpi, &kpi_json());
        write_input(dir.path(), Dataset::Monthly, &monthly_json());
        write_input(dir.path(), Dataset::Daily, &daily_json());
        dir
    }

    #[test]
    fn test_seal_all_datasets() {
        let input = full_input();
        let output = TempDir::new().unwrap();

        let report = seal_directory(input.path(), output.path(), PASSWORD).unwrap();
        assert_eq!(report.sealed.len(), 3);
        assert!(report.skipped.is_empty());

        let envelope: Envelope =
            read_json_required(output.path().join("data/monthly_summary.json")).unwrap();
        assert!(envelope.encrypted);

        let key = derive_key(PASSWORD, &envelope.decode_salt().unwrap());
        let monthly: Vec<MonthlyData> = open(&envelope, &key).unwrap();
        let expected: Vec<MonthlyData> = serde_json::from_value(monthly_json()).unwrap();
        assert_eq!(monthly, expected);
    }

    #[test]
    fn test_each_file_gets_its_own_salt() {
        let input = full_input();
        let output = TempDir::new().unwrap();
        seal_directory(input.path(), output.path(), PASSWORD).unwrap();

        let kpi: Envelope = read_json_required(output.path().join("data/kpi_summary.json")).unwrap();
        let monthly: Envelope =
            read_json_required(output.path().join("data/monthly_summary.json")).unwrap();
        assert_ne!(kpi.salt, monthly.salt);
    }

    #[test]
    fn test_missing_daily_is_skipped() {
        let input = TempDir::new().unwrap();
        write_input(input.path(), Dataset::Kpi, &kpi_json());
        write_input(input.path(), Dataset::Monthly, &monthly_json());
        let output = TempDir::new().unwrap();

        let report = seal_directory(input.path(), output.path(), PASSWORD).unwrap();
        assert_eq!(report.skipped, vec![Dataset::Daily]);
        assert!(!output.path().join("data/current_month_daily.json").exists());
    }

    #[test]
    fn test_missing_mandatory_fails() {
        let input = TempDir::new().unwrap();
        write_input(input.path(), Dataset::Kpi, &kpi_json());
        let output = TempDir::new().unwrap();

        let err = seal_directory(input.path(), output.path(), PASSWORD).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rejects_already_sealed_input() {
        let input = full_input();
        let sealed = TempDir::new().unwrap();
        seal_directory(input.path(), sealed.path(), PASSWORD).unwrap();

        let output = TempDir::new().unwrap();
        let err = seal_directory(&sealed.path().join("data"), output.path(), PASSWORD).unwrap_err();
        assert!(matches!(err, FinboardError::Seal(_)));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let input = full_input();
        write_input(input.path(), Dataset::Monthly, &serde_json::json!({"month": "nope"}));
        let output = TempDir::new().unwrap();

        let err = seal_directory(input.path(), output.path(), PASSWORD).unwrap_err();
        assert!(matches!(err, FinboardError::Seal(_)));
    }

    #[test]
    fn test_rejects_empty_password() {
        let input = full_input();
        let output = TempDir::new().unwrap();
        assert!(seal_directory(input.path(), output.path(), "").is_err());
    }
}
