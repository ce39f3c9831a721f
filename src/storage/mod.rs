//! Storage layer for Finboard
//!
//! Fetches the dashboard datasets through a pluggable [`Transport`] (local
//! directory or HTTP deployment) and writes sealed datasets atomically.

pub mod file;
pub mod file_io;
pub mod http;
pub mod loader;

pub use file::FileTransport;
pub use file_io::{read_json_required, write_json_atomic};
pub use http::HttpTransport;
pub use loader::{LoadedResources, Loader};

use async_trait::async_trait;
use std::fmt;

use crate::error::FinboardResult;

/// Directory under the deployment root holding the datasets
pub const DATA_DIR: &str = "data";

/// The three dashboard datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// KPI summary (mandatory)
    Kpi,
    /// Monthly series (mandatory)
    Monthly,
    /// Current month daily series (optional)
    Daily,
}

impl Dataset {
    /// All datasets in load order
    pub const ALL: [Dataset; 3] = [Dataset::Kpi, Dataset::Monthly, Dataset::Daily];

    /// File name of the dataset
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Kpi => "kpi_summary.json",
            Self::Monthly => "monthly_summary.json",
            Self::Daily => "current_month_daily.json",
        }
    }

    /// Path relative to the deployment root
    pub fn path(&self) -> String {
        format!("{}/{}", DATA_DIR, self.file_name())
    }

    /// Whether a failure to load this dataset is fatal
    pub fn is_mandatory(&self) -> bool {
        !matches!(self, Self::Daily)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kpi => "KPI summary",
            Self::Monthly => "monthly summary",
            Self::Daily => "daily series",
        };
        write!(f, "{}", name)
    }
}

/// A source of raw dataset bytes
///
/// Paths are relative to the deployment root, e.g. `data/kpi_summary.json`.
/// A missing resource must be reported as [`FinboardError::NotFound`].
///
/// [`FinboardError::NotFound`]: crate::error::FinboardError::NotFound
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the raw bytes of a resource
    async fn fetch(&self, path: &str) -> FinboardResult<Vec<u8>>;

    /// Human readable location of the deployment root
    fn describe(&self) -> String;
}
