//! Dataset loader
//!
//! Fetches the three datasets concurrently and classifies each one as plain
//! data or a sealed envelope. The KPI summary and monthly series are
//! mandatory; the daily series may be missing.

use serde::de::DeserializeOwned;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{DailyData, KpiSummary, MonthlyData, Resource};

use super::{Dataset, Transport};

/// Everything the loader found at the deployment root
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedResources {
    pub kpi: Resource<KpiSummary>,
    pub monthly: Resource<Vec<MonthlyData>>,
    /// `None` when the daily dataset was absent or unreadable
    pub daily: Option<Resource<Vec<DailyData>>>,
}

impl LoadedResources {
    /// Check if any dataset needs a password
    pub fn is_sealed(&self) -> bool {
        self.kpi.is_sealed()
            || self.monthly.is_sealed()
            || self.daily.as_ref().is_some_and(Resource::is_sealed)
    }
}

/// Loads the dashboard datasets through a transport
pub struct Loader {
    transport: Box<dyn Transport>,
}

impl Loader {
    /// Create a loader over a transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Human readable location being loaded from
    pub fn describe(&self) -> String {
        self.transport.describe()
    }

    /// Fetch all three datasets
    ///
    /// The fetches run concurrently and all of them settle before this
    /// returns. A failure on a mandatory dataset is a [`FinboardError::Load`];
    /// a failure on the daily dataset is logged and dropped.
    pub async fn load(&self) -> FinboardResult<LoadedResources> {
        let (kpi, monthly, daily) = tokio::join!(
            self.fetch::<KpiSummary>(Dataset::Kpi),
            self.fetch::<Vec<MonthlyData>>(Dataset::Monthly),
            self.fetch::<Vec<DailyData>>(Dataset::Daily),
        );

        let kpi = kpi.map_err(|e| self.load_error(Dataset::Kpi, e))?;
        let monthly = monthly.map_err(|e| self.load_error(Dataset::Monthly, e))?;
        let daily = match daily {
            Ok(resource) => Some(resource),
            Err(e) if e.is_not_found() => {
                tracing::debug!("no daily dataset, continuing without it");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "daily dataset unreadable, continuing without it");
                None
            }
        };

        let resources = LoadedResources { kpi, monthly, daily };
        tracing::info!(
            source = %self.describe(),
            sealed = resources.is_sealed(),
            daily = resources.daily.is_some(),
            "datasets loaded"
        );
        Ok(resources)
    }

    async fn fetch<T: DeserializeOwned>(&self, dataset: Dataset) -> FinboardResult<Resource<T>> {
        let bytes = self.transport.fetch(&dataset.path()).await?;
        Resource::from_slice(&bytes)
    }

    fn load_error(&self, dataset: Dataset, err: FinboardError) -> FinboardError {
        tracing::error!(dataset = %dataset, error = %err, "mandatory dataset failed to load");
        FinboardError::Load(format!(
            "Failed to load {} from {}: {}",
            dataset,
            self.describe(),
            err
        ))
    }
}
