//! Unlock state machine
//!
//! Owns the loaded datasets and moves between the dashboard phases:
//!
//! ```text
//! Loading ──► Ready
//!    │
//!    ├──────► Locked ──attempt_unlock──► Ready
//!    │          ▲  │
//!    │          └──┘ (failure: auth_error set)
//!    └──────► LoadError
//! ```
//!
//! `Ready` and `LoadError` are terminal. Attempts from `Locked` are unlimited.

use serde::de::DeserializeOwned;

use crate::crypto::{self, derive_key, DerivedKey};
use crate::error::{FinboardError, FinboardResult, DECRYPTION_FAILED_MESSAGE};
use crate::models::{DailyData, DashboardData, Envelope, KpiSummary, MonthlyData, Resource};
use crate::storage::{LoadedResources, Loader};

/// Coarse dashboard phase for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Datasets are being fetched
    Loading,
    /// At least one dataset is sealed and waiting for a password
    Locked,
    /// All datasets are available
    Ready,
    /// A mandatory dataset could not be loaded
    LoadError,
}

#[derive(Debug)]
enum State {
    Loading,
    Locked {
        resources: LoadedResources,
        auth_error: Option<String>,
    },
    Ready(DashboardData),
    LoadError(String),
}

/// The dashboard controller
///
/// Single owner of the dashboard state. Mutated only by
/// [`Dashboard::finish_loading`] and [`Dashboard::attempt_unlock`].
#[derive(Debug)]
pub struct Dashboard {
    state: State,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Create a dashboard in the `Loading` phase
    pub fn new() -> Self {
        Self {
            state: State::Loading,
        }
    }

    /// Load the datasets and settle into the resulting phase
    pub async fn load(loader: &Loader) -> Self {
        let mut dashboard = Self::new();
        dashboard.finish_loading(loader.load().await);
        dashboard
    }

    /// Load on a fresh current-thread runtime
    ///
    /// For callers outside an async context, like the CLI and the TUI loop.
    pub fn load_blocking(loader: &Loader) -> FinboardResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| FinboardError::Io(format!("Failed to start runtime: {}", e)))?;
        Ok(runtime.block_on(Self::load(loader)))
    }

    /// Leave `Loading` with the loader's result
    ///
    /// Ignored in any other phase.
    pub fn finish_loading(&mut self, result: FinboardResult<LoadedResources>) {
        if !matches!(self.state, State::Loading) {
            tracing::warn!(phase = ?self.phase(), "ignoring load result outside Loading");
            return;
        }

        self.state = match result {
            Err(e) => State::LoadError(e.to_string()),
            Ok(resources) if resources.is_sealed() => {
                tracing::info!("datasets are sealed, waiting for password");
                State::Locked {
                    resources,
                    auth_error: None,
                }
            }
            Ok(resources) => match publish_plain(resources) {
                Some(data) => State::Ready(data),
                None => State::LoadError("Datasets changed while loading".to_string()),
            },
        };
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Loading => Phase::Loading,
            State::Locked { .. } => Phase::Locked,
            State::Ready(_) => Phase::Ready,
            State::LoadError(_) => Phase::LoadError,
        }
    }

    /// Error from the last failed unlock attempt
    pub fn auth_error(&self) -> Option<&str> {
        match &self.state {
            State::Locked { auth_error, .. } => auth_error.as_deref(),
            _ => None,
        }
    }

    /// Error that stopped the datasets from loading
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            State::LoadError(message) => Some(message),
            _ => None,
        }
    }

    /// The decoded datasets, once `Ready`
    pub fn data(&self) -> Option<&DashboardData> {
        match &self.state {
            State::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Take the decoded datasets out of a `Ready` dashboard
    pub fn into_data(self) -> Option<DashboardData> {
        match self.state {
            State::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// KPI summary, once `Ready`
    pub fn kpi(&self) -> Option<&KpiSummary> {
        self.data().map(|d| &d.kpi)
    }

    /// Monthly series; empty until `Ready`
    pub fn monthly(&self) -> &[MonthlyData] {
        self.data().map(|d| d.monthly.as_slice()).unwrap_or(&[])
    }

    /// Daily series; empty until `Ready` or when the dataset was absent
    pub fn daily(&self) -> &[DailyData] {
        self.data().map(|d| d.daily.as_slice()).unwrap_or(&[])
    }

    /// Try to unlock the sealed datasets with a password
    ///
    /// Either every sealed dataset decodes and the dashboard becomes `Ready`,
    /// or nothing is published and `auth_error` is set. The failure never
    /// says which dataset failed or why.
    pub fn attempt_unlock(&mut self, password: &str) -> FinboardResult<()> {
        let phase = self.phase();
        let State::Locked {
            resources,
            auth_error,
        } = &mut self.state
        else {
            return Err(FinboardError::InvalidState(format!(
                "Cannot unlock while {:?}",
                phase
            )));
        };

        match unlock(resources, password) {
            Ok(data) => {
                tracing::info!(
                    months = data.monthly.len(),
                    days = data.daily.len(),
                    "dashboard unlocked"
                );
                self.state = State::Ready(data);
                Ok(())
            }
            Err(_) => {
                tracing::warn!("unlock attempt failed");
                *auth_error = Some(DECRYPTION_FAILED_MESSAGE.to_string());
                Err(FinboardError::Decryption)
            }
        }
    }
}

/// Keys derived during one unlock attempt, one per distinct salt
///
/// Dropped (and zeroed) when the attempt returns.
struct AttemptKeys<'a> {
    password: &'a str,
    keys: Vec<(Vec<u8>, DerivedKey)>,
}

impl<'a> AttemptKeys<'a> {
    fn new(password: &'a str) -> Self {
        Self {
            password,
            keys: Vec::new(),
        }
    }

    fn open<T: DeserializeOwned>(&mut self, envelope: &Envelope) -> FinboardResult<T> {
        let salt = envelope.decode_salt()?;
        let index = match self.keys.iter().position(|(s, _)| *s == salt) {
            Some(index) => index,
            None => {
                let key = derive_key(self.password, &salt);
                self.keys.push((salt, key));
                self.keys.len() - 1
            }
        };
        crypto::open(envelope, &self.keys[index].1)
    }

    fn resolve<T: Clone + DeserializeOwned>(&mut self, resource: &Resource<T>) -> FinboardResult<T> {
        match resource {
            Resource::Plain(value) => Ok(value.clone()),
            Resource::Sealed(envelope) => self.open(envelope),
        }
    }
}

fn unlock(resources: &LoadedResources, password: &str) -> FinboardResult<DashboardData> {
    let mut keys = AttemptKeys::new(password);

    let kpi = keys.resolve(&resources.kpi)?;
    let monthly = keys.resolve(&resources.monthly)?;
    let daily = match &resources.daily {
        Some(resource) => keys.resolve(resource)?,
        None => Vec::new(),
    };

    Ok(DashboardData {
        kpi,
        monthly,
        daily,
    })
}

fn publish_plain(resources: LoadedResources) -> Option<DashboardData> {
    let Resource::Plain(kpi) = resources.kpi else {
        return None;
    };
    let Resource::Plain(monthly) = resources.monthly else {
        return None;
    };
    let daily = match resources.daily {
        Some(Resource::Plain(daily)) => daily,
        Some(Resource::Sealed(_)) => return None,
        None => Vec::new(),
    };

    Some(DashboardData {
        kpi,
        monthly,
        daily,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{seal_with, IV_LEN};
    use crate::storage::loader::tests::{daily_json, kpi_json, monthly_json, MemoryTransport};
    use crate::storage::Dataset;
    use serde_json::Value;

    const PASSWORD: &str = "test1234";
    const ZERO_SALT: [u8; 8] = [0u8; 8];

    fn sealed<T>(value: &Value) -> Resource<T> {
        Resource::Sealed(seal_with(value, PASSWORD, &ZERO_SALT, &[3u8; IV_LEN]).unwrap())
    }

    fn plain<T: DeserializeOwned>(value: Value) -> Resource<T> {
        Resource::Plain(serde_json::from_value(value).unwrap())
    }

    fn locked(daily: Option<Resource<Vec<DailyData>>>) -> Dashboard {
        let mut dashboard = Dashboard::new();
        dashboard.finish_loading(Ok(LoadedResources {
            kpi: sealed(&kpi_json()),
            monthly: sealed(&monthly_json()),
            daily,
        }));
        dashboard
    }

    #[test]
    fn test_starts_loading() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.phase(), Phase::Loading);
        assert!(dashboard.data().is_none());
        assert!(dashboard.monthly().is_empty());
    }

    #[test]
    fn test_plain_goes_straight_to_ready() {
        let mut dashboard = Dashboard::new();
        dashboard.finish_loading(Ok(LoadedResources {
            kpi: plain(kpi_json()),
            monthly: plain(monthly_json()),
            daily: None,
        }));

        assert_eq!(dashboard.phase(), Phase::Ready);
        assert_eq!(dashboard.kpi().unwrap().total_income_current_month, 1000.0);
        assert!(dashboard.daily().is_empty());
    }

    #[test]
    fn test_load_failure() {
        let mut dashboard = Dashboard::new();
        dashboard.finish_loading(Err(FinboardError::Load("kpi missing".into())));

        assert_eq!(dashboard.phase(), Phase::LoadError);
        assert!(dashboard.load_error().unwrap().contains("kpi missing"));
        assert!(dashboard.attempt_unlock(PASSWORD).is_err());
        assert_eq!(dashboard.phase(), Phase::LoadError);
    }

    #[test]
    fn test_unlock_success() {
        let mut dashboard = locked(Some(sealed(&daily_json())));
        assert_eq!(dashboard.phase(), Phase::Locked);

        dashboard.attempt_unlock(PASSWORD).unwrap();

        assert_eq!(dashboard.phase(), Phase::Ready);
        assert!(dashboard.auth_error().is_none());
        let expected: KpiSummary = serde_json::from_value(kpi_json()).unwrap();
        assert_eq!(dashboard.kpi(), Some(&expected));
        assert_eq!(dashboard.monthly().len(), 2);
        assert_eq!(dashboard.daily().len(), 2);
    }

    #[test]
    fn test_wrong_password_stays_locked_and_retries() {
        let mut dashboard = locked(None);

        let err = dashboard.attempt_unlock("wrong").unwrap_err();
        assert!(err.is_decryption());
        assert_eq!(dashboard.phase(), Phase::Locked);
        assert_eq!(
            dashboard.auth_error(),
            Some("Incorrect password or data corruption.")
        );
        assert!(dashboard.data().is_none());

        dashboard.attempt_unlock(PASSWORD).unwrap();
        assert_eq!(dashboard.phase(), Phase::Ready);
        assert!(dashboard.auth_error().is_none());
    }

    #[test]
    fn test_partial_failure_is_atomic() {
        let mut bad_monthly = seal_with(&monthly_json(), PASSWORD, &ZERO_SALT, &[3u8; IV_LEN]).unwrap();
        let mut bytes = bad_monthly.decode_data().unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x5A;
        bad_monthly = Envelope::from_parts(&bytes, &ZERO_SALT);

        let mut dashboard = Dashboard::new();
        dashboard.finish_loading(Ok(LoadedResources {
            kpi: sealed(&kpi_json()),
            monthly: Resource::Sealed(bad_monthly),
            daily: None,
        }));

        assert!(dashboard.attempt_unlock(PASSWORD).is_err());
        assert_eq!(dashboard.phase(), Phase::Locked);
        assert!(dashboard.kpi().is_none());
        assert!(dashboard.monthly().is_empty());
        assert!(dashboard.auth_error().is_some());
    }

    #[test]
    fn test_corrupt_daily_fails_attempt() {
        let bad_daily = Envelope::from_parts(&[0u8; 48], &ZERO_SALT);
        let mut dashboard = locked(Some(Resource::Sealed(bad_daily)));

        assert!(dashboard.attempt_unlock(PASSWORD).is_err());
        assert_eq!(dashboard.phase(), Phase::Locked);
    }

    #[test]
    fn test_daily_with_null_description_unlocks() {
        let daily = serde_json::json!([
            {"day": 1, "amount": 35.0, "transactions": [
                {"description": null, "amount": 35.0, "category": "Food"}
            ]}
        ]);
        let mut dashboard = locked(Some(sealed(&daily)));

        dashboard.attempt_unlock(PASSWORD).unwrap();
        assert_eq!(dashboard.phase(), Phase::Ready);
        assert_eq!(dashboard.auth_error(), None);
        assert_eq!(dashboard.daily()[0].transactions[0].description, "");
        assert_eq!(dashboard.daily()[0].transactions[0].category, "Food");
    }

    #[test]
    fn test_absent_daily_yields_empty_series() {
        let mut dashboard = locked(None);
        dashboard.attempt_unlock(PASSWORD).unwrap();
        assert!(dashboard.daily().is_empty());
        assert_eq!(dashboard.monthly().len(), 2);
    }

    #[test]
    fn test_mixed_plain_and_sealed() {
        let mut dashboard = Dashboard::new();
        dashboard.finish_loading(Ok(LoadedResources {
            kpi: sealed(&kpi_json()),
            monthly: plain(monthly_json()),
            daily: Some(plain(daily_json())),
        }));
        assert_eq!(dashboard.phase(), Phase::Locked);

        dashboard.attempt_unlock(PASSWORD).unwrap();
        assert_eq!(dashboard.monthly().len(), 2);
        assert_eq!(dashboard.daily().len(), 2);
    }

    #[test]
    fn test_per_envelope_salts() {
        let kpi = seal_with(&kpi_json(), PASSWORD, &[1u8; 8], &[1u8; IV_LEN]).unwrap();
        let monthly = seal_with(&monthly_json(), PASSWORD, &[2u8; 8], &[2u8; IV_LEN]).unwrap();

        let mut dashboard = Dashboard::new();
        dashboard.finish_loading(Ok(LoadedResources {
            kpi: Resource::Sealed(kpi),
            monthly: Resource::Sealed(monthly),
            daily: None,
        }));

        dashboard.attempt_unlock(PASSWORD).unwrap();
        assert_eq!(dashboard.phase(), Phase::Ready);
    }

    #[test]
    fn test_unlock_when_ready_is_invalid() {
        let mut dashboard = locked(None);
        dashboard.attempt_unlock(PASSWORD).unwrap();

        let err = dashboard.attempt_unlock(PASSWORD).unwrap_err();
        assert!(matches!(err, FinboardError::InvalidState(_)));
        assert_eq!(dashboard.phase(), Phase::Ready);
    }

    #[test]
    fn test_finish_loading_only_once() {
        let mut dashboard = locked(None);
        dashboard.finish_loading(Err(FinboardError::Load("late".into())));
        assert_eq!(dashboard.phase(), Phase::Locked);
    }

    #[tokio::test]
    async fn test_load_through_loader() {
        let transport = MemoryTransport::default()
            .with(Dataset::Kpi, kpi_json())
            .with(Dataset::Monthly, monthly_json());

        let dashboard = Dashboard::load(&Loader::new(transport)).await;
        assert_eq!(dashboard.phase(), Phase::Ready);
    }

    #[test]
    fn test_load_blocking() {
        let transport = MemoryTransport::default()
            .with(Dataset::Kpi, kpi_json())
            .with(Dataset::Monthly, monthly_json());

        let dashboard = Dashboard::load_blocking(&Loader::new(transport)).unwrap();
        assert_eq!(dashboard.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_load_error_through_loader() {
        let dashboard = Dashboard::load(&Loader::new(MemoryTransport::default())).await;
        assert_eq!(dashboard.phase(), Phase::LoadError);
    }
}
