//! Loading and unlocking for the command line
//!
//! Every command that reads the dashboard goes through [`open_dashboard`]:
//! load the datasets, then unlock them with the given password or by
//! prompting.

use crate::crypto::SecureString;
use crate::error::{FinboardError, FinboardResult};
use crate::models::DashboardData;
use crate::services::{Dashboard, Phase};
use crate::storage::Loader;

/// Prompts allowed before giving up
pub const MAX_PROMPT_ATTEMPTS: usize = 3;

/// Where the unlock password comes from
pub enum PasswordSource {
    /// From `--password` or `FINBOARD_PASSWORD`; tried once
    Given(SecureString),
    /// Ask on the terminal, up to [`MAX_PROMPT_ATTEMPTS`] times
    Prompt,
}

impl PasswordSource {
    /// Use the given password if any, otherwise prompt
    pub fn from_option(password: Option<String>) -> Self {
        match password {
            Some(p) => PasswordSource::Given(SecureString::new(p)),
            None => PasswordSource::Prompt,
        }
    }
}

/// Unlocked datasets and whether they had to be unlocked
#[derive(Debug)]
pub struct Unlocked {
    pub data: DashboardData,
    pub was_sealed: bool,
}

/// Load the datasets and unlock them if sealed
pub fn open_dashboard(loader: &Loader, source: &PasswordSource) -> FinboardResult<Unlocked> {
    let mut dashboard = Dashboard::load_blocking(loader)?;
    let was_sealed = dashboard.phase() == Phase::Locked;

    match dashboard.phase() {
        Phase::LoadError => {
            let message = dashboard.load_error().unwrap_or("unknown error").to_string();
            return Err(FinboardError::Load(message));
        }
        Phase::Locked => unlock(&mut dashboard, source)?,
        Phase::Ready | Phase::Loading => {}
    }

    let data = dashboard
        .into_data()
        .ok_or_else(|| FinboardError::InvalidState("Dashboard is not ready".into()))?;
    Ok(Unlocked { data, was_sealed })
}

fn unlock(dashboard: &mut Dashboard, source: &PasswordSource) -> FinboardResult<()> {
    match source {
        PasswordSource::Given(password) => dashboard.attempt_unlock(password),
        PasswordSource::Prompt => {
            for attempt in 1..=MAX_PROMPT_ATTEMPTS {
                let password = prompt_password("Password: ")?;
                match dashboard.attempt_unlock(&password) {
                    Ok(()) => return Ok(()),
                    Err(e) if e.is_decryption() && attempt < MAX_PROMPT_ATTEMPTS => {
                        eprintln!("{}", e);
                    }
                    Err(e) => return Err(e),
                }
            }
            Err(FinboardError::Decryption)
        }
    }
}

/// Read a password from the terminal without echo
pub fn prompt_password(prompt: &str) -> FinboardResult<SecureString> {
    let mut input = rpassword::prompt_password(prompt)
        .map_err(|e| FinboardError::Io(format!("Failed to read password: {}", e)))?;
    Ok(SecureString::take_from(&mut input))
}

/// Read a new password twice and require both to match
pub fn prompt_new_password() -> FinboardResult<SecureString> {
    loop {
        let first = prompt_password("New password: ")?;
        if first.is_empty() {
            eprintln!("Password must not be empty. Please try again.");
            continue;
        }

        let second = prompt_password("Confirm password: ")?;
        if first.as_str() != second.as_str() {
            eprintln!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::loader::tests::{kpi_json, monthly_json, MemoryTransport};
    use crate::storage::Dataset;

    #[test]
    fn test_plain_datasets_need_no_password() {
        let loader = Loader::new(
            MemoryTransport::default()
                .with(Dataset::Kpi, kpi_json())
                .with(Dataset::Monthly, monthly_json()),
        );

        let unlocked = open_dashboard(&loader, &PasswordSource::Prompt).unwrap();
        assert!(!unlocked.was_sealed);
        assert_eq!(unlocked.data.monthly.len(), 2);
        assert!(unlocked.data.daily.is_empty());
    }

    #[test]
    fn test_load_error_is_reported() {
        let loader = Loader::new(MemoryTransport::default());
        let err = open_dashboard(&loader, &PasswordSource::Prompt).unwrap_err();
        assert!(matches!(err, FinboardError::Load(_)));
    }

    #[test]
    fn test_given_password_tried_once() {
        let sealed = crate::crypto::seal(&kpi_json(), "right").unwrap();
        let loader = Loader::new(
            MemoryTransport::default()
                .with(Dataset::Kpi, serde_json::to_value(&sealed).unwrap())
                .with(Dataset::Monthly, monthly_json()),
        );

        let source = PasswordSource::from_option(Some("wrong".into()));
        let err = open_dashboard(&loader, &source).unwrap_err();
        assert!(err.is_decryption());

        let source = PasswordSource::from_option(Some("right".into()));
        let unlocked = open_dashboard(&loader, &source).unwrap();
        assert!(unlocked.was_sealed);
    }
}
