//! Finboard - Terminal dashboard for pre-computed personal finance summaries
//!
//! This library loads three JSON datasets from a deployment root (a local
//! directory or a base URL), unlocks them when they are password-sealed, and
//! presents them as text reports or an interactive TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `crypto`: PBKDF2 key derivation and AES-256-CBC envelopes
//! - `models`: Dataset shapes (KPI summary, monthly and daily series)
//! - `storage`: Transports and the concurrent dataset loader
//! - `services`: The unlock state machine
//! - `reports`: Text reports over unlocked data
//! - `export`: Sealing plain datasets and JSON export
//! - `cli`, `display`, `tui`: Presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use finboard::services::{Dashboard, Phase};
//!
//! let loader = settings.loader()?;
//! let mut dashboard = Dashboard::load_blocking(&loader)?;
//! if dashboard.phase() == Phase::Locked {
//!     dashboard.attempt_unlock("test1234")?;
//! }
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{FinboardError, FinboardResult};
