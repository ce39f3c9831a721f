//! Configuration module for finboard
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence (data source, display preferences)

pub mod paths;
pub mod settings;

pub use paths::FinboardPaths;
pub use settings::{DataSource, Settings};
