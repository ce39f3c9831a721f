//! Export module for finboard
//!
//! Two directions out of the dashboard:
//! - Seal: plain dataset files to envelopes for a deployment root
//! - JSON: unlocked datasets to one plain, versioned document

pub mod json;
pub mod seal;

pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use seal::{seal_directory, SealReport};
