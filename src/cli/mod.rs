//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod seal;
pub mod session;
pub mod show;

pub use seal::handle_seal_command;
pub use session::{open_dashboard, PasswordSource, Unlocked};
pub use show::{
    handle_export_command, handle_show_command, handle_verify_command, render_dashboard,
    ShowSection,
};
