//! Terminal User Interface module
//!
//! Interactive dashboard built on ratatui: a password screen while the
//! datasets are sealed, then tabbed views over the unlocked data.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
