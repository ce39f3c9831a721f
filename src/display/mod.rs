//! Display formatting for terminal output
//!
//! Shared helpers used by the text reports and the TUI views.

pub mod report;

pub use report::{
    double_separator, format_bar, format_money, format_percentage, format_signed_money,
    left_align, right_align, separator, truncate,
};
