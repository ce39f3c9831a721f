//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::Settings;
use crate::services::{Dashboard, Phase};

use super::widgets::TextInput;

/// Which dashboard view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Overview,
    Monthly,
    Daily,
    Categories,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Overview,
        ActiveView::Monthly,
        ActiveView::Daily,
        ActiveView::Categories,
    ];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Overview => "Overview",
            ActiveView::Monthly => "Monthly",
            ActiveView::Daily => "Daily",
            ActiveView::Categories => "Categories",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    /// The view after this one, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The view before this one, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state
pub struct App<'a> {
    /// The dashboard controller
    pub dashboard: Dashboard,

    /// Application settings
    pub settings: &'a Settings,

    /// Where the datasets were loaded from
    pub source: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Password field on the locked screen
    pub password_input: TextInput,

    /// An unlock attempt has been submitted and not finished yet
    pub unlock_in_flight: bool,

    /// Selected row in the table views
    pub selected_row: usize,

    /// Transient status message
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(dashboard: Dashboard, settings: &'a Settings, source: impl Into<String>) -> Self {
        Self {
            dashboard,
            settings,
            source: source.into(),
            should_quit: false,
            active_view: ActiveView::default(),
            password_input: TextInput::new()
                .label("Password")
                .placeholder("type your password")
                .focused(true)
                .masked(true),
            unlock_in_flight: false,
            selected_row: 0,
            status_message: None,
        }
    }

    /// Current dashboard phase
    pub fn phase(&self) -> Phase {
        self.dashboard.phase()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a view and reset the selection
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.selected_row = 0;
    }

    /// Number of selectable rows in the active view
    pub fn row_count(&self) -> usize {
        match self.active_view {
            ActiveView::Overview => 0,
            ActiveView::Monthly => self.dashboard.monthly().len(),
            ActiveView::Daily => self
                .dashboard
                .daily()
                .iter()
                .map(|d| d.transactions.len())
                .sum(),
            ActiveView::Categories => {
                let mut categories: Vec<&str> = self
                    .dashboard
                    .daily()
                    .iter()
                    .flat_map(|d| d.transactions.iter().map(|t| t.category.as_str()))
                    .collect();
                categories.sort_unstable();
                categories.dedup();
                categories.len()
            }
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let count = self.row_count();
        if count > 0 && self.selected_row + 1 < count {
            self.selected_row += 1;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Queue an unlock attempt with the typed password
    ///
    /// Ignored while another attempt is in flight. An empty password is
    /// submitted like any other. The attempt itself runs in
    /// [`App::run_pending_unlock`] so the screen can show progress first.
    pub fn submit_password(&mut self) {
        if self.unlock_in_flight || self.phase() != Phase::Locked {
            return;
        }
        self.unlock_in_flight = true;
        self.set_status("Unlocking…");
    }

    /// Run the queued unlock attempt, if any
    pub fn run_pending_unlock(&mut self) {
        if !self.unlock_in_flight {
            return;
        }

        let password = self.password_input.take_secret();
        let result = self.dashboard.attempt_unlock(&password);
        self.unlock_in_flight = false;

        match result {
            Ok(()) => {
                self.switch_view(ActiveView::Overview);
                self.set_status("Unlocked");
            }
            Err(_) => self.clear_status(),
        }
    }
}
