//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::services::Dashboard;
use crate::storage::Loader;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// Shows the loading screen while the datasets are fetched, then hands
/// control to the event loop until the user quits.
pub fn run_tui(settings: &Settings, loader: &Loader) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, settings, loader);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, settings: &Settings, loader: &Loader) -> Result<()> {
    let mut app = App::new(Dashboard::new(), settings, loader.describe());
    terminal.draw(|frame| super::views::render(frame, &app))?;

    app.dashboard = Dashboard::load_blocking(loader)?;
    tracing::debug!(phase = ?app.phase(), "dashboard loaded");

    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| super::views::render(frame, &app))?;

        if app.unlock_in_flight {
            // The progress indicator is on screen; key derivation blocks here
            app.run_pending_unlock();
            let dropped = events.discard_pending_keys();
            if dropped > 0 {
                tracing::debug!(dropped, "discarded keys typed during unlock");
            }
            continue;
        }

        handle_event(&mut app, events.next()?);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
