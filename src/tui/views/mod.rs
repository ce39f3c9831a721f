//! TUI Views module
//!
//! The locked screen, the load error screen, and the four dashboard views
//! with their tab bar and status bar.

pub mod categories;
pub mod daily;
pub mod monthly;
pub mod overview;
pub mod status_bar;
pub mod unlock;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::{ActiveView, App};
use super::layout::{centered_rect_fixed, AppLayout};
use crate::services::Phase;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    match app.phase() {
        Phase::Loading => render_message(
            frame,
            " Finboard ",
            &format!("Loading datasets from {}…", app.source),
            Color::Cyan,
        ),
        Phase::LoadError => {
            let message = format!(
                "{}\n\nPress q to quit.",
                app.dashboard.load_error().unwrap_or("Failed to load datasets")
            );
            render_message(frame, " Could not load dashboard ", &message, Color::Red);
        }
        Phase::Locked => unlock::render(frame, app),
        Phase::Ready => render_dashboard(frame, app),
    }
}

fn render_dashboard(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Overview => overview::render(frame, app, layout.main),
        ActiveView::Monthly => monthly::render(frame, app, layout.main),
        ActiveView::Daily => daily::render(frame, app, layout.main),
        ActiveView::Categories => categories::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!(" {} {} ", i + 1, view.title())))
        .collect();
    let selected = ActiveView::ALL
        .iter()
        .position(|v| *v == app.active_view)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .title(" Finboard ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render a full-screen centered message box
fn render_message(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect_fixed(64, 9, frame.area());

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(message)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Style for a signed amount: green when non-negative, red otherwise
pub(crate) fn amount_style(amount: f64) -> Style {
    if amount < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    }
}

/// Placeholder body for a view with nothing to show
pub(crate) fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
