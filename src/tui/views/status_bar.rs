//! Status bar view
//!
//! Shows the data source, the current month's net, the status message and
//! key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::amount_style;
use crate::display::format_signed_money;
use crate::tui::app::App;

const HINTS: &str = " Tab:View  1-4:Jump  j/k:Move  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.source),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(kpi) = app.dashboard.kpi() {
        let net = kpi.net_current_month();
        spans.push(Span::raw("│ "));
        spans.push(Span::styled("This month: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format_signed_money(net, &app.settings.currency_symbol),
            amount_style(net).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Right-align the hints when there is room for them
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let width = area.width as usize;
    if left_len + HINTS.len() < width {
        spans.push(Span::raw(" ".repeat(width - left_len - HINTS.len())));
        spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
