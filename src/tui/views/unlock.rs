//! Locked screen
//!
//! Password form shown while the datasets are sealed.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the locked screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Finboard is locked ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Source
            Constraint::Length(1),
            Constraint::Length(1), // Password
            Constraint::Length(1),
            Constraint::Length(1), // Error or progress
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let source = Paragraph::new(Line::from(vec![
        Span::styled("Data: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.source.as_str()),
    ]));
    frame.render_widget(source, rows[0]);

    frame.render_widget(&app.password_input, rows[2]);

    let feedback = if app.unlock_in_flight {
        Some(Span::styled(
            "Unlocking…",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = app.dashboard.auth_error() {
        Some(Span::styled(
            error,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        app.status_message
            .as_deref()
            .map(|m| Span::styled(m, Style::default().fg(Color::Yellow)))
    };
    if let Some(span) = feedback {
        frame.render_widget(
            Paragraph::new(Line::from(span)).alignment(Alignment::Center),
            rows[4],
        );
    }

    let hints = Paragraph::new("Enter: Unlock   Esc: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, rows[6]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::crypto::seal_with;
    use crate::models::Resource;
    use crate::services::Dashboard;
    use crate::storage::loader::tests::{kpi_json, monthly_json};
    use crate::storage::LoadedResources;
    use ratatui::{backend::TestBackend, Terminal};

    fn locked() -> Dashboard {
        let mut dashboard = Dashboard::new();
        dashboard.finish_loading(Ok(LoadedResources {
            kpi: Resource::Sealed(seal_with(&kpi_json(), "pw", &[1u8; 8], &[2u8; 16]).unwrap()),
            monthly: Resource::Plain(serde_json::from_value(monthly_json()).unwrap()),
            daily: None,
        }));
        dashboard
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_password_is_masked() {
        let settings = Settings::default();
        let mut app = App::new(locked(), &settings, "public");
        for c in "secret".chars() {
            app.password_input.insert(c);
        }

        let text = screen(&app);
        assert!(text.contains("Finboard is locked"));
        assert!(!text.contains("secret"));
        assert!(text.contains("••••••"));
    }

    #[test]
    fn test_failed_attempt_shows_message() {
        let settings = Settings::default();
        let mut app = App::new(locked(), &settings, "public");
        for c in "nope".chars() {
            app.password_input.insert(c);
        }
        app.submit_password();
        assert!(screen(&app).contains("Unlocking…"));

        app.run_pending_unlock();
        assert!(screen(&app).contains("Incorrect password or data corruption."));
    }
}
