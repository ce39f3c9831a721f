//! Daily activity view
//!
//! Every transaction of the current month, day by day.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::render_empty;
use crate::display::format_money;
use crate::reports::DailyActivityReport;
use crate::tui::app::App;

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let report = DailyActivityReport::generate(app.dashboard.daily());
    if report.active_days.is_empty() {
        render_empty(frame, area, "Daily", "No transactions this month");
        return;
    }
    let symbol = app.settings.currency_symbol.as_str();

    let header = Row::new(["Day", "Description", "Category", "Amount"].map(|h| {
        Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))
    }))
    .style(Style::default().fg(Color::Yellow));

    let rows: Vec<Row> = report
        .active_days
        .iter()
        .flat_map(|day| {
            day.transactions.iter().map(move |t| {
                let category = match &t.sub_category {
                    Some(sub) => format!("{} / {}", t.category, sub),
                    None => t.category.clone(),
                };
                Row::new(vec![
                    Cell::from(day.day.to_string()),
                    Cell::from(t.description.clone()),
                    Cell::from(category),
                    Cell::from(format_money(t.amount, symbol)),
                ])
            })
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(24),
        Constraint::Length(12),
    ];

    let title = format!(
        " Daily  {} spent, {} per day ",
        format_money(report.total_expense, symbol),
        format_money(report.daily_average(), symbol)
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    state.select(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}
