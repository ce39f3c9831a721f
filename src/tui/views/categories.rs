//! Category breakdown view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::render_empty;
use crate::display::{format_bar, format_money, format_percentage};
use crate::reports::CategoryBreakdown;
use crate::tui::app::App;

/// Render spending per category
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let breakdown = CategoryBreakdown::generate(app.dashboard.daily());
    if breakdown.categories.is_empty() {
        render_empty(frame, area, "Categories", "No spending this month");
        return;
    }
    let symbol = app.settings.currency_symbol.as_str();
    let max = breakdown
        .categories
        .first()
        .map(|c| c.amount)
        .unwrap_or_default();

    let header = Row::new(["Category", "Spent", "Share", "Txns", ""].map(|h| {
        Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))
    }))
    .style(Style::default().fg(Color::Yellow));

    let rows: Vec<Row> = breakdown
        .categories
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.category.clone()),
                Cell::from(format_money(c.amount, symbol)),
                Cell::from(format_percentage(c.percentage)),
                Cell::from(c.transaction_count.to_string()),
                Cell::from(format_bar(c.amount, max, 20)).style(Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(20),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    " Categories  {} total ",
                    format_money(breakdown.total_expense, symbol)
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    state.select(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}
