//! Monthly summary view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::{amount_style, render_empty};
use crate::display::{format_money, format_signed_money};
use crate::reports::MonthlyTrendReport;
use crate::tui::app::App;

/// Render the month-by-month table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let report = MonthlyTrendReport::generate(app.dashboard.monthly());
    if report.months.is_empty() {
        render_empty(frame, area, "Monthly", "No monthly data");
        return;
    }
    let symbol = app.settings.currency_symbol.as_str();

    let header = Row::new(["Month", "Income", "Expense", "Net", ""].map(|h| {
        Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))
    }))
    .style(Style::default().fg(Color::Yellow));

    let rows: Vec<Row> = report
        .months
        .iter()
        .map(|m| {
            let marker = if m.is_highest_net {
                Cell::from("▲ best").style(Style::default().fg(Color::Green))
            } else if m.is_lowest_net {
                Cell::from("▼ worst").style(Style::default().fg(Color::Red))
            } else {
                Cell::from("")
            };
            Row::new(vec![
                Cell::from(m.to_string()),
                Cell::from(format_money(m.income, symbol)),
                Cell::from(format_money(m.expense, symbol)),
                Cell::from(format_signed_money(m.net, symbol)).style(amount_style(m.net)),
                marker,
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Min(8),
    ];

    let title = format!(
        " Monthly  {} net over {} months ",
        format_signed_money(report.total_net(), symbol),
        report.months.len()
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
