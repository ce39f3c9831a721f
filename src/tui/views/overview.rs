//! KPI overview view
//!
//! One card per period plus the best and worst month.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{amount_style, render_empty};
use crate::display::{format_money, format_signed_money};
use crate::reports::{Flow, KpiOverview};
use crate::tui::app::App;
use crate::tui::layout::OverviewLayout;

/// Render the overview
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(kpi) = app.dashboard.kpi() else {
        render_empty(frame, area, "Overview", "No KPI summary loaded");
        return;
    };

    let report = KpiOverview::generate(kpi);
    let layout = OverviewLayout::new(area);
    let symbol = app.settings.currency_symbol.as_str();

    let cards = [
        ("Current Month", &report.current_month),
        ("Last Month", &report.last_month),
        ("Forecast", &report.forecast),
        ("Current Year", &report.current_year),
    ];
    for ((title, flow), card) in cards.into_iter().zip(layout.cards) {
        render_card(frame, card, title, flow, symbol);
    }

    render_extremes(frame, &report, layout.extremes, symbol);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, flow: &Flow, symbol: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Income  ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_money(flow.income, symbol)),
        ]),
        Line::from(vec![
            Span::styled("Expense ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_money(flow.expense, symbol)),
        ]),
        Line::from(vec![
            Span::styled("Net     ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_signed_money(flow.net(), symbol),
                amount_style(flow.net()).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if let Some(rate) = flow.savings_rate() {
        lines.push(Line::from(Span::styled(
            format!("Saved {:.0}%", rate),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_extremes(frame: &mut Frame, report: &KpiOverview, area: Rect, symbol: &str) {
    let block = Block::default()
        .title(" Highlights ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let highest = &report.highest_month;
    let lowest = &report.lowest_month;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("▲ Best month   ", Style::default().fg(Color::Green)),
            Span::raw(format!("{}  ", highest)),
            Span::styled(format_signed_money(highest.net, symbol), amount_style(highest.net)),
        ]),
        Line::from(vec![
            Span::styled("▼ Worst month  ", Style::default().fg(Color::Red)),
            Span::raw(format!("{}  ", lowest)),
            Span::styled(format_signed_money(lowest.net, symbol), amount_style(lowest.net)),
        ]),
        Line::from(vec![
            Span::styled("  Last year    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_signed_money(report.last_year.net(), symbol),
                amount_style(report.last_year.net()),
            ),
        ]),
    ];
    if let Some(change) = report.expense_change() {
        lines.push(Line::from(Span::styled(
            format!("  Spending vs last month {:+.0}%", change),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
