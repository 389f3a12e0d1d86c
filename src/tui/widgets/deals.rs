// Deals widget: table of the selected representative's deals.
//
// Columns: Client, Value, Status
// Value: dollar amount with thousands separators
// Status color: Closed Won green, Closed Lost red, In Progress blue

use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
};
use ratatui::Frame;

use super::focused_border_style;
use crate::directory::DealStatus;
use crate::tui::ViewState;

/// Render the deals table for the selected representative.
///
/// When `focused` is true, the border is highlighted to indicate this panel
/// has keyboard focus for scroll routing.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let rep = match state.selected_rep() {
        Some(rep) => rep,
        None => return,
    };

    let border = focused_border_style(focused, Style::default());
    let title = format!("{}'s Dashboard", rep.name);

    if rep.deals.is_empty() {
        let paragraph = Paragraph::new("  No deals.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Client"),
        Cell::from("Value"),
        Cell::from("Status"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(0);

    let scroll_offset = state.scroll_offset.get("deals").copied().unwrap_or(0);

    // Visible row count: subtract 2 for borders and 1 for the header
    let visible_rows = (area.height as usize).saturating_sub(3);
    let total = rep.deals.len();
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = scroll_offset.min(max_offset);

    let rows: Vec<Row> = rep
        .deals
        .iter()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|deal| {
            Row::new(vec![
                Cell::from(deal.client.clone()),
                Cell::from(format!("${}", format_value(deal.value))),
                Cell::from(Span::styled(
                    deal.status.label().to_string(),
                    Style::default().fg(status_color(&deal.status)),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(table, area);

    // Render vertical scrollbar if content overflows
    if total > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_rows)).position(scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Color for a deal status chip.
///
/// Won deals are green, lost deals red, in-progress blue; anything the
/// backend sends beyond those three renders gray.
pub fn status_color(status: &DealStatus) -> Color {
    match status {
        DealStatus::ClosedWon => Color::Green,
        DealStatus::ClosedLost => Color::Red,
        DealStatus::InProgress => Color::Blue,
        DealStatus::Other(_) => Color::DarkGray,
    }
}

/// Format a deal value with thousands separators, keeping two decimals for
/// non-integral amounts (e.g. 120000 -> "120,000", 75000.5 -> "75,000.50").
pub fn format_value(value: f64) -> String {
    // Work in cents so fractional rounding can carry into the integer part.
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let grouped = group_thousands(whole);
    let unsigned = if frac == 0 {
        grouped
    } else {
        format!("{}.{:02}", grouped, frac)
    };

    if value < 0.0 && cents > 0 {
        format!("-{}", unsigned)
    } else {
        unsigned
    }
}

/// Insert a comma every three digits from the right.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
