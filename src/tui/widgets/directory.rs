// Directory widget: scrollable cards for each sales representative.
//
// Card: name (bold), "role | region" (gray), skill chips
// Banner states: loading, fetch error, empty directory
// The card under the cursor is highlighted; Enter opens its detail column.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use super::focused_border_style;
use crate::directory::Representative;
use crate::tui::ViewState;

/// Lines a single card occupies: name, role/region, skills, spacer.
const LINES_PER_CARD: usize = 4;

/// Render the representative directory into the given area.
///
/// When `focused` is true, the border is highlighted to indicate this panel
/// has keyboard focus for cursor movement.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let border = focused_border_style(focused, Style::default());
    let count = state.representatives.len();

    // Banner states take precedence over the card list: an in-flight
    // fetch shows the loading text, then any error, then the empty hint.
    if state.loading {
        render_banner(frame, area, border, count, "  Loading sales data...", Color::DarkGray);
        return;
    }
    if let Some(ref message) = state.load_error {
        let text = format!("  Error: {}", message);
        render_banner(frame, area, border, count, &text, Color::Red);
        return;
    }
    if state.representatives.is_empty() {
        render_banner(frame, area, border, count, "  No representatives.", Color::DarkGray);
        return;
    }

    let lines = all_card_lines(state);
    let total = lines.len();

    // Visible row count: subtract 2 for borders
    let visible_rows = (area.height as usize).saturating_sub(2);
    let offset = window_offset(state.cursor * LINES_PER_CARD, total, visible_rows);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(offset)
        .take(visible_rows.max(1))
        .collect();

    let paragraph = Paragraph::new(visible).block(block(border, state.representatives.len()));
    frame.render_widget(paragraph, area);

    // Render vertical scrollbar if content overflows
    if total > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_rows)).position(offset);
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

fn render_banner(
    frame: &mut Frame,
    area: Rect,
    border: Style,
    count: usize,
    text: &str,
    color: Color,
) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .block(block(border, count));
    frame.render_widget(paragraph, area);
}

fn block(border: Style, count: usize) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!("Sales Representatives ({})", count))
}

/// Build the card lines for every representative.
fn all_card_lines(state: &ViewState) -> Vec<Line<'static>> {
    state
        .representatives
        .iter()
        .enumerate()
        .flat_map(|(i, rep)| {
            let is_selected = state.selected == Some(rep.id);
            card_lines(rep, is_selected, i == state.cursor)
        })
        .collect()
}

/// Build the display lines for a single representative card.
///
/// The cursor card gets a pointer and a highlight background; the selected
/// representative keeps a yellow name even when the cursor moves on.
pub fn card_lines(
    rep: &Representative,
    is_selected: bool,
    under_cursor: bool,
) -> Vec<Line<'static>> {
    let row_style = if under_cursor {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let pointer = if under_cursor { "> " } else { "  " };
    let name_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    vec![
        Line::from(vec![
            Span::styled(pointer.to_string(), row_style),
            Span::styled(rep.name.clone(), name_style.patch(row_style)),
        ]),
        Line::from(Span::styled(
            format!("    {} | {}", rep.role, rep.region),
            Style::default().fg(Color::Gray).patch(row_style),
        )),
        Line::from(Span::styled(
            format!("    {}", skills_chips(&rep.skills)),
            Style::default().fg(Color::Cyan).patch(row_style),
        )),
        Line::from(""),
    ]
}

/// Format the skill list as bracketed chips (e.g. "[Negotiation] [CRM]").
pub fn skills_chips(skills: &[String]) -> String {
    if skills.is_empty() {
        return "--".to_string();
    }
    skills
        .iter()
        .map(|s| format!("[{}]", s))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scroll the card window so the cursor line sits mid-panel where possible,
/// clamped to the content bounds.
pub fn window_offset(cursor_line: usize, total_lines: usize, visible_rows: usize) -> usize {
    let max_offset = total_lines.saturating_sub(visible_rows);
    cursor_line.saturating_sub(visible_rows / 2).min(max_offset)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
