// Status bar widget: load state, representative count, fetch clock.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [load indicator] [app name] [rep count] [fetch clock]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    // Load indicator
    let (dot, dot_color) = load_indicator(state.loading, state.load_error.is_some());
    spans.push(Span::styled(
        format!(" {} ", dot),
        Style::default().fg(dot_color),
    ));

    // App name
    spans.push(Span::styled(
        "Sales Desk",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));

    // Separator
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));

    // Representative count
    spans.push(Span::styled(
        format!("Reps: {}", state.representatives.len()),
        Style::default().fg(Color::White),
    ));

    // Separator
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));

    // Fetch clock
    spans.push(fetch_clock_span(state));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Return the load dot character and its color.
pub fn load_indicator(loading: bool, has_error: bool) -> (&'static str, Color) {
    if loading {
        ("●", Color::Yellow)
    } else if has_error {
        ("●", Color::Red)
    } else {
        ("●", Color::Green)
    }
}

/// Clock span showing when the directory last arrived.
fn fetch_clock_span(state: &ViewState) -> Span<'static> {
    match state.fetched_at {
        Some(at) => Span::styled(
            format!("fetched {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::White),
        ),
        None => Span::styled("not fetched yet", Style::default().fg(Color::DarkGray)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
