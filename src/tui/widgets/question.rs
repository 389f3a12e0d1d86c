// Question input widget: single-line text box for the AI assistant.
//
// Placeholder when idle, block cursor while typing, yellow border in
// input mode. Long questions keep the tail visible next to the cursor.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

const PLACEHOLDER: &str = "Ask about sales data or performance...";

/// Render the question input box into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let border = if state.input_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    // Keep room for borders and the cursor block.
    let max_chars = (area.width as usize).saturating_sub(3);

    let line = if state.question_input.is_empty() && !state.input_mode {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let visible = tail_window(&state.question_input, max_chars);
        let mut spans = vec![Span::raw(visible)];
        if state.input_mode {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Ask the Sales Assistant"),
    );
    frame.render_widget(paragraph, area);
}

/// Keep the last `max_chars` characters of the input so the cursor end of a
/// long question stays on screen.
pub fn tail_window(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    text.chars().skip(count - max_chars).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
