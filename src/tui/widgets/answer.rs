// Answer widget: the AI assistant's response with lightweight styling.
//
// Header: "AI Assistant -- idle/thinking.../answered"
// Body: answer text run through the markup line classifier; headings bold,
// bullets and numbered items prefixed, **bold** runs emphasized.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::focused_border_style;
use crate::markup::{self, Inline, LineNode};
use crate::protocol::AskStatus;
use crate::tui::ViewState;

/// Render the answer panel into the given area.
///
/// When `focused` is true, the border is highlighted to indicate this panel
/// has keyboard focus for scroll routing.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let title_line = build_title(state.ask_status);
    let effective_border = focused_border_style(focused, border_style(state.ask_status));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title_line)
        .border_style(effective_border);

    if state.answer_text.is_empty() {
        let paragraph = Paragraph::new(placeholder_text(state.ask_status))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = build_lines(&state.answer_text);

    // Clamp the manual scroll to the content height
    let inner_height = (area.height as usize).saturating_sub(2);
    let max_offset = lines.len().saturating_sub(inner_height);
    let offset = state
        .scroll_offset
        .get("answer")
        .copied()
        .unwrap_or(0)
        .min(max_offset);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Style the answer text line by line.
pub fn build_lines(text: &str) -> Vec<Line<'static>> {
    markup::render(text).into_iter().map(style_node).collect()
}

fn style_node(node: LineNode) -> Line<'static> {
    match node {
        LineNode::Heading { level, text } => Line::from(Span::styled(text, heading_style(level))),
        LineNode::BulletItem { text } => Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Cyan)),
            Span::raw(text),
        ]),
        LineNode::NumberedItem { label, text } => Line::from(vec![
            Span::styled(
                format!("  {}. ", label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(text),
        ]),
        LineNode::BoldRun { spans } => Line::from(
            spans
                .into_iter()
                .map(|inline| match inline {
                    Inline::Plain(text) => Span::raw(text),
                    Inline::Bold(text) => {
                        Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
                    }
                })
                .collect::<Vec<_>>(),
        ),
        LineNode::PlainText { text } => Line::from(Span::raw(text)),
        LineNode::Blank => Line::from(""),
    }
}

/// Heading emphasis steps down with the level.
fn heading_style(level: u8) -> Style {
    match level {
        1 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        _ => Style::default().add_modifier(Modifier::BOLD),
    }
}

/// Build the title line with status indicator.
fn build_title(status: AskStatus) -> Line<'static> {
    let (status_text, status_color) = status_indicator(status);
    Line::from(vec![
        Span::styled("AI Assistant", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" -- ", Style::default().fg(Color::DarkGray)),
        Span::styled(status_text, Style::default().fg(status_color)),
    ])
}

/// Return status text and color for the ask status.
pub fn status_indicator(status: AskStatus) -> (&'static str, Color) {
    match status {
        AskStatus::Idle => ("idle", Color::DarkGray),
        AskStatus::Pending => ("thinking...", Color::Yellow),
        AskStatus::Answered => ("answered", Color::Green),
    }
}

/// Border style varies by status.
fn border_style(status: AskStatus) -> Style {
    match status {
        AskStatus::Pending => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    }
}

/// Placeholder text when the answer is empty.
fn placeholder_text(status: AskStatus) -> String {
    match status {
        AskStatus::Idle => "Ask a question to get insights.".to_string(),
        AskStatus::Pending => "Thinking...".to_string(),
        AskStatus::Answered => "Answer complete (empty).".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
