// Quit confirmation modal, drawn over the dashboard when the user presses
// `q`. Input routing switches to yes/no handling while it is visible.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the quit confirmation dialog centered over `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    // 34x5 is enough for the prompt plus borders; smaller terminals get
    // whatever fits.
    let dialog = center(area, 34, 5);

    // Wipe the cells underneath so the dashboard does not bleed through.
    frame.render_widget(Clear, dialog);

    let prompt = Line::from(vec![
        Span::raw("  Leave the dashboard?  "),
        Span::styled("y", key_style(Color::Green)),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::styled("n", key_style(Color::Red)),
    ]);

    let dialog_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(" Quit? ", key_style(Color::Yellow)));

    frame.render_widget(
        Paragraph::new(prompt)
            .block(dialog_block)
            .style(Style::default().bg(Color::Black)),
        dialog,
    );
}

fn key_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Center a `width` x `height` box in `area`, clamping to it when the
/// terminal is smaller than the dialog.
fn center(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
