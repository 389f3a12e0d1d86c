// Clients widget: contact cards for the selected representative's clients.
//
// Card: name (bold), "Industry: ..." (gray), mailto contact link (cyan)

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use super::focused_border_style;
use crate::directory::Client;
use crate::tui::ViewState;

/// Lines a single card occupies: name, industry, contact, spacer.
const LINES_PER_CARD: usize = 4;

/// Render the client list for the selected representative.
///
/// When `focused` is true, the border is highlighted to indicate this panel
/// has keyboard focus for scroll routing.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let rep = match state.selected_rep() {
        Some(rep) => rep,
        None => return,
    };

    let border = focused_border_style(focused, Style::default());
    let title = format!("Clients ({})", rep.clients.len());

    if rep.clients.is_empty() {
        let paragraph = Paragraph::new("  No clients.")
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

    let lines: Vec<Line> = rep.clients.iter().flat_map(card_lines).collect();
    let total = lines.len();

    let scroll_offset = state.scroll_offset.get("clients").copied().unwrap_or(0);

    // Visible row count: subtract 2 for borders
    let visible_rows = (area.height as usize).saturating_sub(2);
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = scroll_offset.min(max_offset);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .collect();

    let paragraph = Paragraph::new(visible).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(paragraph, area);

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

/// Build the display lines for a single client card.
pub fn card_lines(client: &Client) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("  {}", client.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("    Industry: {}", client.industry),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("    {}", client.mailto()),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Representative;

    fn client(name: &str, industry: &str, contact: &str) -> Client {
        Client {
            name: name.to_string(),
            industry: industry.to_string(),
            contact: contact.to_string(),
        }
    }

    fn rep_with_clients(clients: Vec<Client>) -> Representative {
        Representative {
            id: 1,
            name: "Alice Johnson".to_string(),
            clients,
            ..Default::default()
        }
    }

    #[test]
    fn card_has_fixed_line_count() {
        let c = client("Acme Corp", "Manufacturing", "contact@acme.com");
        assert_eq!(card_lines(&c).len(), LINES_PER_CARD);
    }

    #[test]
    fn card_shows_mailto_reference() {
        let c = client("Acme Corp", "Manufacturing", "contact@acme.com");
        let lines = card_lines(&c);
        assert_eq!(lines[2].spans[0].content.as_ref(), "    mailto:contact@acme.com");
        assert_eq!(lines[2].spans[0].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn card_labels_industry() {
        let c = client("Acme Corp", "Manufacturing", "contact@acme.com");
        let lines = card_lines(&c);
        assert_eq!(lines[1].spans[0].content.as_ref(), "    Industry: Manufacturing");
    }

    #[test]
    fn render_does_not_panic_without_selection() {
        let backend = ratatui::backend::TestBackend::new(60, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, false))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_empty_clients() {
        let backend = ratatui::backend::TestBackend::new(60, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.loading = false;
        state.representatives = vec![rep_with_clients(Vec::new())];
        state.selected = Some(1);
        terminal
            .draw(|frame| render(frame, frame.area(), &state, false))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_clients() {
        let backend = ratatui::backend::TestBackend::new(60, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.loading = false;
        state.representatives = vec![rep_with_clients(vec![
            client("Acme Corp", "Manufacturing", "contact@acme.com"),
            client("Globex", "Technology", "info@globex.com"),
        ])];
        state.selected = Some(1);
        state.scroll_offset.insert("clients".to_string(), 2);
        terminal
            .draw(|frame| render(frame, frame.area(), &state, true))
            .unwrap();
    }
}
