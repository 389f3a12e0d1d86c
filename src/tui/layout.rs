// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the sales dashboard:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                               |
// +-------------------------+------------------------+
// | Directory (40%)         | Deals (55%)            |
// |                         +------------------------+
// |                         | Clients (45%)          |
// +-------------------------+------------------------+
// | Question Input (3 rows)                          |
// +--------------------------------------------------+
// | Answer Panel (10 rows)                           |
// +--------------------------------------------------+
// | Help Bar (1 row)                                 |
// +--------------------------------------------------+
//
// With no representative selected the detail column is absent and the
// directory takes the full middle width.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: load state, representative count, fetch clock.
    pub status_bar: Rect,
    /// Left side of the middle section: representative cards.
    pub directory: Rect,
    /// Detail column top: deals of the selected representative.
    pub deals: Option<Rect>,
    /// Detail column bottom: clients of the selected representative.
    pub clients: Option<Rect>,
    /// Question input box above the answer panel.
    pub question: Rect,
    /// Rendered answer text.
    pub answer: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
///
/// Fixed heights for the status bar, question input, answer panel, and
/// help bar; the remaining space goes to the directory and, when
/// `show_detail` is set, the deal/client column next to it.
pub fn build_layout(area: Rect, show_detail: bool) -> AppLayout {
    // Vertical: status(1) | middle(fill) | question(3) | answer(10) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // status bar
            Constraint::Min(10),    // middle section (directory + detail)
            Constraint::Length(3),  // question input
            Constraint::Length(10), // answer panel
            Constraint::Length(1),  // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let question = vertical[2];
    let answer = vertical[3];
    let help_bar = vertical[4];

    if !show_detail {
        return AppLayout {
            status_bar,
            directory: middle,
            deals: None,
            clients: None,
            question,
            answer,
            help_bar,
        };
    }

    // Horizontal: directory (40%) | detail column (60%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(middle);

    let directory = horizontal[0];
    let detail = horizontal[1];

    // Detail vertical: deals (55%) | clients (45%)
    let detail_sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(detail);

    AppLayout {
        status_bar,
        directory,
        deals: Some(detail_sections[0]),
        clients: Some(detail_sections[1]),
        question,
        answer,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn layout_all_rects_nonzero_with_detail() {
        let layout = build_layout(test_area(), true);
        let rects = [
            ("status_bar", layout.status_bar),
            ("directory", layout.directory),
            ("deals", layout.deals.unwrap()),
            ("clients", layout.clients.unwrap()),
            ("question", layout.question),
            ("answer", layout.answer),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_without_detail_has_no_detail_rects() {
        let layout = build_layout(test_area(), false);
        assert!(layout.deals.is_none());
        assert!(layout.clients.is_none());
    }

    #[test]
    fn layout_without_detail_gives_directory_full_width() {
        let area = test_area();
        let layout = build_layout(area, false);
        assert_eq!(
            layout.directory.width, area.width,
            "Directory should span the full width without a selection"
        );
    }

    #[test]
    fn layout_with_detail_narrows_directory() {
        let area = test_area();
        let full = build_layout(area, false);
        let split = build_layout(area, true);
        assert!(
            split.directory.width < full.directory.width,
            "Directory ({}) should shrink when the detail column is shown",
            split.directory.width
        );
    }

    #[test]
    fn layout_status_bar_height_is_one() {
        let layout = build_layout(test_area(), true);
        assert_eq!(
            layout.status_bar.height, 1,
            "Status bar should be exactly 1 row"
        );
    }

    #[test]
    fn layout_help_bar_height_is_one() {
        let layout = build_layout(test_area(), true);
        assert_eq!(layout.help_bar.height, 1, "Help bar should be exactly 1 row");
    }

    #[test]
    fn layout_question_height_is_three() {
        let layout = build_layout(test_area(), true);
        assert_eq!(
            layout.question.height, 3,
            "Question input should be exactly 3 rows"
        );
    }

    #[test]
    fn layout_answer_height_is_ten() {
        let layout = build_layout(test_area(), true);
        assert_eq!(
            layout.answer.height, 10,
            "Answer panel should be exactly 10 rows"
        );
    }

    #[test]
    fn layout_deals_above_clients() {
        let layout = build_layout(test_area(), true);
        let deals = layout.deals.unwrap();
        let clients = layout.clients.unwrap();
        assert!(deals.y < clients.y, "Deals should be above clients");
        assert_eq!(
            deals.width, clients.width,
            "Detail sections should have the same width"
        );
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area, true);
        let all_rects = [
            layout.status_bar,
            layout.directory,
            layout.deals.unwrap(),
            layout.clients.unwrap(),
            layout.question,
            layout.answer,
            layout.help_bar,
        ];
        for rect in &all_rects {
            assert!(
                rect.x + rect.width <= area.width,
                "Rect {:?} exceeds area width {}",
                rect,
                area.width
            );
            assert!(
                rect.y + rect.height <= area.height,
                "Rect {:?} exceeds area height {}",
                rect,
                area.height
            );
        }
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        // Minimum viable terminal size
        let area = Rect::new(0, 0, 40, 28);
        let layout = build_layout(area, true);
        let rects = [
            layout.status_bar,
            layout.directory,
            layout.deals.unwrap(),
            layout.clients.unwrap(),
            layout.question,
            layout.answer,
            layout.help_bar,
        ];
        for rect in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "Small terminal: rect {:?} has zero area",
                rect
            );
        }
    }
}
