// TUI widget modules for each dashboard panel.

pub mod answer;
pub mod clients;
pub mod deals;
pub mod directory;
pub mod question;
pub mod quit_confirm;
pub mod status_bar;

use ratatui::style::{Color, Style};

/// Border style for a panel, with the focus highlight taking precedence
/// over the panel's own border color.
pub fn focused_border_style(focused: bool, base: Style) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        base
    }
}
