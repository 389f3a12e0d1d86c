// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (e.g. moving the
// directory cursor, scrolling, editing the question input).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{FocusPanel, ViewState};
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator (e.g. AskQuestion, RefreshDirectory, Quit). Returns
/// `None` when the key press was handled locally by mutating `ViewState`
/// (e.g. cursor movement, scrolling, focus cycling).
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    // Quit confirmation mode: only y/q confirm, n/Esc cancel, everything else blocked
    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    // Input mode: capture printable characters into the question input
    if view_state.input_mode {
        return handle_input_mode(key_event, view_state);
    }

    // Normal mode key dispatch
    match key_event.code {
        // Focus cycling
        KeyCode::Tab => {
            view_state.focus = next_focus(view_state);
            None
        }

        // Cursor movement / scrolling
        KeyCode::Up | KeyCode::Char('k') => {
            move_up(view_state, 1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_down(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            move_up(view_state, page_size());
            None
        }
        KeyCode::PageDown => {
            move_down(view_state, page_size());
            None
        }

        // Select the representative under the cursor
        KeyCode::Enter => {
            select_under_cursor(view_state);
            None
        }

        // Escape: clear the selection and fold the detail column away
        KeyCode::Esc => {
            clear_selection(view_state);
            None
        }

        // Question input entry
        KeyCode::Char('a') | KeyCode::Char('/') => {
            view_state.input_mode = true;
            None
        }

        // Directory refresh
        KeyCode::Char('r') => Some(UserCommand::RefreshDirectory),

        // Quit: enter confirmation mode instead of quitting immediately
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Handle key events while in quit confirmation mode.
///
/// In quit confirmation mode:
/// - `y` or `q` confirms quit (sends UserCommand::Quit)
/// - `n` or `Esc` cancels (returns to normal mode)
/// - All other keys are blocked (no-op)
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None, // Block all other input
    }
}

/// Handle key events while in question input mode.
///
/// In input mode:
/// - Printable characters are appended to the question input
/// - Backspace removes the last character
/// - Enter submits the question (text stays in the box) and exits
/// - Esc exits without submitting, keeping the draft
fn handle_input_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.input_mode = false;
            None
        }
        KeyCode::Enter => {
            view_state.input_mode = false;
            // The question is submitted as typed, empty included. The
            // input keeps its text so a follow-up can edit it.
            Some(UserCommand::AskQuestion(view_state.question_input.clone()))
        }
        KeyCode::Backspace => {
            view_state.question_input.pop();
            None
        }
        KeyCode::Char(c) => {
            view_state.question_input.push(c);
            None
        }
        _ => None,
    }
}

/// The focus cycle: directory, then the detail panels, then the answer.
///
/// The detail panels are skipped while no representative is selected,
/// since they are not on screen.
fn next_focus(view_state: &ViewState) -> FocusPanel {
    let detail_open = view_state.selected.is_some();
    match view_state.focus {
        FocusPanel::Directory if detail_open => FocusPanel::Deals,
        FocusPanel::Directory => FocusPanel::Answer,
        FocusPanel::Deals => FocusPanel::Clients,
        FocusPanel::Clients => FocusPanel::Answer,
        FocusPanel::Answer => FocusPanel::Directory,
    }
}

/// Widget key for scroll state based on the focused panel.
fn focused_widget_key(view_state: &ViewState) -> &'static str {
    match view_state.focus {
        FocusPanel::Directory => "directory",
        FocusPanel::Deals => "deals",
        FocusPanel::Clients => "clients",
        FocusPanel::Answer => "answer",
    }
}

/// Up/k: move the directory cursor when the directory has focus,
/// otherwise scroll the focused panel.
fn move_up(view_state: &mut ViewState, lines: usize) {
    if view_state.focus == FocusPanel::Directory {
        view_state.cursor = view_state.cursor.saturating_sub(lines);
    } else {
        let key = focused_widget_key(view_state);
        let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
        *offset = offset.saturating_sub(lines);
    }
}

/// Down/j counterpart of `move_up`.
fn move_down(view_state: &mut ViewState, lines: usize) {
    if view_state.focus == FocusPanel::Directory {
        let last = view_state.representatives.len().saturating_sub(1);
        view_state.cursor = view_state.cursor.saturating_add(lines).min(last);
    } else {
        let key = focused_widget_key(view_state);
        let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
        *offset = offset.saturating_add(lines);
    }
}

/// Enter on the directory: select the representative under the cursor and
/// open the detail column. Selecting starts the detail panels at the top.
fn select_under_cursor(view_state: &mut ViewState) {
    if view_state.focus != FocusPanel::Directory {
        return;
    }
    if let Some(rep) = view_state.representatives.get(view_state.cursor) {
        view_state.selected = Some(rep.id);
        view_state.scroll_offset.insert("deals".to_string(), 0);
        view_state.scroll_offset.insert("clients".to_string(), 0);
    }
}

/// Esc: drop the selection. Focus returns to the directory so it never
/// points at a panel that just left the screen.
fn clear_selection(view_state: &mut ViewState) {
    view_state.selected = None;
    if matches!(view_state.focus, FocusPanel::Deals | FocusPanel::Clients) {
        view_state.focus = FocusPanel::Directory;
    }
}

/// Page size for PageUp/PageDown movement.
fn page_size() -> usize {
    20
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
