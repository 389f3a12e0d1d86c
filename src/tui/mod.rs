// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors relevant parts of the application
// state. The app orchestrator pushes `UiUpdate` messages over an mpsc channel;
// the TUI applies them to `ViewState` and re-renders at a fixed tick rate.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::directory::{find_rep, Representative};
use crate::protocol::{AskStatus, UiUpdate, UserCommand};

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// FocusPanel
// ---------------------------------------------------------------------------

/// Which panel receives cursor/scroll keys. Cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Directory,
    Deals,
    Clients,
    Answer,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app orchestrator.
/// The `render_frame` function reads this struct to draw the dashboard.
pub struct ViewState {
    /// Current directory contents.
    pub representatives: Vec<Representative>,
    /// Whether a directory fetch is in flight. Starts true: the app fires
    /// the initial fetch on startup.
    pub loading: bool,
    /// Error banner text from the last failed fetch.
    pub load_error: Option<String>,
    /// When the current directory arrived.
    pub fetched_at: Option<DateTime<Utc>>,
    /// Id of the selected representative, if any. The detail column is
    /// only shown while this id resolves to a current representative.
    pub selected: Option<u32>,
    /// Directory cursor position (card index).
    pub cursor: usize,
    /// Panel receiving movement keys.
    pub focus: FocusPanel,
    /// Whether the question input captures keystrokes.
    pub input_mode: bool,
    /// Text in the question input box.
    pub question_input: String,
    /// The most recent answer from the assistant.
    pub answer_text: String,
    /// Lifecycle of the current ask.
    pub ask_status: AskStatus,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// Whether the quit confirmation dialog is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            representatives: Vec::new(),
            loading: true,
            load_error: None,
            fetched_at: None,
            selected: None,
            cursor: 0,
            focus: FocusPanel::Directory,
            input_mode: false,
            question_input: String::new(),
            answer_text: String::new(),
            ask_status: AskStatus::Idle,
            scroll_offset: HashMap::new(),
            confirm_quit: false,
        }
    }
}

impl ViewState {
    /// Resolve the selected id against the current directory.
    ///
    /// Returns `None` when nothing is selected or when the selected
    /// representative is no longer present, which also folds the detail
    /// column away.
    pub fn selected_rep(&self) -> Option<&Representative> {
        self.selected
            .and_then(|id| find_rep(&self.representatives, id))
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::DirectoryLoading => {
            state.loading = true;
            state.load_error = None;
        }
        UiUpdate::DirectoryLoaded { reps, fetched_at } => {
            // The selection and cursor may point at representatives that
            // no longer exist after a refresh.
            if let Some(id) = state.selected {
                if find_rep(&reps, id).is_none() {
                    state.selected = None;
                    if matches!(state.focus, FocusPanel::Deals | FocusPanel::Clients) {
                        state.focus = FocusPanel::Directory;
                    }
                }
            }
            state.cursor = state.cursor.min(reps.len().saturating_sub(1));
            state.representatives = reps;
            state.loading = false;
            state.load_error = None;
            state.fetched_at = Some(fetched_at);
        }
        UiUpdate::DirectoryFailed { message } => {
            state.loading = false;
            state.load_error = Some(message);
        }
        UiUpdate::AskStarted => {
            state.ask_status = AskStatus::Pending;
        }
        UiUpdate::AnswerReady { text } => {
            state.answer_text = text;
            state.ask_status = AskStatus::Answered;
            // A new answer reads from the top
            state.scroll_offset.insert("answer".to_string(), 0);
        }
        UiUpdate::AskFailed => {
            // The failure stays out of the view: the previous answer (if
            // any) remains, only the pending indicator is withdrawn.
            state.ask_status = if state.answer_text.is_empty() {
                AskStatus::Idle
            } else {
                AskStatus::Answered
            };
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let show_detail = state.selected_rep().is_some();
    let layout = build_layout(frame.area(), show_detail);

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::directory::render(
        frame,
        layout.directory,
        state,
        state.focus == FocusPanel::Directory,
    );
    if let Some(deals_area) = layout.deals {
        widgets::deals::render(frame, deals_area, state, state.focus == FocusPanel::Deals);
    }
    if let Some(clients_area) = layout.clients {
        widgets::clients::render(frame, clients_area, state, state.focus == FocusPanel::Clients);
    }
    widgets::question::render(frame, layout.question, state);
    widgets::answer::render(frame, layout.answer, state, state.focus == FocusPanel::Answer);
    render_help_bar(frame, &layout, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

/// Keyboard hint text for the current mode.
pub fn help_text(state: &ViewState) -> &'static str {
    if state.input_mode {
        " Enter:Send | Esc:Cancel | Backspace:Delete"
    } else if state.selected.is_some() {
        " q:Quit | a:Ask | Tab:Focus | j/k:Move | Enter:Select | Esc:Back | r:Refresh"
    } else {
        " q:Quit | a:Ask | j/k:Move | Enter:Select | r:Refresh"
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    tick_rate_ms: u64,
) -> anyhow::Result<()> {
    // 1. Initialize terminal
    let mut terminal = ratatui::init();

    // 2. Set panic hook to restore terminal on crash.
    //    We capture the original hook and chain ours before it.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 3. Create ViewState
    let mut view_state = ViewState::default();

    // 4. Create crossterm EventStream for async keyboard input
    let mut event_stream = EventStream::new();

    // 5. Create render interval
    let mut render_tick = tokio::time::interval(Duration::from_millis(tick_rate_ms));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // 6. Main loop
    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = matches!(cmd, UserCommand::Quit);
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws
                    }
                    Some(Err(_)) => {
                        // Input error, bail out
                        break;
                    }
                    None => {
                        // Stream ended
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    // 7. Restore terminal
    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
