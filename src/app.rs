// Application state and orchestration logic.
//
// The central event loop that coordinates directory fetch results, AI
// answer events, and user commands from the TUI. Maintains the canonical
// application state and pushes UI updates to the TUI render loop.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{AssistantClient, DirectoryClient};
use crate::config::Config;
use crate::directory::Representative;
use crate::protocol::{AskEvent, AskStatus, DirectoryEvent, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Load lifecycle of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in flight (set at startup and on refresh).
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed; the message is shown as an error banner.
    Failed(String),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The canonical application state, owned by the app task.
///
/// All mutation goes through the transition methods below; the TUI holds a
/// separate mirror fed by `UiUpdate`s.
pub struct AppState {
    pub config: Config,
    pub representatives: Vec<Representative>,
    pub load_state: LoadState,
    /// When the current directory arrived. `None` until the first load.
    pub fetched_at: Option<DateTime<Utc>>,
    /// The most recent answer text. Survives failed asks untouched.
    pub answer_text: String,
    pub ask_status: AskStatus,
    pub current_fetch_task: Option<tokio::task::JoinHandle<()>>,
    pub current_ask_task: Option<tokio::task::JoinHandle<()>>,
    /// Monotonically increasing counter identifying the current fetch task.
    /// Incremented each time a new task is spawned; events from stale
    /// generations are discarded in `handle_directory_event`.
    ///
    /// Overflow is not a practical concern: at one increment per second a
    /// u64 takes hundreds of billions of years to wrap.
    pub fetch_generation: u64,
    /// Same scheme for ask tasks, discarded in `handle_ask_event`.
    pub ask_generation: u64,
    /// Clients are shared with spawned tasks.
    pub directory_client: Arc<DirectoryClient>,
    pub assistant_client: Arc<AssistantClient>,
    /// Senders for network events; spawned tasks use clones of these to
    /// report back to the main event loop.
    pub directory_tx: mpsc::Sender<DirectoryEvent>,
    pub ask_tx: mpsc::Sender<AskEvent>,
}

impl AppState {
    pub fn new(
        config: Config,
        directory_client: DirectoryClient,
        assistant_client: AssistantClient,
        directory_tx: mpsc::Sender<DirectoryEvent>,
        ask_tx: mpsc::Sender<AskEvent>,
    ) -> Self {
        AppState {
            config,
            representatives: Vec::new(),
            load_state: LoadState::Loading,
            fetched_at: None,
            answer_text: String::new(),
            ask_status: AskStatus::Idle,
            current_fetch_task: None,
            current_ask_task: None,
            fetch_generation: 0,
            ask_generation: 0,
            directory_client: Arc::new(directory_client),
            assistant_client: Arc::new(assistant_client),
            directory_tx,
            ask_tx,
        }
    }

    // -- transition functions ------------------------------------------------

    /// A fetch succeeded: replace the directory and stamp the fetch time.
    pub fn set_representatives(&mut self, reps: Vec<Representative>) {
        self.representatives = reps;
        self.load_state = LoadState::Loaded;
        self.fetched_at = Some(Utc::now());
    }

    /// A fetch failed: clear the loading flag and keep the message for the
    /// error banner. The previous directory contents are kept.
    pub fn set_load_error(&mut self, message: String) {
        self.load_state = LoadState::Failed(message);
    }

    /// An ask succeeded: the new answer replaces the previous one.
    pub fn set_answer(&mut self, text: String) {
        self.answer_text = text;
        self.ask_status = AskStatus::Answered;
    }

    /// An ask failed. The answer text is left at its previous value and the
    /// status reverts so the panel no longer claims to be pending. No error
    /// is surfaced for this path; the log line is the only trace.
    pub fn ask_failed(&mut self) {
        self.ask_status = if self.answer_text.is_empty() {
            AskStatus::Idle
        } else {
            AskStatus::Answered
        };
    }

    // -- task management -----------------------------------------------------

    /// Cancel the in-flight fetch task if one is running.
    pub fn cancel_fetch_task(&mut self) {
        if let Some(handle) = self.current_fetch_task.take() {
            handle.abort();
            info!("Cancelled previous fetch task");
        }
    }

    /// Cancel the in-flight ask task if one is running.
    pub fn cancel_ask_task(&mut self) {
        if let Some(handle) = self.current_ask_task.take() {
            handle.abort();
            info!("Cancelled previous ask task");
        }
    }

    /// Start a directory fetch.
    ///
    /// Cancels any in-flight fetch first and bumps the generation counter
    /// so a cancelled task's late events are discarded.
    pub fn trigger_fetch(&mut self) {
        self.cancel_fetch_task();
        self.load_state = LoadState::Loading;

        let client = Arc::clone(&self.directory_client);
        let tx = self.directory_tx.clone();

        self.fetch_generation += 1;
        let generation = self.fetch_generation;

        let handle = tokio::spawn(async move {
            match client.fetch().await {
                Ok(reps) => {
                    let _ = tx.send(DirectoryEvent::Loaded { reps, generation }).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(DirectoryEvent::Failed {
                            message: e.to_string(),
                            generation,
                        })
                        .await;
                }
            }
        });

        self.current_fetch_task = Some(handle);
        info!("Triggered directory fetch (gen: {})", generation);
    }

    /// Submit a question to the AI endpoint.
    ///
    /// A new submission supersedes an in-flight one: the previous task is
    /// aborted and its generation retired, so only the newest answer can
    /// land.
    pub fn trigger_ask(&mut self, question: String) {
        self.cancel_ask_task();
        self.ask_status = AskStatus::Pending;

        let client = Arc::clone(&self.assistant_client);
        let tx = self.ask_tx.clone();

        self.ask_generation += 1;
        let generation = self.ask_generation;

        let handle = tokio::spawn(async move {
            match client.ask(&question).await {
                Ok(text) => {
                    let _ = tx.send(AskEvent::Answer { text, generation }).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AskEvent::Failed {
                            message: e.to_string(),
                            generation,
                        })
                        .await;
                }
            }
        });

        self.current_ask_task = Some(handle);
        info!("Triggered ask (gen: {})", generation);
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the application event loop until a quit command arrives.
///
/// Fires the startup directory fetch, then listens on three channels with
/// `tokio::select!`:
/// 1. Directory fetch events from spawned load tasks
/// 2. Ask events from spawned question tasks
/// 3. User commands from the TUI
///
/// Pushes UI updates through `ui_tx` for the TUI render loop.
pub async fn run(
    mut directory_rx: mpsc::Receiver<DirectoryEvent>,
    mut ask_rx: mpsc::Receiver<AskEvent>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    // The initial load runs once at startup; afterwards only an explicit
    // refresh command fetches again.
    state.trigger_fetch();
    let _ = ui_tx.send(UiUpdate::DirectoryLoading).await;

    // Track whether the event channels are still open. When one closes we
    // stop polling it so tokio::select! never spins on a closed channel.
    let mut directory_open = true;
    let mut ask_open = true;

    loop {
        tokio::select! {
            // --- Directory fetch events ---
            event = directory_rx.recv(), if directory_open => {
                match event {
                    Some(event) => {
                        handle_directory_event(&mut state, event, &ui_tx).await;
                    }
                    None => {
                        info!("Directory channel closed");
                        directory_open = false;
                    }
                }
            }

            // --- Ask events ---
            event = ask_rx.recv(), if ask_open => {
                match event {
                    Some(event) => {
                        handle_ask_event(&mut state, event, &ui_tx).await;
                    }
                    None => {
                        info!("Ask channel closed");
                        ask_open = false;
                    }
                }
            }

            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }
        }
    }

    // Cleanup
    state.cancel_fetch_task();
    state.cancel_ask_task();
    info!("Application event loop exiting");
    Ok(())
}

/// Fold a directory event into state and notify the TUI.
async fn handle_directory_event(
    state: &mut AppState,
    event: DirectoryEvent,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    if event.generation() != state.fetch_generation {
        debug!(
            "Discarding stale directory event (event gen: {}, current gen: {})",
            event.generation(),
            state.fetch_generation
        );
        return;
    }

    match event {
        DirectoryEvent::Loaded { reps, .. } => {
            info!("Directory loaded: {} representatives", reps.len());
            state.set_representatives(reps);
            let fetched_at = state.fetched_at.unwrap_or_else(Utc::now);
            let _ = ui_tx
                .send(UiUpdate::DirectoryLoaded {
                    reps: state.representatives.clone(),
                    fetched_at,
                })
                .await;
        }
        DirectoryEvent::Failed { message, .. } => {
            warn!("Directory load failed: {}", message);
            state.set_load_error(message.clone());
            let _ = ui_tx.send(UiUpdate::DirectoryFailed { message }).await;
        }
    }
}

/// Fold an ask event into state and notify the TUI.
///
/// A failed ask is deliberately quiet: it is logged here, the answer text
/// keeps its previous value, and the TUI only learns that the pending state
/// ended.
async fn handle_ask_event(state: &mut AppState, event: AskEvent, ui_tx: &mpsc::Sender<UiUpdate>) {
    if event.generation() != state.ask_generation {
        debug!(
            "Discarding stale ask event (event gen: {}, current gen: {})",
            event.generation(),
            state.ask_generation
        );
        return;
    }

    match event {
        AskEvent::Answer { text, .. } => {
            info!("Answer received ({} chars)", text.len());
            state.set_answer(text.clone());
            let _ = ui_tx.send(UiUpdate::AnswerReady { text }).await;
        }
        AskEvent::Failed { message, .. } => {
            warn!("Question submission failed: {}", message);
            state.ask_failed();
            let _ = ui_tx.send(UiUpdate::AskFailed).await;
        }
    }
}

/// Handle a user command from the TUI.
async fn handle_user_command(state: &mut AppState, cmd: UserCommand, ui_tx: &mpsc::Sender<UiUpdate>) {
    match cmd {
        UserCommand::AskQuestion(question) => {
            info!("Question submitted ({} chars)", question.len());
            state.trigger_ask(question);
            let _ = ui_tx.send(UiUpdate::AskStarted).await;
        }
        UserCommand::RefreshDirectory => {
            info!("Directory refresh requested");
            state.trigger_fetch();
            let _ = ui_tx.send(UiUpdate::DirectoryLoading).await;
        }
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
