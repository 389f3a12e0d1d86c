// Message types shared between the app task, the TUI task and the spawned
// network operations. Everything crossing a channel is owned data; errors
// are formatted to strings before they leave the task that produced them.

use chrono::{DateTime, Utc};

use crate::directory::Representative;

/// Result of a directory fetch, sent by the spawned load task.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryEvent {
    Loaded { reps: Vec<Representative>, generation: u64 },
    Failed { message: String, generation: u64 },
}

impl DirectoryEvent {
    pub fn generation(&self) -> u64 {
        match self {
            DirectoryEvent::Loaded { generation, .. } => *generation,
            DirectoryEvent::Failed { generation, .. } => *generation,
        }
    }
}

/// Result of a question submission, sent by the spawned ask task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskEvent {
    Answer { text: String, generation: u64 },
    Failed { message: String, generation: u64 },
}

impl AskEvent {
    pub fn generation(&self) -> u64 {
        match self {
            AskEvent::Answer { generation, .. } => *generation,
            AskEvent::Failed { generation, .. } => *generation,
        }
    }
}

/// Lifecycle of the current ask operation, shown in the answer panel title.
///
/// There is no error variant: a failed ask is logged and the panel reverts
/// to its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskStatus {
    Idle,
    Pending,
    Answered,
}

/// State pushed from the app task to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// A directory fetch is in flight; show the loading placeholder.
    DirectoryLoading,
    /// A fetch completed; replaces the whole directory.
    DirectoryLoaded {
        reps: Vec<Representative>,
        fetched_at: DateTime<Utc>,
    },
    /// A fetch failed; shown as an inline error banner.
    DirectoryFailed { message: String },
    /// A question went out; the answer panel shows it as pending.
    AskStarted,
    /// The AI answered; the text replaces the previous answer.
    AnswerReady { text: String },
    /// The ask failed. Carries no message: the failure is logged on the
    /// app side and the panel quietly returns to its previous state.
    AskFailed,
}

/// Commands flowing from the TUI task to the app task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    AskQuestion(String),
    RefreshDirectory,
    Quit,
}
