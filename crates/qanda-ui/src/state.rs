//! UI-level state that drives rendering.
//! Holds in-progress form input plus a status line, updated each frame by
//! draining the EventBus. The messages themselves live in the board; the
//! UI never keeps its own copy.

use std::collections::HashMap;

use qanda_types::event::BoardEvent;

/// State visible to UI panels
pub struct UiState {
    /// Top-level comment form content
    pub composer_text: String,
    /// In-progress reply forms, keyed by parent message id
    pub drafts: HashMap<String, ReplyDraft>,
    /// Whether the session side panel is open
    pub show_session_panel: bool,
    /// Status line text
    pub status_text: String,
}

/// An in-progress reply form
#[derive(Clone, Default)]
pub struct ReplyDraft {
    pub text: String,
    /// "Send also in main thread" — captured but not acted on; the flag's
    /// semantics are undecided
    pub include_main: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            composer_text: String::new(),
            drafts: HashMap::new(),
            show_session_panel: false,
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the board and update the status line.
    pub fn process_events(&mut self, events: Vec<BoardEvent>) {
        for event in events {
            match event {
                BoardEvent::SessionSeeded { session } => {
                    self.status_text = format!("Session '{}' ready", session);
                }
                BoardEvent::ThreadOpened { .. } => {}
                BoardEvent::CommentPosted { .. } => {
                    self.status_text = "Comment posted".to_string();
                }
                BoardEvent::ReplyPosted { .. } => {
                    self.status_text = "Reply posted".to_string();
                }
            }
        }
    }

    /// The reply form state for a parent message.
    pub fn draft_mut(&mut self, parent: &str) -> &mut ReplyDraft {
        self.drafts.entry(parent.to_string()).or_default()
    }

    /// Drop a parent's reply form after a successful submission.
    pub fn clear_draft(&mut self, parent: &str) {
        self.drafts.remove(parent);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
