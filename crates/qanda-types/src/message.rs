use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::thread::{thread_key, ThreadId};

/// Placeholder author for posts made without a display name
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Author of store-seeded posts (the welcome message)
pub const SYSTEM_AUTHOR: &str = "SYSTEM";

/// Display format for message timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single message on the board — a top-level comment or a reply.
///
/// Immutable once created: the store only inserts messages, never edits
/// or removes them. The `id` doubles as the key of the message's own
/// reply thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Globally unique, assigned at creation
    pub id: String,
    /// The Q&A session this message belongs to
    pub session: String,
    /// `Main` for top-level comments, the parent's id for replies
    pub thread: ThreadId,
    pub author: String,
    pub text: String,
    /// Capture time
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(
        session: impl Into<String>,
        thread: ThreadId,
        text: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session: session.into(),
            thread,
            author: author.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// A top-level comment with the placeholder author.
    pub fn comment(session: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(session, ThreadId::Main, text, DEFAULT_AUTHOR)
    }

    /// A reply attached to the thread of the message with id `parent`.
    pub fn reply(
        session: impl Into<String>,
        parent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(session, ThreadId::Reply(parent.into()), text, DEFAULT_AUTHOR)
    }

    /// A system-authored post (the seeded welcome message).
    pub fn system(session: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(session, ThreadId::Main, text, SYSTEM_AUTHOR)
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn is_top_level(&self) -> bool {
        self.thread == ThreadId::Main
    }

    /// Store key of the thread this message lives in.
    pub fn thread_key(&self) -> String {
        thread_key(&self.session, &self.thread)
    }

    /// Store key of this message's own reply thread.
    pub fn reply_thread_key(&self) -> String {
        format!("{}:{}", self.session, self.id)
    }

    /// `created_at` rendered in the board's display format.
    pub fn timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Quote-formatted body: first line prefixed with `"> "`, every
    /// embedded line break continued with `"\n> "`.
    pub fn quoted(&self) -> String {
        format!("> {}", self.text.replace('\n', "\n> "))
    }
}
