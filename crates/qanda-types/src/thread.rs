use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// String form of the main thread in store keys
pub const MAIN_THREAD: &str = "main";

/// Identifies the thread a message belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThreadId {
    /// The session's top-level thread
    Main,
    /// The reply thread of the top-level message with this id
    Reply(String),
}

impl ThreadId {
    pub fn as_str(&self) -> &str {
        match self {
            ThreadId::Main => MAIN_THREAD,
            ThreadId::Reply(parent) => parent,
        }
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ThreadId {
    fn from(s: &str) -> Self {
        if s == MAIN_THREAD {
            ThreadId::Main
        } else {
            ThreadId::Reply(s.to_string())
        }
    }
}

// Stored as the bare string — "main" or the parent id — so snapshots keep
// the session:thread key layout.
impl Serialize for ThreadId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThreadId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ThreadId::from(s.as_str()))
    }
}

/// Compose the store key for one thread of a session.
pub fn thread_key(session: &str, thread: &ThreadId) -> String {
    format!("{}:{}", session, thread)
}

/// Badge data for a reply thread shown collapsed in the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub parent: String,
    pub reply_count: usize,
    pub last_reply_at: Option<DateTime<Utc>>,
}
