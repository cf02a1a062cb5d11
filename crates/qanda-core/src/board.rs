//! The message store — session-scoped threads of immutable messages.
//!
//! Threads are ordered sequences keyed by `"{session}:{thread}"`. A
//! session's main thread holds top-level comments newest-first (front
//! insertion); each top-level message keys its own reply thread,
//! oldest-first (back insertion). Messages are never edited or removed.

use std::collections::{HashMap, VecDeque};

use qanda_types::config::BoardConfig;
use qanda_types::event::BoardEvent;
use qanda_types::message::Message;
use qanda_types::thread::{thread_key, ThreadId, ThreadSummary};
use qanda_types::{BoardError, Result};

use crate::event_bus::EventBus;
use crate::snapshot::BoardSnapshot;

/// In-memory threaded message store.
///
/// Mutations emit [`BoardEvent`]s on the shared bus; the UI drains them
/// each frame and requests a repaint, so a submission is visible on the
/// very next render pass.
pub struct MessageBoard {
    config: BoardConfig,
    threads: HashMap<String, VecDeque<Message>>,
    event_bus: EventBus,
}

impl MessageBoard {
    pub fn new(config: BoardConfig, event_bus: EventBus) -> Self {
        Self {
            config,
            threads: HashMap::new(),
            event_bus,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BoardConfig {
        &mut self.config
    }

    /// Ensure the session's main thread exists, seeded with exactly one
    /// system welcome post. Idempotent: repeated calls never re-seed.
    pub fn ensure_session(&mut self, session: &str) {
        let key = thread_key(session, &ThreadId::Main);
        if self.threads.contains_key(&key) {
            return;
        }
        log::info!("Seeding session '{}'", session);
        let welcome = Message::system(session, &self.config.welcome_text);
        self.threads.insert(key, VecDeque::from([welcome]));
        self.event_bus.emit(BoardEvent::SessionSeeded {
            session: session.to_string(),
        });
    }

    /// Ensure a reply thread exists for `parent`, seeded empty. Called on
    /// first expansion of the thread in the UI; idempotent.
    pub fn open_thread(&mut self, session: &str, parent: &str) {
        let key = thread_key(session, &ThreadId::Reply(parent.to_string()));
        if self.threads.contains_key(&key) {
            return;
        }
        self.threads.insert(key, VecDeque::new());
        self.event_bus.emit(BoardEvent::ThreadOpened {
            session: session.to_string(),
            parent: parent.to_string(),
        });
    }

    /// Post a top-level comment at the head of the session's main thread.
    ///
    /// Empty (or whitespace-only) text is "nothing to do", not an error:
    /// no state change, returns `None`. Otherwise returns the new id.
    pub fn post_comment(
        &mut self,
        session: &str,
        author: Option<&str>,
        text: &str,
    ) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.ensure_session(session);

        let mut msg = Message::comment(session, text);
        if let Some(name) = author {
            msg = msg.with_author(name);
        }
        let id = msg.id.clone();
        let key = msg.thread_key();
        self.threads.entry(key).or_default().push_front(msg);
        self.event_bus.emit(BoardEvent::CommentPosted {
            session: session.to_string(),
            id: id.clone(),
        });
        Some(id)
    }

    /// Append a reply to the end of `parent`'s thread.
    ///
    /// Empty text: `Ok(None)`, no state change. `parent` must be the id of
    /// an existing top-level message of the session; anything else is
    /// [`BoardError::UnknownParent`].
    pub fn post_reply(
        &mut self,
        session: &str,
        parent: &str,
        author: Option<&str>,
        text: &str,
    ) -> Result<Option<String>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        if !self.is_top_level_message(session, parent) {
            return Err(BoardError::UnknownParent(parent.to_string()));
        }

        let mut msg = Message::reply(session, parent, text);
        if let Some(name) = author {
            msg = msg.with_author(name);
        }
        let id = msg.id.clone();
        let key = msg.thread_key();
        self.threads.entry(key).or_default().push_back(msg);
        self.event_bus.emit(BoardEvent::ReplyPosted {
            session: session.to_string(),
            parent: parent.to_string(),
            id: id.clone(),
        });
        Ok(Some(id))
    }

    /// Whether `id` names a top-level message of `session`.
    pub fn is_top_level_message(&self, session: &str, id: &str) -> bool {
        self.main_messages(session).any(|m| m.id == id)
    }

    /// Whether `parent`'s reply thread has been opened yet.
    pub fn thread_exists(&self, session: &str, parent: &str) -> bool {
        self.threads
            .contains_key(&thread_key(session, &ThreadId::Reply(parent.to_string())))
    }

    /// Top-level comments of a session, newest first.
    pub fn main_messages<'a>(&'a self, session: &str) -> impl Iterator<Item = &'a Message> + 'a {
        self.thread_messages(&thread_key(session, &ThreadId::Main))
    }

    /// Replies to a top-level message, oldest first.
    pub fn replies<'a>(
        &'a self,
        session: &str,
        parent: &str,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.thread_messages(&thread_key(session, &ThreadId::Reply(parent.to_string())))
    }

    fn thread_messages<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Message> + 'a {
        self.threads.get(key).into_iter().flatten()
    }

    /// Badge data for a parent's reply thread.
    pub fn thread_summary(&self, session: &str, parent: &str) -> ThreadSummary {
        let mut reply_count = 0;
        let mut last_reply_at = None;
        for msg in self.replies(session, parent) {
            reply_count += 1;
            last_reply_at = Some(msg.created_at);
        }
        ThreadSummary {
            parent: parent.to_string(),
            reply_count,
            last_reply_at,
        }
    }

    /// Total messages across all threads of a session.
    pub fn message_count(&self, session: &str) -> usize {
        let prefix = format!("{}:", session);
        self.threads
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, messages)| messages.len())
            .sum()
    }

    /// Capture all threads of a session for persistence.
    pub fn snapshot(&self, session: &str) -> BoardSnapshot {
        let prefix = format!("{}:", session);
        let threads = self
            .threads
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, messages)| (key.clone(), messages.iter().cloned().collect()))
            .collect();
        BoardSnapshot {
            session: session.to_string(),
            threads,
        }
    }

    /// Restore a previously captured session, replacing its threads.
    pub fn restore(&mut self, snapshot: BoardSnapshot) {
        let prefix = format!("{}:", snapshot.session);
        self.threads.retain(|key, _| !key.starts_with(&prefix));
        for (key, messages) in snapshot.threads {
            self.threads.insert(key, messages.into());
        }
    }
}
