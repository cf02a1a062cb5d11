use serde::{Deserialize, Serialize};

/// Events emitted by the message board on mutation.
/// The UI drains these each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A session's main thread was created and seeded with the welcome post
    SessionSeeded { session: String },

    /// A reply thread was created on first expansion
    ThreadOpened { session: String, parent: String },

    /// A top-level comment was inserted at the head of the main thread
    CommentPosted { session: String, id: String },

    /// A reply was appended to the end of a parent's thread
    ReplyPosted { session: String, parent: String, id: String },
}
