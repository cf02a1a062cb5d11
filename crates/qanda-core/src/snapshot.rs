//! Session snapshots — the persisted state layout.
//!
//! - `qanda:config`          → [`BoardConfig`] JSON
//! - `qanda:board:{session}` → [`BoardSnapshot`] JSON
//!
//! Persistence is best-effort: callers fire-and-forget saves and fall back
//! to a freshly seeded board when nothing is stored. With the in-memory
//! backend nothing survives a restart.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use qanda_types::config::BoardConfig;
use qanda_types::message::Message;
use qanda_types::Result;

use crate::ports::StatePort;

pub const CONFIG_KEY: &str = "qanda:config";
const BOARD_KEY_PREFIX: &str = "qanda:board:";

/// All threads of one session, as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub session: String,
    /// Thread key → ordered messages (front of the sequence first)
    pub threads: HashMap<String, Vec<Message>>,
}

/// Storage key of a session's snapshot.
pub fn board_key(session: &str) -> String {
    format!("{}{}", BOARD_KEY_PREFIX, session)
}

pub async fn load_snapshot(
    storage: &dyn StatePort,
    session: &str,
) -> Result<Option<BoardSnapshot>> {
    match storage.get(&board_key(session)).await? {
        Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
        None => Ok(None),
    }
}

pub async fn save_snapshot(storage: &dyn StatePort, snapshot: &BoardSnapshot) -> Result<()> {
    let data = serde_json::to_vec(snapshot)?;
    storage.set(&board_key(&snapshot.session), &data).await
}

pub async fn load_config(storage: &dyn StatePort) -> Result<Option<BoardConfig>> {
    match storage.get(CONFIG_KEY).await? {
        Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
        None => Ok(None),
    }
}

pub async fn save_config(storage: &dyn StatePort, config: &BoardConfig) -> Result<()> {
    let data = serde_json::to_vec(config)?;
    storage.set(CONFIG_KEY, &data).await
}
