//! WASM-target tests for qanda-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use qanda_types::config::*;
use qanda_types::error::*;
use qanda_types::event::*;
use qanda_types::message::*;
use qanda_types::thread::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_comment() {
    let msg = Message::comment("demo", "Hi there");
    assert_eq!(msg.session, "demo");
    assert_eq!(msg.thread, ThreadId::Main);
    assert_eq!(msg.author, DEFAULT_AUTHOR);
    assert!(msg.is_top_level());
}

#[wasm_bindgen_test]
fn message_reply() {
    let parent = Message::comment("demo", "question");
    let msg = Message::reply("demo", parent.id.clone(), "answer");
    assert_eq!(msg.thread, ThreadId::Reply(parent.id.clone()));
    assert!(!msg.is_top_level());
}

#[wasm_bindgen_test]
fn message_system() {
    let msg = Message::system("demo", "Hello! Welcome everyone.");
    assert_eq!(msg.author, SYSTEM_AUTHOR);
}

#[wasm_bindgen_test]
fn message_ids_are_unique() {
    let a = Message::comment("demo", "one");
    let b = Message::comment("demo", "two");
    assert_ne!(a.id, b.id);
}

#[wasm_bindgen_test]
fn message_quoted() {
    let msg = Message::comment("demo", "first\nsecond");
    assert_eq!(msg.quoted(), "> first\n> second");
}

#[wasm_bindgen_test]
fn message_serialization_roundtrip() {
    let msg = Message::comment("demo", "round trip");
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, msg);
}

// ─── ThreadId Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn thread_id_string_form() {
    assert_eq!(ThreadId::Main.to_string(), "main");
    assert_eq!(ThreadId::from("main"), ThreadId::Main);
    assert_eq!(ThreadId::from("xyz"), ThreadId::Reply("xyz".to_string()));
}

#[wasm_bindgen_test]
fn thread_key_composition() {
    assert_eq!(thread_key("demo", &ThreadId::Main), "demo:main");
}

// ─── Event Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn board_event_serialization() {
    let event = BoardEvent::CommentPosted {
        session: "demo".to_string(),
        id: "m1".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("CommentPosted"));
}

// ─── Config Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn default_config() {
    let config = BoardConfig::default();
    assert_eq!(config.session_key, "demo");
    assert_eq!(config.storage.backend, StorageBackendType::Auto);
}

// ─── Error Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn error_display() {
    let err = BoardError::UnknownParent("m404".to_string());
    assert_eq!(err.to_string(), "Unknown parent message: m404");
}
