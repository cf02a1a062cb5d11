#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::thread::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_comment() {
        let msg = Message::comment("demo", "Hi there");
        assert_eq!(msg.session, "demo");
        assert_eq!(msg.thread, ThreadId::Main);
        assert_eq!(msg.author, DEFAULT_AUTHOR);
        assert_eq!(msg.text, "Hi there");
        assert!(msg.is_top_level());
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_message_reply() {
        let parent = Message::comment("demo", "question");
        let msg = Message::reply("demo", parent.id.clone(), "answer");
        assert_eq!(msg.thread, ThreadId::Reply(parent.id.clone()));
        assert!(!msg.is_top_level());
        assert_eq!(msg.thread_key(), format!("demo:{}", parent.id));
    }

    #[test]
    fn test_message_system() {
        let msg = Message::system("demo", "Hello! Welcome everyone.");
        assert_eq!(msg.author, SYSTEM_AUTHOR);
        assert!(msg.is_top_level());
    }

    #[test]
    fn test_message_with_author() {
        let msg = Message::comment("demo", "hi").with_author("alice");
        assert_eq!(msg.author, "alice");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::comment("demo", "one");
        let b = Message::comment("demo", "two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_thread_keys() {
        let msg = Message::comment("demo", "hi");
        assert_eq!(msg.thread_key(), "demo:main");
        assert_eq!(msg.reply_thread_key(), format!("demo:{}", msg.id));
    }

    #[test]
    fn test_message_timestamp_format() {
        let msg = Message::comment("demo", "hi");
        let ts = msg.timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_message_quoted_single_line() {
        let msg = Message::comment("demo", "hello world");
        assert_eq!(msg.quoted(), "> hello world");
    }

    #[test]
    fn test_message_quoted_multi_line() {
        let msg = Message::comment("demo", "first\nsecond\nthird");
        assert_eq!(msg.quoted(), "> first\n> second\n> third");
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::comment("demo", "round trip").with_author("bob");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""thread":"main""#));

        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }

    // ─── ThreadId Tests ──────────────────────────────────────

    #[test]
    fn test_thread_id_display() {
        assert_eq!(ThreadId::Main.to_string(), "main");
        assert_eq!(ThreadId::Reply("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_thread_id_from_str() {
        assert_eq!(ThreadId::from("main"), ThreadId::Main);
        assert_eq!(ThreadId::from("xyz"), ThreadId::Reply("xyz".to_string()));
    }

    #[test]
    fn test_thread_id_serde_as_string() {
        let json = serde_json::to_string(&ThreadId::Main).unwrap();
        assert_eq!(json, r#""main""#);

        let id: ThreadId = serde_json::from_str(r#""parent-1""#).unwrap();
        assert_eq!(id, ThreadId::Reply("parent-1".to_string()));
    }

    #[test]
    fn test_thread_key_composition() {
        assert_eq!(thread_key("demo", &ThreadId::Main), "demo:main");
        assert_eq!(
            thread_key("demo", &ThreadId::Reply("p1".to_string())),
            "demo:p1"
        );
    }

    #[test]
    fn test_thread_summary_serialization() {
        let summary = ThreadSummary {
            parent: "p1".to_string(),
            reply_count: 3,
            last_reply_at: None,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: ThreadSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.parent, "p1");
        assert_eq!(deserialized.reply_count, 3);
        assert!(deserialized.last_reply_at.is_none());
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_board_event_serialization() {
        let event = BoardEvent::CommentPosted {
            session: "demo".to_string(),
            id: "m1".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("CommentPosted"));
        assert!(json.contains("m1"));
    }

    #[test]
    fn test_board_event_reply_posted() {
        let event = BoardEvent::ReplyPosted {
            session: "demo".to_string(),
            parent: "p1".to_string(),
            id: "r1".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: BoardEvent = serde_json::from_str(&json).unwrap();
        if let BoardEvent::ReplyPosted { parent, id, .. } = deserialized {
            assert_eq!(parent, "p1");
            assert_eq!(id, "r1");
        } else {
            panic!("Wrong variant");
        }
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.session_key, "demo");
        assert!(config.author.is_empty());
        assert_eq!(config.welcome_text, "Hello! Welcome everyone.");
        assert_eq!(config.storage.backend, StorageBackendType::Auto);
    }

    #[test]
    fn test_config_posting_author() {
        let mut config = BoardConfig::default();
        assert!(config.posting_author().is_none());

        config.author = "   ".to_string();
        assert!(config.posting_author().is_none());

        config.author = " alice ".to_string();
        assert_eq!(config.posting_author(), Some("alice"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = BoardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.session_key, "demo");
        assert_eq!(deserialized.storage.backend, StorageBackendType::Auto);
    }

    #[test]
    fn test_storage_backend_labels() {
        assert_eq!(StorageBackendType::Auto.label(), "Auto");
        assert_eq!(StorageBackendType::Memory.label(), "Memory");
        assert_eq!(StorageBackendType::LocalStorage.label(), "Local Storage");
    }

    #[test]
    fn test_storage_backend_all() {
        let all = StorageBackendType::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&StorageBackendType::Memory));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = BoardError::Storage("backend gone".to_string());
        assert_eq!(err.to_string(), "Storage error: backend gone");

        let err = BoardError::UnknownParent("m404".to_string());
        assert_eq!(err.to_string(), "Unknown parent message: m404");
    }

    #[test]
    fn test_error_from_serde() {
        let bad_json = "{{invalid}}";
        let serde_err = serde_json::from_str::<serde_json::Value>(bad_json).unwrap_err();
        let board_err: BoardError = serde_err.into();
        assert!(matches!(board_err, BoardError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = BoardError::Storage("lost".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
