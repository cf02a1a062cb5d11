use serde::{Deserialize, Serialize};

/// Top-level board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Session key selecting which main thread this viewer sees
    pub session_key: String,
    /// Display name stamped on this viewer's posts; empty means unset
    pub author: String,
    /// Text of the system post seeded into a fresh session
    pub welcome_text: String,
    pub storage: StorageConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            session_key: "demo".to_string(),
            author: String::new(),
            welcome_text: "Hello! Welcome everyone.".to_string(),
            storage: StorageConfig::default(),
        }
    }
}

impl BoardConfig {
    /// The author to stamp on new posts, if the viewer has set one.
    pub fn posting_author(&self) -> Option<&str> {
        let name = self.author.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    Memory,
    LocalStorage,
}

impl StorageBackendType {
    pub fn all() -> &'static [StorageBackendType] {
        &[
            StorageBackendType::Auto,
            StorageBackendType::Memory,
            StorageBackendType::LocalStorage,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            StorageBackendType::Auto => "Auto",
            StorageBackendType::Memory => "Memory",
            StorageBackendType::LocalStorage => "Local Storage",
        }
    }
}
