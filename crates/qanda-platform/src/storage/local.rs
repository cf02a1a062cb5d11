//! Browser localStorage backend.
//! Persistent across page reloads. Snapshots and config are JSON text, so
//! values are stored as UTF-8 strings under the page's origin.

use async_trait::async_trait;

use qanda_core::ports::StatePort;
use qanda_types::{BoardError, Result};

pub struct LocalStorage {
    store: web_sys::Storage,
}

impl LocalStorage {
    /// Open the window's localStorage area.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| BoardError::Storage("No window object".to_string()))?;
        let store = window
            .local_storage()
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| BoardError::Storage("localStorage not available".to_string()))?;
        Ok(Self { store })
    }
}

#[async_trait(?Send)]
impl StatePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .store
            .get_item(key)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text =
            std::str::from_utf8(value).map_err(|e| BoardError::Storage(e.to_string()))?;
        self.store
            .set_item(key, text)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store
            .remove_item(key)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let len = self
            .store
            .length()
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))?;
        let mut keys = Vec::new();
        for i in 0..len {
            let key = self
                .store
                .key(i)
                .map_err(|e| BoardError::Storage(format!("{:?}", e)))?;
            if let Some(key) = key {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
