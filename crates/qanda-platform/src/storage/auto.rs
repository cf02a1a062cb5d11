//! Pick a storage backend for the board.
//!
//! On the web, prefer localStorage (survives page reloads) and fall back
//! to process memory. Native builds always use memory — state dies with
//! the process.

use std::rc::Rc;

use qanda_core::ports::StatePort;
use qanda_types::config::StorageBackendType;

use super::MemoryStorage;

/// Open the backend requested by config.
/// Returns a trait object so callers are backend-agnostic.
pub fn open_storage(backend: &StorageBackendType) -> Rc<dyn StatePort> {
    match backend {
        StorageBackendType::Memory => memory(),
        StorageBackendType::LocalStorage | StorageBackendType::Auto => local_or_memory(),
    }
}

fn memory() -> Rc<dyn StatePort> {
    log::info!("Storage backend: memory");
    Rc::new(MemoryStorage::new())
}

#[cfg(target_arch = "wasm32")]
fn local_or_memory() -> Rc<dyn StatePort> {
    match super::LocalStorage::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            memory()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn local_or_memory() -> Rc<dyn StatePort> {
    memory()
}
