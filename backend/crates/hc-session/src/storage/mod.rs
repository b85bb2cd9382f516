//! Durable key/value storage for the session mirror.
//!
//! Modelled on browser local storage: string values under string keys,
//! read once at startup and rewritten on every change.

pub mod file_storage;
pub mod memory_storage;

use crate::Result as SessionResult;

pub trait SessionStorage: Send + Sync {
    /// Returns `None` when nothing is stored under `key`.
    fn load(&self, key: &str) -> SessionResult<Option<String>>;

    fn save(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> SessionResult<()>;

    /// Moves an unreadable value out of the way so the next load starts clean.
    fn quarantine(&self, key: &str) -> SessionResult<()> {
        self.remove(key)
    }
}
