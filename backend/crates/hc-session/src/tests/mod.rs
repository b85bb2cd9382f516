
use crate::{Result as SessionResult, SessionError, SessionStorage};

use std::io;
use std::path::PathBuf;

/// Storage whose writes always fail; reads see nothing.
pub(crate) struct FailingStorage;

impl SessionStorage for FailingStorage {
    fn load(&self, _key: &str) -> SessionResult<Option<String>> {
        Ok(None)
    }

    fn save(&self, key: &str, _value: &str) -> SessionResult<()> {
        Err(SessionError::file_write(
            PathBuf::from(key),
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        Err(SessionError::file_remove(
            PathBuf::from(key),
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}
