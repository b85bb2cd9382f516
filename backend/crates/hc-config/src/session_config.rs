use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIR, DEFAULT_SESSION_KEY};

use serde::Deserialize;

/// Where the signed-in identity is mirrored between restarts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory relative to the config dir
    pub dir: String,
    /// Storage key; also the file stem
    pub key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SESSION_DIR),
            key: String::from(DEFAULT_SESSION_KEY),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        if self.key.is_empty()
            || !self
                .key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::session(format!(
                "session.key must be non-empty and use only [A-Za-z0-9_-], got '{}'",
                self.key
            )));
        }

        Ok(())
    }
}
