use crate::{Result as SessionResult, SessionError, SessionStorage};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self.path_for(key);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!("Loaded session value from {path:?}");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No session file at {path:?}");
                Ok(None)
            }
            Err(e) => Err(SessionError::file_read(path, e)),
        }
    }

    /// Atomic write: temp file, fsync, rename over the final path.
    fn save(&self, key: &str, value: &str) -> SessionResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| SessionError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path_for(key);
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Saved session value to {final_path:?}");
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let path = self.path_for(key);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed session file {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.<timestamp>`.
    fn quarantine(&self, key: &str) -> SessionResult<()> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(());
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{key}.json.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(|e| SessionError::backup_failed(path, e))?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(())
    }
}
