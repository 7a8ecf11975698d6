//! Session lock.
//!
//! A running host owns `<data_dir>/aetherstream.lock`. The file is created
//! exclusively, so a second host pointed at the same directory sees it and
//! declines to start. The file holds a JSON [`SessionRecord`] describing the
//! owner.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::SessionError;

/// File name of the lock inside the data directory.
pub const LOCK_FILE_NAME: &str = "aetherstream.lock";

/// Contents of the lock file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique id of the session
    pub session_id: Uuid,

    /// Process id of the owner
    pub pid: u32,

    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl SessionRecord {
    /// A record for a session starting now in this process.
    pub fn current() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            pid: std::process::id(),
            started_at: Utc::now(),
        }
    }
}

/// Exclusive ownership of a data directory.
///
/// Dropping a held lock removes the file, ignoring errors. Use
/// [`SessionLock::release`] to observe them.
#[derive(Debug)]
pub struct SessionLock {
    path: PathBuf,
    record: SessionRecord,
    held: bool,
}

impl SessionLock {
    /// Path of the lock file for `data_dir`.
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(LOCK_FILE_NAME)
    }

    /// Try to take the lock in `data_dir`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(lock))` - The lock is now held by this process.
    /// * `Ok(None)` - Another session already holds it.
    /// * `Err` if the file could not be created or written.
    pub fn acquire(data_dir: &Path) -> Result<Option<Self>, SessionError> {
        let path = Self::path_in(data_dir);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(None),
            Err(source) => return Err(SessionError::Acquire { path, source }),
        };

        let record = SessionRecord::current();
        // From here on the file exists, so failures must not leave it behind.
        let lock = Self {
            path,
            record,
            held: true,
        };

        let body = serde_json::to_vec_pretty(&lock.record)
            .map_err(|e| SessionError::Record(e.to_string()))?;
        file.write_all(&body)
            .and_then(|_| file.sync_all())
            .map_err(|source| SessionError::Acquire {
                path: lock.path.clone(),
                source,
            })?;

        debug!(
            path = %lock.path.display(),
            session = %lock.record.session_id,
            "session lock acquired"
        );
        Ok(Some(lock))
    }

    /// Read the record of whoever holds the lock in `data_dir`.
    pub fn read_holder(data_dir: &Path) -> Result<SessionRecord, SessionError> {
        let path = Self::path_in(data_dir);
        let text = fs::read_to_string(&path)
            .map_err(|source| SessionError::Acquire { path, source })?;
        serde_json::from_str(&text).map_err(|e| SessionError::Record(e.to_string()))
    }

    /// The record written for this session.
    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    /// Path of the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the lock file.
    ///
    /// A lock file that has already disappeared is not an error.
    pub fn release(mut self) -> Result<(), SessionError> {
        self.held = false;
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session lock released");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "session lock vanished before release");
                Ok(())
            }
            Err(source) => Err(SessionError::Release {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Drop for SessionLock {
    fn drop(&mut self) {
        if self.held {
            let _ = fs::remove_file(&self.path);
        }
    }
}
