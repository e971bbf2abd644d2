//! Session storage for CampusPass.
//!
//! The store holds at most one serialized user record, durable across
//! restarts. Loading fails soft: an absent or corrupt record is treated
//! as "no session", never as an error to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::user::User;
use crate::Result;

/// Fixed name of the single session slot.
pub const SESSION_FILE: &str = "session.json";

/// Durable storage of at most one signed-in user.
pub trait SessionStore: Send + Sync {
    /// Persist the given user, overwriting any prior value.
    fn save(&self, user: &User) -> Result<()>;

    /// Load the persisted user, if any.
    ///
    /// Returns `None` when the slot is absent or the stored record
    /// cannot be deserialized.
    fn load(&self) -> Option<User>;

    /// Remove the persisted value. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<()>;
}

/// File-backed session store.
///
/// The session lives as a single JSON document at
/// `{base_path}/session.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self {
            path: base_path.join(SESSION_FILE),
        })
    }

    /// Path of the session slot.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, user: &User) -> Result<()> {
        let json = serde_json::to_vec_pretty(user)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), email = %user.email, "Session persisted");
        Ok(())
    }

    fn load(&self) -> Option<User> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read session slot");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding malformed session record"
                );
                None
            }
        }
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store for tests and demos.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<User>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, user: &User) -> Result<()> {
        // Round-trip through JSON so a memory-backed run exercises the
        // same serialization contract as the file store.
        let json = serde_json::to_string(user)?;
        let copy = serde_json::from_str(&json)?;
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(copy);
        Ok(())
    }

    fn load(&self) -> Option<User> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
