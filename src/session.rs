//! Client-side session cache: the bearer token plus a user snapshot,
//! persisted in a key/value store and consulted by route guards before a
//! protected view renders. A UX convenience only — the server-side gate is
//! the security boundary.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserSnapshot,
}

/// Raw key/value persistence behind the cache.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// File-backed store, the persisted equivalent of browser local storage.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn save(&self, raw: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    cell: Mutex<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.cell.lock().expect("session store lock").clone()
    }

    fn save(&self, raw: &str) -> anyhow::Result<()> {
        *self.cell.lock().expect("session store lock") = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        *self.cell.lock().expect("session store lock") = None;
        Ok(())
    }
}

pub struct SessionCache<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Written on successful login or registration.
    pub fn remember(&self, session: &Session) -> anyhow::Result<()> {
        let raw = serde_json::to_string(session)?;
        self.store.save(&raw)
    }

    /// Current session, if a decodable one is persisted. Absence and a
    /// corrupt snapshot look the same to a guard: no session.
    pub fn current(&self) -> Option<Session> {
        let raw = self.store.load()?;
        serde_json::from_str(&raw).ok()
    }

    /// Route-guard check: does a plausible session exist.
    pub fn has_session(&self) -> bool {
        self.current().is_some()
    }

    /// Cleared on logout.
    pub fn clear(&self) -> anyhow::Result<()> {
        self.store.clear()
    }
}
