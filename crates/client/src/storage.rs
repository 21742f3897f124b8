//! Persistence of the logged-in session between app launches.
//!
//! Stores deal in raw strings; (de)serialization of the session lives in
//! `AuthService` so a corrupt entry can be detected and cleared there.

use shared_types::AppError;
use std::sync::{Arc, Mutex};

/// Backend holding the serialized session.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, AppError>;
    fn save(&self, raw: &str) -> Result<(), AppError>;
    /// Remove the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), AppError>;
}

/// Process-local store, used by tests and when no persistent backend exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::server("session store lock poisoned"))
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, raw: &str) -> Result<(), AppError> {
        *self.lock()? = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.lock()? = None;
        Ok(())
    }
}

/// JSON file in the user's data directory (desktop builds).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/opportunites/<key>.json`, if the platform has a data dir.
    pub fn in_data_dir(key: &str) -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("opportunites").join(format!("{key}.json"))))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::server(format!(
                "cannot read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, raw: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::server(format!("cannot create {}: {e}", parent.display())))?;
        }
        std::fs::write(&self.path, raw)
            .map_err(|e| AppError::server(format!("cannot write {}: {e}", self.path.display())))
    }

    fn clear(&self) -> Result<(), AppError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::server(format!(
                "cannot remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}

/// Browser `localStorage` entry (web builds).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| AppError::server("localStorage is not available"))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|_| AppError::server("localStorage read failed"))
    }

    fn save(&self, raw: &str) -> Result<(), AppError> {
        Self::storage()?
            .set_item(&self.key, raw)
            .map_err(|_| AppError::server("localStorage write failed"))
    }

    fn clear(&self) -> Result<(), AppError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|_| AppError::server("localStorage remove failed"))
    }
}

/// Pick the persistent store for the current platform.
///
/// Falls back to an in-memory store when no data directory is known.
pub fn default_store(session_key: &str) -> Arc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorageStore::new(session_key))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_data_dir(session_key) {
            Some(store) => Arc::new(store),
            None => {
                tracing::warn!("no data directory; session will not survive restarts");
                Arc::new(MemoryStore::new())
            }
        }
    }
}
