// Persistence triggers
//
// The session calls `save` after every committed change. How and where the
// data lands is up to the implementor; `MemoryStore` keeps the latest JSON
// snapshot in memory, which is what tests and the demo use.

use crate::model::Library;
use serde::{Deserialize, Serialize};

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Destination for playlist data
pub trait PlaylistStore: Send {
    /// Persist the whole library
    fn save(&mut self, library: &Library) -> Result<(), StoreError>;

    /// Load previously saved data, `None` if nothing was saved yet
    fn load(&mut self) -> Result<Option<Library>, StoreError>;
}

/// Saved payload with its timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredLibrary {
    saved_at: chrono::DateTime<chrono::Utc>,
    library: Library,
}

/// In-memory store holding the last saved snapshot as JSON
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `library`
    pub fn with_library(library: &Library) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.save(library)?;
        Ok(store)
    }
}

impl PlaylistStore for MemoryStore {
    fn save(&mut self, library: &Library) -> Result<(), StoreError> {
        let stored = StoredLibrary {
            saved_at: chrono::Utc::now(),
            library: library.clone(),
        };
        self.data = Some(serde_json::to_string(&stored)?);
        Ok(())
    }

    fn load(&mut self) -> Result<Option<Library>, StoreError> {
        match &self.data {
            Some(json) => {
                let stored: StoredLibrary = serde_json::from_str(json)?;
                Ok(Some(stored.library))
            }
            None => Ok(None),
        }
    }
}
