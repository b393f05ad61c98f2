// Playlister - Undo/redo core for a playlist editor

pub mod config;
pub mod model;
pub mod session;
pub mod store;
pub mod transaction;

// Re-export commonly used types for convenience
pub use config::{ConfigError, HistoryScope, PlaylisterConfig};
pub use model::{Library, Playlist, PlaylistError, PlaylistId, Song, SongError, SongFields};
pub use session::{PlaylistSession, SessionError, SessionResult, ToolbarState};
pub use store::{MemoryStore, PlaylistStore, StoreError};
pub use transaction::{Transaction, TransactionError, TransactionResult, TransactionStack};
