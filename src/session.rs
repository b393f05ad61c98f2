// PlaylistSession - Turns user intents into transactions
//
// The session owns the library, the open-playlist selection and the
// transaction history. It validates every intent before building a
// transaction, so the stack only ever sees transactions that can succeed.
// After each committed change it fires the store's save trigger.

use crate::config::{HistoryScope, PlaylisterConfig};
use crate::model::{Library, Playlist, PlaylistId, Song, SongError, SongFields};
use crate::store::{PlaylistStore, StoreError};
use crate::transaction::{
    CreatePlaylist, CreateSong, DeletePlaylist, DuplicatePlaylist, EditSong, MoveSong,
    RemoveSong, RenamePlaylist, Transaction, TransactionError, TransactionStack,
};

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Reasons an intent is refused
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No playlist is open")]
    NoPlaylistOpen,

    #[error("Unknown playlist: {0}")]
    UnknownPlaylist(PlaylistId),

    #[error("Song index {index} out of bounds (playlist has {len} songs)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot move a song onto itself")]
    SameIndex,

    #[error("Edit does not change anything")]
    NoChange,

    #[error("Playlist name cannot be empty")]
    InvalidName,

    #[error("Invalid song: {0}")]
    InvalidSong(#[from] SongError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Which toolbar controls may be used right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarState {
    pub add_playlist: bool,
    pub add_song: bool,
    pub undo: bool,
    pub redo: bool,
    pub close: bool,
}

/// One editing session over a library of playlists
pub struct PlaylistSession {
    library: Library,
    current: Option<PlaylistId>,
    tps: TransactionStack<Library>,
    config: PlaylisterConfig,
    store: Box<dyn PlaylistStore>,
    confirm_dialog_open: bool,
    list_name_being_changed: bool,
}

impl PlaylistSession {
    /// Create a session with an empty library
    pub fn new(config: PlaylisterConfig, store: Box<dyn PlaylistStore>) -> Self {
        Self {
            library: Library::new(),
            current: None,
            tps: TransactionStack::new(),
            config,
            store,
            confirm_dialog_open: false,
            list_name_being_changed: false,
        }
    }

    /// Replace the library with the store's saved data
    ///
    /// Returns `false` (and leaves the session untouched) if nothing was saved.
    pub fn load_lists(&mut self) -> SessionResult<bool> {
        match self.store.load()? {
            Some(library) => {
                log::info!("Loaded {} playlist(s) from store", library.len());
                self.library = library;
                self.current = None;
                self.tps.clear();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop all playlists, the selection and the history
    pub fn reset(&mut self) {
        self.library = Library::new();
        self.current = None;
        self.tps.clear();
        self.confirm_dialog_open = false;
        self.list_name_being_changed = false;
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn config(&self) -> &PlaylisterConfig {
        &self.config
    }

    pub fn current_id(&self) -> Option<PlaylistId> {
        self.current
    }

    /// The open playlist, if any
    pub fn current_playlist(&self) -> Option<&Playlist> {
        self.current.and_then(|id| self.library.playlist(id))
    }

    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.library.playlist(id)
    }

    /// Song at `index` in the open playlist
    pub fn song(&self, index: usize) -> Option<&Song> {
        self.current_playlist()?.song(index)
    }

    // Playlist selection

    /// Open a playlist for editing
    pub fn open_playlist(&mut self, id: PlaylistId) -> SessionResult<()> {
        if self.library.playlist(id).is_none() {
            return Err(rejected(SessionError::UnknownPlaylist(id)));
        }
        if self.current == Some(id) {
            return Ok(());
        }

        log::info!("Opening playlist {}", id);
        self.current = Some(id);
        self.selection_changed();
        Ok(())
    }

    /// Close the open playlist
    pub fn close_playlist(&mut self) {
        if let Some(id) = self.current.take() {
            log::info!("Closing playlist {}", id);
            self.selection_changed();
        }
    }

    fn selection_changed(&mut self) {
        if self.config.history_scope == HistoryScope::PerPlaylist {
            self.tps.clear();
        }
    }

    // Playlist intents

    /// Append a new empty playlist
    ///
    /// A blank name falls back to the configured default.
    pub fn add_new_playlist(&mut self, name: &str) -> SessionResult<PlaylistId> {
        let name = match name.trim() {
            "" => self.config.new_playlist_name.clone(),
            trimmed => trimmed.to_string(),
        };
        let id = self.library.allocate_id();
        let index = self.library.len();

        self.commit(Box::new(CreatePlaylist::new(index, Playlist::new(id, name))))?;
        Ok(id)
    }

    /// Rename a playlist
    pub fn rename_playlist(&mut self, id: PlaylistId, name: &str) -> SessionResult<()> {
        let playlist = self.existing(id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(rejected(SessionError::InvalidName));
        }
        if name == playlist.name {
            return Err(rejected(SessionError::NoChange));
        }

        let old_name = playlist.name.clone();
        self.commit(Box::new(RenamePlaylist::new(id, old_name, name.to_string())))
    }

    /// Insert a copy of a playlist right after it
    pub fn duplicate_playlist(&mut self, id: PlaylistId) -> SessionResult<PlaylistId> {
        let source = self.existing(id)?.clone();
        let index = self.library.position(id).map_or(self.library.len(), |i| i + 1);
        let name = format!("{}{}", source.name, self.config.duplicate_suffix);
        let copy_id = self.library.allocate_id();

        let transaction = DuplicatePlaylist::new(&source, copy_id, name, index);
        self.commit(Box::new(transaction))?;
        Ok(copy_id)
    }

    /// Delete a playlist, closing it first if it is open
    pub fn delete_playlist(&mut self, id: PlaylistId) -> SessionResult<()> {
        let snapshot = self.existing(id)?.clone();
        let index = self.library.position(id).unwrap_or(0);

        if self.current == Some(id) {
            self.close_playlist();
        }
        self.commit(Box::new(DeletePlaylist::new(index, snapshot)))
    }

    // Song intents, all on the open playlist

    /// Append the configured default song, returning its index
    pub fn add_transaction_to_create_song(&mut self) -> SessionResult<usize> {
        let playlist = self.open()?;
        let (id, index) = (playlist.id, playlist.len());
        let song = self.config.default_song.clone();

        self.commit(Box::new(CreateSong::new(id, index, song)))?;
        Ok(index)
    }

    /// Apply edited fields to the song at `index`
    pub fn add_transaction_to_edit_song(
        &mut self,
        index: usize,
        fields: &SongFields,
    ) -> SessionResult<()> {
        let playlist = self.open()?;
        let old_song = song_at(playlist, index)?.clone();
        let new_song = fields.apply_to(&old_song).map_err(|e| rejected(e.into()))?;
        if new_song == old_song {
            return Err(rejected(SessionError::NoChange));
        }

        let id = playlist.id;
        self.commit(Box::new(EditSong::new(id, index, old_song, new_song)))
    }

    /// Remove the song at `index`
    pub fn add_transaction_to_remove_song(&mut self, index: usize) -> SessionResult<()> {
        let playlist = self.open()?;
        let snapshot = song_at(playlist, index)?.clone();

        let id = playlist.id;
        self.commit(Box::new(RemoveSong::new(id, index, snapshot)))
    }

    /// Move the song at `from` so it ends up at `to`
    pub fn add_transaction_to_move_song(&mut self, from: usize, to: usize) -> SessionResult<()> {
        let playlist = self.open()?;
        song_at(playlist, from)?;
        song_at(playlist, to)?;
        if from == to {
            return Err(rejected(SessionError::SameIndex));
        }

        let id = playlist.id;
        self.commit(Box::new(MoveSong::new(id, from, to)))
    }

    // History

    /// Undo the latest change, returning its description
    pub fn undo(&mut self) -> SessionResult<String> {
        let description = self
            .tps
            .undo(&mut self.library)
            .map_err(|e| rejected(e.into()))?;
        log::info!("Undo: {}", description);
        self.after_change();
        Ok(description)
    }

    /// Redo the latest undone change, returning its description
    pub fn redo(&mut self) -> SessionResult<String> {
        let description = self
            .tps
            .redo(&mut self.library)
            .map_err(|e| rejected(e.into()))?;
        log::info!("Redo: {}", description);
        self.after_change();
        Ok(description)
    }

    pub fn can_undo(&self) -> bool {
        self.tps.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.tps.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.tps.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.tps.redo_description()
    }

    /// Number of recorded transactions, performed or undone
    pub fn history_len(&self) -> usize {
        self.tps.len()
    }

    // UI guards

    pub fn toggle_confirm_dialog_open(&mut self) {
        self.confirm_dialog_open = !self.confirm_dialog_open;
    }

    pub fn is_confirm_dialog_open(&self) -> bool {
        self.confirm_dialog_open
    }

    pub fn set_list_name_being_changed(&mut self, changing: bool) {
        self.list_name_being_changed = changing;
    }

    pub fn is_list_name_being_changed(&self) -> bool {
        self.list_name_being_changed
    }

    /// Enabled state of each toolbar control
    pub fn toolbar(&self) -> ToolbarState {
        let has_current = self.current_playlist().is_some();
        ToolbarState {
            add_playlist: !self.confirm_dialog_open && !self.list_name_being_changed,
            add_song: has_current,
            undo: self.tps.can_undo(),
            redo: self.tps.can_redo(),
            close: has_current,
        }
    }

    fn existing(&self, id: PlaylistId) -> SessionResult<&Playlist> {
        self.library
            .playlist(id)
            .ok_or_else(|| rejected(SessionError::UnknownPlaylist(id)))
    }

    fn open(&self) -> SessionResult<&Playlist> {
        let id = self
            .current
            .ok_or_else(|| rejected(SessionError::NoPlaylistOpen))?;
        self.existing(id)
    }

    fn commit(&mut self, transaction: Box<dyn Transaction<Library>>) -> SessionResult<()> {
        let description = transaction.description();
        self.tps.push(transaction, &mut self.library)?;
        log::info!("{}", description);
        self.after_change();
        Ok(())
    }

    fn after_change(&mut self) {
        // undo/redo of playlist-level transactions can remove the open playlist
        if let Some(id) = self.current
            && self.library.playlist(id).is_none()
        {
            log::info!("Playlist {} no longer exists, closing it", id);
            self.current = None;
        }

        if let Err(e) = self.store.save(&self.library) {
            log::error!("Failed to save playlists: {}", e);
        }
    }
}

fn song_at(playlist: &Playlist, index: usize) -> SessionResult<&Song> {
    playlist.song(index).ok_or_else(|| {
        rejected(SessionError::IndexOutOfBounds {
            index,
            len: playlist.len(),
        })
    })
}

/// Log a refused intent and hand the error back
fn rejected(error: SessionError) -> SessionError {
    log::warn!("Rejected: {}", error);
    error
}
