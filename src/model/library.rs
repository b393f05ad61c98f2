// Library - All playlists known to a session

use crate::model::playlist::{Playlist, PlaylistId};
use serde::{Deserialize, Serialize};

/// Ordered collection of playlists with an id allocator
///
/// Ids are never reused: the allocator only moves forward, so a playlist
/// restored by undo can never collide with one created afterwards.
/// Equality compares the playlists only; the allocator position is bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SavedLibrary")]
pub struct Library {
    playlists: Vec<Playlist>,
    next_id: PlaylistId,
}

/// Library as found in saved data, before the allocator is checked
#[derive(Deserialize)]
struct SavedLibrary {
    playlists: Vec<Playlist>,
    #[serde(default)]
    next_id: PlaylistId,
}

impl From<SavedLibrary> for Library {
    fn from(saved: SavedLibrary) -> Self {
        // a stale counter must not hand out ids already in use
        let mut library = Self::from_playlists(saved.playlists);
        library.next_id = library.next_id.max(saved.next_id);
        library
    }
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self {
            playlists: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a library from existing playlists
    pub fn from_playlists(playlists: Vec<Playlist>) -> Self {
        let next_id = playlists.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        Self { playlists, next_id }
    }

    /// Reserve a fresh playlist id
    pub fn allocate_id(&mut self) -> PlaylistId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub fn playlist_mut(&mut self, id: PlaylistId) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.id == id)
    }

    /// Position of a playlist in display order
    pub fn position(&self, id: PlaylistId) -> Option<usize> {
        self.playlists.iter().position(|p| p.id == id)
    }

    /// Insert a playlist at `index`, clamped to the end of the list
    pub fn insert_playlist(&mut self, index: usize, playlist: Playlist) {
        if playlist.id >= self.next_id {
            self.next_id = playlist.id + 1;
        }
        let index = index.min(self.playlists.len());
        self.playlists.insert(index, playlist);
    }

    /// Remove a playlist, returning it with its former position
    pub fn remove_playlist(&mut self, id: PlaylistId) -> Option<(usize, Playlist)> {
        let index = self.position(id)?;
        Some((index, self.playlists.remove(index)))
    }
}

impl PartialEq for Library {
    fn eq(&self, other: &Self) -> bool {
        self.playlists == other.playlists
    }
}

impl Eq for Library {}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
