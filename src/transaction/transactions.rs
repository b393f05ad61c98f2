// Concrete transaction implementations
//
// Every transaction targets a `Library` and addresses playlists by id, so a
// transaction stays valid while other playlists are added, removed or reordered.
// Song and playlist values are cloned at construction time: the live entries
// may be edited or deleted before the transaction is reversed.

use crate::model::{Library, Playlist, PlaylistId, Song};
use crate::transaction::trait_def::{Transaction, TransactionError, TransactionResult};

fn playlist_mut(library: &mut Library, id: PlaylistId) -> TransactionResult<&mut Playlist> {
    library
        .playlist_mut(id)
        .ok_or(TransactionError::UnknownPlaylist(id))
}

fn remove_playlist(library: &mut Library, id: PlaylistId) -> TransactionResult<Playlist> {
    library
        .remove_playlist(id)
        .map(|(_, playlist)| playlist)
        .ok_or(TransactionError::UnknownPlaylist(id))
}

/// Transaction to insert a new song into a playlist
pub struct CreateSong {
    playlist_id: PlaylistId,
    index: usize,
    song: Song,
}

impl CreateSong {
    /// Create a new CreateSong
    ///
    /// # Arguments
    /// * `playlist_id` - Playlist receiving the song
    /// * `index` - Position the song will occupy (`len` to append)
    /// * `song` - The song to insert
    pub fn new(playlist_id: PlaylistId, index: usize, song: Song) -> Self {
        Self {
            playlist_id,
            index,
            song,
        }
    }
}

impl Transaction<Library> for CreateSong {
    fn perform(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.insert_song(self.index, self.song.clone())?;
        Ok(())
    }

    fn reverse(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.remove_song(self.index)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add Song \"{}\"", self.song.title)
    }
}

/// Transaction to overwrite a song with edited values
///
/// Both the old and the new song are kept so the edit can be replayed in
/// either direction regardless of what happened to the live song in between.
pub struct EditSong {
    playlist_id: PlaylistId,
    index: usize,
    old_song: Song,
    new_song: Song,
}

impl EditSong {
    pub fn new(playlist_id: PlaylistId, index: usize, old_song: Song, new_song: Song) -> Self {
        Self {
            playlist_id,
            index,
            old_song,
            new_song,
        }
    }
}

impl Transaction<Library> for EditSong {
    fn perform(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.replace_song(self.index, self.new_song.clone())?;
        Ok(())
    }

    fn reverse(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.replace_song(self.index, self.old_song.clone())?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Edit Song {}", self.index + 1)
    }
}

/// Transaction to remove a song from a playlist
///
/// Stores the complete song so that undo re-inserts it with every field intact.
pub struct RemoveSong {
    playlist_id: PlaylistId,
    index: usize,
    song: Song,
}

impl RemoveSong {
    /// Create a new RemoveSong
    ///
    /// # Arguments
    /// * `song` - Snapshot of the song currently at `index`
    pub fn new(playlist_id: PlaylistId, index: usize, song: Song) -> Self {
        Self {
            playlist_id,
            index,
            song,
        }
    }
}

impl Transaction<Library> for RemoveSong {
    fn perform(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.remove_song(self.index)?;
        Ok(())
    }

    fn reverse(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.insert_song(self.index, self.song.clone())?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove Song \"{}\"", self.song.title)
    }
}

/// Transaction to reorder a song within a playlist
pub struct MoveSong {
    playlist_id: PlaylistId,
    from: usize,
    to: usize,
}

impl MoveSong {
    pub fn new(playlist_id: PlaylistId, from: usize, to: usize) -> Self {
        Self {
            playlist_id,
            from,
            to,
        }
    }
}

impl Transaction<Library> for MoveSong {
    fn perform(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.move_song(self.from, self.to)?;
        Ok(())
    }

    fn reverse(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.move_song(self.to, self.from)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move Song {} to {}", self.from + 1, self.to + 1)
    }
}

/// Transaction to add a playlist to the library
pub struct CreatePlaylist {
    index: usize,
    playlist: Playlist,
}

impl CreatePlaylist {
    /// Create a new CreatePlaylist
    ///
    /// The playlist id must already be allocated from the library.
    pub fn new(index: usize, playlist: Playlist) -> Self {
        Self { index, playlist }
    }
}

impl Transaction<Library> for CreatePlaylist {
    fn perform(&mut self, state: &mut Library) -> TransactionResult<()> {
        state.insert_playlist(self.index, self.playlist.clone());
        Ok(())
    }

    fn reverse(&mut self, state: &mut Library) -> TransactionResult<()> {
        remove_playlist(state, self.playlist.id)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create Playlist \"{}\"", self.playlist.name)
    }
}

/// Transaction to rename a playlist
pub struct RenamePlaylist {
    playlist_id: PlaylistId,
    old_name: String,
    new_name: String,
}

impl RenamePlaylist {
    pub fn new(playlist_id: PlaylistId, old_name: String, new_name: String) -> Self {
        Self {
            playlist_id,
            old_name,
            new_name,
        }
    }
}

impl Transaction<Library> for RenamePlaylist {
    fn perform(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.name = self.new_name.clone();
        Ok(())
    }

    fn reverse(&mut self, state: &mut Library) -> TransactionResult<()> {
        playlist_mut(state, self.playlist_id)?.name = self.old_name.clone();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename \"{}\" to \"{}\"", self.old_name, self.new_name)
    }
}

/// Transaction to insert a copy of an existing playlist
pub struct DuplicatePlaylist {
    source_id: PlaylistId,
    index: usize,
    copy: Playlist,
}

impl DuplicatePlaylist {
    /// Create a new DuplicatePlaylist
    ///
    /// # Arguments
    /// * `source` - Playlist to copy (songs are cloned now)
    /// * `copy_id` - Freshly allocated id for the copy
    /// * `name` - Name of the copy
    /// * `index` - Library position of the copy
    pub fn new(source: &Playlist, copy_id: PlaylistId, name: String, index: usize) -> Self {
        Self {
            source_id: source.id,
            index,
            copy: Playlist::with_songs(copy_id, name, source.songs().to_vec()),
        }
    }

    /// Id the copy will be inserted under
    pub fn copy_id(&self) -> PlaylistId {
        self.copy.id
    }
}

impl Transaction<Library> for DuplicatePlaylist {
    fn perform(&mut self, state: &mut Library) -> TransactionResult<()> {
        state.insert_playlist(self.index, self.copy.clone());
        Ok(())
    }

    fn reverse(&mut self, state: &mut Library) -> TransactionResult<()> {
        remove_playlist(state, self.copy.id)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Duplicate Playlist {} as \"{}\"", self.source_id, self.copy.name)
    }
}

/// Transaction to delete a playlist with all its songs
pub struct DeletePlaylist {
    index: usize,
    playlist: Playlist,
}

impl DeletePlaylist {
    /// Create a new DeletePlaylist
    ///
    /// # Arguments
    /// * `index` - Current library position of the playlist
    /// * `playlist` - Full snapshot of the playlist being deleted
    pub fn new(index: usize, playlist: Playlist) -> Self {
        Self { index, playlist }
    }
}

impl Transaction<Library> for DeletePlaylist {
    fn perform(&mut self, state: &mut Library) -> TransactionResult<()> {
        remove_playlist(state, self.playlist.id)?;
        Ok(())
    }

    fn reverse(&mut self, state: &mut Library) -> TransactionResult<()> {
        state.insert_playlist(self.index, self.playlist.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete Playlist \"{}\"", self.playlist.name)
    }
}
