// Playlist - Ordered, index-addressed collection of songs
//
// The index is the addressing scheme used by every song transaction, so all
// primitives here work on positions and report out-of-range positions as errors.

use crate::model::song::Song;
use serde::{Deserialize, Serialize};

/// Unique identifier for playlists within a library
pub type PlaylistId = u64;

/// Errors raised by playlist primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    #[error("Song index {index} out of bounds (playlist has {len} songs)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A named, ordered list of songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique identifier
    pub id: PlaylistId,

    /// Display name
    pub name: String,

    /// Songs in play order
    songs: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(id: PlaylistId, name: impl Into<String>) -> Self {
        Self::with_songs(id, name, Vec::new())
    }

    /// Create a playlist with initial songs
    pub fn with_songs(id: PlaylistId, name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            id,
            name: name.into(),
            songs,
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Insert a song so that it ends up at `index` (`index == len` appends)
    pub fn insert_song(&mut self, index: usize, song: Song) -> Result<(), PlaylistError> {
        if index > self.songs.len() {
            return Err(self.out_of_bounds(index));
        }
        self.songs.insert(index, song);
        Ok(())
    }

    /// Remove and return the song at `index`
    pub fn remove_song(&mut self, index: usize) -> Result<Song, PlaylistError> {
        self.check_index(index)?;
        Ok(self.songs.remove(index))
    }

    /// Overwrite the song at `index`, returning the previous value
    pub fn replace_song(&mut self, index: usize, song: Song) -> Result<Song, PlaylistError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.songs[index], song))
    }

    /// Relocate the song at `from` so that it ends up at `to`
    ///
    /// Songs between the two positions shift by one to fill the gap,
    /// so `move_song(to, from)` restores the original order.
    pub fn move_song(&mut self, from: usize, to: usize) -> Result<(), PlaylistError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let song = self.songs.remove(from);
        self.songs.insert(to, song);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), PlaylistError> {
        if index >= self.songs.len() {
            Err(self.out_of_bounds(index))
        } else {
            Ok(())
        }
    }

    fn out_of_bounds(&self, index: usize) -> PlaylistError {
        PlaylistError::IndexOutOfBounds {
            index,
            len: self.songs.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str) -> Song {
        Song::new(title, "Artist", format!("id-{}", title), None)
    }

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.songs().iter().map(|s| s.title.as_str()).collect()
    }

    fn abc() -> Playlist {
        Playlist::with_songs(1, "Test", vec![song("A"), song("B"), song("C")])
    }

    #[test]
    fn test_insert_song() {
        let mut playlist = abc();
        playlist.insert_song(1, song("X")).unwrap();
        assert_eq!(titles(&playlist), ["A", "X", "B", "C"]);

        playlist.insert_song(4, song("Y")).unwrap();
        assert_eq!(titles(&playlist), ["A", "X", "B", "C", "Y"]);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut playlist = abc();
        let result = playlist.insert_song(4, song("X"));
        assert_eq!(
            result,
            Err(PlaylistError::IndexOutOfBounds { index: 4, len: 3 })
        );
        assert_eq!(playlist.len(), 3);
    }

    #[test]
    fn test_remove_song() {
        let mut playlist = abc();
        let removed = playlist.remove_song(1).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(titles(&playlist), ["A", "C"]);
        assert!(playlist.remove_song(2).is_err());
    }

    #[test]
    fn test_replace_song() {
        let mut playlist = abc();
        let old = playlist.replace_song(2, song("Z")).unwrap();
        assert_eq!(old.title, "C");
        assert_eq!(titles(&playlist), ["A", "B", "Z"]);
    }

    #[test]
    fn test_move_song_forward_and_back() {
        let mut playlist = abc();
        playlist.move_song(0, 2).unwrap();
        assert_eq!(titles(&playlist), ["B", "C", "A"]);
        playlist.move_song(2, 0).unwrap();
        assert_eq!(titles(&playlist), ["A", "B", "C"]);
    }

    #[test]
    fn test_move_song_out_of_bounds_leaves_order() {
        let mut playlist = abc();
        assert!(playlist.move_song(0, 3).is_err());
        assert!(playlist.move_song(5, 0).is_err());
        assert_eq!(titles(&playlist), ["A", "B", "C"]);
    }

    #[test]
    fn test_empty_playlist() {
        let mut playlist = Playlist::new(7, "Empty");
        assert!(playlist.is_empty());
        assert!(playlist.song(0).is_none());
        playlist.insert_song(0, song("A")).unwrap();
        assert_eq!(playlist.len(), 1);
    }
}
