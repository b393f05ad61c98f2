// Playlist data model
//
// Plain data: songs, playlists and the library holding them. Mutation goes
// through index-addressed primitives that the transactions build on.

pub mod library;
pub mod playlist;
pub mod song;

pub use library::Library;
pub use playlist::{Playlist, PlaylistError, PlaylistId};
pub use song::{Song, SongError, SongFields};
