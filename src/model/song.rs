// Song - A single entry in a playlist
// Songs are plain values: transactions copy them instead of holding references.

use serde::{Deserialize, Serialize};

/// A song in a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// External media identifier (e.g. a YouTube video id)
    pub media_id: String,

    /// Release year, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl Song {
    /// Create a new song
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        media_id: impl Into<String>,
        year: Option<u32>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            media_id: media_id.into(),
            year,
        }
    }

    /// Check that the required fields are present
    pub fn validate(&self) -> Result<(), SongError> {
        if self.title.trim().is_empty() {
            return Err(SongError::EmptyTitle);
        }
        if self.artist.trim().is_empty() {
            return Err(SongError::EmptyArtist);
        }
        if self.media_id.trim().is_empty() {
            return Err(SongError::EmptyMediaId);
        }
        Ok(())
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} ({}) by {}", self.title, year, self.artist),
            None => write!(f, "{} by {}", self.title, self.artist),
        }
    }
}

/// Errors produced when building a song from user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SongError {
    #[error("Song title cannot be empty")]
    EmptyTitle,

    #[error("Song artist cannot be empty")]
    EmptyArtist,

    #[error("Song media id cannot be empty")]
    EmptyMediaId,

    #[error("Invalid year: {0:?}")]
    InvalidYear(String),
}

/// Partial song edit, as read from an edit form
///
/// Fields left as `None` keep the value of the song being edited.
/// `year` is raw form text: blank clears the year, digits set it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFields {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub media_id: Option<String>,
    pub year: Option<String>,
}

impl SongFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn media_id(mut self, media_id: impl Into<String>) -> Self {
        self.media_id = Some(media_id.into());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Build the edited song from `base` without touching it
    ///
    /// # Errors
    /// Returns a `SongError` if the result is missing a required field
    /// or the year text is not a number.
    pub fn apply_to(&self, base: &Song) -> Result<Song, SongError> {
        let mut song = base.clone();

        if let Some(title) = &self.title {
            song.title = title.trim().to_string();
        }
        if let Some(artist) = &self.artist {
            song.artist = artist.trim().to_string();
        }
        if let Some(media_id) = &self.media_id {
            song.media_id = media_id.trim().to_string();
        }
        if let Some(year) = &self.year {
            song.year = parse_year(year)?;
        }

        song.validate()?;
        Ok(song)
    }
}

fn parse_year(text: &str) -> Result<Option<u32>, SongError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<u32>()
        .map(Some)
        .map_err(|_| SongError::InvalidYear(text.to_string()))
}
