// Session configuration, loadable from RON

use crate::model::Song;
use ron::error::SpannedError;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] SpannedError),

    #[error("RON serialization error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// When the undo/redo history is cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HistoryScope {
    /// Opening or closing a playlist starts a fresh history
    #[default]
    PerPlaylist,
    /// History survives playlist switches until the session is reset
    Session,
}

/// Settings for a `PlaylistSession`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylisterConfig {
    /// Song inserted by "add song"
    pub default_song: Song,

    /// Name used for new playlists when none is given
    pub new_playlist_name: String,

    /// Appended to the name of a duplicated playlist
    pub duplicate_suffix: String,

    /// History clearing policy
    pub history_scope: HistoryScope,
}

impl Default for PlaylisterConfig {
    fn default() -> Self {
        Self {
            default_song: Song::new("Untitled", "???", "dQw4w9WgXcQ", None),
            new_playlist_name: "Untitled".to_string(),
            duplicate_suffix: " (Copy)".to_string(),
            history_scope: HistoryScope::default(),
        }
    }
}

impl PlaylisterConfig {
    /// Parse and validate a configuration from RON text
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_ron_str(&text)?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize to pretty-printed RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Check that defaults produce valid songs and playlists
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_song
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("default_song: {}", e)))?;

        if self.new_playlist_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "new_playlist_name cannot be empty".to_string(),
            ));
        }

        if self.duplicate_suffix.is_empty() {
            return Err(ConfigError::Invalid(
                "duplicate_suffix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
