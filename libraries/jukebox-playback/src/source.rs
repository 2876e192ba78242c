//! Song providers
//!
//! A source supplies a fixed, ordered catalog of song identifiers. The
//! bundled [`CatalogSource`] stands in for both a local library and a
//! streaming service; "playing" a song only logs it.

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A provider of songs
pub trait MusicSource: Send + Sync {
    /// Display name of the provider
    fn name(&self) -> &str;

    /// Fixed, ordered catalog; identical on every call
    fn catalog(&self) -> &[String];

    /// Start playing `song`
    ///
    /// Side effect only. Fails with [`PlaybackError::NotFound`] when the
    /// song is not part of this source's catalog.
    fn play(&self, song: &str) -> Result<()>;

    /// Whether `song` belongs to this source
    fn contains(&self, song: &str) -> bool {
        self.catalog().iter().any(|s| s == song)
    }
}

/// Kind of provider a catalog stands in for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Files on the local filesystem
    Local,

    /// Tracks from a streaming service
    Streaming,
}

/// Stub source backed by a fixed list of song names
#[derive(Debug, Clone)]
pub struct CatalogSource {
    name: String,
    kind: SourceKind,
    songs: Vec<String>,
}

impl CatalogSource {
    pub fn new<I, S>(name: impl Into<String>, kind: SourceKind, songs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind,
            songs: songs.into_iter().map(Into::into).collect(),
        }
    }

    /// Stub local library with two files
    pub fn local_files() -> Self {
        Self::new(
            "Local Files",
            SourceKind::Local,
            ["local_song1.mp3", "local_song2.mp3"],
        )
    }

    /// Stub streaming catalog with two tracks
    pub fn streaming() -> Self {
        Self::new(
            "Spotify",
            SourceKind::Streaming,
            ["spotify_song1", "spotify_song2"],
        )
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }
}

impl MusicSource for CatalogSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn catalog(&self) -> &[String] {
        &self.songs
    }

    fn play(&self, song: &str) -> Result<()> {
        if !self.contains(song) {
            return Err(PlaybackError::NotFound(song.to_string()));
        }

        match self.kind {
            SourceKind::Local => info!(source = %self.name, "Playing local file: {}", song),
            SourceKind::Streaming => {
                info!(source = %self.name, "Playing streaming track: {}", song)
            }
        }
        Ok(())
    }
}
