//! Source registry
//!
//! Collects the catalogs of every registered source into one playlist seed
//! and routes "play" requests back to the source that owns a song.

use crate::error::{PlaybackError, Result};
use crate::source::MusicSource;
use std::collections::HashSet;
use tracing::debug;

#[derive(Default)]
pub struct SourceRegistry {
    sources: Vec<Box<dyn MusicSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(&mut self, source: Box<dyn MusicSource>) {
        debug!(source = source.name(), songs = source.catalog().len(), "Source registered");
        self.sources.push(source);
    }

    /// Every catalog concatenated in registration order
    ///
    /// A song offered by more than one source is kept once, at its first
    /// position.
    pub fn collect(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.sources
            .iter()
            .flat_map(|source| source.catalog().iter())
            .filter(|song| seen.insert(song.as_str()))
            .cloned()
            .collect()
    }

    /// First source whose catalog holds `song`
    pub fn source_for(&self, song: &str) -> Option<&dyn MusicSource> {
        self.sources
            .iter()
            .find(|source| source.contains(song))
            .map(|source| &**source)
    }

    /// Hand `song` to the source that owns it
    pub fn play(&self, song: &str) -> Result<()> {
        self.source_for(song)
            .ok_or_else(|| PlaybackError::NotFound(song.to_string()))?
            .play(song)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn MusicSource> {
        self.sources.iter().map(|source| &**source)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sources.iter().map(|source| source.name()))
            .finish()
    }
}
