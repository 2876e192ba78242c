//! Playback manager - core state machine
//!
//! Owns the playlist, the current selection and the play/pause/stop state.
//! The current index is the single source of truth for the selection; the
//! current song is always read back through it, so it can never point at a
//! song that has left the playlist.

use crate::{
    error::{PlaybackError, Result},
    events::{Observers, ProgressObserver, StateObserver},
    types::{PlaybackState, PlayerStatus},
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Playlist and playback state holder
#[derive(Debug, Default)]
pub struct PlaybackManager {
    playlist: Vec<String>,
    current_index: Option<usize>,
    state: PlaybackState,
    observers: Observers,
}

impl PlaybackManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose playlist is already seeded
    pub fn with_playlist<I, S>(songs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut manager = Self::new();
        manager.seed(songs);
        manager
    }

    // ===== Playlist =====

    /// Replace the playlist wholesale
    ///
    /// Later duplicates are dropped. The playback state is left alone; the
    /// selection stays on the same song if it is still present.
    pub fn seed<I, S>(&mut self, songs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let songs: Vec<String> = songs
            .into_iter()
            .map(Into::into)
            .filter(|song| seen.insert(song.clone()))
            .collect();

        debug!(songs = songs.len(), "Playlist seeded");
        self.replace_playlist(songs);
    }

    /// Append a song to the end of the playlist
    ///
    /// Returns the stored (trimmed) identifier.
    pub fn add_song(&mut self, song: &str) -> Result<String> {
        let song = song.trim();

        if song.is_empty() {
            warn!("Rejected blank song name");
            return Err(PlaybackError::InvalidInput(
                "Song name cannot be empty".to_string(),
            ));
        }

        if self.position_of(song).is_some() {
            warn!(song, "Rejected duplicate song");
            return Err(PlaybackError::InvalidInput(
                "Song already in playlist".to_string(),
            ));
        }

        self.playlist.push(song.to_string());
        debug!(song, length = self.playlist.len(), "Song added");
        Ok(song.to_string())
    }

    /// Remove a song from the playlist
    ///
    /// Removing the current song clears the selection. Removing an earlier
    /// song shifts the index so the same song stays selected.
    pub fn remove_song(&mut self, song: &str) -> Result<()> {
        let song = song.trim();
        let removed = self
            .position_of(song)
            .ok_or_else(|| PlaybackError::NotFound(song.to_string()))?;

        self.playlist.remove(removed);
        debug!(song, length = self.playlist.len(), "Song removed");

        match self.current_index {
            Some(current) if current == removed => {
                self.current_index = None;
                self.observers.notify_progress(None);
            }
            Some(current) if current > removed => {
                self.current_index = Some(current - 1);
            }
            _ => {}
        }

        Ok(())
    }

    /// Replace the playlist order
    ///
    /// `new_order` may drop songs or introduce new ones, but must not
    /// contain blank or repeated identifiers. The selection follows the
    /// current song, or is cleared when it is no longer present.
    pub fn reorder<I, S>(&mut self, new_order: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut songs = Vec::new();

        for song in new_order {
            let song: String = song.into();
            let song = song.trim().to_string();

            if song.is_empty() {
                return Err(PlaybackError::InvalidInput(
                    "Song name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(song.clone()) {
                return Err(PlaybackError::InvalidInput(format!(
                    "Song listed more than once: {song}"
                )));
            }
            songs.push(song);
        }

        debug!(songs = songs.len(), "Playlist reordered");
        self.replace_playlist(songs);
        Ok(())
    }

    // ===== Playback Control =====

    /// Start or resume playback
    ///
    /// Selects the first song when nothing is selected. Returns the song
    /// now playing.
    pub fn play(&mut self) -> Result<String> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        let index = *self.current_index.get_or_insert(0);
        self.state = PlaybackState::Playing;
        self.emit_playing();

        let song = self.playlist[index].clone();
        debug!(song = %song, index, "Playing");
        Ok(song)
    }

    /// Pause playback
    ///
    /// Only valid while playing. Returns the paused song.
    pub fn pause(&mut self) -> Result<String> {
        if self.state != PlaybackState::Playing {
            return Err(PlaybackError::InvalidPrecondition(
                "No music playing".to_string(),
            ));
        }

        self.state = PlaybackState::Paused;
        self.observers.notify_state(self.state);
        debug!(song = ?self.current_song(), "Paused");
        Ok(self.current_song().unwrap_or_default().to_string())
    }

    /// Stop playback and clear the selection
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.current_index = None;
        self.observers.notify_state(self.state);
        debug!("Stopped");
    }

    /// Select the next song, wrapping to the first after the last
    ///
    /// Keeps the current play/pause state. Returns the new current song.
    pub fn skip(&mut self) -> Result<String> {
        let len = self.non_empty_len()?;
        let next = match self.current_index {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        Ok(self.select(next))
    }

    /// Select the previous song, wrapping to the last before the first
    ///
    /// Keeps the current play/pause state. Returns the new current song.
    pub fn previous(&mut self) -> Result<String> {
        let len = self.non_empty_len()?;
        let previous = match self.current_index {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        Ok(self.select(previous))
    }

    // ===== Observers =====

    pub fn subscribe_state_change(&mut self, observer: impl StateObserver + 'static) {
        self.observers.add_state(Box::new(observer));
        debug!(observers = ?self.observers.counts(), "State observer registered");
    }

    pub fn subscribe_progress(&mut self, observer: impl ProgressObserver + 'static) {
        self.observers.add_progress(Box::new(observer));
        debug!(observers = ?self.observers.counts(), "Progress observer registered");
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_song(&self) -> Option<&str> {
        self.current_index
            .and_then(|index| self.playlist.get(index))
            .map(String::as_str)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn playlist(&self) -> &[String] {
        &self.playlist
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    pub fn contains(&self, song: &str) -> bool {
        self.position_of(song).is_some()
    }

    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            state: self.state,
            current_song: self.current_song().map(str::to_string),
            playlist: self.playlist.clone(),
            current_index: self.current_index,
        }
    }

    // ===== Internals =====

    fn position_of(&self, song: &str) -> Option<usize> {
        self.playlist.iter().position(|s| s == song)
    }

    fn non_empty_len(&self) -> Result<usize> {
        match self.playlist.len() {
            0 => Err(PlaybackError::EmptyPlaylist),
            len => Ok(len),
        }
    }

    /// Move the selection and tell observers about it
    fn select(&mut self, index: usize) -> String {
        self.current_index = Some(index);

        if self.state.is_playing() {
            self.emit_playing();
        } else {
            self.observers.notify_progress(self.current_song());
        }

        let song = self.playlist[index].clone();
        debug!(song = %song, index, state = %self.state, "Selection moved");
        song
    }

    /// State then progress, the order play() promises
    fn emit_playing(&self) {
        self.observers.notify_state(self.state);
        self.observers.notify_progress(self.current_song());
    }

    /// Swap in a new playlist, keeping the selection on the same song
    ///
    /// Progress observers hear `None` when the current song is dropped.
    fn replace_playlist(&mut self, songs: Vec<String>) {
        let current = self.current_song().map(str::to_string);
        self.playlist = songs;
        self.current_index = current
            .as_deref()
            .and_then(|song| self.position_of(song));

        if current.is_some() && self.current_index.is_none() {
            self.observers.notify_progress(None);
        }
    }
}
