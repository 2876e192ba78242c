//! Playback events and observers
//!
//! Observers are invoked synchronously, in registration order, while the
//! manager is still inside the operation that caused the change:
//! - State changes (play/pause/stop, re-affirmed on skip while playing)
//! - Progress updates (current song changed or playback (re)started)

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Receives playback state changes
pub trait StateObserver: Send + Sync {
    fn on_state_change(&self, state: PlaybackState);
}

/// Receives progress updates for the current song
///
/// `song` is `None` when the selection was cleared. Elapsed time is a
/// placeholder and is always zero since no audio is decoded.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, song: Option<&str>, elapsed: Duration);
}

impl<F> StateObserver for F
where
    F: Fn(PlaybackState) + Send + Sync,
{
    fn on_state_change(&self, state: PlaybackState) {
        self(state);
    }
}

impl<F> ProgressObserver for F
where
    F: Fn(Option<&str>, Duration) + Send + Sync,
{
    fn on_progress(&self, song: Option<&str>, elapsed: Duration) {
        self(song, elapsed);
    }
}

/// Events emitted by the playback system
///
/// Owned mirror of the observer callbacks, for observers that forward
/// notifications elsewhere (channels, event streams).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Playback state changed (playing, paused, stopped)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Current song changed or playback (re)started
    Progress {
        /// ID of the current song, if any
        song: Option<String>,
        /// Elapsed time into the song
        elapsed_ms: u64,
    },
}

impl PlaybackEvent {
    pub fn state_changed(state: PlaybackState) -> Self {
        PlaybackEvent::StateChanged { state }
    }

    pub fn progress(song: Option<&str>, elapsed: Duration) -> Self {
        PlaybackEvent::Progress {
            song: song.map(str::to_string),
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    /// Short event name, used as the SSE `event:` field
    pub fn kind(&self) -> &'static str {
        match self {
            PlaybackEvent::StateChanged { .. } => "state_changed",
            PlaybackEvent::Progress { .. } => "progress",
        }
    }
}

/// Registration-ordered observer lists
#[derive(Default)]
pub(crate) struct Observers {
    state: Vec<Box<dyn StateObserver>>,
    progress: Vec<Box<dyn ProgressObserver>>,
}

impl Observers {
    pub(crate) fn add_state(&mut self, observer: Box<dyn StateObserver>) {
        self.state.push(observer);
    }

    pub(crate) fn add_progress(&mut self, observer: Box<dyn ProgressObserver>) {
        self.progress.push(observer);
    }

    pub(crate) fn notify_state(&self, state: PlaybackState) {
        for observer in &self.state {
            observer.on_state_change(state);
        }
    }

    pub(crate) fn notify_progress(&self, song: Option<&str>) {
        for observer in &self.progress {
            observer.on_progress(song, Duration::ZERO);
        }
    }

    pub(crate) fn counts(&self) -> (usize, usize) {
        (self.state.len(), self.progress.len())
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("state", &self.state.len())
            .field("progress", &self.progress.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn observers_fire_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::default();

        for tag in ["first", "second", "third"] {
            let log = Arc::clone(&log);
            observers.add_state(Box::new(move |state: PlaybackState| {
                log.lock().unwrap().push(format!("{tag}:{state}"));
            }));
        }

        observers.notify_state(PlaybackState::Playing);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:playing", "second:playing", "third:playing"]
        );
    }

    #[test]
    fn progress_elapsed_is_zero() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::default();
        let sink = Arc::clone(&seen);
        observers.add_progress(Box::new(move |song: Option<&str>, elapsed: Duration| {
            sink.lock()
                .unwrap()
                .push((song.map(str::to_string), elapsed));
        }));

        observers.notify_progress(Some("a"));
        observers.notify_progress(None);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (Some("a".to_string()), Duration::ZERO),
                (None, Duration::ZERO)
            ]
        );
    }

    #[test]
    fn event_kind_names() {
        assert_eq!(
            PlaybackEvent::state_changed(PlaybackState::Paused).kind(),
            "state_changed"
        );
        assert_eq!(
            PlaybackEvent::progress(Some("x"), Duration::ZERO),
            PlaybackEvent::Progress {
                song: Some("x".to_string()),
                elapsed_ms: 0
            }
        );
    }
}
