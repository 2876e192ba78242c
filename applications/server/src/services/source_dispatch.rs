/// Hands the current song to its source whenever playback (re)starts
use jukebox_playback::{
    PlaybackError, PlaybackState, ProgressObserver, SourceRegistry, StateObserver,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Observer pair that forwards "now playing" to the owning source
///
/// The manager notifies state before progress, so the flag reflects the
/// state the progress update belongs to.
#[derive(Clone)]
pub struct SourceDispatcher {
    registry: Arc<SourceRegistry>,
    playing: Arc<AtomicBool>,
}

impl SourceDispatcher {
    pub fn new(registry: Arc<SourceRegistry>) -> Self {
        Self {
            registry,
            playing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

impl StateObserver for SourceDispatcher {
    fn on_state_change(&self, state: PlaybackState) {
        self.playing.store(state.is_playing(), Ordering::SeqCst);
    }
}

impl ProgressObserver for SourceDispatcher {
    fn on_progress(&self, song: Option<&str>, _elapsed: Duration) {
        let Some(song) = song else {
            return;
        };
        if !self.is_playing() {
            return;
        }

        match self.registry.play(song) {
            Ok(()) => {}
            // Songs added at runtime belong to no source
            Err(PlaybackError::NotFound(_)) => debug!(song, "No source owns song"),
            Err(e) => warn!(song, "Source failed to play song: {}", e),
        }
    }
}
