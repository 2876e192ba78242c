/// Shared application state
use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::services::{EventBus, SourceDispatcher};
use jukebox_playback::{PlaybackManager, SourceRegistry};
use std::sync::{Arc, Mutex, MutexGuard};

/// Application state shared across all handlers
///
/// One playback manager per process, behind a single lock.
#[derive(Clone)]
pub struct AppState {
    pub player: Arc<Mutex<PlaybackManager>>,
    pub registry: Arc<SourceRegistry>,
    pub events: EventBus,
}

impl AppState {
    pub fn new(manager: PlaybackManager, registry: Arc<SourceRegistry>, events: EventBus) -> Self {
        Self {
            player: Arc::new(Mutex::new(manager)),
            registry,
            events,
        }
    }

    /// Seed a manager from the configured sources and wire its observers
    pub fn from_config(config: &ServerConfig) -> Self {
        let registry = Arc::new(config.registry());
        let events = EventBus::new(config.events.capacity);

        let mut manager = PlaybackManager::new();
        manager.seed(registry.collect());

        let dispatcher = SourceDispatcher::new(Arc::clone(&registry));
        manager.subscribe_state_change(dispatcher.clone());
        manager.subscribe_progress(dispatcher);
        manager.subscribe_state_change(events.clone());
        manager.subscribe_progress(events.clone());

        tracing::info!(
            sources = registry.len(),
            songs = manager.len(),
            "Playlist loaded"
        );

        Self::new(manager, registry, events)
    }

    /// Lock the playback manager
    pub fn player(&self) -> Result<MutexGuard<'_, PlaybackManager>> {
        self.player
            .lock()
            .map_err(|e| ServerError::Internal(format!("Player lock poisoned: {e}")))
    }
}
