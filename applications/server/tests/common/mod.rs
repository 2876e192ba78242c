/// Common test utilities and fixtures
use axum::Router;
use jukebox_playback::{PlaybackManager, SourceRegistry};
use jukebox_server::{create_router, AppState, EventBus, ServerConfig};
use std::sync::Arc;

/// App seeded from the default sources, plus its state for inspection
pub fn create_test_app() -> (Router, AppState) {
    let state = AppState::from_config(&ServerConfig::default());
    (create_router(state.clone()), state)
}

/// App whose playlist is exactly `songs`, with no sources registered
pub fn create_test_app_with_playlist<I, S>(songs: I) -> Router
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let events = EventBus::new(16);
    let mut manager = PlaybackManager::with_playlist(songs);
    manager.subscribe_state_change(events.clone());
    manager.subscribe_progress(events.clone());

    create_router(AppState::new(
        manager,
        Arc::new(SourceRegistry::new()),
        events,
    ))
}
