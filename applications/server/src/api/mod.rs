/// API route modules
pub mod events;
pub mod health;
pub mod playback;
pub mod playlists;
pub mod sources;
pub mod ui;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Flat `{status, message}` body returned by every action endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl ActionResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}

/// Render an optional playlist position the way clients expect (-1 = unset)
pub fn index_or_unset(index: Option<usize>) -> i64 {
    index.map_or(-1, |index| index as i64)
}

/// Build the full application router
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/status", get(playback::status))
        .route("/current_song", get(playback::current_song))
        .route("/play", post(playback::play))
        .route("/pause", post(playback::pause))
        .route("/stop", post(playback::stop))
        .route("/skip", post(playback::skip))
        .route("/previous", post(playback::previous))
        .route("/playlist", get(playlists::get_playlist))
        .route("/add_song", post(playlists::add_song))
        .route("/remove_song", post(playlists::remove_song))
        .route("/reorder", post(playlists::reorder))
        .route("/sources", get(sources::list_sources))
        .route("/events", get(events::event_stream));

    Router::new()
        .route("/", get(ui::index))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
