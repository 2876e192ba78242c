/// Playback event stream
use crate::state::AppState;
use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;

/// GET /api/events - SSE stream of state and progress notifications
pub async fn event_stream(
    State(app_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::debug!(
        "New SSE client connected, total clients: {}",
        app_state.events.client_count() + 1
    );
    app_state.events.sse()
}
