/// Playlist API routes
use crate::{
    api::{index_or_unset, ActionResponse},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub playlist: Vec<String>,
    pub current_song: Option<String>,
    pub current_index: i64,
}

#[derive(Debug, Deserialize)]
pub struct SongRequest {
    #[serde(default)]
    pub song: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub playlist: Vec<String>,
}

fn json_body<T>(body: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    body.map(|Json(body)| body)
        .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))
}

/// GET /api/playlist - Playlist with the current selection
pub async fn get_playlist(State(app_state): State<AppState>) -> Result<Json<PlaylistResponse>> {
    let player = app_state.player()?;

    Ok(Json(PlaylistResponse {
        playlist: player.playlist().to_vec(),
        current_song: player.current_song().map(str::to_string),
        current_index: index_or_unset(player.current_index()),
    }))
}

/// POST /api/add_song - Append a song to the playlist
pub async fn add_song(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<SongRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>> {
    let request = json_body(body)?;
    let song = app_state.player()?.add_song(&request.song)?;
    info!("Added: {}", song);

    Ok(Json(ActionResponse::success(format!("Added: {song}"))))
}

/// POST /api/remove_song - Remove a song from the playlist
pub async fn remove_song(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<SongRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>> {
    let request = json_body(body)?;
    let song = request.song.trim();
    app_state.player()?.remove_song(song)?;
    info!("Removed: {}", song);

    Ok(Json(ActionResponse::success(format!("Removed: {song}"))))
}

/// POST /api/reorder - Replace the playlist order
pub async fn reorder(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>> {
    let request = json_body(body)?;
    let length = request.playlist.len();
    app_state.player()?.reorder(request.playlist)?;
    info!(songs = length, "Playlist reordered");

    Ok(Json(ActionResponse::success("Playlist reordered")))
}
