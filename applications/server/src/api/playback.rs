/// Playback control API routes
use crate::{
    api::{index_or_unset, ActionResponse},
    error::Result,
    state::AppState,
};
use axum::{extract::State, Json};
use jukebox_playback::PlaybackState;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub state: PlaybackState,
    pub current_song: Option<String>,
    pub playlist: Vec<String>,
    pub current_index: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentSongResponse {
    pub current_song: Option<String>,
    pub state: PlaybackState,
}

/// GET /api/status - Full player state
pub async fn status(State(app_state): State<AppState>) -> Result<Json<StatusResponse>> {
    let status = app_state.player()?.status();

    Ok(Json(StatusResponse {
        state: status.state,
        current_song: status.current_song,
        playlist: status.playlist,
        current_index: index_or_unset(status.current_index),
    }))
}

/// GET /api/current_song - Current song and state
pub async fn current_song(State(app_state): State<AppState>) -> Result<Json<CurrentSongResponse>> {
    let player = app_state.player()?;

    Ok(Json(CurrentSongResponse {
        current_song: player.current_song().map(str::to_string),
        state: player.state(),
    }))
}

/// POST /api/play - Start or resume playback
pub async fn play(State(app_state): State<AppState>) -> Result<Json<ActionResponse>> {
    let song = app_state.player()?.play()?;
    info!("Now playing: {}", song);

    Ok(Json(ActionResponse::success(format!("Now playing: {song}"))))
}

/// POST /api/pause - Pause playback
pub async fn pause(State(app_state): State<AppState>) -> Result<Json<ActionResponse>> {
    let song = app_state.player()?.pause()?;
    info!("Paused: {}", song);

    Ok(Json(ActionResponse::success("Music paused")))
}

/// POST /api/stop - Stop playback and clear the selection
pub async fn stop(State(app_state): State<AppState>) -> Result<Json<ActionResponse>> {
    app_state.player()?.stop();
    info!("Stopped");

    Ok(Json(ActionResponse::success("Music stopped")))
}

/// POST /api/skip - Select the next song
pub async fn skip(State(app_state): State<AppState>) -> Result<Json<ActionResponse>> {
    let (song, playing) = {
        let mut player = app_state.player()?;
        let song = player.skip()?;
        (song, player.state().is_playing())
    };

    let message = if playing {
        format!("Skipped to: {song}")
    } else {
        format!("Selected: {song}")
    };
    info!("{}", message);

    Ok(Json(ActionResponse::success(message)))
}

/// POST /api/previous - Select the previous song
pub async fn previous(State(app_state): State<AppState>) -> Result<Json<ActionResponse>> {
    let (song, playing) = {
        let mut player = app_state.player()?;
        let song = player.previous()?;
        (song, player.state().is_playing())
    };

    let message = if playing {
        format!("Previous song: {song}")
    } else {
        format!("Selected: {song}")
    };
    info!("{}", message);

    Ok(Json(ActionResponse::success(message)))
}
