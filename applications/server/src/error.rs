/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jukebox_playback::PlaybackError;
use thiserror::Error;

use crate::api::ActionResponse;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Playback(ref e) => {
                let status = match e {
                    PlaybackError::EmptyPlaylist | PlaybackError::InvalidPrecondition(_) => {
                        StatusCode::CONFLICT
                    }
                    PlaybackError::NotFound(_) => StatusCode::NOT_FOUND,
                    PlaybackError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                };
                tracing::debug!("Playback request rejected: {}", e);
                (status, e.to_string())
            }
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        (status, Json(ActionResponse::error(message))).into_response()
    }
}
