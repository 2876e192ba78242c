//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Every variant is recoverable: the manager is left unchanged when an
/// operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Playlist has no songs to select from
    #[error("No songs in playlist")]
    EmptyPlaylist,

    /// Operation is not valid in the current playback state
    #[error("{0}")]
    InvalidPrecondition(String),

    /// Song is not in the playlist (or not in a source catalog)
    #[error("Song not found: {0}")]
    NotFound(String),

    /// Song name was blank, duplicated, or otherwise rejected
    #[error("{0}")]
    InvalidInput(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
