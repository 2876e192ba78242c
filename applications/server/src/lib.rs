//! Jukebox Server Library
//!
//! HTTP front end for the in-memory playback manager: one process-wide
//! player, JSON control endpoints, an embedded control page and a
//! Server-Sent Events stream of playback notifications.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{EventBus, SourceDispatcher};
pub use state::AppState;
