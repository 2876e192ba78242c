//! Jukebox - Playback State
//!
//! In-memory playback state tracking for Jukebox.
//!
//! This crate provides:
//! - A playlist of unique song identifiers
//! - A current-song pointer that wraps around on skip/previous
//! - A Stopped/Paused/Playing state machine
//! - Synchronous state and progress observers
//! - Stub song sources and a registry that seeds the playlist from them
//!
//! # Architecture
//!
//! `jukebox-playback` has no I/O of its own:
//! - No audio decoding or output
//! - No HTTP, no persistence
//! - No locking (wrap the manager in a mutex to share it)
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use jukebox_playback::{CatalogSource, PlaybackManager, PlaybackState, SourceRegistry};
//!
//! let mut registry = SourceRegistry::new();
//! registry.add_source(Box::new(CatalogSource::streaming()));
//! registry.add_source(Box::new(CatalogSource::local_files()));
//!
//! let mut manager = PlaybackManager::new();
//! manager.seed(registry.collect());
//!
//! assert_eq!(manager.play().unwrap(), "spotify_song1");
//! assert_eq!(manager.skip().unwrap(), "spotify_song2");
//! assert_eq!(manager.state(), PlaybackState::Playing);
//!
//! manager.stop();
//! assert_eq!(manager.current_song(), None);
//! ```
//!
//! # Example: Observers
//!
//! ```rust
//! use jukebox_playback::{PlaybackManager, PlaybackState};
//! use std::time::Duration;
//!
//! let mut manager = PlaybackManager::with_playlist(["a.mp3", "b.mp3"]);
//!
//! manager.subscribe_state_change(|state: PlaybackState| {
//!     println!("Player state changed: {state}");
//! });
//! manager.subscribe_progress(|song: Option<&str>, elapsed: Duration| {
//!     println!("Progress update - Song: {}, Time: {:?}", song.unwrap_or("None"), elapsed);
//! });
//!
//! manager.play().unwrap();
//! ```

mod error;
mod events;
mod manager;
mod registry;
mod source;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, ProgressObserver, StateObserver};
pub use manager::PlaybackManager;
pub use registry::SourceRegistry;
pub use source::{CatalogSource, MusicSource, SourceKind};
pub use types::{PlaybackState, PlayerStatus};
