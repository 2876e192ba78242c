//! Integration tests for the playback manager
//!
//! These tests walk through complete listening sessions against the public
//! API only.

use jukebox_playback::{
    CatalogSource, PlaybackError, PlaybackEvent, PlaybackManager, PlaybackState, SourceKind,
    SourceRegistry,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ===== Test Helpers =====

/// Records every notification as a PlaybackEvent
fn attach_recorder(manager: &mut PlaybackManager) -> Arc<Mutex<Vec<PlaybackEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&events);
    manager.subscribe_state_change(move |state: PlaybackState| {
        sink.lock()
            .unwrap()
            .push(PlaybackEvent::state_changed(state));
    });

    let sink = Arc::clone(&events);
    manager.subscribe_progress(move |song: Option<&str>, elapsed: Duration| {
        sink.lock()
            .unwrap()
            .push(PlaybackEvent::progress(song, elapsed));
    });

    events
}

fn default_registry() -> SourceRegistry {
    let mut registry = SourceRegistry::new();
    registry.add_source(Box::new(CatalogSource::local_files()));
    registry.add_source(Box::new(CatalogSource::streaming()));
    registry
}

// ===== Scenarios =====

#[test]
fn test_skip_wraps_around_while_playing() {
    let mut manager = PlaybackManager::with_playlist(["A", "B", "C"]);
    assert_eq!(manager.current_index(), None);

    manager.play().unwrap();
    assert_eq!(manager.current_song(), Some("A"));
    assert_eq!(manager.state(), PlaybackState::Playing);

    manager.skip().unwrap();
    assert_eq!(manager.current_song(), Some("B"));
    assert_eq!(manager.state(), PlaybackState::Playing);

    manager.skip().unwrap();
    assert_eq!(manager.current_song(), Some("C"));

    manager.skip().unwrap();
    assert_eq!(manager.current_song(), Some("A"));
    assert_eq!(manager.state(), PlaybackState::Playing);
}

#[test]
fn test_previous_wraps_to_last() {
    let mut manager = PlaybackManager::with_playlist(["A", "B"]);
    manager.play().unwrap();
    assert_eq!(manager.current_song(), Some("A"));

    manager.previous().unwrap();
    assert_eq!(manager.current_song(), Some("B"));
    assert_eq!(manager.state(), PlaybackState::Playing);
}

#[test]
fn test_add_then_remove_on_empty_playlist() {
    let mut manager = PlaybackManager::new();

    manager.add_song("s1").unwrap();
    assert_eq!(manager.playlist(), ["s1"]);

    manager.remove_song("s1").unwrap();
    assert!(manager.playlist().is_empty());
    assert_eq!(manager.current_song(), None);
    assert_eq!(manager.current_index(), None);
}

#[test]
fn test_remove_current_song_clears_selection() {
    let mut manager = PlaybackManager::with_playlist(["A", "B", "C"]);
    manager.play().unwrap();
    manager.skip().unwrap();

    manager.remove_song("B").unwrap();

    assert_eq!(manager.current_song(), None);
    assert_eq!(manager.current_index(), None);
    assert_eq!(manager.playlist(), ["A", "C"]);
    // Playback state is not touched by playlist edits
    assert_eq!(manager.state(), PlaybackState::Playing);

    // Next play starts over from the top
    assert_eq!(manager.play().unwrap(), "A");
}

#[test]
fn test_remove_last_song_while_selected_elsewhere() {
    let mut manager = PlaybackManager::with_playlist(["A", "B", "C"]);
    manager.previous().unwrap();
    assert_eq!(manager.current_song(), Some("C"));

    manager.remove_song("B").unwrap();
    assert_eq!(manager.current_index(), Some(1));
    assert_eq!(manager.current_song(), Some("C"));
}

#[test]
fn test_duplicate_add_is_rejected() {
    let mut manager = PlaybackManager::new();
    manager.add_song("x").unwrap();

    let err = manager.add_song("x").unwrap_err();
    assert!(matches!(err, PlaybackError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Song already in playlist");
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_stop_is_idempotent() {
    let mut manager = PlaybackManager::with_playlist(["A"]);
    manager.play().unwrap();

    manager.stop();
    assert_eq!(manager.state(), PlaybackState::Stopped);
    manager.stop();
    assert_eq!(manager.state(), PlaybackState::Stopped);
    assert_eq!(manager.current_song(), None);
}

#[test]
fn test_play_pause_resume_workflow() {
    let mut manager = PlaybackManager::with_playlist(["A", "B"]);
    let events = attach_recorder(&mut manager);

    manager.play().unwrap();
    manager.pause().unwrap();
    assert_eq!(manager.state(), PlaybackState::Paused);

    manager.play().unwrap();
    assert_eq!(manager.state(), PlaybackState::Playing);
    assert_eq!(manager.current_song(), Some("A"));

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            PlaybackEvent::state_changed(PlaybackState::Playing),
            PlaybackEvent::progress(Some("A"), Duration::ZERO),
            PlaybackEvent::state_changed(PlaybackState::Paused),
            PlaybackEvent::state_changed(PlaybackState::Playing),
            PlaybackEvent::progress(Some("A"), Duration::ZERO),
        ]
    );
}

#[test]
fn test_selection_while_stopped_does_not_start_playback() {
    let mut manager = PlaybackManager::with_playlist(["A", "B", "C"]);
    let events = attach_recorder(&mut manager);

    assert_eq!(manager.skip().unwrap(), "A");
    assert_eq!(manager.skip().unwrap(), "B");
    assert_eq!(manager.state(), PlaybackState::Stopped);

    // Only progress notifications, no state change
    let events = events.lock().unwrap();
    assert!(events
        .iter()
        .all(|event| matches!(event, PlaybackEvent::Progress { .. })));
    assert_eq!(events.len(), 2);
}

#[test]
fn test_registry_seeds_playlist() {
    let registry = default_registry();
    let mut manager = PlaybackManager::new();
    manager.seed(registry.collect());

    assert_eq!(
        manager.playlist(),
        [
            "local_song1.mp3",
            "local_song2.mp3",
            "spotify_song1",
            "spotify_song2"
        ]
    );
    assert_eq!(manager.state(), PlaybackState::Stopped);
    assert_eq!(manager.current_index(), None);
}

#[test]
fn test_demo_session() {
    let mut manager = PlaybackManager::new();
    manager.seed(default_registry().collect());

    manager.play().unwrap();
    manager.skip().unwrap();
    manager.pause().unwrap();
    assert_eq!(manager.previous().unwrap(), "local_song1.mp3");
    assert_eq!(manager.state(), PlaybackState::Paused);

    manager.stop();
    manager.add_song("new_song.mp3").unwrap();
    manager
        .reorder(["new_song.mp3", "spotify_song1", "local_song1.mp3"])
        .unwrap();

    assert_eq!(
        manager.playlist(),
        ["new_song.mp3", "spotify_song1", "local_song1.mp3"]
    );
    assert_eq!(manager.current_index(), None);
}

#[test]
fn test_registry_plays_only_owned_songs() {
    let mut registry = SourceRegistry::new();
    registry.add_source(Box::new(CatalogSource::new(
        "Vinyl Rips",
        SourceKind::Local,
        ["side_a.flac"],
    )));

    assert!(registry.play("side_a.flac").is_ok());
    assert_eq!(
        registry.play("side_b.flac"),
        Err(PlaybackError::NotFound("side_b.flac".to_string()))
    );
}
