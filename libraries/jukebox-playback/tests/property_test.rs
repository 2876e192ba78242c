//! Property-based tests for the playback manager
//!
//! Uses proptest to verify invariants across many random playlists and
//! operation sequences.

use jukebox_playback::{PlaybackError, PlaybackManager, PlaybackState};
use proptest::prelude::*;
use std::collections::HashSet;

// ===== Helpers =====

fn arbitrary_playlist() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z0-9]{1,10}", 1..30).prop_map(|set| set.into_iter().collect())
}

fn assert_consistent(manager: &PlaybackManager) -> Result<(), TestCaseError> {
    let unique: HashSet<&String> = manager.playlist().iter().collect();
    prop_assert_eq!(unique.len(), manager.len(), "Playlist holds duplicates");

    match manager.current_index() {
        Some(index) => {
            prop_assert!(index < manager.len(), "Index {} out of range", index);
            prop_assert_eq!(
                manager.current_song(),
                Some(manager.playlist()[index].as_str())
            );
        }
        None => prop_assert_eq!(manager.current_song(), None),
    }
    Ok(())
}

// ===== Property Tests =====

proptest! {
    /// Property: skip then previous restores the current song
    #[test]
    fn skip_previous_round_trip(
        playlist in arbitrary_playlist(),
        steps in 0usize..60,
        playing in any::<bool>(),
    ) {
        let mut manager = PlaybackManager::with_playlist(playlist);
        if playing {
            manager.play().unwrap();
        }
        for _ in 0..=steps {
            manager.skip().unwrap();
        }

        let before = manager.current_song().map(str::to_string);
        let state = manager.state();
        manager.skip().unwrap();
        manager.previous().unwrap();

        prop_assert_eq!(manager.current_song().map(str::to_string), before);
        prop_assert_eq!(manager.state(), state);
    }

    /// Property: skipping len times returns to the same song
    #[test]
    fn skip_cycles_through_playlist(playlist in arbitrary_playlist()) {
        let len = playlist.len();
        let mut manager = PlaybackManager::with_playlist(playlist.clone());
        manager.play().unwrap();

        let mut visited = Vec::new();
        for _ in 0..len {
            visited.push(manager.current_song().unwrap().to_string());
            manager.skip().unwrap();
        }

        prop_assert_eq!(visited, playlist);
        prop_assert_eq!(manager.current_index(), Some(0));
    }

    /// Property: the selection always points into the playlist
    #[test]
    fn selection_stays_consistent(
        playlist in arbitrary_playlist(),
        operations in prop::collection::vec((0u8..8, any::<prop::sample::Index>()), 1..40)
    ) {
        let mut manager = PlaybackManager::with_playlist(playlist.clone());

        for (op, pick) in operations {
            let known = if manager.is_empty() {
                "missing".to_string()
            } else {
                manager.playlist()[pick.index(manager.len())].clone()
            };

            match op {
                0 => { manager.play().ok(); }
                1 => { manager.pause().ok(); }
                2 => manager.stop(),
                3 => { manager.skip().ok(); }
                4 => { manager.previous().ok(); }
                5 => { manager.add_song(&format!("added-{}", pick.index(1000))).ok(); }
                6 => { manager.remove_song(&known).ok(); }
                _ => {
                    let mut order = manager.playlist().to_vec();
                    order.reverse();
                    manager.reorder(order).unwrap();
                }
            }

            assert_consistent(&manager)?;
        }
    }

    /// Property: play on an empty playlist never changes state
    #[test]
    fn play_empty_never_changes_state(stop_first in any::<bool>()) {
        let mut manager = PlaybackManager::new();
        if stop_first {
            manager.stop();
        }

        prop_assert_eq!(manager.play(), Err(PlaybackError::EmptyPlaylist));
        prop_assert_eq!(manager.state(), PlaybackState::Stopped);
    }

    /// Property: adding an existing song never grows the playlist
    #[test]
    fn duplicate_add_is_rejected(playlist in arbitrary_playlist(), pick in any::<prop::sample::Index>()) {
        let mut manager = PlaybackManager::with_playlist(playlist.clone());
        let existing = &playlist[pick.index(playlist.len())];

        let result = manager.add_song(existing);
        prop_assert!(matches!(result, Err(PlaybackError::InvalidInput(_))));
        prop_assert_eq!(manager.len(), playlist.len());
    }
}
