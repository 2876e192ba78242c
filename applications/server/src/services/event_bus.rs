/// Playback event fan-out for Server-Sent Events
use axum::response::sse::{Event, KeepAlive, Sse};
use chrono::{DateTime, Utc};
use futures::stream::{Stream, StreamExt};
use jukebox_playback::{PlaybackEvent, PlaybackState, ProgressObserver, StateObserver};
use serde::Serialize;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, warn};

/// A playback event stamped with the time it was observed
#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope {
    pub event: PlaybackEvent,
    pub timestamp: DateTime<Utc>,
}

/// Broadcasts manager notifications to every connected event stream
///
/// Registered on the manager as both a state and a progress observer.
/// Publishing never blocks; with no subscribers the event is dropped.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: PlaybackEvent) {
        let envelope = EventEnvelope {
            event,
            timestamp: Utc::now(),
        };
        if let Ok(count) = self.tx.send(envelope) {
            debug!("Broadcast event to {} clients", count);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.tx.subscribe()
    }

    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// SSE response streaming every event published from now on
    pub fn sse(&self) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
        let stream = BroadcastStream::new(self.subscribe()).filter_map(|result| async move {
            match result {
                Ok(envelope) => Event::default()
                    .event(envelope.event.kind())
                    .json_data(&envelope)
                    .map_err(|e| warn!("Failed to serialize event: {}", e))
                    .ok()
                    .map(Ok::<_, Infallible>),
                Err(e) => {
                    // Lagged subscribers skip ahead
                    warn!("SSE stream error: {:?}", e);
                    None
                }
            }
        });

        Sse::new(stream).keep_alive(
            KeepAlive::new()
                .interval(Duration::from_secs(15))
                .text("keep-alive"),
        )
    }
}

impl StateObserver for EventBus {
    fn on_state_change(&self, state: PlaybackState) {
        self.publish(PlaybackEvent::state_changed(state));
    }
}

impl ProgressObserver for EventBus {
    fn on_progress(&self, song: Option<&str>, elapsed: Duration) {
        self.publish(PlaybackEvent::progress(song, elapsed));
    }
}
