/// Server-side collaborators of the playback manager
pub mod event_bus;
pub mod source_dispatch;

pub use event_bus::{EventBus, EventEnvelope};
pub use source_dispatch::SourceDispatcher;
