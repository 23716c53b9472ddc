//! Engine event stream registration.
//!
//! [`PlaybackObserver`] mediates between the native engine and the playback
//! core for the three inbound event streams: periodic progress ticks,
//! time-control status changes, and end-of-playback notifications. Handlers
//! may fire on any thread and must therefore be `Send + Sync`.

use crate::engine::{EngineStatus, MediaItem};
use std::time::Duration;

/// Handler for periodic progress ticks. Reads position and rate directly
/// from the engine's thread-safe queries.
pub type TickHandler = Box<dyn Fn() + Send + Sync>;

/// Handler for engine time-control status changes.
pub type StatusHandler = Box<dyn Fn(EngineStatus) + Send + Sync>;

/// Handler for end-of-playback notifications, carrying the item that
/// finished. The item may already have been replaced by the time the
/// notification is delivered.
pub type StoppedHandler = Box<dyn Fn(MediaItem) + Send + Sync>;

/// Registration point for the engine's event streams.
///
/// Implementations wire the handlers to the platform's notification
/// machinery. Registration happens once, at player construction; there is no
/// unregistration, the handlers live as long as the observer.
pub trait PlaybackObserver: Send + Sync {
    /// Register a periodic time observer firing roughly every `interval`.
    fn add_periodic_time_observer(&self, interval: Duration, handler: TickHandler);

    /// Register an observer for engine time-control status changes.
    fn add_time_control_status_observer(&self, handler: StatusHandler);

    /// Register an observer for natural end-of-playback events.
    fn add_stopped_playback_observer(&self, handler: StoppedHandler);
}
