//! Media engine bridge.
//!
//! [`MediaEngine`] is the narrow surface of the native playback primitive the
//! core drives. The trait splits into two halves with different threading
//! contracts:
//!
//! - **Control primitives** (`play`, `pause`, `set_rate`, `replace_item`,
//!   `seek`) must only be invoked from the primary execution context. Code
//!   that is not already there has to hop via
//!   [`MainExecutor`](crate::executor::MainExecutor) first.
//! - **Queries** (`current_item`, `position_seconds`, `rate`) are thread-safe
//!   reads and may be called from anywhere, including observer callbacks.

use crate::loader::AssetLocator;
use std::time::Duration;

/// Handle identifying the item currently installed in the engine.
///
/// Compared by locator when guarding against notifications from a
/// just-replaced item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Locator the item was created from.
    pub locator: AssetLocator,
    /// Resolved duration of the item's timeline.
    pub duration: Duration,
}

impl MediaItem {
    /// Create an item handle.
    pub fn new(locator: AssetLocator, duration: Duration) -> Self {
        Self { locator, duration }
    }

    /// Returns `true` if this item was created from `locator`.
    pub fn matches(&self, locator: &AssetLocator) -> bool {
        &self.locator == locator
    }
}

/// Time-control status as reported by the engine.
///
/// This is the engine's own view of whether it is progressing; the core
/// reconciles it against the committed state rather than trusting it blindly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// The engine is advancing the playhead.
    Playing,
    /// The engine is holding the playhead (paused or waiting).
    Paused,
}

/// Completion callback for an asynchronous engine seek.
///
/// Invoked with `true` when the seek landed, `false` when the engine gave up
/// (e.g., superseded by another seek). May fire on any thread.
pub type SeekCompletion = Box<dyn FnOnce(bool) + Send + 'static>;

/// Narrow control/query surface of the native playback engine.
///
/// The engine has no true stop primitive; stopping is simulated by the core
/// with a pause plus an authoritative context reset.
pub trait MediaEngine: Send + Sync {
    /// Begin or resume playback of the installed item. Control primitive.
    fn play(&self);

    /// Pause playback, keeping the installed item and position. Control
    /// primitive.
    fn pause(&self);

    /// Update the playback rate multiplier. Control primitive.
    fn set_rate(&self, rate: f32);

    /// Install `item` as the current item, or detach with `None`. Replacing
    /// an item re-arms the engine's per-item observers. Control primitive.
    fn replace_item(&self, item: Option<MediaItem>);

    /// Seek the installed item's timeline to `seconds`, landing within
    /// `tolerance` on either side of the target. The engine reports the
    /// outcome through `completion`, possibly on another thread. Control
    /// primitive.
    fn seek(&self, seconds: f64, tolerance: Duration, completion: SeekCompletion);

    /// The currently installed item, if any. Thread-safe query.
    fn current_item(&self) -> Option<MediaItem>;

    /// Current playhead position in seconds. May be non-finite while the
    /// engine has nothing loaded; callers must coerce. Thread-safe query.
    fn position_seconds(&self) -> f64;

    /// Current effective playback rate (0 when not progressing).
    /// Thread-safe query.
    fn rate(&self) -> f32;
}
