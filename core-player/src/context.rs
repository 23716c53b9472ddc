//! # Playback Context
//!
//! The externally observable snapshot of playback state. The context is a
//! plain value type: the player replaces it wholesale on every committed
//! mutation, so observers only ever see fully-formed snapshots.

use serde::{Deserialize, Serialize};

/// Lifecycle state of the loaded asset's playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No asset has been loaded (or the last load attempt failed).
    NotLoaded,
    /// Asset properties are being resolved.
    Loading,
    /// The engine is progressing through the asset's timeline.
    Playing,
    /// Playback is held at the current position.
    Paused,
    /// Playback was stopped; position has been reset to zero.
    Stopped,
}

impl PlaybackState {
    /// Returns `true` once an asset has been loaded (any state past
    /// resolution).
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Playing | Self::Paused | Self::Stopped)
    }

    /// Returns `true` while the playhead can meaningfully move, which is
    /// also the only window in which a seek is valid.
    pub fn can_seek(&self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

/// Non-negative playback-rate multiplier.
///
/// `ZERO` whenever playback is not progressing. The named constants mirror
/// the rates the UI cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaybackRate(f32);

impl PlaybackRate {
    pub const ZERO: PlaybackRate = PlaybackRate(0.0);
    pub const HALF: PlaybackRate = PlaybackRate(0.5);
    pub const NORMAL: PlaybackRate = PlaybackRate(1.0);
    pub const DOUBLE: PlaybackRate = PlaybackRate(2.0);

    /// Create a rate from a raw engine multiplier. Negative values (the
    /// engine's way of signalling reverse scrubbing) are coerced to zero.
    pub fn new(raw: f32) -> Self {
        if raw.is_finite() && raw > 0.0 {
            Self(raw)
        } else {
            Self::ZERO
        }
    }

    /// The raw multiplier value.
    pub fn as_f32(&self) -> f32 {
        self.0
    }

    /// Returns `true` when the rate indicates no progression.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// The next rate in the user-facing cycle: normal, double, half,
    /// normal, ... Any other value re-enters the cycle at normal.
    pub fn next(&self) -> Self {
        if *self == Self::NORMAL {
            Self::DOUBLE
        } else if *self == Self::DOUBLE {
            Self::HALF
        } else {
            Self::NORMAL
        }
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Snapshot of the player's externally observable playback state.
///
/// Invariants upheld by the player's commit discipline:
/// - `NotLoaded` implies all other fields are at their zero values
/// - `is_seeking` is only set while the state is `Playing` or `Paused`
/// - `rate` is `ZERO` whenever the state is not `Playing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackContext {
    /// Current lifecycle state.
    pub state: PlaybackState,
    /// Total duration of the loaded asset in seconds (0 while unknown).
    pub duration: f64,
    /// Playhead position in seconds.
    pub current_time: f64,
    /// Effective playback rate.
    pub rate: PlaybackRate,
    /// `true` between a seek request and its completion.
    pub is_seeking: bool,
}

impl PlaybackContext {
    /// The context of a player with no loaded asset.
    pub fn not_loaded() -> Self {
        Self {
            state: PlaybackState::NotLoaded,
            duration: 0.0,
            current_time: 0.0,
            rate: PlaybackRate::ZERO,
            is_seeking: false,
        }
    }

    /// The terminal stopped context, preserving only the known duration.
    pub(crate) fn stopped(duration: f64) -> Self {
        Self {
            state: PlaybackState::Stopped,
            duration,
            current_time: 0.0,
            rate: PlaybackRate::ZERO,
            is_seeking: false,
        }
    }
}

impl Default for PlaybackContext {
    fn default() -> Self {
        Self::not_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_loaded_context_is_zeroed() {
        let context = PlaybackContext::not_loaded();

        assert_eq!(context.state, PlaybackState::NotLoaded);
        assert_eq!(context.duration, 0.0);
        assert_eq!(context.current_time, 0.0);
        assert_eq!(context.rate, PlaybackRate::ZERO);
        assert!(!context.is_seeking);
    }

    #[test]
    fn stopped_context_preserves_duration() {
        let context = PlaybackContext::stopped(240.0);

        assert_eq!(context.state, PlaybackState::Stopped);
        assert_eq!(context.duration, 240.0);
        assert_eq!(context.current_time, 0.0);
        assert!(context.rate.is_zero());
    }

    #[test]
    fn rate_coerces_invalid_engine_values() {
        assert_eq!(PlaybackRate::new(-1.0), PlaybackRate::ZERO);
        assert_eq!(PlaybackRate::new(f32::NAN), PlaybackRate::ZERO);
        assert_eq!(PlaybackRate::new(f32::INFINITY), PlaybackRate::ZERO);
        assert_eq!(PlaybackRate::new(1.0), PlaybackRate::NORMAL);
    }

    #[test]
    fn rate_cycle_matches_ui_order() {
        assert_eq!(PlaybackRate::NORMAL.next(), PlaybackRate::DOUBLE);
        assert_eq!(PlaybackRate::DOUBLE.next(), PlaybackRate::HALF);
        assert_eq!(PlaybackRate::HALF.next(), PlaybackRate::NORMAL);
        assert_eq!(PlaybackRate::ZERO.next(), PlaybackRate::NORMAL);
    }

    #[test]
    fn state_predicates() {
        assert!(PlaybackState::Playing.can_seek());
        assert!(PlaybackState::Paused.can_seek());
        assert!(!PlaybackState::Loading.can_seek());
        assert!(!PlaybackState::NotLoaded.is_loaded());
        assert!(PlaybackState::Stopped.is_loaded());
    }

    #[test]
    fn context_serializes_with_lowercase_states() {
        let context = PlaybackContext::not_loaded();
        let json = serde_json::to_string(&context).unwrap();

        assert!(json.contains("\"notloaded\""));

        let restored: PlaybackContext = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, context);
    }
}
