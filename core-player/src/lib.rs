//! # Remote Audio Player Core
//!
//! Orchestration and concurrency logic for exposing a coherent playback
//! state on top of a native media engine.
//!
//! ## Overview
//!
//! This crate handles:
//! - A thread-safe, observable [`PlaybackContext`](context::PlaybackContext)
//!   snapshot, replaced wholesale on every committed mutation
//! - Reconciliation of engine events (periodic ticks, time-control status
//!   changes, end-of-playback notifications) into context commits
//! - The public command surface: load, play, pause, stop, seek, rate
//! - Supersession of in-flight loads and seeks (stale completions are
//!   detected and dropped, never applied out of order)
//!
//! The native engine, asset-property loader, event observer, and
//! primary-context executor are consumed through the `bridge-traits` crate;
//! hosts inject concrete implementations at construction.

pub mod config;
pub mod context;
pub mod error;
pub mod player;

pub use config::PlayerConfig;
pub use context::{PlaybackContext, PlaybackRate, PlaybackState};
pub use error::{PlayerError, Result};
pub use player::{PlaybackDelegate, RemoteAudioPlayer};
