//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the playback core and
//! platform-specific media plumbing. Each trait represents a capability the
//! core requires but that must be implemented differently per platform
//! (AVFoundation, GStreamer, a test harness, ...).
//!
//! ## Traits
//!
//! ### Media engine
//! - [`MediaEngine`](engine::MediaEngine) - Control and query surface of the
//!   native playback primitive (play/pause/seek/replace-item, position, rate)
//!
//! ### Asset resolution
//! - [`AssetPropertyLoader`](loader::AssetPropertyLoader) - Asynchronous
//!   resolution of per-asset properties (currently the duration)
//!
//! ### Event delivery
//! - [`PlaybackObserver`](observer::PlaybackObserver) - Registration point for
//!   the engine's periodic tick, status-change, and end-of-playback streams
//!
//! ### Scheduling
//! - [`MainExecutor`](executor::MainExecutor) - Non-blocking hop onto the
//!   primary execution context, where engine control primitives must run
//!
//! ## Threading contract
//!
//! All bridge traits require `Send + Sync` bounds so implementations can be
//! shared freely across threads and async tasks. Observer handlers and loader
//! completions may fire on any thread; the core is responsible for
//! redispatching to the primary context where the engine demands it.
//!
//! ## Error handling
//!
//! Fallible bridge operations use the [`BridgeError`](error::BridgeError)
//! type. Platform implementations should convert their native errors into
//! `BridgeError` with actionable messages.

pub mod engine;
pub mod error;
pub mod executor;
pub mod loader;
pub mod observer;

pub use error::{BridgeError, Result};

// Re-export commonly used types
pub use engine::{EngineStatus, MediaEngine, MediaItem, SeekCompletion};
pub use executor::{InlineExecutor, MainExecutor, MainTask};
pub use loader::{AssetLocator, AssetProperty, AssetPropertyLoader, ResolvedAsset};
pub use observer::{PlaybackObserver, StatusHandler, StoppedHandler, TickHandler};
