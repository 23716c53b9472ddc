//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the playback core:
//! - Logging and tracing configuration
//!
//! ## Overview
//!
//! This crate establishes the logging conventions used throughout the
//! workspace. Libraries emit `tracing` events; binaries (and integration
//! harnesses) call [`logging::init_logging`] once at startup to install a
//! `tracing-subscriber` pipeline.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
