//! # Player Error Types

use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors surfaced by the playback core.
///
/// No error here is fatal to the player itself; every failure path leaves
/// the committed context in a well-defined state.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// Player configuration failed validation.
    #[error("Invalid player configuration: {0}")]
    InvalidConfig(String),

    /// Asset property resolution failed. Terminal for that load attempt;
    /// the context resets to not-loaded and the caller must re-issue the
    /// load.
    #[error("Asset resolution failed: {0}")]
    AssetResolution(#[from] BridgeError),
}

/// Result type for player operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
