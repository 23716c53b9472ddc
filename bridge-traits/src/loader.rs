//! Asset identity and asynchronous property resolution.
//!
//! Before an asset can be played its properties (currently only the duration)
//! have to be resolved asynchronously by the host. The loader may complete on
//! any thread; callers must not assume affinity with the primary context.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// URL-equivalent locator identifying a playable asset.
///
/// Two locators comparing equal mean "the same item": the playback core uses
/// this to decide between resuming, restarting, and reloading on a repeated
/// load request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetLocator(String);

impl AssetLocator {
    /// Create a locator from a URL-like string.
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Borrow the underlying locator string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetLocator {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

/// Asset properties the loader can be asked to resolve.
///
/// The enum is intentionally extensible; today the playback core only needs
/// the duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetProperty {
    /// Total duration of the asset's timeline.
    Duration,
}

/// An asset whose requested properties have been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Locator the asset was resolved from.
    pub locator: AssetLocator,
    /// Resolved total duration.
    pub duration: Duration,
}

impl ResolvedAsset {
    /// Create a resolved asset descriptor.
    pub fn new(locator: AssetLocator, duration: Duration) -> Self {
        Self { locator, duration }
    }
}

/// Trait for hosts that resolve asset properties asynchronously.
///
/// Implementations typically wrap the platform's asset loading machinery
/// (e.g., a streaming probe or a metadata fetch). A failed resolution is
/// terminal for that load attempt; the core does not retry on its own.
#[async_trait]
pub trait AssetPropertyLoader: Send + Sync {
    /// Resolve the requested properties of the asset behind `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::PropertyLoadFailed`](crate::BridgeError) when
    /// any of the requested properties cannot be resolved. The error should
    /// aggregate the individual per-property failures into one message.
    async fn load_properties(
        &self,
        properties: &[AssetProperty],
        locator: &AssetLocator,
    ) -> Result<ResolvedAsset>;
}
