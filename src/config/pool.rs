//! Parameters for creating a pool.

use crate::domain::{AssetId, AssetPair, RegistryIndex};
use crate::error::Result;

/// Request to create a [`PoolRecord`](crate::state::PoolRecord) under an
/// existing registry entry.
///
/// # Validation
///
/// - `asset_a` and `asset_b` must differ.
///
/// Whether the registry exists is checked against the record store at
/// creation time, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    registry: RegistryIndex,
    asset_a: AssetId,
    asset_b: AssetId,
}

impl PoolConfig {
    /// Creates a pool request.
    #[must_use]
    pub const fn new(registry: RegistryIndex, asset_a: AssetId, asset_b: AssetId) -> Self {
        Self {
            registry,
            asset_a,
            asset_b,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`](crate::error::AmmError::IdenticalAssets)
    /// if both assets are the same.
    pub fn validate(&self) -> Result<()> {
        self.pair().map(|_| ())
    }

    /// Returns the ordered asset pair.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn pair(&self) -> Result<AssetPair> {
        AssetPair::new(self.asset_a, self.asset_b)
    }

    /// Returns the registry the pool belongs to.
    #[must_use]
    pub const fn registry(&self) -> RegistryIndex {
        self.registry
    }

    /// Returns the first asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }
}
