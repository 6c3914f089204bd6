//! Pool identity: the record created once per (registry, asset A, asset B).

use core::fmt;

use crate::domain::{AssetId, AssetPair, RegistryIndex};

/// Composite key that locates exactly one pool.
///
/// Built from the registry index and the ordered asset pair, so two pools
/// over the same assets in opposite order have distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolKey {
    registry: RegistryIndex,
    asset_a: AssetId,
    asset_b: AssetId,
}

impl PoolKey {
    /// Creates the key for `pair` under `registry`.
    #[must_use]
    pub const fn new(registry: RegistryIndex, pair: AssetPair) -> Self {
        Self {
            registry,
            asset_a: pair.asset_a(),
            asset_b: pair.asset_b(),
        }
    }

    /// Returns the registry index component.
    #[must_use]
    pub const fn registry(&self) -> RegistryIndex {
        self.registry
    }

    /// Returns the first asset component.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset component.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.registry, self.asset_a, self.asset_b)
    }
}

/// A pool: a registry entry bound to an ordered pair of distinct assets.
///
/// Immutable after creation.  Reserves and share supply are not stored
/// here; they live in the token ledger and are read fresh on every
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolRecord {
    registry: RegistryIndex,
    pair: AssetPair,
}

impl PoolRecord {
    /// Creates a pool record.
    #[must_use]
    pub const fn new(registry: RegistryIndex, pair: AssetPair) -> Self {
        Self { registry, pair }
    }

    /// Returns the owning registry's index.
    #[must_use]
    pub const fn registry(&self) -> RegistryIndex {
        self.registry
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }

    /// Returns the unique key of this pool.
    #[must_use]
    pub const fn key(&self) -> PoolKey {
        PoolKey::new(self.registry, self.pair)
    }
}

impl fmt::Display for PoolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pool({})", self.key())
    }
}
