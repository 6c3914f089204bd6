//! Keyed storage for registry entries and pool records.
//!
//! The engine needs lookup-by-key and uniqueness-on-insert, nothing more.
//! How keys map to storage locations is the host's business.

use crate::domain::RegistryIndex;
use crate::error::Result;
use crate::state::{PoolKey, PoolRecord, RegistryEntry};

/// Storage of immutable records.
///
/// # Contract
///
/// - At most one [`RegistryEntry`] per [`RegistryIndex`].
/// - At most one [`PoolRecord`] per [`PoolKey`].
/// - Records are never modified or removed once inserted.
pub trait RecordStore {
    /// Looks up a registry entry by index.
    fn registry(&self, index: RegistryIndex) -> Option<&RegistryEntry>;

    /// Looks up a pool record by key.
    fn pool(&self, key: &PoolKey) -> Option<&PoolRecord>;

    /// Persists a new registry entry.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AlreadyExists`](crate::error::AmmError::AlreadyExists)
    /// if the index is taken.
    fn insert_registry(&mut self, entry: RegistryEntry) -> Result<()>;

    /// Persists a new pool record.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AlreadyExists`](crate::error::AmmError::AlreadyExists)
    /// if the key is taken.
    fn insert_pool(&mut self, record: PoolRecord) -> Result<()>;
}
