//! In-memory record storage.

use std::collections::HashMap;

use crate::domain::RegistryIndex;
use crate::error::{AmmError, Result};
use crate::state::{PoolKey, PoolRecord, RegistryEntry};
use crate::traits::RecordStore;

/// [`RecordStore`] backed by two hash maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    registries: HashMap<RegistryIndex, RegistryEntry>,
    pools: HashMap<PoolKey, PoolRecord>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pools created under `registry`, ordered by key.
    #[must_use]
    pub fn pools_for(&self, registry: RegistryIndex) -> Vec<&PoolRecord> {
        let mut out: Vec<_> = self
            .pools
            .values()
            .filter(|p| p.registry() == registry)
            .collect();
        out.sort_by_key(|p| p.key());
        out
    }

    /// Number of pools across all registries.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }
}

impl RecordStore for MemoryRecordStore {
    fn registry(&self, index: RegistryIndex) -> Option<&RegistryEntry> {
        self.registries.get(&index)
    }

    fn pool(&self, key: &PoolKey) -> Option<&PoolRecord> {
        self.pools.get(key)
    }

    fn insert_registry(&mut self, entry: RegistryEntry) -> Result<()> {
        if self.registries.contains_key(&entry.index()) {
            return Err(AmmError::AlreadyExists("registry"));
        }
        self.registries.insert(entry.index(), entry);
        Ok(())
    }

    fn insert_pool(&mut self, record: PoolRecord) -> Result<()> {
        let key = record.key();
        if self.pools.contains_key(&key) {
            return Err(AmmError::AlreadyExists("pool"));
        }
        self.pools.insert(key, record);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, AssetId, AssetPair, FeeRate};

    fn entry(index: u16) -> RegistryEntry {
        RegistryEntry::new(AccountId::from_bytes([0; 32]), RegistryIndex::new(index), FeeRate::ZERO)
    }

    fn record(index: u16, a: u8, b: u8) -> PoolRecord {
        let Ok(pair) = AssetPair::new(AssetId::from_bytes([a; 32]), AssetId::from_bytes([b; 32]))
        else {
            panic!("distinct assets");
        };
        PoolRecord::new(RegistryIndex::new(index), pair)
    }

    #[test]
    fn registry_unique_by_index() {
        let mut store = MemoryRecordStore::new();
        assert!(store.insert_registry(entry(1)).is_ok());
        assert_eq!(
            store.insert_registry(entry(1)),
            Err(AmmError::AlreadyExists("registry"))
        );
        assert!(store.registry(RegistryIndex::new(1)).is_some());
        assert!(store.registry(RegistryIndex::new(2)).is_none());
    }

    #[test]
    fn pool_unique_by_key() {
        let mut store = MemoryRecordStore::new();
        assert!(store.insert_pool(record(1, 1, 2)).is_ok());
        assert!(store.insert_pool(record(1, 2, 1)).is_ok());
        assert_eq!(
            store.insert_pool(record(1, 1, 2)),
            Err(AmmError::AlreadyExists("pool"))
        );
        assert_eq!(store.pool_count(), 2);
    }

    #[test]
    fn listing_filters_by_registry() {
        let mut store = MemoryRecordStore::new();
        for r in [record(1, 1, 2), record(2, 1, 2), record(1, 3, 4)] {
            assert!(store.insert_pool(r).is_ok());
        }
        let pools = store.pools_for(RegistryIndex::new(1));
        assert_eq!(pools.len(), 2);
        assert!(pools.iter().all(|p| p.registry() == RegistryIndex::new(1)));
        assert!(store.pools_for(RegistryIndex::new(9)).is_empty());
    }
}
