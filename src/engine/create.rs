//! Registry and pool creation.

use tracing::debug;

use crate::config::{PoolConfig, RegistryConfig};
use crate::error::{AmmError, Result};
use crate::state::{PoolRecord, RegistryEntry, ReservePair, ShareLedger};
use crate::traits::RecordStore;

use super::{Effect, PoolContext, Transition};

/// Validates a registry request against the existing records.
///
/// Returns the entry for the host to persist; nothing is written here.
///
/// # Errors
///
/// - [`AmmError::InvalidFee`] if the fee is 10 000 bp or more.
/// - [`AmmError::AlreadyExists`] if the index is taken.
pub fn create_registry<S>(store: &S, config: &RegistryConfig) -> Result<RegistryEntry>
where
    S: RecordStore + ?Sized,
{
    config.validate()?;
    let fee = config.fee_rate()?;
    if store.registry(config.index()).is_some() {
        return Err(AmmError::AlreadyExists("registry"));
    }
    let entry = RegistryEntry::new(config.admin(), config.index(), fee);
    debug!(index = %entry.index(), admin = %entry.admin(), fee = %fee, "registry validated");
    Ok(entry)
}

/// Validates a pool request and lists the ledger accounts to open.
///
/// The receipt is the new record; the effects open one custody account per
/// asset and the share mint, all at zero.
///
/// # Errors
///
/// - [`AmmError::IdenticalAssets`] if both assets are the same.
/// - [`AmmError::RegistryNotFound`] if the registry does not exist.
/// - [`AmmError::AlreadyExists`] if the pool already exists.
pub fn create_pool<S>(store: &S, config: &PoolConfig) -> Result<Transition<PoolRecord>>
where
    S: RecordStore + ?Sized,
{
    config.validate()?;
    let pair = config.pair()?;
    let registry = *store
        .registry(config.registry())
        .ok_or(AmmError::RegistryNotFound)?;
    let record = PoolRecord::new(registry.index(), pair);
    let key = record.key();
    if store.pool(&key).is_some() {
        return Err(AmmError::AlreadyExists("pool"));
    }

    let effects = vec![
        Effect::OpenCustody {
            pool: key,
            asset: pair.asset_a(),
        },
        Effect::OpenCustody {
            pool: key,
            asset: pair.asset_b(),
        },
        Effect::OpenShareMint { pool: key },
    ];
    debug!(pool = %key, "pool validated");
    Ok(Transition {
        receipt: record,
        context: PoolContext::new(registry, record, ReservePair::EMPTY, ShareLedger::EMPTY),
        effects,
    })
}
