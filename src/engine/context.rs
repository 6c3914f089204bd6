//! Snapshots the engine computes over.
//!
//! A [`PoolContext`] bundles everything an operation reads about a pool;
//! a [`Wallet`] bundles what it reads about the participant.  Both are
//! loaded fresh from the host before each operation and never cached.

use core::fmt;

use crate::domain::{AccountId, Amount, AssetId, AssetPair, FeeRate, Shares, Side};
use crate::engine::Holder;
use crate::error::{AmmError, Result};
use crate::state::{PoolKey, PoolPhase, PoolRecord, RegistryEntry, ReservePair, ShareLedger};
use crate::traits::{RecordStore, TokenLedger};

/// Pool state as observed at the start of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolContext {
    registry: RegistryEntry,
    pool: PoolRecord,
    reserves: ReservePair,
    supply: ShareLedger,
}

impl PoolContext {
    /// Assembles a context from already-read parts.
    #[must_use]
    pub const fn new(
        registry: RegistryEntry,
        pool: PoolRecord,
        reserves: ReservePair,
        supply: ShareLedger,
    ) -> Self {
        Self {
            registry,
            pool,
            reserves,
            supply,
        }
    }

    /// Reads the pool's records from `store` and its balances from `ledger`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if no pool exists under `key`.
    /// - [`AmmError::RegistryNotFound`] if the pool's registry is missing.
    pub fn load<S, L>(store: &S, ledger: &L, key: &PoolKey) -> Result<Self>
    where
        S: RecordStore + ?Sized,
        L: TokenLedger + ?Sized,
    {
        let pool = *store.pool(key).ok_or(AmmError::PoolNotFound)?;
        let registry = *store
            .registry(pool.registry())
            .ok_or(AmmError::RegistryNotFound)?;
        let custody = Holder::Custody(*key);
        let reserves = ReservePair::new(
            ledger.balance(&custody, &key.asset_a()),
            ledger.balance(&custody, &key.asset_b()),
        );
        let supply = ShareLedger::new(ledger.share_supply(key));
        Ok(Self::new(registry, pool, reserves, supply))
    }

    /// Returns the registry entry.
    #[must_use]
    pub const fn registry(&self) -> &RegistryEntry {
        &self.registry
    }

    /// Returns the pool record.
    #[must_use]
    pub const fn pool(&self) -> &PoolRecord {
        &self.pool
    }

    /// Returns the pool key.
    #[must_use]
    pub const fn key(&self) -> PoolKey {
        self.pool.key()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pool.pair()
    }

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn asset(&self, side: Side) -> AssetId {
        self.pool.pair().asset(side)
    }

    /// Returns the registry's swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.registry.fee()
    }

    /// Returns the reserve snapshot.
    #[must_use]
    pub const fn reserves(&self) -> ReservePair {
        self.reserves
    }

    /// Returns the share supply snapshot.
    #[must_use]
    pub const fn supply(&self) -> ShareLedger {
        self.supply
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> PoolPhase {
        PoolPhase::of(&self.supply)
    }

    /// The same pool with new reserves and supply.
    #[must_use]
    pub const fn advance(&self, reserves: ReservePair, supply: ShareLedger) -> Self {
        Self {
            registry: self.registry,
            pool: self.pool,
            reserves,
            supply,
        }
    }
}

impl fmt::Display for PoolContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} reserves={} {} {}",
            self.pool, self.reserves, self.supply, self.registry.fee()
        )
    }
}

/// A participant's balances relevant to one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wallet {
    account: AccountId,
    asset_a: Amount,
    asset_b: Amount,
    shares: Shares,
}

impl Wallet {
    /// Assembles a wallet from already-read balances.
    #[must_use]
    pub const fn new(
        account: AccountId,
        asset_a: Amount,
        asset_b: Amount,
        shares: Shares,
    ) -> Self {
        Self {
            account,
            asset_a,
            asset_b,
            shares,
        }
    }

    /// Reads `account`'s balances of both pool assets and of the pool's
    /// shares.
    pub fn load<L: TokenLedger + ?Sized>(
        ledger: &L,
        ctx: &PoolContext,
        account: AccountId,
    ) -> Self {
        let holder = Holder::Account(account);
        let key = ctx.key();
        Self::new(
            account,
            ledger.balance(&holder, &key.asset_a()),
            ledger.balance(&holder, &key.asset_b()),
            ledger.share_balance(&key, &account),
        )
    }

    /// Returns the account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Balance of the asset on `side`.
    #[must_use]
    pub const fn balance(&self, side: Side) -> Amount {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }

    /// Share balance.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}
