//! Sequential dispatcher that ties the engine to a store and a ledger.
//!
//! Each call loads fresh snapshots, runs one pure engine operation and
//! commits its effects.  `&mut self` on every mutating call serialises
//! operations, which is all the engine requires of its host.

use tracing::{info, warn};

use crate::config::{PoolConfig, RegistryConfig};
use crate::domain::{AccountId, Amount, FeeRate, RegistryIndex, Shares, SwapDirection};
use crate::engine::{
    self, DepositQuote, LiquidityAdded, LiquidityWithdrawn, PoolContext, SwapOutcome, SwapQuote,
    Wallet, WithdrawalQuote,
};
use crate::error::Result;
use crate::state::{PoolKey, PoolPhase, PoolRecord, RegistryEntry, ReservePair};
use crate::traits::{RecordStore, TokenLedger};

use super::{MemoryLedger, MemoryRecordStore, Operation, Receipt};

/// Everything a pool listing shows about one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolView {
    /// The pool record.
    pub record: PoolRecord,
    /// Swap fee inherited from the registry.
    pub fee: FeeRate,
    /// Current reserves.
    pub reserves: ReservePair,
    /// Outstanding shares.
    pub total_supply: Shares,
    /// Lifecycle phase.
    pub phase: PoolPhase,
}

impl From<&PoolContext> for PoolView {
    fn from(ctx: &PoolContext) -> Self {
        Self {
            record: *ctx.pool(),
            fee: ctx.fee(),
            reserves: ctx.reserves(),
            total_supply: ctx.supply().total_supply(),
            phase: ctx.phase(),
        }
    }
}

/// Host for the engine over a [`RecordStore`] and a [`TokenLedger`].
///
/// Every operation is atomic: on error, neither the store nor the ledger
/// has changed.
#[derive(Debug, Clone, Default)]
pub struct Exchange<S = MemoryRecordStore, L = MemoryLedger> {
    store: S,
    ledger: L,
}

impl Exchange {
    /// An exchange over empty in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }
}

impl<S: RecordStore, L: TokenLedger> Exchange<S, L> {
    /// Creates an exchange over the given collaborators.
    pub const fn new(store: S, ledger: L) -> Self {
        Self { store, ledger }
    }

    /// Returns the record store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the ledger mutably, e.g. to fund participants.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Dispatches one operation.
    ///
    /// # Errors
    ///
    /// Whatever the dispatched operation returns.
    pub fn execute(&mut self, op: Operation) -> Result<Receipt> {
        match op {
            Operation::CreateRegistry(config) => {
                self.create_registry(&config).map(Receipt::RegistryCreated)
            }
            Operation::CreatePool(config) => self.create_pool(&config).map(Receipt::PoolCreated),
            Operation::AddLiquidity {
                pool,
                depositor,
                amount_a,
                amount_b,
            } => self
                .add_liquidity(&pool, depositor, amount_a, amount_b)
                .map(Receipt::LiquidityAdded),
            Operation::Swap {
                pool,
                trader,
                direction,
                amount_in,
                min_out,
            } => self
                .swap(&pool, trader, direction, amount_in, min_out)
                .map(Receipt::Swapped),
            Operation::WithdrawLiquidity {
                pool,
                owner,
                lp_amount,
            } => self
                .withdraw_liquidity(&pool, owner, lp_amount)
                .map(Receipt::LiquidityWithdrawn),
        }
    }

    /// Creates a registry entry.
    ///
    /// # Errors
    ///
    /// `InvalidFee` or `AlreadyExists`.
    pub fn create_registry(&mut self, config: &RegistryConfig) -> Result<RegistryEntry> {
        let result = engine::create_registry(&self.store, config)
            .and_then(|entry| self.store.insert_registry(entry).map(|()| entry));
        if let Ok(entry) = &result {
            info!(index = %entry.index(), fee = %entry.fee(), "registry created");
        }
        rejected("create_registry", result)
    }

    /// Creates a pool and opens its ledger accounts.
    ///
    /// # Errors
    ///
    /// `IdenticalAssets`, `RegistryNotFound`,
    /// `AlreadyExists`, or a ledger error.
    pub fn create_pool(&mut self, config: &PoolConfig) -> Result<PoolRecord> {
        let result = self.try_create_pool(config);
        if let Ok(record) = &result {
            info!(pool = %record.key(), "pool created");
        }
        rejected("create_pool", result)
    }

    fn try_create_pool(&mut self, config: &PoolConfig) -> Result<PoolRecord> {
        let transition = engine::create_pool(&self.store, config)?;
        // The engine has checked the key is free, so the insert cannot fail
        // after the ledger accounts are opened.
        self.ledger.commit(&transition.effects)?;
        self.store.insert_pool(transition.receipt)?;
        Ok(transition.receipt)
    }

    /// Deposits liquidity.
    ///
    /// # Errors
    ///
    /// `PoolNotFound` or any error of [`engine::add_liquidity`].
    pub fn add_liquidity(
        &mut self,
        pool: &PoolKey,
        depositor: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityAdded> {
        let result = self.load(pool, depositor).and_then(|(ctx, wallet)| {
            let transition = engine::add_liquidity(&ctx, &wallet, amount_a, amount_b)?;
            self.ledger.commit(&transition.effects)?;
            Ok(transition.receipt)
        });
        if let Ok(r) = &result {
            info!(
                pool = %r.pool,
                depositor = %r.depositor,
                used_a = %r.used_a,
                used_b = %r.used_b,
                minted = %r.minted,
                "liquidity added"
            );
        }
        rejected("add_liquidity", result)
    }

    /// Swaps one asset for the other.
    ///
    /// # Errors
    ///
    /// `PoolNotFound` or any error of [`engine::swap`].
    pub fn swap(
        &mut self,
        pool: &PoolKey,
        trader: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapOutcome> {
        let result = self.load(pool, trader).and_then(|(ctx, wallet)| {
            let transition = engine::swap(&ctx, &wallet, direction, amount_in, min_out)?;
            self.ledger.commit(&transition.effects)?;
            Ok(transition.receipt)
        });
        if let Ok(r) = &result {
            info!(
                pool = %r.pool,
                trader = %r.trader,
                direction = %r.direction,
                amount_in = %r.amount_in,
                amount_out = %r.amount_out,
                fee = %r.fee,
                "swap executed"
            );
        }
        rejected("swap", result)
    }

    /// Burns shares for both assets.
    ///
    /// # Errors
    ///
    /// `PoolNotFound` or any error of
    /// [`engine::withdraw_liquidity`].
    pub fn withdraw_liquidity(
        &mut self,
        pool: &PoolKey,
        owner: AccountId,
        lp_amount: Shares,
    ) -> Result<LiquidityWithdrawn> {
        let result = self.load(pool, owner).and_then(|(ctx, wallet)| {
            let transition = engine::withdraw_liquidity(&ctx, &wallet, lp_amount)?;
            self.ledger.commit(&transition.effects)?;
            Ok(transition.receipt)
        });
        if let Ok(r) = &result {
            info!(
                pool = %r.pool,
                owner = %r.owner,
                burned = %r.burned,
                amount_a = %r.amount_a,
                amount_b = %r.amount_b,
                "liquidity withdrawn"
            );
        }
        rejected("withdraw_liquidity", result)
    }

    /// Prices a swap against current state without executing it.
    ///
    /// # Errors
    ///
    /// `PoolNotFound` or any error of [`engine::quote_swap`].
    pub fn quote_swap(
        &self,
        pool: &PoolKey,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote> {
        engine::quote_swap(&self.context(pool)?, direction, amount_in)
    }

    /// Allocates a deposit against current state without executing it.
    ///
    /// # Errors
    ///
    /// `PoolNotFound` or any error of [`engine::quote_deposit`].
    pub fn quote_deposit(
        &self,
        pool: &PoolKey,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositQuote> {
        engine::quote_deposit(&self.context(pool)?, amount_a, amount_b)
    }

    /// Prices a share burn against current state without executing it.
    ///
    /// # Errors
    ///
    /// `PoolNotFound` or any error of
    /// [`engine::quote_withdrawal`].
    pub fn quote_withdrawal(&self, pool: &PoolKey, lp_amount: Shares) -> Result<WithdrawalQuote> {
        engine::quote_withdrawal(&self.context(pool)?, lp_amount)
    }

    /// Current state of one pool.
    ///
    /// # Errors
    ///
    /// `PoolNotFound` if the pool does not exist.
    pub fn pool_view(&self, pool: &PoolKey) -> Result<PoolView> {
        self.context(pool).map(|ctx| PoolView::from(&ctx))
    }

    /// Lifecycle phase of `pool`; `Uninitialized` if it does not exist.
    #[must_use]
    pub fn phase(&self, pool: &PoolKey) -> PoolPhase {
        self.context(pool)
            .map_or(PoolPhase::Uninitialized, |ctx| ctx.phase())
    }

    /// Reads a fresh pool snapshot.
    ///
    /// # Errors
    ///
    /// `PoolNotFound` or `RegistryNotFound`.
    pub fn context(&self, pool: &PoolKey) -> Result<PoolContext> {
        PoolContext::load(&self.store, &self.ledger, pool)
    }

    fn load(&self, pool: &PoolKey, account: AccountId) -> Result<(PoolContext, Wallet)> {
        let ctx = self.context(pool)?;
        let wallet = Wallet::load(&self.ledger, &ctx, account);
        Ok((ctx, wallet))
    }
}

impl<L: TokenLedger> Exchange<MemoryRecordStore, L> {
    /// Views of every pool under `registry`, ordered by key.
    ///
    /// # Errors
    ///
    /// Fails on the first pool whose snapshot cannot be loaded rather than
    /// leaving it out of the listing.
    pub fn pools(&self, registry: RegistryIndex) -> Result<Vec<PoolView>> {
        self.store
            .pools_for(registry)
            .into_iter()
            .map(|record| self.pool_view(&record.key()))
            .collect()
    }
}

fn rejected<T>(op: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        warn!(op, %err, "operation rejected");
    }
    result
}
