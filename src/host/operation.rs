//! Requests the exchange dispatches and the receipts it returns.

use core::fmt;

use crate::config::{PoolConfig, RegistryConfig};
use crate::domain::{AccountId, Amount, Shares, SwapDirection};
use crate::engine::{LiquidityAdded, LiquidityWithdrawn, SwapOutcome};
use crate::state::{PoolKey, PoolRecord, RegistryEntry};

/// One request to the exchange.
///
/// Authorisation is the caller's concern: the account named in a request
/// is assumed to have signed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Create a registry entry.
    CreateRegistry(RegistryConfig),
    /// Create a pool under an existing registry entry.
    CreatePool(PoolConfig),
    /// Deposit both assets.
    AddLiquidity {
        /// Target pool.
        pool: PoolKey,
        /// Depositing account.
        depositor: AccountId,
        /// Maximum asset A to deposit.
        amount_a: Amount,
        /// Maximum asset B to deposit.
        amount_b: Amount,
    },
    /// Trade one asset for the other.
    Swap {
        /// Target pool.
        pool: PoolKey,
        /// Trading account.
        trader: AccountId,
        /// Which asset is spent.
        direction: SwapDirection,
        /// Input, fee included.
        amount_in: Amount,
        /// Smallest acceptable output.
        min_out: Amount,
    },
    /// Burn shares for both assets.
    WithdrawLiquidity {
        /// Target pool.
        pool: PoolKey,
        /// Share owner.
        owner: AccountId,
        /// Shares to burn.
        lp_amount: Shares,
    },
}

impl Operation {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateRegistry(_) => "create_registry",
            Self::CreatePool(_) => "create_pool",
            Self::AddLiquidity { .. } => "add_liquidity",
            Self::Swap { .. } => "swap",
            Self::WithdrawLiquidity { .. } => "withdraw_liquidity",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a successful [`Operation`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Receipt {
    /// The new registry entry.
    RegistryCreated(RegistryEntry),
    /// The new pool record.
    PoolCreated(PoolRecord),
    /// Deposit result.
    LiquidityAdded(LiquidityAdded),
    /// Swap result.
    Swapped(SwapOutcome),
    /// Withdrawal result.
    LiquidityWithdrawn(LiquidityWithdrawn),
}
