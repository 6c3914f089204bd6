//! Unified error type for the accounting engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Variants
//! are named after the condition the caller must react to; the names are
//! the stable contract, not any numeric code.

use thiserror::Error;

/// Errors produced by registry/pool creation, liquidity and swap operations.
///
/// All variants are surfaced verbatim to the operation's caller.  An
/// operation that returns an error has produced no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// Fee is not strictly below 10 000 basis points.
    #[error("invalid fee: must be below 10000 basis points")]
    InvalidFee,

    /// Pool creation with the same asset on both sides.
    #[error("pool assets must be different")]
    IdenticalAssets,

    /// A record with the same unique key already exists.
    #[error("already exists: {0}")]
    AlreadyExists(&'static str),

    /// The referenced registry entry does not exist.
    #[error("registry entry not found")]
    RegistryNotFound,

    /// The referenced pool record does not exist.
    #[error("pool not found")]
    PoolNotFound,

    /// A required input amount is zero.
    #[error("amount must be greater than zero")]
    AmountIsZero,

    /// The participant's ledger balance is below the requested amount.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The participant's share balance is below the requested burn amount.
    #[error("insufficient LP share balance")]
    InsufficientLpBalance,

    /// The computed number of shares is zero.
    #[error("LP amount is zero")]
    LpIsZero,

    /// Withdrawal attempted against a pool without outstanding shares.
    #[error("total LP supply is zero")]
    LpSupplyIsZero,

    /// Swap attempted against a pool with a zero reserve.
    #[error("pool is empty")]
    EmptyPool,

    /// Computed swap output is below the caller's minimum.
    #[error("output amount is less than the expected minimum")]
    OutputAmountTooLow,

    /// Share supply and reserves disagree about whether the pool is funded.
    #[error("inconsistent pool state: {0}")]
    InvalidPoolState(&'static str),

    /// An arithmetic step left the representable range even after widening.
    #[error("math overflow: {0}")]
    MathOverflow(&'static str),

    /// The token ledger refused to apply a batch of effects.
    #[error("ledger rejected effects: {0}")]
    Ledger(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
