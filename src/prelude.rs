//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairpool::prelude::*;
//! ```

pub use crate::config::{PoolConfig, RegistryConfig};
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, FeeRate, RegistryIndex, Shares, Side,
    SwapDirection, MAX_FEE_BPS,
};
pub use crate::engine::{
    DepositQuote, Effect, Holder, LiquidityAdded, LiquidityWithdrawn, PoolContext, SwapOutcome,
    SwapQuote, Transition, Wallet, WithdrawalQuote,
};
pub use crate::error::{AmmError, Result};
pub use crate::host::{Exchange, MemoryLedger, MemoryRecordStore, Operation, PoolView, Receipt};
pub use crate::math::CheckedArithmetic;
pub use crate::state::{PoolKey, PoolPhase, PoolRecord, RegistryEntry, ReservePair, ShareLedger};
pub use crate::traits::{RecordStore, TokenLedger};
