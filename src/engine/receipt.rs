//! Results of the state-changing operations.

use crate::domain::{AccountId, Amount, Shares, SwapDirection};
use crate::state::{PoolKey, ReservePair};

use super::{Effect, PoolContext};

/// Output of a pure operation: what happened, the pool afterwards, and the
/// ledger effects that make it so.
///
/// The host must apply `effects` atomically and in order; `context` is only
/// valid once it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<R> {
    /// Operation-specific receipt.
    pub receipt: R,
    /// Pool state after the effects are applied.
    pub context: PoolContext,
    /// Ledger instructions, in application order.
    pub effects: Vec<Effect>,
}

/// Receipt of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidityAdded {
    /// Pool deposited into.
    pub pool: PoolKey,
    /// Depositing account.
    pub depositor: AccountId,
    /// Asset A taken.
    pub used_a: Amount,
    /// Asset B taken.
    pub used_b: Amount,
    /// Shares minted to the depositor.
    pub minted: Shares,
    /// Reserves after the deposit.
    pub reserves: ReservePair,
    /// Share supply after the deposit.
    pub total_supply: Shares,
}

/// Receipt of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOutcome {
    /// Pool traded against.
    pub pool: PoolKey,
    /// Trading account.
    pub trader: AccountId,
    /// Which asset was spent.
    pub direction: SwapDirection,
    /// Input taken, fee included.
    pub amount_in: Amount,
    /// Part of the input retained as fee.
    pub fee: Amount,
    /// Output paid.
    pub amount_out: Amount,
    /// Reserves after the swap.
    pub reserves: ReservePair,
}

/// Receipt of a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidityWithdrawn {
    /// Pool withdrawn from.
    pub pool: PoolKey,
    /// Account whose shares were burned.
    pub owner: AccountId,
    /// Shares burned.
    pub burned: Shares,
    /// Asset A paid out.
    pub amount_a: Amount,
    /// Asset B paid out.
    pub amount_b: Amount,
    /// Reserves after the withdrawal.
    pub reserves: ReservePair,
    /// Share supply after the withdrawal.
    pub total_supply: Shares,
}
