//! The accounting engine.
//!
//! Every operation here is a pure function: it takes snapshots
//! ([`PoolContext`], [`Wallet`]) and returns a [`Transition`] holding a
//! receipt, the pool's next state and the [`Effect`]s that realise it.
//! Nothing is written until the host commits those effects.
//!
//! Operations against one pool must be serialised by the caller; the
//! engine assumes each snapshot is the latest committed state.

mod add_liquidity;
mod context;
mod create;
mod effect;
mod quote;
mod receipt;
mod swap;
mod withdraw;

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod fixtures;
#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use add_liquidity::add_liquidity;
pub use context::{PoolContext, Wallet};
pub use create::{create_pool, create_registry};
pub use effect::{Effect, Holder, SupplyChange};
pub use quote::{
    quote_deposit, quote_swap, quote_withdrawal, DepositQuote, SwapQuote, WithdrawalQuote,
};
pub use receipt::{LiquidityAdded, LiquidityWithdrawn, SwapOutcome, Transition};
pub use swap::swap;
pub use withdraw::withdraw_liquidity;
