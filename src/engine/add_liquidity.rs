//! Deposits into a pool.

use tracing::debug;

use crate::domain::{Amount, Side};
use crate::error::{AmmError, Result};
use crate::state::PoolPhase;

use super::{quote_deposit, Effect, LiquidityAdded, PoolContext, SupplyChange, Transition, Wallet};

/// Deposits up to `amount_a` and `amount_b` from `wallet` into the pool.
///
/// Balances are checked against the requested amounts, not the amounts
/// eventually used.  See [`quote_deposit`] for how the used amounts and
/// minted shares are derived.
///
/// Effects: transfer `used_a`, transfer `used_b`, mint `minted`.
///
/// # Errors
///
/// - [`AmmError::AmountIsZero`] if either amount is zero.
/// - [`AmmError::InsufficientBalance`] if the wallet holds less than
///   either requested amount.
/// - [`AmmError::InvalidPoolState`] if supply and reserves disagree.
/// - [`AmmError::LpIsZero`] if no share would be minted.
/// - [`AmmError::MathOverflow`] if reserves or supply would overflow.
pub fn add_liquidity(
    ctx: &PoolContext,
    wallet: &Wallet,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<Transition<LiquidityAdded>> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::AmountIsZero);
    }
    if wallet.balance(Side::A) < amount_a || wallet.balance(Side::B) < amount_b {
        return Err(AmmError::InsufficientBalance);
    }

    let quote = quote_deposit(ctx, amount_a, amount_b)?;
    let reserves = ctx.reserves().deposit(quote.used_a, quote.used_b)?;
    let supply = ctx.supply().mint(quote.minted)?;

    let key = ctx.key();
    let depositor = wallet.account();
    let bootstrap = ctx.phase() == PoolPhase::Empty;
    let effects = vec![
        Effect::deposit(key, depositor, ctx.asset(Side::A), quote.used_a),
        Effect::deposit(key, depositor, ctx.asset(Side::B), quote.used_b),
        Effect::Supply {
            pool: key,
            account: depositor,
            amount: quote.minted,
            change: SupplyChange::Mint,
        },
    ];

    debug!(
        pool = %key,
        bootstrap,
        requested_a = %amount_a,
        requested_b = %amount_b,
        used_a = %quote.used_a,
        used_b = %quote.used_b,
        minted = %quote.minted,
        "liquidity added"
    );

    Ok(Transition {
        receipt: LiquidityAdded {
            pool: key,
            depositor,
            used_a: quote.used_a,
            used_b: quote.used_b,
            minted: quote.minted,
            reserves,
            total_supply: supply.total_supply(),
        },
        context: ctx.advance(reserves, supply),
        effects,
    })
}
