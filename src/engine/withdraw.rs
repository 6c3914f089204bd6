//! Share redemption.

use tracing::debug;

use crate::domain::{Shares, Side};
use crate::error::{AmmError, Result};

use super::{
    quote_withdrawal, Effect, LiquidityWithdrawn, PoolContext, SupplyChange, Transition, Wallet,
};

/// Burns `lp_amount` of the wallet's shares for a pro-rata slice of both
/// reserves.
///
/// There is no minimum-output guard: the owner receives whatever the
/// reserves are worth at execution.
///
/// Effects: burn `lp_amount`, transfer `amount_a` out, transfer `amount_b`
/// out.
///
/// # Errors
///
/// - [`AmmError::LpIsZero`] if `lp_amount` is zero.
/// - [`AmmError::LpSupplyIsZero`] if no shares are outstanding.
/// - [`AmmError::InsufficientLpBalance`] if the wallet holds fewer shares.
/// - [`AmmError::MathOverflow`] if a payout exceeds its reserve.
pub fn withdraw_liquidity(
    ctx: &PoolContext,
    wallet: &Wallet,
    lp_amount: Shares,
) -> Result<Transition<LiquidityWithdrawn>> {
    if lp_amount.is_zero() {
        return Err(AmmError::LpIsZero);
    }
    if ctx.supply().is_empty() {
        return Err(AmmError::LpSupplyIsZero);
    }
    if wallet.shares() < lp_amount {
        return Err(AmmError::InsufficientLpBalance);
    }

    let quote = quote_withdrawal(ctx, lp_amount)?;
    let reserves = ctx.reserves().withdraw(quote.amount_a, quote.amount_b)?;
    let supply = ctx.supply().burn(lp_amount)?;

    let key = ctx.key();
    let owner = wallet.account();
    let effects = vec![
        Effect::Supply {
            pool: key,
            account: owner,
            amount: lp_amount,
            change: SupplyChange::Burn,
        },
        Effect::payout(key, owner, ctx.asset(Side::A), quote.amount_a),
        Effect::payout(key, owner, ctx.asset(Side::B), quote.amount_b),
    ];

    debug!(
        pool = %key,
        burned = %lp_amount,
        amount_a = %quote.amount_a,
        amount_b = %quote.amount_b,
        remaining_supply = %supply.total_supply(),
        "liquidity withdrawn"
    );

    Ok(Transition {
        receipt: LiquidityWithdrawn {
            pool: key,
            owner,
            burned: lp_amount,
            amount_a: quote.amount_a,
            amount_b: quote.amount_b,
            reserves,
            total_supply: supply.total_supply(),
        },
        context: ctx.advance(reserves, supply),
        effects,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Amount;
    use crate::engine::fixtures::{pool, wallet, ALICE};
    use crate::state::{PoolPhase, ReservePair};

    #[test]
    fn burn_comes_first_then_payouts() {
        let ctx = pool(0, 2_000, 4_000, 1_000);
        let Ok(t) = withdraw_liquidity(&ctx, &wallet(0, 0, 250), Shares::new(250)) else {
            panic!("expected Ok");
        };
        assert_eq!(t.receipt.amount_a, Amount::new(500));
        assert_eq!(t.receipt.amount_b, Amount::new(1_000));
        assert_eq!(t.receipt.total_supply, Shares::new(750));
        assert_eq!(
            t.effects.first(),
            Some(&Effect::Supply {
                pool: ctx.key(),
                account: ALICE,
                amount: Shares::new(250),
                change: SupplyChange::Burn,
            })
        );
        assert_eq!(t.effects.len(), 3);
    }

    #[test]
    fn last_share_returns_pool_to_empty() {
        let ctx = pool(0, 2_000, 4_000, 1_000);
        let Ok(t) = withdraw_liquidity(&ctx, &wallet(0, 0, 1_000), Shares::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(t.context.reserves(), ReservePair::EMPTY);
        assert_eq!(t.context.phase(), PoolPhase::Empty);
    }

    #[test]
    fn guard_order() {
        assert_eq!(
            withdraw_liquidity(&pool(0, 0, 0, 0), &wallet(0, 0, 0), Shares::ZERO),
            Err(AmmError::LpIsZero)
        );
        assert_eq!(
            withdraw_liquidity(&pool(0, 0, 0, 0), &wallet(0, 0, 0), Shares::new(1)),
            Err(AmmError::LpSupplyIsZero)
        );
        assert_eq!(
            withdraw_liquidity(&pool(0, 10, 10, 10), &wallet(0, 0, 4), Shares::new(5)),
            Err(AmmError::InsufficientLpBalance)
        );
    }
}
