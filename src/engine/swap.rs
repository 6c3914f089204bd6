//! Constant-product swaps.

use tracing::debug;

use crate::domain::{Amount, SwapDirection};
use crate::error::{AmmError, Result};

use super::{quote_swap, Effect, PoolContext, SwapOutcome, Transition, Wallet};

/// Swaps `amount_in` of the input asset for at least `min_out` of the other.
///
/// The fee is taken out before pricing, but the full `amount_in` is added
/// to the input reserve, so fees accrue to shareholders.  A `min_out` of
/// zero accepts any output, including zero.
///
/// Effects: transfer `amount_in` into custody, transfer the output out.
///
/// # Errors
///
/// - [`AmmError::AmountIsZero`] if `amount_in` is zero.
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::InsufficientBalance`] if the wallet holds less than
///   `amount_in` of the input asset.
/// - [`AmmError::OutputAmountTooLow`] if the output is below `min_out`.
/// - [`AmmError::MathOverflow`] if the input reserve would overflow.
pub fn swap(
    ctx: &PoolContext,
    wallet: &Wallet,
    direction: SwapDirection,
    amount_in: Amount,
    min_out: Amount,
) -> Result<Transition<SwapOutcome>> {
    let quote = quote_swap(ctx, direction, amount_in)?;
    let input = direction.input_side();
    let output = direction.output_side();
    if wallet.balance(input) < amount_in {
        return Err(AmmError::InsufficientBalance);
    }
    if quote.amount_out < min_out {
        return Err(AmmError::OutputAmountTooLow);
    }

    let reserves = ctx.reserves().exchange(input, amount_in, quote.amount_out)?;

    let key = ctx.key();
    let trader = wallet.account();
    let effects = vec![
        Effect::deposit(key, trader, ctx.asset(input), amount_in),
        Effect::payout(key, trader, ctx.asset(output), quote.amount_out),
    ];

    debug!(
        pool = %key,
        %direction,
        amount_in = %amount_in,
        fee = %quote.fee,
        amount_out = %quote.amount_out,
        min_out = %min_out,
        "swap priced"
    );

    Ok(Transition {
        receipt: SwapOutcome {
            pool: key,
            trader,
            direction,
            amount_in,
            fee: quote.fee,
            amount_out: quote.amount_out,
            reserves,
        },
        context: ctx.advance(reserves, ctx.supply()),
        effects,
    })
}
