//! Pricing and share arithmetic, shared by quotes and state transitions.
//!
//! Every function here is read-only over a [`PoolContext`].  The mutating
//! operations call the same functions, so a quote taken against a
//! snapshot is exactly what executing against that snapshot would do.
//!
//! # Formulas
//!
//! ```text
//! swap:     fee      = floor(amount_in × fee_bps / 10 000)
//!           net_in   = amount_in − fee
//!           out      = floor(reserve_out × net_in / (reserve_in + net_in))
//!
//! deposit:  bootstrap   minted = floor(√(a × b))
//!           steady      required_b = floor(a × rB / rA)
//!                       required_a = floor(b × rA / rB)
//!                       minted = min(used_a × S / rA, used_b × S / rB)
//!
//! withdraw: out_x = floor(lp × r_x / S)
//! ```

use crate::domain::{Amount, Shares, SwapDirection};
use crate::error::{AmmError, Result};
use crate::math::{isqrt, mul_div_wide, CheckedArithmetic};
use crate::state::PoolPhase;

use super::PoolContext;

/// Price of a swap against a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapQuote {
    /// Direction quoted.
    pub direction: SwapDirection,
    /// Gross input, fee included.
    pub amount_in: Amount,
    /// Fee retained by the pool.
    pub fee: Amount,
    /// Input that enters the pricing curve.
    pub net_in: Amount,
    /// Output paid to the trader.
    pub amount_out: Amount,
}

/// Allocation of a deposit against a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositQuote {
    /// Asset A actually taken from the depositor.
    pub used_a: Amount,
    /// Asset B actually taken from the depositor.
    pub used_b: Amount,
    /// Shares minted for it.
    pub minted: Shares,
}

/// Payout of a share burn against a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalQuote {
    /// Shares burned.
    pub burned: Shares,
    /// Asset A paid out.
    pub amount_a: Amount,
    /// Asset B paid out.
    pub amount_b: Amount,
}

/// Quotes a swap of `amount_in` in `direction`.
///
/// # Errors
///
/// - [`AmmError::AmountIsZero`] if `amount_in` is zero.
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::MathOverflow`] if the output cannot be represented.
pub fn quote_swap(
    ctx: &PoolContext,
    direction: SwapDirection,
    amount_in: Amount,
) -> Result<SwapQuote> {
    if amount_in.is_zero() {
        return Err(AmmError::AmountIsZero);
    }
    let reserves = ctx.reserves();
    if reserves.has_zero_side() {
        return Err(AmmError::EmptyPool);
    }
    let reserve_in = reserves.get(direction.input_side());
    let reserve_out = reserves.get(direction.output_side());

    let fee = ctx.fee().fee_on(amount_in)?;
    let net_in = amount_in.safe_sub(&fee)?;

    // reserve_in + net_in may exceed u64; keep the whole quotient in u128.
    let denominator = reserve_in.widen() + net_in.widen();
    let amount_out = Amount::from_wide(reserve_out.widen() * net_in.widen() / denominator)
        .ok_or(AmmError::MathOverflow("swap output overflow"))?;

    Ok(SwapQuote {
        direction,
        amount_in,
        fee,
        net_in,
        amount_out,
    })
}

/// Quotes a deposit of up to `amount_a` and `amount_b`.
///
/// The first deposit into an empty pool takes both amounts in full.  Later
/// deposits take the largest slice of the offer that matches the reserve
/// ratio; the rest of the offer is left with the depositor.
///
/// # Errors
///
/// - [`AmmError::AmountIsZero`] if either amount is zero.
/// - [`AmmError::InvalidPoolState`] if supply and reserves disagree about
///   whether the pool is funded.
/// - [`AmmError::LpIsZero`] if the deposit is worth less than one share.
/// - [`AmmError::MathOverflow`] if the share count exceeds `u64`.
pub fn quote_deposit(
    ctx: &PoolContext,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<DepositQuote> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::AmountIsZero);
    }
    let reserves = ctx.reserves();
    if !PoolPhase::is_consistent(&ctx.supply(), &reserves) {
        return Err(AmmError::InvalidPoolState("share supply and reserves disagree"));
    }
    let supply = ctx.supply().total_supply();

    let quote = if supply.is_zero() {
        let minted = Shares::from_wide(isqrt(amount_a.widen() * amount_b.widen()))
            .ok_or(AmmError::MathOverflow("bootstrap share overflow"))?;
        DepositQuote {
            used_a: amount_a,
            used_b: amount_b,
            minted,
        }
    } else {
        let (used_a, used_b) = balance_against_reserves(
            amount_a,
            amount_b,
            reserves.reserve_a(),
            reserves.reserve_b(),
        )?;
        let from_a = mul_div_wide(used_a.get(), supply.get(), reserves.reserve_a().get());
        let from_b = mul_div_wide(used_b.get(), supply.get(), reserves.reserve_b().get());
        let (Some(from_a), Some(from_b)) = (from_a, from_b) else {
            return Err(AmmError::MathOverflow("share computation divided by zero"));
        };
        let minted = Shares::from_wide(from_a.min(from_b))
            .ok_or(AmmError::MathOverflow("minted share overflow"))?;
        DepositQuote {
            used_a,
            used_b,
            minted,
        }
    };

    if quote.minted.is_zero() {
        return Err(AmmError::LpIsZero);
    }
    Ok(quote)
}

/// Picks the ratio-matching slice of an offer.
///
/// Two candidates are formed: spend all of A with the B it requires, or
/// spend all of B with the A it requires.  The first candidate that stays
/// within the offer on both sides wins.  When `b < required_b` the second
/// candidate always fits, because `required_a = floor(b·rA/rB) < a`.
fn balance_against_reserves(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount)> {
    let overflow = AmmError::MathOverflow("ratio computation overflow");
    let required_b =
        mul_div_wide(amount_a.get(), reserve_b.get(), reserve_a.get()).ok_or(overflow)?;
    let required_a =
        mul_div_wide(amount_b.get(), reserve_a.get(), reserve_b.get()).ok_or(overflow)?;

    let candidates = [
        (amount_a.widen(), required_b),
        (required_a, amount_b.widen()),
    ];
    let (used_a, used_b) = candidates
        .into_iter()
        .find(|(a, b)| *a <= amount_a.widen() && *b <= amount_b.widen())
        .ok_or(overflow)?;

    // Both sides are bounded by the offer, so narrowing cannot fail.
    match (Amount::from_wide(used_a), Amount::from_wide(used_b)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(overflow),
    }
}

/// Quotes burning `lp_amount` shares.
///
/// # Errors
///
/// - [`AmmError::LpIsZero`] if `lp_amount` is zero.
/// - [`AmmError::LpSupplyIsZero`] if no shares are outstanding.
/// - [`AmmError::InsufficientLpBalance`] if `lp_amount` exceeds the supply.
/// - [`AmmError::MathOverflow`] if a payout cannot be represented.
pub fn quote_withdrawal(ctx: &PoolContext, lp_amount: Shares) -> Result<WithdrawalQuote> {
    if lp_amount.is_zero() {
        return Err(AmmError::LpIsZero);
    }
    let supply = ctx.supply().total_supply();
    if supply.is_zero() {
        return Err(AmmError::LpSupplyIsZero);
    }
    if lp_amount > supply {
        return Err(AmmError::InsufficientLpBalance);
    }
    let reserves = ctx.reserves();
    let overflow = AmmError::MathOverflow("withdrawal payout overflow");
    let amount_a = lp_amount.share_of(reserves.reserve_a(), supply).ok_or(overflow)?;
    let amount_b = lp_amount.share_of(reserves.reserve_b(), supply).ok_or(overflow)?;
    Ok(WithdrawalQuote {
        burned: lp_amount,
        amount_a,
        amount_b,
    })
}
