//! Property-based checks of the pool arithmetic.
//!
//! 1. **Invariant preservation**: `rA × rB` never decreases on a swap.
//! 2. **Fee accrual**: with a positive fee a round trip loses value and
//!    strictly grows the product.
//! 3. **Ratio balancing**: a deposit never uses more than offered and
//!    never mints more than the used amounts are worth.
//! 4. **Round-trip conservation**: deposit then withdraw returns at most
//!    what was deposited, within a rounding slack.
//! 5. **Full drain**: burning the whole supply empties both reserves.

use proptest::prelude::*;

use super::fixtures::{pool, wallet};
use super::{add_liquidity, quote_deposit, swap, withdraw_liquidity, PoolContext};
use crate::domain::{Amount, Shares, SwapDirection};
use crate::state::ReservePair;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=1_000_000_000_000u64
}

fn fee_strategy() -> impl Strategy<Value = u16> {
    0u16..=3_000u16
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_is_a)
}

/// A funded pool whose supply was bootstrapped from its own reserves.
fn funded(fee: u16, ra: u64, rb: u64) -> PoolContext {
    let Ok(q) = quote_deposit(&pool(fee, 0, 0, 0), Amount::new(ra), Amount::new(rb)) else {
        panic!("bootstrap quote");
    };
    pool(fee, ra, rb, q.minted.get())
}

fn swap_all(
    ctx: &PoolContext,
    direction: SwapDirection,
    amount_in: u64,
) -> Option<(PoolContext, u64)> {
    let w = wallet(amount_in, amount_in, 0);
    let t = swap(ctx, &w, direction, Amount::new(amount_in), Amount::ZERO).ok()?;
    Some((t.context, t.receipt.amount_out.get()))
}

// ---------------------------------------------------------------------------
// Property 1: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_decreases_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        direction in direction_strategy(),
        amount_in in 1u64..=1_000_000_000_000u64,
    ) {
        let ctx = funded(fee, ra, rb);
        let Some((after, out)) = swap_all(&ctx, direction, amount_in) else {
            return Ok(());
        };
        prop_assert!(after.reserves().product() >= ctx.reserves().product());
        prop_assert!(out < ctx.reserves().get(direction.output_side()).get());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Fee accrual
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_swap_pays_the_pool(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 10u64..=1_000_000_000u64,
    ) {
        let ctx = funded(1_000, ra, rb);
        let Some((mid, got_b)) = swap_all(&ctx, SwapDirection::AToB, amount_in) else {
            return Ok(());
        };
        prop_assert!(mid.reserves().product() > ctx.reserves().product());
        if got_b == 0 {
            return Ok(());
        }
        let Some((end, got_a)) = swap_all(&mid, SwapDirection::BToA, got_b) else {
            return Ok(());
        };
        prop_assert!(got_a < amount_in, "round trip returned {got_a} >= {amount_in}");
        prop_assert!(end.reserves().product() > mid.reserves().product() || got_b < 10);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Ratio balancing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_is_bounded_by_offer_and_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u64..=1_000_000_000_000u64,
        b in 1u64..=1_000_000_000_000u64,
    ) {
        let ctx = funded(0, ra, rb);
        let Ok(q) = quote_deposit(&ctx, Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        let supply = u128::from(ctx.supply().total_supply().get());
        prop_assert!(q.used_a.get() <= a);
        prop_assert!(q.used_b.get() <= b);
        prop_assert!(q.used_a.get() == a || q.used_b.get() == b);
        let minted = u128::from(q.minted.get());
        prop_assert!(minted * u128::from(ra) <= q.used_a.widen() * supply);
        prop_assert!(minted * u128::from(rb) <= q.used_b.widen() * supply);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Round-trip conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_then_withdraw_never_gains(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u64..=1_000_000_000_000u64,
        b in 1u64..=1_000_000_000_000u64,
    ) {
        let ctx = funded(0, ra, rb);
        let Ok(added) = add_liquidity(&ctx, &wallet(a, b, 0), Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        let minted = added.receipt.minted;
        let holder = wallet(0, 0, minted.get());
        let Ok(removed) = withdraw_liquidity(&added.context, &holder, minted) else {
            return Err(TestCaseError::fail("withdrawal of freshly minted shares failed"));
        };
        let back_a = removed.receipt.amount_a;
        let back_b = removed.receipt.amount_b;
        prop_assert!(back_a <= added.receipt.used_a);
        prop_assert!(back_b <= added.receipt.used_b);

        // Loss is bounded by one unit of the other asset, one share, and
        // two floors.
        let supply = ctx.supply().total_supply().get();
        let slack_a = ra.div_ceil(rb) + ra.div_ceil(supply) + 2;
        let slack_b = rb.div_ceil(ra) + rb.div_ceil(supply) + 2;
        prop_assert!(added.receipt.used_a.get() - back_a.get() <= slack_a);
        prop_assert!(added.receipt.used_b.get() - back_b.get() <= slack_b);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Full drain
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_burning_all_shares_empties_pool(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        direction in direction_strategy(),
        amount_in in 1u64..=1_000_000u64,
    ) {
        let ctx = funded(30, ra, rb);
        let ctx = swap_all(&ctx, direction, amount_in).map_or(ctx, |(after, _)| after);
        let supply = ctx.supply().total_supply();
        let Ok(t) = withdraw_liquidity(&ctx, &wallet(0, 0, supply.get()), supply) else {
            return Err(TestCaseError::fail("full withdrawal failed"));
        };
        prop_assert_eq!(t.context.reserves(), ReservePair::EMPTY);
        prop_assert_eq!(t.context.supply().total_supply(), Shares::ZERO);
    }
}
