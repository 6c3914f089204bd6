//! Widened multiply-then-divide.
//!
//! All ratio computations in the engine have the shape `a × b / c` over
//! `u64` operands.  The product is formed in `u128`, where it cannot
//! overflow, and only the quotient is narrowed back.  Every quotient is
//! floored, so the pool never pays out a fractional unit it does not hold.
//!
//! # Examples
//!
//! ```
//! use pairpool::math::{mul_div_floor, mul_div_wide};
//!
//! assert_eq!(mul_div_floor(10, 1, 3), Some(3));
//! assert_eq!(mul_div_floor(u64::MAX, u64::MAX, u64::MAX), Some(u64::MAX));
//! assert_eq!(mul_div_floor(u64::MAX, 2, 1), None);
//! assert_eq!(mul_div_wide(u64::MAX, 2, 1), Some(2 * u128::from(u64::MAX)));
//! ```

/// `floor(a × b / c)` as a widened value.
///
/// Returns `None` only when `c` is zero.  The quotient may exceed
/// `u64::MAX`; callers that compare before narrowing use this form.
#[must_use]
pub const fn mul_div_wide(a: u64, b: u64, c: u64) -> Option<u128> {
    if c == 0 {
        return None;
    }
    Some((a as u128 * b as u128) / c as u128)
}

/// `floor(a × b / c)` narrowed to `u64`.
///
/// Returns `None` if `c` is zero or the quotient does not fit in a `u64`.
#[must_use]
pub const fn mul_div_floor(a: u64, b: u64, c: u64) -> Option<u64> {
    match mul_div_wide(a, b, c) {
        Some(q) if q <= u64::MAX as u128 => Some(q as u64),
        _ => None,
    }
}
