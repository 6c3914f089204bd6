//! Raw token amount with checked arithmetic.

use core::fmt;

use crate::math::mul_div_floor;

/// A raw token amount in the asset's smallest unit.
///
/// `Amount` never interprets decimals: a deposit of "100 tokens" with nine
/// decimals is `Amount::new(100 * 10u64.pow(9))`.  Every `u64` value is a
/// valid amount.
///
/// Arithmetic methods are checked and return `None` instead of wrapping or
/// panicking.  Products are taken in a widened `u128` domain by
/// [`checked_mul_div`](Self::checked_mul_div).
///
/// # Examples
///
/// ```
/// use pairpool::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(a.checked_mul_div(b, Amount::new(50)), Some(Amount::new(400)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Amount` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the value widened to `u128` for intermediate products.
    #[must_use]
    pub const fn widen(&self) -> u128 {
        self.0 as u128
    }

    /// Narrows a widened value back into an `Amount`.
    ///
    /// Returns `None` if `value` exceeds `u64::MAX`.
    #[must_use]
    pub const fn from_wide(value: u128) -> Option<Self> {
        if value > u64::MAX as u128 {
            return None;
        }
        Some(Self(value as u64))
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `floor(self × numerator / denominator)` with a `u128`
    /// intermediate.
    ///
    /// Returns `None` if `denominator` is zero or the quotient does not fit
    /// in a `u64`.
    #[must_use]
    pub const fn checked_mul_div(&self, numerator: Self, denominator: Self) -> Option<Self> {
        match mul_div_floor(self.0, numerator.0, denominator.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u64::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(
            Amount::new(1).checked_add(&Amount::new(2)),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
        assert_eq!(Amount::new(5).checked_sub(&Amount::new(5)), Some(Amount::ZERO));
    }

    #[test]
    fn widen_and_narrow() {
        assert_eq!(Amount::MAX.widen(), u128::from(u64::MAX));
        assert_eq!(Amount::from_wide(u128::from(u64::MAX)), Some(Amount::MAX));
        assert_eq!(Amount::from_wide(u128::from(u64::MAX) + 1), None);
    }

    #[test]
    fn mul_div_uses_wide_intermediate() {
        // MAX * MAX would overflow u64, but the quotient fits.
        let got = Amount::MAX.checked_mul_div(Amount::MAX, Amount::MAX);
        assert_eq!(got, Some(Amount::MAX));
    }

    #[test]
    fn mul_div_result_too_large() {
        let got = Amount::MAX.checked_mul_div(Amount::new(2), Amount::new(1));
        assert_eq!(got, None);
    }

    #[test]
    fn mul_div_by_zero() {
        let got = Amount::new(10).checked_mul_div(Amount::new(2), Amount::ZERO);
        assert_eq!(got, None);
    }

    #[test]
    fn mul_div_floors() {
        let a = Amount::new(10);
        assert_eq!(
            a.checked_mul_div(Amount::new(1), Amount::new(3)),
            Some(Amount::new(3))
        );
        assert_eq!(
            a.checked_mul_div(Amount::new(2), Amount::new(3)),
            Some(Amount::new(6))
        );
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
    }
}
