//! The two asset balances held in a pool's custody.

use core::fmt;

use crate::domain::{Amount, Side};
use crate::error::Result;
use crate::math::CheckedArithmetic;

/// Reserve balances of a pool, read from the ledger's custody accounts.
///
/// Values are snapshots: the engine never keeps a `ReservePair` across
/// operations.  Updates return a new pair and fail with
/// [`AmmError::MathOverflow`](crate::error::AmmError::MathOverflow) rather
/// than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservePair {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl ReservePair {
    /// Both reserves zero.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
    };

    /// Creates a reserve pair.
    #[must_use]
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Reserve on the given side.
    #[must_use]
    pub const fn get(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// `true` if at least one reserve is zero.
    #[must_use]
    pub const fn has_zero_side(&self) -> bool {
        self.reserve_a.is_zero() || self.reserve_b.is_zero()
    }

    /// The constant-product `reserve_a × reserve_b`, exact in `u128`.
    #[must_use]
    pub const fn product(&self) -> u128 {
        self.reserve_a.widen() * self.reserve_b.widen()
    }

    /// Adds `amount_a` and `amount_b` to the respective reserves.
    ///
    /// # Errors
    ///
    /// Returns `MathOverflow` if either reserve would exceed `u64::MAX`.
    pub fn deposit(&self, amount_a: Amount, amount_b: Amount) -> Result<Self> {
        Ok(Self {
            reserve_a: self.reserve_a.safe_add(&amount_a)?,
            reserve_b: self.reserve_b.safe_add(&amount_b)?,
        })
    }

    /// Subtracts `amount_a` and `amount_b` from the respective reserves.
    ///
    /// # Errors
    ///
    /// Returns `MathOverflow` if either amount exceeds its reserve.
    pub fn withdraw(&self, amount_a: Amount, amount_b: Amount) -> Result<Self> {
        Ok(Self {
            reserve_a: self.reserve_a.safe_sub(&amount_a)?,
            reserve_b: self.reserve_b.safe_sub(&amount_b)?,
        })
    }

    /// Credits `amount_in` on side `input` and debits `amount_out` from the
    /// other side.
    ///
    /// # Errors
    ///
    /// Returns `MathOverflow` if the credit overflows or the debit exceeds
    /// the output reserve.
    pub fn exchange(&self, input: Side, amount_in: Amount, amount_out: Amount) -> Result<Self> {
        match input {
            Side::A => self.deposit(amount_in, Amount::ZERO)?.withdraw(Amount::ZERO, amount_out),
            Side::B => self.deposit(Amount::ZERO, amount_in)?.withdraw(amount_out, Amount::ZERO),
        }
    }
}

impl fmt::Display for ReservePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.reserve_a, self.reserve_b)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::AmmError;

    fn pair(a: u64, b: u64) -> ReservePair {
        ReservePair::new(Amount::new(a), Amount::new(b))
    }

    #[test]
    fn emptiness() {
        assert!(ReservePair::EMPTY.is_empty());
        assert!(pair(0, 5).has_zero_side());
        assert!(!pair(0, 5).is_empty());
        assert!(!pair(1, 1).has_zero_side());
    }

    #[test]
    fn product_is_widened() {
        let r = pair(u64::MAX, u64::MAX);
        let max = u128::from(u64::MAX);
        assert_eq!(r.product(), max * max);
    }

    #[test]
    fn get_by_side() {
        let r = pair(3, 9);
        assert_eq!(r.get(Side::A), Amount::new(3));
        assert_eq!(r.get(Side::B), Amount::new(9));
    }

    #[test]
    fn deposit_and_withdraw() {
        let Ok(r) = pair(10, 20).deposit(Amount::new(5), Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, pair(15, 30));
        let Ok(r) = r.withdraw(Amount::new(15), Amount::new(30)) else {
            panic!("expected Ok");
        };
        assert!(r.is_empty());
    }

    #[test]
    fn deposit_overflow() {
        let Err(AmmError::MathOverflow(_)) = pair(u64::MAX, 0).deposit(Amount::new(1), Amount::ZERO)
        else {
            panic!("expected MathOverflow");
        };
    }

    #[test]
    fn exchange_moves_both_sides() {
        let Ok(r) = pair(100, 100).exchange(Side::B, Amount::new(10), Amount::new(9)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, pair(91, 110));
    }

    #[test]
    fn exchange_cannot_overdraw() {
        assert!(pair(100, 5).exchange(Side::A, Amount::new(1), Amount::new(6)).is_err());
    }
}
