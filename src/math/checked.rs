//! Fallible arithmetic over the engine's quantity newtypes.
//!
//! The domain types expose `Option`-returning `checked_*` methods;
//! [`CheckedArithmetic`] lifts them into [`Result`] so engine code can use
//! `?` and every overflow surfaces as [`AmmError::MathOverflow`].
//!
//! # Examples
//!
//! ```
//! use pairpool::domain::Amount;
//! use pairpool::error::AmmError;
//! use pairpool::math::CheckedArithmetic;
//!
//! assert_eq!(Amount::new(1).safe_add(&Amount::new(2)), Ok(Amount::new(3)));
//! assert!(matches!(
//!     Amount::MAX.safe_add(&Amount::new(1)),
//!     Err(AmmError::MathOverflow(_))
//! ));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::{AmmError, Result};

/// Checked addition and subtraction that fail with
/// [`AmmError::MathOverflow`] instead of wrapping.
///
/// Implementations never saturate.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MathOverflow`] if the sum is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MathOverflow`] if `other` exceeds `self`.
    fn safe_sub(&self, other: &Self) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(AmmError::MathOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(AmmError::MathOverflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(AmmError::MathOverflow("share supply overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(AmmError::MathOverflow("share supply underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Amount -------------------------------------------------------------

    #[test]
    fn amount_add_ok() {
        let Ok(r) = Amount::new(100).safe_add(&Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::new(300));
    }

    #[test]
    fn amount_add_overflow() {
        let Err(AmmError::MathOverflow(ctx)) = Amount::MAX.safe_add(&Amount::new(1)) else {
            panic!("expected MathOverflow");
        };
        assert_eq!(ctx, "amount addition overflow");
    }

    #[test]
    fn amount_sub_to_zero() {
        assert_eq!(Amount::new(42).safe_sub(&Amount::new(42)), Ok(Amount::ZERO));
    }

    #[test]
    fn amount_sub_underflow() {
        let Err(AmmError::MathOverflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
            panic!("expected MathOverflow");
        };
    }

    // -- Shares -------------------------------------------------------------

    #[test]
    fn shares_add_and_sub() {
        let Ok(r) = Shares::new(10)
            .safe_add(&Shares::new(5))
            .and_then(|s| s.safe_sub(&Shares::new(3)))
        else {
            panic!("expected Ok");
        };
        assert_eq!(r, Shares::new(12));
    }

    #[test]
    fn shares_overflow_and_underflow() {
        assert!(Shares::new(u64::MAX).safe_add(&Shares::new(1)).is_err());
        assert!(Shares::ZERO.safe_sub(&Shares::new(1)).is_err());
    }
}
