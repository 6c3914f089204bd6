//! Swap fee rate built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints, MAX_FEE_BPS};
use crate::error::{AmmError, Result};

/// A validated swap fee rate: strictly below 10 000 bp.
///
/// A 100% fee would leave nothing to price, so it is rejected at
/// construction and every `FeeRate` in the system is usable.  With the
/// `serde` feature, deserialisation goes through the same check.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Amount, BasisPoints, FeeRate};
///
/// let fee = FeeRate::new(BasisPoints::new(1_000)).expect("below 100%");
/// assert_eq!(fee.fee_on(Amount::new(1_005)).expect("no overflow"), Amount::new(100));
/// assert!(FeeRate::new(BasisPoints::new(10_000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BasisPoints", into = "BasisPoints")
)]
pub struct FeeRate(BasisPoints);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// Creates a fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `bps >= 10 000`.
    pub const fn new(bps: BasisPoints) -> Result<Self> {
        if !bps.is_below_max() {
            return Err(AmmError::InvalidFee);
        }
        Ok(Self(bps))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Fee charged on `amount_in`: `floor(amount_in × bps / 10 000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MathOverflow`] if the product cannot be narrowed;
    /// unreachable for a valid rate since the fee never exceeds the input.
    pub const fn fee_on(&self, amount_in: Amount) -> Result<Amount> {
        match amount_in.checked_mul_div(
            Amount::new(self.0.get() as u64),
            Amount::new(MAX_FEE_BPS as u64),
        ) {
            Some(fee) => Ok(fee),
            None => Err(AmmError::MathOverflow("fee calculation overflow")),
        }
    }
}

impl TryFrom<u16> for FeeRate {
    type Error = AmmError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(BasisPoints::new(value))
    }
}

impl TryFrom<BasisPoints> for FeeRate {
    type Error = AmmError;

    fn try_from(value: BasisPoints) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FeeRate> for BasisPoints {
    fn from(rate: FeeRate) -> Self {
        rate.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeRate({})", self.0)
    }
}
