//! Pool-share (LP token) units.

use core::fmt;

use super::Amount;
use crate::math::mul_div_floor;

/// A quantity of pool shares.
///
/// Distinct from [`Amount`] because it measures a claim on a pool's
/// reserves rather than a balance of either asset.  Shares are minted on
/// deposit and burned on withdrawal; nothing else changes the supply.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Shares(u64);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Narrows a widened share count, returning `None` above `u64::MAX`.
    #[must_use]
    pub const fn from_wide(value: u128) -> Option<Self> {
        if value > u64::MAX as u128 {
            return None;
        }
        Some(Self(value as u64))
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

    /// Pro-rata slice of `reserve` owned by these shares out of `supply`.
    ///
    /// Computes `floor(self × reserve / supply)`; `None` if `supply` is zero
    /// or the result leaves the `u64` range.
    #[must_use]
    pub const fn share_of(&self, reserve: Amount, supply: Self) -> Option<Amount> {
        match mul_div_floor(self.0, reserve.get(), supply.0) {
            Some(v) => Some(Amount::new(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
