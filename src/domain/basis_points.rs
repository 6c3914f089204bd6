//! Basis-point representation for fee rates.

use core::fmt;

/// Basis-point denominator: 10 000 bp = 100%.
pub const MAX_FEE_BPS: u16 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%).
///
/// All `u16` values can be represented; whether a value is acceptable as
/// a swap fee is decided by [`FeeRate`](super::FeeRate).
///
/// # Examples
///
/// ```
/// use pairpool::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert!(bp.is_below_max());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_FEE_BPS);

    /// Creates a new `BasisPoints` from a raw `u16` value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying `u16` value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the value is strictly below 100%.
    #[must_use]
    pub const fn is_below_max(&self) -> bool {
        self.0 < MAX_FEE_BPS
    }

    /// Converts to a floating-point percentage, e.g. 30 bp → 0.30.
    ///
    /// Display only; never used in accounting.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
