//! Outstanding pool-share supply.

use core::fmt;

use crate::domain::Shares;
use crate::error::Result;
use crate::math::CheckedArithmetic;

/// Total supply of a pool's shares.
///
/// Starts at zero when the pool is created.  Only deposits mint and only
/// withdrawals burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShareLedger {
    total_supply: Shares,
}

impl ShareLedger {
    /// A freshly created pool's supply.
    pub const EMPTY: Self = Self {
        total_supply: Shares::ZERO,
    };

    /// Wraps an observed supply value.
    #[must_use]
    pub const fn new(total_supply: Shares) -> Self {
        Self { total_supply }
    }

    /// Returns the outstanding supply.
    #[must_use]
    pub const fn total_supply(&self) -> Shares {
        self.total_supply
    }

    /// `true` while no shares are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_supply.is_zero()
    }

    /// Supply after minting `amount`.
    ///
    /// # Errors
    ///
    /// Returns `MathOverflow` if the supply would exceed `u64::MAX`.
    pub fn mint(&self, amount: Shares) -> Result<Self> {
        Ok(Self {
            total_supply: self.total_supply.safe_add(&amount)?,
        })
    }

    /// Supply after burning `amount`.
    ///
    /// # Errors
    ///
    /// Returns `MathOverflow` if `amount` exceeds the supply.
    pub fn burn(&self, amount: Shares) -> Result<Self> {
        Ok(Self {
            total_supply: self.total_supply.safe_sub(&amount)?,
        })
    }
}

impl fmt::Display for ShareLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "supply={}", self.total_supply)
    }
}
