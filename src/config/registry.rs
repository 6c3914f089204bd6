//! Parameters for creating a registry entry.

use crate::domain::{AccountId, BasisPoints, FeeRate, RegistryIndex};
use crate::error::Result;

/// Request to create a [`RegistryEntry`](crate::state::RegistryEntry).
///
/// Holds the raw fee as submitted; [`validate`](Self::validate) decides
/// whether it is acceptable.  Construction itself never fails so that a
/// host can decode requests first and reject them with a typed error later.
///
/// # Validation
///
/// - `fee` must be strictly below 10 000 bp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryConfig {
    admin: AccountId,
    fee: BasisPoints,
    index: RegistryIndex,
}

impl RegistryConfig {
    /// Creates a registry request.
    #[must_use]
    pub const fn new(admin: AccountId, fee: BasisPoints, index: RegistryIndex) -> Self {
        Self { admin, fee, index }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`](crate::error::AmmError::InvalidFee)
    /// if the fee is 10 000 bp or more.
    pub fn validate(&self) -> Result<()> {
        self.fee_rate().map(|_| ())
    }

    /// Returns the fee as a validated [`FeeRate`].
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn fee_rate(&self) -> Result<FeeRate> {
        FeeRate::new(self.fee)
    }

    /// Returns the administrator account.
    #[must_use]
    pub const fn admin(&self) -> AccountId {
        self.admin
    }

    /// Returns the requested fee in basis points.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Returns the requested index.
    #[must_use]
    pub const fn index(&self) -> RegistryIndex {
        self.index
    }
}
