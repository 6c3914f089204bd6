//! Administrative record shared by every pool of a market family.

use core::fmt;

use crate::domain::{AccountId, FeeRate, RegistryIndex};

/// One registry entry: owner, numeric identifier and swap fee.
///
/// Immutable once created.  The fee is stored as a validated [`FeeRate`],
/// so a `RegistryEntry` can never carry a fee of 100% or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryEntry {
    admin: AccountId,
    index: RegistryIndex,
    fee: FeeRate,
}

impl RegistryEntry {
    /// Creates a registry entry.
    #[must_use]
    pub const fn new(admin: AccountId, index: RegistryIndex, fee: FeeRate) -> Self {
        Self { admin, index, fee }
    }

    /// Returns the administrator account.
    #[must_use]
    pub const fn admin(&self) -> AccountId {
        self.admin
    }

    /// Returns the unique index.
    #[must_use]
    pub const fn index(&self) -> RegistryIndex {
        self.index
    }

    /// Returns the swap fee applied by every pool under this entry.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }
}

impl fmt::Display for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registry({}, admin={}, {})", self.index, self.admin, self.fee)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::BasisPoints;

    #[test]
    fn accessors() {
        let admin = AccountId::from_bytes([1u8; 32]);
        let Ok(fee) = FeeRate::new(BasisPoints::new(25)) else {
            panic!("valid fee");
        };
        let entry = RegistryEntry::new(admin, RegistryIndex::new(3), fee);
        assert_eq!(entry.admin(), admin);
        assert_eq!(entry.index(), RegistryIndex::new(3));
        assert_eq!(entry.fee().basis_points().get(), 25);
    }

    #[test]
    fn display() {
        let entry = RegistryEntry::new(
            AccountId::from_bytes([0xff; 32]),
            RegistryIndex::new(7),
            FeeRate::ZERO,
        );
        assert_eq!(entry.to_string(), "Registry(#7, admin=ffffffff…, FeeRate(0bp))");
    }
}
