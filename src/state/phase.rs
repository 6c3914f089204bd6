//! Lifecycle phase of a pool.

use core::fmt;

use super::{ReservePair, ShareLedger};

/// Where a pool is in its lifecycle.
///
/// `Uninitialized → Empty` on pool creation, `Empty → Funded` on the first
/// deposit, `Funded → Empty` when a withdrawal burns the last share.
/// Swaps are accepted only in `Funded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolPhase {
    /// No pool record exists for the key.
    Uninitialized,
    /// The pool exists with zero share supply.
    Empty,
    /// Shares are outstanding.
    Funded,
}

impl PoolPhase {
    /// Derives the phase of an existing pool from its share supply.
    #[must_use]
    pub const fn of(supply: &ShareLedger) -> Self {
        if supply.is_empty() {
            Self::Empty
        } else {
            Self::Funded
        }
    }

    /// `true` if supply and reserves agree: no supply means no reserves,
    /// outstanding supply means both reserves are positive.
    #[must_use]
    pub const fn is_consistent(supply: &ShareLedger, reserves: &ReservePair) -> bool {
        match Self::of(supply) {
            Self::Empty => reserves.is_empty(),
            Self::Funded | Self::Uninitialized => !reserves.has_zero_side(),
        }
    }
}

impl fmt::Display for PoolPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Empty => write!(f, "empty"),
            Self::Funded => write!(f, "funded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Shares};

    #[test]
    fn phase_follows_supply() {
        assert_eq!(PoolPhase::of(&ShareLedger::EMPTY), PoolPhase::Empty);
        assert_eq!(
            PoolPhase::of(&ShareLedger::new(Shares::new(1))),
            PoolPhase::Funded
        );
    }

    #[test]
    fn consistency() {
        let funded = ShareLedger::new(Shares::new(10));
        let full = ReservePair::new(Amount::new(5), Amount::new(5));
        let half = ReservePair::new(Amount::new(5), Amount::ZERO);
        assert!(PoolPhase::is_consistent(&ShareLedger::EMPTY, &ReservePair::EMPTY));
        assert!(!PoolPhase::is_consistent(&ShareLedger::EMPTY, &full));
        assert!(PoolPhase::is_consistent(&funded, &full));
        assert!(!PoolPhase::is_consistent(&funded, &half));
    }

    #[test]
    fn display() {
        assert_eq!(PoolPhase::Funded.to_string(), "funded");
    }
}
