//! Ordered pair of distinct assets.

use core::fmt;

use super::AssetId;
use crate::error::{AmmError, Result};

/// One side of a two-asset pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The pool's first asset.
    A,
    /// The pool's second asset.
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// An ordered pair of two different assets.
///
/// Unlike a canonically sorted pair, the order given at pool creation is
/// kept: `(X, Y)` and `(Y, X)` are distinct pools.  Only equality of the two
/// assets is rejected, including when a pair is deserialised.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair, Side};
///
/// let x = AssetId::from_bytes([2u8; 32]);
/// let y = AssetId::from_bytes([1u8; 32]);
/// let pair = AssetPair::new(x, y).expect("distinct assets");
/// assert_eq!(pair.asset_a(), x);
/// assert_eq!(pair.side_of(&y), Some(Side::B));
/// assert!(AssetPair::new(x, x).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedPair")
)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a pair, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both assets are the same.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self> {
        if asset_a == asset_b {
            return Err(AmmError::IdenticalAssets);
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns the asset on the given side.
    #[must_use]
    pub const fn asset(&self, side: Side) -> AssetId {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }

    /// Returns which side `asset` is on, if it belongs to the pair.
    #[must_use]
    pub fn side_of(&self, asset: &AssetId) -> Option<Side> {
        if *asset == self.asset_a {
            Some(Side::A)
        } else if *asset == self.asset_b {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Returns `true` if `asset` is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.side_of(asset).is_some()
    }
}

/// Wire form of an [`AssetPair`] before the distinctness check.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedPair> for AssetPair {
    type Error = AmmError;

    fn try_from(raw: UncheckedPair) -> Result<Self> {
        Self::new(raw.asset_a, raw.asset_b)
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.asset_a, self.asset_b)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    #[test]
    fn order_is_preserved() {
        let Ok(pair) = AssetPair::new(asset(9), asset(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.asset_a(), asset(9));
        assert_eq!(pair.asset_b(), asset(1));
    }

    #[test]
    fn reversed_pair_is_a_different_pair() {
        let (Ok(ab), Ok(ba)) = (
            AssetPair::new(asset(1), asset(2)),
            AssetPair::new(asset(2), asset(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_ne!(ab, ba);
    }

    #[test]
    fn identical_assets_rejected() {
        assert_eq!(
            AssetPair::new(asset(3), asset(3)),
            Err(AmmError::IdenticalAssets)
        );
    }

    #[test]
    fn side_lookup() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.side_of(&asset(1)), Some(Side::A));
        assert_eq!(pair.side_of(&asset(2)), Some(Side::B));
        assert_eq!(pair.side_of(&asset(3)), None);
        assert_eq!(pair.asset(Side::B), asset(2));
        assert!(!pair.contains(&asset(4)));
    }

    #[test]
    fn side_other() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialising_identical_assets_fails() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        let Ok(json) = serde_json::to_string(&pair) else {
            panic!("serialize");
        };
        assert_eq!(serde_json::from_str::<AssetPair>(&json).ok(), Some(pair));

        let Ok(twin) = serde_json::to_string(&asset(1)) else {
            panic!("serialize");
        };
        let same = format!(r#"{{"asset_a":{twin},"asset_b":{twin}}}"#);
        assert!(serde_json::from_str::<AssetPair>(&same).is_err());
    }
}
