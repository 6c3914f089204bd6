//! Direction of a swap through a two-asset pool.

use core::fmt;

use super::Side;

/// Which asset the trader spends.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Side, SwapDirection};
///
/// let dir = SwapDirection::from_is_a(true);
/// assert_eq!(dir, SwapDirection::AToB);
/// assert_eq!(dir.input_side(), Side::A);
/// assert_eq!(dir.output_side(), Side::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Spend asset A, receive asset B.
    AToB,
    /// Spend asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// Maps the wire-level `is_a` flag (true = spend A) to a direction.
    #[must_use]
    pub const fn from_is_a(is_a: bool) -> Self {
        if is_a {
            Self::AToB
        } else {
            Self::BToA
        }
    }

    /// Side whose reserve receives the input.
    #[must_use]
    pub const fn input_side(&self) -> Side {
        match self {
            Self::AToB => Side::A,
            Self::BToA => Side::B,
        }
    }

    /// Side whose reserve pays the output.
    #[must_use]
    pub const fn output_side(&self) -> Side {
        self.input_side().other()
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl From<bool> for SwapDirection {
    fn from(is_a: bool) -> Self {
        Self::from_is_a(is_a)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A→B"),
            Self::BToA => write!(f, "B→A"),
        }
    }
}
