//! Numeric key of a registry entry.

use core::fmt;

/// The unique 16-bit key of a [`RegistryEntry`](crate::state::RegistryEntry).
///
/// One registry entry exists per index; pools reference their registry by
/// this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryIndex(u16);

impl RegistryIndex {
    /// Creates a new index.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw `u16`.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Little-endian bytes, the form hosts use when deriving addresses.
    #[must_use]
    pub const fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl From<u16> for RegistryIndex {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for RegistryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn le_bytes() {
        assert_eq!(RegistryIndex::new(400).to_le_bytes(), [0x90, 0x01]);
    }

    #[test]
    fn display() {
        assert_eq!(RegistryIndex::from(7).to_string(), "#7");
    }
}
