//! Which reserve is the input side of an operation.

use core::fmt;

/// Direction of a swap, or the side of a single-token deposit/withdrawal.
///
/// `AtoB` means token A is paid into the pool (and token B leaves it on a
/// swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TradeDirection {
    /// Token A in, token B out.
    AtoB,
    /// Token B in, token A out.
    BtoA,
}

impl TradeDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::AtoB => Self::BtoA,
            Self::BtoA => Self::AtoB,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtoB => write!(f, "A->B"),
            Self::BtoA => write!(f, "B->A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse() {
        assert_eq!(TradeDirection::AtoB.reverse(), TradeDirection::BtoA);
        assert_eq!(TradeDirection::BtoA.reverse(), TradeDirection::AtoB);
    }

    #[test]
    fn display() {
        assert_eq!(TradeDirection::AtoB.to_string(), "A->B");
    }
}
