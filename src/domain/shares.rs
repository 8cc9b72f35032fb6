//! Pool-share token quantities.

use core::fmt;

/// A quantity of pool-share tokens.
///
/// Kept distinct from [`Amount`](super::Amount) so a share count can never
/// be passed where a reserve amount is expected.
///
/// # Examples
///
/// ```
/// use tandem_amm::domain::Shares;
///
/// let s = Shares::new(1_000);
/// assert_eq!(s.get(), 1_000);
/// assert!(Shares::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Shares(u64);

impl Shares {
    /// Zero shares.
    pub const ZERO: Self = Self(0);

    /// Maximum representable share count.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Shares` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the value widened to `u128`.
    #[must_use]
    pub const fn widen(&self) -> u128 {
        self.0 as u128
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
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

    /// Narrows a `u128` intermediate back to a share count.
    #[must_use]
    pub const fn from_wide(value: u128) -> Option<Self> {
        if value > u64::MAX as u128 {
            None
        } else {
            Some(Self(value as u64))
        }
    }
}

impl From<u64> for Shares {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} shares", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_ops() {
        let a = Shares::new(10);
        assert_eq!(a.checked_add(&Shares::new(5)), Some(Shares::new(15)));
        assert_eq!(a.checked_sub(&Shares::new(11)), None);
        assert_eq!(Shares::MAX.checked_add(&Shares::new(1)), None);
    }

    #[test]
    fn from_wide_rejects_overflow() {
        assert_eq!(Shares::from_wide(5), Some(Shares::new(5)));
        assert_eq!(Shares::from_wide(u128::MAX), None);
    }

    #[test]
    fn display() {
        assert_eq!(Shares::new(3).to_string(), "3 shares");
    }
}
