//! Opaque account identifier carried through the core.

use core::fmt;

/// A 32-byte key naming an external account (pool authority, fee account,
/// host account).
///
/// The engine never interprets or verifies these keys; it only carries
/// them so the transport boundary knows where computed amounts go.
///
/// # Examples
///
/// ```
/// use tandem_amm::domain::AccountKey;
///
/// let key = AccountKey::from_bytes([7u8; 32]);
/// assert_eq!(key.as_bytes(), [7u8; 32]);
/// assert!(!key.is_default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountKey([u8; 32]);

impl AccountKey {
    /// Creates an `AccountKey` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the all-zero key, which marks an absent account.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}
