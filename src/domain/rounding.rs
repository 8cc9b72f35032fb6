//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the engine.
///
/// The ledger always rounds against the caller: amounts paid out and
/// shares minted round [`Down`](Self::Down); amounts required and shares
/// burned round [`Up`](Self::Up).
///
/// # Examples
///
/// ```
/// use tandem_amm::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
