//! Caller-side description of a swap.

use core::fmt;

use super::{AccountKey, Amount, TradeDirection};

/// What the caller asks a pool to swap.
///
/// Only exact-input swaps exist.  The optional minimum output is the
/// caller's slippage bound; the optional host account makes the swap pay a
/// host fee out of the owner fee.
///
/// A zero `amount_in` is representable on purpose: the pool rejects it
/// deterministically rather than the constructor hiding it.
///
/// # Examples
///
/// ```
/// use tandem_amm::domain::{Amount, SwapSpec, TradeDirection};
///
/// let spec = SwapSpec::exact_in(TradeDirection::AtoB, Amount::new(1_000))
///     .with_minimum_out(Amount::new(990));
/// assert_eq!(spec.minimum_amount_out(), Some(Amount::new(990)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapSpec {
    direction: TradeDirection,
    amount_in: Amount,
    minimum_amount_out: Option<Amount>,
    host: Option<AccountKey>,
}

impl SwapSpec {
    /// Swap exactly `amount_in` in the given direction, with no bound.
    pub const fn exact_in(direction: TradeDirection, amount_in: Amount) -> Self {
        Self {
            direction,
            amount_in,
            minimum_amount_out: None,
            host: None,
        }
    }

    /// Rejects the swap if the output falls below `minimum`.
    #[must_use]
    pub const fn with_minimum_out(mut self, minimum: Amount) -> Self {
        self.minimum_amount_out = Some(minimum);
        self
    }

    /// Routes a host fee to `host`.
    ///
    /// The all-zero key is treated as no host and earns nothing.
    #[must_use]
    pub const fn with_host(mut self, host: AccountKey) -> Self {
        self.host = Some(host);
        self
    }

    /// Returns the direction.
    #[must_use]
    pub const fn direction(&self) -> TradeDirection {
        self.direction
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output, if any.
    #[must_use]
    pub const fn minimum_amount_out(&self) -> Option<Amount> {
        self.minimum_amount_out
    }

    /// Returns the host account, if any.
    #[must_use]
    pub const fn host(&self) -> Option<AccountKey> {
        self.host
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SwapSpec({} {})", self.direction, self.amount_in)?;
        if let Some(min) = self.minimum_amount_out {
            write!(f, " min_out={min}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let host = AccountKey::from_bytes([9u8; 32]);
        let spec = SwapSpec::exact_in(TradeDirection::BtoA, Amount::new(5))
            .with_minimum_out(Amount::new(4))
            .with_host(host);
        assert_eq!(spec.direction(), TradeDirection::BtoA);
        assert_eq!(spec.amount_in(), Amount::new(5));
        assert_eq!(spec.minimum_amount_out(), Some(Amount::new(4)));
        assert_eq!(spec.host(), Some(host));
    }

    #[test]
    fn zero_amount_is_representable() {
        let spec = SwapSpec::exact_in(TradeDirection::AtoB, Amount::ZERO);
        assert!(spec.amount_in().is_zero());
        assert_eq!(spec.minimum_amount_out(), None);
    }

    #[test]
    fn display() {
        let spec = SwapSpec::exact_in(TradeDirection::AtoB, Amount::new(10))
            .with_minimum_out(Amount::new(9));
        assert_eq!(spec.to_string(), "SwapSpec(A->B 10) min_out=9");
    }
}
