//! Priced outcome of a swap.

use core::fmt;

use super::{Amount, TradeDirection};
use crate::error::AmmError;

/// The amounts a swap moves, computed fresh per call and never stored.
///
/// # Invariants
///
/// - `owner_fee <= trade_fee <= amount_in`
/// - `host_fee <= owner_fee`
///
/// The caller transfers `amount_in` into the pool, `amount_out` to the
/// trader, `owner_fee - host_fee` to the fee account and `host_fee` to the
/// host account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapQuote {
    direction: TradeDirection,
    amount_in: Amount,
    amount_out: Amount,
    trade_fee: Amount,
    owner_fee: Amount,
    host_fee: Amount,
}

impl SwapQuote {
    /// Creates a quote, checking the fee ordering.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the fee ordering is
    /// violated, which indicates a computation fault upstream.
    pub const fn new(
        direction: TradeDirection,
        amount_in: Amount,
        amount_out: Amount,
        trade_fee: Amount,
        owner_fee: Amount,
        host_fee: Amount,
    ) -> crate::error::Result<Self> {
        if trade_fee.get() > amount_in.get() {
            return Err(AmmError::ArithmeticOverflow("trade fee exceeds input"));
        }
        if owner_fee.get() > trade_fee.get() {
            return Err(AmmError::ArithmeticOverflow("owner fee exceeds trade fee"));
        }
        if host_fee.get() > owner_fee.get() {
            return Err(AmmError::ArithmeticOverflow("host fee exceeds owner fee"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            trade_fee,
            owner_fee,
            host_fee,
        })
    }

    /// Returns the direction.
    #[must_use]
    pub const fn direction(&self) -> TradeDirection {
        self.direction
    }

    /// Returns the gross input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the full trade fee.
    pub const fn trade_fee(&self) -> Amount {
        self.trade_fee
    }

    /// Returns the part of the trade fee routed out of the pool.
    pub const fn owner_fee(&self) -> Amount {
        self.owner_fee
    }

    /// Returns the host's share of the owner fee.
    pub const fn host_fee(&self) -> Amount {
        self.host_fee
    }

    /// Input priced by the curve: `amount_in - trade_fee`.
    pub const fn net_input(&self) -> Amount {
        Amount::new(self.amount_in.get() - self.trade_fee.get())
    }

    /// Amount credited to the input reserve: `amount_in - owner_fee`.
    pub const fn pool_input(&self) -> Amount {
        Amount::new(self.amount_in.get() - self.owner_fee.get())
    }

    /// Amount sent to the fee account: `owner_fee - host_fee`.
    pub const fn fee_account_amount(&self) -> Amount {
        Amount::new(self.owner_fee.get() - self.host_fee.get())
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote({} in={} out={} fee={} owner_fee={})",
            self.direction, self.amount_in, self.amount_out, self.trade_fee, self.owner_fee
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn quote(amount_in: u64, trade: u64, owner: u64, host: u64) -> crate::error::Result<SwapQuote> {
        SwapQuote::new(
            TradeDirection::AtoB,
            Amount::new(amount_in),
            Amount::new(900),
            Amount::new(trade),
            Amount::new(owner),
            Amount::new(host),
        )
    }

    #[test]
    fn derived_amounts() {
        let Ok(q) = quote(1_000, 30, 10, 2) else {
            panic!("expected Ok");
        };
        assert_eq!(q.net_input(), Amount::new(970));
        assert_eq!(q.pool_input(), Amount::new(990));
        assert_eq!(q.fee_account_amount(), Amount::new(8));
    }

    #[test]
    fn fee_ordering_enforced() {
        assert!(quote(10, 11, 0, 0).is_err());
        assert!(quote(1_000, 5, 6, 0).is_err());
        assert!(quote(1_000, 5, 4, 5).is_err());
        assert!(quote(1_000, 5, 5, 5).is_ok());
    }

    #[test]
    fn display() {
        let Ok(q) = quote(1_000, 2, 0, 0) else {
            panic!("expected Ok");
        };
        assert_eq!(
            q.to_string(),
            "SwapQuote(A->B in=1000 out=900 fee=2 owner_fee=0)"
        );
    }
}
