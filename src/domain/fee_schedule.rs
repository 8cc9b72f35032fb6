//! Fee rates charged by a pool.

use core::cmp::Ordering;
use core::fmt;

use super::{Amount, Fraction, Rounding, Shares};
use crate::error::AmmError;

/// The four fee fractions of a pool, fixed at creation.
///
/// | Fee | Applied to | Destination |
/// |-----|------------|-------------|
/// | trade | swap input | stays in the pool |
/// | owner trade | swap input | carved out of the trade fee, routed to the fee account |
/// | owner withdraw | shares redeemed | retained as pool equity |
/// | host | owner trade fee | portion of the owner fee sent to a host account |
///
/// Every computation floors `value * numerator / denominator` in `u128`
/// and treats a zero denominator as the rate `0`.
///
/// # Examples
///
/// ```
/// use tandem_amm::domain::{Amount, FeeSchedule, Fraction};
///
/// let fees = FeeSchedule::new(
///     Fraction::new(25, 10_000),
///     Fraction::new(5, 10_000),
///     Fraction::ZERO,
///     Fraction::new(20, 100),
/// );
/// assert!(fees.validate().is_ok());
/// assert_eq!(fees.compute_trade_fee(Amount::new(1_000)), Ok(Amount::new(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeSchedule {
    trade_fee: Fraction,
    owner_trade_fee: Fraction,
    owner_withdraw_fee: Fraction,
    host_fee: Fraction,
}

impl FeeSchedule {
    /// A schedule that charges nothing.
    pub const ZERO: Self = Self::new(
        Fraction::ZERO,
        Fraction::ZERO,
        Fraction::ZERO,
        Fraction::ZERO,
    );

    /// Creates a fee schedule; call [`validate`](Self::validate) before use.
    #[must_use]
    pub const fn new(
        trade_fee: Fraction,
        owner_trade_fee: Fraction,
        owner_withdraw_fee: Fraction,
        host_fee: Fraction,
    ) -> Self {
        Self {
            trade_fee,
            owner_trade_fee,
            owner_withdraw_fee,
            host_fee,
        }
    }

    /// Checks every fraction and the trade/owner-trade relationship.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeSchedule`] if any fraction has a zero
    /// denominator under a nonzero numerator, or if the owner trade rate is
    /// greater than the trade rate.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.trade_fee.is_well_formed() {
            return Err(AmmError::InvalidFeeSchedule("trade fee denominator is zero"));
        }
        if !self.owner_trade_fee.is_well_formed() {
            return Err(AmmError::InvalidFeeSchedule(
                "owner trade fee denominator is zero",
            ));
        }
        if !self.owner_withdraw_fee.is_well_formed() {
            return Err(AmmError::InvalidFeeSchedule(
                "owner withdraw fee denominator is zero",
            ));
        }
        if !self.host_fee.is_well_formed() {
            return Err(AmmError::InvalidFeeSchedule("host fee denominator is zero"));
        }
        if self.owner_trade_fee.cmp_rate(&self.trade_fee) == Ordering::Greater {
            return Err(AmmError::InvalidFeeSchedule(
                "owner trade fee exceeds trade fee",
            ));
        }
        Ok(())
    }

    /// Returns the trade fee fraction.
    #[must_use]
    pub const fn trade_fee(&self) -> Fraction {
        self.trade_fee
    }

    /// Returns the owner trade fee fraction.
    #[must_use]
    pub const fn owner_trade_fee(&self) -> Fraction {
        self.owner_trade_fee
    }

    /// Returns the owner withdraw fee fraction.
    #[must_use]
    pub const fn owner_withdraw_fee(&self) -> Fraction {
        self.owner_withdraw_fee
    }

    /// Returns the host fee fraction.
    #[must_use]
    pub const fn host_fee(&self) -> Fraction {
        self.host_fee
    }

    /// `floor(amount * trade_num / trade_den)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the fee exceeds 64 bits.
    pub fn compute_trade_fee(&self, amount: Amount) -> crate::error::Result<Amount> {
        self.trade_fee.apply(amount, Rounding::Down)
    }

    /// `floor(amount * owner_trade_num / owner_trade_den)`.
    ///
    /// This is a portion of the trade fee, not an additional charge.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the fee exceeds 64 bits.
    pub fn compute_owner_trade_fee(&self, amount: Amount) -> crate::error::Result<Amount> {
        self.owner_trade_fee.apply(amount, Rounding::Down)
    }

    /// Owner fee on a withdrawal, in shares.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the fee exceeds 64 bits.
    pub fn compute_owner_withdraw_fee(&self, shares: Shares) -> crate::error::Result<Shares> {
        let fee = self
            .owner_withdraw_fee
            .apply(Amount::new(shares.get()), Rounding::Down)?;
        Ok(Shares::new(fee.get()))
    }

    /// Host portion of an already computed fee (fee-on-fee).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result exceeds 64 bits.
    pub fn compute_host_fee(&self, fee: Amount) -> crate::error::Result<Amount> {
        self.host_fee.apply(fee, Rounding::Down)
    }
}

impl fmt::Display for FeeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeeSchedule(trade={}, owner_trade={}, owner_withdraw={}, host={})",
            self.trade_fee, self.owner_trade_fee, self.owner_withdraw_fee, self.host_fee
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn standard() -> FeeSchedule {
        FeeSchedule::new(
            Fraction::new(25, 10_000),
            Fraction::new(5, 10_000),
            Fraction::new(1, 6),
            Fraction::new(20, 100),
        )
    }

    // -- validate -----------------------------------------------------------

    #[test]
    fn standard_schedule_is_valid() {
        assert!(standard().validate().is_ok());
        assert!(FeeSchedule::ZERO.validate().is_ok());
    }

    #[test]
    fn zero_over_zero_is_valid() {
        let fees = FeeSchedule::new(
            Fraction::new(0, 0),
            Fraction::new(0, 0),
            Fraction::new(0, 0),
            Fraction::new(0, 0),
        );
        assert!(fees.validate().is_ok());
    }

    #[test]
    fn nonzero_over_zero_rejected_for_each_fraction() {
        let bad = Fraction::new(1, 0);
        let cases = [
            FeeSchedule::new(bad, Fraction::ZERO, Fraction::ZERO, Fraction::ZERO),
            FeeSchedule::new(Fraction::ONE, bad, Fraction::ZERO, Fraction::ZERO),
            FeeSchedule::new(Fraction::ZERO, Fraction::ZERO, bad, Fraction::ZERO),
            FeeSchedule::new(Fraction::ZERO, Fraction::ZERO, Fraction::ZERO, bad),
        ];
        for fees in cases {
            assert!(matches!(
                fees.validate(),
                Err(AmmError::InvalidFeeSchedule(_))
            ));
        }
    }

    #[test]
    fn owner_fee_above_trade_fee_rejected() {
        let fees = FeeSchedule::new(
            Fraction::new(5, 10_000),
            Fraction::new(6, 10_000),
            Fraction::ZERO,
            Fraction::ZERO,
        );
        assert!(matches!(
            fees.validate(),
            Err(AmmError::InvalidFeeSchedule(_))
        ));
    }

    #[test]
    fn owner_fee_equal_to_trade_fee_accepted() {
        let fees = FeeSchedule::new(
            Fraction::new(1, 400),
            Fraction::new(25, 10_000),
            Fraction::ZERO,
            Fraction::ZERO,
        );
        assert!(fees.validate().is_ok());
    }

    // -- computations -------------------------------------------------------

    #[test]
    fn trade_fee_floors() {
        let Ok(fee) = standard().compute_trade_fee(Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        // 1000 * 25 / 10000 = 2.5
        assert_eq!(fee, Amount::new(2));
    }

    #[test]
    fn owner_trade_fee_floors_to_zero_on_small_input() {
        let Ok(fee) = standard().compute_owner_trade_fee(Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::ZERO);
    }

    #[test]
    fn owner_fee_never_exceeds_trade_fee() {
        let fees = standard();
        for amount in [1u64, 399, 2_000, 123_457, u64::MAX] {
            let Ok(trade) = fees.compute_trade_fee(Amount::new(amount)) else {
                panic!("expected Ok");
            };
            let Ok(owner) = fees.compute_owner_trade_fee(Amount::new(amount)) else {
                panic!("expected Ok");
            };
            assert!(owner <= trade);
        }
    }

    #[test]
    fn owner_withdraw_fee_in_shares() {
        let Ok(fee) = standard().compute_owner_withdraw_fee(Shares::new(600)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Shares::new(100));
    }

    #[test]
    fn host_fee_is_fee_on_fee() {
        let Ok(host) = standard().compute_host_fee(Amount::new(50)) else {
            panic!("expected Ok");
        };
        assert_eq!(host, Amount::new(10));
    }

    #[test]
    fn zero_denominator_yields_zero_fee() {
        let fees = FeeSchedule::new(
            Fraction::new(0, 0),
            Fraction::ZERO,
            Fraction::ZERO,
            Fraction::ZERO,
        );
        assert_eq!(fees.compute_trade_fee(Amount::MAX), Ok(Amount::ZERO));
    }

    #[test]
    fn rate_above_one_overflows() {
        let fees = FeeSchedule::new(
            Fraction::new(3, 2),
            Fraction::ZERO,
            Fraction::ZERO,
            Fraction::ZERO,
        );
        assert!(matches!(
            fees.compute_trade_fee(Amount::MAX),
            Err(AmmError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn display_lists_all_rates() {
        let s = standard().to_string();
        assert!(s.contains("trade=25/10000"));
        assert!(s.contains("host=20/100"));
    }
}
