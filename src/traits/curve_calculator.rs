//! Pricing seam implemented by every curve.
//!
//! A [`CurveCalculator`] is a pure function of reserves.  It knows nothing
//! about fees or share supply bookkeeping: the ledger subtracts fees from
//! the input before calling [`CurveCalculator::swap_without_fees`], and
//! proportional share math lives in [`crate::curve::proportional`] because
//! it is the same for every curve.
//!
//! # Dispatch Model
//!
//! Curves are dispatched through the [`CurveVariant`](crate::curve::CurveVariant)
//! enum rather than `dyn` trait objects, so the set of curves is closed and
//! matched exhaustively.

use crate::domain::{Amount, Fraction, Shares, TradeDirection};
use crate::error::AmmError;

/// Price-discovery math for one curve family.
///
/// # Errors
///
/// Methods return [`AmmError`] rather than panicking.  Common variants:
///
/// - [`AmmError::ZeroInvariant`]: a reserve is zero.
/// - [`AmmError::InsufficientLiquidity`]: the output would exceed the reserve.
/// - [`AmmError::ArithmeticOverflow`]: an intermediate does not fit.
pub trait CurveCalculator {
    /// Short lowercase curve name used in logs and errors.
    #[must_use]
    fn name(&self) -> &'static str;

    /// Checks the curve parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidCurveParameters`] if a parameter is out
    /// of range.
    fn validate(&self) -> Result<(), AmmError>;

    /// Output for an input that has already had fees removed.
    ///
    /// Both reserves are guaranteed nonzero by the caller.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if the output would exceed
    ///   `reserve_out`.
    /// - [`AmmError::ArithmeticOverflow`] on overflow.
    fn swap_without_fees(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        direction: TradeDirection,
    ) -> Result<Amount, AmmError>;

    /// The curve's invariant value for the given reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the value does not fit
    /// in `u128`.
    fn invariant(&self, reserve_a: Amount, reserve_b: Amount) -> Result<u128, AmmError>;

    /// Marginal price as units of output per unit of input.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroInvariant`] if a reserve is zero where the
    /// curve needs it.
    fn spot_price(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        direction: TradeDirection,
    ) -> Result<Fraction, AmmError>;

    /// Shares minted for a one-sided deposit of `net_amount` against
    /// `reserve`, the reserve on the deposited side.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnsupportedCurveOperation`] unless overridden.
    fn deposit_single_token(
        &self,
        net_amount: Amount,
        reserve: Amount,
        supply: Shares,
    ) -> Result<Shares, AmmError> {
        let _ = (net_amount, reserve, supply);
        Err(AmmError::UnsupportedCurveOperation(self.name()))
    }

    /// Shares burned to take `gross_amount` out of `reserve`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnsupportedCurveOperation`] unless overridden.
    fn withdraw_single_token(
        &self,
        gross_amount: Amount,
        reserve: Amount,
        supply: Shares,
    ) -> Result<Shares, AmmError> {
        let _ = (gross_amount, reserve, supply);
        Err(AmmError::UnsupportedCurveOperation(self.name()))
    }
}
