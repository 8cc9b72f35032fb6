//! Closed set of curves a pool can be created with.

use core::fmt;

use super::{proportional, ConstantPriceCurve, ConstantProductCurve};
use crate::domain::{Amount, Fraction, Shares, TradeDirection};
use crate::error::AmmError;
use crate::traits::CurveCalculator;

/// The curve a pool prices swaps with, chosen once at creation.
///
/// The enum implements [`CurveCalculator`] by delegating to the inner
/// curve, and adds the checks every curve shares (nonzero reserves for
/// swaps, proportional share math for two-sided liquidity).
///
/// # Example
///
/// ```rust
/// use tandem_amm::curve::CurveVariant;
/// use tandem_amm::domain::{Amount, TradeDirection};
///
/// let curve = CurveVariant::constant_product();
/// let out = curve
///     .swap_output(Amount::new(1_000_000), Amount::new(1_000_000), Amount::new(998), TradeDirection::AtoB)
///     .expect("priced");
/// assert_eq!(out, Amount::new(997));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveVariant {
    /// `x · y = k`.
    ConstantProduct(ConstantProductCurve),

    /// Fixed exchange rate.
    ConstantPrice(ConstantPriceCurve),
}

/// Delegates a method call to the inner curve of every variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            CurveVariant::ConstantProduct(c) => c.$method($($arg),*),
            CurveVariant::ConstantPrice(c) => c.$method($($arg),*),
        }
    };
}

impl CurveVariant {
    /// The constant product curve.
    #[must_use]
    pub const fn constant_product() -> Self {
        Self::ConstantProduct(ConstantProductCurve)
    }

    /// A constant price curve where one token B is worth `token_b_price`
    /// units of token A.
    #[must_use]
    pub const fn constant_price(token_b_price: Fraction) -> Self {
        Self::ConstantPrice(ConstantPriceCurve::new(token_b_price))
    }

    /// Output of a fee-free swap of `amount_in` against the given reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroInvariant`] if either reserve is zero.
    /// - Any error of the inner curve's
    ///   [`swap_without_fees`](CurveCalculator::swap_without_fees).
    pub fn swap_output(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
        direction: TradeDirection,
    ) -> Result<Amount, AmmError> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::ZeroInvariant("swap against an empty reserve"));
        }
        self.swap_without_fees(amount_in, reserve_in, reserve_out, direction)
    }

    /// Shares minted for a two-sided deposit.
    ///
    /// See [`proportional::deposit_ratio`].
    ///
    /// # Errors
    ///
    /// Propagates every error of [`proportional::deposit_ratio`].
    pub fn deposit_ratio(
        &self,
        reserve_a: Amount,
        reserve_b: Amount,
        supply: Shares,
        amount_a: Amount,
        amount_b: Amount,
        max_imbalance: Fraction,
    ) -> Result<Shares, AmmError> {
        proportional::deposit_ratio(reserve_a, reserve_b, supply, amount_a, amount_b, max_imbalance)
    }

    /// Token amounts redeemed for `shares`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `shares > supply` or
    /// `supply` is zero.
    pub fn withdraw_amounts(
        &self,
        reserve_a: Amount,
        reserve_b: Amount,
        supply: Shares,
        shares: Shares,
    ) -> Result<(Amount, Amount), AmmError> {
        proportional::withdraw_amounts(reserve_a, reserve_b, supply, shares)
    }
}

impl CurveCalculator for CurveVariant {
    fn name(&self) -> &'static str {
        delegate!(self, name())
    }

    fn validate(&self) -> Result<(), AmmError> {
        delegate!(self, validate())
    }

    fn swap_without_fees(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        direction: TradeDirection,
    ) -> Result<Amount, AmmError> {
        delegate!(self, swap_without_fees(amount_in, reserve_in, reserve_out, direction))
    }

    fn invariant(&self, reserve_a: Amount, reserve_b: Amount) -> Result<u128, AmmError> {
        delegate!(self, invariant(reserve_a, reserve_b))
    }

    fn spot_price(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        direction: TradeDirection,
    ) -> Result<Fraction, AmmError> {
        delegate!(self, spot_price(reserve_in, reserve_out, direction))
    }

    fn deposit_single_token(
        &self,
        net_amount: Amount,
        reserve: Amount,
        supply: Shares,
    ) -> Result<Shares, AmmError> {
        delegate!(self, deposit_single_token(net_amount, reserve, supply))
    }

    fn withdraw_single_token(
        &self,
        gross_amount: Amount,
        reserve: Amount,
        supply: Shares,
    ) -> Result<Shares, AmmError> {
        delegate!(self, withdraw_single_token(gross_amount, reserve, supply))
    }
}

impl Default for CurveVariant {
    fn default() -> Self {
        Self::constant_product()
    }
}

impl fmt::Display for CurveVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantProduct(_) => f.write_str("ConstantProduct"),
            Self::ConstantPrice(c) => write!(f, "ConstantPrice({})", c.token_b_price()),
        }
    }
}
