//! Constant product curve (`x · y = k`).
//!
//! # Swap
//!
//! `amount_out = reserve_out × net_in / (reserve_in + net_in)`, rounded
//! down.  Since `reserve_in > 0` the output is always strictly below
//! `reserve_out`, and `(reserve_in + net_in) × (reserve_out − amount_out)`
//! is never below `reserve_in × reserve_out`.
//!
//! # Single-sided liquidity
//!
//! Depositing `n` tokens on a side with reserve `R` scales that reserve by
//! `(R + n) / R`; the invariant grows by the same factor, so the share
//! supply grows by its square root:
//!
//! ```text
//! minted = S × (√((R + n)·R) − R) / R          (rounded down)
//! burned = S × (R − √((R − n)·R)) / R          (rounded up)
//! ```
//!
//! The square root is floored in both formulas, which rounds minted shares
//! down and burned shares up.

use crate::domain::{Amount, Fraction, Rounding, Shares, TradeDirection};
use crate::error::AmmError;
use crate::math::{isqrt, mul_div};
use crate::traits::CurveCalculator;

/// The `x · y = k` curve; it has no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstantProductCurve;

impl CurveCalculator for ConstantProductCurve {
    fn name(&self) -> &'static str {
        "constant product"
    }

    fn validate(&self) -> Result<(), AmmError> {
        Ok(())
    }

    fn swap_without_fees(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        _direction: TradeDirection,
    ) -> Result<Amount, AmmError> {
        // Both operands are u64, so the sum cannot overflow u128.
        let denominator = reserve_in.widen() + amount_in.widen();
        let out = mul_div(
            reserve_out.widen(),
            amount_in.widen(),
            denominator,
            Rounding::Down,
        )?;
        Amount::from_wide(out).ok_or(AmmError::ArithmeticOverflow("swap output exceeds u64"))
    }

    fn invariant(&self, reserve_a: Amount, reserve_b: Amount) -> Result<u128, AmmError> {
        Ok(reserve_a.widen() * reserve_b.widen())
    }

    fn spot_price(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        _direction: TradeDirection,
    ) -> Result<Fraction, AmmError> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::ZeroInvariant("spot price of an empty pool"));
        }
        Ok(Fraction::new(reserve_out.get(), reserve_in.get()))
    }

    fn deposit_single_token(
        &self,
        net_amount: Amount,
        reserve: Amount,
        supply: Shares,
    ) -> Result<Shares, AmmError> {
        if reserve.is_zero() || supply.is_zero() {
            return Err(AmmError::ZeroInvariant("single-sided deposit into empty pool"));
        }
        let r = reserve.widen();
        let scaled = (r + net_amount.widen())
            .checked_mul(r)
            .ok_or(AmmError::ArithmeticOverflow("single deposit radicand"))?;
        // isqrt((R + n)·R) >= R because n >= 0.
        let growth = isqrt(scaled) - r;
        let minted = mul_div(supply.widen(), growth, r, Rounding::Down)?;
        Shares::from_wide(minted).ok_or(AmmError::ArithmeticOverflow("minted shares exceed u64"))
    }

    fn withdraw_single_token(
        &self,
        gross_amount: Amount,
        reserve: Amount,
        supply: Shares,
    ) -> Result<Shares, AmmError> {
        if supply.is_zero() {
            return Err(AmmError::InsufficientShares);
        }
        if gross_amount >= reserve {
            return Err(AmmError::InsufficientLiquidity);
        }
        let r = reserve.widen();
        let remaining = (r - gross_amount.widen()) * r;
        let shrink = r - isqrt(remaining);
        let burned = mul_div(supply.widen(), shrink, r, Rounding::Up)?;
        Shares::from_wide(burned).ok_or(AmmError::ArithmeticOverflow("burned shares exceed u64"))
    }
}
