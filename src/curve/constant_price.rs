//! Constant price curve: every swap executes at one fixed rate.
//!
//! The rate is `token_b_price`, the number of token A units one token B
//! unit is worth.  Selling B yields `in × price` of A; selling A yields
//! `in / price` of B.  Both are rounded down, and an output larger than the
//! opposite reserve is rejected rather than clamped silently.

use crate::domain::{Amount, Fraction, Rounding, TradeDirection};
use crate::error::AmmError;
use crate::math::mul_div;
use crate::traits::CurveCalculator;

/// A fixed-rate curve.
///
/// # Examples
///
/// ```
/// use tandem_amm::curve::ConstantPriceCurve;
/// use tandem_amm::domain::Fraction;
/// use tandem_amm::traits::CurveCalculator;
///
/// let curve = ConstantPriceCurve::new(Fraction::new(3, 2));
/// assert!(curve.validate().is_ok());
/// assert!(ConstantPriceCurve::new(Fraction::ZERO).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstantPriceCurve {
    token_b_price: Fraction,
}

impl ConstantPriceCurve {
    /// Creates a curve; call [`CurveCalculator::validate`] before use.
    #[must_use]
    pub const fn new(token_b_price: Fraction) -> Self {
        Self { token_b_price }
    }

    /// Returns the price of one token B in token A units.
    #[must_use]
    pub const fn token_b_price(&self) -> Fraction {
        self.token_b_price
    }
}

impl CurveCalculator for ConstantPriceCurve {
    fn name(&self) -> &'static str {
        "constant price"
    }

    fn validate(&self) -> Result<(), AmmError> {
        if self.token_b_price.denominator() == 0 {
            return Err(AmmError::InvalidCurveParameters(
                "price denominator must be nonzero",
            ));
        }
        if self.token_b_price.numerator() == 0 {
            return Err(AmmError::InvalidCurveParameters("price must be positive"));
        }
        Ok(())
    }

    fn swap_without_fees(
        &self,
        amount_in: Amount,
        _reserve_in: Amount,
        reserve_out: Amount,
        direction: TradeDirection,
    ) -> Result<Amount, AmmError> {
        let out = match direction {
            TradeDirection::BtoA => self.token_b_price.apply(amount_in, Rounding::Down)?,
            TradeDirection::AtoB => self.token_b_price.apply_inverse(amount_in, Rounding::Down)?,
        };
        if out > reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(out)
    }

    /// Total pool value in token A units: `reserve_a + reserve_b × price`.
    fn invariant(&self, reserve_a: Amount, reserve_b: Amount) -> Result<u128, AmmError> {
        let b_value = mul_div(
            reserve_b.widen(),
            u128::from(self.token_b_price.numerator()),
            u128::from(self.token_b_price.denominator()),
            Rounding::Down,
        )?;
        reserve_a
            .widen()
            .checked_add(b_value)
            .ok_or(AmmError::ArithmeticOverflow("pool value overflow"))
    }

    fn spot_price(
        &self,
        _reserve_in: Amount,
        _reserve_out: Amount,
        direction: TradeDirection,
    ) -> Result<Fraction, AmmError> {
        Ok(match direction {
            TradeDirection::BtoA => self.token_b_price,
            TradeDirection::AtoB => Fraction::new(
                self.token_b_price.denominator(),
                self.token_b_price.numerator(),
            ),
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn curve(num: u64, den: u64) -> ConstantPriceCurve {
        ConstantPriceCurve::new(Fraction::new(num, den))
    }

    #[test]
    fn validate_rejects_zero_price() {
        assert!(matches!(
            curve(0, 1).validate(),
            Err(AmmError::InvalidCurveParameters(_))
        ));
        assert!(matches!(
            curve(5, 0).validate(),
            Err(AmmError::InvalidCurveParameters(_))
        ));
        assert!(curve(1, 3).validate().is_ok());
    }

    #[test]
    fn selling_b_multiplies_by_price() {
        let Ok(out) = curve(3, 1).swap_without_fees(
            Amount::new(10),
            Amount::new(1_000),
            Amount::new(1_000),
            TradeDirection::BtoA,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(30));
    }

    #[test]
    fn selling_a_divides_by_price() {
        let Ok(out) = curve(3, 1).swap_without_fees(
            Amount::new(10),
            Amount::new(1_000),
            Amount::new(1_000),
            TradeDirection::AtoB,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(3));
    }

    #[test]
    fn selling_a_at_fractional_price() {
        // One B is worth 2/5 A, so 10 A buys 25 B.
        let Ok(out) = curve(2, 5).swap_without_fees(
            Amount::new(10),
            Amount::new(1_000),
            Amount::new(1_000),
            TradeDirection::AtoB,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(25));
    }

    #[test]
    fn output_above_reserve_rejected() {
        let result = curve(3, 1).swap_without_fees(
            Amount::new(400),
            Amount::new(1_000),
            Amount::new(1_000),
            TradeDirection::BtoA,
        );
        assert!(matches!(result, Err(AmmError::InsufficientLiquidity)));
    }

    #[test]
    fn output_equal_to_reserve_is_priced() {
        // The ledger, not the curve, refuses to drain a side completely.
        let Ok(out) = curve(1, 1).swap_without_fees(
            Amount::new(1_000),
            Amount::new(1),
            Amount::new(1_000),
            TradeDirection::AtoB,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(1_000));
    }

    #[test]
    fn invariant_is_value_in_a() {
        assert_eq!(
            curve(2, 1).invariant(Amount::new(100), Amount::new(50)),
            Ok(200)
        );
    }

    #[test]
    fn spot_price_by_direction() {
        let c = curve(5, 2);
        assert_eq!(
            c.spot_price(Amount::ZERO, Amount::ZERO, TradeDirection::BtoA),
            Ok(Fraction::new(5, 2))
        );
        assert_eq!(
            c.spot_price(Amount::ZERO, Amount::ZERO, TradeDirection::AtoB),
            Ok(Fraction::new(2, 5))
        );
    }

    #[test]
    fn single_sided_unsupported() {
        use crate::domain::Shares;
        let result =
            curve(1, 1).deposit_single_token(Amount::new(1), Amount::new(1), Shares::new(1));
        assert!(matches!(
            result,
            Err(AmmError::UnsupportedCurveOperation("constant price"))
        ));
    }
}
