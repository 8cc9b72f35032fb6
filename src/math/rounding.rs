//! Widened multiply-divide with explicit rounding.
//!
//! Every ratio in the engine has the shape `a * b / d`.  Operands are at
//! most 64-bit values widened to `u128`, so the product cannot overflow
//! for ordinary calls; callers that feed genuine `u128` values still get a
//! checked error instead of a wrap.
//!
//! # Convention
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output, withdrawn amount, minted shares | [`Rounding::Down`] |
//! | Required deposit, burned shares | [`Rounding::Up`] |
//! | Fees | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use tandem_amm::domain::Rounding;
//! use tandem_amm::math::{div_round, mul_div};
//!
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(mul_div(1_000_000, 998, 1_000_998, Rounding::Down), Ok(997));
//! ```

use crate::domain::Rounding;
use crate::error::AmmError;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a nonzero remainder implies q < u128::MAX.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}

/// Computes `a * b / denominator` in `u128` with explicit rounding.
///
/// # Errors
///
/// - [`AmmError::ArithmeticOverflow`] if `a * b` overflows `u128`.
/// - [`AmmError::ArithmeticOverflow`] if `denominator` is zero; callers
///   check their own divisors first and report a domain error, so reaching
///   this is an arithmetic fault.
pub const fn mul_div(
    a: u128,
    b: u128,
    denominator: u128,
    rounding: Rounding,
) -> Result<u128, AmmError> {
    let product = match a.checked_mul(b) {
        Some(p) => p,
        None => return Err(AmmError::ArithmeticOverflow("mul_div product")),
    };
    match div_round(product, denominator, rounding) {
        Some(q) => Ok(q),
        None => Err(AmmError::ArithmeticOverflow("mul_div division by zero")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- div_round ----------------------------------------------------------

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(100, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::Up), None);
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(100, 10, Rounding::Down), Some(10));
        assert_eq!(div_round(100, 10, Rounding::Up), Some(10));
    }

    #[test]
    fn remainder_rounds_by_direction() {
        assert_eq!(div_round(9, 10, Rounding::Down), Some(0));
        assert_eq!(div_round(9, 10, Rounding::Up), Some(1));
    }

    #[test]
    fn ceiling_near_max_does_not_overflow() {
        let d = u128::MAX / 2;
        assert_eq!(div_round(u128::MAX, d, Rounding::Down), Some(2));
        assert_eq!(div_round(u128::MAX, d, Rounding::Up), Some(3));
    }

    // -- mul_div ------------------------------------------------------------

    #[test]
    fn mul_div_full_u64_operands() {
        let max = u128::from(u64::MAX);
        assert_eq!(mul_div(max, max, max, Rounding::Down), Ok(max));
    }

    #[test]
    fn mul_div_overflow_reported() {
        assert!(matches!(
            mul_div(u128::MAX, 2, 1, Rounding::Down),
            Err(AmmError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn mul_div_zero_denominator_reported() {
        assert!(matches!(
            mul_div(1, 1, 0, Rounding::Up),
            Err(AmmError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn mul_div_swap_example() {
        // 1_000_000 * 998 / 1_000_998 = 997.005...
        assert_eq!(mul_div(1_000_000, 998, 1_000_998, Rounding::Down), Ok(997));
        assert_eq!(mul_div(1_000_000, 998, 1_000_998, Rounding::Up), Ok(998));
    }
}
