//! Integer rational used for fee rates, prices and tolerances.

use core::cmp::Ordering;
use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;

/// A non-negative rational `numerator / denominator` over `u64`.
///
/// A fraction with a zero denominator is defined as the rate `0`.  Such a
/// fraction is only *well formed* when its numerator is zero too; fee
/// schedules reject the ill-formed case at pool creation.
///
/// No floating point is involved anywhere: every application multiplies
/// in `u128` and divides with an explicit [`Rounding`].
///
/// # Examples
///
/// ```
/// use tandem_amm::domain::{Amount, Fraction, Rounding};
///
/// let fee = Fraction::new(25, 10_000);
/// let charged = fee.apply(Amount::new(1_000), Rounding::Down).expect("fits in u64");
/// assert_eq!(charged, Amount::new(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// The zero rate `0/1`.
    pub const ZERO: Self = Self::new(0, 1);

    /// The unit rate `1/1`.
    pub const ONE: Self = Self::new(1, 1);

    /// Creates a fraction; no validation is performed here.
    #[must_use]
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns `true` if the fraction evaluates to the rate `0`.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0 || self.denominator == 0
    }

    /// Returns `false` for a nonzero numerator over a zero denominator.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.denominator != 0 || self.numerator == 0
    }

    /// Computes `amount * numerator / denominator` with explicit rounding.
    ///
    /// Returns zero when the denominator is zero.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result does not fit
    /// in 64 bits (only possible for rates above one).
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        if self.denominator == 0 {
            return Ok(Amount::ZERO);
        }
        let wide = mul_div(
            amount.widen(),
            u128::from(self.numerator),
            u128::from(self.denominator),
            rounding,
        )?;
        Amount::from_wide(wide).ok_or(AmmError::ArithmeticOverflow("fraction result exceeds u64"))
    }

    /// Computes `amount * denominator / numerator`, i.e. divides by this rate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroInvariant`] if the rate is zero.
    /// - [`AmmError::ArithmeticOverflow`] if the result does not fit in 64 bits.
    pub fn apply_inverse(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        if self.is_zero() {
            return Err(AmmError::ZeroInvariant("division by a zero rate"));
        }
        let wide = mul_div(
            amount.widen(),
            u128::from(self.denominator),
            u128::from(self.numerator),
            rounding,
        )?;
        Amount::from_wide(wide).ok_or(AmmError::ArithmeticOverflow("fraction result exceeds u64"))
    }

    /// Compares the rates of two fractions by cross-multiplication.
    ///
    /// Zero-denominator fractions compare as the rate `0`.
    #[must_use]
    pub fn cmp_rate(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                let lhs = u128::from(self.numerator) * u128::from(other.denominator);
                let rhs = u128::from(other.numerator) * u128::from(self.denominator);
                lhs.cmp(&rhs)
            }
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
