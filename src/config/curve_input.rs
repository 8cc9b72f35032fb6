//! Raw curve selection as it arrives at the initialization boundary.

use core::fmt;

use crate::curve::CurveVariant;
use crate::domain::Fraction;
use crate::error::AmmError;

/// Numeric curve tag.
///
/// | Tag | Curve |
/// |-----|-------|
/// | `0` | [`ConstantProduct`](CurveType::ConstantProduct) |
/// | `1` | [`ConstantPrice`](CurveType::ConstantPrice) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CurveType {
    /// `x · y = k`; takes no parameters.
    ConstantProduct = 0,
    /// Fixed price; the parameter is token A per token B.
    ConstantPrice = 1,
}

impl TryFrom<u8> for CurveType {
    type Error = AmmError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::ConstantProduct),
            1 => Ok(Self::ConstantPrice),
            _ => Err(AmmError::InvalidCurveParameters("unknown curve type")),
        }
    }
}

impl From<CurveType> for u8 {
    fn from(curve_type: CurveType) -> Self {
        curve_type as Self
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantProduct => f.write_str("ConstantProduct"),
            Self::ConstantPrice => f.write_str("ConstantPrice"),
        }
    }
}

/// A curve tag plus a single integer parameter.
///
/// `curve_parameters` is ignored for the constant product curve.
///
/// # Example
///
/// ```rust
/// use tandem_amm::config::CurveInput;
/// use tandem_amm::curve::CurveVariant;
/// use tandem_amm::domain::Fraction;
///
/// let input = CurveInput { curve_type: 1, curve_parameters: 3 };
/// let curve = input.to_curve().expect("known tag");
/// assert_eq!(curve, CurveVariant::constant_price(Fraction::new(3, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CurveInput {
    pub curve_type: u8,
    pub curve_parameters: u64,
}

impl CurveInput {
    /// Decodes the tag.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidCurveParameters`] for an unknown tag.
    pub fn curve_type(&self) -> Result<CurveType, AmmError> {
        CurveType::try_from(self.curve_type)
    }

    /// Builds the curve.  Parameter ranges are checked later by
    /// [`CurveCalculator::validate`](crate::traits::CurveCalculator::validate).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidCurveParameters`] for an unknown tag.
    pub fn to_curve(&self) -> Result<CurveVariant, AmmError> {
        Ok(match self.curve_type()? {
            CurveType::ConstantProduct => CurveVariant::constant_product(),
            CurveType::ConstantPrice => {
                CurveVariant::constant_price(Fraction::new(self.curve_parameters, 1))
            }
        })
    }
}

impl TryFrom<CurveInput> for CurveVariant {
    type Error = AmmError;

    fn try_from(input: CurveInput) -> Result<Self, Self::Error> {
        input.to_curve()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::traits::CurveCalculator;

    #[test]
    fn tags_round_trip() {
        for ty in [CurveType::ConstantProduct, CurveType::ConstantPrice] {
            assert_eq!(CurveType::try_from(u8::from(ty)), Ok(ty));
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        assert!(matches!(
            CurveType::try_from(2),
            Err(AmmError::InvalidCurveParameters(_))
        ));
        let input = CurveInput {
            curve_type: 9,
            curve_parameters: 0,
        };
        assert!(input.to_curve().is_err());
    }

    #[test]
    fn constant_product_ignores_parameter() {
        let input = CurveInput {
            curve_type: 0,
            curve_parameters: 12_345,
        };
        assert_eq!(input.to_curve(), Ok(CurveVariant::constant_product()));
    }

    #[test]
    fn zero_price_builds_but_fails_validation() {
        let input = CurveInput {
            curve_type: 1,
            curve_parameters: 0,
        };
        let Ok(curve) = CurveVariant::try_from(input) else {
            panic!("expected Ok");
        };
        assert!(matches!(
            curve.validate(),
            Err(AmmError::InvalidCurveParameters(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(CurveType::ConstantPrice.to_string(), "ConstantPrice");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_from_json() {
        let Ok(input) =
            serde_json::from_str::<CurveInput>(r#"{"curve_type":1,"curve_parameters":2}"#)
        else {
            panic!("expected valid json");
        };
        assert_eq!(
            input,
            CurveInput {
                curve_type: 1,
                curve_parameters: 2
            }
        );
    }
}
