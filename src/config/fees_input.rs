//! Raw fee parameters as they arrive at the initialization boundary.

use crate::domain::{FeeSchedule, Fraction};

/// Eight unsigned numerator/denominator fields describing a pool's fees.
///
/// This is the wire-level shape; convert it with
/// [`to_fee_schedule`](Self::to_fee_schedule) (or `From`) and validate the
/// result before use.
///
/// # Example
///
/// ```rust
/// use tandem_amm::config::FeesInput;
///
/// let fees = FeesInput {
///     trade_fee_numerator: 25,
///     trade_fee_denominator: 10_000,
///     ..FeesInput::default()
/// };
/// assert!(fees.to_fee_schedule().validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct FeesInput {
    pub trade_fee_numerator: u64,
    pub trade_fee_denominator: u64,
    pub owner_trade_fee_numerator: u64,
    pub owner_trade_fee_denominator: u64,
    pub owner_withdraw_fee_numerator: u64,
    pub owner_withdraw_fee_denominator: u64,
    pub host_fee_numerator: u64,
    pub host_fee_denominator: u64,
}

impl FeesInput {
    /// Pairs the fields into a [`FeeSchedule`] without validating it.
    #[must_use]
    pub const fn to_fee_schedule(&self) -> FeeSchedule {
        FeeSchedule::new(
            Fraction::new(self.trade_fee_numerator, self.trade_fee_denominator),
            Fraction::new(self.owner_trade_fee_numerator, self.owner_trade_fee_denominator),
            Fraction::new(
                self.owner_withdraw_fee_numerator,
                self.owner_withdraw_fee_denominator,
            ),
            Fraction::new(self.host_fee_numerator, self.host_fee_denominator),
        )
    }
}

impl From<FeesInput> for FeeSchedule {
    fn from(input: FeesInput) -> Self {
        input.to_fee_schedule()
    }
}

impl From<FeeSchedule> for FeesInput {
    fn from(fees: FeeSchedule) -> Self {
        Self {
            trade_fee_numerator: fees.trade_fee().numerator(),
            trade_fee_denominator: fees.trade_fee().denominator(),
            owner_trade_fee_numerator: fees.owner_trade_fee().numerator(),
            owner_trade_fee_denominator: fees.owner_trade_fee().denominator(),
            owner_withdraw_fee_numerator: fees.owner_withdraw_fee().numerator(),
            owner_withdraw_fee_denominator: fees.owner_withdraw_fee().denominator(),
            host_fee_numerator: fees.host_fee().numerator(),
            host_fee_denominator: fees.host_fee().denominator(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::AmmError;

    fn sample() -> FeesInput {
        FeesInput {
            trade_fee_numerator: 25,
            trade_fee_denominator: 10_000,
            owner_trade_fee_numerator: 5,
            owner_trade_fee_denominator: 10_000,
            owner_withdraw_fee_numerator: 1,
            owner_withdraw_fee_denominator: 6,
            host_fee_numerator: 20,
            host_fee_denominator: 100,
        }
    }

    #[test]
    fn fields_map_to_fractions() {
        let fees = sample().to_fee_schedule();
        assert_eq!(fees.trade_fee(), Fraction::new(25, 10_000));
        assert_eq!(fees.owner_trade_fee(), Fraction::new(5, 10_000));
        assert_eq!(fees.owner_withdraw_fee(), Fraction::new(1, 6));
        assert_eq!(fees.host_fee(), Fraction::new(20, 100));
    }

    #[test]
    fn all_zero_input_is_valid() {
        assert!(FeesInput::default().to_fee_schedule().validate().is_ok());
    }

    #[test]
    fn zero_denominator_with_numerator_fails_validation() {
        let input = FeesInput {
            host_fee_numerator: 1,
            ..FeesInput::default()
        };
        assert!(matches!(
            FeeSchedule::from(input).validate(),
            Err(AmmError::InvalidFeeSchedule(_))
        ));
    }

    #[test]
    fn schedule_converts_back() {
        let input = sample();
        assert_eq!(FeesInput::from(FeeSchedule::from(input)), input);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_from_json() {
        let json = r#"{
            "trade_fee_numerator": 25,
            "trade_fee_denominator": 10000,
            "owner_trade_fee_numerator": 5,
            "owner_trade_fee_denominator": 10000,
            "owner_withdraw_fee_numerator": 1,
            "owner_withdraw_fee_denominator": 6,
            "host_fee_numerator": 20,
            "host_fee_denominator": 100
        }"#;
        let Ok(decoded) = serde_json::from_str::<FeesInput>(json) else {
            panic!("expected valid json");
        };
        assert_eq!(decoded, sample());
    }
}
