//! Declarative blueprint for a new pool.

use core::fmt;

use super::{CurveInput, FeesInput};
use crate::curve::CurveVariant;
use crate::domain::{AccountKey, FeeSchedule, Fraction};
use crate::error::AmmError;
use crate::traits::CurveCalculator;

/// Everything needed to initialize a pool.
///
/// # Validation
///
/// - The fee schedule passes [`FeeSchedule::validate`].
/// - The curve passes [`CurveCalculator::validate`].
/// - `max_imbalance` has a nonzero denominator when its numerator is
///   nonzero.
///
/// # Example
///
/// ```rust
/// use tandem_amm::config::PoolConfig;
/// use tandem_amm::curve::CurveVariant;
/// use tandem_amm::domain::{AccountKey, FeeSchedule, Fraction};
///
/// let cfg = PoolConfig::new(
///     FeeSchedule::ZERO,
///     CurveVariant::constant_product(),
///     AccountKey::from_bytes([1u8; 32]),
///     AccountKey::from_bytes([2u8; 32]),
/// )
/// .with_max_imbalance(Fraction::new(1, 100));
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    fees: FeeSchedule,
    curve: CurveVariant,
    authority: AccountKey,
    fee_account: AccountKey,
    max_imbalance: Fraction,
}

impl PoolConfig {
    /// Creates a config with zero deposit imbalance tolerance.
    #[must_use]
    pub const fn new(
        fees: FeeSchedule,
        curve: CurveVariant,
        authority: AccountKey,
        fee_account: AccountKey,
    ) -> Self {
        Self {
            fees,
            curve,
            authority,
            fee_account,
            max_imbalance: Fraction::ZERO,
        }
    }

    /// Builds a config from boundary inputs.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidCurveParameters`] for an unknown curve
    /// tag.  Other checks are deferred to [`validate`](Self::validate).
    pub fn from_inputs(
        fees: FeesInput,
        curve: CurveInput,
        authority: AccountKey,
        fee_account: AccountKey,
    ) -> Result<Self, AmmError> {
        Ok(Self::new(fees.into(), curve.to_curve()?, authority, fee_account))
    }

    /// Sets the deposit imbalance tolerance, as a fraction of the smaller
    /// per-side share count.
    #[must_use]
    pub const fn with_max_imbalance(mut self, max_imbalance: Fraction) -> Self {
        self.max_imbalance = max_imbalance;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFeeSchedule`] from the fee schedule.
    /// - [`AmmError::InvalidCurveParameters`] from the curve, or for a
    ///   malformed `max_imbalance`.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fees.validate()?;
        self.curve.validate()?;
        if !self.max_imbalance.is_well_formed() {
            return Err(AmmError::InvalidCurveParameters(
                "max imbalance denominator is zero",
            ));
        }
        Ok(())
    }

    /// Returns the fee schedule.
    #[must_use]
    pub const fn fees(&self) -> FeeSchedule {
        self.fees
    }

    /// Returns the curve.
    #[must_use]
    pub const fn curve(&self) -> CurveVariant {
        self.curve
    }

    /// Returns the pool authority.
    #[must_use]
    pub const fn authority(&self) -> AccountKey {
        self.authority
    }

    /// Returns the account that receives owner fees.
    #[must_use]
    pub const fn fee_account(&self) -> AccountKey {
        self.fee_account
    }

    /// Returns the deposit imbalance tolerance.
    #[must_use]
    pub const fn max_imbalance(&self) -> Fraction {
        self.max_imbalance
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolConfig({}, {}, authority={})",
            self.curve, self.fees, self.authority
        )
    }
}
