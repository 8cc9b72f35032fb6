//! Pool lifecycle: creating validated, empty pools.

use tracing::{info, warn};

use crate::config::{CurveInput, FeesInput, PoolConfig};
use crate::domain::AccountKey;
use crate::error::AmmError;
use crate::pools::Pool;
use crate::traits::{CurveCalculator, FromConfig};

/// Stateless factory for creating pools from configuration.
///
/// `PoolFactory` is the single entry point for initializing a pool.  It
/// validates the configuration, delegates to [`Pool`]'s [`FromConfig`]
/// implementation, and logs the outcome.
///
/// # Thread Safety
///
/// [`initialize`](Self::initialize) is a pure function with no shared
/// mutable state.
///
/// # Example
///
/// ```rust
/// use tandem_amm::config::{CurveInput, FeesInput};
/// use tandem_amm::domain::AccountKey;
/// use tandem_amm::factory::PoolFactory;
/// use tandem_amm::traits::LiquidityPool;
///
/// let fees = FeesInput {
///     trade_fee_numerator: 25,
///     trade_fee_denominator: 10_000,
///     ..FeesInput::default()
/// };
/// let curve = CurveInput { curve_type: 0, curve_parameters: 0 };
/// let pool = PoolFactory::from_inputs(
///     fees,
///     curve,
///     AccountKey::from_bytes([1u8; 32]),
///     AccountKey::from_bytes([2u8; 32]),
/// )
/// .expect("pool created");
/// assert!(pool.share_supply().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolFactory;

impl PoolFactory {
    /// Creates an empty pool from a validated configuration.
    ///
    /// # Flow
    ///
    /// 1. Validate the configuration via [`PoolConfig::validate`].
    /// 2. Build the pool through [`FromConfig`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFeeSchedule`] for a malformed fee fraction or
    ///   an owner trade fee above the trade fee.
    /// - [`AmmError::InvalidCurveParameters`] for a bad curve parameter.
    pub fn initialize(config: &PoolConfig) -> Result<Pool, AmmError> {
        let curve = config.curve();
        match Pool::from_config(config) {
            Ok(pool) => {
                info!(
                    curve = curve.name(),
                    fees = %config.fees(),
                    authority = %config.authority(),
                    "pool initialized"
                );
                Ok(pool)
            }
            Err(err) => {
                warn!(curve = curve.name(), error = %err, "pool initialization rejected");
                Err(err)
            }
        }
    }

    /// Decodes boundary inputs and initializes a pool.
    ///
    /// # Errors
    ///
    /// Same as [`initialize`](Self::initialize), plus
    /// [`AmmError::InvalidCurveParameters`] for an unknown curve tag.
    pub fn from_inputs(
        fees: FeesInput,
        curve: CurveInput,
        authority: AccountKey,
        fee_account: AccountKey,
    ) -> Result<Pool, AmmError> {
        let config = PoolConfig::from_inputs(fees, curve, authority, fee_account).map_err(|err| {
            warn!(curve_type = curve.curve_type, error = %err, "pool initialization rejected");
            err
        })?;
        Self::initialize(&config)
    }
}
