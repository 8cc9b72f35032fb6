//! Construction trait for building a pool from configuration.
//!
//! # Validation Contract
//!
//! Implementations validate the whole configuration during construction.
//! A successfully constructed pool is empty (zero reserves, zero shares)
//! and ready for its seeding deposit.
//!
//! # Factory Integration
//!
//! [`PoolFactory`](crate::factory::PoolFactory) calls `from_config` and
//! adds logging around it:
//!
//! ```text
//! PoolFactory::initialize(&cfg) => Pool::from_config(&cfg)
//! ```

use crate::error::AmmError;

/// Builds a value from a configuration of type `C`.
///
/// There is no blanket implementation; every pairing is explicit.
///
/// # Errors
///
/// Returns the configuration's validation error, such as
/// [`AmmError::InvalidFeeSchedule`] or [`AmmError::InvalidCurveParameters`].
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`AmmError`] if any parameter is out of range.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
