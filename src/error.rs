//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Curve and fee failures propagate unchanged through the
//! pool ledger, so a caller at the transaction boundary sees exactly which
//! check rejected the operation.  A failed operation never leaves a pool
//! partially mutated.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every way a pool operation can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmError {
    /// A fee fraction has a zero denominator with a nonzero numerator, or
    /// the owner trade fee exceeds the trade fee.
    #[error("invalid fee schedule: {0}")]
    InvalidFeeSchedule(&'static str),

    /// Unknown curve tag or a curve parameter out of range.
    #[error("invalid curve parameters: {0}")]
    InvalidCurveParameters(&'static str),

    /// A deposit supplied nothing to deposit.
    #[error("deposit amounts are zero")]
    ZeroDeposit,

    /// A proportional deposit deviates from the pool ratio beyond tolerance.
    #[error("deposit does not match the pool ratio")]
    Imbalanced,

    /// More shares requested than exist, or the pool has no shares.
    #[error("insufficient pool shares")]
    InsufficientShares,

    /// The operation would drain (or overdraw) a reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A reserve or the input amount is zero, so no price exists.
    #[error("zero invariant: {0}")]
    ZeroInvariant(&'static str),

    /// A caller-supplied minimum or maximum bound was violated.
    #[error("slippage bound exceeded")]
    SlippageExceeded,

    /// An intermediate or final value does not fit its integer type.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The operation would move zero tokens or mint/burn zero shares.
    #[error("operation rounds to zero tokens")]
    ZeroTradingTokens,

    /// The configured curve does not support this operation.
    #[error("operation not supported by the {0} curve")]
    UnsupportedCurveOperation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = AmmError::ArithmeticOverflow("swap numerator");
        assert_eq!(err.to_string(), "arithmetic overflow: swap numerator");
    }

    #[test]
    fn display_unit_variants() {
        assert_eq!(AmmError::Imbalanced.to_string(), "deposit does not match the pool ratio");
        assert_eq!(AmmError::SlippageExceeded.to_string(), "slippage bound exceeded");
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            AmmError::ZeroInvariant("reserve_in is zero"),
            AmmError::ZeroInvariant("reserve_in is zero")
        );
        assert_ne!(AmmError::InsufficientShares, AmmError::InsufficientLiquidity);
    }
}
