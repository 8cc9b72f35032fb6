//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use tandem_amm::prelude::*;
//! ```

pub use crate::domain::{
    AccountKey, Amount, DepositReceipt, FeeSchedule, Fraction, Rounding, Shares, SwapQuote,
    SwapSpec, TradeDirection, WithdrawReceipt,
};

pub use crate::traits::{CurveCalculator, FromConfig, LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{CurveInput, CurveType, FeesInput, PoolConfig};

pub use crate::curve::CurveVariant;

pub use crate::error::{AmmError, Result};

pub use crate::factory::PoolFactory;

pub use crate::pools::Pool;
