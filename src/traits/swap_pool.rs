//! Core swap trait for pricing and executing swaps and querying pool state.
//!
//! # Fee Deduction Invariant
//!
//! Every implementation deducts the trade fee from the input before the
//! curve prices it, and routes the owner fee out of the pool:
//!
//! ```text
//! trade_fee   = ⌊amount_in × trade_num / trade_den⌋
//! owner_fee   = ⌊amount_in × owner_num / owner_den⌋      (≤ trade_fee)
//! net_input   = amount_in − trade_fee
//! amount_out  = curve(net_input)
//! reserve_in  += amount_in − owner_fee
//! reserve_out −= amount_out
//! ```
//!
//! # Quote and Commit
//!
//! [`SwapPool::quote_swap`] runs every check and computes every delta
//! without touching state.  [`SwapPool::swap`] applies exactly that quote,
//! so a failing swap leaves the pool unchanged.

use crate::domain::{Amount, FeeSchedule, Fraction, SwapQuote, SwapSpec, TradeDirection};
use crate::error::AmmError;

/// Swap execution and pool-state queries.
///
/// # Errors
///
/// Swap methods return [`AmmError`] values.  Common variants:
///
/// - [`AmmError::ZeroInvariant`]: zero input or an empty reserve.
/// - [`AmmError::ZeroTradingTokens`]: the output rounds to zero.
/// - [`AmmError::InsufficientLiquidity`]: the output would drain a side.
/// - [`AmmError::SlippageExceeded`]: the output is below the caller's bound.
/// - [`AmmError::ArithmeticOverflow`]: an intermediate does not fit.
pub trait SwapPool {
    /// Prices a swap without mutating the pool.
    ///
    /// # Errors
    ///
    /// Every error [`swap`](Self::swap) can return.
    fn quote_swap(&self, spec: &SwapSpec) -> Result<SwapQuote, AmmError>;

    /// Executes a swap, updating both reserves atomically.
    ///
    /// # Errors
    ///
    /// Same as [`quote_swap`](Self::quote_swap); on error nothing changes.
    fn swap(&mut self, spec: SwapSpec) -> Result<SwapQuote, AmmError>;

    /// Marginal price of the direction's output in units per unit of input.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroInvariant`] if the curve needs reserves and
    /// a reserve is zero.
    fn spot_price(&self, direction: TradeDirection) -> Result<Fraction, AmmError>;

    /// Returns `(reserve_a, reserve_b)`.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);

    /// Returns the pool's fee schedule, fixed at creation.
    #[must_use]
    fn fee_schedule(&self) -> FeeSchedule;
}
