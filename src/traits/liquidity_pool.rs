//! Liquidity management trait extending [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The share supply changes only through deposits and withdrawals, and
//! `share_supply == 0` exactly when both reserves are zero.  Swaps never
//! mint or burn shares.
//!
//! # Single-Sided Operations
//!
//! [`LiquidityPool::deposit_single`] and [`LiquidityPool::withdraw_single`]
//! take a [`TradeDirection`]; the token it names first is the one moved
//! (`AtoB` deposits or withdraws token A).  Half of the amount is treated
//! as a swap and charged the trade fee.

use super::SwapPool;
use crate::domain::{Amount, DepositReceipt, Shares, TradeDirection, WithdrawReceipt};
use crate::error::AmmError;

/// Deposits and withdrawals against a pool's share supply.
///
/// Every method is all-or-nothing: on error the pool is unchanged.
///
/// # Errors
///
/// Common variants:
///
/// - [`AmmError::ZeroDeposit`]: nothing to deposit.
/// - [`AmmError::Imbalanced`]: a deposit does not match the pool ratio.
/// - [`AmmError::InsufficientShares`]: more shares than exist.
/// - [`AmmError::SlippageExceeded`]: a caller bound was not met.
/// - [`AmmError::ArithmeticOverflow`]: an intermediate does not fit.
pub trait LiquidityPool: SwapPool {
    /// Deposits both tokens and mints shares in proportion.
    ///
    /// The first deposit into an empty pool mints `⌊√(a · b)⌋` shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroDeposit`] if both amounts are zero, or if seeding
    ///   with one side zero.
    /// - [`AmmError::Imbalanced`] if off-ratio beyond tolerance.
    /// - [`AmmError::ZeroTradingTokens`] if nothing would be minted.
    fn deposit(&mut self, amount_a: Amount, amount_b: Amount)
        -> Result<DepositReceipt, AmmError>;

    /// Mints exactly `shares`, charging whatever both tokens that costs,
    /// rounded up.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroDeposit`] if `shares` is zero.
    /// - [`AmmError::ZeroInvariant`] if the pool is empty.
    /// - [`AmmError::ZeroTradingTokens`] if a required amount is zero.
    /// - [`AmmError::SlippageExceeded`] if a required amount exceeds its
    ///   maximum.
    fn deposit_exact_shares(
        &mut self,
        shares: Shares,
        maximum_a: Amount,
        maximum_b: Amount,
    ) -> Result<DepositReceipt, AmmError>;

    /// Deposits one token and mints shares for it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnsupportedCurveOperation`] if the curve cannot.
    /// - [`AmmError::ZeroInvariant`] if the pool is empty.
    /// - [`AmmError::ZeroTradingTokens`] if nothing would be minted.
    /// - [`AmmError::SlippageExceeded`] if fewer than `minimum_shares`.
    fn deposit_single(
        &mut self,
        direction: TradeDirection,
        amount_in: Amount,
        minimum_shares: Shares,
    ) -> Result<DepositReceipt, AmmError>;

    /// Burns `shares` for both tokens with no output bound.
    ///
    /// # Errors
    ///
    /// Same as [`withdraw_bounded`](Self::withdraw_bounded).
    fn withdraw(&mut self, shares: Shares) -> Result<WithdrawReceipt, AmmError> {
        self.withdraw_bounded(shares, Amount::ZERO, Amount::ZERO)
    }

    /// Burns `shares` for both tokens, requiring minimum outputs.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the supply.
    /// - [`AmmError::ZeroTradingTokens`] if a nonempty side would pay zero.
    /// - [`AmmError::SlippageExceeded`] if an output is below its minimum.
    fn withdraw_bounded(
        &mut self,
        shares: Shares,
        minimum_a: Amount,
        minimum_b: Amount,
    ) -> Result<WithdrawReceipt, AmmError>;

    /// Withdraws exactly `amount_out` of one token, burning what it costs.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnsupportedCurveOperation`] if the curve cannot.
    /// - [`AmmError::InsufficientLiquidity`] if the reserve cannot cover it.
    /// - [`AmmError::InsufficientShares`] if the cost exceeds the supply.
    /// - [`AmmError::SlippageExceeded`] if the cost exceeds
    ///   `maximum_shares`.
    fn withdraw_single(
        &mut self,
        direction: TradeDirection,
        amount_out: Amount,
        maximum_shares: Shares,
    ) -> Result<WithdrawReceipt, AmmError>;

    /// What [`withdraw`](Self::withdraw) would return, without mutating.
    ///
    /// # Errors
    ///
    /// Same as [`withdraw`](Self::withdraw).
    fn preview_withdraw(&self, shares: Shares) -> Result<WithdrawReceipt, AmmError>;

    /// Returns the outstanding share supply.
    #[must_use]
    fn share_supply(&self) -> Shares;
}
