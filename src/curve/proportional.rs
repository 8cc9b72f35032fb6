//! Share math shared by every curve.
//!
//! Shares are a proportional claim on both reserves, independent of how
//! the curve prices swaps:
//!
//! ```text
//! seed:      shares = ⌊√(a · b)⌋
//! deposit:   shares = min(⌊S · a / Ra⌋, ⌊S · b / Rb⌋)
//! redeem:    x      = Rx · shares / S       (rounding chosen by caller)
//! ```

use core::cmp::{max, min};

use crate::domain::{Amount, Fraction, Rounding, Shares};
use crate::error::AmmError;
use crate::math::{isqrt, mul_div};

/// Shares minted for depositing `amount_a` and `amount_b`.
///
/// When `supply` is zero this seeds the pool with `⌊√(a · b)⌋` shares and
/// requires both amounts to be nonzero.  Otherwise the deposit must match
/// the reserve ratio: the two per-side share counts may differ by at most
/// one unit of rounding slack plus `max_imbalance` of the smaller count.
///
/// # Errors
///
/// - [`AmmError::ZeroDeposit`] if both amounts are zero, or if seeding
///   with one side zero.
/// - [`AmmError::Imbalanced`] if the deposit is off-ratio beyond tolerance
///   (a one-sided deposit into a live pool always is).
/// - [`AmmError::ZeroInvariant`] if a reserve is zero while shares exist.
/// - [`AmmError::ZeroTradingTokens`] if the deposit is too small to mint.
/// - [`AmmError::ArithmeticOverflow`] on overflow.
pub fn deposit_ratio(
    reserve_a: Amount,
    reserve_b: Amount,
    supply: Shares,
    amount_a: Amount,
    amount_b: Amount,
    max_imbalance: Fraction,
) -> Result<Shares, AmmError> {
    if amount_a.is_zero() && amount_b.is_zero() {
        return Err(AmmError::ZeroDeposit);
    }

    if supply.is_zero() {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::ZeroDeposit);
        }
        // √(u64 · u64) < 2^64, so the narrowing cannot fail.
        let seeded = isqrt(amount_a.widen() * amount_b.widen());
        return Shares::from_wide(seeded)
            .ok_or(AmmError::ArithmeticOverflow("seed shares exceed u64"));
    }

    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::ZeroInvariant("reserve is zero with shares outstanding"));
    }
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::Imbalanced);
    }

    let share_a = mul_div(supply.widen(), amount_a.widen(), reserve_a.widen(), Rounding::Down)?;
    let share_b = mul_div(supply.widen(), amount_b.widen(), reserve_b.widen(), Rounding::Down)?;
    let low = min(share_a, share_b);
    let high = max(share_a, share_b);

    let tolerance = if max_imbalance.is_zero() {
        0
    } else {
        mul_div(
            low,
            u128::from(max_imbalance.numerator()),
            u128::from(max_imbalance.denominator()),
            Rounding::Down,
        )?
    };
    if high - low > tolerance.saturating_add(1) {
        return Err(AmmError::Imbalanced);
    }
    if low == 0 {
        return Err(AmmError::ZeroTradingTokens);
    }
    Shares::from_wide(low).ok_or(AmmError::ArithmeticOverflow("minted shares exceed u64"))
}

/// Token amounts backing `shares` out of `supply`.
///
/// Deposits round [`Up`](Rounding::Up) (the depositor pays at least the
/// exact value), redemptions round [`Down`](Rounding::Down).
///
/// # Errors
///
/// - [`AmmError::InsufficientShares`] if `supply` is zero or
///   `shares > supply`.
/// - [`AmmError::ArithmeticOverflow`] on overflow.
pub fn trading_tokens_for_shares(
    shares: Shares,
    supply: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    rounding: Rounding,
) -> Result<(Amount, Amount), AmmError> {
    if supply.is_zero() {
        return Err(AmmError::InsufficientShares);
    }
    if rounding.is_down() && shares > supply {
        return Err(AmmError::InsufficientShares);
    }
    let a = mul_div(reserve_a.widen(), shares.widen(), supply.widen(), rounding)?;
    let b = mul_div(reserve_b.widen(), shares.widen(), supply.widen(), rounding)?;
    let a = Amount::from_wide(a).ok_or(AmmError::ArithmeticOverflow("token a exceeds u64"))?;
    let b = Amount::from_wide(b).ok_or(AmmError::ArithmeticOverflow("token b exceeds u64"))?;
    Ok((a, b))
}

/// `amount_x = ⌊reserve_x · shares / supply⌋` for both sides.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientShares`] if `shares > supply` or
/// `supply` is zero.
pub fn withdraw_amounts(
    reserve_a: Amount,
    reserve_b: Amount,
    supply: Shares,
    shares: Shares,
) -> Result<(Amount, Amount), AmmError> {
    trading_tokens_for_shares(shares, supply, reserve_a, reserve_b, Rounding::Down)
}
