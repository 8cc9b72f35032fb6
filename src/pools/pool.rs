//! The pool ledger: two reserves, a share supply, and the rules that move
//! them.
//!
//! # Swap Algorithm (Token A → Token B)
//!
//! 1. `trade_fee = ⌊amount_in × trade_rate⌋`
//! 2. `owner_fee = ⌊amount_in × owner_trade_rate⌋` (part of `trade_fee`)
//! 3. `net_input = amount_in − trade_fee`
//! 4. `amount_out = curve(reserve_a, reserve_b, net_input)`
//! 5. `reserve_a += amount_in − owner_fee`
//! 6. `reserve_b −= amount_out`
//!
//! # Validate Then Commit
//!
//! Every operation first computes a transition (the complete next
//! state) from `&self`, running every check and every checked addition
//! along the way.  Only a fully computed transition is applied, so an
//! error never leaves the pool half-updated.

use tracing::debug;

use crate::config::PoolConfig;
use crate::curve::{proportional, CurveVariant};
use crate::domain::{
    AccountKey, Amount, DepositReceipt, FeeSchedule, Fraction, Rounding, Shares, SwapQuote,
    SwapSpec, TradeDirection, WithdrawReceipt,
};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::{CurveCalculator, FromConfig, LiquidityPool, SwapPool};

/// Next state of the mutable part of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    reserve_a: Amount,
    reserve_b: Amount,
    share_supply: Shares,
}

/// A two-token liquidity pool.
///
/// Created empty from a [`PoolConfig`] via [`FromConfig`] (usually through
/// [`PoolFactory`](crate::factory::PoolFactory)).  The first
/// [`deposit`](LiquidityPool::deposit) seeds both reserves.
///
/// # State
///
/// - `reserve_a` / `reserve_b`: token balances the pool holds
/// - `share_supply`: outstanding pool shares; zero exactly when both
///   reserves are zero
///
/// The fee schedule, curve, accounts and deposit tolerance are fixed at
/// creation.  The pool never moves tokens itself: callers perform the
/// transfers described by the returned quotes and receipts.
///
/// # Example
///
/// ```rust
/// use tandem_amm::config::PoolConfig;
/// use tandem_amm::curve::CurveVariant;
/// use tandem_amm::domain::{AccountKey, Amount, FeeSchedule, Fraction, SwapSpec, TradeDirection};
/// use tandem_amm::pools::Pool;
/// use tandem_amm::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let fees = FeeSchedule::new(
///     Fraction::new(25, 10_000),
///     Fraction::ZERO,
///     Fraction::ZERO,
///     Fraction::ZERO,
/// );
/// let cfg = PoolConfig::new(
///     fees,
///     CurveVariant::constant_product(),
///     AccountKey::from_bytes([1u8; 32]),
///     AccountKey::from_bytes([2u8; 32]),
/// );
/// let mut pool = Pool::from_config(&cfg).expect("valid config");
/// pool.deposit(Amount::new(1_000_000), Amount::new(1_000_000)).expect("seeded");
///
/// let quote = pool
///     .swap(SwapSpec::exact_in(TradeDirection::AtoB, Amount::new(1_000)))
///     .expect("swap ok");
/// assert_eq!(quote.trade_fee(), Amount::new(2));
/// assert_eq!(quote.amount_out(), Amount::new(997));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    reserve_a: Amount,
    reserve_b: Amount,
    share_supply: Shares,
    fees: FeeSchedule,
    curve: CurveVariant,
    authority: AccountKey,
    fee_account: AccountKey,
    max_imbalance: Fraction,
}

impl Pool {
    /// Returns the current reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the pool's curve.
    #[must_use]
    pub const fn curve(&self) -> CurveVariant {
        self.curve
    }

    /// Returns the authority key carried for the caller's transfers.
    #[must_use]
    pub const fn authority(&self) -> AccountKey {
        self.authority
    }

    /// Returns the account owner fees are routed to.
    #[must_use]
    pub const fn fee_account(&self) -> AccountKey {
        self.fee_account
    }

    /// Returns the deposit imbalance tolerance.
    #[must_use]
    pub const fn max_imbalance(&self) -> Fraction {
        self.max_imbalance
    }

    /// Returns `true` if the pool holds nothing and has no shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.share_supply.is_zero()
    }

    /// `reserve_a × reserve_b`, the constant product `k`.
    #[must_use]
    pub const fn invariant(&self) -> u128 {
        self.reserve_a.widen() * self.reserve_b.widen()
    }

    /// `(reserve_in, reserve_out)` for a direction.
    const fn oriented(&self, direction: TradeDirection) -> (Amount, Amount) {
        match direction {
            TradeDirection::AtoB => (self.reserve_a, self.reserve_b),
            TradeDirection::BtoA => (self.reserve_b, self.reserve_a),
        }
    }

    /// Reserves with the direction's first token replaced by `reserve`.
    const fn replace_first(&self, direction: TradeDirection, reserve: Amount) -> (Amount, Amount) {
        match direction {
            TradeDirection::AtoB => (reserve, self.reserve_b),
            TradeDirection::BtoA => (self.reserve_a, reserve),
        }
    }

    /// `(amount, 0)` or `(0, amount)` depending on the direction's first token.
    const fn one_sided(direction: TradeDirection, amount: Amount) -> (Amount, Amount) {
        match direction {
            TradeDirection::AtoB => (amount, Amount::ZERO),
            TradeDirection::BtoA => (Amount::ZERO, amount),
        }
    }

    /// Trade fee on the half of a single-sided amount that is a swap.
    fn half_trade_fee(&self, amount: Amount) -> Result<Amount, AmmError> {
        self.fees
            .compute_trade_fee(Amount::new(amount.get().div_ceil(2)))
    }

    fn commit(&mut self, next: Transition) {
        self.reserve_a = next.reserve_a;
        self.reserve_b = next.reserve_b;
        self.share_supply = next.share_supply;
    }

    // -- planning -------------------------------------------------------------

    fn plan_swap(&self, spec: &SwapSpec) -> Result<(SwapQuote, Transition), AmmError> {
        let direction = spec.direction();
        let amount_in = spec.amount_in();
        if amount_in.is_zero() {
            return Err(AmmError::ZeroInvariant("swap input is zero"));
        }
        let (reserve_in, reserve_out) = self.oriented(direction);

        let trade_fee = self.fees.compute_trade_fee(amount_in)?;
        let owner_fee = self.fees.compute_owner_trade_fee(amount_in)?;
        let net_input = amount_in.safe_sub(&trade_fee)?;

        let amount_out = self
            .curve
            .swap_output(reserve_in, reserve_out, net_input, direction)?;
        if amount_out.is_zero() {
            return Err(AmmError::ZeroTradingTokens);
        }
        if amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }
        if let Some(minimum) = spec.minimum_amount_out() {
            if amount_out < minimum {
                return Err(AmmError::SlippageExceeded);
            }
        }

        // The host cut is paid out of the owner fee, never on top of it.
        // An all-zero key means no host.
        let host_fee = match spec.host() {
            Some(host) if !host.is_default() => self.fees.compute_host_fee(owner_fee)?,
            _ => Amount::ZERO,
        };
        let quote = SwapQuote::new(
            direction, amount_in, amount_out, trade_fee, owner_fee, host_fee,
        )?;

        let new_in = reserve_in.safe_add(&quote.pool_input())?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        let (reserve_a, reserve_b) = match direction {
            TradeDirection::AtoB => (new_in, new_out),
            TradeDirection::BtoA => (new_out, new_in),
        };
        let next = Transition {
            reserve_a,
            reserve_b,
            share_supply: self.share_supply,
        };
        Ok((quote, next))
    }

    fn plan_withdraw(&self, shares: Shares) -> Result<(WithdrawReceipt, Transition), AmmError> {
        let supply = self.share_supply;
        if supply.is_zero() || shares > supply {
            return Err(AmmError::InsufficientShares);
        }
        // The last holder out takes everything; there is nobody left for
        // a withdraw fee to accrue to.
        let fee = if shares == supply {
            Shares::ZERO
        } else {
            self.fees.compute_owner_withdraw_fee(shares)?
        };
        let redeemed = shares.safe_sub(&fee)?;
        let (amount_a, amount_b) =
            self.curve
                .withdraw_amounts(self.reserve_a, self.reserve_b, supply, redeemed)?;
        if (amount_a.is_zero() && !self.reserve_a.is_zero())
            || (amount_b.is_zero() && !self.reserve_b.is_zero())
        {
            return Err(AmmError::ZeroTradingTokens);
        }

        let next = Transition {
            reserve_a: self.reserve_a.safe_sub(&amount_a)?,
            reserve_b: self.reserve_b.safe_sub(&amount_b)?,
            share_supply: supply.safe_sub(&shares)?,
        };
        Ok((WithdrawReceipt::new(amount_a, amount_b, shares, fee), next))
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            share_supply: Shares::ZERO,
            fees: config.fees(),
            curve: config.curve(),
            authority: config.authority(),
            fee_account: config.fee_account(),
            max_imbalance: config.max_imbalance(),
        })
    }
}

impl SwapPool for Pool {
    fn quote_swap(&self, spec: &SwapSpec) -> Result<SwapQuote, AmmError> {
        self.plan_swap(spec).map(|(quote, _)| quote)
    }

    fn swap(&mut self, spec: SwapSpec) -> Result<SwapQuote, AmmError> {
        let (quote, next) = self.plan_swap(&spec)?;
        self.commit(next);
        debug!(
            direction = %quote.direction(),
            amount_in = quote.amount_in().get(),
            amount_out = quote.amount_out().get(),
            trade_fee = quote.trade_fee().get(),
            owner_fee = quote.owner_fee().get(),
            host_fee = quote.host_fee().get(),
            reserve_a = self.reserve_a.get(),
            reserve_b = self.reserve_b.get(),
            "swap committed"
        );
        Ok(quote)
    }

    /// Output units per input unit at the current reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroInvariant`] for an empty constant product
    /// pool.
    fn spot_price(&self, direction: TradeDirection) -> Result<Fraction, AmmError> {
        let (reserve_in, reserve_out) = self.oriented(direction);
        self.curve.spot_price(reserve_in, reserve_out, direction)
    }

    fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    fn fee_schedule(&self) -> FeeSchedule {
        self.fees
    }
}

impl LiquidityPool for Pool {
    fn deposit(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositReceipt, AmmError> {
        let minted = self.curve.deposit_ratio(
            self.reserve_a,
            self.reserve_b,
            self.share_supply,
            amount_a,
            amount_b,
            self.max_imbalance,
        )?;
        let next = Transition {
            reserve_a: self.reserve_a.safe_add(&amount_a)?,
            reserve_b: self.reserve_b.safe_add(&amount_b)?,
            share_supply: self.share_supply.safe_add(&minted)?,
        };
        self.commit(next);
        debug!(
            amount_a = amount_a.get(),
            amount_b = amount_b.get(),
            minted = minted.get(),
            share_supply = self.share_supply.get(),
            "deposit committed"
        );
        Ok(DepositReceipt::new(amount_a, amount_b, minted))
    }

    fn deposit_exact_shares(
        &mut self,
        shares: Shares,
        maximum_a: Amount,
        maximum_b: Amount,
    ) -> Result<DepositReceipt, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::ZeroDeposit);
        }
        if self.share_supply.is_zero() {
            return Err(AmmError::ZeroInvariant(
                "exact-share deposit needs a seeded pool",
            ));
        }
        let (amount_a, amount_b) = proportional::trading_tokens_for_shares(
            shares,
            self.share_supply,
            self.reserve_a,
            self.reserve_b,
            Rounding::Up,
        )?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::ZeroTradingTokens);
        }
        if amount_a > maximum_a || amount_b > maximum_b {
            return Err(AmmError::SlippageExceeded);
        }
        let next = Transition {
            reserve_a: self.reserve_a.safe_add(&amount_a)?,
            reserve_b: self.reserve_b.safe_add(&amount_b)?,
            share_supply: self.share_supply.safe_add(&shares)?,
        };
        self.commit(next);
        debug!(
            amount_a = amount_a.get(),
            amount_b = amount_b.get(),
            minted = shares.get(),
            share_supply = self.share_supply.get(),
            "exact-share deposit committed"
        );
        Ok(DepositReceipt::new(amount_a, amount_b, shares))
    }

    fn deposit_single(
        &mut self,
        direction: TradeDirection,
        amount_in: Amount,
        minimum_shares: Shares,
    ) -> Result<DepositReceipt, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroDeposit);
        }
        let fee = self.half_trade_fee(amount_in)?;
        let net = amount_in.safe_sub(&fee)?;
        let (reserve, _) = self.oriented(direction);
        let minted = self
            .curve
            .deposit_single_token(net, reserve, self.share_supply)?;
        if minted.is_zero() {
            return Err(AmmError::ZeroTradingTokens);
        }
        if minted < minimum_shares {
            return Err(AmmError::SlippageExceeded);
        }

        let (reserve_a, reserve_b) = self.replace_first(direction, reserve.safe_add(&amount_in)?);
        let next = Transition {
            reserve_a,
            reserve_b,
            share_supply: self.share_supply.safe_add(&minted)?,
        };
        self.commit(next);
        debug!(
            %direction,
            amount_in = amount_in.get(),
            trade_fee = fee.get(),
            minted = minted.get(),
            share_supply = self.share_supply.get(),
            "single-sided deposit committed"
        );
        let (amount_a, amount_b) = Self::one_sided(direction, amount_in);
        Ok(DepositReceipt::new(amount_a, amount_b, minted))
    }

    fn withdraw_bounded(
        &mut self,
        shares: Shares,
        minimum_a: Amount,
        minimum_b: Amount,
    ) -> Result<WithdrawReceipt, AmmError> {
        let (receipt, next) = self.plan_withdraw(shares)?;
        if receipt.amount_a() < minimum_a || receipt.amount_b() < minimum_b {
            return Err(AmmError::SlippageExceeded);
        }
        self.commit(next);
        debug!(
            burned = shares.get(),
            owner_withdraw_fee = receipt.owner_withdraw_fee().get(),
            amount_a = receipt.amount_a().get(),
            amount_b = receipt.amount_b().get(),
            share_supply = self.share_supply.get(),
            "withdraw committed"
        );
        Ok(receipt)
    }

    fn withdraw_single(
        &mut self,
        direction: TradeDirection,
        amount_out: Amount,
        maximum_shares: Shares,
    ) -> Result<WithdrawReceipt, AmmError> {
        let supply = self.share_supply;
        let gross = amount_out.safe_add(&self.half_trade_fee(amount_out)?)?;
        let (reserve, _) = self.oriented(direction);
        let burned = self.curve.withdraw_single_token(gross, reserve, supply)?;
        let fee = self.fees.compute_owner_withdraw_fee(burned)?;
        let charged = burned.safe_add(&fee)?;

        if charged.is_zero() {
            return Err(AmmError::ZeroTradingTokens);
        }
        if charged > maximum_shares {
            return Err(AmmError::SlippageExceeded);
        }
        // Burning the whole supply here would strand the other reserve.
        if charged >= supply {
            return Err(AmmError::InsufficientShares);
        }

        let (reserve_a, reserve_b) = self.replace_first(direction, reserve.safe_sub(&amount_out)?);
        let next = Transition {
            reserve_a,
            reserve_b,
            share_supply: supply.safe_sub(&charged)?,
        };
        self.commit(next);
        debug!(
            %direction,
            amount_out = amount_out.get(),
            burned = charged.get(),
            owner_withdraw_fee = fee.get(),
            share_supply = self.share_supply.get(),
            "single-sided withdraw committed"
        );
        let (amount_a, amount_b) = Self::one_sided(direction, amount_out);
        Ok(WithdrawReceipt::new(amount_a, amount_b, charged, fee))
    }

    fn preview_withdraw(&self, shares: Shares) -> Result<WithdrawReceipt, AmmError> {
        self.plan_withdraw(shares).map(|(receipt, _)| receipt)
    }

    fn share_supply(&self) -> Shares {
        self.share_supply
    }
}
