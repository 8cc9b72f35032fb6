//! # Tandem AMM
//!
//! Accounting and curve engine for a two-token automated market maker
//! pool: swap pricing, fee computation, and proportional share
//! bookkeeping, in checked integer arithmetic only.
//!
//! The engine computes; it never moves tokens.  Every operation returns
//! the amounts the caller must transfer (a [`SwapQuote`](domain::SwapQuote),
//! [`DepositReceipt`](domain::DepositReceipt) or
//! [`WithdrawReceipt`](domain::WithdrawReceipt)) and either applies
//! completely or leaves the pool unchanged.
//!
//! Two curves are supported:
//!
//! - **Constant Product** (`x · y = k`)
//! - **Constant Price** (fixed exchange rate)
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for boundary inputs and results |
//!
//! # Quick Start
//!
//! ```rust
//! use tandem_amm::config::{CurveInput, FeesInput};
//! use tandem_amm::domain::{AccountKey, Amount, SwapSpec, TradeDirection};
//! use tandem_amm::factory::PoolFactory;
//! use tandem_amm::traits::{LiquidityPool, SwapPool};
//!
//! // 1. Initialize an empty constant product pool with a 0.25% trade fee
//! let fees = FeesInput {
//!     trade_fee_numerator: 25,
//!     trade_fee_denominator: 10_000,
//!     ..FeesInput::default()
//! };
//! let curve = CurveInput { curve_type: 0, curve_parameters: 0 };
//! let mut pool = PoolFactory::from_inputs(
//!     fees,
//!     curve,
//!     AccountKey::from_bytes([1u8; 32]),
//!     AccountKey::from_bytes([2u8; 32]),
//! )
//! .expect("valid inputs");
//!
//! // 2. Seed it
//! let seed = pool
//!     .deposit(Amount::new(1_000_000), Amount::new(1_000_000))
//!     .expect("seeded");
//! assert_eq!(seed.shares().get(), 1_000_000);
//!
//! // 3. Swap 1 000 A for B
//! let quote = pool
//!     .swap(SwapSpec::exact_in(TradeDirection::AtoB, Amount::new(1_000)))
//!     .expect("swap succeeded");
//! assert_eq!(quote.amount_out(), Amount::new(997));
//!
//! // 4. Withdraw everything
//! let out = pool.withdraw(seed.shares()).expect("withdrawn");
//! assert_eq!(out.amount_a(), Amount::new(1_001_000));
//! assert!(pool.share_supply().is_zero());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  FeesInput + CurveInput, performs token transfers
//! └──────┬──────┘
//!        │ initialize(&config)
//!        ▼
//! ┌─────────────┐
//! │   Factory    │  validates config, logs, builds via FromConfig
//! └──────┬──────┘
//!        │ Pool
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  reserves + share supply; SwapPool + LiquidityPool
//! └──────┬──────┘
//!        │ CurveVariant (enum dispatch), FeeSchedule
//!        ▼
//! ┌─────────────┐
//! │    Curve     │  ConstantProduct, ConstantPrice, proportional share math
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Fraction`](domain::Fraction), [`FeeSchedule`](domain::FeeSchedule), etc. |
//! | [`curve`] | Curve engine and [`CurveVariant`](curve::CurveVariant) dispatch enum |
//! | [`traits`] | Seams: [`CurveCalculator`](traits::CurveCalculator), [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Boundary inputs and the [`PoolConfig`](config::PoolConfig) blueprint |
//! | [`pools`]  | The [`Pool`](pools::Pool) ledger |
//! | [`factory`] | [`PoolFactory`](factory::PoolFactory) for validated initialization |
//! | [`math`]   | Widened `mul_div`, integer square root, checked arithmetic |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `info`/`warn` on initialization
//! and `debug` on every committed ledger transition.  It never installs a
//! subscriber.

pub mod config;
pub mod curve;
pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
