//! Pool initialization via the factory pattern.
//!
//! [`PoolFactory`] creates empty pools from a [`PoolConfig`] or straight
//! from the raw [`FeesInput`] and [`CurveInput`] a transaction boundary
//! supplies.
//!
//! # Usage
//!
//! ```rust
//! use tandem_amm::config::PoolConfig;
//! use tandem_amm::curve::CurveVariant;
//! use tandem_amm::domain::{AccountKey, Amount, FeeSchedule};
//! use tandem_amm::factory::PoolFactory;
//! use tandem_amm::traits::{LiquidityPool, SwapPool};
//!
//! let cfg = PoolConfig::new(
//!     FeeSchedule::ZERO,
//!     CurveVariant::constant_product(),
//!     AccountKey::from_bytes([1u8; 32]),
//!     AccountKey::from_bytes([2u8; 32]),
//! );
//! let mut pool = PoolFactory::initialize(&cfg).expect("pool created");
//! pool.deposit(Amount::new(1_000), Amount::new(4_000)).expect("seeded");
//! assert_eq!(pool.reserves(), (Amount::new(1_000), Amount::new(4_000)));
//! ```
//!
//! [`PoolConfig`]: crate::config::PoolConfig
//! [`FeesInput`]: crate::config::FeesInput
//! [`CurveInput`]: crate::config::CurveInput

mod pool_factory;

pub use pool_factory::PoolFactory;
