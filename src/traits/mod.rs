//! Trait seams of the engine.
//!
//! [`CurveCalculator`] prices swaps for one curve family, [`SwapPool`] and
//! [`LiquidityPool`] are the ledger's operations, and [`FromConfig`] is
//! configuration-driven construction.

mod curve_calculator;
mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use curve_calculator::CurveCalculator;
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
