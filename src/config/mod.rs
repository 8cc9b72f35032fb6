//! Pool configuration: boundary inputs and the [`PoolConfig`] blueprint.
//!
//! [`FeesInput`] and [`CurveInput`] mirror the raw integer fields a
//! transaction boundary supplies.  [`PoolConfig`] pairs the decoded fee
//! schedule and curve with the pool's accounts and is what the factory
//! validates.

mod curve_input;
mod fees_input;
mod pool_config;

pub use curve_input::{CurveInput, CurveType};
pub use fees_input::FeesInput;
pub use pool_config::PoolConfig;
