//! The pool ledger.
//!
//! [`Pool`] holds the reserves and share supply of one token pair and
//! implements [`SwapPool`](crate::traits::SwapPool) and
//! [`LiquidityPool`](crate::traits::LiquidityPool).  Its curve is a
//! [`CurveVariant`](crate::curve::CurveVariant), so one pool type serves
//! every curve.

mod pool;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use pool::Pool;
