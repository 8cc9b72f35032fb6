//! Integer arithmetic helpers for pool calculations.
//!
//! Everything here is integer-only: [`mul_div`] forms products in `u128`
//! and divides with an explicit [`Rounding`](crate::domain::Rounding),
//! [`isqrt`] seeds the first share supply, and [`CheckedArithmetic`]
//! turns checked `Option`s into `Result`s for ledger updates.

mod checked;
mod rounding;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, mul_div};
pub use sqrt::isqrt;
