//! Curve engine: swap pricing and share math as pure functions of reserves.
//!
//! | Curve | Swap rule | Single-sided liquidity |
//! |-------|-----------|------------------------|
//! | [`ConstantProductCurve`] | `x · y = k` | yes |
//! | [`ConstantPriceCurve`] | fixed rate | no |
//!
//! [`CurveVariant`] wraps both for static dispatch.  Two-sided share math
//! is curve independent and lives in [`proportional`].

mod constant_price;
mod constant_product;
mod curve_variant;
pub mod proportional;

pub use constant_price::ConstantPriceCurve;
pub use constant_product::ConstantProductCurve;
pub use curve_variant::CurveVariant;
