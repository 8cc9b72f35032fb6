//! Value types used throughout the pool engine.
//!
//! Quantities are `u64` newtypes ([`Amount`], [`Shares`]); rates are
//! integer [`Fraction`]s.  Constructors are cheap and `const`; validation
//! that depends on several values (a whole [`FeeSchedule`]) is explicit.

mod account_key;
mod amount;
mod fee_schedule;
mod fraction;
mod receipt;
mod rounding;
mod shares;
mod swap_quote;
mod swap_spec;
mod trade_direction;

pub use account_key::AccountKey;
pub use amount::Amount;
pub use fee_schedule::FeeSchedule;
pub use fraction::Fraction;
pub use receipt::{DepositReceipt, WithdrawReceipt};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_quote::SwapQuote;
pub use swap_spec::SwapSpec;
pub use trade_direction::TradeDirection;
