//! Monetary value types.
//!
//! - [`Currency`]: descriptor of a monetary unit
//! - [`Money`]: amount paired with a currency

mod currency;
mod money;

pub use currency::{Currency, DEFAULT_DIGITS};
pub use money::Money;
