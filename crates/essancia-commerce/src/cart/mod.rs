//! Shopping cart module.
//!
//! Contains the positional line-item store and derived totals.

mod cart;
mod totals;

pub use cart::{Cart, CartLineItem};
pub use totals::{CartTotals, SHIPPING_AT_CHECKOUT};
