//! Derived cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping is never computed in this core; the summary row only ever
/// carries this label.
pub const SHIPPING_AT_CHECKOUT: &str = "Calculated at checkout";

/// A read-side snapshot of the cart's derived values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of unit price x quantity over all entries.
    pub subtotal: Money,
    /// Always equals the subtotal.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_totals_are_zero() {
        let totals = CartTotals::default();
        assert!(totals.subtotal.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_shipping_label() {
        assert_eq!(SHIPPING_AT_CHECKOUT, "Calculated at checkout");
    }
}
