//! Product-detail page state.

use crate::state::ProductSelection;
use essancia_commerce::cart::Cart;
use essancia_commerce::catalog::Product;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// State owned by a single product-detail page view.
///
/// One instance per view; the parent instantiates it once, so no
/// process-wide flags are needed to guard against duplicate mounts.
/// Navigation drops the instance, which is how selection state resets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPageState {
    /// Transient size/color/quantity/tab/wishlist selection.
    pub selection: ProductSelection,
    /// The cart owned by this view.
    pub cart: Cart,
}

impl ProductPageState {
    /// Fresh state for a new page view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current selection into the cart.
    ///
    /// Appends a line item (never merges) and opens the drawer. The
    /// caller must have resolved the product already; a not-found page
    /// never reaches this.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add_item(
            product,
            &self.selection.size,
            &self.selection.color,
            self.selection.quantity,
        );
        debug!(
            product = %product.id,
            quantity = self.selection.quantity,
            entries = self.cart.entry_count(),
            "added to cart"
        );
    }

    /// "Buy it now" performs the same operation as add-to-cart; there
    /// is no checkout pipeline behind it.
    pub fn buy_it_now(&mut self, product: &Product) {
        self.add_to_cart(product);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use essancia_commerce::catalog::{ImageSet, PriceTag};
    use essancia_commerce::{Money, ProductId};

    fn product() -> Product {
        Product {
            id: ProductId::new("ess-tee-01"),
            name: "Monochrome Graphic Tee".to_string(),
            price: PriceTag::from(799.0),
            original_price: None,
            discount: None,
            images: ImageSet::Single("/images/tee.webp".to_string()),
            colors: vec!["White".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            description: None,
            features: Vec::new(),
            rating: 4.0,
            reviews: 3,
        }
    }

    #[test]
    fn test_add_to_cart_uses_selection() {
        let mut state = ProductPageState::new();
        state.selection.select_size("M");
        state.selection.increment_quantity();

        state.add_to_cart(&product());

        assert_eq!(state.cart.entry_count(), 1);
        let item = &state.cart.items()[0];
        assert_eq!(item.size, "M");
        assert_eq!(item.color, "White"); // defaulted at add time
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, Money::from_paise(79900));
        assert!(state.cart.is_drawer_open());
    }

    #[test]
    fn test_buy_it_now_is_add_to_cart() {
        let mut state = ProductPageState::new();
        state.buy_it_now(&product());
        assert_eq!(state.cart.entry_count(), 1);
        assert!(state.cart.is_drawer_open());
    }

    #[test]
    fn test_fresh_state_per_view() {
        let state = ProductPageState::new();
        assert!(state.cart.is_empty());
        assert_eq!(state.selection.quantity, 1);
        assert!(!state.cart.is_drawer_open());
    }
}
