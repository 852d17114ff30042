//! Cart and line item types.

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Carries no identity field; identity is the item's position in the
/// cart sequence. Two identical configurations stay separate entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product name (denormalized for display).
    pub name: String,
    /// Chosen size, empty when the product is unsized.
    pub size: String,
    /// Chosen color, empty when the product has no color options.
    pub color: String,
    /// Quantity, always >= 1.
    pub quantity: u32,
    /// Normalized per-unit price.
    pub unit_price: Money,
    /// Primary product image.
    pub image: String,
}

impl CartLineItem {
    /// Price for this line (unit price x quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// An ordered shopping cart, insertion order = display order.
///
/// Owned exclusively by one view instance; all mutations are
/// synchronous and atomic with respect to a single user interaction.
/// Invalid arguments degrade to silent no-ops rather than errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
    drawer_open: bool,
}

impl Cart {
    /// Create an empty cart with the drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line-item entries. This is the badge count;
    /// identical configurations added twice count as two.
    pub fn entry_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all entries. Never the badge count.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Badge label, singular iff exactly one entry (e.g., "1 item",
    /// "3 items").
    pub fn badge_label(&self) -> String {
        let count = self.entry_count();
        if count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", count)
        }
    }

    /// Append a line item for the given product configuration.
    ///
    /// Effective size/color fall back to the product's first available
    /// option when the selection is empty, or stay empty when the
    /// product offers none. Always appends a new entry; never merges
    /// with an existing identical configuration. Opens the drawer.
    ///
    /// A zero quantity is absorbed as a no-op; callers hold the >= 1
    /// invariant through the stepper.
    pub fn add_item(
        &mut self,
        product: &Product,
        selected_size: &str,
        selected_color: &str,
        quantity: u32,
    ) {
        if quantity < 1 {
            return;
        }

        let size = if selected_size.is_empty() {
            product.default_size().unwrap_or("")
        } else {
            selected_size
        };
        let color = if selected_color.is_empty() {
            product.default_color().unwrap_or("")
        } else {
            selected_color
        };

        self.items.push(CartLineItem {
            name: product.name.clone(),
            size: size.to_string(),
            color: color.to_string(),
            quantity,
            unit_price: product.unit_price(),
            image: product.images.primary().to_string(),
        });
        self.drawer_open = true;
    }

    /// Remove the entry at the given position; later entries shift
    /// down by one. An out-of-range index is silently absorbed.
    pub fn remove_item(&mut self, index: usize) {
        let mut position = 0;
        self.items.retain(|_| {
            let keep = position != index;
            position += 1;
            keep
        });
    }

    /// Replace the quantity at the given position.
    ///
    /// A quantity below 1 rejects the whole operation (no mutation, no
    /// clamping); an out-of-range index is silently absorbed.
    pub fn update_quantity(&mut self, index: usize, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }
    }

    /// Sum of line totals, saturating.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::ZERO, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Always equals the subtotal; shipping is only ever labeled
    /// "Calculated at checkout", never computed here.
    pub fn total(&self) -> Money {
        self.subtotal()
    }

    /// Snapshot of the derived totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            total: self.total(),
        }
    }

    /// Whether the drawer is visible.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Show the drawer.
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// Hide the drawer.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}
