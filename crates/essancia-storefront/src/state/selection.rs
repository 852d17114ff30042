//! Per-page selection state.

use serde::{Deserialize, Serialize};

/// The product info panel tabs. Mutually exclusive; switching has no
/// side effects beyond display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InfoTab {
    #[default]
    Description,
    Features,
    Reviews,
}

impl InfoTab {
    /// All tabs in display order.
    pub const ALL: [InfoTab; 3] = [InfoTab::Description, InfoTab::Features, InfoTab::Reviews];

    pub fn as_str(&self) -> &'static str {
        match self {
            InfoTab::Description => "description",
            InfoTab::Features => "features",
            InfoTab::Reviews => "reviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InfoTab::Description => "Description",
            InfoTab::Features => "Features",
            InfoTab::Reviews => "Reviews",
        }
    }
}

/// Transient selection state for one product-detail view.
///
/// Never persisted; a navigation discards the instance. Size and color
/// start empty and only default to the product's first option at
/// add-to-cart time, not at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSelection {
    /// Selected size, free-form, initialized empty.
    pub size: String,
    /// Selected color, free-form, initialized empty.
    pub color: String,
    /// Stepper quantity, starts at 1 and never drops below it.
    pub quantity: u32,
    /// Active info tab.
    pub active_tab: InfoTab,
    /// Wishlist flag, purely local, no cart interaction.
    pub wishlisted: bool,
}

impl Default for ProductSelection {
    fn default() -> Self {
        Self {
            size: String::new(),
            color: String::new(),
            quantity: 1,
            active_tab: InfoTab::default(),
            wishlisted: false,
        }
    }
}

impl ProductSelection {
    /// Fresh state for a new page view.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_size(&mut self, size: impl Into<String>) {
        self.size = size.into();
    }

    pub fn select_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Increment the stepper, unconstrained upward.
    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrement the stepper, flooring at 1.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    pub fn select_tab(&mut self, tab: InfoTab) {
        self.active_tab = tab;
    }

    pub fn toggle_wishlist(&mut self) {
        self.wishlisted = !self.wishlisted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sel = ProductSelection::new();
        assert_eq!(sel.size, "");
        assert_eq!(sel.color, "");
        assert_eq!(sel.quantity, 1);
        assert_eq!(sel.active_tab, InfoTab::Description);
        assert!(!sel.wishlisted);
    }

    #[test]
    fn test_stepper_floors_at_one() {
        let mut sel = ProductSelection::new();
        sel.decrement_quantity();
        assert_eq!(sel.quantity, 1);

        sel.increment_quantity();
        sel.increment_quantity();
        assert_eq!(sel.quantity, 3);

        sel.decrement_quantity();
        assert_eq!(sel.quantity, 2);
    }

    #[test]
    fn test_tab_transitions() {
        let mut sel = ProductSelection::new();
        sel.select_tab(InfoTab::Reviews);
        assert_eq!(sel.active_tab, InfoTab::Reviews);
        sel.select_tab(InfoTab::Features);
        assert_eq!(sel.active_tab, InfoTab::Features);
    }

    #[test]
    fn test_wishlist_toggle() {
        let mut sel = ProductSelection::new();
        sel.toggle_wishlist();
        assert!(sel.wishlisted);
        sel.toggle_wishlist();
        assert!(!sel.wishlisted);
    }

    #[test]
    fn test_selection_does_not_touch_quantity() {
        let mut sel = ProductSelection::new();
        sel.select_size("M");
        sel.select_color("Black");
        assert_eq!(sel.quantity, 1);
        assert_eq!(sel.size, "M");
        assert_eq!(sel.color, "Black");
    }
}
