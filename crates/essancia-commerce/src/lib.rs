//! Storefront domain types and logic for Essancia Fashion.
//!
//! This crate provides the behavioral core of the brand storefront:
//!
//! - **Catalog**: typed categories, products with field normalization,
//!   and the (category, id) resolver
//! - **Cart**: an ordered line-item store with derived totals and the
//!   drawer-visibility flag
//! - **Money**: paise-based rupee amounts with text normalization
//!
//! There is no backend and no persistence; everything is in-memory and
//! single-threaded. Lookups return `Option`, invalid cart mutations
//! degrade to silent no-ops, and nothing in the read path panics.
//!
//! # Example
//!
//! ```
//! use essancia_commerce::prelude::*;
//!
//! let product = Product {
//!     id: ProductId::new("ess-hoodie-01"),
//!     name: "Shadow Oversized Hoodie".to_string(),
//!     price: PriceTag::from("\u{20b9}1,299.00"),
//!     original_price: None,
//!     discount: None,
//!     images: ImageSet::Single("/images/hoodie.webp".to_string()),
//!     colors: vec!["Black".to_string()],
//!     sizes: vec!["M".to_string(), "L".to_string()],
//!     description: None,
//!     features: Vec::new(),
//!     rating: 4.5,
//!     reviews: 12,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, "L", "", 2);
//!
//! assert_eq!(cart.badge_label(), "1 item");
//! assert_eq!(cart.total().display(), "\u{20b9}2598.00");
//! assert!(cart.is_drawer_open());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryKey, ImageSet, PriceTag, Product};

    // Cart
    pub use crate::cart::{Cart, CartLineItem, CartTotals, SHIPPING_AT_CHECKOUT};
}
