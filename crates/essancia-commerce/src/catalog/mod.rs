//! Product catalog module.
//!
//! Contains the category enumeration, product types with field
//! normalization, and the lookup resolver.

mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::{Category, CategoryKey};
pub use product::{ImageSet, PriceTag, Product};
