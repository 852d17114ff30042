//! Catalog lookup.

use crate::catalog::{Category, CategoryKey, Product};
use serde::{Deserialize, Serialize};

/// The static, read-only product catalog.
///
/// Built once from seed data and consumed immutably; the resolver does
/// not validate the seed beyond per-field normalization at read time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from categories in display order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// All categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by key.
    pub fn category(&self, key: CategoryKey) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Resolve a product by category and id.
    ///
    /// Linear find-first by id equality; if the seed carries duplicate
    /// ids the first match wins.
    pub fn resolve(&self, key: CategoryKey, id: &str) -> Option<&Product> {
        self.category(key)?.find(id)
    }

    /// Resolve from untrusted route parameters.
    ///
    /// An unknown category string or missing id yields `None`; the view
    /// renders "Product not found" and performs no cart operations.
    pub fn resolve_params(&self, category: &str, id: &str) -> Option<&Product> {
        let key = CategoryKey::from_param(category)?;
        self.resolve(key, id)
    }
}
