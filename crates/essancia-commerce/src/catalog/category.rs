//! Category types for the product catalog.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of catalog categories.
///
/// Route parameters are untrusted strings; [`CategoryKey::from_param`]
/// is the only way in, so an unknown key is rejected at the boundary
/// instead of becoming a phantom lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Hoodie,
    Sweatshirt,
    Tshirt,
    Oversize,
    Joggers,
}

impl CategoryKey {
    /// All categories, in display order.
    pub const ALL: [CategoryKey; 5] = [
        CategoryKey::Hoodie,
        CategoryKey::Sweatshirt,
        CategoryKey::Tshirt,
        CategoryKey::Oversize,
        CategoryKey::Joggers,
    ];

    /// The URL-facing identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Hoodie => "hoodie",
            CategoryKey::Sweatshirt => "sweatshirt",
            CategoryKey::Tshirt => "tshirt",
            CategoryKey::Oversize => "oversize",
            CategoryKey::Joggers => "joggers",
        }
    }

    /// The customer-facing title.
    pub fn title(&self) -> &'static str {
        match self {
            CategoryKey::Hoodie => "Hoodies",
            CategoryKey::Sweatshirt => "Sweat-Shirts",
            CategoryKey::Tshirt => "T-Shirts",
            CategoryKey::Oversize => "Oversize Tees",
            CategoryKey::Joggers => "Joggers",
        }
    }

    /// Parse an untrusted route parameter.
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "hoodie" => Some(CategoryKey::Hoodie),
            "sweatshirt" => Some(CategoryKey::Sweatshirt),
            "tshirt" => Some(CategoryKey::Tshirt),
            "oversize" => Some(CategoryKey::Oversize),
            "joggers" => Some(CategoryKey::Joggers),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named grouping of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Category identifier.
    pub key: CategoryKey,
    /// Customer-facing title.
    pub title: String,
    /// Products in display order.
    pub products: Vec<Product>,
}

impl Category {
    /// Create a category with its canonical title.
    pub fn new(key: CategoryKey, products: Vec<Product>) -> Self {
        Self {
            key,
            title: key.title().to_string(),
            products,
        }
    }

    /// Find a product by id, first match wins.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }
}
