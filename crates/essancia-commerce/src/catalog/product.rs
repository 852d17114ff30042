//! Product types and field normalization.
//!
//! The seeded catalog carries heterogeneous field shapes (formatted
//! price text next to plain numbers, a single image next to image
//! lists). The untagged enums here absorb both shapes at the type
//! level and expose one canonical form to the rest of the crate.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price as stored in the catalog: either display text like
/// `"₹1,299.00"` or a plain numeric rupee amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceTag {
    /// Numeric rupee amount.
    Amount(f64),
    /// Formatted price text.
    Text(String),
}

impl PriceTag {
    /// Normalize to a numeric amount. Unparsable text becomes zero.
    pub fn amount(&self) -> Money {
        match self {
            PriceTag::Amount(rupees) => Money::from_rupees(*rupees),
            PriceTag::Text(text) => Money::parse(text),
        }
    }

    /// Strict normalization for boundary use.
    pub fn try_amount(&self) -> Result<Money, CommerceError> {
        match self {
            PriceTag::Amount(rupees) => Ok(Money::from_rupees(*rupees)),
            PriceTag::Text(text) => Money::try_parse(text),
        }
    }
}

impl fmt::Display for PriceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Text is shown exactly as authored.
            PriceTag::Text(text) => write!(f, "{}", text),
            PriceTag::Amount(_) => write!(f, "{}", self.amount()),
        }
    }
}

impl From<&str> for PriceTag {
    fn from(s: &str) -> Self {
        PriceTag::Text(s.to_string())
    }
}

impl From<f64> for PriceTag {
    fn from(rupees: f64) -> Self {
        PriceTag::Amount(rupees)
    }
}

/// Product images as stored: one reference or an ordered list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ImageSet {
    /// A single image reference.
    Single(String),
    /// An ordered list of image references.
    Many(Vec<String>),
}

impl ImageSet {
    /// The images as a slice, regardless of stored shape.
    pub fn as_slice(&self) -> &[String] {
        match self {
            ImageSet::Single(image) => std::slice::from_ref(image),
            ImageSet::Many(images) => images.as_slice(),
        }
    }

    /// The primary (first) image.
    pub fn primary(&self) -> &str {
        self.as_slice().first().map(String::as_str).unwrap_or("")
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the set is empty (only possible for an empty list).
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// A product in the catalog. Defined statically at build time and
/// immutable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique within the category; shown as the SKU.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current price.
    pub price: PriceTag,
    /// Pre-sale price, present when on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<PriceTag>,
    /// Discount label shown next to the original price (e.g., "20% off").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    /// One or more image references.
    pub images: ImageSet,
    /// Available colors; empty when the product has no color options.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Available sizes in display order; empty when not offered.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    /// Average rating, 0-5.
    #[serde(default)]
    pub rating: f32,
    /// Review count.
    #[serde(default)]
    pub reviews: u32,
}

impl Product {
    /// Check if the product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// The normalized unit price.
    pub fn unit_price(&self) -> Money {
        self.price.amount()
    }

    /// First available size, if the product is sized.
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// First available color, if the product has color options.
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Whether any reviews exist.
    pub fn has_reviews(&self) -> bool {
        self.reviews > 0
    }

    /// "review" or "reviews", singular iff the count is exactly 1.
    pub fn review_label(&self) -> &'static str {
        if self.reviews == 1 {
            "review"
        } else {
            "reviews"
        }
    }
}
