//! Store profile configuration.

use essancia_commerce::cart::SHIPPING_AT_CHECKOUT;
use essancia_commerce::CommerceError;
use serde::{Deserialize, Serialize};

/// Brand-level settings for the storefront.
///
/// Everything has a default so the storefront runs without a config
/// file; a TOML file can override any field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreProfile {
    /// Brand name used in page copy and the social hand-off message.
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// WhatsApp number for the hand-off link, in wa.me form.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Instagram handle, without the leading @.
    #[serde(default = "default_instagram_handle")]
    pub instagram_handle: String,

    /// Label shown in the drawer's shipping row. Shipping is never
    /// computed, so this is the row's entire content.
    #[serde(default = "default_shipping_label")]
    pub shipping_label: String,
}

fn default_brand_name() -> String {
    "Essancia Fashion".to_string()
}

fn default_whatsapp_number() -> String {
    "+918080261261".to_string()
}

fn default_instagram_handle() -> String {
    "essanciafashion".to_string()
}

fn default_shipping_label() -> String {
    SHIPPING_AT_CHECKOUT.to_string()
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            whatsapp_number: default_whatsapp_number(),
            instagram_handle: default_instagram_handle(),
            shipping_label: default_shipping_label(),
        }
    }
}

impl StoreProfile {
    /// Load a profile from a TOML file.
    pub fn load(path: &str) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::Config(format!("failed to read {}: {}", path, e)))?;
        toml::from_str(&content)
            .map_err(|e| CommerceError::Config(format!("failed to parse {}: {}", path, e)))
    }
}
