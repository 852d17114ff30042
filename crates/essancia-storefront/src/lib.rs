//! Product-detail view layer for the Essancia storefront.
//!
//! Composes the domain core (`essancia-commerce`) with per-page view
//! state and HTML section renderers. The page is assembled from four
//! sections: hero, purchase panel, info tabs, and the cart drawer.
//! Route parameters arrive as untrusted strings; an unresolved pair
//! renders a terminal not-found page.

pub mod config;
pub mod data;
pub mod sections;
pub mod share;
pub mod state;

pub use config::StoreProfile;
pub use share::{redirect_url, SocialChannel};
pub use state::{InfoTab, ProductPageState, ProductSelection};

use essancia_commerce::catalog::{Catalog, CategoryKey};
use tracing::{info, warn};

/// Render the full product-detail page for a route.
///
/// Resolves `category`/`id` from untrusted parameters; a miss
/// short-circuits to the not-found rendering with no cart sections at
/// all.
pub fn render_product_page(
    catalog: &Catalog,
    profile: &StoreProfile,
    state: &ProductPageState,
    category: &str,
    id: &str,
) -> String {
    let resolved = CategoryKey::from_param(category)
        .and_then(|key| catalog.category(key))
        .and_then(|cat| cat.find(id).map(|product| (cat, product)));

    let Some((cat, product)) = resolved else {
        warn!(category, id, "product not found");
        return sections::render_not_found();
    };

    info!(category, id, product = %product.id, "rendering product page");

    let hero = sections::render_hero(cat, product);
    let purchase = sections::render_purchase_panel(product, &state.selection);
    let tabs = sections::render_info_tabs(product, state.selection.active_tab);
    let drawer = sections::render_cart_drawer(&state.cart, profile, &product.name);

    format!("{}\n{}\n{}\n{}", hero, purchase, tabs, drawer)
}
