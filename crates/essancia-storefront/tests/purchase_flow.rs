//! End-to-end purchase flow over the seeded catalog.

use essancia_commerce::prelude::*;
use essancia_storefront::{
    data::essancia_catalog, render_product_page, ProductPageState, StoreProfile,
};

fn resolve<'a>(catalog: &'a Catalog, category: &str, id: &str) -> &'a Product {
    catalog.resolve_params(category, id).expect("seeded product")
}

#[test]
fn add_to_cart_appends_and_opens_drawer() {
    let catalog = essancia_catalog();
    let product = resolve(&catalog, "hoodie", "ess-hoodie-01");

    let mut state = ProductPageState::new();
    state.selection.select_size("M");
    state.selection.select_color("Black");
    state.selection.increment_quantity(); // 2

    state.add_to_cart(product);

    assert_eq!(state.cart.entry_count(), 1);
    let item = &state.cart.items()[0];
    assert_eq!(item.name, product.name);
    assert_eq!(item.size, "M");
    assert_eq!(item.color, "Black");
    assert_eq!(item.quantity, 2);
    assert_eq!(item.unit_price, product.unit_price());
    assert!(state.cart.is_drawer_open());
}

#[test]
fn repeated_adds_never_merge() {
    let catalog = essancia_catalog();
    let product = resolve(&catalog, "tshirt", "ess-tee-01");

    let mut state = ProductPageState::new();
    state.add_to_cart(product);
    state.add_to_cart(product);
    state.add_to_cart(product);

    assert_eq!(state.cart.entry_count(), 3);
    assert_eq!(state.cart.badge_label(), "3 items");
}

#[test]
fn rejected_quantity_update_leaves_cart_unchanged() {
    let catalog = essancia_catalog();
    let product = resolve(&catalog, "joggers", "ess-jogger-01");

    let mut state = ProductPageState::new();
    state.selection.increment_quantity();
    state.selection.increment_quantity(); // 3
    state.add_to_cart(product);

    let before = state.cart.clone();
    state.cart.update_quantity(0, 0);
    assert_eq!(state.cart, before);
    assert_eq!(state.cart.items()[0].quantity, 3);
}

#[test]
fn removal_reindexes_remaining_entries() {
    let catalog = essancia_catalog();
    let product = resolve(&catalog, "sweatshirt", "ess-sweat-01");

    let mut cart = Cart::new();
    cart.add_item(product, "S", "", 1);
    cart.add_item(product, "M", "", 1);
    cart.add_item(product, "L", "", 1);

    cart.remove_item(1);

    assert_eq!(cart.entry_count(), 2);
    assert_eq!(cart.items()[0].size, "S");
    assert_eq!(cart.items()[1].size, "L");

    // Out-of-range indices are absorbed.
    cart.remove_item(10);
    assert_eq!(cart.entry_count(), 2);
}

#[test]
fn totals_follow_the_line_items() {
    let catalog = essancia_catalog();
    let hoodie = resolve(&catalog, "hoodie", "ess-hoodie-01"); // 1299.00
    let tee = resolve(&catalog, "tshirt", "ess-tee-02"); // 649.00 (numeric)

    let mut cart = Cart::new();
    cart.add_item(hoodie, "M", "Black", 2);
    cart.add_item(tee, "S", "Ecru", 1);

    let expected = Money::from_paise(2 * 129900 + 64900);
    assert_eq!(cart.subtotal(), expected);
    assert_eq!(cart.total(), expected);
}

#[test]
fn drawer_html_reflects_cart_state() {
    let catalog = essancia_catalog();
    let profile = StoreProfile::default();
    let mut state = ProductPageState::new();

    let empty = render_product_page(&catalog, &profile, &state, "hoodie", "ess-hoodie-01");
    assert!(empty.contains("Your cart is empty"));

    let product = resolve(&catalog, "hoodie", "ess-hoodie-01");
    state.add_to_cart(product);

    let html = render_product_page(&catalog, &profile, &state, "hoodie", "ess-hoodie-01");
    assert!(html.contains("cart-drawer--open"));
    assert!(html.contains("(1 item)"));
    assert!(html.contains(SHIPPING_AT_CHECKOUT));
    assert!(html.contains(r#"<button class="btn-checkout" disabled>"#));
    assert!(html.contains("https://wa.me/+918080261261?text="));
}

#[test]
fn unsized_product_lands_with_empty_options() {
    let catalog = essancia_catalog();
    let product = resolve(&catalog, "oversize", "ess-over-02");
    assert!(product.sizes.is_empty());

    let mut state = ProductPageState::new();
    state.add_to_cart(product);

    let item = &state.cart.items()[0];
    assert_eq!(item.size, "");
    assert_eq!(item.color, "");
    assert_eq!(item.quantity, 1);
}

#[test]
fn page_state_survives_json_round_trip() {
    let catalog = essancia_catalog();
    let product = resolve(&catalog, "hoodie", "ess-hoodie-01");

    let mut state = ProductPageState::new();
    state.selection.select_size("M");
    state.add_to_cart(product);
    state.add_to_cart(product);
    state.cart.update_quantity(1, 4);

    let json = serde_json::to_string(&state).expect("serialize page state");
    let restored: ProductPageState = serde_json::from_str(&json).expect("deserialize page state");

    assert_eq!(restored, state);
    assert_eq!(restored.cart.entry_count(), 2);
    assert_eq!(restored.cart.items()[1].quantity, 4);
    assert!(restored.cart.is_drawer_open());
    assert_eq!(restored.cart.total(), state.cart.total());
}

#[test]
fn formatted_text_price_normalizes() {
    let catalog = essancia_catalog();
    let product = resolve(&catalog, "hoodie", "ess-hoodie-01");
    assert!(matches!(product.price, PriceTag::Text(_)));
    assert_eq!(product.unit_price(), Money::from_rupees(1299.0));
}
