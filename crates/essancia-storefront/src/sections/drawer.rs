//! Cart drawer renderer.

use crate::config::StoreProfile;
use crate::sections::escape_html;
use crate::share::{redirect_url, SocialChannel};
use essancia_commerce::cart::{Cart, CartLineItem};

/// Render the cart drawer.
///
/// Open/closed comes from the cart's drawer flag; the checkout button
/// is always disabled, and purchase intent is handed off through the
/// social buttons instead.
pub fn render_cart_drawer(cart: &Cart, profile: &StoreProfile, product_name: &str) -> String {
    let drawer_class = if cart.is_drawer_open() {
        "cart-drawer cart-drawer--open"
    } else {
        "cart-drawer"
    };

    let body = if cart.is_empty() {
        r#"<div class="cart-empty">
        <h3>Your cart is empty</h3>
        <p>Add items to your cart to checkout</p>
        <button class="btn-continue">Continue Shopping</button>
    </div>"#
            .to_string()
    } else {
        let items: String = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| render_line_item(index, item))
            .collect();

        let whatsapp = redirect_url(SocialChannel::WhatsApp, profile, product_name);
        let instagram = redirect_url(SocialChannel::Instagram, profile, product_name);
        let totals = cart.totals();

        format!(
            r#"<div class="cart-items">{items}</div>
    <div class="cart-summary">
        <div class="summary-row"><span>Subtotal</span><span>{subtotal}</span></div>
        <div class="summary-row"><span>Shipping</span><span>{shipping}</span></div>
        <div class="summary-row summary-row--total"><span>Total</span><span>{total}</span></div>
        <button class="btn-checkout" disabled>Proceed to Checkout</button>
        <div class="social-handoff">
            <a href="{whatsapp}" target="_blank" rel="noopener" class="btn-whatsapp">WhatsApp</a>
            <a href="{instagram}" target="_blank" rel="noopener" class="btn-instagram">Instagram</a>
        </div>
        <button class="btn-continue">Continue Shopping</button>
    </div>"#,
            items = items,
            subtotal = totals.subtotal,
            shipping = escape_html(&profile.shipping_label),
            total = totals.total,
            whatsapp = whatsapp,
            instagram = instagram,
        )
    };

    format!(
        r#"<aside class="{drawer_class}" data-section="cart-drawer">
    <header class="cart-header">
        <span class="cart-title">Shopping Cart</span>
        <span class="cart-badge">({badge})</span>
        <button class="btn-close-drawer" aria-label="Close cart">&times;</button>
    </header>
    {body}
</aside>"#,
        drawer_class = drawer_class,
        badge = cart.badge_label(),
        body = body,
    )
}

fn render_line_item(index: usize, item: &CartLineItem) -> String {
    format!(
        r#"<div class="cart-item" data-index="{index}">
        <img src="{image}" alt="{name}" class="cart-item-image">
        <div class="cart-item-info">
            <h3>{name}</h3>
            <p class="cart-item-options">Size: {size} / Color: {color}</p>
            <p class="cart-item-price">{price}</p>
            <div class="quantity-stepper">
                <button class="stepper-decrement" aria-label="Decrease quantity">-</button>
                <span class="stepper-value">{quantity}</span>
                <button class="stepper-increment" aria-label="Increase quantity">+</button>
            </div>
        </div>
        <button class="btn-remove-item" aria-label="Remove item">&times;</button>
    </div>"#,
        index = index,
        image = escape_html(&item.image),
        name = escape_html(&item.name),
        size = escape_html(&item.size),
        color = escape_html(&item.color),
        price = item.unit_price,
        quantity = item.quantity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use essancia_commerce::cart::SHIPPING_AT_CHECKOUT;
    use essancia_commerce::catalog::{ImageSet, PriceTag, Product};
    use essancia_commerce::ProductId;

    fn product() -> Product {
        Product {
            id: ProductId::new("ess-hoodie-01"),
            name: "Shadow Hoodie".to_string(),
            price: PriceTag::from("\u{20b9}1,299.00"),
            original_price: None,
            discount: None,
            images: ImageSet::Single("/images/hoodie.webp".to_string()),
            colors: vec!["Black".to_string()],
            sizes: vec!["M".to_string()],
            description: None,
            features: Vec::new(),
            rating: 4.0,
            reviews: 2,
        }
    }

    #[test]
    fn test_empty_cart_state() {
        let cart = Cart::new();
        let html = render_cart_drawer(&cart, &StoreProfile::default(), "Shadow Hoodie");

        assert!(html.contains("Your cart is empty"));
        assert!(html.contains("(0 items)"));
        assert!(!html.contains("cart-drawer--open"));
        assert!(!html.contains("btn-checkout"));
    }

    #[test]
    fn test_drawer_with_items() {
        let mut cart = Cart::new();
        cart.add_item(&product(), "M", "Black", 2);

        let html = render_cart_drawer(&cart, &StoreProfile::default(), "Shadow Hoodie");
        assert!(html.contains("cart-drawer--open"));
        assert!(html.contains("(1 item)"));
        assert!(html.contains("Size: M / Color: Black"));
        assert!(html.contains("\u{20b9}1299.00"));
        assert!(html.contains("Subtotal"));
        assert!(html.contains(SHIPPING_AT_CHECKOUT));
        assert!(html.contains("\u{20b9}2598.00"));
        assert!(html.contains(r#"<button class="btn-checkout" disabled>"#));
        assert!(html.contains("https://wa.me/"));
        assert!(html.contains("https://instagram.com/essanciafashion"));
    }

    #[test]
    fn test_shipping_row_comes_from_profile() {
        let mut cart = Cart::new();
        cart.add_item(&product(), "M", "Black", 1);

        let mut profile = StoreProfile::default();
        profile.shipping_label = "Free above \u{20b9}999".to_string();

        let html = render_cart_drawer(&cart, &profile, "Shadow Hoodie");
        assert!(html.contains("Free above \u{20b9}999"));
        assert!(!html.contains(SHIPPING_AT_CHECKOUT));
    }

    #[test]
    fn test_closed_drawer_keeps_items() {
        let mut cart = Cart::new();
        cart.add_item(&product(), "", "", 1);
        cart.close_drawer();

        let html = render_cart_drawer(&cart, &StoreProfile::default(), "Shadow Hoodie");
        assert!(!html.contains("cart-drawer--open"));
        assert!(html.contains("Size: M / Color: Black"));
    }
}
