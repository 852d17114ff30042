//! Purchase panel renderer: swatches, sizes, stepper, actions.

use crate::sections::escape_html;
use crate::state::ProductSelection;
use essancia_commerce::catalog::Product;

/// Render the purchase panel for the current selection.
///
/// Color and size blocks appear only when the product offers options;
/// the stepper shows the selection's quantity.
pub fn render_purchase_panel(product: &Product, selection: &ProductSelection) -> String {
    let colors = if product.colors.is_empty() {
        String::new()
    } else {
        let swatches: String = product
            .colors
            .iter()
            .map(|color| {
                let class = if selection.color == *color {
                    "color-swatch color-swatch--selected"
                } else {
                    "color-swatch"
                };
                format!(
                    r#"<button class="{}" data-color="{}">{}</button>"#,
                    class,
                    escape_html(color),
                    escape_html(color)
                )
            })
            .collect();
        format!(
            r#"<div class="option-block">
        <h2>Color</h2>
        <div class="color-swatches">{}</div>
    </div>"#,
            swatches
        )
    };

    let sizes = if product.sizes.is_empty() {
        String::new()
    } else {
        let buttons: String = product
            .sizes
            .iter()
            .map(|size| {
                let class = if selection.size == *size {
                    "size-button size-button--selected"
                } else {
                    "size-button"
                };
                format!(
                    r#"<button class="{}" data-size="{}">{}</button>"#,
                    class,
                    escape_html(size),
                    escape_html(size)
                )
            })
            .collect();
        format!(
            r#"<div class="option-block">
        <h2>Size</h2>
        <div class="size-buttons">{}</div>
    </div>"#,
            buttons
        )
    };

    let wishlist_class = if selection.wishlisted {
        "btn-wishlist btn-wishlist--active"
    } else {
        "btn-wishlist"
    };

    format!(
        r#"<section class="purchase-panel" data-section="purchase">
    {colors}
    {sizes}
    <div class="option-block">
        <h2>Quantity</h2>
        <div class="quantity-stepper">
            <button class="stepper-decrement" aria-label="Decrease quantity">-</button>
            <span class="stepper-value">{quantity}</span>
            <button class="stepper-increment" aria-label="Increase quantity">+</button>
        </div>
    </div>
    <div class="purchase-actions">
        <button class="btn-add-to-cart">Add to cart</button>
        <button class="btn-buy-now">Buy it now</button>
        <button class="{wishlist_class}" aria-label="Toggle wishlist">&#9825;</button>
    </div>
    <div class="purchase-benefits">
        <span class="benefit">Free Shipping</span>
        <span class="benefit">2 Year Warranty</span>
        <span class="benefit">30 Day Returns</span>
    </div>
</section>"#,
        colors = colors,
        sizes = sizes,
        quantity = selection.quantity,
        wishlist_class = wishlist_class,
    )
}
