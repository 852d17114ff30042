//! Info tabs renderer: description, features, reviews.

use crate::sections::{escape_html, render_star_row};
use crate::state::InfoTab;
use essancia_commerce::catalog::Product;

/// Render the tab bar and the body of the active tab.
pub fn render_info_tabs(product: &Product, active: InfoTab) -> String {
    let tab_bar: String = InfoTab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active {
                "info-tab info-tab--active"
            } else {
                "info-tab"
            };
            format!(
                r#"<button class="{}" data-tab="{}">{}</button>"#,
                class,
                tab.as_str(),
                tab.label()
            )
        })
        .collect();

    let body = match active {
        InfoTab::Description => render_description(product),
        InfoTab::Features => render_features(product),
        InfoTab::Reviews => render_reviews(product),
    };

    format!(
        r#"<section class="product-tabs" data-section="tabs">
    <div class="tab-bar">{tab_bar}</div>
    <div class="tab-body">{body}</div>
</section>"#,
        tab_bar = tab_bar,
        body = body,
    )
}

fn render_description(product: &Product) -> String {
    match product.description.as_deref() {
        Some(description) => format!(r#"<p>{}</p>"#, escape_html(description)),
        None => String::new(),
    }
}

fn render_features(product: &Product) -> String {
    if product.features.is_empty() {
        return r#"<p class="tab-empty">No features listed for this product.</p>"#.to_string();
    }
    let items: String = product
        .features
        .iter()
        .map(|feature| format!(r#"<li>{}</li>"#, escape_html(feature)))
        .collect();
    format!(r#"<ul class="feature-list">{}</ul>"#, items)
}

fn render_reviews(product: &Product) -> String {
    if !product.has_reviews() {
        return r#"<p class="tab-empty">No reviews yet for this product.</p>"#.to_string();
    }
    format!(
        r#"<div class="reviews-summary">
        <span class="star-row">{stars}</span>
        <span class="rating-value">{rating} out of 5</span>
        <p>Based on {count} {label}</p>
    </div>"#,
        stars = render_star_row(product.rating),
        rating = product.rating,
        count = product.reviews,
        label = product.review_label(),
    )
}
