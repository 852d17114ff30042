//! Product hero section renderer.

use crate::sections::{escape_html, render_star_row};
use essancia_commerce::catalog::{Category, Product};

/// Render the hero: gallery, name, rating row, price block,
/// description, and the back link to the category listing.
pub fn render_hero(category: &Category, product: &Product) -> String {
    let images = product.images.as_slice();

    let gallery: String = images
        .iter()
        .map(|image| {
            format!(
                r#"<img src="{}" alt="{}" class="product-image">"#,
                escape_html(image),
                escape_html(&product.name)
            )
        })
        .collect();

    let indicators: String = (0..images.len())
        .map(|index| {
            let class = if index == 0 {
                "gallery-dot gallery-dot--active"
            } else {
                "gallery-dot"
            };
            format!(
                r#"<button class="{}" aria-label="Go to image {}"></button>"#,
                class,
                index + 1
            )
        })
        .collect();

    let review_count = if product.has_reviews() {
        format!(
            r#"<span class="review-count">{} {}</span>"#,
            product.reviews,
            product.review_label()
        )
    } else {
        String::new()
    };

    let sale_info = if let Some(original) = &product.original_price {
        let discount = product
            .discount
            .as_deref()
            .map(|d| format!(r#"<span class="price-discount">{}</span>"#, escape_html(d)))
            .unwrap_or_default();
        format!(
            r#"<span class="price-original">{}</span>
        {}"#,
            escape_html(&original.to_string()),
            discount
        )
    } else {
        String::new()
    };

    let description = product
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="product-description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    format!(
        r#"<section class="product-hero" data-section="hero">
    <a href="/collections/{category_key}" class="back-link">Back to {category_title}</a>
    <div class="product-gallery">
        {gallery}
        <div class="gallery-indicators">{indicators}</div>
    </div>
    <div class="product-info">
        <h1 class="product-name">{name}</h1>
        <div class="product-rating">
            <span class="star-row">{stars}</span>
            {review_count}
            <span class="stock-badge">In Stock</span>
        </div>
        <div class="product-price">
            <span class="price-current">{price}</span>
            {sale_info}
        </div>
        {description}
        <div class="product-footer">
            <button class="btn-share">Share</button>
            <span class="product-sku">SKU: {sku}</span>
        </div>
    </div>
</section>"#,
        category_key = category.key.as_str(),
        category_title = escape_html(&category.title),
        gallery = gallery,
        indicators = indicators,
        name = escape_html(&product.name),
        stars = render_star_row(product.rating),
        review_count = review_count,
        price = escape_html(&product.price.to_string()),
        sale_info = sale_info,
        description = description,
        sku = escape_html(product.id.as_str()),
    )
}

/// Terminal rendering for an unresolved category/id pair. No cart
/// operations follow this.
pub fn render_not_found() -> String {
    r#"<section class="product-hero product-hero--missing" data-section="hero">
    <div class="not-found-message">
        <p>Product not found</p>
    </div>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use essancia_commerce::catalog::{CategoryKey, ImageSet, PriceTag};
    use essancia_commerce::ProductId;

    fn product() -> Product {
        Product {
            id: ProductId::new("ess-hoodie-01"),
            name: "Shadow <Oversized> Hoodie".to_string(),
            price: PriceTag::from("\u{20b9}1,299.00"),
            original_price: Some(PriceTag::from("\u{20b9}1,799.00")),
            discount: Some("28% off".to_string()),
            images: ImageSet::Many(vec![
                "/images/front.webp".to_string(),
                "/images/back.webp".to_string(),
            ]),
            colors: Vec::new(),
            sizes: Vec::new(),
            description: Some("Heavyweight fleece.".to_string()),
            features: Vec::new(),
            rating: 4.6,
            reviews: 1,
        }
    }

    #[test]
    fn test_hero_renders_gallery_and_price() {
        let category = Category::new(CategoryKey::Hoodie, Vec::new());
        let html = render_hero(&category, &product());

        assert!(html.contains("Back to Hoodies"));
        assert!(html.contains("/images/front.webp"));
        assert!(html.contains("/images/back.webp"));
        assert!(html.contains("Shadow &lt;Oversized&gt; Hoodie"));
        assert!(html.contains("\u{20b9}1,299.00"));
        assert!(html.contains("\u{20b9}1,799.00"));
        assert!(html.contains("28% off"));
        assert!(html.contains("1 review<"));
        assert!(html.contains("In Stock"));
        assert!(html.contains("SKU: ess-hoodie-01"));
        assert!(html.contains("\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}"));
    }

    #[test]
    fn test_hero_carries_share_button() {
        let category = Category::new(CategoryKey::Hoodie, Vec::new());
        let html = render_hero(&category, &product());
        assert!(html.contains(r#"<button class="btn-share">Share</button>"#));
    }

    #[test]
    fn test_hero_omits_reviews_when_none() {
        let mut p = product();
        p.reviews = 0;
        let category = Category::new(CategoryKey::Hoodie, Vec::new());
        let html = render_hero(&category, &p);
        assert!(!html.contains("review-count"));
    }

    #[test]
    fn test_not_found_is_terminal_copy() {
        let html = render_not_found();
        assert!(html.contains("Product not found"));
    }
}
