//! Section renderers for the product-detail page.

mod drawer;
mod hero;
mod purchase;
mod tabs;

pub use drawer::render_cart_drawer;
pub use hero::{render_hero, render_not_found};
pub use purchase::render_purchase_panel;
pub use tabs::render_info_tabs;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Five-star row; a star is filled iff its index is below the floor of
/// the rating.
pub(crate) fn render_star_row(rating: f32) -> String {
    let filled = (rating.max(0.0).floor() as usize).min(5);
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"A & B's"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_star_row_floors_rating() {
        assert_eq!(render_star_row(4.6), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
        assert_eq!(render_star_row(5.0), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
        assert_eq!(render_star_row(0.0), "\u{2606}\u{2606}\u{2606}\u{2606}\u{2606}");
        assert_eq!(render_star_row(-1.0), "\u{2606}\u{2606}\u{2606}\u{2606}\u{2606}");
    }
}
