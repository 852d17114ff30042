//! Product page preview command.

use anyhow::{bail, Result};
use essancia_commerce::CommerceError;
use essancia_storefront::{render_product_page, ProductPageState};

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let Some(product) = ctx.catalog.resolve_params(&args.category, &args.id) else {
        bail!(CommerceError::ProductNotFound(format!(
            "{}/{}",
            args.category, args.id
        )));
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    if args.html {
        let state = ProductPageState::new();
        let html = render_product_page(&ctx.catalog, &ctx.profile, &state, &args.category, &args.id);
        println!("{}", html);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("sku", product.id.as_str());
    ctx.output.kv("price", &product.price.to_string());
    if let Some(original) = &product.original_price {
        ctx.output.kv("was", &original.to_string());
    }
    if let Some(discount) = &product.discount {
        ctx.output.kv("discount", discount);
    }
    if !product.sizes.is_empty() {
        ctx.output.kv("sizes", &product.sizes.join(", "));
    }
    if !product.colors.is_empty() {
        ctx.output.kv("colors", &product.colors.join(", "));
    }
    if product.has_reviews() {
        ctx.output.kv(
            "rating",
            &format!(
                "{:.1} out of 5 ({} {})",
                product.rating,
                product.reviews,
                product.review_label()
            ),
        );
    }
    for feature in &product.features {
        ctx.output.list_item(feature);
    }

    Ok(())
}
