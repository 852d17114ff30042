//! Scripted cart session.
//!
//! Walks the cart store through the full mutation surface against one
//! seeded product and prints the state after each step.

use anyhow::{bail, Result};
use essancia_commerce::CommerceError;
use essancia_storefront::{redirect_url, ProductPageState, SocialChannel};

use super::DemoArgs;
use crate::context::Context;

/// Run the demo command.
pub fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    if args.quantity < 1 {
        bail!(CommerceError::InvalidQuantity(args.quantity));
    }
    let quantity = args.quantity as u32;

    let Some(product) = ctx.catalog.resolve_params(&args.category, &args.id) else {
        bail!(CommerceError::ProductNotFound(format!(
            "{}/{}",
            args.category, args.id
        )));
    };

    ctx.output.header(&format!("Cart demo: {}", product.name));

    let mut state = ProductPageState::new();
    while state.selection.quantity < quantity {
        state.selection.increment_quantity();
    }
    if let Some(size) = product.sizes.get(1) {
        state.selection.select_size(size.clone());
    }

    state.add_to_cart(product);
    ctx.output
        .success(&format!("added {} x {}", quantity, product.name));
    report(ctx, &state);

    // A second identical add stays a separate entry.
    state.add_to_cart(product);
    ctx.output.success("added the same configuration again");
    report(ctx, &state);

    state.cart.update_quantity(1, 5);
    ctx.output.success("updated entry 1 to quantity 5");
    report(ctx, &state);

    state.cart.update_quantity(0, 0);
    ctx.output.info("quantity 0 rejected, entry 0 unchanged");
    report(ctx, &state);

    state.cart.remove_item(0);
    ctx.output.success("removed entry 0");
    report(ctx, &state);

    ctx.output.header("Hand-off");
    ctx.output.kv("shipping", &ctx.profile.shipping_label);
    ctx.output.kv(
        "whatsapp",
        &redirect_url(SocialChannel::WhatsApp, &ctx.profile, &product.name),
    );
    ctx.output.kv(
        "instagram",
        &redirect_url(SocialChannel::Instagram, &ctx.profile, &product.name),
    );

    if ctx.output.is_json() {
        ctx.output.json(&state.cart);
    }

    Ok(())
}

fn report(ctx: &Context, state: &ProductPageState) {
    ctx.output.kv("badge", &state.cart.badge_label());
    ctx.output
        .kv("subtotal", &state.cart.subtotal().display());
    ctx.output.kv("total", &state.cart.total().display());
    for (index, item) in state.cart.items().iter().enumerate() {
        ctx.output.list_item(&format!(
            "[{}] {} (Size: {} / Color: {}) x{} @ {}",
            index, item.name, item.size, item.color, item.quantity, item.unit_price
        ));
    }
    ctx.output.debug(&format!(
        "drawer open: {}",
        state.cart.is_drawer_open()
    ));
}
