//! Catalog listing command.

use anyhow::{bail, Result};
use essancia_commerce::catalog::{Category, CategoryKey};
use essancia_commerce::CommerceError;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let categories: Vec<&Category> = match args.category.as_deref() {
        Some(param) => {
            let Some(key) = CategoryKey::from_param(param) else {
                bail!(CommerceError::CategoryNotFound(param.to_string()));
            };
            ctx.catalog.category(key).into_iter().collect()
        }
        None => ctx.catalog.categories().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    for category in categories {
        ctx.output
            .header(&format!("{} ({})", category.title, category.key));
        ctx.output
            .table_row(&["ID", "NAME", "PRICE", "RATING"], &[18, 32, 12, 8]);

        for product in &category.products {
            let price = product.unit_price().display();
            let rating = if product.has_reviews() {
                format!("{:.1}", product.rating)
            } else {
                "-".to_string()
            };
            ctx.output.table_row(
                &[product.id.as_str(), &product.name, &price, &rating],
                &[18, 32, 12, 8],
            );
        }
    }

    Ok(())
}
