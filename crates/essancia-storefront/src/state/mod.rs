//! View state for the product-detail page.

mod page;
mod selection;

pub use page::ProductPageState;
pub use selection::{InfoTab, ProductSelection};
