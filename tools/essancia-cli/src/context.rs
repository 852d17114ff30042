//! Shared command context.

use anyhow::{Context as _, Result};
use essancia_commerce::catalog::Catalog;
use essancia_storefront::{data::essancia_catalog, StoreProfile};

use crate::output::Output;

/// Everything a command needs: the seeded catalog, the store profile,
/// and the output handler.
pub struct Context {
    pub catalog: Catalog,
    pub profile: StoreProfile,
    pub output: Output,
}

impl Context {
    /// Load the context, reading the store profile from `config_path`
    /// when given and falling back to defaults otherwise.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let profile = match config_path {
            Some(path) => StoreProfile::load(path)
                .with_context(|| format!("failed to load store profile from {}", path))?,
            None => StoreProfile::default(),
        };

        Ok(Self {
            catalog: essancia_catalog(),
            profile,
            output,
        })
    }
}
