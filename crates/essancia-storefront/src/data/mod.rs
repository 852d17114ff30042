//! Static catalog seed.

mod collections;

pub use collections::essancia_catalog;
