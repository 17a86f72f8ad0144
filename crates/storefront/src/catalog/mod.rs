//! Product catalog module.
//!
//! Contains the product record and the read-only catalog loaded at startup.

mod loader;
mod product;

pub use loader::{parse_record, Catalog};
pub use product::Product;
