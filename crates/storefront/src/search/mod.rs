//! Search module.
//!
//! Contains filters, sort specifications, and the bounded catalog view
//! built from them.

mod filter;
mod results;
mod sort;

pub use filter::{Filter, FilterSet};
pub use results::{CatalogView, DEFAULT_PAGE_SIZE};
pub use sort::{SortKey, SortSpec};
