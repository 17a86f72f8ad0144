//! Domain types and logic for an interactive storefront.
//!
//! This crate provides everything a text-driven shop session needs:
//!
//! - **Catalog**: Products loaded from pipe-delimited text
//! - **Search**: Filters, composable sorts, and the bounded browse view
//! - **Cart**: The cart ledger of products and quantities
//! - **Checkout**: Cash checkout and receipts
//! - **Navigation**: The page state machine driving a session
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront::prelude::*;
//!
//! let catalog = Catalog::load("products.csv");
//! let stdin = std::io::stdin();
//! let console = LineConsole::new(stdin.lock(), std::io::stdout());
//!
//! NavigationEngine::new(&catalog, console).run()?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod navigation;
pub mod search;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Search
    pub use crate::search::{CatalogView, Filter, FilterSet, SortKey, SortSpec, DEFAULT_PAGE_SIZE};

    // Cart
    pub use crate::cart::{CartLedger, LineItem};

    // Checkout
    pub use crate::checkout::{CheckoutOutcome, Receipt, ReceiptLine};

    // Navigation
    pub use crate::navigation::{Console, LineConsole, NavigationEngine, Page};
}
