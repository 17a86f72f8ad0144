//! Storefront error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::money::Money;

/// Errors that can occur while running a storefront session.
///
/// None of these are fatal: input and checkout errors are recovered by the
/// page that raised them, catalog errors by degrading the catalog.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input could not be parsed as a menu choice.
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),

    /// A numeric choice outside the offered options.
    #[error("Choice {choice} is out of range (1-{max})")]
    OutOfRange { choice: i64, max: usize },

    /// Nothing available to act on.
    #[error("Nothing to {0}")]
    EmptyCollection(&'static str),

    /// Cash tendered does not cover the cart total.
    #[error("Insufficient funds: total {total}, cash {cash}")]
    InsufficientFunds { total: Money, cash: Money },

    /// Amount could not be parsed as a decimal number.
    #[error("Unparseable amount: {0:?}")]
    UnparseableAmount(String),

    /// Catalog source could not be opened or read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog line did not hold a valid product record.
    #[error("Malformed catalog record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl StoreError {
    /// Whether this is a user input error that the current page recovers from
    /// by showing the advisory message and re-prompting.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidChoice(_)
                | StoreError::OutOfRange { .. }
                | StoreError::UnparseableAmount(_)
        )
    }
}
