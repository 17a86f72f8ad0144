//! Shopping cart module.
//!
//! Contains the cart ledger and its line items.

mod ledger;

pub use ledger::{CartLedger, LineItem};
