//! Checkout module.
//!
//! Contains the cash checkout computation and the receipt it produces.

mod processor;
mod receipt;

pub use processor::{process, CheckoutOutcome};
pub use receipt::{Receipt, ReceiptLine, RECEIPT_TIME_FORMAT};
