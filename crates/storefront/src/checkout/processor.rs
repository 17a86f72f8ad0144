//! Cash checkout.

use chrono::NaiveDateTime;

use crate::cart::CartLedger;
use crate::checkout::{Receipt, ReceiptLine};
use crate::error::StoreError;
use crate::money::Money;

/// Result of an accepted checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    /// Cash returned to the shopper.
    pub change: Money,
    /// Receipt for the purchase.
    pub receipt: Receipt,
}

/// Settle the cart against cash tendered as text.
///
/// The ledger is only read. On success the caller is expected to clear it;
/// on rejection it must be left as is.
///
/// # Errors
///
/// - [`StoreError::UnparseableAmount`] when `cash` is not a decimal number.
/// - [`StoreError::InsufficientFunds`] when the cash is below the cart total.
pub fn process(
    ledger: &CartLedger,
    cash: &str,
    timestamp: NaiveDateTime,
) -> Result<CheckoutOutcome, StoreError> {
    let paid: Money = cash.parse()?;
    let total = ledger.total_price();

    if paid < total {
        return Err(StoreError::InsufficientFunds { total, cash: paid });
    }

    let change = paid - total;
    let receipt = Receipt {
        timestamp,
        lines: ledger.iter().map(ReceiptLine::from).collect(),
        total,
        paid,
        change,
    };

    Ok(CheckoutOutcome { change, receipt })
}
