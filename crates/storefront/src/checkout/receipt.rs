//! Receipt types.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::ids::ProductId;
use crate::money::Money;

/// `chrono` format of the receipt timestamp, e.g. `Fri Oct 16, 2026 @ 03:04 PM`.
pub const RECEIPT_TIME_FORMAT: &str = "%a %b %d, %Y @ %I:%M %p";

/// One purchased product on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Unit price at time of purchase.
    pub price: Money,
    /// Quantity purchased.
    pub quantity: u32,
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
}

impl From<&LineItem> for ReceiptLine {
    fn from(item: &LineItem) -> Self {
        Self {
            price: item.product.price,
            quantity: item.quantity,
            product_id: item.product.id.clone(),
            product_name: item.product.name.clone(),
        }
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} {}x {} {}",
            self.price.display_amount(),
            self.quantity,
            self.product_id,
            self.product_name
        )
    }
}

/// Record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// When the purchase was made.
    pub timestamp: NaiveDateTime,
    /// One line per distinct product.
    pub lines: Vec<ReceiptLine>,
    /// Amount due.
    pub total: Money,
    /// Cash tendered.
    pub paid: Money,
    /// Change returned.
    pub change: Money,
}

impl Receipt {
    /// Render the receipt as printable lines.
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 5);
        out.push("RECEIPT:".to_string());
        out.push(self.timestamp.format(RECEIPT_TIME_FORMAT).to_string());
        out.extend(self.lines.iter().map(ReceiptLine::to_string));
        out.push(format!("TOTAL: {}", self.total));
        out.push(format!("PAID: {}", self.paid));
        out.push(format!("CHANGE: {}", self.change));
        out
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_receipt_line_format() {
        let line = ReceiptLine {
            price: Money::from_cents(599),
            quantity: 2,
            product_id: ProductId::new("BK1001"),
            product_name: "Rust in Action".to_string(),
        };
        assert_eq!(line.to_string(), "  5.99 2x BK1001 Rust in Action");
    }

    #[test]
    fn test_render() {
        let timestamp = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(15, 4, 0))
            .unwrap();
        let receipt = Receipt {
            timestamp,
            lines: vec![ReceiptLine {
                price: Money::from_cents(1250),
                quantity: 1,
                product_id: ProductId::new("X1"),
                product_name: "Lamp".to_string(),
            }],
            total: Money::from_cents(1250),
            paid: Money::from_cents(2000),
            change: Money::from_cents(750),
        };

        assert_eq!(
            receipt.render(),
            vec![
                "RECEIPT:",
                "Fri Oct 16, 2026 @ 03:04 PM",
                " 12.50 1x X1 Lamp",
                "TOTAL: $12.50",
                "PAID: $20.00",
                "CHANGE: $7.50",
            ]
        );
        assert!(receipt.to_string().ends_with("CHANGE: $7.50\n"));
    }
}
