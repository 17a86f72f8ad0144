//! Cart ledger and line item types.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::SortSpec;

/// A product held in the cart and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product held.
    pub product: Product,
    /// Quantity held, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.product.price * i64::from(self.quantity)
    }
}

/// The shopping cart: a mapping from product to held quantity.
///
/// Every present entry has a quantity of at least 1; decrementing an entry
/// held once removes it. Entries are kept in the order they were first added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartLedger {
    items: Vec<LineItem>,
}

impl CartLedger {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, inserting it at quantity 1 if absent.
    ///
    /// Returns the product's new quantity.
    pub fn add_one(&mut self, product: &Product) -> u32 {
        let quantity = match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => {
                existing.quantity += 1;
                existing.quantity
            }
            None => {
                self.items.push(LineItem {
                    product: product.clone(),
                    quantity: 1,
                });
                1
            }
        };
        debug!(product = %product.id, quantity, "added to cart");
        quantity
    }

    /// Remove one unit of a product, deleting the entry when it reaches zero.
    ///
    /// Returns the remaining quantity, or `None` if the product is not in
    /// the cart.
    pub fn remove_one(&mut self, id: &ProductId) -> Option<u32> {
        let position = self.items.iter().position(|i| &i.product.id == id)?;
        let remaining = self.items[position].quantity - 1;
        if remaining == 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = remaining;
        }
        debug!(product = %id, remaining, "removed from cart");
        Some(remaining)
    }

    /// Remove one unit of the entry at `index` in a previously taken ordered
    /// snapshot of product ids (see [`CartLedger::entries`]).
    pub fn remove_one_at(&mut self, index: usize, view: &[ProductId]) -> Option<u32> {
        let id = view.get(index)?;
        self.remove_one(id)
    }

    /// Entries ordered by a sort spec. The default spec keeps insertion order.
    pub fn entries(&self, sort: &SortSpec) -> Vec<&LineItem> {
        let mut entries: Vec<&LineItem> = self.items.iter().collect();
        sort.sort_by_product(&mut entries, |item| &item.product);
        entries
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Quantity held of a product, 0 when absent.
    #[cfg(test)]
    fn quantity_of(&self, id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| &i.product.id == id)
            .map_or(0, |i| i.quantity)
    }

    /// Total item count (sum of quantities).
    pub fn total_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of quantity times unit price over all entries.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(LineItem::total_price).sum()
    }

    /// Number of distinct products held.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
