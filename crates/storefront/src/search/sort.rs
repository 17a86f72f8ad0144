//! Composable sort specifications.

use std::cmp::Ordering;
use std::fmt;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A single sort tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Product name, A-Z.
    Name,
    /// Price, low to high.
    Price,
    /// Department name, A-Z.
    Department,
}

impl SortKey {
    /// Label used when describing a sort.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Department => "Department",
        }
    }

    /// Compare two products on this key alone.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Department => a.department.cmp(&b.department),
        }
    }
}

/// An ordering over products built from tiers.
///
/// Ties on one tier are broken by the next, in the order tiers were added.
/// The default spec has no tiers and treats all products as equal, so a
/// stable sort leaves catalog order untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    tiers: Vec<SortKey>,
}

impl SortSpec {
    /// The "no sort applied" spec.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Whether no tiers have been added.
    pub fn is_default(&self) -> bool {
        self.tiers.is_empty()
    }

    /// A new spec with `key` appended as the lowest-priority tier.
    #[must_use]
    pub fn then_by(&self, key: SortKey) -> Self {
        let mut tiers = self.tiers.clone();
        tiers.push(key);
        Self { tiers }
    }

    /// The tiers in priority order.
    pub fn tiers(&self) -> &[SortKey] {
        &self.tiers
    }

    /// Compare two products tier by tier.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        self.tiers
            .iter()
            .fold(Ordering::Equal, |ord, key| ord.then_with(|| key.compare(a, b)))
    }

    /// Stable-sort items by this spec, reading the product out of each item.
    pub fn sort_by_product<T>(&self, items: &mut [T], product: impl Fn(&T) -> &Product) {
        if self.is_default() {
            return;
        }
        items.sort_by(|a, b| self.compare(product(a), product(b)));
    }

    /// Description such as `Name, then by Price`; empty for the default spec.
    pub fn description(&self) -> String {
        self.tiers
            .iter()
            .map(SortKey::label)
            .collect::<Vec<_>>()
            .join(", then by ")
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
