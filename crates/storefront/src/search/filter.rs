//! Search filter types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A search filter.
///
/// Filters are plain data; [`Filter::matches`] interprets them against a
/// product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Price strictly below the limit.
    MaxPrice(Money),
    /// Price strictly above the limit.
    MinPrice(Money),
    /// Exact department match.
    Department(String),
    /// Case-insensitive substring of the product name. Stored lowercased.
    NameContains(String),
}

impl Filter {
    /// Create a maximum price filter.
    pub fn max_price(limit: Money) -> Self {
        Filter::MaxPrice(limit)
    }

    /// Create a minimum price filter.
    pub fn min_price(limit: Money) -> Self {
        Filter::MinPrice(limit)
    }

    /// Create a department filter.
    pub fn department(name: impl Into<String>) -> Self {
        Filter::Department(name.into())
    }

    /// Create a name search filter.
    pub fn name_contains(text: &str) -> Self {
        Filter::NameContains(text.to_lowercase())
    }

    /// Test a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::MaxPrice(limit) => product.price < *limit,
            Filter::MinPrice(limit) => product.price > *limit,
            Filter::Department(name) => product.department == *name,
            Filter::NameContains(needle) => product.name.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Human-readable description shown in the removal menu.
    pub fn description(&self) -> String {
        match self {
            Filter::MaxPrice(limit) => format!("Price < {}", limit.display_amount()),
            Filter::MinPrice(limit) => format!("Price > {}", limit.display_amount()),
            Filter::Department(name) => format!("In {}", name),
            Filter::NameContains(needle) => format!("Contains \"{}\"", needle),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// The active filters, in the order they were added.
///
/// A product passes the set when it passes every filter; an empty set passes
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter at the end of the set.
    pub fn add(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Remove the filter at a 0-based position.
    pub fn remove(&mut self, index: usize) -> Option<Filter> {
        if index < self.filters.len() {
            Some(self.filters.remove(index))
        } else {
            None
        }
    }

    /// Test a product against every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }
}
