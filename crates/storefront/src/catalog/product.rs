//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once loaded; two products are the same product
/// when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (e.g., a SKU).
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price, never negative.
    pub price: Money,
    /// Department the product is shelved in.
    pub department: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            department: department.into(),
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl std::hash::Hash for Product {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
