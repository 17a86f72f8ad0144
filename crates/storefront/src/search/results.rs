//! Filtered, sorted and bounded views of the catalog.

use crate::catalog::{Catalog, Product};
use crate::search::{FilterSet, SortSpec};

/// Number of products shown at once on the browse page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The first page of catalog products passing the active filters, in sort
/// order.
///
/// A view is computed fresh from the current filters and sort every time it
/// is needed; it borrows the catalog and is never cached.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    /// Products shown, at most the page size.
    pub items: Vec<&'a Product>,
    /// Number of products passing the filters.
    pub total: usize,
    /// Number of products in the catalog.
    pub catalog_size: usize,
}

impl<'a> CatalogView<'a> {
    /// Filter, sort and truncate the catalog.
    pub fn build(
        catalog: &'a Catalog,
        filters: &FilterSet,
        sort: &SortSpec,
        page_size: usize,
    ) -> Self {
        let mut matched: Vec<&Product> = catalog.iter().filter(|p| filters.matches(p)).collect();
        sort.sort_by_product(&mut matched, |p| *p);

        let total = matched.len();
        matched.truncate(page_size);

        Self {
            items: matched,
            total,
            catalog_size: catalog.len(),
        }
    }

    /// Whether more products matched than are shown.
    pub fn is_truncated(&self) -> bool {
        self.total > self.items.len()
    }

    /// Count shown to the shopper: `5/7` when truncated, otherwise `7`.
    pub fn shown_label(&self) -> String {
        if self.is_truncated() {
            format!("{}/{}", self.items.len(), self.total)
        } else {
            self.total.to_string()
        }
    }

    /// Number of products shown.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shown product at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&'a Product> {
        self.items.get(index).copied()
    }
}
