//! Catalog loading from pipe-delimited text.
//!
//! Each line holds one product as `id|name|price|department`.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::catalog::Product;
use crate::error::StoreError;
use crate::money::Money;

const FIELD_SEPARATOR: char = '|';
const FIELD_COUNT: usize = 4;

/// The read-only product catalog for a session.
///
/// Products keep the order in which they were read; an unsorted view of the
/// catalog is exactly this order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products already in memory.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the catalog at `path`, substituting an empty catalog when the
    /// source is missing or unreadable.
    ///
    /// The substitution is logged at warn level and never reported to the
    /// shopper.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(error = %err, "catalog unavailable, continuing with an empty catalog");
                Self::empty()
            }
        }
    }

    /// Load the catalog at `path`, failing if it cannot be read.
    ///
    /// Malformed lines are skipped with a warning rather than failing the load.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let io_err = |source| StoreError::CatalogIo {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let catalog = Self::from_reader(BufReader::new(file)).map_err(io_err)?;
        debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Read products from any line source.
    ///
    /// Only a failing reader is an error; a line that is not valid UTF-8 is
    /// skipped like any other malformed record.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut products = Vec::new();
        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let record = match std::str::from_utf8(&bytes) {
                Ok(record) => record,
                Err(err) => {
                    let err = StoreError::MalformedRecord {
                        line: index + 1,
                        reason: format!("invalid UTF-8: {}", err),
                    };
                    warn!(error = %err, "skipping catalog record");
                    continue;
                }
            };
            if record.trim().is_empty() {
                continue;
            }
            match parse_record(index + 1, record) {
                Ok(product) => products.push(product),
                Err(err) => warn!(error = %err, "skipping catalog record"),
            }
        }
        Ok(Self::new(products))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Distinct departments, in the order they first appear.
    pub fn departments(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.department.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Parse one `id|name|price|department` record. `line` is 1-based and only
/// used for error reporting.
pub fn parse_record(line: usize, record: &str) -> Result<Product, StoreError> {
    let malformed = |reason: String| StoreError::MalformedRecord { line, reason };

    let fields: Vec<&str> = record.trim_end_matches(['\r', '\n']).split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let id = fields[0].trim();
    if id.is_empty() {
        return Err(malformed("empty product id".to_string()));
    }

    let price: Money = fields[2]
        .parse()
        .map_err(|_| malformed(format!("invalid price {:?}", fields[2].trim())))?;
    if price.is_negative() {
        return Err(malformed(format!("negative price {}", price.display_amount())));
    }

    Ok(Product::new(id, fields[1].trim(), price, fields[3].trim()))
}
