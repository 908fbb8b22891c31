//! Catalog
//!
//! The fixed, read-only product set. The catalog is closed: products are
//! authored in a YAML fixture, loaded once, and never inserted or deleted at
//! runtime. The built-in storefront range is embedded at compile time.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{catalog::fixture::CatalogFixture, products::Product};

pub mod fixture;

/// Catalog loading and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// The built-in catalog data, embedded at build time.
const BUILTIN_CATALOG: &str = include_str!("../../fixtures/catalog.yml");

/// Catalog
#[derive(Debug)]
pub struct Catalog<'a> {
    /// Products in authored order
    products: Vec<Product<'a>>,

    /// Product id -> position lookups
    index: FxHashMap<String, usize>,

    /// Currency shared by every product in the catalog
    currency: Option<&'static Currency>,
}

impl<'a> Catalog<'a> {
    /// Load the built-in storefront catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded fixture fails to parse;
    /// with a healthy build this does not happen, but the parse is not
    /// hidden behind a panic.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from YAML fixture contents.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the YAML fails to parse, a price is
    /// invalid, an id is duplicated, or the products mix currencies.
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;

        let mut products = Vec::with_capacity(fixture.products.len());
        let mut index = FxHashMap::default();
        let mut currency: Option<&'static Currency> = None;

        for record in fixture.products {
            let product: Product<'static> = record.try_into()?;
            let product_currency = product.base_price.currency();

            if let Some(existing) = currency {
                if existing != product_currency {
                    return Err(CatalogError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        product_currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                currency = Some(product_currency);
            }

            if index
                .insert(product.id.as_str().to_string(), products.len())
                .is_some()
            {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }

            products.push(product);
        }

        Ok(Catalog {
            products,
            index,
            currency,
        })
    }

    /// Load a catalog from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or the contents
    /// fail to parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// All products in stable authored order.
    #[must_use]
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Lookup a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if no product has the id;
    /// callers are expected to render a fallback rather than crash.
    pub fn get(&self, id: &str) -> Result<&Product<'a>, CatalogError> {
        self.index
            .get(id)
            .and_then(|&position| self.products.get(position))
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Currency shared by every product, if any products are loaded.
    #[must_use]
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
