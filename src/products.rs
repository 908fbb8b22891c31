//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};

use crate::benefits::BenefitList;

/// Stable string identifier for a product. The primary key of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
///
/// An immutable catalog record. `base_price` is the price of the smallest
/// weight variant; larger variants are derived from it by
/// [`crate::pricing::unit_price`].
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// Product id, unique across the catalog
    pub id: ProductId,

    /// Brand label (constant across the built-in catalog)
    pub name: String,

    /// Variant-distinguishing display name
    pub flavor: String,

    /// Free-text description
    pub description: String,

    /// Price of the base weight variant
    pub base_price: Money<'a, Currency>,

    /// Opaque asset reference, resolved by the presentation layer
    pub image: String,

    /// Display accent value, never consulted by business logic
    pub color: String,

    /// Ordered display-only benefit tags
    pub benefits: BenefitList,
}
