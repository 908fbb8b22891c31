//! Catalog Fixtures
//!
//! The `serde` records for the YAML catalog files under `fixtures/`.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, INR, USD},
};
use serde::Deserialize;

use crate::{
    benefits::BenefitList,
    catalog::CatalogError,
    products::{Product, ProductId},
};

/// Wrapper for the product list in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in catalog order
    pub products: Vec<ProductRecord>,
}

/// One product record as authored in YAML
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    /// Product id, unique within the file
    pub id: String,

    /// Brand label
    pub name: String,

    /// Flavor display name
    pub flavor: String,

    /// Free-text description
    pub description: String,

    /// Base price (e.g., "99 INR")
    pub price: String,

    /// Asset reference
    pub image: String,

    /// Display accent value
    pub color: String,

    /// Benefit tags in display order
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl TryFrom<ProductRecord> for Product<'_> {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&record.price)?;
        let base_price = Money::from_minor(minor_units, currency);

        let benefits = BenefitList::new(record.benefits.into_iter().collect());

        Ok(Product {
            id: ProductId::new(record.id),
            name: record.name,
            flavor: record.flavor,
            description: record.description,
            base_price,
            image: record.image,
            color: record.color,
            benefits,
        })
    }
}

/// Parse a price string (e.g., "99 INR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed or is not positive, or if the currency
/// code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    if minor_units <= 0 {
        return Err(CatalogError::InvalidPrice(format!(
            "Price must be positive, got: {s}"
        )));
    }

    let currency_code = parts
        .get(1)
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "INR" => INR,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_accepts_whole_rupee_amounts() -> Result<(), CatalogError> {
        let (minor, currency) = parse_price("99 INR")?;

        assert_eq!(minor, 9900);
        assert_eq!(currency, INR);

        Ok(())
    }

    #[test]
    fn parse_price_accepts_fractional_amounts() -> Result<(), CatalogError> {
        let (minor, currency) = parse_price("2.99 GBP")?;

        assert_eq!(minor, 299);
        assert_eq!(currency, GBP);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_missing_currency() {
        let result = parse_price("99INR");

        assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("99 ABC");

        assert!(matches!(result, Err(CatalogError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_non_positive_amounts() {
        assert!(matches!(
            parse_price("0 INR"),
            Err(CatalogError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("-5 INR"),
            Err(CatalogError::InvalidPrice(_))
        ));
    }
}
