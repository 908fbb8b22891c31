//! Weight Variants
//!
//! The closed set of package sizes offered for every product. Each variant
//! carries a price multiplier over the product base price; the multiplier
//! table is business configuration, so it lives on the enum rather than in
//! user data. Invalid weights are unrepresentable by construction.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when parsing a weight label that is not offered.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown weight variant: {0} (expected 15g, 25g or 50g)")]
pub struct ParseWeightError(pub String);

/// One of the fixed package sizes offered per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightVariant {
    /// 15g pack, priced at the product base price
    Grams15,

    /// 25g pack, 1.5x the base price
    Grams25,

    /// 50g pack, 2.5x the base price
    Grams50,
}

impl WeightVariant {
    /// All variants in ascending weight order.
    pub const ALL: [WeightVariant; 3] = [
        WeightVariant::Grams15,
        WeightVariant::Grams25,
        WeightVariant::Grams50,
    ];

    /// Display label for the variant.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WeightVariant::Grams15 => "15g",
            WeightVariant::Grams25 => "25g",
            WeightVariant::Grams50 => "50g",
        }
    }

    /// Price multiplier applied to the product base price.
    #[must_use]
    pub fn multiplier(self) -> Decimal {
        match self {
            WeightVariant::Grams15 => Decimal::ONE,
            WeightVariant::Grams25 => Decimal::new(15, 1),
            WeightVariant::Grams50 => Decimal::new(25, 1),
        }
    }
}

impl fmt::Display for WeightVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for WeightVariant {
    type Err = ParseWeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeightVariant::ALL
            .into_iter()
            .find(|variant| variant.label() == s)
            .ok_or_else(|| ParseWeightError(s.to_string()))
    }
}
