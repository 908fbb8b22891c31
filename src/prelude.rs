//! Krunch prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    benefits::BenefitList,
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    pricing::{TotalPriceError, line_total, total_price, unit_price},
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError},
    weights::{ParseWeightError, WeightVariant},
};
