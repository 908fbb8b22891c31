//! Krunch
//!
//! Krunch is the storefront core for the Krave Krunch snack range: a fixed
//! product catalog, weight-variant pricing and a session-scoped in-memory cart.

pub mod benefits;
pub mod cart;
pub mod catalog;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod utils;
pub mod weights;
