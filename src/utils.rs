//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct StorefrontArgs {
    /// Product id to add to the cart
    #[clap(short, long, default_value = "himalayan-salted")]
    pub product: String,

    /// Weight variant label (15g, 25g or 50g)
    #[clap(short, long, default_value = "15g")]
    pub weight: String,

    /// Quantity to add
    #[clap(short = 'n', long, default_value_t = 1)]
    pub quantity: u32,
}
