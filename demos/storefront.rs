//! Storefront Demo
//!
//! Lists the built-in catalog, adds a chosen product to a session cart and
//! prints the receipt.
//!
//! Use `-p` to pick a product id
//! Use `-w` to pick a weight variant (15g, 25g or 50g)
//! Use `-n` to pick a quantity

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use krunch::{
    cart::{Cart, CartLine},
    catalog::Catalog,
    receipt::Receipt,
    utils::StorefrontArgs,
    weights::WeightVariant,
};

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = StorefrontArgs::parse();

    let catalog = Catalog::builtin()?;

    println!("Krave Krunch range:");

    for product in catalog.products() {
        println!(
            "  {} - {} ({})",
            product.id, product.flavor, product.base_price
        );
    }

    println!();

    let product = catalog.get(&args.product)?;
    let weight: WeightVariant = args.weight.parse()?;
    let currency = catalog.currency().context("catalog has no products")?;

    let mut cart = Cart::new(currency);
    cart.add_line(CartLine::new(product, weight, args.quantity)?)?;

    let receipt = Receipt::from_cart(&cart)?;
    receipt.write_to(io::stdout())?;

    Ok(())
}
