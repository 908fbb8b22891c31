//! Integration test for a full storefront session against the built-in catalog.
//!
//! Walks the path the presentation layer takes: look a product up, derive a
//! weight-variant price, add lines to the cart, adjust quantities and read the
//! derived totals after every step.

use rusty_money::{Money, iso::INR};
use testresult::TestResult;

use krunch::{
    cart::{Cart, CartLine},
    catalog::Catalog,
    pricing::unit_price,
    receipt::Receipt,
    weights::WeightVariant,
};

#[test]
fn repeated_adds_merge_into_one_line() -> TestResult {
    let catalog = Catalog::builtin()?;
    let salted = catalog.get("himalayan-salted")?;

    let mut cart = Cart::new(INR);

    // Base price 99, base weight: unit price stays 99.
    cart.add_line(CartLine::new(salted, WeightVariant::Grams15, 2)?)?;
    cart.add_line(CartLine::new(salted, WeightVariant::Grams15, 1)?)?;

    assert_eq!(cart.len(), 1, "same identity must merge");
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price()?, Money::from_major(297, INR));

    Ok(())
}

#[test]
fn weight_variants_price_from_the_catalog_base() -> TestResult {
    let catalog = Catalog::builtin()?;
    let masala = catalog.get("masala")?;

    // 109 * 1.5 = 163.5, rounded half-up.
    assert_eq!(
        unit_price(&masala.base_price, WeightVariant::Grams25),
        Money::from_major(164, INR)
    );
    assert_eq!(
        unit_price(&masala.base_price, WeightVariant::Grams50),
        Money::from_major(273, INR)
    );

    Ok(())
}

#[test]
fn totals_track_every_mutation() -> TestResult {
    let catalog = Catalog::builtin()?;
    let caramel = catalog.get("caramel")?;
    let mexican = catalog.get("mexican")?;

    let mut cart = Cart::new(INR);

    cart.add_line(CartLine::new(caramel, WeightVariant::Grams15, 2)?)?;
    cart.add_line(CartLine::new(mexican, WeightVariant::Grams50, 1)?)?;

    // 2 * 119 + 1 * round(109 * 2.5) = 238 + 273
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price()?, Money::from_major(511, INR));

    cart.set_quantity(&caramel.id, WeightVariant::Grams15, 1);

    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price()?, Money::from_major(392, INR));

    cart.set_quantity(&mexican.id, WeightVariant::Grams50, 0);

    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price()?, Money::from_major(119, INR));

    Ok(())
}

#[test]
fn removing_twice_and_clearing_are_safe() -> TestResult {
    let catalog = Catalog::builtin()?;
    let salted = catalog.get("himalayan-salted")?;
    let onion = catalog.get("cream-onion")?;

    let mut cart = Cart::new(INR);

    cart.add_line(CartLine::new(salted, WeightVariant::Grams15, 1)?)?;
    cart.add_line(CartLine::new(onion, WeightVariant::Grams15, 1)?)?;

    cart.remove_line(&salted.id, WeightVariant::Grams15);
    cart.remove_line(&salted.id, WeightVariant::Grams15);

    assert_eq!(cart.len(), 1);

    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price()?, Money::from_minor(0, INR));

    Ok(())
}

#[test]
fn cart_lines_keep_their_price_snapshot() -> TestResult {
    let catalog = Catalog::builtin()?;
    let masala = catalog.get("masala")?;

    let mut cart = Cart::new(INR);
    cart.add_line(CartLine::new(masala, WeightVariant::Grams25, 1)?)?;

    let line = cart.get_line(&masala.id, WeightVariant::Grams25);

    // The snapshot carries display copies so the cart renders without a catalog join.
    assert_eq!(line.map(CartLine::flavor), Some("Masala"));
    assert_eq!(line.map(CartLine::name), Some("Krave Krunch"));
    assert_eq!(line.map(CartLine::image), Some("products/masala.jpg"));
    assert_eq!(
        line.map(CartLine::unit_price),
        Some(&Money::from_major(164, INR))
    );

    Ok(())
}

#[test]
fn receipt_reflects_the_session() -> TestResult {
    let catalog = Catalog::builtin()?;
    let salted = catalog.get("himalayan-salted")?;

    let mut cart = Cart::new(INR);
    cart.add_line(CartLine::new(salted, WeightVariant::Grams15, 3)?)?;

    let receipt = Receipt::from_cart(&cart)?;

    assert_eq!(receipt.total_items(), 3);
    assert_eq!(receipt.total(), Money::from_major(297, INR));

    Ok(())
}
