//! Pricing

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, Round, iso::Currency};
use thiserror::Error;

use crate::{cart::CartLine, weights::WeightVariant};

/// Errors that can occur while calculating a cart total.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No lines were provided, so currency could not be determined.
    #[error("no cart lines provided; cannot determine currency")]
    NoLines,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Derives the price of one unit of a weight variant from the product base price.
///
/// Multiplies the base price by the variant's multiplier and rounds half-up
/// to the whole currency unit, matching the amounts the storefront displays.
/// Pure and total: every variant has a multiplier.
#[must_use]
pub fn unit_price<'a>(base: &Money<'a, Currency>, weight: WeightVariant) -> Money<'a, Currency> {
    Money::from_decimal(base.amount() * weight.multiplier(), base.currency()).round(0, Round::HalfUp)
}

/// The total for a single line: unit price times quantity.
///
/// Unit prices are already whole currency units, so no further rounding applies.
#[must_use]
pub fn line_total<'a>(unit_price: &Money<'a, Currency>, quantity: u32) -> Money<'a, Currency> {
    Money::from_decimal(
        unit_price.amount() * Decimal::from(quantity),
        unit_price.currency(),
    )
}

/// Calculates the total price of a list of cart lines.
///
/// # Errors
///
/// - [`TotalPriceError::NoLines`]: No lines were provided, so currency could not be determined.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a>(lines: &[CartLine<'a>]) -> Result<Money<'a, Currency>, TotalPriceError> {
    let first = lines.first().ok_or(TotalPriceError::NoLines)?;

    let total = lines.iter().try_fold(
        Money::from_minor(0, first.unit_price().currency()),
        |acc, line| acc.add(line.line_total()),
    )?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::INR;
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    #[test]
    fn base_weight_keeps_the_base_price() {
        let base = Money::from_major(100, INR);

        assert_eq!(
            unit_price(&base, WeightVariant::Grams15),
            Money::from_major(100, INR)
        );
    }

    #[test]
    fn larger_weights_scale_by_their_multiplier() {
        let base = Money::from_major(100, INR);

        assert_eq!(
            unit_price(&base, WeightVariant::Grams25),
            Money::from_major(150, INR)
        );
        assert_eq!(
            unit_price(&base, WeightVariant::Grams50),
            Money::from_major(250, INR)
        );
    }

    #[test]
    fn midpoint_rounds_up() {
        // 99 * 1.5 = 148.5, displayed as 149
        let base = Money::from_major(99, INR);

        assert_eq!(
            unit_price(&base, WeightVariant::Grams25),
            Money::from_major(149, INR)
        );
    }

    #[test]
    fn line_total_is_unit_price_times_quantity() {
        let unit = Money::from_major(109, INR);

        assert_eq!(line_total(&unit, 3), Money::from_major(327, INR));
    }

    #[test]
    fn total_price_sums_line_totals() -> TestResult {
        let lines = [
            CartLine::with_unit_price(
                ProductId::new("masala"),
                WeightVariant::Grams15,
                Money::from_major(109, INR),
                2,
            )?,
            CartLine::with_unit_price(
                ProductId::new("caramel"),
                WeightVariant::Grams50,
                Money::from_major(298, INR),
                1,
            )?,
        ];

        assert_eq!(total_price(&lines)?, Money::from_major(516, INR));

        Ok(())
    }

    #[test]
    fn total_price_of_no_lines_errors() {
        let lines: [CartLine<'static>; 0] = [];

        assert!(matches!(total_price(&lines), Err(TotalPriceError::NoLines)));
    }
}
