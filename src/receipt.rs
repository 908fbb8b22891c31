//! Receipt
//!
//! A display-only snapshot of a cart: one row per line plus derived totals,
//! rendered as a console table. Building a receipt never mutates the cart.

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, pricing::TotalPriceError, weights::WeightVariant};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating the cart total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One rendered row of the receipt.
#[derive(Debug, Clone)]
struct ReceiptRow<'a> {
    label: String,
    weight: WeightVariant,
    quantity: u32,
    unit_price: Money<'a, Currency>,
    line_total: Money<'a, Currency>,
}

/// Final receipt for a cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    rows: Vec<ReceiptRow<'a>>,

    /// Total number of units across all lines
    total_items: u32,

    /// Total amount payable for the cart
    total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Build a receipt from the current cart contents.
    ///
    /// Lines appear in cart insertion order. Rows are labelled with the
    /// line's flavor, falling back to the product id when no display
    /// metadata was captured.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the cart total cannot be calculated.
    pub fn from_cart(cart: &'a Cart<'a>) -> Result<Self, ReceiptError> {
        let rows = cart
            .iter()
            .map(|line| {
                let label = if line.flavor().is_empty() {
                    line.product_id().to_string()
                } else {
                    line.flavor().to_string()
                };

                ReceiptRow {
                    label,
                    weight: line.weight(),
                    quantity: line.quantity().get(),
                    unit_price: *line.unit_price(),
                    line_total: line.line_total(),
                }
            })
            .collect();

        Ok(Receipt {
            rows,
            total_items: cart.total_items(),
            total: cart.total_price()?,
        })
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Total amount payable for the cart.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Write the receipt table and totals footer.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Weight", "Qty", "Unit Price", "Line Total"]);

        for row in &self.rows {
            builder.push_record([
                row.label.clone(),
                row.weight.label().to_string(),
                row.quantity.to_string(),
                format!("{}", row.unit_price),
                format!("{}", row.line_total),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Items: {}", self.total_items).map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Total: {}", self.total).map_err(|_err| ReceiptError::IO)?;

        Ok(())
    }
}
