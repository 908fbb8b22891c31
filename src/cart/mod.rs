//! Cart
//!
//! The session-scoped shopping cart. A [`Cart`] owns an ordered list of
//! [`CartLine`]s and exposes the only legal mutations over them; callers hold
//! the cart as an explicitly owned value (one per browsing session) rather
//! than reaching for a shared global.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{self, TotalPriceError},
    products::{Product, ProductId},
    weights::WeightVariant,
};

/// Errors related to cart line construction or cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A line's currency differs from the cart currency (line currency, cart currency).
    #[error("Line has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// A line was constructed with a quantity of zero.
    #[error("Cart line quantity must be a positive integer")]
    ZeroQuantity,
}

/// One row of the cart: a product + weight combination and its quantity.
///
/// `(product_id, weight)` is the composite identity of the line. The unit
/// price is a snapshot taken when the line was created and is never
/// re-derived from the catalog; the name, flavor and image fields are
/// denormalized copies captured so the cart can render without a catalog
/// join.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product_id: ProductId,
    name: String,
    flavor: String,
    image: String,
    weight: WeightVariant,
    unit_price: Money<'a, Currency>,
    quantity: NonZeroU32,
}

impl<'a> CartLine<'a> {
    /// Create a line for a catalog product, snapshotting the unit price for
    /// the chosen weight and the product's display metadata.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is zero.
    pub fn new(
        product: &Product<'a>,
        weight: WeightVariant,
        quantity: u32,
    ) -> Result<Self, CartError> {
        let quantity = NonZeroU32::new(quantity).ok_or(CartError::ZeroQuantity)?;

        Ok(Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            flavor: product.flavor.clone(),
            image: product.image.clone(),
            weight,
            unit_price: pricing::unit_price(&product.base_price, weight),
            quantity,
        })
    }

    /// Create a line with an explicit unit price and no display metadata.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is zero.
    pub fn with_unit_price(
        product_id: ProductId,
        weight: WeightVariant,
        unit_price: Money<'a, Currency>,
        quantity: u32,
    ) -> Result<Self, CartError> {
        let quantity = NonZeroU32::new(quantity).ok_or(CartError::ZeroQuantity)?;

        Ok(Self {
            product_id,
            name: String::new(),
            flavor: String::new(),
            image: String::new(),
            weight,
            unit_price,
            quantity,
        })
    }

    /// Attach display metadata to a line built with [`CartLine::with_unit_price`].
    #[must_use]
    pub fn with_display(
        mut self,
        name: impl Into<String>,
        flavor: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.flavor = flavor.into();
        self.image = image.into();
        self
    }

    /// The product this line refers to.
    #[must_use]
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Denormalized brand label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Denormalized flavor display name.
    #[must_use]
    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    /// Denormalized asset reference.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// The chosen weight variant.
    #[must_use]
    pub fn weight(&self) -> WeightVariant {
        self.weight
    }

    /// The unit price snapshot taken when the line was created.
    #[must_use]
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// The current quantity, always positive.
    #[must_use]
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// The total for this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money<'a, Currency> {
        pricing::line_total(&self.unit_price, self.quantity.get())
    }

    fn matches(&self, product_id: &ProductId, weight: WeightVariant) -> bool {
        self.product_id == *product_id && self.weight == weight
    }
}

/// Cart
///
/// Created empty at session start; nothing survives the process. Insertion
/// order is preserved for display but carries no other meaning. Totals are
/// recomputed from the current lines on every read, never cached.
#[derive(Debug)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new empty cart for the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same `(product_id, weight)` identity already
    /// exists, its quantity is incremented by the new line's quantity
    /// (saturating) and its original unit price is kept; otherwise the line
    /// is appended. Two adds of quantity 1 therefore yield quantity 2.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] if the line's currency differs
    /// from the cart currency.
    pub fn add_line(&mut self, line: CartLine<'a>) -> Result<(), CartError> {
        let line_currency = line.unit_price().currency();

        if line_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                line_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|existing| existing.matches(&line.product_id, line.weight))
        {
            existing.quantity = existing.quantity.saturating_add(line.quantity.get());
            return Ok(());
        }

        self.lines.push(line);

        Ok(())
    }

    /// Remove the line with the given identity.
    ///
    /// Removing a line that is not present is a no-op, not an error; the
    /// operation is idempotent.
    pub fn remove_line(&mut self, product_id: &ProductId, weight: WeightVariant) {
        self.lines
            .retain(|line| !line.matches(product_id, weight));
    }

    /// Replace the quantity on the line with the given identity.
    ///
    /// A quantity of zero behaves exactly like [`Cart::remove_line`]. If no
    /// line matches, the call is a silent no-op.
    pub fn set_quantity(&mut self, product_id: &ProductId, weight: WeightVariant, quantity: u32) {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            self.remove_line(product_id, weight);
            return;
        };

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product_id, weight))
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines, recomputed on every call.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity.get()).sum()
    }

    /// Total price across all lines, recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if there was a money arithmetic or
    /// currency mismatch error.
    pub fn total_price(&'a self) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        pricing::total_price(&self.lines)
    }

    /// Lookup the line with the given identity.
    pub fn get_line(
        &self,
        product_id: &ProductId,
        weight: WeightVariant,
    ) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.matches(product_id, weight))
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
