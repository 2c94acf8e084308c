//! Cart pricing calculations.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Sales tax applied when the caller does not supply a rate.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Subtotal, tax and grand total for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals before tax.
    pub subtotal: Money,
    /// Tax on the subtotal, rounded to the cent.
    pub tax: Money,
    /// Subtotal plus tax.
    pub total: Money,
}

impl CartTotals {
    /// Apply `tax_rate` to a subtotal.
    pub fn from_subtotal(subtotal: Money, tax_rate: f64) -> Self {
        let tax = subtotal.multiply_decimal(tax_rate);
        Self {
            subtotal,
            tax,
            total: subtotal.saturating_add(&tax),
        }
    }
}

/// Quantities and value across a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities.
    pub total_items: i64,
    /// Number of lines.
    pub unique_items: usize,
    /// Sum of line totals.
    pub total_value: Money,
    /// Value per unit; zero for an empty cart.
    pub average_item_value: Money,
}

fn cart_currency(items: &[CartItem]) -> Currency {
    items.first().map(|i| i.price.currency).unwrap_or_default()
}

/// Sum of price times quantity, without tax.
///
/// Assumes a single-currency cart and clamps instead of overflowing; use
/// [`try_calculate_cart_total`] to surface those problems.
pub fn calculate_cart_total(items: &[CartItem]) -> Money {
    items
        .iter()
        .fold(Money::zero(cart_currency(items)), |total, item| {
            total.saturating_add(&item.line_total())
        })
}

/// Checked form of [`calculate_cart_total`].
///
/// Fails on negative quantities, mixed currencies or overflow.
pub fn try_calculate_cart_total(items: &[CartItem]) -> Result<Money, CommerceError> {
    items
        .iter()
        .try_fold(Money::zero(cart_currency(items)), |total, item| {
            total.try_add(&item.try_line_total()?)
        })
}

/// Subtotal, tax at `tax_rate`, and total.
pub fn calculate_cart_total_with_tax(items: &[CartItem], tax_rate: f64) -> CartTotals {
    CartTotals::from_subtotal(calculate_cart_total(items), tax_rate)
}

/// Checked form of [`calculate_cart_total_with_tax`].
pub fn try_calculate_cart_total_with_tax(
    items: &[CartItem],
    tax_rate: f64,
) -> Result<CartTotals, CommerceError> {
    let subtotal = try_calculate_cart_total(items)?;
    let tax = subtotal.multiply_decimal(tax_rate);
    Ok(CartTotals {
        subtotal,
        tax,
        total: subtotal.try_add(&tax)?,
    })
}

/// Item counts, total value and average value per unit.
pub fn get_cart_summary(items: &[CartItem]) -> CartSummary {
    let total_items = items
        .iter()
        .fold(0_i64, |sum, item| sum.saturating_add(item.quantity));
    let total_value = calculate_cart_total(items);

    CartSummary {
        total_items,
        unique_items: items.len(),
        total_value,
        average_item_value: total_value.average_over(total_items),
    }
}
