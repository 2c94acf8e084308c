//! Free-shipping upsell.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Subtotal at which shipping becomes free when the caller does not supply one.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Money = Money {
    amount_cents: 5000,
    currency: Currency::USD,
};

/// How far a cart is from free shipping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingUpgrade {
    /// Amount still to add.
    pub needed: Money,
    /// Upsell line shown in the cart.
    pub message: String,
}

/// Suggest how much more to spend for free shipping.
///
/// Returns `None` once `subtotal` reaches `threshold`, and also when the
/// two are in different currencies (logged). The message renders the
/// amount with [`Money::display`], which for USD is the text
/// [`format_price`](crate::format::format_price) produces.
pub fn suggest_shipping_upgrade(subtotal: Money, threshold: Money) -> Option<ShippingUpgrade> {
    match try_suggest_shipping_upgrade(subtotal, threshold) {
        Ok(upgrade) => upgrade,
        Err(e) => {
            tracing::warn!(error = %e, "cannot compare subtotal with free-shipping threshold");
            None
        }
    }
}

/// Checked form of [`suggest_shipping_upgrade`].
///
/// Fails on mixed currencies or overflow.
pub fn try_suggest_shipping_upgrade(
    subtotal: Money,
    threshold: Money,
) -> Result<Option<ShippingUpgrade>, CommerceError> {
    let needed = threshold.try_subtract(&subtotal)?;
    if needed.amount_cents <= 0 {
        return Ok(None);
    }

    Ok(Some(ShippingUpgrade {
        message: format!("Add {} more for free shipping", needed.display()),
        needed,
    }))
}
