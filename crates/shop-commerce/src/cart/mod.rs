//! Shopping cart math.
//!
//! Totals, tax, summaries, stock checks and the free-shipping upsell,
//! all computed over a slice of [`CartItem`]s.

mod item;
mod pricing;
mod shipping;

pub use item::{validate_cart_stock, CartItem, ValidatedCartItem};
pub use pricing::{
    calculate_cart_total, calculate_cart_total_with_tax, get_cart_summary,
    try_calculate_cart_total, try_calculate_cart_total_with_tax, CartSummary, CartTotals,
    DEFAULT_TAX_RATE,
};
pub use shipping::{
    suggest_shipping_upgrade, try_suggest_shipping_upgrade, ShippingUpgrade,
    DEFAULT_FREE_SHIPPING_THRESHOLD,
};
