//! Storefront presentation helpers.
//!
//! Small, independent functions used by storefront pages:
//!
//! - **Money & formatting**: cents-based [`Money`], USD prices, long and short dates
//! - **Text**: slugs, truncation, email shape checks, short ids
//! - **Catalog**: listing products and their sort orders
//! - **Cart**: totals, tax, summaries, stock checks, free-shipping upsell
//!
//! # Example
//!
//! ```
//! use shop_commerce::prelude::*;
//!
//! let items = vec![
//!     CartItem::new(Money::usd(1000), 2),
//!     CartItem::new(Money::usd(500), 1),
//! ];
//!
//! let totals = calculate_cart_total_with_tax(&items, DEFAULT_TAX_RATE);
//! assert_eq!(totals.total.display(), "$27.00");
//!
//! let upgrade = suggest_shipping_upgrade(totals.subtotal, DEFAULT_FREE_SHIPPING_THRESHOLD);
//! assert_eq!(upgrade.unwrap().message, "Add $25.00 more for free shipping");
//! ```

pub mod error;
pub mod format;
pub mod money;
pub mod text;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::{Currency, Money};

    // Formatting
    pub use crate::format::{format_date, format_date_time, format_price, DateLike, INVALID_DATE};

    // Text
    pub use crate::text::{
        generate_id, is_valid_email, slugify, truncate_text, DEFAULT_ID_LENGTH,
        DEFAULT_TRUNCATE_LENGTH,
    };

    // Catalog
    pub use crate::catalog::{safe_sort_products, safe_sort_products_json, Product, SortKey};

    // Cart
    pub use crate::cart::{
        calculate_cart_total, calculate_cart_total_with_tax, get_cart_summary,
        suggest_shipping_upgrade, try_calculate_cart_total, try_calculate_cart_total_with_tax,
        try_suggest_shipping_upgrade,
        validate_cart_stock, CartItem, CartSummary, CartTotals, ShippingUpgrade,
        ValidatedCartItem, DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_TAX_RATE,
    };
}
