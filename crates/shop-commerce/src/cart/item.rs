//! Cart line items and stock validation.

use crate::error::CommerceError;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A line in the shopper's cart.
///
/// `price` is the unit price; `stock` is the quantity on hand when known.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unit price.
    #[serde(with = "money::dollars")]
    pub price: Money,
    /// Quantity in the cart.
    pub quantity: i64,
    /// Units available, if tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    /// Other fields the storefront attaches (id, title, image...).
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl CartItem {
    /// Create an item with untracked stock.
    pub fn new(price: Money, quantity: i64) -> Self {
        Self {
            price,
            quantity,
            stock: None,
            attributes: serde_json::Map::new(),
        }
    }

    /// Set the units available.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Attach a storefront field.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Unit price times quantity.
    ///
    /// Returns an error for negative quantities or on overflow.
    pub fn try_line_total(&self) -> Result<Money, CommerceError> {
        if self.quantity < 0 {
            return Err(CommerceError::InvalidQuantity(self.quantity));
        }
        self.price.try_multiply(self.quantity)
    }

    /// Unit price times quantity, clamped at the `i64` bounds.
    pub fn line_total(&self) -> Money {
        self.price.saturating_multiply(self.quantity)
    }

    /// Message describing a shortage, if the quantity exceeds known stock.
    pub fn stock_issue(&self) -> Option<String> {
        match self.stock {
            Some(stock) if self.quantity > stock => Some(format!("Only {} available", stock)),
            _ => None,
        }
    }
}

/// A cart item annotated with its stock check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCartItem {
    /// The original item.
    #[serde(flatten)]
    pub item: CartItem,
    /// False when the quantity exceeds known stock.
    pub is_stock_valid: bool,
    /// Shortage message shown next to the line.
    pub stock_issue: Option<String>,
}

/// Check every item against its stock. Items without stock are always valid.
///
/// A stock of `Some(0)` is tracked stock, not "unknown": any positive
/// quantity against it is flagged.
pub fn validate_cart_stock(items: &[CartItem]) -> Vec<ValidatedCartItem> {
    items
        .iter()
        .map(|item| {
            let stock_issue = item.stock_issue();
            ValidatedCartItem {
                item: item.clone(),
                is_stock_valid: stock_issue.is_none(),
                stock_issue,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_total() {
        let item = CartItem::new(Money::usd(1000), 3);
        assert_eq!(item.line_total(), Money::usd(3000));
        assert_eq!(item.try_line_total().unwrap(), Money::usd(3000));
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let item = CartItem::new(Money::usd(1000), -1);
        assert!(matches!(
            item.try_line_total(),
            Err(CommerceError::InvalidQuantity(-1))
        ));
    }

    #[test]
    fn test_validate_stock() {
        let items = vec![
            CartItem::new(Money::usd(1000), 2).with_stock(5),
            CartItem::new(Money::usd(1000), 6).with_stock(5),
            CartItem::new(Money::usd(1000), 5).with_stock(5),
            CartItem::new(Money::usd(1000), 100),
        ];

        let validated = validate_cart_stock(&items);
        assert_eq!(validated.len(), 4);

        assert!(validated[0].is_stock_valid);
        assert_eq!(validated[0].stock_issue, None);

        assert!(!validated[1].is_stock_valid);
        assert_eq!(validated[1].stock_issue.as_deref(), Some("Only 5 available"));

        assert!(validated[2].is_stock_valid);
        assert!(validated[3].is_stock_valid);
        assert_eq!(validated[3].item, items[3]);
    }

    #[test]
    fn test_zero_stock_is_a_shortage() {
        let validated = validate_cart_stock(&[CartItem::new(Money::usd(500), 1).with_stock(0)]);
        assert!(!validated[0].is_stock_valid);
        assert_eq!(validated[0].stock_issue.as_deref(), Some("Only 0 available"));
    }

    #[test]
    fn test_validate_empty_cart() {
        assert!(validate_cart_stock(&[]).is_empty());
    }

    #[test]
    fn test_cart_item_json_shape() {
        let item: CartItem =
            serde_json::from_str(r#"{"id": "sku-1", "price": 12.5, "quantity": 2, "stock": 3}"#)
                .unwrap();
        assert_eq!(item.price, Money::usd(1250));
        assert_eq!(item.stock, Some(3));
        assert_eq!(item.attributes.get("id"), Some(&json!("sku-1")));

        let validated = validate_cart_stock(&[item]);
        let value = serde_json::to_value(&validated[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "sku-1",
                "price": 12.5,
                "quantity": 2,
                "stock": 3,
                "isStockValid": true,
                "stockIssue": null
            })
        );
    }
}
