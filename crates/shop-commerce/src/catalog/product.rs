//! Product listing entries.

use crate::format::DateLike;
use crate::money::{self, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A product as shown in a storefront listing.
///
/// Every field is optional; listing code falls back to an empty title,
/// a zero price or rating, and the Unix epoch when one is missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// List price.
    #[serde(
        default,
        with = "money::dollars::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Money>,
    /// Sale price, preferred over `price` when set and non-zero.
    #[serde(
        default,
        with = "money::dollars::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub discounted_price: Option<Money>,
    /// Average review rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// When the product was listed.
    #[serde(
        default,
        deserialize_with = "deserialize_date_like",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Create a product with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the list price.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the sale price.
    pub fn with_discounted_price(mut self, price: Money) -> Self {
        self.discounted_price = Some(price);
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the listing timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Title used for ordering; empty when missing.
    pub fn sort_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Price a shopper pays, in cents: the sale price when set and non-zero,
    /// then the list price, then zero.
    pub fn effective_price_cents(&self) -> i64 {
        self.discounted_price
            .filter(|m| !m.is_zero())
            .or(self.price)
            .map(|m| m.amount_cents)
            .unwrap_or(0)
    }

    /// Rating used for ordering; zero when missing.
    pub fn sort_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Listing time used for ordering; the Unix epoch when missing.
    pub fn sort_created_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Accepts RFC 3339 / date-only strings or epoch milliseconds.
/// Unparseable values become `None` rather than failing the product.
fn deserialize_date_like<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| {
        let date = match raw {
            Raw::Millis(ms) => DateLike::Millis(ms),
            Raw::Text(text) => DateLike::Text(text),
        };
        date.resolve()
    }))
}
