//! Listing sort orders.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort orders offered on product listings.
///
/// Parsed from the storefront's query-string keys. Parsing never fails:
/// anything unrecognized sorts by title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Title A-Z.
    #[default]
    Title,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
    /// Newest first.
    Newest,
    /// Oldest first.
    Oldest,
}

impl SortKey {
    /// Query-string key for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::PriceAsc => "price",
            SortKey::PriceDesc => "-price",
            SortKey::RatingDesc => "-rating",
            SortKey::Newest => "-createdAt",
            SortKey::Oldest => "createdAt",
        }
    }

    /// Parse a query-string key, defaulting to [`SortKey::Title`].
    pub fn parse(key: &str) -> Self {
        match key {
            "price" => SortKey::PriceAsc,
            "-price" => SortKey::PriceDesc,
            "-rating" => SortKey::RatingDesc,
            "-createdAt" => SortKey::Newest,
            "createdAt" => SortKey::Oldest,
            _ => SortKey::Title,
        }
    }

    /// Compare two products under this order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Title => compare_titles(a.sort_title(), b.sort_title()),
            SortKey::PriceAsc => a.effective_price_cents().cmp(&b.effective_price_cents()),
            SortKey::PriceDesc => b.effective_price_cents().cmp(&a.effective_price_cents()),
            SortKey::RatingDesc => b.sort_rating().total_cmp(&a.sort_rating()),
            SortKey::Newest => b.sort_created_at().cmp(&a.sort_created_at()),
            SortKey::Oldest => a.sort_created_at().cmp(&b.sort_created_at()),
        }
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        SortKey::parse(key)
    }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        SortKey::parse(&key)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

/// Title order in the manner of en-US collation: base letters first,
/// ignoring accents and case; then accents; then lowercase before uppercase.
fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_base(a)
        .cmp(&collation_base(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercased text with accents stripped: "Éclair" -> "eclair".
fn collation_base(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return a sorted copy of `products`; `None` yields an empty list.
///
/// The input slice is left untouched. The sort is stable.
pub fn safe_sort_products(
    products: Option<&[Product]>,
    sort_by: impl Into<SortKey>,
) -> Vec<Product> {
    let Some(products) = products else {
        return Vec::new();
    };
    let key = sort_by.into();
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Sort products straight from storefront JSON.
///
/// Anything other than an array yields an empty list. Array entries that
/// are not product objects are skipped.
pub fn safe_sort_products_json(
    value: &serde_json::Value,
    sort_by: impl Into<SortKey>,
) -> Vec<Product> {
    let Some(entries) = value.as_array() else {
        tracing::debug!("sort input is not an array; returning no products");
        return Vec::new();
    };

    let products: Vec<Product> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<Product>(entry.clone()) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::debug!(index, error = %e, "skipping non-product entry in sort input");
                    None
                }
            }
        })
        .collect();

    safe_sort_products(Some(products.as_slice()), sort_by)
}
