//! Product catalog listings.
//!
//! Contains the listing product shape and its sort orders.

mod product;
mod sort;

pub use product::Product;
pub use sort::{safe_sort_products, safe_sort_products_json, SortKey};
