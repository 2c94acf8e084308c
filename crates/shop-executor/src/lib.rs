//! Deferred execution for storefront interactions.
//!
//! - `Debouncer` - Collapse bursts of calls into one trailing execution
//! - `DebounceError` - Construction failures

mod debounce;
mod error;

pub use debounce::*;
pub use error::*;
