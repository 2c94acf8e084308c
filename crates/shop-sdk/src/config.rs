//! Storefront configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::cart::DEFAULT_TAX_RATE;
use shop_commerce::text::{DEFAULT_ID_LENGTH, DEFAULT_TRUNCATE_LENGTH};
use shop_commerce::{Currency, Money};
use tracing_subscriber::EnvFilter;

/// Settings shared by the storefront helpers.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Store name, used in log lines.
    pub name: String,
    /// Sales tax rate applied to cart subtotals.
    pub tax_rate: f64,
    /// Subtotal in dollars at which shipping becomes free.
    pub free_shipping_threshold: f64,
    /// Character limit for truncated descriptions.
    pub truncate_length: usize,
    /// Length of generated ids.
    pub id_length: usize,
    /// Quiet period for search-as-you-type, in milliseconds.
    pub search_debounce_ms: u64,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "storefront".to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            free_shipping_threshold: 50.0,
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
            id_length: DEFAULT_ID_LENGTH,
            search_debounce_ms: 300,
            log_filter: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the tax rate.
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Set the free-shipping threshold in dollars.
    pub fn with_free_shipping_threshold(mut self, dollars: f64) -> Self {
        self.free_shipping_threshold = dollars;
        self
    }

    /// Set the truncation length.
    pub fn with_truncate_length(mut self, length: usize) -> Self {
        self.truncate_length = length;
        self
    }

    /// Set the generated id length.
    pub fn with_id_length(mut self, length: usize) -> Self {
        self.id_length = length;
        self
    }

    /// Set the search debounce period.
    pub fn with_search_debounce(mut self, wait: Duration) -> Self {
        self.search_debounce_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the default log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// The free-shipping threshold as USD money.
    pub fn free_shipping_threshold(&self) -> Money {
        Money::from_decimal(self.free_shipping_threshold, Currency::USD)
    }

    /// The search debounce period.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Load config from a file: JSON for `.json`, TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file, in the format its extension names.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tax_rate.is_finite() && self.tax_rate >= 0.0,
            "tax_rate must be a non-negative number, got {}",
            self.tax_rate
        );
        ensure!(
            self.free_shipping_threshold.is_finite() && self.free_shipping_threshold >= 0.0,
            "free_shipping_threshold must be a non-negative number, got {}",
            self.free_shipping_threshold
        );
        ensure!(self.truncate_length > 0, "truncate_length must be at least 1");
        ensure!(self.id_length > 0, "id_length must be at least 1");
        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("log_filter is not a valid filter: {}", self.log_filter))?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
