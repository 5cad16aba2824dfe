//! # Configuration
//!
//! Runtime settings for [`CafeSystem`](crate::lifecycle::CafeSystem), read
//! from the environment with defaults for anything unset:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `CAFE_MAILBOX_CAPACITY` | mailbox size of each actor | `32` |
//! | `CAFE_CATALOG_PATH` | JSON file with the products to seed | built-in café menu |
//!
//! The catalog file is a JSON array of
//! [`ProductCreate`] objects:
//!
//! ```json
//! [{ "name": "Espresso", "description": "Strong Italian coffee", "price": "2.50", "stockQuantity": 100 }]
//! ```

use crate::model::ProductCreate;
use rust_decimal_macros::dec;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MAILBOX_CAPACITY_VAR: &str = "CAFE_MAILBOX_CAPACITY";
pub const CATALOG_PATH_VAR: &str = "CAFE_CATALOG_PATH";

const DEFAULT_MAILBOX_CAPACITY: usize = 32;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CAFE_MAILBOX_CAPACITY must be a positive integer, got {0:?}")]
    InvalidCapacity(String),

    #[error("Cannot read catalog {path}: {source}")]
    ReadCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse catalog {path}: {source}")]
    ParseCatalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CafeConfig {
    /// Mailbox size of each actor. Senders wait when it is full.
    pub mailbox_capacity: usize,
    /// Products created at startup, in id order.
    pub catalog: Vec<ProductCreate>,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            catalog: default_catalog(),
        }
    }
}

impl CafeConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAILBOX_CAPACITY_VAR) {
            config.mailbox_capacity = match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => return Err(ConfigError::InvalidCapacity(raw)),
            };
        }
        if let Some(path) = lookup(CATALOG_PATH_VAR) {
            config.catalog = load_catalog(Path::new(&path))?;
        }

        Ok(config)
    }
}

/// Loads a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<ProductCreate>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// The café menu used when no catalog file is configured.
pub fn default_catalog() -> Vec<ProductCreate> {
    vec![
        ProductCreate::new("Espresso", "Strong Italian coffee", dec!(2.50), 100),
        ProductCreate::new("Cappuccino", "Espresso with steamed milk foam", dec!(3.50), 100),
        ProductCreate::new("Latte", "Espresso with steamed milk", dec!(4.00), 100),
        ProductCreate::new("Americano", "Espresso with hot water", dec!(2.75), 100),
        ProductCreate::new("Croissant", "Buttery French pastry", dec!(3.00), 50),
        ProductCreate::new("Muffin", "Blueberry muffin", dec!(2.50), 40),
    ]
}
