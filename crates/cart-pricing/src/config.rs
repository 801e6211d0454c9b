//! # Price Lookup Configuration
//!
//! Where dynamic prices come from and how the HTTP client is set up.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     PANDASTORE_PRICE_ENDPOINT=https://staging.pandastore.com/getitem    │
//! │     PANDASTORE_PRICE_TIMEOUT_SECS=10                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     ~/.config/cart/pricing.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.pandastore.cart/pricing.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     https://api.pandastore.com/getitem, no timeout                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pricing.toml
//! [lookup]
//! endpoint = "https://api.pandastore.com/getitem"
//! timeout_secs = 10            # omit to wait indefinitely
//! user_agent = "cart-pricing"  # optional
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::error::{PricingError, PricingResult};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_PRICE_ENDPOINT: &str = "https://api.pandastore.com/getitem";

/// Overrides `lookup.endpoint`.
pub const ENV_PRICE_ENDPOINT: &str = "PANDASTORE_PRICE_ENDPOINT";

/// Overrides `lookup.timeout_secs`.
pub const ENV_PRICE_TIMEOUT_SECS: &str = "PANDASTORE_PRICE_TIMEOUT_SECS";

/// File name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "pricing.toml";

// =============================================================================
// Lookup Settings
// =============================================================================

/// Settings for the price lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSettings {
    /// Base URL; the item id is appended as the last path segment.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout (seconds). `None` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with lookups.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_PRICE_ENDPOINT.to_string()
}

impl Default for LookupSettings {
    fn default() -> Self {
        LookupSettings {
            endpoint: default_endpoint(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete price lookup configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLookupConfig {
    #[serde(default)]
    pub lookup: LookupSettings,
}

impl PriceLookupConfig {
    /// Loads configuration from the platform config file (if present) and
    /// applies environment overrides.
    pub fn load() -> PricingResult<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path)?,
            _ => {
                debug!("No pricing config file found, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file without environment overrides.
    pub fn load_from_path(path: &Path) -> PricingResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), endpoint = %config.lookup.endpoint, "Loaded pricing config");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> PricingResult<Self> {
        let config: PriceLookupConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Platform-specific config file location.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "pandastore", "cart")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> PricingResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, var: F) -> PricingResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = var(ENV_PRICE_ENDPOINT) {
            debug!(%endpoint, "Price endpoint overridden from environment");
            self.lookup.endpoint = endpoint;
        }

        if let Some(raw) = var(ENV_PRICE_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                PricingError::InvalidConfig(format!(
                    "{ENV_PRICE_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            self.lookup.timeout_secs = Some(secs);
        }

        Ok(())
    }

    /// Checks the endpoint and timeout.
    pub fn validate(&self) -> PricingResult<()> {
        self.endpoint_url()?;

        if self.lookup.timeout_secs == Some(0) {
            return Err(PricingError::InvalidConfig(
                "timeout_secs must be greater than 0 (omit it to disable the timeout)".into(),
            ));
        }

        Ok(())
    }

    /// Parsed endpoint URL.
    pub fn endpoint_url(&self) -> PricingResult<Url> {
        let url = Url::parse(&self.lookup.endpoint)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(PricingError::InvalidUrl(format!(
                "endpoint must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(PricingError::InvalidUrl(format!(
                "endpoint '{url}' cannot take a path segment"
            )));
        }

        Ok(url)
    }

    /// Request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.lookup.timeout_secs.map(Duration::from_secs)
    }
}
