//! # Pricing Error Types
//!
//! Error types for remote price lookups.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Lookup      │  │   Transport     │  │     Configuration       │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  MissingField   │  │  Request        │  │  InvalidUrl             │ │
//! │  │  InvalidPrice   │  │  Decode         │  │  InvalidConfig          │ │
//! │  │  PriceUnavail.  │  │  (unchanged)    │  │  ConfigLoadFailed       │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Core: overflow while rounding the line total (cart-core)       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is retried. Transport errors reach the caller as raised.

use cart_core::CoreError;
use thiserror::Error;

/// Result type alias for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Transport Error
// =============================================================================

/// Failure raised by a [`PriceSource`](crate::transport::PriceSource).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request could not be completed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was missing or not JSON.
    #[error("Undecodable response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Pricing error type covering every lookup failure.
#[derive(Debug, Error)]
pub enum PricingError {
    // =========================================================================
    // Lookup Errors
    // =========================================================================
    /// The lookup response has no price field.
    #[error("Price lookup for item {item_id} has no '{field}' field")]
    MissingField { item_id: String, field: String },

    /// The price field holds something other than a number or null.
    #[error("Price lookup for item {item_id} returned a non-numeric price: {value}")]
    InvalidPrice { item_id: String, value: String },

    /// The lookup returned a null price and a total was requested.
    #[error("No price available for item {item_id}")]
    PriceUnavailable { item_id: String },

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The price source failed; kept as raised.
    #[error(transparent)]
    Transport(#[from] TransportError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The endpoint is not a usable base URL.
    #[error("Invalid price endpoint: {0}")]
    InvalidUrl(String),

    /// A configuration value is out of range or unparsable.
    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Core Errors
    // =========================================================================
    /// Rounding the line total failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for PricingError {
    fn from(err: url::ParseError) -> Self {
        PricingError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for PricingError {
    fn from(err: std::io::Error) -> Self {
        PricingError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for PricingError {
    fn from(err: toml::de::Error) -> Self {
        PricingError::ConfigLoadFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl PricingError {
    /// Returns true if the response arrived but lacked a usable `price`.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            PricingError::MissingField { .. } | PricingError::InvalidPrice { .. }
        )
    }

    /// Returns true if the price source itself failed.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, PricingError::Transport(_))
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidUrl(_)
                | PricingError::InvalidConfig(_)
                | PricingError::ConfigLoadFailed(_)
        )
    }
}
