//! # Price Transport
//!
//! The seam between price lookups and the network.
//!
//! ## Transport Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PriceLookup ──► PriceSource::fetch_json(url) ──► serde_json::Value     │
//! │                        │                                                │
//! │         ┌──────────────┴───────────────┐                                │
//! │         ▼                              ▼                                │
//! │  HttpPriceSource                 test doubles                           │
//! │  blocking GET, no retry          canned JSON / errors,                  │
//! │  optional timeout                recorded URLs                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The call blocks the caller until the response (or a network error)
//! arrives. A non-2xx status is logged and its body still parsed, so an
//! error page without a `price` field becomes a lookup error upstream.

use std::fmt;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::PriceLookupConfig;
use crate::error::TransportError;

/// Fetches a JSON document for a price lookup URL.
pub trait PriceSource: Send + Sync + fmt::Debug {
    /// Performs one request and decodes the body as JSON.
    fn fetch_json(&self, url: &Url) -> Result<Value, TransportError>;
}

/// Blocking HTTP price source.
#[derive(Debug, Clone)]
pub struct HttpPriceSource {
    client: Client,
}

impl HttpPriceSource {
    /// Creates a source with the default configuration (no timeout).
    pub fn new() -> Result<Self, TransportError> {
        Self::from_config(&PriceLookupConfig::default())
    }

    /// Creates a source honouring the configured timeout and user agent.
    pub fn from_config(config: &PriceLookupConfig) -> Result<Self, TransportError> {
        // reqwest defaults to a 30s timeout; `None` turns it off
        let mut builder = Client::builder().timeout(config.timeout());

        if let Some(user_agent) = &config.lookup.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(HttpPriceSource {
            client: builder.build()?,
        })
    }

    /// Wraps an existing client.
    pub fn with_client(client: Client) -> Self {
        HttpPriceSource { client }
    }
}

impl PriceSource for HttpPriceSource {
    fn fetch_json(&self, url: &Url) -> Result<Value, TransportError> {
        debug!(%url, "Requesting latest price");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Price endpoint returned a non-success status");
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|err| TransportError::Decode {
            url: url.to_string(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_config() {
        let mut config = PriceLookupConfig::default();
        config.lookup.timeout_secs = Some(3);
        config.lookup.user_agent = Some("register-1".into());

        assert!(HttpPriceSource::from_config(&config).is_ok());
        assert!(HttpPriceSource::new().is_ok());
    }

    #[test]
    fn test_connection_failure_is_request_error() {
        let source = HttpPriceSource::new().unwrap();
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let url = Url::parse(&format!("http://{addr}/getitem/1")).unwrap();

        let err = source.fetch_json(&url).unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }
}
