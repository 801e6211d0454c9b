//! # Price Lookup
//!
//! Builds the lookup URL for an item and pulls the `price` field out of the
//! response.
//!
//! ## Response Handling
//! ```text
//! GET {endpoint}/{item_id}
//!      │
//!      ├── transport fails ─────────────► PricingError::Transport (as raised)
//!      │
//!      ▼
//! { "price": ... } ?
//!      ├── no "price" key / not object ─► PricingError::MissingField
//!      ├── "price": null ───────────────► Ok(None)
//!      ├── "price": 12.34567 ───────────► Ok(Some(12.34567)), full precision
//!      └── "price": "abc" / [] / {} ────► PricingError::InvalidPrice
//! ```

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::{Number, Value};
use tracing::{debug, warn};
use url::Url;

use crate::config::PriceLookupConfig;
use crate::error::{PricingError, PricingResult};
use crate::item_id::ItemId;
use crate::transport::{HttpPriceSource, PriceSource};

/// Field of the lookup response holding the unit price.
pub const PRICE_FIELD: &str = "price";

/// Resolves the latest unit price of an item.
///
/// Cheap to clone; every dynamically priced item holds one.
#[derive(Debug, Clone)]
pub struct PriceLookup {
    endpoint: Url,
    source: Arc<dyn PriceSource>,
}

impl PriceLookup {
    /// Creates a lookup against `endpoint` using `source` for requests.
    pub fn new(endpoint: Url, source: Arc<dyn PriceSource>) -> PricingResult<Self> {
        if endpoint.cannot_be_a_base() {
            return Err(PricingError::InvalidUrl(format!(
                "endpoint '{endpoint}' cannot take a path segment"
            )));
        }
        Ok(PriceLookup { endpoint, source })
    }

    /// Creates a lookup against the default endpoint.
    pub fn with_source(source: Arc<dyn PriceSource>) -> PricingResult<Self> {
        let endpoint = PriceLookupConfig::default().endpoint_url()?;
        PriceLookup::new(endpoint, source)
    }

    /// Creates an HTTP-backed lookup from configuration.
    pub fn from_config(config: &PriceLookupConfig) -> PricingResult<Self> {
        config.validate()?;
        let source = HttpPriceSource::from_config(config)?;
        PriceLookup::new(config.endpoint_url()?, Arc::new(source))
    }

    /// Base URL item ids are appended to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL of the lookup for `item_id`.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use cart_pricing::{HttpPriceSource, ItemId, PriceLookup};
    ///
    /// let lookup = PriceLookup::with_source(Arc::new(HttpPriceSource::new().unwrap())).unwrap();
    /// assert_eq!(
    ///     lookup.item_url(&ItemId::absent()).unwrap().as_str(),
    ///     "https://api.pandastore.com/getitem/None"
    /// );
    /// ```
    pub fn item_url(&self, item_id: &ItemId) -> PricingResult<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| PricingError::InvalidUrl(self.endpoint.to_string()))?
            .pop_if_empty()
            .push(item_id.as_segment());
        Ok(url)
    }

    /// Fetches the latest unit price of `item_id`.
    ///
    /// A `null` price is returned as `None`; it is not an error here.
    pub fn latest_price(&self, item_id: &ItemId) -> PricingResult<Option<Decimal>> {
        let url = self.item_url(item_id)?;
        let body = self.source.fetch_json(&url)?;
        let price = extract_price(item_id, &body)?;
        debug!(%item_id, ?price, "Fetched latest price");
        Ok(price)
    }
}

fn extract_price(item_id: &ItemId, body: &Value) -> PricingResult<Option<Decimal>> {
    let Some(value) = body.get(PRICE_FIELD) else {
        warn!(%item_id, "Price lookup response has no price field");
        return Err(PricingError::MissingField {
            item_id: item_id.to_string(),
            field: PRICE_FIELD.to_string(),
        });
    };

    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number_to_decimal(number).map(Some).ok_or_else(|| {
            PricingError::InvalidPrice {
                item_id: item_id.to_string(),
                value: number.to_string(),
            }
        }),
        other => Err(PricingError::InvalidPrice {
            item_id: item_id.to_string(),
            value: other.to_string(),
        }),
    }
}

fn number_to_decimal(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
