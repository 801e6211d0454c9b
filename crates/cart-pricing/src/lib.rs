//! # cart-pricing: Remote Price Lookup
//!
//! Line items whose unit price comes from the pricing endpoint, and the
//! plumbing behind that one network call.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Remote Pricing                                   │
//! │                                                                         │
//! │  cart_core::Order ── Box<dyn LineItem> ──► DynamicallyPricedItem        │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                            PriceLookup                  │
//! │                                     URL: {endpoint}/{item_id}           │
//! │                                     field: "price"                      │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                       Arc<dyn PriceSource>              │
//! │                                  HttpPriceSource (blocking reqwest)     │
//! │                                                                         │
//! │  SYNCHRONOUS: each item blocks on its own request, in order.            │
//! │  No batching, no caching, no retry.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`dynamic_item`] - `DynamicallyPricedItem`
//! - [`lookup`] - URL building and `price` extraction
//! - [`transport`] - `PriceSource` trait and the HTTP implementation
//! - [`item_id`] - Opaque item identifiers
//! - [`config`] - Endpoint/timeout configuration (TOML + env)
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Pricing error types
//!
//! ## Example
//! ```rust,no_run
//! use cart_core::{Item, Order};
//! use cart_pricing::{DynamicallyPricedItem, PriceLookup, PriceLookupConfig};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lookup = PriceLookup::from_config(&PriceLookupConfig::load()?)?;
//!
//! let mut order = Order::with_charges(Decimal::from(5), Decimal::ZERO, Decimal::new(5, 2));
//! order.add_item(Item::new("stuff", Decimal::new(1234, 2)));
//! order.add_item(DynamicallyPricedItem::with_quantity(12345u64, 2, lookup));
//!
//! let summary = order.summary()?;
//! println!("total {} ({} points)", summary.total, summary.reward_points);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dynamic_item;
pub mod error;
pub mod item_id;
pub mod lookup;
pub mod telemetry;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::{PriceLookupConfig, DEFAULT_PRICE_ENDPOINT};
pub use dynamic_item::DynamicallyPricedItem;
pub use error::{PricingError, PricingResult, TransportError};
pub use item_id::ItemId;
pub use lookup::{PriceLookup, PRICE_FIELD};
pub use transport::{HttpPriceSource, PriceSource};
