//! # Dynamically Priced Items
//!
//! Line items whose unit price is fetched from the pricing endpoint every time
//! a total is computed.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order::calculate_subtotal()                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DynamicallyPricedItem::calculate_item_total()                          │
//! │       │                                                                 │
//! │       ├──► get_latest_price() ──► GET {endpoint}/{item_id}  (blocking)  │
//! │       │          │                                                      │
//! │       │          ├── Some(price) ──► round(price × quantity, 2)         │
//! │       │          └── None ─────────► PriceUnavailable                   │
//! │       │                                                                 │
//! │       └──► errors leave through CoreError::LineItem, original kept      │
//! │            as the source                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices are never cached: two totals mean two lookups.

use cart_core::{CoreError, CoreResult, LineItem, Money, DEFAULT_QUANTITY};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::item_id::ItemId;
use crate::lookup::PriceLookup;

/// A line item priced by a remote lookup.
#[derive(Debug, Clone)]
pub struct DynamicallyPricedItem {
    /// Catalogue identifier; may be absent.
    pub item_id: ItemId,

    /// Units on this line.
    pub quantity: u32,

    lookup: PriceLookup,
}

impl DynamicallyPricedItem {
    /// Creates an item with a quantity of one.
    pub fn new(item_id: impl Into<ItemId>, lookup: PriceLookup) -> Self {
        DynamicallyPricedItem::with_quantity(item_id, DEFAULT_QUANTITY, lookup)
    }

    /// Creates an item with an explicit quantity.
    pub fn with_quantity(item_id: impl Into<ItemId>, quantity: u32, lookup: PriceLookup) -> Self {
        DynamicallyPricedItem {
            item_id: item_id.into(),
            quantity,
            lookup,
        }
    }

    /// The lookup this item is priced through.
    pub fn lookup(&self) -> &PriceLookup {
        &self.lookup
    }

    /// Fetches the current unit price. A `null` price comes back as `None`.
    pub fn get_latest_price(&self) -> PricingResult<Option<Decimal>> {
        self.lookup.latest_price(&self.item_id)
    }

    /// Fetches the price and returns `round(price × quantity, 2)`.
    pub fn calculate_item_total(&self) -> PricingResult<Money> {
        let price = self
            .get_latest_price()?
            .ok_or_else(|| PricingError::PriceUnavailable {
                item_id: self.item_id.to_string(),
            })?;
        self.total_for_price(price)
    }

    /// Line total for an already known unit price.
    pub fn total_for_price(&self, unit_price: Decimal) -> PricingResult<Money> {
        let total = Money::line_total(unit_price, self.quantity)?;
        debug!(item_id = %self.item_id, %unit_price, quantity = self.quantity, %total, "Priced dynamic item");
        Ok(total)
    }
}

impl LineItem for DynamicallyPricedItem {
    fn label(&self) -> String {
        format!("item {}", self.item_id)
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn calculate_item_total(&self) -> CoreResult<Money> {
        DynamicallyPricedItem::calculate_item_total(self)
            .map_err(|err| CoreError::line_item(self.label(), err))
    }
}
