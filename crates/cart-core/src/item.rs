//! # Line Items
//!
//! The contract every priced entry of an order fulfils, plus the fixed-price
//! [`Item`].
//!
//! ## Line Item Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        trait LineItem                                   │
//! │                 calculate_item_total() -> Money                         │
//! │                                                                         │
//! │   ┌──────────────────────────┐      ┌──────────────────────────────┐   │
//! │   │ Item (this module)       │      │ DynamicallyPricedItem        │   │
//! │   │ ──────────────────────── │      │ (cart-pricing crate)         │   │
//! │   │ name                     │      │ ──────────────────────────── │   │
//! │   │ unit_price  (fixed)      │      │ item_id                      │   │
//! │   │ quantity                 │      │ quantity                     │   │
//! │   │                          │      │ unit price fetched on demand │   │
//! │   └──────────────────────────┘      └──────────────────────────────┘   │
//! │                                                                         │
//! │  Both round `unit_price × quantity` to cents the same way.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;

/// Quantity used when none is given.
pub const DEFAULT_QUANTITY: u32 = 1;

/// A priced entry of an order.
///
/// Implemented by [`Item`] here and by remotely priced items elsewhere.
/// Errors an implementation raises should be wrapped with
/// [`CoreError::line_item`](crate::CoreError::line_item) so the original
/// error stays reachable through `source()`.
pub trait LineItem: fmt::Debug {
    /// Human-readable label for logs and error context.
    fn label(&self) -> String;

    /// Number of units on this line.
    fn quantity(&self) -> u32;

    /// Returns `round(unit_price × quantity, 2)`.
    fn calculate_item_total(&self) -> CoreResult<Money>;
}

impl<T: LineItem + ?Sized> LineItem for Box<T> {
    fn label(&self) -> String {
        (**self).label()
    }

    fn quantity(&self) -> u32 {
        (**self).quantity()
    }

    fn calculate_item_total(&self) -> CoreResult<Money> {
        (**self).calculate_item_total()
    }
}

// =============================================================================
// Item
// =============================================================================

/// A line item with a fixed unit price.
///
/// ## Design Notes
/// - `unit_price` is exact; rounding happens on the line total only
/// - A negative `unit_price` is accepted here. The resulting negative line
///   total is rejected later as a negative order subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,

    /// Price of one unit.
    pub unit_price: Decimal,

    /// Units on this line.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

impl Item {
    /// Creates an item with a quantity of one.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::Item;
    /// use rust_decimal::Decimal;
    ///
    /// let item = Item::new("stuff", Decimal::new(1234, 2));
    /// assert_eq!(item.quantity, 1);
    /// ```
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Item::with_quantity(name, unit_price, DEFAULT_QUANTITY)
    }

    /// Creates an item with an explicit quantity.
    pub fn with_quantity(name: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Item {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Returns `round(unit_price × quantity, 2)`.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::Item;
    /// use rust_decimal::Decimal;
    ///
    /// let item = Item::with_quantity("stuff", Decimal::new(1234, 2), 3);
    /// assert_eq!(item.calculate_item_total().unwrap().cents(), 3702);
    /// ```
    pub fn calculate_item_total(&self) -> CoreResult<Money> {
        Money::line_total(self.unit_price, self.quantity)
    }
}

impl LineItem for Item {
    fn label(&self) -> String {
        self.name.clone()
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn calculate_item_total(&self) -> CoreResult<Money> {
        Item::calculate_item_total(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
