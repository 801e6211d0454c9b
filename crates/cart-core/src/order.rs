//! # Order
//!
//! Aggregates line items and derives subtotal, total and reward points.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  add_item(item) ─────────► items.push(item)   (no dedup, no limit)      │
//! │                                                                         │
//! │  calculate_subtotal() ───► Σ item.calculate_item_total(), in order      │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  calculate_order_total() ► calculate_total(subtotal, shipping,          │
//! │          │                                 discount, tax_percent)       │
//! │          ▼                                                              │
//! │  get_reward_points() ────► order_total × 1.01 (exact, unrounded)        │
//! │                                                                         │
//! │  NOTE: every call re-prices every item. Remotely priced items issue     │
//! │        one lookup each per call; use summary() to price once.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::item::LineItem;
use crate::money::Money;
use crate::pricing::calculate_total;

/// Reward points earned per unit of order total (101%).
pub const REWARD_POINTS_RATE: Decimal = Decimal::from_parts(101, 0, 0, false, 2);

/// Derives reward points from an order total: `total × 1.01`, unrounded.
///
/// ## Example
/// ```rust
/// use cart_core::order::reward_points_for;
/// use cart_core::Money;
/// use rust_decimal::Decimal;
///
/// let points = reward_points_for(Money::from_cents(100_000)); // 1000.00
/// assert_eq!(points, Decimal::from(1010));
/// ```
pub fn reward_points_for(order_total: Money) -> Decimal {
    // cents fit in 96 bits, so ×1.01 cannot overflow
    order_total.to_decimal() * REWARD_POINTS_RATE
}

/// A shopping order.
///
/// ## Invariants
/// - Items keep insertion order
/// - Items are only ever appended
/// - Charges are validated when a total is computed, not when set
#[derive(Debug, Default)]
pub struct Order {
    items: Vec<Box<dyn LineItem>>,

    /// Flat shipping charge.
    pub shipping: Decimal,

    /// Flat discount; never pushes the taxable amount below zero.
    pub discount: Decimal,

    /// Tax as a fraction (0.05 = 5%).
    pub tax_percent: Decimal,
}

impl Order {
    /// Creates an empty order with no shipping, discount or tax.
    pub fn new() -> Self {
        Order::default()
    }

    /// Creates an empty order with the given charges.
    pub fn with_charges(shipping: Decimal, discount: Decimal, tax_percent: Decimal) -> Self {
        Order {
            items: Vec::new(),
            shipping,
            discount,
            tax_percent,
        }
    }

    /// Appends an item.
    pub fn add_item<I>(&mut self, item: I)
    where
        I: LineItem + 'static,
    {
        self.items.push(Box::new(item));
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Box<dyn LineItem>] {
        &self.items
    }

    /// Number of lines in the order.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }

    /// Checks if the order has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sums every item's total, in order.
    ///
    /// Stops at the first item that fails to price; later items are not
    /// priced (so no further lookups are issued).
    pub fn calculate_subtotal(&self) -> CoreResult<Money> {
        let mut subtotal = Money::zero();
        for item in &self.items {
            let line_total = item.calculate_item_total()?;
            debug!(item = %item.label(), %line_total, "Priced line item");
            subtotal = subtotal.checked_add(line_total)?;
        }
        Ok(subtotal)
    }

    /// Computes the amount due.
    pub fn calculate_order_total(&self) -> CoreResult<Money> {
        let subtotal = self.calculate_subtotal()?;
        self.total_for_subtotal(subtotal)
    }

    /// Computes reward points: the order total plus 1%, unrounded.
    pub fn get_reward_points(&self) -> CoreResult<Decimal> {
        Ok(reward_points_for(self.calculate_order_total()?))
    }

    /// Prices every item once and derives all totals from that pass.
    pub fn summary(&self) -> CoreResult<OrderSummary> {
        let subtotal = self.calculate_subtotal()?;
        let total = self.total_for_subtotal(subtotal)?;
        Ok(OrderSummary {
            item_count: self.item_count(),
            total_quantity: self.total_quantity(),
            subtotal,
            total,
            reward_points: reward_points_for(total),
        })
    }

    fn total_for_subtotal(&self, subtotal: Money) -> CoreResult<Money> {
        calculate_total(
            subtotal.to_decimal(),
            self.shipping,
            self.discount,
            self.tax_percent,
        )
        .map_err(|err| {
            if let CoreError::Validation(ref validation) = err {
                debug!(%subtotal, error = %validation, "Order charges rejected");
            }
            err
        })
    }
}

/// Order totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub total: Money,
    pub reward_points: Decimal,
}

// =============================================================================
// Unit Tests
// =============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::item::Item;
    use proptest::prelude::*;

    fn items() -> impl Strategy<Value = Vec<(i64, u32)>> {
        prop::collection::vec((0i64..=100_000, 0u32..=50), 0..=20)
    }

    proptest! {
        /// Subtotal is the sum of item totals, and add_item keeps count and order.
        #[test]
        fn prop_subtotal_is_sum_of_item_totals(lines in items()) {
            let mut order = Order::new();
            let mut expected = Money::zero();
            for (index, (price_cents, quantity)) in lines.iter().enumerate() {
                let item = Item::with_quantity(
                    format!("item-{index}"),
                    Decimal::new(*price_cents, 2),
                    *quantity,
                );
                expected += item.calculate_item_total().unwrap();
                order.add_item(item);
            }

            prop_assert_eq!(order.item_count(), lines.len());
            for (index, item) in order.items().iter().enumerate() {
                prop_assert_eq!(item.label(), format!("item-{index}"));
            }
            prop_assert_eq!(order.calculate_subtotal().unwrap(), expected);
        }

        /// Reward points are the order total × 1.01.
        #[test]
        fn prop_reward_points_are_101_percent(
            price_cents in 0i64..=1_000_000,
            quantity in 0u32..=20,
        ) {
            let mut order = Order::new();
            order.add_item(Item::with_quantity("stuff", Decimal::new(price_cents, 2), quantity));

            let total = order.calculate_order_total().unwrap();
            prop_assert_eq!(
                order.get_reward_points().unwrap(),
                total.to_decimal() * Decimal::new(101, 2)
            );
        }
    }
}
