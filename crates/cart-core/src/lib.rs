//! # cart-core: Pure Pricing Logic
//!
//! This crate is the **heart** of the shopping cart. It contains all pricing
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Pricing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  pricing  │  │   item    │  │   order   │  │   │
//! │  │   │   Money   │  │ calculate │  │ LineItem  │  │   Order   │  │   │
//! │  │   │  rounding │  │  _total   │  │   Item    │  │  Summary  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────▲───────────────────────────────────┘   │
//! │                                │ impl LineItem                          │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              cart-pricing (Remote Price Lookup)                  │   │
//! │  │         DynamicallyPricedItem, HTTP price source, config         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type (integer cents) and rounding
//! - [`pricing`] - The order pricing function
//! - [`item`] - Line item contract and fixed-price items
//! - [`order`] - Order aggregate and reward points
//! - [`validation`] - Pricing input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Item, Order};
//! use rust_decimal::Decimal;
//!
//! let mut order = Order::with_charges(
//!     Decimal::from(10),   // shipping
//!     Decimal::from(20),   // discount
//!     Decimal::new(5, 2),  // 5% tax
//! );
//! order.add_item(Item::with_quantity("stuff", Decimal::from(30), 3));
//!
//! // (90 + 10 - 20) × 1.05 = 84.00
//! assert_eq!(order.calculate_order_total().unwrap().cents(), 8400);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod money;
pub mod order;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{BoxError, CoreError, CoreResult, ValidationError};
pub use item::{Item, LineItem, DEFAULT_QUANTITY};
pub use money::Money;
pub use order::{Order, OrderSummary};
pub use pricing::calculate_total;
