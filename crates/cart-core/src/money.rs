//! # Money Module
//!
//! Provides the `Money` type for rounded monetary results.
//!
//! ## Exact Inputs, Integer Results
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: two representations                                      │
//! │    Inputs  (unit price, shipping, tax %)  → Decimal, exact              │
//! │    Results (item total, order total)      → Money, integer cents        │
//! │                                                                         │
//! │  Remote prices such as 12.34567 stay exact until the one rounding       │
//! │  step that turns them into cents.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let total = price + Money::from_cents(500);
//! assert_eq!(total.cents(), 1599);
//!
//! let line = Money::line_total(Decimal::new(1234, 2), 3).unwrap();
//! assert_eq!(line.cents(), 3702);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use crate::error::{overflow_of, CoreError, CoreResult};

/// Number of decimal places kept in every monetary result.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an exact amount to cents using Bankers Rounding.
///
/// ## Bankers Rounding Explained
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  BANKERS ROUNDING (Round Half to Even)                               │
/// │                                                                     │
/// │  Standard rounding always rounds 0.5 UP, causing systematic bias:   │
/// │    0.5 → 1, 1.5 → 2, 2.5 → 3, 3.5 → 4 (always up = +bias)           │
/// │                                                                     │
/// │  Bankers Rounding rounds 0.5 to nearest EVEN number:                │
/// │    0.5 → 0, 1.5 → 2, 2.5 → 2, 3.5 → 4 (alternates = no bias)        │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use cart_core::money::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(10875, 3)), Decimal::new(1088, 2)); // 10.875 → 10.88
/// assert_eq!(round_money(Decimal::new(10865, 3)), Decimal::new(1086, 2)); // 10.865 → 10.86
/// ```
#[inline]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a rounded monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative item price is representable, the pricing
///   function is where negatives get rejected
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// Item.unit_price (Decimal) ──► Item total (Money) ──┐
///                                                    ├──► Order subtotal (Money)
/// Remote price    (Decimal) ──► Item total (Money) ──┘            │
///                                                                 ▼
///                             shipping, discount, tax % ──► Order total (Money)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds an exact decimal amount to cents.
    ///
    /// Fails with [`CoreError::AmountOverflow`] when the rounded amount does
    /// not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let money = Money::from_decimal(Decimal::new(1234567, 5)).unwrap(); // 12.34567
    /// assert_eq!(money.cents(), 1235);
    /// ```
    pub fn from_decimal(amount: Decimal) -> CoreResult<Self> {
        round_money(amount)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or_else(|| CoreError::overflow(amount))
    }

    /// Computes `round(unit_price × quantity, 2)`.
    ///
    /// Multiplication happens on the exact price, rounding happens once.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let unit_price = Decimal::new(1234, 2); // 12.34
    /// assert_eq!(Money::line_total(unit_price, 3).unwrap().cents(), 3702);
    /// ```
    pub fn line_total(unit_price: Decimal, quantity: u32) -> CoreResult<Self> {
        let quantity = Decimal::from(quantity);
        let raw = unit_price
            .checked_mul(quantity)
            .ok_or_else(|| overflow_of(unit_price, "*", quantity))?;
        Money::from_decimal(raw)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as an exact decimal with two places.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_cents(8400).to_decimal(), Decimal::new(84, 0));
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, MONEY_DECIMAL_PLACES)
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two values, failing instead of wrapping.
    pub fn checked_add(self, other: Money) -> CoreResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| overflow_of(self.to_decimal(), "+", other.to_decimal()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-place rendering, for logs and debugging only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
