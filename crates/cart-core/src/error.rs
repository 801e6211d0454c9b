//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                           │
//! │  ├── CoreError        - Pricing and aggregation failures                │
//! │  └── ValidationError  - Rejected pricing inputs                         │
//! │                                                                         │
//! │  cart-pricing errors (separate crate)                                   │
//! │  └── PricingError     - Remote lookup failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError                                      │
//! │        PricingError ──(boxed source)──► CoreError::LineItem             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (parameter name, item label)
//! 3. Errors raised by a line item are kept as the `source`, never re-worded

use rust_decimal::Decimal;
use thiserror::Error;

/// Boxed error raised by a line item implementation outside this crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A pricing input was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An amount does not fit in the money representation.
    ///
    /// ## When This Occurs
    /// - Decimal multiplication overflowed (`unit_price × quantity`)
    /// - The rounded amount exceeds `i64::MAX` cents
    #[error("Amount {amount} is out of range for a money value")]
    AmountOverflow { amount: String },

    /// A line item could not produce its total.
    ///
    /// ## When This Occurs
    /// - A remotely priced item failed its lookup
    /// - The lookup returned no usable price
    ///
    /// The item's own error is kept as `source` so callers can downcast it.
    #[error("Could not price line item '{label}'")]
    LineItem {
        label: String,
        #[source]
        source: BoxError,
    },
}

impl CoreError {
    /// Builds an overflow error for the given amount.
    pub(crate) fn overflow(amount: impl std::fmt::Display) -> Self {
        CoreError::AmountOverflow {
            amount: amount.to_string(),
        }
    }

    /// Wraps an error raised by a line item.
    pub fn line_item<E>(label: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CoreError::LineItem {
            label: label.into(),
            source: Box::new(source),
        }
    }

    /// Returns the validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CoreError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the pricing function before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },
}

impl ValidationError {
    /// Name of the rejected parameter.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Negative { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Keeps `Decimal` overflow messages uniform.
pub(crate) fn overflow_of(lhs: Decimal, op: &str, rhs: Decimal) -> CoreError {
    CoreError::overflow(format!("{lhs} {op} {rhs}"))
}

// =============================================================================
// Unit Tests
// =============================================================================
