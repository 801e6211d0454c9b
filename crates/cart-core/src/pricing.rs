//! # Pricing Function
//!
//! Turns an order subtotal plus shipping, discount and tax into the amount due.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_total(subtotal, shipping, discount, tax_percent)             │
//! │                                                                         │
//! │  1. Validate      every input ≥ 0 (first offender reported)             │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  2. Taxable       max(0, subtotal + shipping − discount)                │
//! │          │        a discount never turns into a refund                  │
//! │          ▼                                                              │
//! │  3. Tax           taxable × (1 + tax_percent)                           │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  4. Round         Bankers Rounding to 2 places → Money                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use cart_core::pricing::calculate_total;
//! use rust_decimal::Decimal;
//!
//! let total = calculate_total(
//!     Decimal::from(90),
//!     Decimal::from(10),
//!     Decimal::from(20),
//!     Decimal::new(5, 2), // 5%
//! )
//! .unwrap();
//! assert_eq!(total.cents(), 8400);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{overflow_of, CoreResult};
use crate::money::Money;
use crate::validation::validate_pricing_inputs;

/// Computes `max(0, subtotal + shipping − discount)`.
///
/// No validation happens here; callers go through [`calculate_total`].
pub fn taxable_amount(subtotal: Decimal, shipping: Decimal, discount: Decimal) -> CoreResult<Decimal> {
    let gross = subtotal
        .checked_add(shipping)
        .ok_or_else(|| overflow_of(subtotal, "+", shipping))?;
    let net = gross
        .checked_sub(discount)
        .ok_or_else(|| overflow_of(gross, "-", discount))?;
    Ok(net.max(Decimal::ZERO))
}

/// Computes the order total.
///
/// ## Errors
/// - [`CoreError::Validation`](crate::CoreError::Validation) when any input is
///   negative, naming the first one in the order `subtotal`, `shipping`,
///   `discount`, `tax_percent`
/// - [`CoreError::AmountOverflow`](crate::CoreError::AmountOverflow) when the
///   result does not fit in money
pub fn calculate_total(
    subtotal: Decimal,
    shipping: Decimal,
    discount: Decimal,
    tax_percent: Decimal,
) -> CoreResult<Money> {
    validate_pricing_inputs(subtotal, shipping, discount, tax_percent)?;

    let taxable = taxable_amount(subtotal, shipping, discount)?;
    let multiplier = Decimal::ONE
        .checked_add(tax_percent)
        .ok_or_else(|| overflow_of(Decimal::ONE, "+", tax_percent))?;
    let taxed = taxable
        .checked_mul(multiplier)
        .ok_or_else(|| overflow_of(taxable, "*", multiplier))?;
    let total = Money::from_decimal(taxed)?;

    debug!(
        %subtotal, %shipping, %discount, %tax_percent, %taxable, %total,
        "Calculated order total"
    );
    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculate_total_table() {
        let cases = [
            (dec!(90), dec!(10), dec!(20), dec!(0.05), 8400),
            (dec!(0), dec!(10), dec!(5), dec!(0.05), 525),
            (dec!(90), dec!(0), dec!(20), dec!(0.05), 7350),
            (dec!(90), dec!(10), dec!(0), dec!(0.05), 10500),
            (dec!(90), dec!(10), dec!(20), dec!(0), 8000),
            (dec!(10), dec!(5), dec!(5), dec!(0.0875), 1088),
            (dec!(10), dec!(5), dec!(5), dec!(0.0733), 1073),
            (dec!(10), dec!(10), dec!(20), dec!(0.05), 0),
            (dec!(10), dec!(5), dec!(20), dec!(0.05), 0),
        ];
        for (subtotal, shipping, discount, tax_percent, cents) in cases {
            let total = calculate_total(subtotal, shipping, discount, tax_percent).unwrap();
            assert_eq!(
                total.cents(),
                cents,
                "calculate_total({subtotal}, {shipping}, {discount}, {tax_percent})"
            );
        }
    }

    #[test]
    fn test_discount_equal_to_charges_is_zero() {
        let total = calculate_total(dec!(10), dec!(5), dec!(15), dec!(0.05)).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_discount_just_below_charges() {
        // 0.5 × 1.05 = 0.525 → 0.52 (half to even)
        let total = calculate_total(dec!(10), dec!(5), dec!(14.5), dec!(0.05)).unwrap();
        assert_eq!(total.cents(), 52);
    }

    #[test]
    fn test_calculate_total_negatives() {
        let cases = [
            (dec!(-90), dec!(10), dec!(20), dec!(0.05), "subtotal"),
            (dec!(90), dec!(-10), dec!(20), dec!(0.05), "shipping"),
            (dec!(90), dec!(10), dec!(-20), dec!(0.05), "discount"),
            (dec!(90), dec!(10), dec!(20), dec!(-0.05), "tax_percent"),
        ];
        for (subtotal, shipping, discount, tax_percent, field) in cases {
            let err = calculate_total(subtotal, shipping, discount, tax_percent).unwrap_err();
            let validation = err.as_validation().expect("validation error");
            assert_eq!(validation.to_string(), format!("{field} cannot be negative"));
        }
    }

    #[test]
    fn test_taxable_amount_floors_at_zero() {
        assert_eq!(taxable_amount(dec!(10), dec!(5), dec!(20)).unwrap(), dec!(0));
        assert_eq!(taxable_amount(dec!(90), dec!(10), dec!(20)).unwrap(), dec!(80));
    }

    #[test]
    fn test_calculate_total_overflow() {
        let err = calculate_total(Decimal::MAX, Decimal::MAX, dec!(0), dec!(0)).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
    }
}
