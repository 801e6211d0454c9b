//! # Validation Module
//!
//! Input checks for the pricing function.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Input Checks                               │
//! │                                                                         │
//! │  calculate_total(subtotal, shipping, discount, tax_percent)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  validate_pricing_inputs ← THIS MODULE                                  │
//! │  ├── subtotal    < 0 → "subtotal cannot be negative"                    │
//! │  ├── shipping    < 0 → "shipping cannot be negative"                    │
//! │  ├── discount    < 0 → "discount cannot be negative"                    │
//! │  └── tax_percent < 0 → "tax_percent cannot be negative"                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Arithmetic runs only on fully validated input                          │
//! │                                                                         │
//! │  Checks run in the order above; the FIRST offender is reported.         │
//! │  Negative values are rejected, never clamped.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::validate_non_negative;
//! use rust_decimal::Decimal;
//!
//! assert!(validate_non_negative("shipping", Decimal::ZERO).is_ok());
//! assert!(validate_non_negative("shipping", Decimal::NEGATIVE_ONE).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parameter names as they appear in validation messages.
pub mod fields {
    pub const SUBTOTAL: &str = "subtotal";
    pub const SHIPPING: &str = "shipping";
    pub const DISCOUNT: &str = "discount";
    pub const TAX_PERCENT: &str = "tax_percent";
}

/// Validates that a value is zero or greater.
///
/// Zero is allowed (free shipping, no discount, tax-exempt).
pub fn validate_non_negative(field: &str, value: Decimal) -> ValidationResult<()> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates all four pricing inputs in their fixed order.
pub fn validate_pricing_inputs(
    subtotal: Decimal,
    shipping: Decimal,
    discount: Decimal,
    tax_percent: Decimal,
) -> ValidationResult<()> {
    validate_non_negative(fields::SUBTOTAL, subtotal)?;
    validate_non_negative(fields::SHIPPING, shipping)?;
    validate_non_negative(fields::DISCOUNT, discount)?;
    validate_non_negative(fields::TAX_PERCENT, tax_percent)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("x", dec!(0)).is_ok());
        assert!(validate_non_negative("x", dec!(0.01)).is_ok());

        let err = validate_non_negative("x", dec!(-0.01)).unwrap_err();
        assert_eq!(err.to_string(), "x cannot be negative");
    }

    #[test]
    fn test_validate_pricing_inputs_reports_each_field() {
        let cases = [
            (dec!(-90), dec!(10), dec!(20), dec!(0.05), "subtotal"),
            (dec!(90), dec!(-10), dec!(20), dec!(0.05), "shipping"),
            (dec!(90), dec!(10), dec!(-20), dec!(0.05), "discount"),
            (dec!(90), dec!(10), dec!(20), dec!(-0.05), "tax_percent"),
        ];
        for (subtotal, shipping, discount, tax_percent, field) in cases {
            let err = validate_pricing_inputs(subtotal, shipping, discount, tax_percent)
                .unwrap_err();
            assert_eq!(err.to_string(), format!("{field} cannot be negative"));
        }
    }

    #[test]
    fn test_validate_pricing_inputs_reports_first_offender() {
        let err = validate_pricing_inputs(dec!(1), dec!(-1), dec!(-1), dec!(-1)).unwrap_err();
        assert_eq!(err.field(), fields::SHIPPING);

        let err = validate_pricing_inputs(dec!(-1), dec!(-1), dec!(-1), dec!(-1)).unwrap_err();
        assert_eq!(err.field(), fields::SUBTOTAL);
    }
}
