//! # Validation Module
//!
//! Input coercion and validation for the invoice form.
//!
//! ## Two Kinds of Input Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Handling                                     │
//! │                                                                         │
//! │  Coercion (on every keystroke)                                         │
//! │  ├── quantity / price / tax rate fields                                │
//! │  ├── garbage becomes 0, negatives become 0                             │
//! │  └── NEVER fails, never shows an error                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Validation (once, on submit)                                          │
//! │  ├── buyer name present                                                │
//! │  └── tax rates within 0..=100                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion Rules
//! Numbers are read from the longest numeric prefix, the way a browser
//! number field hands them over:
//!
//! | input      | quantity | price  |
//! |------------|----------|--------|
//! | `"12"`     | 12       | 12     |
//! | `"12abc"`  | 12       | 12     |
//! | `"3.7"`    | 3        | 3.7    |
//! | `" 2e2"`   | 2        | 200    |
//! | `"-4"`     | 0        | 0      |
//! | `"abc"`    | 0        | 0      |
//! | `""`       | 0        | 0      |
//!
//! ## Usage
//! ```rust
//! use gst_core::validation::{coerce_price, coerce_quantity};
//! use gst_core::Money;
//!
//! assert_eq!(coerce_quantity("12abc"), 12);
//! assert_eq!(coerce_price("33.33xyz"), Money::from_paise(3333));
//! assert!(coerce_price("abc").is_zero());
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::items::LineItems;
use crate::money::Money;
use crate::types::{InvoiceForm, TaxRate};
use crate::{MAX_TAX_RATE_PERCENT, MAX_UNIT_PRICE_RUPEES};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Prefix Scanning
// =============================================================================

/// Returns the integer prefix (`[+-]?digits`) after leading whitespace.
fn integer_prefix(input: &str) -> &str {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return "";
    }
    &s[..end]
}

/// Returns the decimal prefix (`[+-]?digits[.digits][e[+-]digits]`) after
/// leading whitespace. The exponent is only taken when digits follow it.
fn decimal_prefix(input: &str) -> &str {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

/// Parses the decimal prefix of `input`; `None` if there is none.
///
/// Magnitudes beyond `Decimal`'s range saturate to `Decimal::MAX` (or
/// `MIN`), and vanishing exponents collapse to zero.
fn parse_decimal_prefix(input: &str) -> Option<Decimal> {
    let prefix = decimal_prefix(input);
    if prefix.is_empty() {
        return None;
    }

    let (negative, unsigned) = match prefix.as_bytes()[0] {
        b'-' => (true, &prefix[1..]),
        b'+' => (false, &prefix[1..]),
        _ => (false, prefix),
    };
    let lower = unsigned.to_ascii_lowercase();
    let (mantissa, exponent) = match lower.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (lower.as_str(), None),
    };

    // ".5" and "5." are valid browser input but not valid Decimal syntax
    let mut mantissa = mantissa.trim_end_matches('.').to_string();
    if mantissa.starts_with('.') {
        mantissa.insert(0, '0');
    }
    if mantissa.is_empty() {
        mantissa.push('0');
    }
    if negative {
        mantissa.insert(0, '-');
    }

    let saturated = if negative { Decimal::MIN } else { Decimal::MAX };
    let mantissa_is_zero = mantissa.trim_start_matches('-').chars().all(|c| c == '0' || c == '.');

    match exponent {
        None => Some(Decimal::from_str(&mantissa).unwrap_or(saturated)),
        Some(exp) => {
            let text = format!("{}e{}", mantissa, exp);
            match Decimal::from_scientific(&text) {
                Ok(value) => Some(value),
                Err(_) if mantissa_is_zero || exp.starts_with('-') => Some(Decimal::ZERO),
                Err(_) => Some(saturated),
            }
        }
    }
}

// =============================================================================
// Coercion
// =============================================================================

/// Coerces raw quantity input to a non-negative integer.
///
/// Values beyond `u32::MAX` saturate. Even then `quantity × price` stays
/// far inside `Decimal`'s range, given the unit price cap.
pub fn coerce_quantity(input: &str) -> u32 {
    let prefix = integer_prefix(input);
    if prefix.is_empty() || prefix.starts_with('-') {
        return 0;
    }
    let digits = prefix.trim_start_matches('+');
    match digits.parse::<u32>() {
        Ok(n) => n,
        // Only overflow can fail here: the prefix is all digits
        Err(_) => u32::MAX,
    }
}

/// Coerces raw price input to a non-negative amount.
///
/// Values above `MAX_UNIT_PRICE_RUPEES` are clamped to it.
pub fn coerce_price(input: &str) -> Money {
    let max = Decimal::from(MAX_UNIT_PRICE_RUPEES);
    match parse_decimal_prefix(input) {
        Some(value) if value > Decimal::ZERO => Money::from_decimal(value.min(max)),
        _ => Money::zero(),
    }
}

/// Coerces raw tax rate input to a percentage in `0..=100`.
pub fn coerce_rate(input: &str) -> TaxRate {
    // Product decision, not a GST rule: a component above 100% is clamped
    // to 100% while typing instead of failing at submit.
    let max = Decimal::from(MAX_TAX_RATE_PERCENT);
    match parse_decimal_prefix(input) {
        Some(value) if value > Decimal::ZERO => TaxRate::from_percentage(value.min(max)),
        _ => TaxRate::zero(),
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Validates the buyer name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use gst_core::validation::validate_buyer_name;
///
/// assert!(validate_buyer_name("Acme Traders").is_ok());
/// assert!(validate_buyer_name("   ").is_err());
/// ```
pub fn validate_buyer_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "buyerName".to_string(),
        });
    }
    Ok(())
}

/// Validates a tax component rate.
///
/// ## Rules
/// - Must be between 0 and 100 percent
pub fn validate_tax_rate(field: &str, rate: TaxRate) -> ValidationResult<()> {
    let pct = rate.percentage();
    if pct < Decimal::ZERO || pct > Decimal::from(MAX_TAX_RATE_PERCENT) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(MAX_TAX_RATE_PERCENT),
        });
    }
    Ok(())
}

/// Validates that no line has a negative price.
///
/// Coerced input can never produce one; this guards lists built by hand or
/// read from a draft file.
pub fn validate_line_items(items: &LineItems) -> ValidationResult<()> {
    for item in items {
        if item.price.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: format!("items[{}].price", item.id),
                min: 0,
                max: MAX_UNIT_PRICE_RUPEES,
            });
        }
    }
    Ok(())
}

/// Everything that must hold before the form can be submitted.
pub fn validate_form(form: &InvoiceForm, items: &LineItems) -> ValidationResult<()> {
    validate_buyer_name(&form.buyer_name)?;
    validate_tax_rate("cgstRate", form.cgst_rate)?;
    validate_tax_rate("sgstRate", form.sgst_rate)?;
    validate_line_items(items)?;
    Ok(())
}

/// Parses an ISO calendar date (`YYYY-MM-DD`), as produced by a date input.
pub fn parse_invoice_date(input: &str) -> ValidationResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        ValidationError::InvalidFormat {
            field: "invoiceDate".to_string(),
            reason: e.to_string(),
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
