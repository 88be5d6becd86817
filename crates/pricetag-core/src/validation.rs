//! # Validation Module
//!
//! Range and format checks shared by the detectors and the persistence layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Run                                   │
//! │                                                                         │
//! │  Layer 1: Detectors (this crate)                                       │
//! │  ├── is_valid_price / is_plausible_discount as FILTERS                 │
//! │  └── Out-of-range values are silently dropped                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository (pricetag-db)                                     │
//! │  ├── validate_price_point as a HARD CHECK                              │
//! │  └── Rejects hand-built points that bypassed the parser                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::PricePoint;
use crate::{BARCODE_LENGTHS, MAX_DISCOUNT_PERCENT, MIN_DISCOUNT_PERCENT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Predicates (used as filters)
// =============================================================================

/// Returns true when `price` lies in the open interval `(0, max_price)`.
#[inline]
pub fn is_valid_price(price: f64, max_price: f64) -> bool {
    price > 0.0 && price < max_price
}

/// Returns true when `percent` lies in `MIN_DISCOUNT_PERCENT..=MAX_DISCOUNT_PERCENT`.
///
/// 0% and 100% markers are common OCR noise (and a 100% discount is not a
/// price), so both are rejected.
#[inline]
pub fn is_plausible_discount(percent: u32) -> bool {
    (MIN_DISCOUNT_PERCENT as u32..=MAX_DISCOUNT_PERCENT as u32).contains(&percent)
}

// =============================================================================
// Validators (used as hard checks)
// =============================================================================

/// Validates a price against the open interval `(0, max_price)`.
///
/// ## Example
/// ```rust
/// use pricetag_core::validation::validate_price;
///
/// assert!(validate_price(89.90, 1_000_000.0).is_ok());
/// assert!(validate_price(0.0, 1_000_000.0).is_err());
/// ```
pub fn validate_price(price: f64, max_price: f64) -> ValidationResult<()> {
    if !is_valid_price(price, max_price) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0.0,
            max: max_price,
        });
    }

    Ok(())
}

/// Validates a barcode by shape only.
///
/// ## Rules
/// - ASCII digits only
/// - Length 8 (EAN-8), 12 (UPC-A) or 13 (EAN-13)
/// - The check digit is NOT verified
pub fn validate_barcode(barcode: &str) -> ValidationResult<()> {
    if barcode.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if !barcode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    if !BARCODE_LENGTHS.contains(&barcode.len()) {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: format!("must be 8, 12 or 13 digits, got {}", barcode.len()),
        });
    }

    Ok(())
}

/// Validates a price point before it is appended to a history.
///
/// ## Rules
/// - `price` in `(0, max_price)`
/// - `original_price`, when present, in `(0, max_price)`
/// - `store`, when present, is not blank
pub fn validate_price_point(point: &PricePoint, max_price: f64) -> ValidationResult<()> {
    validate_price(point.price, max_price)?;

    if let Some(original) = point.original_price {
        if !is_valid_price(original, max_price) {
            return Err(ValidationError::OutOfRange {
                field: "original_price".to_string(),
                min: 0.0,
                max: max_price,
            });
        }
    }

    if let Some(store) = &point.store {
        if store.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "store".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
