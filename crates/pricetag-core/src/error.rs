//! # Error Types
//!
//! Domain-specific error types for pricetag-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricetag-core errors (this file)                                      │
//! │  ├── CoreError        - Configuration and domain errors                │
//! │  └── ValidationError  - Value checks before persisting                 │
//! │                                                                         │
//! │  pricetag-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → CLI (anyhow)                        │
//! │        CoreError → CLI ConfigError                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! Parsing OCR text never produces an error. Values outside their allowed
//! range are dropped by the detectors. These errors only surface when a
//! caller builds configuration or explicitly validates a record.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Currency code is not one of the recognized codes.
    ///
    /// ## When This Occurs
    /// - `PRICETAG_DEFAULT_CURRENCY=GBP` (not supported)
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A configuration value is not usable.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Value validation errors.
///
/// Used by the persistence layer before a price point is written.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is outside the open interval (min, max).
    #[error("{field} must be greater than {min} and less than {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g., barcode with letters or wrong length).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
