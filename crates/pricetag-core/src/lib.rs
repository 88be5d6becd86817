//! # pricetag-core: Price Tag Extraction for Pricetag
//!
//! This crate turns noisy OCR text from retail price tags into structured
//! records and computes statistics over a product's price history. Every
//! function is pure: no I/O, no shared mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricetag Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Vision model (external) ──► OCR text                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pricetag-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  detect   │  │  parser   │  │  history  │  │ validation│  │   │
//! │  │   │ currency  │─►│ Detections│  │ summarize │  │  ranges   │  │   │
//! │  │   │ price ... │  │ ParsedData│  │ min/avg.. │  │  barcode  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               pricetag-db (Database Layer)                      │   │
//! │  │          products, append-only price_points, snapshots          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`detect`] - The six detectors (currency, price, promo, discount, barcode, unit)
//! - [`parser`] - Result Composer: detectors → [`ParsedData`]
//! - [`history`] - Aggregates over a price-point snapshot
//! - [`types`] - Domain types (ParsedData, PricePoint, Currency)
//! - [`config`] - Parser configuration
//! - [`validation`] - Range and format checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pricetag_core::{parse_ocr_result, Currency};
//!
//! let data = parse_ocr_result("Молоко 2.5% 1л. Цена: 89.90 руб");
//!
//! assert_eq!(data.price, Some(89.90));
//! assert_eq!(data.currency, Currency::Rub);
//! assert_eq!(data.unit.as_deref(), Some("л"));
//! assert!(!data.is_promo);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod detect;
pub mod error;
pub mod history;
pub mod parser;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::ParserConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use history::{summarize, PriceSummary};
pub use parser::{parse_ocr_result, parse_ocr_result_with};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency reported when the text carries no currency marker.
pub const DEFAULT_CURRENCY: Currency = Currency::Rub;

/// Exclusive upper bound for a price candidate.
///
/// Anything at or above this is a barcode, phone number or other digit run
/// misread as a price.
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Smallest discount percentage treated as real.
pub const MIN_DISCOUNT_PERCENT: u8 = 1;

/// Largest discount percentage treated as real.
pub const MAX_DISCOUNT_PERCENT: u8 = 99;

/// Recognized barcode lengths, in search order (EAN-13, EAN-8, UPC-A).
pub const BARCODE_LENGTHS: [usize; 3] = [13, 8, 12];
