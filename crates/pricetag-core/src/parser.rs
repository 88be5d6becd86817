//! # Result Composer
//!
//! Runs every detector over one OCR transcription and resolves their
//! outputs into a single [`ParsedData`].
//!
//! ## Price Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  candidates (ascending)     isPromo     price     originalPrice         │
//! │  ──────────────────────     ───────     ─────     ─────────────         │
//! │  [199.99, 249.99]           true        199.99    249.99                │
//! │  [89.90, 120.00]            false       89.90     null                  │
//! │  [89.90]                    any         89.90     null                  │
//! │  []                         any         null      null                  │
//! │                                                                         │
//! │  pricePerUnit = min(candidates) when there are 2+, else null            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The promotional price is assumed to be the smallest number on the tag and
//! the pre-promotion price the largest. A tag that also prints a per-kilogram
//! price can break this assumption; the rule is kept as-is.
//!
//! In the promotional branch `pricePerUnit` equals `price`. Both fields are
//! reported independently.

use tracing::debug;

use crate::config::ParserConfig;
use crate::detect::barcode::extract_barcode;
use crate::detect::currency::detect_currency;
use crate::detect::discount::extract_discount;
use crate::detect::price::extract_price_candidates;
use crate::detect::promo::{detect_promotion, Promotion};
use crate::detect::unit::{extract_unit, Unit};
use crate::types::{Currency, ParsedData};

// =============================================================================
// Detections
// =============================================================================

/// Raw outputs of the six detectors for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Detections {
    pub currency: Currency,
    /// Distinct valid candidates, ascending.
    pub candidates: Vec<f64>,
    pub promotion: Promotion,
    pub discount_percent: Option<u8>,
    pub barcode: Option<String>,
    pub unit: Option<Unit>,
}

impl Detections {
    /// Runs all detectors against `text`.
    pub fn scan(text: &str, config: &ParserConfig) -> Self {
        Detections {
            currency: detect_currency(text, config.default_currency),
            candidates: extract_price_candidates(text, config.max_price),
            promotion: detect_promotion(text),
            discount_percent: extract_discount(text),
            barcode: extract_barcode(text),
            unit: extract_unit(text),
        }
    }

    /// Resolves the detections into a [`ParsedData`] for `raw_text`.
    pub fn compose(self, raw_text: &str) -> ParsedData {
        let Detections {
            currency,
            candidates,
            promotion,
            discount_percent,
            barcode,
            unit,
        } = self;

        let lowest = candidates.first().copied();
        let highest = candidates.last().copied();

        let (price, original_price) = if candidates.len() >= 2 && promotion.is_promo {
            (lowest, highest)
        } else {
            (lowest, None)
        };

        let price_per_unit = if candidates.len() > 1 { lowest } else { None };

        ParsedData {
            price,
            original_price,
            price_per_unit,
            unit: unit.map(|u| u.label().to_string()),
            barcode,
            is_promo: promotion.is_promo,
            promo_type: promotion.promo_type.map(str::to_string),
            discount_percent,
            ..ParsedData::empty(raw_text, currency)
        }
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Parses OCR text with the default configuration.
///
/// Total over any input: never fails, never panics.
///
/// ## Example
/// ```rust
/// use pricetag_core::parse_ocr_result;
///
/// let data = parse_ocr_result("АКЦИЯ! Было 249.99 руб, стало 199.99 руб, скидка -20%");
/// assert!(data.is_promo);
/// assert_eq!(data.price, Some(199.99));
/// assert_eq!(data.original_price, Some(249.99));
/// assert_eq!(data.discount_percent, Some(20));
/// ```
pub fn parse_ocr_result(text: &str) -> ParsedData {
    parse_ocr_result_with(text, &ParserConfig::default())
}

/// Parses OCR text with an explicit configuration.
pub fn parse_ocr_result_with(text: &str, config: &ParserConfig) -> ParsedData {
    let detections = Detections::scan(text, config);

    debug!(
        candidates = detections.candidates.len(),
        currency = %detections.currency,
        is_promo = detections.promotion.is_promo,
        has_barcode = detections.barcode.is_some(),
        "OCR text scanned"
    );

    detections.compose(text)
}

// =============================================================================
// Unit Tests
// =============================================================================
