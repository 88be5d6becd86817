//! # Barcode Extractor
//!
//! Recognizes a barcode purely by the length of a digit run.
//!
//! ## Search Order
//! ```text
//! 1. EAN-13  13 digits   4607025392244
//! 2. EAN-8    8 digits   46070253
//! 3. UPC-A   12 digits   036000291452
//! ```
//! Each format is searched across the whole text before the next one is
//! tried, so a 13-digit run anywhere wins over an 8-digit run that appears
//! earlier. A run must be bounded by non-digits on both sides.
//!
//! ## Limitation
//! The check digit is not verified. An 8-digit run that is really a date
//! (`20240115`) is reported as EAN-8.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Barcode numbering formats, recognized by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BarcodeFormat {
    Ean13,
    Ean8,
    UpcA,
}

impl BarcodeFormat {
    /// Formats in search order.
    pub const SEARCH_ORDER: [BarcodeFormat; 3] =
        [BarcodeFormat::Ean13, BarcodeFormat::Ean8, BarcodeFormat::UpcA];

    /// Number of digits in this format.
    pub const fn digits(&self) -> usize {
        match self {
            BarcodeFormat::Ean13 => 13,
            BarcodeFormat::Ean8 => 8,
            BarcodeFormat::UpcA => 12,
        }
    }
}

/// One compiled pattern per format, in `SEARCH_ORDER`.
static BARCODE_PATTERNS: Lazy<Vec<(BarcodeFormat, Regex)>> = Lazy::new(|| {
    BarcodeFormat::SEARCH_ORDER
        .into_iter()
        .map(|format| {
            let pattern = format!(r"(?:^|[^0-9])([0-9]{{{}}})(?:[^0-9]|$)", format.digits());
            let re = Regex::new(&pattern).expect("Invalid barcode regex");
            (format, re)
        })
        .collect()
});

/// Finds the first barcode in `text`, together with its format.
pub fn detect_barcode(text: &str) -> Option<(BarcodeFormat, &str)> {
    BARCODE_PATTERNS.iter().find_map(|(format, re)| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| (*format, m.as_str()))
    })
}

/// Finds the first barcode in `text`.
///
/// ## Example
/// ```rust
/// use pricetag_core::detect::barcode::extract_barcode;
///
/// assert_eq!(
///     extract_barcode("4607025392244 Хлеб белый").as_deref(),
///     Some("4607025392244")
/// );
/// ```
pub fn extract_barcode(text: &str) -> Option<String> {
    detect_barcode(text).map(|(_, digits)| digits.to_string())
}
