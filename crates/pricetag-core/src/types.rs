//! # Domain Types
//!
//! Core domain types used throughout Pricetag.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ParsedData    │   │   PricePoint    │   │    Currency     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  price          │──►│  price          │   │  RUB  ₽         │       │
//! │  │  originalPrice  │   │  originalPrice  │   │  USD  $         │       │
//! │  │  currency       │   │  currency       │   │  EUR  €         │       │
//! │  │  isPromo ...    │   │  scannedAt      │   │  KZT UAH BYN    │       │
//! │  │  rawText        │   │  store          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │    one OCR scan          one history entry                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Shape
//! Every API-facing struct serializes with camelCase keys. Optional values
//! are written as `null`, never omitted, so clients can rely on a fixed set
//! of keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Currency
// =============================================================================

/// Currencies recognized on price tags.
///
/// Serialized as the ISO 4217 code (`"RUB"`, `"USD"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Russian ruble.
    Rub,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Kazakhstani tenge.
    Kzt,
    /// Ukrainian hryvnia.
    Uah,
    /// Belarusian ruble.
    Byn,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 6] = [
        Currency::Rub,
        Currency::Usd,
        Currency::Eur,
        Currency::Kzt,
        Currency::Uah,
        Currency::Byn,
    ];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Kzt => "KZT",
            Currency::Uah => "UAH",
            Currency::Byn => "BYN",
        }
    }

    /// Display symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Rub => "₽",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Kzt => "₸",
            Currency::Uah => "₴",
            Currency::Byn => "Br",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        crate::DEFAULT_CURRENCY
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses an ISO code, case-insensitively (`"rub"`, `"RUB"`).
impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::UnknownCurrency(code.to_string()))
    }
}

// =============================================================================
// Parsed Data
// =============================================================================

/// Structured result of interpreting one OCR transcription.
///
/// ## Invariants
/// - `price` is `None` iff no candidate price was found in range
/// - `original_price` is `Some` only when `is_promo` and 2+ candidates existed
/// - `discount_percent`, if present, is in `1..=99`
/// - `barcode`, if present, is 8, 12 or 13 digits (no checksum check)
/// - `raw_text` is the input, verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ParsedData {
    /// Current (shelf) price.
    pub price: Option<f64>,

    /// Pre-promotion price, inferred from the largest candidate.
    pub original_price: Option<f64>,

    /// Smallest candidate when several were found.
    pub price_per_unit: Option<f64>,

    /// Detected or default currency.
    pub currency: Currency,

    /// Symbol matching `currency`.
    pub currency_symbol: String,

    /// Unit of measure label (`"кг"`, `"шт"`, `"л"`, ...).
    pub unit: Option<String>,

    /// EAN-13 / EAN-8 / UPC-A digit run.
    pub barcode: Option<String>,

    /// Whether any promotion marker was found.
    pub is_promo: bool,

    /// Label of the first promotion rule that matched.
    pub promo_type: Option<String>,

    /// Largest plausible percentage on the tag.
    pub discount_percent: Option<u8>,

    /// The OCR text this record was built from.
    pub raw_text: String,
}

impl ParsedData {
    /// A record with nothing detected: every optional field `None` and the
    /// given fallback currency.
    pub fn empty(raw_text: impl Into<String>, currency: Currency) -> Self {
        ParsedData {
            price: None,
            original_price: None,
            price_per_unit: None,
            currency,
            currency_symbol: currency.symbol().to_string(),
            unit: None,
            barcode: None,
            is_promo: false,
            promo_type: None,
            discount_percent: None,
            raw_text: raw_text.into(),
        }
    }
}

// =============================================================================
// Price Point
// =============================================================================

/// One observation in a product's price history.
///
/// Price points are append-only: once stored they are never modified or
/// reordered. The history of a product is the insertion-ordered sequence of
/// its points, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub price: f64,
    pub original_price: Option<f64>,
    pub currency: Currency,
    pub is_promo: bool,
    #[ts(as = "String")]
    pub scanned_at: DateTime<Utc>,
    pub store: Option<String>,
}

impl PricePoint {
    /// Builds a price point from a parse result.
    ///
    /// Returns `None` when the scan produced no price; such scans have
    /// nothing to add to a history.
    pub fn from_parsed(
        parsed: &ParsedData,
        scanned_at: DateTime<Utc>,
        store: Option<String>,
    ) -> Option<Self> {
        let price = parsed.price?;

        Some(PricePoint {
            price,
            original_price: parsed.original_price,
            currency: parsed.currency,
            is_promo: parsed.is_promo,
            scanned_at,
            store,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_and_symbol() {
        assert_eq!(Currency::Rub.code(), "RUB");
        assert_eq!(Currency::Rub.symbol(), "₽");
        assert_eq!(Currency::Kzt.symbol(), "₸");
        assert_eq!(Currency::Byn.to_string(), "BYN");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
        assert!(matches!(
            "GBP".parse::<Currency>(),
            Err(CoreError::UnknownCurrency(code)) if code == "GBP"
        ));
    }

    #[test]
    fn test_currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Uah).unwrap(), "\"UAH\"");
        let parsed: Currency = serde_json::from_str("\"KZT\"").unwrap();
        assert_eq!(parsed, Currency::Kzt);
    }

    #[test]
    fn test_parsed_data_json_keeps_null_keys() {
        let data = ParsedData::empty("", Currency::Rub);
        let json = serde_json::to_value(&data).unwrap();
        let obj = json.as_object().unwrap();

        let keys = [
            "price",
            "originalPrice",
            "pricePerUnit",
            "currency",
            "currencySymbol",
            "unit",
            "barcode",
            "isPromo",
            "promoType",
            "discountPercent",
            "rawText",
        ];
        assert_eq!(obj.len(), keys.len());
        for key in keys {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert!(obj["price"].is_null());
        assert_eq!(obj["currency"], "RUB");
        assert_eq!(obj["currencySymbol"], "₽");
        assert_eq!(obj["isPromo"], false);
    }

    #[test]
    fn test_price_point_from_parsed() {
        let mut data = ParsedData::empty("АКЦИЯ 199.99 249.99", Currency::Rub);
        data.price = Some(199.99);
        data.original_price = Some(249.99);
        data.is_promo = true;

        let now = Utc::now();
        let point = PricePoint::from_parsed(&data, now, Some("Магнит".to_string())).unwrap();
        assert_eq!(point.price, 199.99);
        assert_eq!(point.original_price, Some(249.99));
        assert!(point.is_promo);
        assert_eq!(point.scanned_at, now);
        assert_eq!(point.store.as_deref(), Some("Магнит"));
    }

    #[test]
    fn test_price_point_requires_price() {
        let data = ParsedData::empty("Хлеб белый", Currency::Rub);
        assert!(PricePoint::from_parsed(&data, Utc::now(), None).is_none());
    }
}
