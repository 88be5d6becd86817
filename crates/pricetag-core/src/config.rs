//! # Parser Configuration
//!
//! Values the extraction pipeline falls back on when the text does not say
//! otherwise.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Defaults (crate constants)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ParserConfig::default() ──► builder overrides ──► validate()           │
//! │                                   ▲                                     │
//! │                                   │                                     │
//! │  CLI: PRICETAG_DEFAULT_CURRENCY / PRICETAG_MAX_PRICE                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The config is immutable once built and cheap to copy, so it can be shared
//! by concurrent parses without locking.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Currency;
use crate::{DEFAULT_CURRENCY, MAX_PRICE};

/// Configuration for [`crate::parser::parse_ocr_result_with`].
///
/// ## Example
/// ```rust
/// use pricetag_core::{Currency, ParserConfig};
///
/// let config = ParserConfig::default()
///     .default_currency(Currency::Kzt)
///     .max_price(50_000.0);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// Currency reported when no currency marker is present.
    /// Default: RUB
    pub default_currency: Currency,

    /// Exclusive upper bound for a price candidate.
    /// Default: 1 000 000
    pub max_price: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            default_currency: DEFAULT_CURRENCY,
            max_price: MAX_PRICE,
        }
    }
}

impl ParserConfig {
    /// Sets the fallback currency.
    pub fn default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Sets the exclusive upper price bound.
    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = max;
        self
    }

    /// Checks that the configuration can be used for parsing.
    ///
    /// ## Rules
    /// - `max_price` must be a finite positive number
    pub fn validate(&self) -> CoreResult<()> {
        if !self.max_price.is_finite() || self.max_price <= 0.0 {
            return Err(CoreError::InvalidConfig {
                field: "max_price".to_string(),
                reason: format!("must be a positive number, got {}", self.max_price),
            });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.default_currency, Currency::Rub);
        assert_eq!(config.max_price, 1_000_000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::default()
            .default_currency(Currency::Eur)
            .max_price(999.0);

        assert_eq!(config.default_currency, Currency::Eur);
        assert_eq!(config.max_price, 999.0);
    }

    #[test]
    fn test_validate_rejects_bad_ceiling() {
        assert!(ParserConfig::default().max_price(0.0).validate().is_err());
        assert!(ParserConfig::default().max_price(-5.0).validate().is_err());
        assert!(ParserConfig::default().max_price(f64::NAN).validate().is_err());
        assert!(ParserConfig::default()
            .max_price(f64::INFINITY)
            .validate()
            .is_err());
    }
}
