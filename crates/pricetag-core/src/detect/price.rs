//! # Price Candidate Extractor
//!
//! Finds every number on the tag that could be a price.
//!
//! ## Scans
//! ```text
//! ┌─────┬────────────────────────────────────┬──────────────────────────┐
//! │ (a) │ decimal, two fraction digits       │ 89.90   199,99 руб       │
//! │ (b) │ integer followed by currency token │ 120 руб   45₽            │
//! │ (c) │ "цена:" label                      │ Цена: 89.9               │
//! │ (d) │ "стоимость:" label                 │ Стоимость: 1200          │
//! └─────┴────────────────────────────────────┴──────────────────────────┘
//!         │
//!         ▼
//!   parse (',' → '.') → keep (0, max_price) → sort ascending → dedup
//! ```
//!
//! Scan (b) never picks up the fraction digits of a decimal (the `90` in
//! `89.90 руб`): a number followed by a currency token only counts when it
//! has no decimal separator. The currency tokens are the same markers the
//! currency detector uses.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::currency::currency_token;
use crate::validation::is_valid_price;

/// (a) Decimal with exactly two fraction digits, optional currency token.
static DECIMAL_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)(\d+[.,]\d{{2}})(?:\s*{})?", currency_token()))
        .expect("Invalid decimal price regex")
});

/// (b) Number followed by a currency token. Group 2 is set for decimals,
/// which this scan rejects.
static INTEGER_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)(\d+)([.,]\d+)?\s*{}", currency_token()))
        .expect("Invalid integer price regex")
});

/// (c) "цена:" label.
static PRICE_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)цена\s*:\s*(\d+(?:[.,]\d+)?)").expect("Invalid price label regex")
});

/// (d) "стоимость:" label.
static COST_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)стоимость\s*:\s*(\d+(?:[.,]\d+)?)").expect("Invalid cost label regex")
});

/// Parses a matched number, treating `,` as the decimal separator.
fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok()
}

/// Returns the distinct candidate prices in `text`, ascending.
///
/// Only values in the open interval `(0, max_price)` are kept.
///
/// ## Example
/// ```rust
/// use pricetag_core::detect::price::extract_price_candidates;
///
/// let prices = extract_price_candidates("Было 249.99 руб, стало 199.99 руб", 1_000_000.0);
/// assert_eq!(prices, vec![199.99, 249.99]);
/// ```
pub fn extract_price_candidates(text: &str, max_price: f64) -> Vec<f64> {
    let integers = INTEGER_PRICE_RE
        .captures_iter(text)
        .filter(|caps| caps.get(2).is_none())
        .filter_map(|caps| caps.get(1));

    let labelled = [&*DECIMAL_PRICE_RE, &*PRICE_LABEL_RE, &*COST_LABEL_RE]
        .into_iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1));

    let mut candidates: Vec<f64> = labelled
        .chain(integers)
        .filter_map(|m| parse_number(m.as_str()))
        .filter(|value| is_valid_price(*value, max_price))
        .collect();

    candidates.sort_by(f64::total_cmp);
    candidates.dedup();

    trace!(count = candidates.len(), ?candidates, "Price candidates extracted");
    candidates
}
