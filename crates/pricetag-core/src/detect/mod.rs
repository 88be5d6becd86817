//! # Detectors
//!
//! Six independent classifiers, each a pure function of the OCR text.
//!
//! ## Pipeline Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         OCR text (&str)                                 │
//! │                               │                                         │
//! │     ┌──────────┬──────────┬───┴──────┬──────────┬──────────┐            │
//! │     ▼          ▼          ▼          ▼          ▼          ▼            │
//! │  currency    price      promo    discount   barcode      unit           │
//! │  (first     (all       (first    (max of    (13→8→12   (first          │
//! │   match)    matches)    match)    1..=99)    digits)    match)          │
//! │     │          │          │          │          │          │            │
//! │     └──────────┴──────────┴────┬─────┴──────────┴──────────┘            │
//! │                                ▼                                        │
//! │                     parser::Detections::compose                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## First-Match Rule Lists
//! Currency, promotion and unit detection share one contract: an ordered
//! slice of [`Rule`]s evaluated front to back, returning the value of the
//! first rule whose pattern matches. The slice order IS the priority; it is
//! never derived from a map.
//!
//! All patterns are compiled once into `Lazy` statics and are read-only
//! afterwards, so detectors can run concurrently without coordination.

pub mod barcode;
pub mod currency;
pub mod discount;
pub mod price;
pub mod promo;
pub mod unit;

use regex::Regex;

/// A (pattern, value) pair in a first-match rule list.
#[derive(Debug)]
pub struct Rule<T> {
    pattern: Regex,
    value: T,
}

impl<T> Rule<T> {
    /// Compiles `pattern` into a rule yielding `value`.
    ///
    /// Patterns are string constants in this crate and are exercised by
    /// the unit tests, so a failure here is a programming error.
    pub(crate) fn new(pattern: &str, value: T) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("rule pattern must compile"),
            value,
        }
    }

    /// The value produced when this rule matches.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether this rule matches anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Returns the value of the first rule in `rules` that matches `text`.
pub fn first_match<'a, T>(rules: &'a [Rule<T>], text: &str) -> Option<&'a T> {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(Rule::value)
}

// =============================================================================
// Unit Tests
// =============================================================================
