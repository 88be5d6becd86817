//! # Unit Extractor
//!
//! Classifies the unit of measure a tag refers to ("за кг", "/шт", "1л").
//!
//! First-match rule list, in this order: kilogram, piece, liter, gram,
//! milliliter, pack. Kilogram is checked before gram so "килограмм" is never
//! read as grams.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{first_match, Rule};

/// Units of measure recognized on tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kilogram,
    Piece,
    Liter,
    Gram,
    Milliliter,
    Pack,
}

impl Unit {
    /// Short label as printed on Russian price tags.
    pub const fn label(&self) -> &'static str {
        match self {
            Unit::Kilogram => "кг",
            Unit::Piece => "шт",
            Unit::Liter => "л",
            Unit::Gram => "г",
            Unit::Milliliter => "мл",
            Unit::Pack => "уп",
        }
    }
}

/// Ordered unit rules.
pub static UNIT_RULES: Lazy<Vec<Rule<Unit>>> = Lazy::new(|| {
    vec![
        Rule::new(
            r"(?i)за\s*кг|/\s*кг|\d\s*кг\b|\bкг\b|килограм|\bkg\b",
            Unit::Kilogram,
        ),
        Rule::new(
            r"(?i)за\s*шт|/\s*шт|\d\s*шт\b|\bшт\b|штук|\bpcs\b",
            Unit::Piece,
        ),
        Rule::new(r"(?i)за\s*л\b|/\s*л\b|\d\s*л\b|\bл\b|\bлитр", Unit::Liter),
        Rule::new(r"(?i)за\s*г\b|/\s*г\b|\d\s*гр?\b|\bгр\b|\bграмм", Unit::Gram),
        Rule::new(r"(?i)\d\s*мл\b|\bмл\b|миллилитр", Unit::Milliliter),
        Rule::new(r"(?i)\bупак|\bуп\b|\bпачк", Unit::Pack),
    ]
});

/// Detects the unit referenced by `text`.
///
/// ## Example
/// ```rust
/// use pricetag_core::detect::unit::{extract_unit, Unit};
///
/// assert_eq!(extract_unit("Яблоки 129.90 за кг"), Some(Unit::Kilogram));
/// assert_eq!(extract_unit("Хлеб белый"), None);
/// ```
pub fn extract_unit(text: &str) -> Option<Unit> {
    first_match(&UNIT_RULES, text).copied()
}
