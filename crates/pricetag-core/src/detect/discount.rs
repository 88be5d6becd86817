//! # Discount Extractor
//!
//! Picks the headline percentage off a tag.
//!
//! Tags often carry several percentages (loyalty tiers, "-10% / -25% with
//! card"); the largest plausible one is reported.
//!
//! The match is literal: optional minus, digits, `%` with nothing in
//! between. The digits of a fractional percentage are read from the last
//! separator on, so fat content `2.5%` reports 5.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::is_plausible_discount;

/// Optional minus, digits, percent sign. Nothing before the match is
/// consumed, so back-to-back percentages (`10%20%`) are all seen.
static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?(\d+)%").expect("Invalid percent regex"));

/// Returns the largest discount in `1..=99` found in `text`.
///
/// ## Example
/// ```rust
/// use pricetag_core::detect::discount::extract_discount;
///
/// assert_eq!(extract_discount("-10% по карте -25%"), Some(25));
/// assert_eq!(extract_discount("Скидка 100%"), None);
/// ```
pub fn extract_discount(text: &str) -> Option<u8> {
    PERCENT_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .filter(|percent| is_plausible_discount(*percent))
        .max()
        .and_then(|percent| u8::try_from(percent).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_discount() {
        assert_eq!(extract_discount("скидка -20%"), Some(20));
        assert_eq!(extract_discount("20%"), Some(20));
        // A space before `%` breaks the marker.
        assert_eq!(extract_discount("выгода 15 %"), None);
    }

    #[test]
    fn test_takes_maximum() {
        assert_eq!(extract_discount("-5% -30% -10%"), Some(30));
        assert_eq!(extract_discount("10%20%"), Some(20));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(extract_discount("1%"), Some(1));
        assert_eq!(extract_discount("99%"), Some(99));
        assert_eq!(extract_discount("0%"), None);
        assert_eq!(extract_discount("100%"), None);
        assert_eq!(extract_discount("100% -40%"), Some(40));
        assert_eq!(extract_discount("99999999999999999999%"), None);
    }

    #[test]
    fn test_fractional_percent_reads_trailing_digits() {
        assert_eq!(extract_discount("Молоко 2.5% 1л"), Some(5));
        assert_eq!(extract_discount("Кефир 3,2%"), Some(2));
        assert_eq!(extract_discount("Сливки 10.0%"), None);
    }

    #[test]
    fn test_no_percent() {
        assert_eq!(extract_discount(""), None);
        assert_eq!(extract_discount("Цена: 89.90 руб"), None);
    }
}
