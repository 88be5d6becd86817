//! # Currency Detector
//!
//! Classifies OCR text into one of the supported currencies.
//!
//! ## Rule Priority
//! ```text
//! ┌────────┬──────────────────────────────────────┐
//! │ Order  │ Markers (case-insensitive)           │
//! ├────────┼──────────────────────────────────────┤
//! │ 1 RUB  │ ₽  руб  р.  rub                      │
//! │ 2 USD  │ $  usd  долл                         │
//! │ 3 EUR  │ €  eur  евро                         │
//! │ 4 KZT  │ ₸  тенге  kzt                        │
//! │ 5 UAH  │ ₴  грн  uah                          │
//! │ 6 BYN  │ byn  br                              │
//! └────────┴──────────────────────────────────────┘
//! ```
//! A tag showing both `руб` and `$` is RUB: the first matching rule wins.
//! Because RUB is checked first, a Belarusian tag written as `бел. руб`
//! reads as RUB; only the `BYN`/`Br` markers select BYN.
//!
//! Markers match as plain substrings, so a code glued to a number
//! (`4.99USD`, `89р.`) still counts. The two short markers `р.` and `br`
//! must not start inside a word (`литр.`, `bread`), and `br` must also end
//! at a word boundary.

use once_cell::sync::Lazy;

use super::{first_match, Rule};
use crate::types::Currency;

/// Textual markers of one currency, as regex fragments.
struct Markers {
    currency: Currency,
    /// Match anywhere.
    anywhere: &'static [&'static str],
    /// Must not be preceded by a letter.
    word_start: &'static [&'static str],
}

/// Marker table in detection priority.
static MARKERS: [Markers; 6] = [
    Markers {
        currency: Currency::Rub,
        anywhere: &["₽", "руб", "rub"],
        word_start: &[r"р\."],
    },
    Markers {
        currency: Currency::Usd,
        anywhere: &[r"\$", "usd", "долл"],
        word_start: &[],
    },
    Markers {
        currency: Currency::Eur,
        anywhere: &["€", "eur", "евро"],
        word_start: &[],
    },
    Markers {
        currency: Currency::Kzt,
        anywhere: &["₸", "тенге", "kzt"],
        word_start: &[],
    },
    Markers {
        currency: Currency::Uah,
        anywhere: &["₴", "грн", "uah"],
        word_start: &[],
    },
    Markers {
        currency: Currency::Byn,
        anywhere: &["byn"],
        word_start: &[r"br(?:\P{L}|$)"],
    },
];

impl Markers {
    fn all(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.anywhere.iter().chain(self.word_start.iter()).copied()
    }

    fn rule_pattern(&self) -> String {
        let guarded = self
            .word_start
            .iter()
            .map(|marker| format!(r"(?:^|\P{{L}}){marker}"));
        let alternatives: Vec<String> = self
            .anywhere
            .iter()
            .map(|marker| marker.to_string())
            .chain(guarded)
            .collect();
        format!("(?i){}", alternatives.join("|"))
    }
}

/// Ordered currency rules. Order is the detection priority.
pub static CURRENCY_RULES: Lazy<Vec<Rule<Currency>>> = Lazy::new(|| {
    MARKERS
        .iter()
        .map(|markers| Rule::new(&markers.rule_pattern(), markers.currency))
        .collect()
});

/// Non-capturing group matching any currency marker.
///
/// Used after a number, where the preceding character is already a digit or
/// whitespace, so word-start markers need no guard.
pub(crate) fn currency_token() -> String {
    let all: Vec<&str> = MARKERS.iter().flat_map(Markers::all).collect();
    format!("(?:{})", all.join("|"))
}

/// Returns the currency of the first matching rule, if any.
pub fn match_currency(text: &str) -> Option<Currency> {
    first_match(&CURRENCY_RULES, text).copied()
}

/// Detects the currency of `text`, falling back to `default`.
///
/// ## Example
/// ```rust
/// use pricetag_core::detect::currency::detect_currency;
/// use pricetag_core::Currency;
///
/// assert_eq!(detect_currency("1500 тенге", Currency::Rub), Currency::Kzt);
/// assert_eq!(detect_currency("Хлеб 45", Currency::Rub), Currency::Rub);
/// ```
pub fn detect_currency(text: &str, default: Currency) -> Currency {
    match_currency(text).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_currency() {
        assert_eq!(match_currency("89.90 руб"), Some(Currency::Rub));
        assert_eq!(match_currency("89.90 ₽"), Some(Currency::Rub));
        assert_eq!(match_currency("89 р."), Some(Currency::Rub));
        assert_eq!(match_currency("$4.99"), Some(Currency::Usd));
        assert_eq!(match_currency("4.99 USD"), Some(Currency::Usd));
        assert_eq!(match_currency("3,49 €"), Some(Currency::Eur));
        assert_eq!(match_currency("3,49 евро"), Some(Currency::Eur));
        assert_eq!(match_currency("1500 ₸"), Some(Currency::Kzt));
        assert_eq!(match_currency("45 грн"), Some(Currency::Uah));
        assert_eq!(match_currency("3.20 BYN"), Some(Currency::Byn));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(match_currency("100 РУБ"), Some(Currency::Rub));
        assert_eq!(match_currency("100 Eur"), Some(Currency::Eur));
    }

    #[test]
    fn test_first_rule_wins() {
        // RUB precedes USD in the rule list.
        assert_eq!(match_currency("$5 / 450 руб"), Some(Currency::Rub));
        // USD precedes EUR.
        assert_eq!(match_currency("€3 or $4"), Some(Currency::Usd));
        // "бел. руб" is caught by the RUB rule first.
        assert_eq!(match_currency("3,20 бел. руб"), Some(Currency::Rub));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let order: Vec<Currency> = CURRENCY_RULES.iter().map(|r| *r.value()).collect();
        assert_eq!(
            order,
            vec![
                Currency::Rub,
                Currency::Usd,
                Currency::Eur,
                Currency::Kzt,
                Currency::Uah,
                Currency::Byn,
            ]
        );
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(detect_currency("", Currency::Rub), Currency::Rub);
        assert_eq!(detect_currency("Хлеб белый", Currency::Eur), Currency::Eur);
        // Words merely containing "br" are not BYN.
        assert_eq!(detect_currency("bread", Currency::Rub), Currency::Rub);
        assert_eq!(detect_currency("Сок 1 литр.", Currency::Eur), Currency::Eur);
    }

    #[test]
    fn test_codes_glued_to_numbers() {
        assert_eq!(match_currency("4.99USD"), Some(Currency::Usd));
        assert_eq!(match_currency("3.20BYN"), Some(Currency::Byn));
        assert_eq!(match_currency("3.20Br"), Some(Currency::Byn));
        assert_eq!(match_currency("100EUR"), Some(Currency::Eur));
        assert_eq!(match_currency("500KZT"), Some(Currency::Kzt));
        assert_eq!(match_currency("45UAH"), Some(Currency::Uah));
        assert_eq!(match_currency("89р."), Some(Currency::Rub));
    }

    #[test]
    fn test_token_covers_every_marker() {
        let token = currency_token();
        for marker in ["₽", "руб", "rub", "usd", "долл", "eur", "евро", "kzt", "тенге", "uah", "грн", "byn", "br"] {
            assert!(token.contains(marker), "{marker} missing from {token}");
        }
    }
}
