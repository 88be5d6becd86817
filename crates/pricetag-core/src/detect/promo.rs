//! # Promotion Detector
//!
//! Decides whether a tag advertises a promotion and labels which kind.
//!
//! Same first-match contract as the currency detector: the list order below
//! is a priority, so a tag reading "АКЦИЯ! скидка -20%" is labelled
//! `акция`, not `скидка`.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{first_match, Rule};

/// Ordered promotion rules: (pattern, promo-type label).
pub static PROMO_RULES: Lazy<Vec<Rule<&'static str>>> = Lazy::new(|| {
    vec![
        Rule::new(r"(?i)акци[яиюей]", "акция"),
        Rule::new(r"(?i)скидк", "скидка"),
        Rule::new(r"(?i)распродаж", "распродажа"),
        Rule::new(r"(?i)\bsale\b", "sale"),
        // was-price markers: "Было 249.99", "Старая цена"
        Rule::new(r"(?i)\bбыло\b|стар\w*\s+цен", "старая цена"),
        Rule::new(r"-\s*\d{1,2}\s*%", "скидка %"),
        Rule::new(r"(?i)красн\w*\s+цен", "красная цена"),
        Rule::new(r"(?i)ж[её]лт\w*\s+цен", "желтый ценник"),
        Rule::new(r"(?i)спец\s*(?:цена|предложени)", "спецпредложение"),
        Rule::new(r"(?i)\bвыгод", "выгода"),
    ]
});

/// Outcome of promotion detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub is_promo: bool,
    pub promo_type: Option<&'static str>,
}

impl Promotion {
    /// No promotion marker found.
    pub const NONE: Promotion = Promotion {
        is_promo: false,
        promo_type: None,
    };
}

/// Detects a promotion in `text`.
///
/// ## Example
/// ```rust
/// use pricetag_core::detect::promo::detect_promotion;
///
/// let promo = detect_promotion("Распродажа! 99.90");
/// assert!(promo.is_promo);
/// assert_eq!(promo.promo_type, Some("распродажа"));
/// ```
pub fn detect_promotion(text: &str) -> Promotion {
    match first_match(&PROMO_RULES, text) {
        Some(label) => Promotion {
            is_promo: true,
            promo_type: Some(*label),
        },
        None => Promotion::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str) -> Option<&'static str> {
        detect_promotion(text).promo_type
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(label("АКЦИЯ!"), Some("акция"));
        assert_eq!(label("по акции"), Some("акция"));
        assert_eq!(label("Скидка на молоко"), Some("скидка"));
        assert_eq!(label("РАСПРОДАЖА"), Some("распродажа"));
        assert_eq!(label("Big SALE 9.99"), Some("sale"));
        assert_eq!(label("Было 120, теперь 99"), Some("старая цена"));
        assert_eq!(label("Старая цена 120.00"), Some("старая цена"));
        assert_eq!(label("Молоко -15%"), Some("скидка %"));
        assert_eq!(label("Красная цена 39.90"), Some("красная цена"));
        assert_eq!(label("Жёлтый ценник"), Some("желтый ценник"));
        assert_eq!(label("желтая цена"), Some("желтый ценник"));
        assert_eq!(label("Спецпредложение"), Some("спецпредложение"));
        assert_eq!(label("Ваша выгода 20 руб"), Some("выгода"));
    }

    #[test]
    fn test_priority_order() {
        // "акция" outranks "скидка" and the explicit percent-off rule.
        assert_eq!(label("скидка -20% АКЦИЯ"), Some("акция"));
        // "скидка" outranks the was-price marker.
        assert_eq!(label("Было 200 скидка"), Some("скидка"));
        // was-price outranks percent-off.
        assert_eq!(label("Было 200 -10%"), Some("старая цена"));

        let order: Vec<&str> = PROMO_RULES.iter().map(|r| *r.value()).collect();
        assert_eq!(order[0], "акция");
        assert_eq!(order[1], "скидка");
        assert_eq!(order[2], "распродажа");
    }

    #[test]
    fn test_no_promotion() {
        assert_eq!(detect_promotion("Молоко 2.5% 1л. Цена: 89.90 руб"), Promotion::NONE);
        assert_eq!(detect_promotion(""), Promotion::NONE);
        // "sale" must be a whole word.
        assert_eq!(detect_promotion("wholesale 10.00"), Promotion::NONE);
    }
}
