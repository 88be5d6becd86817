//! # Price History Aggregator
//!
//! Summary statistics over a product's price points.
//!
//! ## Snapshot Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storage layer                        This module                       │
//! │  ─────────────                        ───────────                       │
//! │  BEGIN                                                                  │
//! │  SELECT ... ORDER BY id   ──► &[PricePoint] ──► summarize()             │
//! │  COMMIT                       (oldest first)        │                   │
//! │                                                     ▼                   │
//! │                                       PriceSummary { current, min,      │
//! │                                                      max, avg }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every function takes an immutable slice and recomputes from scratch.
//! Nothing is cached here; callers that need the numbers several times in
//! one request should call [`summarize`] once and keep the result.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::PricePoint;

/// The most recent point (the last element), if any.
#[inline]
pub fn latest_point(points: &[PricePoint]) -> Option<&PricePoint> {
    points.last()
}

/// Price of the most recent point.
pub fn current_price(points: &[PricePoint]) -> Option<f64> {
    latest_point(points).map(|p| p.price)
}

/// Lowest recorded price.
pub fn min_price(points: &[PricePoint]) -> Option<f64> {
    points.iter().map(|p| p.price).min_by(f64::total_cmp)
}

/// Highest recorded price.
pub fn max_price(points: &[PricePoint]) -> Option<f64> {
    points.iter().map(|p| p.price).max_by(f64::total_cmp)
}

/// Arithmetic mean of all recorded prices.
///
/// Clamped to `[min_price, max_price]`: summing decimal prices such as
/// `89.9` accumulates rounding error that can push the raw quotient past
/// the extremes.
pub fn avg_price(points: &[PricePoint]) -> Option<f64> {
    let (min, max) = (min_price(points)?, max_price(points)?);

    let total: f64 = points.iter().map(|p| p.price).sum();
    Some((total / points.len() as f64).max(min).min(max))
}

// =============================================================================
// Summary
// =============================================================================

/// All aggregates for one history snapshot.
///
/// Serialized under the keys API clients expect:
/// ```json
/// { "currentPrice": 89.9, "minPrice": 79.9, "maxPrice": 99.9, "avgPrice": 89.9, "count": 3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub current_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub avg_price: Option<f64>,
    pub count: usize,
}

/// Computes every aggregate over `points`.
///
/// ## Example
/// ```rust
/// use pricetag_core::history::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.current_price, None);
/// assert_eq!(summary.count, 0);
/// ```
pub fn summarize(points: &[PricePoint]) -> PriceSummary {
    PriceSummary {
        current_price: current_price(points),
        min_price: min_price(points),
        max_price: max_price(points),
        avg_price: avg_price(points),
        count: points.len(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Currency;
    use chrono::{Duration, TimeZone, Utc};

    fn history(prices: &[f64]) -> Vec<PricePoint> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| PricePoint {
                price: *price,
                original_price: None,
                currency: Currency::Rub,
                is_promo: false,
                scanned_at: start + Duration::days(i as i64),
                store: None,
            })
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let points = history(&[]);
        assert_eq!(latest_point(&points), None);
        assert_eq!(current_price(&points), None);
        assert_eq!(min_price(&points), None);
        assert_eq!(max_price(&points), None);
        assert_eq!(avg_price(&points), None);
        assert_eq!(summarize(&points), PriceSummary::default());
    }

    #[test]
    fn test_single_point() {
        let points = history(&[89.9]);
        let summary = summarize(&points);
        assert_eq!(summary.current_price, Some(89.9));
        assert_eq!(summary.min_price, Some(89.9));
        assert_eq!(summary.max_price, Some(89.9));
        assert_eq!(summary.avg_price, Some(89.9));
        assert_eq!(summary.count, 1);
    }

    #[test]
    fn test_current_is_last_appended_not_latest_timestamp() {
        let mut points = history(&[100.0, 80.0]);
        // Out-of-order timestamp: insertion order still decides.
        points[1].scanned_at = points[0].scanned_at - Duration::days(30);
        assert_eq!(current_price(&points), Some(80.0));
    }

    #[test]
    fn test_aggregates() {
        let points = history(&[100.0, 80.0, 120.0, 90.0]);
        assert_eq!(current_price(&points), Some(90.0));
        assert_eq!(min_price(&points), Some(80.0));
        assert_eq!(max_price(&points), Some(120.0));
        assert_eq!(avg_price(&points), Some(97.5));
    }

    #[test]
    fn test_min_avg_max_ordering() {
        let samples: [&[f64]; 4] = [
            &[1.0],
            &[5.0, 5.0, 5.0],
            &[0.01, 999_999.99],
            &[89.9, 79.9, 99.9, 84.5, 91.0],
        ];
        for prices in samples {
            let s = summarize(&history(prices));
            let (min, avg, max) = (s.min_price.unwrap(), s.avg_price.unwrap(), s.max_price.unwrap());
            assert!(min <= avg && avg <= max, "{prices:?}");
        }
    }

    #[test]
    fn test_mean_of_equal_inexact_prices_stays_in_range() {
        for price in [0.1, 89.9, 79.99, 0.3] {
            let s = summarize(&history(&[price; 3]));
            assert_eq!(s.avg_price, Some(price), "{price}");
            let (min, avg, max) = (s.min_price.unwrap(), s.avg_price.unwrap(), s.max_price.unwrap());
            assert!(min <= avg && avg <= max, "{price}");
        }
    }

    #[test]
    fn test_summary_json_keys() {
        let json = serde_json::to_value(summarize(&history(&[10.0, 20.0]))).unwrap();
        assert_eq!(json["currentPrice"], 20.0);
        assert_eq!(json["minPrice"], 10.0);
        assert_eq!(json["maxPrice"], 20.0);
        assert_eq!(json["avgPrice"], 15.0);
        assert_eq!(json["count"], 2);
    }
}
