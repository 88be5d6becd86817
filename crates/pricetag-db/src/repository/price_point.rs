//! # Price Point Repository
//!
//! Append-only price history per product.
//!
//! ## Ordering
//! ```text
//! price_points
//! id │ product_id │ price │ scanned_at
//!  1 │ 6f1c…      │ 99.90 │ 2024-01-10   ◄─ oldest
//!  2 │ 6f1c…      │ 79.90 │ 2024-01-03   (scanned earlier, appended later)
//!  3 │ 6f1c…      │ 89.90 │ 2024-01-20   ◄─ current price
//! ```
//! History order is insertion order (`id`), not `scanned_at`. The current
//! price is the most recently *appended* point.
//!
//! ## Snapshots
//! `history` and `summary` read inside a transaction. A concurrent append is
//! either fully visible or not visible at all.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use pricetag_core::validation::validate_price_point;
use pricetag_core::{summarize, ParsedData, PricePoint, PriceSummary};

/// Repository for price history operations.
#[derive(Debug, Clone)]
pub struct PricePointRepository {
    pool: SqlitePool,
    max_price: f64,
}

impl PricePointRepository {
    /// Creates a new PricePointRepository.
    ///
    /// Points at or above `max_price` are rejected on append.
    pub fn new(pool: SqlitePool, max_price: f64) -> Self {
        PricePointRepository { pool, max_price }
    }

    /// Appends a price point to a product's history.
    ///
    /// ## Returns
    /// * `Err(DbError::Invalid)` - price out of range or blank store
    /// * `Err(DbError::NotFound)` - no such product
    pub async fn append(
        &self,
        product_id: &str,
        point: &PricePoint,
        raw_text: Option<&str>,
    ) -> DbResult<()> {
        validate_price_point(point, self.max_price)?;

        let mut tx = self.pool.begin().await?;

        let exists: Option<String> = sqlx::query_scalar("SELECT id FROM products WHERE id = ?1")
            .bind(product_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(DbError::not_found("Product", product_id));
        }

        sqlx::query(
            r#"
            INSERT INTO price_points (
                product_id, price, original_price, currency,
                is_promo, scanned_at, store, raw_text
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(product_id)
        .bind(point.price)
        .bind(point.original_price)
        .bind(point.currency)
        .bind(point.is_promo)
        .bind(point.scanned_at)
        .bind(&point.store)
        .bind(raw_text)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            product_id = %product_id,
            price = point.price,
            currency = %point.currency,
            is_promo = point.is_promo,
            "Appended price point"
        );
        Ok(())
    }

    /// Turns a parse result into a price point and appends it.
    ///
    /// A scan without a price is not an observation: nothing is stored and
    /// `Ok(None)` is returned.
    pub async fn record_scan(
        &self,
        product_id: &str,
        parsed: &ParsedData,
        store: Option<String>,
        scanned_at: DateTime<Utc>,
    ) -> DbResult<Option<PricePoint>> {
        let Some(point) = PricePoint::from_parsed(parsed, scanned_at, store) else {
            info!(product_id = %product_id, "Scan carried no price, nothing recorded");
            return Ok(None);
        };

        self.append(product_id, &point, Some(&parsed.raw_text)).await?;
        Ok(Some(point))
    }

    /// Returns a product's history, oldest first.
    ///
    /// An unknown product has an empty history.
    pub async fn history(&self, product_id: &str) -> DbResult<Vec<PricePoint>> {
        let mut tx = self.pool.begin().await?;
        let points = fetch_history(&mut tx, product_id).await?;
        tx.commit().await?;

        Ok(points)
    }

    /// Computes aggregates over one consistent snapshot of the history.
    pub async fn summary(&self, product_id: &str) -> DbResult<PriceSummary> {
        let mut tx = self.pool.begin().await?;
        let points = fetch_history(&mut tx, product_id).await?;
        tx.commit().await?;

        let summary = summarize(&points);
        debug!(product_id = %product_id, count = summary.count, "Summarized history");
        Ok(summary)
    }

    /// Number of points stored for a product.
    pub async fn count(&self, product_id: &str) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM price_points WHERE product_id = ?1")
                .bind(product_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

async fn fetch_history(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    product_id: &str,
) -> DbResult<Vec<PricePoint>> {
    let points = sqlx::query_as::<_, PricePoint>(
        r#"
        SELECT price, original_price, currency, is_promo, scanned_at, store
        FROM price_points
        WHERE product_id = ?1
        ORDER BY id ASC
        "#,
    )
    .bind(product_id)
    .fetch_all(&mut **tx)
    .await?;

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::TimeZone;
    use pricetag_core::{parse_ocr_result, Currency, ValidationError};

    async fn setup() -> (Database, String) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let product = db
            .products()
            .create("Молоко 2.5% 1л", Some("4607025392244"))
            .await
            .unwrap();
        (db, product.id)
    }

    fn point(price: f64, day: u32) -> PricePoint {
        PricePoint {
            price,
            original_price: None,
            currency: Currency::Rub,
            is_promo: false,
            scanned_at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            store: None,
        }
    }

    #[tokio::test]
    async fn test_history_is_insertion_ordered() {
        let (db, id) = setup().await;
        let repo = db.price_points();

        repo.append(&id, &point(99.90, 10), None).await.unwrap();
        repo.append(&id, &point(79.90, 3), None).await.unwrap();
        repo.append(&id, &point(89.90, 20), None).await.unwrap();

        let prices: Vec<f64> = repo
            .history(&id)
            .await
            .unwrap()
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(prices, vec![99.90, 79.90, 89.90]);
    }

    #[tokio::test]
    async fn test_summary() {
        let (db, id) = setup().await;
        let repo = db.price_points();

        for (price, day) in [(100.0, 1), (80.0, 2), (90.0, 3)] {
            repo.append(&id, &point(price, day), None).await.unwrap();
        }

        let summary = repo.summary(&id).await.unwrap();
        assert_eq!(summary.current_price, Some(90.0));
        assert_eq!(summary.min_price, Some(80.0));
        assert_eq!(summary.max_price, Some(100.0));
        assert_eq!(summary.avg_price, Some(90.0));
        assert_eq!(summary.count, 3);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let (db, id) = setup().await;
        let repo = db.price_points();

        assert!(repo.history(&id).await.unwrap().is_empty());
        assert_eq!(repo.summary(&id).await.unwrap(), PriceSummary::default());
        assert!(repo.history("no-such-product").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_fields() {
        let (db, id) = setup().await;
        let repo = db.price_points();

        let stored = PricePoint {
            price: 69.90,
            original_price: Some(89.90),
            currency: Currency::Kzt,
            is_promo: true,
            scanned_at: Utc.with_ymd_and_hms(2024, 3, 8, 9, 30, 0).unwrap(),
            store: Some("Магнит".to_string()),
        };
        repo.append(&id, &stored, Some("raw")).await.unwrap();

        let history = repo.history(&id).await.unwrap();
        assert_eq!(history, vec![stored]);
    }

    #[tokio::test]
    async fn test_append_unknown_product() {
        let (db, _) = setup().await;

        let err = db
            .price_points()
            .append("missing", &point(10.0, 1), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_append_rejects_invalid_points() {
        let (db, id) = setup().await;
        let repo = db.price_points();

        assert!(matches!(
            repo.append(&id, &point(0.0, 1), None).await,
            Err(DbError::Invalid(ValidationError::OutOfRange { .. }))
        ));
        assert!(matches!(
            repo.append(&id, &point(1_000_000.0, 1), None).await,
            Err(DbError::Invalid(_))
        ));

        let mut blank_store = point(10.0, 1);
        blank_store.store = Some("  ".to_string());
        assert!(repo.append(&id, &blank_store, None).await.is_err());

        assert_eq!(repo.count(&id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_record_scan() {
        let (db, id) = setup().await;
        let repo = db.price_points();
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();

        let parsed = parse_ocr_result("АКЦИЯ! Было 120.00 Стало 89.90 руб");
        let recorded = repo
            .record_scan(&id, &parsed, Some("Пятёрочка".to_string()), at)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(recorded.price, 89.90);
        assert_eq!(recorded.original_price, Some(120.00));
        assert!(recorded.is_promo);

        let nothing = repo
            .record_scan(&id, &parse_ocr_result("Хлеб белый"), None, at)
            .await
            .unwrap();
        assert!(nothing.is_none());

        assert_eq!(repo.count(&id).await.unwrap(), 1);
        assert_eq!(repo.history(&id).await.unwrap(), vec![recorded]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let id = db.products().create("Кофе", None).await.unwrap().id;

        let mut handles = Vec::new();
        for i in 1..=8u32 {
            let repo = db.price_points();
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                repo.append(&id, &point(100.0 + f64::from(i), i), None).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let summary = db.price_points().summary(&id).await.unwrap();
        assert_eq!(summary.count, 8);
        assert_eq!(summary.min_price, Some(101.0));
        assert_eq!(summary.max_price, Some(108.0));
    }

    #[tokio::test]
    async fn test_deleting_product_drops_history() {
        let (db, id) = setup().await;
        let repo = db.price_points();
        repo.append(&id, &point(10.0, 1), None).await.unwrap();

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(&id)
            .execute(db.pool())
            .await
            .unwrap();

        assert_eq!(repo.count(&id).await.unwrap(), 0);
    }
}
