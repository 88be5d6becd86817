//! # Product Repository
//!
//! Products are the anchors that price points hang off. A product is found
//! either by its generated id or by the barcode printed on its tag.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ products                                     │
//! │                                              │
//! │ id (uuid) │ name            │ barcode        │
//! │ 6f1c…     │ Молоко 2.5% 1л  │ 4607025392244  │ ◄─ get_by_barcode
//! │ 9a02…     │ Хлеб белый      │ NULL           │
//! └──────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use pricetag_core::validation::validate_barcode;
use pricetag_core::ValidationError;

/// A tracked product.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub barcode: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Creates a product.
    ///
    /// ## Returns
    /// * `Err(DbError::Invalid)` - blank name or malformed barcode
    /// * `Err(DbError::UniqueViolation)` - barcode already registered
    pub async fn create(&self, name: &str, barcode: Option<&str>) -> DbResult<Product> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Required {
                field: "name".to_string(),
            }
            .into());
        }
        if let Some(code) = barcode {
            validate_barcode(code)?;
        }

        let now = Utc::now();
        let product = Product {
            id: generate_product_id(),
            name: name.to_string(),
            barcode: barcode.map(str::to_string),
            created_at: now,
            updated_at: now,
        };

        debug!(id = %product.id, barcode = ?product.barcode, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, barcode, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.barcode)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::UniqueViolation { .. } => {
                DbError::duplicate("barcode", product.barcode.clone().unwrap_or_default())
            }
            other => other,
        })?;

        Ok(product)
    }

    /// Gets a product by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, barcode, created_at, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Gets a product by barcode.
    pub async fn get_by_barcode(&self, barcode: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, barcode, created_at, updated_at
            FROM products
            WHERE barcode = ?1
            "#,
        )
        .bind(barcode)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists products sorted by name.
    pub async fn list(&self, limit: u32) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, barcode, created_at, updated_at
            FROM products
            ORDER BY name, id
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Generates a new product ID (UUID v4).
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}
