//! # pricetag-db: Price History Store for Pricetag
//!
//! Products and their append-only price history, kept in SQLite via sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricetag Data Flow                               │
//! │                                                                         │
//! │  pricetag record (CLI)                                                 │
//! │       │  parse_ocr_result → ParsedData → PricePoint                    │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pricetag-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │    Repositories    │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │◄───│ ProductRepository  │  │ (embedded) │  │   │
//! │  │   │  SqlitePool   │    │ PricePointRepo     │  │ 001_init   │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (PRICETAG_DB_PATH or the platform data dir)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//! Price points are only ever appended. Readers take a snapshot inside a
//! transaction, so `history` and `summary` never observe a half-written
//! append and always see points in insertion order.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pricetag_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("pricetag.db")).await?;
//! let product = db.products().create("Молоко 2.5%", Some("4607025392244")).await?;
//! let summary = db.price_points().summary(&product.id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::price_point::PricePointRepository;
pub use repository::product::{Product, ProductRepository};
