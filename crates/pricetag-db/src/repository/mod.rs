//! # Repository Module
//!
//! SQL lives here and nowhere else.
//!
//! ```text
//! db.products()      → ProductRepository
//!                      ├── create(name, barcode)
//!                      ├── get_by_id / get_by_barcode
//!                      └── list / count
//!
//! db.price_points()  → PricePointRepository
//!                      ├── append(product_id, point, raw_text)
//!                      ├── record_scan(product_id, parsed, store, at)
//!                      ├── history(product_id)   oldest first
//!                      └── summary(product_id)   PriceSummary
//! ```

pub mod price_point;
pub mod product;
