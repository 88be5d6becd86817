//! Subcommand handlers.
//!
//! Each handler prints one JSON document to stdout.

use std::io::Read;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use pricetag_core::{parse_ocr_result_with, summarize, ParserConfig};
use pricetag_db::{Database, Product};

/// Returns `text`, or all of stdin when it is absent.
pub fn read_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read OCR text from stdin")?;
    Ok(buf)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `pricetag parse`
pub fn parse(text: &str, config: &ParserConfig) -> Result<()> {
    let parsed = parse_ocr_result_with(text, config);
    print_json(&parsed)
}

/// `pricetag add-product`
pub async fn add_product(db: &Database, name: &str, barcode: Option<&str>) -> Result<()> {
    let product = db.products().create(name, barcode).await?;
    info!(id = %product.id, "Product created");
    print_json(&product)
}

/// `pricetag record`
pub async fn record(
    db: &Database,
    config: &ParserConfig,
    product_id: Option<&str>,
    store: Option<String>,
    text: &str,
) -> Result<()> {
    let parsed = parse_ocr_result_with(text, config);
    let product = resolve_product(db, product_id, parsed.barcode.as_deref()).await?;

    let recorded = db
        .price_points()
        .record_scan(&product.id, &parsed, store, Utc::now())
        .await?;

    if recorded.is_none() {
        info!(product_id = %product.id, "No price found on tag");
    }

    print_json(&json!({
        "product": product,
        "parsed": parsed,
        "recorded": recorded,
    }))
}

async fn resolve_product(
    db: &Database,
    product_id: Option<&str>,
    barcode: Option<&str>,
) -> Result<Product> {
    let products = db.products();

    if let Some(id) = product_id {
        return products
            .get_by_id(id)
            .await?
            .ok_or_else(|| anyhow!("product not found: {id}"));
    }

    let Some(barcode) = barcode else {
        bail!("no --product given and no barcode found on the tag");
    };
    debug!(barcode = %barcode, "Looking up product by barcode");

    products
        .get_by_barcode(barcode)
        .await?
        .ok_or_else(|| anyhow!("no product registered with barcode {barcode}"))
}

/// `pricetag history`
pub async fn history(db: &Database, product_id: &str) -> Result<()> {
    print_json(&history_report(db, product_id).await?)
}

async fn history_report(db: &Database, product_id: &str) -> Result<Value> {
    let product = db
        .products()
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| anyhow!("product not found: {product_id}"))?;

    // One snapshot feeds both the listing and the aggregates.
    let points = db.price_points().history(product_id).await?;
    let summary = summarize(&points);

    Ok(json!({
        "product": product,
        "points": points,
        "summary": summary,
    }))
}

/// `pricetag products`
pub async fn products(db: &Database, limit: u32) -> Result<()> {
    let products = db.products().list(limit).await?;
    print_json(&products)
}
