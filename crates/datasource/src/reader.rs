//! CSV readers for the three inputs.
//!
//! The readers expect canonical snake_case headers and are deliberately
//! lenient about cell contents: numbers with thousands separators parse,
//! blank numeric cells become zero, and rows without a SKU are dropped.
//! Column-detection heuristics for arbitrary vendor layouts are the
//! upstream exporter's job, not this crate's.

use std::path::Path;
use std::str::FromStr;

use core_types::{size_label_from_sku, style_code_from_sku, Product, StockLedgerEntry, StockReport};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::SourceError;

#[derive(Debug, Deserialize)]
struct RawProductRow {
    #[serde(default)]
    sku: String,
    #[serde(default)]
    style_code: String,
    #[serde(default)]
    size_label: String,
    #[serde(default)]
    min_stock: String,
    #[serde(default)]
    unit_cost: String,
    #[serde(default)]
    import_price: String,
    #[serde(default)]
    image_ref: String,
}

#[derive(Debug, Deserialize)]
struct RawStockRow {
    #[serde(default)]
    sku: String,
    #[serde(default)]
    current_stock: String,
    #[serde(default)]
    incoming_stock: String,
}

#[derive(Debug, Deserialize)]
struct RawLedgerRow {
    #[serde(default)]
    sku: String,
    #[serde(default)]
    style_code: String,
    #[serde(default)]
    export_quantity: String,
}

/// Reads the product master.
pub fn read_products(path: &Path) -> Result<Vec<Product>, SourceError> {
    let rows: Vec<RawProductRow> = read_rows(path)?;
    let products: Vec<Product> = rows
        .into_iter()
        .filter(|row| !row.sku.is_empty())
        .map(|row| Product {
            style_code: non_empty_or(row.style_code, || style_code_from_sku(&row.sku)),
            size_label: non_empty_or(row.size_label, || size_label_from_sku(&row.sku)),
            min_stock: lenient_int(&row.min_stock),
            unit_cost: lenient_decimal(&row.unit_cost),
            import_price: lenient_decimal(&row.import_price),
            image_ref: row.image_ref,
            sku: row.sku,
        })
        .collect();

    tracing::debug!("read {} products from {}", products.len(), path.display());
    Ok(products)
}

/// Reads the current stock report.
pub fn read_stock_reports(path: &Path) -> Result<Vec<StockReport>, SourceError> {
    let rows: Vec<RawStockRow> = read_rows(path)?;
    let reports: Vec<StockReport> = rows
        .into_iter()
        .filter(|row| !row.sku.is_empty())
        .map(|row| StockReport {
            sku: row.sku,
            current_stock: lenient_int(&row.current_stock),
            incoming_stock: lenient_decimal(&row.incoming_stock),
        })
        .collect();

    tracing::debug!("read {} stock reports from {}", reports.len(), path.display());
    Ok(reports)
}

/// Reads the export/sales ledger.
pub fn read_ledger_entries(path: &Path) -> Result<Vec<StockLedgerEntry>, SourceError> {
    let rows: Vec<RawLedgerRow> = read_rows(path)?;
    let entries: Vec<StockLedgerEntry> = rows
        .into_iter()
        .filter(|row| !row.sku.is_empty())
        .map(|row| StockLedgerEntry {
            sku: row.sku,
            style_code: row.style_code,
            export_quantity: lenient_int(&row.export_quantity),
        })
        .collect();

    tracing::debug!("read {} ledger entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn read_rows<Row: DeserializeOwned>(path: &Path) -> Result<Vec<Row>, SourceError> {
    if !path.exists() {
        return Err(SourceError::FileNotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

fn non_empty_or(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() { fallback() } else { value }
}

/// Parses an integer cell, tolerating thousands separators and blanks.
fn lenient_int(cell: &str) -> i64 {
    cleaned(cell).parse().unwrap_or(0)
}

/// Parses a decimal cell, tolerating thousands separators and blanks.
fn lenient_decimal(cell: &str) -> Decimal {
    Decimal::from_str(&cleaned(cell)).unwrap_or(Decimal::ZERO)
}

fn cleaned(cell: &str) -> String {
    cell.trim().replace([',', ' '], "")
}
