use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sku::{size_label_from_sku, style_code_from_sku};

/// The identity record for one SKU from the product master.
///
/// A `Product` with `min_stock <= 0` is treated as "not managed" and is
/// excluded from every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique stock-keeping unit identifier, one per size variant.
    pub sku: String,
    /// Identifier shared by all size variants of one design.
    pub style_code: String,
    /// The trailing size characters of the SKU (e.g. "41").
    pub size_label: String,
    /// The configured default minimum stock for this SKU.
    pub min_stock: i64,
    /// Unit cost in local currency. Zero means "not recorded".
    #[serde(default)]
    pub unit_cost: Decimal,
    /// Supplier-side import price. Zero means "not recorded".
    #[serde(default)]
    pub import_price: Decimal,
    /// Opaque image reference, passed through to reports untouched.
    #[serde(default)]
    pub image_ref: String,
}

impl Product {
    /// Builds a product, deriving the style code and size label from the SKU.
    pub fn from_sku(
        sku: impl Into<String>,
        min_stock: i64,
        unit_cost: Decimal,
        import_price: Decimal,
        image_ref: impl Into<String>,
    ) -> Self {
        let sku = sku.into();
        Self {
            style_code: style_code_from_sku(&sku),
            size_label: size_label_from_sku(&sku),
            sku,
            min_stock,
            unit_cost,
            import_price,
            image_ref: image_ref.into(),
        }
    }
}

/// One SKU's line in the current inventory snapshot.
///
/// A product without a matching report is skipped: no data, no decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    pub sku: String,
    /// Units currently on hand.
    pub current_stock: i64,
    /// Units already ordered and in transit. May be fractional in source data.
    #[serde(default)]
    pub incoming_stock: Decimal,
}

/// One historical export/sale event from the stock ledger.
///
/// Many entries may share a key; their quantities accumulate over the
/// trailing observation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLedgerEntry {
    pub sku: String,
    /// Explicit style code. May be empty, in which case the style key is
    /// derived from the SKU.
    #[serde(default)]
    pub style_code: String,
    pub export_quantity: i64,
}
