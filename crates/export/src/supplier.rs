//! The supplier-facing order sheet.
//!
//! The supplier orders whole size runs per style, so the per-SKU
//! recommendations are regrouped into one row per style with a 36–45 size
//! breakdown, a pair total, and totals in both the supplier's currency and
//! local currency. Which currency the recorded import price is in has to be
//! guessed from its magnitude — supplier-side prices are three digits,
//! local prices six or more.

use std::collections::HashMap;

use engine::ReorderRecommendation;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::layout::{round_whole, two_decimals, Cell, SheetLayout};

/// The full size run a supplier order covers, smallest to largest.
pub const SIZE_RUN: [i64; 10] = [36, 37, 38, 39, 40, 41, 42, 43, 44, 45];

/// Default local-per-foreign exchange rate when the caller supplies none.
pub const DEFAULT_EXCHANGE_RATE: Decimal = dec!(3500);

/// An import price below this is taken to be in the supplier's currency;
/// at or above it, in local currency.
const FOREIGN_PRICE_CUTOFF: Decimal = dec!(1000);

/// One style's line on the supplier sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRow {
    pub style_code: String,
    pub image_ref: String,
    /// Pairs needed per size, parallel to [`SIZE_RUN`].
    pub size_quantities: [i64; 10],
    pub total_pairs: i64,
    pub price_foreign: Decimal,
    pub price_local: Decimal,
    pub total_foreign: Decimal,
    pub total_local: Decimal,
    pub exchange_rate: Decimal,
}

/// Regroups recommendations into supplier rows, one per style in
/// first-seen order.
pub fn prepare_supplier_rows(
    recommendations: &[ReorderRecommendation],
    exchange_rate: Decimal,
) -> Vec<SupplierRow> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&ReorderRecommendation>> = HashMap::new();
    for rec in recommendations {
        let key = if rec.style_code.is_empty() {
            rec.sku.clone()
        } else {
            rec.style_code.clone()
        };
        let group = groups.entry(key.clone()).or_default();
        if group.is_empty() {
            order.push(key);
        }
        group.push(rec);
    }

    let mut rows = Vec::with_capacity(order.len());
    for style_code in order {
        let Some(group) = groups.remove(&style_code) else {
            continue;
        };

        let mut size_quantities = [0i64; 10];
        let mut total_pairs = 0i64;
        for rec in &group {
            let Some(size) = core_size_of(rec) else {
                continue;
            };
            let Some(slot) = SIZE_RUN.iter().position(|run_size| *run_size == size) else {
                continue;
            };
            let needed = round_whole(rec.needed_quantity)
                .to_i64()
                .unwrap_or(0)
                .max(0);
            size_quantities[slot] += needed;
            total_pairs += needed;
        }

        let (price_foreign, price_local) = group_pricing(&group, exchange_rate);
        let image_ref = group
            .iter()
            .map(|rec| rec.image_ref.as_str())
            .find(|image| !image.is_empty())
            .unwrap_or("")
            .to_string();

        rows.push(SupplierRow {
            style_code,
            image_ref,
            size_quantities,
            total_pairs,
            total_foreign: two_decimals(price_foreign * Decimal::from(total_pairs)),
            total_local: round_whole(price_local * Decimal::from(total_pairs)),
            price_foreign,
            price_local,
            exchange_rate,
        });
    }

    tracing::debug!(
        "prepared {} supplier rows from {} recommendations",
        rows.len(),
        recommendations.len()
    );
    rows
}

/// Builds the supplier sheet. The supplier's template repeats the column
/// header above every style row.
pub fn build_supplier_sheet(rows: &[SupplierRow]) -> SheetLayout {
    let mut layout = SheetLayout::new("Supplier Order");
    layout.column_widths = vec![8, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 8, 10, 15, 20, 12, 20];

    for row in rows {
        let mut header: Vec<Cell> = vec![Cell::from("Image")];
        header.extend(SIZE_RUN.iter().map(|size| Cell::from(size.to_string())));
        header.extend([
            Cell::from("Pairs"),
            Cell::from("Price"),
            Cell::from("Total"),
            Cell::from("Style"),
            Cell::from("Exchange rate"),
            Cell::from("Total (local)"),
        ]);
        layout.push_row(header);

        let mut data: Vec<Cell> = vec![Cell::from(row.image_ref.clone())];
        data.extend(row.size_quantities.iter().map(|quantity| {
            if *quantity == 0 {
                Cell::Empty
            } else {
                Cell::from(*quantity)
            }
        }));
        data.extend([
            Cell::from(row.total_pairs),
            Cell::from(row.price_foreign),
            Cell::from(row.total_foreign),
            Cell::from(row.style_code.clone()),
            Cell::from(row.exchange_rate),
            Cell::from(row.total_local),
        ]);
        layout.push_row(data);
    }

    layout
}

fn core_size_of(rec: &ReorderRecommendation) -> Option<i64> {
    core_types::parse_size_label(&rec.size_label)
}

/// Picks the group's unit pricing: the first member whose pricing resolves
/// completely, else whatever the first member yields.
fn group_pricing(
    group: &[&ReorderRecommendation],
    exchange_rate: Decimal,
) -> (Decimal, Decimal) {
    for rec in group {
        let (foreign, local) = unit_pricing(rec, exchange_rate);
        if foreign > Decimal::ZERO && local > Decimal::ZERO {
            return (foreign, local);
        }
    }
    group
        .first()
        .map(|rec| unit_pricing(rec, exchange_rate))
        .unwrap_or((Decimal::ZERO, Decimal::ZERO))
}

/// Resolves one record's unit price into (foreign, local) by magnitude:
/// a small import price is foreign currency, a large one is already local,
/// and a missing one falls back to the recorded local cost.
fn unit_pricing(rec: &ReorderRecommendation, exchange_rate: Decimal) -> (Decimal, Decimal) {
    if rec.import_price > Decimal::ZERO && rec.import_price < FOREIGN_PRICE_CUTOFF {
        let foreign = two_decimals(rec.import_price);
        let local = round_whole(foreign * exchange_rate);
        return (foreign, local);
    }
    if rec.import_price >= FOREIGN_PRICE_CUTOFF {
        let local = round_whole(rec.import_price);
        let foreign = safe_convert(local, exchange_rate);
        return (foreign, local);
    }
    if rec.unit_cost > Decimal::ZERO {
        let local = round_whole(rec.unit_cost);
        let foreign = safe_convert(local, exchange_rate);
        return (foreign, local);
    }
    (Decimal::ZERO, Decimal::ZERO)
}

fn safe_convert(local: Decimal, exchange_rate: Decimal) -> Decimal {
    if exchange_rate > Decimal::ZERO {
        round_whole(local / exchange_rate)
    } else {
        Decimal::ZERO
    }
}
