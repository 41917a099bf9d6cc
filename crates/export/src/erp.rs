//! The vendor ERP purchase-order import template.
//!
//! The ERP imports a fixed positional sheet: three order-header rows, a
//! blank spacer, a merged two-level column header, then one 21-column
//! product row per line. Cell positions, merge ranges and widths are the
//! template contract — the importing side matches on position, not on
//! header text.

use engine::ReorderRecommendation;
use serde::Serialize;

use crate::layout::{Cell, MergeRange, SheetLayout};

/// Width of the template body in columns.
pub const ERP_COLUMN_COUNT: usize = 21;

/// Product-row cell positions within the template.
const COL_SKU: usize = 0;
const COL_BARCODE: usize = 1;
const COL_PRODUCT_NAME: usize = 2;
const COL_QUANTITY: usize = 3;
const COL_UNIT_PRICE: usize = 9;

/// Order-level fields typed into the header rows of the template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PurchaseOrderHeader {
    pub order_code: String,
    pub tags: String,
    pub price_policy_code: String,
    pub note: String,
    pub order_reference: String,
}

/// Builds the ERP purchase-order template for the given recommendations.
pub fn build_purchase_order_sheet(
    header: &PurchaseOrderHeader,
    recommendations: &[ReorderRecommendation],
) -> SheetLayout {
    let mut layout = SheetLayout::new("Sheet1");

    // Rows 0-2: order metadata in fixed cells (values in A and C).
    layout.push_row(row_with(&[
        (0, Cell::from(header.order_code.clone())),
        (2, Cell::from(header.tags.clone())),
    ]));
    layout.push_row(row_with(&[
        (0, Cell::from(header.price_policy_code.clone())),
        (2, Cell::from(header.note.clone())),
    ]));
    layout.push_row(row_with(&[(
        0,
        Cell::from(header.order_reference.clone()),
    )]));

    // Row 3: spacer.
    layout.push_row(row_with(&[]));

    // Row 4: top-level group header.
    layout.push_row(row_with(&[
        (0, Cell::from("Product information")),
        (13, Cell::from("Order-level fees")),
        (15, Cell::from("Order-level discount")),
    ]));

    // Row 5: detail header.
    layout.push_row(row_with(&[
        (0, Cell::from("SKU")),
        (1, Cell::from("Barcode")),
        (2, Cell::from("Product name")),
        (3, Cell::from("Quantity")),
        (4, Cell::from("Lot intake")),
        (8, Cell::from("Serial/IMEI")),
        (9, Cell::from("Unit price")),
        (10, Cell::from("Line discount")),
        (13, Cell::from("Tax (%)")),
        (14, Cell::from("Line note")),
        (15, Cell::from("Fee name")),
        (17, Cell::from("Order discount")),
    ]));

    // Row 6: sub-header under the grouped columns.
    layout.push_row(row_with(&[
        (5, Cell::from("Lot code")),
        (6, Cell::from("Production date")),
        (7, Cell::from("Expiry date")),
        (11, Cell::from("%")),
        (12, Cell::from("Amount")),
        (17, Cell::from("%")),
        (18, Cell::from("Amount")),
    ]));

    // Body: one positional row per recommendation. The ERP carries no
    // separate product-name column, so the style code stands in for both
    // the barcode and the display name.
    for rec in recommendations {
        layout.push_row(row_with(&[
            (COL_SKU, Cell::from(rec.sku.clone())),
            (COL_BARCODE, Cell::from(rec.style_code.clone())),
            (COL_PRODUCT_NAME, Cell::from(rec.style_code.clone())),
            (COL_QUANTITY, Cell::from(rec.needed_quantity)),
            (COL_UNIT_PRICE, Cell::from(rec.import_price)),
        ]));
    }

    layout.merges = vec![
        MergeRange::new(4, 0, 4, 12),
        MergeRange::new(4, 13, 4, 14),
        MergeRange::new(4, 15, 4, 16),
        MergeRange::new(5, 4, 5, 7),
        MergeRange::new(5, 10, 5, 12),
        MergeRange::new(5, 15, 5, 16),
    ];
    layout.column_widths = vec![
        15, 15, 30, 10, 10, 12, 15, 15, 15, 12, 15, 8, 10, 8, 20, 15, 10, 8, 10, 8, 8,
    ];

    layout
}

/// A template-width row with the given cells placed at their positions.
fn row_with(cells: &[(usize, Cell)]) -> Vec<Cell> {
    let mut row = vec![Cell::Empty; ERP_COLUMN_COUNT];
    for (position, cell) in cells {
        row[*position] = cell.clone();
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn recommendation(sku: &str, needed: rust_decimal::Decimal) -> ReorderRecommendation {
        ReorderRecommendation {
            sku: sku.to_string(),
            style_code: "BOOT".to_string(),
            size_label: "41".to_string(),
            current_stock: 0,
            incoming_stock: dec!(0),
            min_stock_effective: 0,
            export_quantity: 0,
            sell_rate: dec!(0),
            needed_quantity: needed,
            unit_cost: dec!(0),
            import_price: dec!(70),
            image_ref: String::new(),
            rationale: String::new(),
        }
    }

    #[test]
    fn template_has_seven_header_rows_then_one_row_per_product() {
        let header = PurchaseOrderHeader {
            order_code: "PO-123".to_string(),
            ..PurchaseOrderHeader::default()
        };
        let layout = build_purchase_order_sheet(
            &header,
            &[
                recommendation("BOOT-41", dec!(5)),
                recommendation("BOOT-42", dec!(6)),
            ],
        );

        assert_eq!(layout.rows.len(), 7 + 2);
        assert_eq!(layout.rows[0][0], Cell::from("PO-123"));
        assert!(layout.rows[3].iter().all(|cell| *cell == Cell::Empty));

        let body = &layout.rows[7];
        assert_eq!(body.len(), ERP_COLUMN_COUNT);
        assert_eq!(body[COL_SKU], Cell::from("BOOT-41"));
        assert_eq!(body[COL_BARCODE], Cell::from("BOOT"));
        assert_eq!(body[COL_QUANTITY], Cell::from(dec!(5)));
        assert_eq!(body[COL_UNIT_PRICE], Cell::from(dec!(70)));
    }

    #[test]
    fn merge_ranges_match_the_template_contract() {
        let layout = build_purchase_order_sheet(&PurchaseOrderHeader::default(), &[]);
        assert_eq!(layout.merges.len(), 6);
        assert!(layout.merges.contains(&MergeRange::new(4, 0, 4, 12)));
        assert!(layout.merges.contains(&MergeRange::new(5, 4, 5, 7)));
        assert_eq!(layout.column_widths.len(), ERP_COLUMN_COUNT);
    }
}
