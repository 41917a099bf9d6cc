//! The generic replenishment report: one header row, one row per
//! recommendation, nothing fancy. The widths keep the image link column
//! readable in a spreadsheet viewer.

use engine::ReorderRecommendation;

use crate::layout::{two_decimals, Cell, SheetLayout};

const HEADERS: [&str; 11] = [
    "SKU",
    "Style code",
    "Size",
    "Current stock",
    "Incoming stock",
    "Minimum stock",
    "Exported",
    "Sell rate",
    "Needed",
    "Import price",
    "Image",
];

const COLUMN_WIDTHS: [u16; 11] = [20, 20, 10, 15, 15, 15, 15, 12, 12, 15, 50];

/// Builds the generic replenishment report sheet.
pub fn build_report_sheet(recommendations: &[ReorderRecommendation]) -> SheetLayout {
    let mut layout = SheetLayout::new("Replenishment Report");
    layout.column_widths = COLUMN_WIDTHS.to_vec();
    layout.push_row(HEADERS.iter().map(|header| Cell::from(*header)).collect());

    for rec in recommendations {
        layout.push_row(vec![
            Cell::from(rec.sku.clone()),
            Cell::from(rec.style_code.clone()),
            Cell::from(rec.size_label.clone()),
            Cell::from(rec.current_stock),
            Cell::from(rec.incoming_stock),
            Cell::from(rec.min_stock_effective),
            Cell::from(rec.export_quantity),
            Cell::from(two_decimals(rec.sell_rate)),
            Cell::from(rec.needed_quantity),
            Cell::from(rec.import_price),
            Cell::from(rec.image_ref.clone()),
        ]);
    }

    layout
}
