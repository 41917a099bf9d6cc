use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One reorder line: a SKU whose band-adjusted target exceeds what is on
/// hand plus what is already on the way.
///
/// This struct is the data transfer object for results throughout the
/// system; the export sinks consume it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRecommendation {
    pub sku: String,
    pub style_code: String,
    pub size_label: String,
    pub current_stock: i64,
    pub incoming_stock: Decimal,
    /// The band-adjusted minimum-stock target. May differ from the
    /// configured minimum on the product master.
    pub min_stock_effective: i64,
    /// Trailing export total of the whole style over the observation window.
    pub export_quantity: i64,
    /// Pairs per day: `export_quantity / observation window`.
    pub sell_rate: Decimal,
    /// Target minus current minus incoming. Strictly positive for every
    /// emitted recommendation.
    pub needed_quantity: Decimal,
    pub unit_cost: Decimal,
    pub import_price: Decimal,
    pub image_ref: String,
    /// Human-readable trace of which rule fired and the literal arithmetic.
    /// Required for audit, not just display.
    pub rationale: String,
}

impl ReorderRecommendation {
    /// The unit value used for summary totals: the local-currency cost when
    /// recorded, else the import price.
    pub fn effective_unit_cost(&self) -> Decimal {
        if self.unit_cost > Decimal::ZERO {
            self.unit_cost
        } else {
            self.import_price
        }
    }
}

/// Run-level totals over the final recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSummary {
    pub count: usize,
    pub total_quantity: Decimal,
    pub total_value: Decimal,
}

/// The final output of a calculation: the flattened recommendation list in
/// stable order (style group first-seen, then original per-SKU order) plus
/// its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderReport {
    pub recommendations: Vec<ReorderRecommendation>,
    pub summary: ReorderSummary,
}

impl ReorderReport {
    /// Assembles the report from the recommendations that survived the
    /// style threshold filter.
    pub fn assemble(recommendations: Vec<ReorderRecommendation>) -> Self {
        let total_quantity = recommendations
            .iter()
            .map(|rec| rec.needed_quantity)
            .sum::<Decimal>();
        let total_value = recommendations
            .iter()
            .map(|rec| rec.needed_quantity * rec.effective_unit_cost())
            .sum::<Decimal>();

        Self {
            summary: ReorderSummary {
                count: recommendations.len(),
                total_quantity,
                total_value,
            },
            recommendations,
        }
    }
}
