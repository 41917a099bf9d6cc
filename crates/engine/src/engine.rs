use std::collections::HashMap;

use configuration::ReplenishmentPolicy;
use core_types::{Product, StockLedgerEntry, StockReport};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::grouping;
use crate::ledger::LedgerDigest;
use crate::report::{ReorderRecommendation, ReorderReport};
use crate::rules;

/// The three input lists, as they arrive at the boundary.
///
/// Each list is optional so that a deserialized request with a missing key
/// fails the single input-contract check instead of silently computing on
/// partial data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub products: Option<Vec<Product>>,
    pub stock_reports: Option<Vec<StockReport>>,
    pub stock_ledgers: Option<Vec<StockLedgerEntry>>,
}

impl CalculationRequest {
    /// Builds a complete request from the three lists.
    pub fn new(
        products: Vec<Product>,
        stock_reports: Vec<StockReport>,
        stock_ledgers: Vec<StockLedgerEntry>,
    ) -> Self {
        Self {
            products: Some(products),
            stock_reports: Some(stock_reports),
            stock_ledgers: Some(stock_ledgers),
        }
    }
}

/// A stateless calculator for deriving reorder recommendations from the
/// three tabular inputs.
///
/// The engine is bound to a policy at construction and holds no other
/// state; every invocation of [`calculate`](Self::calculate) is independent.
#[derive(Debug, Clone, Default)]
pub struct ReplenishmentEngine {
    policy: ReplenishmentPolicy,
}

impl ReplenishmentEngine {
    /// Creates an engine bound to the given policy.
    pub fn new(policy: ReplenishmentPolicy) -> Self {
        Self { policy }
    }

    /// The policy this engine applies.
    pub fn policy(&self) -> &ReplenishmentPolicy {
        &self.policy
    }

    /// The main entry point for the replenishment calculation.
    ///
    /// # Arguments
    ///
    /// * `request` - The three input lists. Any absent list fails the call.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `ReorderReport`, or
    /// `EngineError::MissingInput` naming the first absent list. Past that
    /// single check the calculation is total: malformed per-record data
    /// degrades to "no recommendation for this item".
    pub fn calculate(&self, request: CalculationRequest) -> Result<ReorderReport, EngineError> {
        let products = request
            .products
            .ok_or(EngineError::MissingInput("products"))?;
        let stock_reports = request
            .stock_reports
            .ok_or(EngineError::MissingInput("stockReports"))?;
        let stock_ledgers = request
            .stock_ledgers
            .ok_or(EngineError::MissingInput("stockLedgers"))?;

        Ok(self.run(&products, &stock_reports, &stock_ledgers))
    }

    /// The pure pipeline: aggregate the ledger, apply the per-SKU rules,
    /// filter by style threshold, assemble the report.
    fn run(
        &self,
        products: &[Product],
        stock_reports: &[StockReport],
        stock_ledgers: &[StockLedgerEntry],
    ) -> ReorderReport {
        let digest = LedgerDigest::aggregate(stock_ledgers);

        // First report per SKU wins; later duplicates are ignored.
        let mut report_by_sku: HashMap<&str, &StockReport> = HashMap::new();
        for stock_report in stock_reports {
            report_by_sku
                .entry(stock_report.sku.as_str())
                .or_insert(stock_report);
        }

        let mut recommendations = Vec::new();
        for product in products {
            // Not managed: the configured minimum opts the SKU out entirely.
            if product.min_stock <= 0 {
                continue;
            }
            // No stock report means no data, and no data means no decision.
            let Some(stock_report) = report_by_sku.get(product.sku.as_str()) else {
                continue;
            };

            if let Some(outcome) =
                rules::evaluate_product(&self.policy, product, stock_report, &digest)
            {
                recommendations.push(ReorderRecommendation {
                    sku: product.sku.clone(),
                    style_code: product.style_code.clone(),
                    size_label: product.size_label.clone(),
                    current_stock: stock_report.current_stock,
                    incoming_stock: stock_report.incoming_stock,
                    min_stock_effective: outcome.min_stock_effective,
                    export_quantity: outcome.style_export,
                    sell_rate: outcome.sell_rate,
                    needed_quantity: outcome.needed_quantity,
                    unit_cost: product.unit_cost,
                    import_price: product.import_price,
                    image_ref: product.image_ref.clone(),
                    rationale: outcome.rationale,
                });
            }
        }

        let per_sku_count = recommendations.len();
        let kept = grouping::apply_style_threshold(&self.policy, recommendations);
        let report = ReorderReport::assemble(kept);

        tracing::info!(
            "calculated {} recommendations from {} products ({} per-SKU candidates, {} styles exported in window)",
            report.summary.count,
            products.len(),
            per_sku_count,
            digest.style_count()
        );

        report
    }
}
