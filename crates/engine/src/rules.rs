//! The per-SKU reorder rule engine.
//!
//! Dispatches each managed product into its size band and produces the
//! band-adjusted minimum-stock target, the needed quantity and a rationale
//! trace of the branch that fired. Sizes outside both bands, unparsable
//! sizes and non-positive needs all yield no outcome — valid non-events.

use configuration::ReplenishmentPolicy;
use core_types::{parse_size_label, Product, SizeBand, StockReport};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::LedgerDigest;

/// What the rule engine decided for one SKU.
#[derive(Debug, Clone)]
pub(crate) struct RuleOutcome {
    pub min_stock_effective: i64,
    pub needed_quantity: Decimal,
    /// Trailing export total of the whole style, backing the sell rate.
    pub style_export: i64,
    pub sell_rate: Decimal,
    pub rationale: String,
}

/// Applies the size-band policy to one product.
///
/// The caller has already established that the product is managed
/// (`min_stock > 0`) and that a stock report exists. Returns `Some` only
/// when the needed quantity is strictly positive.
pub(crate) fn evaluate_product(
    policy: &ReplenishmentPolicy,
    product: &Product,
    report: &StockReport,
    digest: &LedgerDigest,
) -> Option<RuleOutcome> {
    let style_export = digest.style_export(&product.style_code);
    let sell_rate = sell_rate(style_export, policy.observation_window_days);

    let size = parse_size_label(&product.size_label)?;
    let band = policy.bands.band_of(size)?;

    let (min_stock_effective, rationale) = match band {
        SizeBand::Female => female_band_target(policy, product, digest),
        SizeBand::Male => male_band_target(policy, product, report, size, sell_rate)?,
    };

    let needed_quantity = Decimal::from(min_stock_effective)
        - Decimal::from(report.current_stock)
        - report.incoming_stock;

    if needed_quantity <= Decimal::ZERO {
        tracing::debug!(
            "sku {}: target {} already covered (needed {})",
            product.sku,
            min_stock_effective,
            needed_quantity
        );
        return None;
    }

    let rationale = format!(
        "{rationale}\nNeeded = {min_stock_effective} - {} - {} = {needed_quantity}.",
        report.current_stock, report.incoming_stock
    );

    Some(RuleOutcome {
        min_stock_effective,
        needed_quantity,
        style_export,
        sell_rate,
        rationale,
    })
}

/// Trailing style export divided by the observation window. The window is
/// fixed policy (nominally 30 days) regardless of the actual data span;
/// a zero-day window is rejected at configuration load, but the division
/// stays total anyway.
fn sell_rate(style_export: i64, window_days: u32) -> Decimal {
    if window_days == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(style_export) / Decimal::from(window_days)
}

/// Female band: demand-driven minimum, no sell-rate gating.
///
/// A SKU that exported nothing keeps one display pair; otherwise the
/// minimum follows the trailing SKU export, capped.
fn female_band_target(
    policy: &ReplenishmentPolicy,
    product: &Product,
    digest: &LedgerDigest,
) -> (i64, String) {
    let sku_export = digest.sku_export(&product.sku);
    let min_stock = if sku_export == 0 {
        policy.female.sample_min_stock
    } else {
        sku_export.min(policy.female.max_min_stock)
    };

    tracing::debug!(
        "sku {}: female band, sku export {} => minimum {}",
        product.sku,
        sku_export,
        min_stock
    );

    let rationale = format!(
        "Female band ({}-{}): demand-driven minimum stock.\n\
         {}-day SKU export = {sku_export} pairs => minimum stock = {min_stock} pairs.",
        policy.bands.female_min, policy.bands.female_max, policy.observation_window_days
    );
    (min_stock, rationale)
}

/// Male band: two mutually exclusive cases gated by sell rate and current
/// stock. Returns `None` when neither case holds — the target stays at the
/// configured minimum and no reorder is suggested.
fn male_band_target(
    policy: &ReplenishmentPolicy,
    product: &Product,
    report: &StockReport,
    size: i64,
    sell_rate: Decimal,
) -> Option<(i64, String)> {
    let male = &policy.male;
    let slow = sell_rate < policy.sell_rate_threshold
        && report.current_stock < male.slow_max_current_stock;

    if slow {
        let min_stock = male
            .slow_size_min_stocks
            .get(size.to_string().as_str())
            .copied()
            .unwrap_or(product.min_stock);

        tracing::debug!(
            "sku {}: male band slow-moving, size {} => minimum {}",
            product.sku,
            size,
            min_stock
        );

        let rationale = format!(
            "Male band, slow-moving: sell rate {} < {}.\n\
             Per-size minimum for size {size} = {min_stock}.",
            format_rate(sell_rate),
            policy.sell_rate_threshold
        );
        return Some((min_stock, rationale));
    }

    let stock_gate = male.fast_gate_base + male.rate_factor * sell_rate;
    let fast = sell_rate >= policy.sell_rate_threshold
        && Decimal::from(report.current_stock) < stock_gate;

    if fast {
        let ideal_total = male.fast_base_target + male.rate_factor * sell_rate;
        let base_stock = round_half_up(ideal_total * male.allocation_fraction);
        let edge_stock = (base_stock - male.edge_discount).max(0);
        // Surplus above the edge cap goes back to the core sizes. Each core
        // size receives the full surplus, not a third of it — observed
        // behavior of the production rule, pinned by test below.
        let excess = (edge_stock - male.max_edge_stock).max(0);
        let edge_stock = edge_stock.min(male.max_edge_stock);

        let (min_stock, tier) = if male.core_sizes.contains(&size) {
            (base_stock + excess, "core")
        } else if male.edge_sizes.contains(&size) {
            (edge_stock, "edge")
        } else {
            (product.min_stock, "unallocated")
        };

        tracing::debug!(
            "sku {}: male band fast-moving, size {} ({}) => minimum {}",
            product.sku,
            size,
            tier,
            min_stock
        );

        let redistribution_note = if excess > 0 {
            " (edge cap applied, surplus redistributed)"
        } else {
            ""
        };
        let rationale = format!(
            "Male band, fast-moving: sell rate {rate} >= {threshold}.\n\
             Ideal size-run total = {base} + {factor} * {rate} = {ideal}.\n\
             Size {size} allocated {min_stock} pairs ({tier} size){redistribution_note}.",
            rate = format_rate(sell_rate),
            threshold = policy.sell_rate_threshold,
            base = male.fast_base_target,
            factor = male.rate_factor,
            ideal = format_rate(ideal_total),
        );
        return Some((min_stock, rationale));
    }

    tracing::debug!(
        "sku {}: male band, neither slow nor fast case holds (rate {}, current {})",
        product.sku,
        sell_rate,
        report.current_stock
    );
    None
}

/// Standard round-half-up to a whole number of pairs.
fn round_half_up(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Two-decimal display form for sell rates and totals in rationales.
fn format_rate(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
