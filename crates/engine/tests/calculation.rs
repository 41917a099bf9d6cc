//! End-to-end tests of the replenishment calculation.
//!
//! Validates that:
//! 1. The full pipeline (ledger fold, rule dispatch, style threshold,
//!    assembly) produces the expected recommendations and totals
//! 2. Missing inputs fail fast with a single signal
//! 3. The calculation is deterministic and invariant under input reordering
//! 4. Style groups survive or fall as a whole
//! 5. Only sizes inside the two bands ever appear in the output

use configuration::ReplenishmentPolicy;
use core_types::{parse_size_label, Product, StockLedgerEntry, StockReport};
use engine::{CalculationRequest, EngineError, ReplenishmentEngine};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn product(sku: &str, min_stock: i64, unit_cost: Decimal, import_price: Decimal) -> Product {
    Product::from_sku(sku, min_stock, unit_cost, import_price, "")
}

fn stock(sku: &str, current: i64, incoming: Decimal) -> StockReport {
    StockReport {
        sku: sku.to_string(),
        current_stock: current,
        incoming_stock: incoming,
    }
}

fn ledger(sku: &str, style: &str, quantity: i64) -> StockLedgerEntry {
    StockLedgerEntry {
        sku: sku.to_string(),
        style_code: style.to_string(),
        export_quantity: quantity,
    }
}

/// A mixed catalog: one fast-moving male style that clears its threshold,
/// one small female style that does not, one female style that does, plus
/// an unmanaged SKU and a SKU without a stock report.
fn fixture() -> CalculationRequest {
    let products = vec![
        product("ALPHA-41", 5, dec!(200000), dec!(60)),
        product("ALPHA-42", 5, dec!(200000), dec!(60)),
        product("ALPHA-43", 5, dec!(200000), dec!(60)),
        product("BETA-37", 3, dec!(0), dec!(40)),
        product("BETA-38", 3, dec!(0), dec!(40)),
        product("GAMMA-37", 3, dec!(0), dec!(50)),
        product("GAMMA-38", 3, dec!(0), dec!(50)),
        // Unmanaged: configured minimum of zero opts the SKU out.
        product("OMEGA-44", 0, dec!(0), dec!(0)),
        // No stock report uploaded for this one.
        product("DELTA-41", 5, dec!(0), dec!(0)),
    ];
    let stock_reports = vec![
        stock("ALPHA-41", 1, dec!(0)),
        stock("ALPHA-42", 0, dec!(0)),
        stock("ALPHA-43", 2, dec!(0)),
        stock("BETA-37", 0, dec!(0)),
        stock("BETA-38", 0, dec!(0)),
        stock("GAMMA-37", 0, dec!(0)),
        stock("GAMMA-38", 0, dec!(0)),
        stock("OMEGA-44", 0, dec!(0)),
    ];
    let stock_ledgers = vec![
        // ALPHA exported 15 pairs in the window: sell rate 0.5, fast-moving.
        ledger("ALPHA-41", "", 9),
        ledger("ALPHA-42", "ALPHA", 6),
        ledger("BETA-38", "", 4),
        ledger("GAMMA-37", "", 5),
        ledger("GAMMA-38", "", 4),
    ];
    CalculationRequest::new(products, stock_reports, stock_ledgers)
}

fn engine_under_test() -> ReplenishmentEngine {
    ReplenishmentEngine::new(ReplenishmentPolicy::default())
}

#[test]
fn full_pipeline_produces_expected_recommendations() {
    let report = engine_under_test()
        .calculate(fixture())
        .expect("complete request must calculate");

    let lines: Vec<(&str, Decimal)> = report
        .recommendations
        .iter()
        .map(|rec| (rec.sku.as_str(), rec.needed_quantity))
        .collect();

    // ALPHA is fast-moving (rate 0.5): core sizes get round(29 * 0.2058) = 6
    // each. BETA's total of 5 misses the female threshold of 8 and the whole
    // style is dropped. GAMMA's total of 9 clears it.
    assert_eq!(
        lines,
        vec![
            ("ALPHA-41", dec!(5)),
            ("ALPHA-42", dec!(6)),
            ("ALPHA-43", dec!(4)),
            ("GAMMA-37", dec!(5)),
            ("GAMMA-38", dec!(4)),
        ]
    );

    assert_eq!(report.summary.count, 5);
    assert_eq!(report.summary.total_quantity, dec!(24));
    // ALPHA values at the local cost, GAMMA falls back to the import price.
    assert_eq!(
        report.summary.total_value,
        dec!(15) * dec!(200000) + dec!(9) * dec!(50)
    );

    for rec in &report.recommendations {
        assert!(
            rec.rationale.contains("Needed ="),
            "rationale of {} must trace the arithmetic",
            rec.sku
        );
    }
}

#[test]
fn missing_inputs_fail_fast() {
    let engine = ReplenishmentEngine::default();

    let mut no_stock = fixture();
    no_stock.stock_reports = None;
    match engine.calculate(no_stock) {
        Err(EngineError::MissingInput(name)) => assert_eq!(name, "stockReports"),
        other => panic!("expected missing-input failure, got {other:?}"),
    }

    let mut no_products = fixture();
    no_products.products = None;
    assert!(matches!(
        engine.calculate(no_products),
        Err(EngineError::MissingInput("products"))
    ));

    let mut no_ledgers = fixture();
    no_ledgers.stock_ledgers = None;
    assert!(matches!(
        engine.calculate(no_ledgers),
        Err(EngineError::MissingInput("stockLedgers"))
    ));
}

#[test]
fn json_request_matches_the_boundary_contract() {
    // The request shape used by callers posting JSON: camelCase keys, each
    // list optional. A body without stockLedgers must fail the contract.
    let body = r#"{
        "products": [],
        "stockReports": []
    }"#;
    let request: CalculationRequest =
        serde_json::from_str(body).expect("request body must deserialize");
    assert!(matches!(
        engine_under_test().calculate(request),
        Err(EngineError::MissingInput("stockLedgers"))
    ));
}

#[test]
fn repeated_invocations_are_deterministic() {
    let engine = engine_under_test();
    let first = engine.calculate(fixture()).expect("calculates");
    let second = engine.calculate(fixture()).expect("calculates");
    assert_eq!(first, second);
}

#[test]
fn reordering_inputs_changes_nothing_but_order() {
    let engine = engine_under_test();
    let baseline = engine.calculate(fixture()).expect("calculates");

    let mut shuffled = fixture();
    if let Some(products) = shuffled.products.as_mut() {
        products.reverse();
    }
    if let Some(ledgers) = shuffled.stock_ledgers.as_mut() {
        ledgers.reverse();
    }
    let reordered = engine.calculate(shuffled).expect("calculates");

    let mut baseline_lines: Vec<(String, Decimal)> = baseline
        .recommendations
        .iter()
        .map(|rec| (rec.sku.clone(), rec.needed_quantity))
        .collect();
    let mut reordered_lines: Vec<(String, Decimal)> = reordered
        .recommendations
        .iter()
        .map(|rec| (rec.sku.clone(), rec.needed_quantity))
        .collect();
    baseline_lines.sort();
    reordered_lines.sort();

    assert_eq!(baseline_lines, reordered_lines);
    assert_eq!(baseline.summary, reordered.summary);
}

#[test]
fn style_groups_are_atomic() {
    let report = engine_under_test()
        .calculate(fixture())
        .expect("calculates");

    // Every style either contributes all of its per-SKU candidates or none.
    // BETA had two candidates (sizes 37 and 38) and must be entirely absent.
    assert!(report
        .recommendations
        .iter()
        .all(|rec| rec.style_code != "BETA"));

    let alpha_count = report
        .recommendations
        .iter()
        .filter(|rec| rec.style_code == "ALPHA")
        .count();
    assert_eq!(alpha_count, 3);
}

#[test]
fn only_banded_sizes_ever_appear() {
    // Add out-of-band and malformed sizes to a style that clears its
    // threshold; none of them may surface in the output.
    let mut request = fixture();
    if let Some(products) = request.products.as_mut() {
        products.push(product("ALPHA-35", 5, dec!(0), dec!(0)));
        products.push(product("ALPHA-46", 5, dec!(0), dec!(0)));
        products.push(product("ALPHAXXL", 5, dec!(0), dec!(0)));
    }
    if let Some(reports) = request.stock_reports.as_mut() {
        reports.push(stock("ALPHA-35", 0, dec!(0)));
        reports.push(stock("ALPHA-46", 0, dec!(0)));
        reports.push(stock("ALPHAXXL", 0, dec!(0)));
    }

    let report = engine_under_test().calculate(request).expect("calculates");
    assert!(!report.recommendations.is_empty());
    for rec in &report.recommendations {
        let size = parse_size_label(&rec.size_label).expect("emitted sizes always parse");
        assert!(
            (36..=39).contains(&size) || (40..=45).contains(&size),
            "size {size} of {} is outside both bands",
            rec.sku
        );
        assert!(rec.needed_quantity > dec!(0));
    }
}
