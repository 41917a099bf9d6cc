use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use configuration::ReplenishmentPolicy;
use datasource::SourceError;
use engine::{CalculationRequest, ReorderReport, ReplenishmentEngine};
use export::PurchaseOrderHeader;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Restock replenishment tool.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Calculate(args) => handle_calculate(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Inventory replenishment calculator for a shoe retailer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute reorder recommendations from the three tabular inputs.
    Calculate(CalculateArgs),
}

#[derive(Parser)]
struct CalculateArgs {
    /// Product master CSV.
    #[arg(long)]
    products: Option<PathBuf>,

    /// Current stock report CSV.
    #[arg(long)]
    stock: Option<PathBuf>,

    /// Export/sales ledger CSV.
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// A single JSON request body carrying all three lists, instead of CSVs.
    #[arg(long, conflicts_with_all = ["products", "stock", "ledger"])]
    request: Option<PathBuf>,

    /// Policy file overriding the canonical rule constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Export sheets to write alongside the terminal output.
    #[arg(long, value_enum)]
    export: Vec<ExportKind>,

    /// Directory the export files are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Local-per-foreign exchange rate for the supplier sheet.
    #[arg(long)]
    exchange_rate: Option<Decimal>,

    /// Order code stamped into the ERP purchase-order template.
    #[arg(long, default_value = "")]
    order_code: String,

    /// Note stamped into the ERP purchase-order template.
    #[arg(long, default_value = "")]
    order_note: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportKind {
    /// The generic replenishment report.
    Report,
    /// The vendor ERP purchase-order import template.
    Erp,
    /// The supplier order sheet with the per-size breakdown.
    Supplier,
}

// ==============================================================================
// Calculate Command Logic
// ==============================================================================

/// Handles the orchestration of one calculation run.
fn handle_calculate(args: CalculateArgs) -> anyhow::Result<()> {
    let policy: ReplenishmentPolicy = configuration::load_policy(args.config.as_deref())
        .context("failed to load the replenishment policy")?;

    let request = build_request(&args)?;
    let engine = ReplenishmentEngine::new(policy);
    let report = engine.calculate(request)?;

    print_report(&report);
    write_exports(&args, &report)?;

    Ok(())
}

/// Assembles the calculation request from either the JSON body or the three
/// CSV files. An input the caller did not supply stays absent, so the
/// engine's own input-contract check reports it.
fn build_request(args: &CalculateArgs) -> anyhow::Result<CalculationRequest> {
    if let Some(path) = &args.request {
        let body = fs::read_to_string(path)
            .with_context(|| format!("failed to read request body {}", path.display()))?;
        return serde_json::from_str(&body)
            .with_context(|| format!("failed to parse request body {}", path.display()));
    }

    Ok(CalculationRequest {
        products: read_optional(args.products.as_deref(), datasource::read_products)?,
        stock_reports: read_optional(args.stock.as_deref(), datasource::read_stock_reports)?,
        stock_ledgers: read_optional(args.ledger.as_deref(), datasource::read_ledger_entries)?,
    })
}

fn read_optional<T>(
    path: Option<&Path>,
    reader: impl FnOnce(&Path) -> Result<Vec<T>, SourceError>,
) -> anyhow::Result<Option<Vec<T>>> {
    Ok(path.map(reader).transpose()?)
}

/// Prints the recommendation table and the run summary.
fn print_report(report: &ReorderReport) {
    let mut table = Table::new();
    table.set_header(vec![
        "SKU", "Size", "Current", "Incoming", "Minimum", "Sell rate", "Needed",
    ]);
    for rec in &report.recommendations {
        table.add_row(vec![
            rec.sku.clone(),
            rec.size_label.clone(),
            rec.current_stock.to_string(),
            rec.incoming_stock.to_string(),
            rec.min_stock_effective.to_string(),
            rec.sell_rate.round_dp(2).to_string(),
            rec.needed_quantity.to_string(),
        ]);
    }
    println!("{table}");
    println!(
        "{} recommendations, {} pairs to order, total value {}",
        report.summary.count, report.summary.total_quantity, report.summary.total_value
    );
}

/// Writes the requested export sheets with dated filenames.
fn write_exports(args: &CalculateArgs, report: &ReorderReport) -> anyhow::Result<()> {
    for kind in &args.export {
        let (layout, prefix) = match kind {
            ExportKind::Report => (
                export::build_report_sheet(&report.recommendations),
                "replenishment_report",
            ),
            ExportKind::Erp => {
                let header = PurchaseOrderHeader {
                    order_code: args.order_code.clone(),
                    note: args.order_note.clone(),
                    ..PurchaseOrderHeader::default()
                };
                (
                    export::build_purchase_order_sheet(&header, &report.recommendations),
                    "purchase_order",
                )
            }
            ExportKind::Supplier => {
                let rate = args
                    .exchange_rate
                    .unwrap_or(export::DEFAULT_EXCHANGE_RATE);
                let rows = export::prepare_supplier_rows(&report.recommendations, rate);
                (export::build_supplier_sheet(&rows), "supplier_order")
            }
        };

        let filename = format!(
            "{prefix}_{}.csv",
            chrono::Local::now().format("%Y-%m-%d")
        );
        let path = args.out_dir.join(filename);
        let file = File::create(&path)
            .with_context(|| format!("failed to create export file {}", path.display()))?;
        export::write_grid_csv(&layout, file)?;

        tracing::info!("wrote {} export to {}", layout.name, path.display());
        println!("Wrote {}", path.display());
    }
    Ok(())
}
