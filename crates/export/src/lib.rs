//! # Restock Export Preparation
//!
//! This crate prepares the calculation output for the downstream report
//! sinks. It owns the *layout contract* — which cell holds what, which
//! header cells merge, how wide the columns are — while the byte-level
//! spreadsheet rendering beyond plain delimited text stays with the sink.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Plumbing:** No decision logic lives here. Every function is
//!   a pure transformation of `ReorderRecommendation` records into rows;
//!   the only I/O is the delimited-text writer at the very edge.
//! - **Sink-side parameters stay sink-side:** the supplier sheet's exchange
//!   rate and pricing cutoff are parameters of this crate, never inputs to
//!   the core calculation.
//!
//! ## Public API
//!
//! - `SheetLayout` / `Cell` / `MergeRange`: the layout contract.
//! - `build_report_sheet`: the generic replenishment report.
//! - `build_purchase_order_sheet`: the vendor ERP import template.
//! - `prepare_supplier_rows` / `build_supplier_sheet`: the supplier order
//!   sheet with its per-size quantity breakdown.
//! - `write_grid_csv`: renders any layout's grid as delimited text.

// Declare the modules that constitute this crate.
pub mod erp;
pub mod error;
pub mod layout;
pub mod spreadsheet;
pub mod supplier;

// Re-export the key components to create a clean, public-facing API.
pub use erp::{build_purchase_order_sheet, PurchaseOrderHeader};
pub use error::ExportError;
pub use layout::{write_grid_csv, Cell, MergeRange, SheetLayout};
pub use spreadsheet::build_report_sheet;
pub use supplier::{
    build_supplier_sheet, prepare_supplier_rows, SupplierRow, DEFAULT_EXCHANGE_RATE, SIZE_RUN,
};
