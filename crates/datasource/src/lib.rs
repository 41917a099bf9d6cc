//! # Restock Tabular Data Source
//!
//! The collaborator that feeds the engine: reads the three delimited-text
//! inputs (product master, stock report, export ledger) into uniform record
//! lists. It assumes canonical headers — mapping arbitrary vendor layouts
//! onto them is the exporting side's concern — and degrades gracefully at
//! the row level, because the engine treats missing data as "no decision",
//! not as failure.

// Declare the modules that make up this crate.
pub mod error;
pub mod reader;

// Re-export the core types to provide a clean public API.
pub use error::SourceError;
pub use reader::{read_ledger_entries, read_products, read_stock_reports};
