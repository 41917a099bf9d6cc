//! # Restock Core Types
//!
//! This crate defines the shared vocabulary of the Restock system: the three
//! input record types supplied by the tabular data source, and the SKU
//! identity rules (style code, size label, size band) that every layer above
//! agrees on.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate sits at the very bottom of the dependency graph.
//!   It knows nothing about calculation policy, files, or output formats.
//! - **Total functions:** Identity derivation never fails. A SKU that is too
//!   short keeps itself as its style code; a size label that does not parse
//!   simply yields no size. "Insufficient data" is a value, not an error.
//!
//! ## Public API
//!
//! - `Product`, `StockReport`, `StockLedgerEntry`: the input records.
//! - `SizeBand`: the size-range classification vocabulary.
//! - `sku`: style-code / size-label derivation and size parsing.

pub mod enums;
pub mod sku;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::SizeBand;
pub use sku::{parse_size_label, size_label_from_sku, style_code_from_sku};
pub use structs::{Product, StockLedgerEntry, StockReport};
