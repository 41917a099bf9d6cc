//! # Restock Replenishment Engine
//!
//! This crate is the decision core of the Restock system: given the product
//! master, the current stock report and the trailing export ledger, it
//! decides how much of each SKU to reorder and whether a style's accumulated
//! need is large enough to act on.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   files, spreadsheets or output formats. It depends only on `core-types`
//!   and `configuration`.
//! - **Stateless Calculation:** `ReplenishmentEngine` is a stateless
//!   calculator bound to a policy. It takes the three record lists as input
//!   and produces a `ReorderReport` as output; every aggregation map is
//!   local to one call, so invocations are independent and the caller may
//!   run them in parallel.
//! - **Total past the boundary:** the only caller-visible failure is a
//!   missing input list. Everything downstream degrades per record to
//!   "no recommendation" — bad sizes, absent stock reports and negative
//!   needs are valid non-events, never errors.
//!
//! ## Public API
//!
//! - `ReplenishmentEngine`: the calculator, constructed from a policy.
//! - `CalculationRequest`: the three input lists, optional at the boundary.
//! - `ReorderReport` / `ReorderRecommendation` / `ReorderSummary`: the output.
//! - `LedgerDigest`: the aggregated trailing-export lookups.
//! - `EngineError`: the single boundary error.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod grouping;
pub mod ledger;
pub mod report;
pub mod rules;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{CalculationRequest, ReplenishmentEngine};
pub use error::EngineError;
pub use ledger::LedgerDigest;
pub use report::{ReorderRecommendation, ReorderReport, ReorderSummary};
