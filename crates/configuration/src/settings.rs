use std::collections::BTreeMap;

use core_types::SizeBand;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root policy structure for the replenishment calculation.
///
/// Every numeric constant of the rule set lives here as named configuration,
/// so the engine stays pure and testable with alternate policy values. The
/// defaults are the canonical production rule set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplenishmentPolicy {
    /// Length of the trailing sales window the ledger covers, in days.
    /// The sell rate is always `style export / observation_window_days`,
    /// regardless of the actual data span.
    pub observation_window_days: u32,
    /// Sell rate (pairs/day) at which a style counts as fast-moving.
    pub sell_rate_threshold: Decimal,
    pub bands: SizeBands,
    pub female: FemaleBandPolicy,
    pub male: MaleBandPolicy,
    pub thresholds: StyleThresholds,
}

/// The numeric boundaries of the two size bands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SizeBands {
    pub female_min: i64,
    pub female_max: i64,
    pub male_min: i64,
    pub male_max: i64,
}

impl SizeBands {
    /// Classifies a parsed size. Sizes outside both bands yield `None` and
    /// never produce a recommendation.
    pub fn band_of(&self, size: i64) -> Option<SizeBand> {
        if size >= self.female_min && size <= self.female_max {
            Some(SizeBand::Female)
        } else if size >= self.male_min && size <= self.male_max {
            Some(SizeBand::Male)
        } else {
            None
        }
    }
}

/// Parameters for the demand-driven female band rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FemaleBandPolicy {
    /// Minimum kept when a SKU had no exports at all: one display pair.
    pub sample_min_stock: i64,
    /// Cap on the demand-driven minimum.
    pub max_min_stock: i64,
}

/// Parameters for the sell-rate-gated male band rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MaleBandPolicy {
    /// Slow-moving case applies only below this current-stock level.
    pub slow_max_current_stock: i64,
    /// Fixed per-size minimums for the slow-moving case, keyed by size
    /// label. Sizes missing from the table fall back to the product's
    /// configured minimum.
    pub slow_size_min_stocks: BTreeMap<String, i64>,
    /// Base of the fast-moving stock gate: applies while
    /// `current < fast_gate_base + rate_factor * sell_rate`.
    pub fast_gate_base: Decimal,
    /// Base of the ideal size-run total: `fast_base_target + rate_factor *
    /// sell_rate`.
    pub fast_base_target: Decimal,
    /// Multiplier applied to the sell rate in both formulas above.
    pub rate_factor: Decimal,
    /// Fraction of the ideal total allocated to a single size.
    pub allocation_fraction: Decimal,
    /// How many pairs fewer an edge size gets than a core size.
    pub edge_discount: i64,
    /// Hard cap on the edge-size allocation; the clamped surplus is
    /// redistributed to the core sizes.
    pub max_edge_stock: i64,
    /// The prioritized middle of the size run.
    pub core_sizes: Vec<i64>,
    /// The outermost sizes of the run, stocked lighter.
    pub edge_sizes: Vec<i64>,
}

/// Per-style minimum-order thresholds by gender composition.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleThresholds {
    /// Applied to pure-male and unisex styles.
    pub male: i64,
    /// Applied to pure-female styles, which get the lower bar.
    pub female: i64,
}

impl Default for ReplenishmentPolicy {
    fn default() -> Self {
        Self {
            observation_window_days: 30,
            sell_rate_threshold: dec!(0.4),
            bands: SizeBands::default(),
            female: FemaleBandPolicy::default(),
            male: MaleBandPolicy::default(),
            thresholds: StyleThresholds::default(),
        }
    }
}

impl Default for SizeBands {
    fn default() -> Self {
        Self {
            female_min: 36,
            female_max: 39,
            male_min: 40,
            male_max: 45,
        }
    }
}

impl Default for FemaleBandPolicy {
    fn default() -> Self {
        Self {
            sample_min_stock: 1,
            max_min_stock: 8,
        }
    }
}

impl Default for MaleBandPolicy {
    fn default() -> Self {
        Self {
            slow_max_current_stock: 13,
            slow_size_min_stocks: BTreeMap::from([
                ("40".to_string(), 3),
                ("41".to_string(), 5),
                ("42".to_string(), 5),
                ("43".to_string(), 5),
                ("44".to_string(), 3),
                ("45".to_string(), 2),
            ]),
            fast_gate_base: dec!(12),
            fast_base_target: dec!(24),
            rate_factor: dec!(10),
            allocation_fraction: dec!(0.2058),
            edge_discount: 2,
            max_edge_stock: 4,
            core_sizes: vec![41, 42, 43],
            edge_sizes: vec![40, 44, 45],
        }
    }
}

impl Default for StyleThresholds {
    fn default() -> Self {
        Self { male: 12, female: 8 }
    }
}
