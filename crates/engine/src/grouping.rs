//! Style-level aggregation and the minimum-order threshold filter.
//!
//! Per-SKU recommendations only survive as whole styles: a style's total
//! need must clear a gender-dependent threshold, or every one of its SKUs
//! is dropped. The gender classification is derived from member sizes alone
//! (the records carry no explicit gender) and is kept in one place so the
//! size-to-tier mapping can be revisited without touching the mechanics.

use std::collections::HashMap;

use configuration::{ReplenishmentPolicy, SizeBands, StyleThresholds};
use core_types::{parse_size_label, SizeBand};
use rust_decimal::Decimal;

use crate::report::ReorderRecommendation;

/// The gender composition of one style group, derived from member sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GenderMix {
    pub has_female: bool,
    pub has_male: bool,
}

impl GenderMix {
    pub fn is_unisex(self) -> bool {
        self.has_female && self.has_male
    }
}

/// Applies the all-or-nothing style threshold.
///
/// Groups keep first-seen order and members keep their original order, so a
/// run's output order is stable.
pub(crate) fn apply_style_threshold(
    policy: &ReplenishmentPolicy,
    recommendations: Vec<ReorderRecommendation>,
) -> Vec<ReorderRecommendation> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<ReorderRecommendation>> = HashMap::new();
    for recommendation in recommendations {
        let group = groups.entry(recommendation.style_code.clone()).or_default();
        if group.is_empty() {
            order.push(recommendation.style_code.clone());
        }
        group.push(recommendation);
    }

    let mut kept = Vec::new();
    for style_code in order {
        let Some(group) = groups.remove(&style_code) else {
            continue;
        };
        let total_needed: Decimal = group.iter().map(|rec| rec.needed_quantity).sum();
        let mix = classify_group(&policy.bands, &group);
        let threshold = Decimal::from(threshold_for(&policy.thresholds, mix));

        // Strict inequality: a total exactly at the threshold is excluded.
        if total_needed > threshold {
            kept.extend(group);
        } else {
            tracing::debug!(
                "style {}: total needed {} under threshold {}, dropping group",
                style_code,
                total_needed,
                threshold
            );
        }
    }
    kept
}

/// Derives the gender composition of a group from its members' parsed sizes.
pub(crate) fn classify_group(
    bands: &SizeBands,
    group: &[ReorderRecommendation],
) -> GenderMix {
    let mut mix = GenderMix {
        has_female: false,
        has_male: false,
    };
    for recommendation in group {
        match parse_size_label(&recommendation.size_label).and_then(|size| bands.band_of(size)) {
            Some(SizeBand::Female) => mix.has_female = true,
            Some(SizeBand::Male) => mix.has_male = true,
            None => {}
        }
    }
    mix
}

/// Unisex and pure-male styles use the higher bar; pure-female styles the
/// lower one.
pub(crate) fn threshold_for(thresholds: &StyleThresholds, mix: GenderMix) -> i64 {
    if mix.is_unisex() || !mix.has_female {
        thresholds.male
    } else {
        thresholds.female
    }
}
