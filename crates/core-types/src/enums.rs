use serde::{Deserialize, Serialize};

/// The size band a numeric shoe size falls into.
///
/// The numeric boundaries of each band are policy, not vocabulary — they live
/// in the `configuration` crate. This enum only names the two bands so the
/// rule engine and the style classifier can agree on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeBand {
    /// The women's size run (nominally 36–39). Demand-driven minimums.
    Female,
    /// The men's size run (nominally 40–45). Sell-rate-gated minimums.
    Male,
}
