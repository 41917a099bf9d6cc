use std::collections::HashMap;

use core_types::{style_code_from_sku, StockLedgerEntry};

/// Trailing export totals folded out of the raw stock ledger.
///
/// Two lookups are kept: by style code (drives the male-band sell rate) and
/// by exact SKU (drives the female-band demand minimum). The fold is
/// commutative and associative — entry order never changes the digest.
#[derive(Debug, Clone, Default)]
pub struct LedgerDigest {
    export_by_style: HashMap<String, i64>,
    export_by_sku: HashMap<String, i64>,
}

impl LedgerDigest {
    /// Folds the ledger entries into the two lookups.
    ///
    /// The style key is the entry's explicit style code when non-empty,
    /// otherwise it is derived from the SKU. Entries whose derived key is
    /// empty are dropped; duplicate keys accumulate silently.
    pub fn aggregate(entries: &[StockLedgerEntry]) -> Self {
        let mut digest = Self::default();

        for entry in entries {
            let style_key = if entry.style_code.is_empty() {
                style_code_from_sku(&entry.sku)
            } else {
                entry.style_code.clone()
            };
            if !style_key.is_empty() {
                *digest.export_by_style.entry(style_key).or_insert(0) += entry.export_quantity;
            }

            if !entry.sku.is_empty() {
                *digest.export_by_sku.entry(entry.sku.clone()).or_insert(0) +=
                    entry.export_quantity;
            }
        }

        digest
    }

    /// Total trailing export for a style code, zero when unseen.
    pub fn style_export(&self, style_code: &str) -> i64 {
        self.export_by_style.get(style_code).copied().unwrap_or(0)
    }

    /// Total trailing export for an exact SKU, zero when unseen.
    pub fn sku_export(&self, sku: &str) -> i64 {
        self.export_by_sku.get(sku).copied().unwrap_or(0)
    }

    /// Number of distinct style keys seen.
    pub fn style_count(&self) -> usize {
        self.export_by_style.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sku: &str, style: &str, quantity: i64) -> StockLedgerEntry {
        StockLedgerEntry {
            sku: sku.to_string(),
            style_code: style.to_string(),
            export_quantity: quantity,
        }
    }

    #[test]
    fn quantities_accumulate_per_key() {
        let digest = LedgerDigest::aggregate(&[
            entry("BOOT-41", "BOOT", 3),
            entry("BOOT-42", "BOOT", 4),
            entry("BOOT-41", "BOOT", 2),
        ]);
        assert_eq!(digest.style_export("BOOT"), 9);
        assert_eq!(digest.sku_export("BOOT-41"), 5);
        assert_eq!(digest.sku_export("BOOT-42"), 4);
    }

    #[test]
    fn style_key_falls_back_to_sku_derivation() {
        let digest = LedgerDigest::aggregate(&[entry("BOOT-41", "", 7)]);
        assert_eq!(digest.style_export("BOOT"), 7);
    }

    #[test]
    fn short_sku_is_its_own_style_key() {
        let digest = LedgerDigest::aggregate(&[entry("ABC", "", 2)]);
        assert_eq!(digest.style_export("ABC"), 2);
    }

    #[test]
    fn empty_keys_are_dropped() {
        let digest = LedgerDigest::aggregate(&[entry("", "", 5)]);
        assert_eq!(digest.style_count(), 0);
        assert_eq!(digest.sku_export(""), 0);
    }

    #[test]
    fn fold_is_order_independent() {
        let entries = vec![
            entry("BOOT-41", "", 3),
            entry("BOOT-44", "BOOT", 1),
            entry("PUMP-37", "", 6),
            entry("BOOT-41", "", 2),
        ];
        let forward = LedgerDigest::aggregate(&entries);
        let mut reversed = entries;
        reversed.reverse();
        let backward = LedgerDigest::aggregate(&reversed);

        assert_eq!(forward.style_export("BOOT"), backward.style_export("BOOT"));
        assert_eq!(forward.style_export("PUMP"), backward.style_export("PUMP"));
        assert_eq!(forward.sku_export("BOOT-41"), backward.sku_export("BOOT-41"));
    }
}
