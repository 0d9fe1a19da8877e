//! Pattern-count merging and the bounded adjustment rollup.

use std::collections::BTreeMap;

use haven_core::adjustment::Adjustment;
use haven_core::models::{CorrectionFeedbackEntry, CorrectionPattern};

/// Merge a tenant's existing pattern counts with a batch of new entries.
///
/// Keyed by the ordered (original, corrected) pair: each new entry
/// increments its pattern's count; unseen pairs start at 1. Every
/// pattern's adjustment is recomputed from its merged count, never
/// accumulated, so the result depends only on the counts.
pub fn merge_patterns(
    existing: &[CorrectionPattern],
    entries: &[CorrectionFeedbackEntry],
) -> Vec<CorrectionPattern> {
    let mut counts: BTreeMap<(String, String), u64> = BTreeMap::new();
    for pattern in existing {
        counts.insert(
            (
                pattern.original_category.clone(),
                pattern.corrected_category.clone(),
            ),
            pattern.count,
        );
    }
    for entry in entries {
        *counts
            .entry((
                entry.original_category.clone(),
                entry.corrected_category.clone(),
            ))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((original, corrected), count)| CorrectionPattern {
            original_category: original,
            corrected_category: corrected,
            count,
            adjustment: Adjustment::from_correction_count(count),
        })
        .collect()
}

/// Roll per-pattern adjustments up into one adjustment per original
/// category, clamping the sum to the adjustment bounds.
pub fn rollup_category_adjustments(
    patterns: &[CorrectionPattern],
) -> BTreeMap<String, Adjustment> {
    let mut sums: BTreeMap<String, i64> = BTreeMap::new();
    for pattern in patterns {
        *sums.entry(pattern.original_category.clone()).or_insert(0) +=
            i64::from(pattern.adjustment.value());
    }
    sums.into_iter()
        .map(|(category, sum)| {
            let clamped = sum.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            (category, Adjustment::new(clamped))
        })
        .collect()
}

/// Merge newly computed category adjustments over the prior ledger's.
///
/// New values replace old ones because the pattern counts behind them
/// already include all prior history; categories absent from the new
/// computation keep their prior value (re-clamped on decode).
pub fn merge_category_adjustments(
    prior: &BTreeMap<String, Adjustment>,
    computed: BTreeMap<String, Adjustment>,
) -> BTreeMap<String, Adjustment> {
    let mut merged = prior.clone();
    for (category, adjustment) in computed {
        merged.insert(category, adjustment);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(original: &str, corrected: &str) -> CorrectionFeedbackEntry {
        CorrectionFeedbackEntry {
            id: "fb".into(),
            tenant_id: "family-a".into(),
            original_category: original.into(),
            corrected_category: corrected.into(),
            processed: false,
            processed_at: None,
            created_at: Utc::now(),
        }
    }

    fn pattern(original: &str, corrected: &str, count: u64) -> CorrectionPattern {
        CorrectionPattern {
            original_category: original.into(),
            corrected_category: corrected.into(),
            count,
            adjustment: Adjustment::from_correction_count(count),
        }
    }

    #[test]
    fn new_pairs_start_at_one() {
        let merged = merge_patterns(&[], &[entry("violence", "none")]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].count, 1);
        assert_eq!(merged[0].adjustment.value(), -5);
    }

    #[test]
    fn existing_counts_accumulate() {
        let merged = merge_patterns(
            &[pattern("violence", "none", 2)],
            &[entry("violence", "none"), entry("violence", "none")],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].count, 4);
        assert_eq!(merged[0].adjustment.value(), -20);
    }

    #[test]
    fn pair_identity_is_ordered() {
        let merged = merge_patterns(
            &[],
            &[entry("violence", "none"), entry("none", "violence")],
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn adjustment_floors_at_minus_fifty() {
        let merged = merge_patterns(&[pattern("violence", "none", 11)], &[entry("violence", "none")]);
        assert_eq!(merged[0].count, 12);
        assert_eq!(merged[0].adjustment.value(), -50);
    }

    #[test]
    fn rollup_sums_by_original_category() {
        let patterns = vec![
            pattern("violence", "none", 2),
            pattern("violence", "language", 3),
            pattern("drugs", "none", 1),
        ];
        let rollup = rollup_category_adjustments(&patterns);
        assert_eq!(rollup["violence"].value(), -25);
        assert_eq!(rollup["drugs"].value(), -5);
    }

    #[test]
    fn rollup_clamps_summed_categories() {
        let patterns = vec![
            pattern("violence", "none", 8),
            pattern("violence", "language", 8),
        ];
        // -40 + -40 clamps to the floor.
        let rollup = rollup_category_adjustments(&patterns);
        assert_eq!(rollup["violence"].value(), -50);
    }

    #[test]
    fn merge_replaces_recomputed_and_keeps_the_rest() {
        let mut prior = BTreeMap::new();
        prior.insert("violence".to_string(), Adjustment::new(-10));
        prior.insert("drugs".to_string(), Adjustment::new(-20));

        let mut computed = BTreeMap::new();
        computed.insert("violence".to_string(), Adjustment::new(-25));

        let merged = merge_category_adjustments(&prior, computed);
        assert_eq!(merged["violence"].value(), -25);
        assert_eq!(merged["drugs"].value(), -20);
    }
}
