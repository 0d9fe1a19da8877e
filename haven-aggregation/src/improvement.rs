//! Estimated accuracy-improvement metric.

use haven_core::constants::MAX_ESTIMATED_IMPROVEMENT;

/// Estimate the accuracy improvement (percent) from a period's
/// aggregated corrections.
///
/// Piecewise-linear in the correction volume, with diminishing returns
/// and no underflow near zero:
/// - 0 corrections ⇒ 0.0
/// - up to 100 ⇒ 0.1 + (corrections/100) * 0.4
/// - 100 to 1000 ⇒ 0.5 + ((corrections-100)/900) * 0.5
/// - beyond 1000 ⇒ 1.0
///
/// Each flagged pattern adds a flat 0.5. The result is clamped to
/// [0, 5] and rounded to one decimal.
pub fn estimate(total_corrections: u64, flagged_patterns: u64) -> f64 {
    if total_corrections == 0 {
        return 0.0;
    }

    let corrections = total_corrections as f64;
    let base = if total_corrections <= 100 {
        0.1 + (corrections / 100.0) * 0.4
    } else if total_corrections <= 1000 {
        0.5 + ((corrections - 100.0) / 900.0) * 0.5
    } else {
        1.0
    };

    let raw = base + flagged_patterns as f64 * 0.5;
    let capped = raw.clamp(0.0, MAX_ESTIMATED_IMPROVEMENT);
    (capped * 10.0).round() / 10.0
}
