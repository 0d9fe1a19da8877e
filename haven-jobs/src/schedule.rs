//! Cadence helpers for the job host.
//!
//! The timers themselves live outside this system; these helpers only
//! compute the next due instants.

use chrono::{DateTime, Duration, Utc};

use haven_core::config::defaults::DEFAULT_LEARNER_INTERVAL_SECS;
use haven_core::period::ReportingPeriod;

/// Interval between learner runs.
pub fn learner_interval() -> Duration {
    Duration::seconds(DEFAULT_LEARNER_INTERVAL_SECS as i64)
}

/// Next learner invocation after the given instant.
pub fn next_learner_run(after: DateTime<Utc>) -> DateTime<Utc> {
    after + learner_interval()
}

/// Next aggregation invocation after the given instant: the first
/// instant of the following UTC month.
pub fn next_aggregation_run(after: DateTime<Utc>) -> DateTime<Utc> {
    ReportingPeriod::current(after).next().start()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn learner_runs_every_six_hours() {
        let t = Utc.with_ymd_and_hms(2026, 8, 15, 6, 0, 0).unwrap();
        assert_eq!(
            next_learner_run(t),
            Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn aggregation_runs_at_month_start() {
        let t = Utc.with_ymd_and_hms(2026, 8, 15, 6, 0, 0).unwrap();
        assert_eq!(
            next_aggregation_run(t),
            Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn aggregation_rolls_over_year_end() {
        let t = Utc.with_ymd_and_hms(2026, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(
            next_aggregation_run(t),
            Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
