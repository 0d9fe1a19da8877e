//! Calendar-month reporting periods for the global aggregation.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar-month reporting period, UTC.
///
/// The key format `YYYY-MM` is part of the aggregation document id
/// contract, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl ReportingPeriod {
    /// The period containing the given instant.
    pub fn current(now: DateTime<Utc>) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// First instant of the month (inclusive).
    pub fn start(&self) -> DateTime<Utc> {
        // Month is always 1-12 here, so the timestamp is unambiguous.
        Utc.with_ymd_and_hms(self.year, self.month, 1, 0, 0, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// First instant of the following month (exclusive end bound).
    pub fn end(&self) -> DateTime<Utc> {
        self.next().start()
    }

    /// The following calendar month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The period key, `YYYY-MM`.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
