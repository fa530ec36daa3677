//! Daily commit activity: normalization, histogram, most-active-day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::CommitRecord;

/// Commit counts per calendar day.
///
/// Sparse: a day with zero commits never appears as a key. Keys iterate in
/// ascending date order.
pub type DailyHistogram = BTreeMap<NaiveDate, u64>;

/// The calendar day with the highest commit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostActiveDay {
    /// The day
    pub date: NaiveDate,
    /// Commits on that day
    pub count: u64,
}

/// Extract the calendar day from a commit's author timestamp.
///
/// The day is the date-only prefix of the ISO 8601 string: truncation, not
/// timezone recomputation, so the day stays whatever the author's offset
/// encoded. Returns `None` for missing or malformed timestamps; callers skip
/// such records without failing the batch.
pub fn commit_day(record: &CommitRecord) -> Option<NaiveDate> {
    let ts = record.authored_at.as_deref()?;
    let prefix = ts.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Count commits per day over a sequence of normalized dates.
///
/// Input order is irrelevant; dates from all repositories are concatenated
/// before this call. The sum of all counts equals the number of input dates.
pub fn build_histogram<I>(dates: I) -> DailyHistogram
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut histogram = DailyHistogram::new();
    for date in dates {
        *histogram.entry(date).or_insert(0) += 1;
    }
    histogram
}

/// Find the day with the most commits, or `None` for an empty histogram.
///
/// Only a strictly greater count replaces the current maximum, and iteration
/// is ascending by date, so equal counts resolve to the earliest day.
pub fn most_active_day(histogram: &DailyHistogram) -> Option<MostActiveDay> {
    let mut best: Option<MostActiveDay> = None;
    for (&date, &count) in histogram {
        match best {
            Some(current) if count <= current.count => {}
            _ => best = Some(MostActiveDay { date, count }),
        }
    }
    best
}
