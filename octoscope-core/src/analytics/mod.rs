//! Analytics engine for octoscope
//!
//! Pure data transformations over the fetched snapshots:
//! - Daily commit activity (normalization, histogram, most-active-day)
//! - Longest consecutive-day commit streak
//! - Language distribution across repositories
//!
//! Every function here is a pure input-to-output computation; all fetching
//! and sequencing lives in [`crate::analyzer`]. Because aggregation is
//! commutative over the concatenated commit-date list, results do not depend
//! on the order repositories were fetched in.

pub mod activity;
pub mod languages;
pub mod streak;

pub use activity::{build_histogram, commit_day, most_active_day, DailyHistogram, MostActiveDay};
pub use languages::LanguageBreakdown;
pub use streak::longest_streak;
