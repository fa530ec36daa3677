//! Language distribution across a user's repositories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::RepositorySummary;

/// Language usage derived from repository metadata.
///
/// A repository counts once toward its primary language; repositories without
/// a detected language contribute nothing. Counting repositories rather than
/// bytes of code keeps the distribution cheap to compute from the repository
/// list alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageBreakdown {
    /// Repositories per primary language, keyed alphabetically
    pub counts: BTreeMap<String, u64>,
    /// Share per language as a percentage rounded to the nearest integer.
    /// Rounding can leave the sum short of 100.
    pub percentages: BTreeMap<String, u8>,
}

impl LanguageBreakdown {
    /// Aggregate primary languages across a repository list.
    pub fn from_repositories(repositories: &[RepositorySummary]) -> Self {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for repo in repositories {
            if let Some(language) = &repo.language {
                *counts.entry(language.clone()).or_insert(0) += 1;
            }
        }
        let percentages = percentages(&counts);
        Self {
            counts,
            percentages,
        }
    }

    /// True when no repository reported a primary language.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Languages ranked by repository count, descending.
    ///
    /// Equal counts order alphabetically: the counts map iterates by name and
    /// the sort is stable.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(language, &count)| (language.clone(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Convert language counts into integer percentages of the total.
fn percentages(counts: &BTreeMap<String, u64>) -> BTreeMap<String, u8> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(language, &count)| {
            let share = (count as f64 / total as f64 * 100.0).round() as u8;
            (language.clone(), share)
        })
        .collect()
}
