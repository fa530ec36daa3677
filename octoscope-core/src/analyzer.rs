//! One-shot analysis orchestration
//!
//! [`analyze`] sequences the three fetches (profile, repository list,
//! per-repository commits) and feeds the results through the pure functions
//! in [`crate::analytics`]. The engine keeps no state between runs: the
//! caller owns an [`AnalysisSession`] and receives an [`AnalysisResult`].
//!
//! Failure policy:
//! - A blank account never reaches the network ([`AnalysisSession::new`]).
//! - Profile or repository-list failures abort the whole run.
//! - A failed per-repository commit fetch is absorbed: the repository lands
//!   in [`AnalysisResult::skipped_repos`] and contributes zero commit dates,
//!   while its siblings still count.
//! - Commits without a usable timestamp are skipped individually.

use chrono::{Duration, Utc};
use futures::future;
use serde::Serialize;

use crate::analytics::activity::{self, DailyHistogram, MostActiveDay};
use crate::analytics::languages::LanguageBreakdown;
use crate::analytics::streak;
use crate::config::LimitsConfig;
use crate::error::{Error, Result};
use crate::github::DataSource;
use crate::types::{Profile, RepositorySummary};

/// Caller-owned handle for one analysis run.
///
/// Carries the validated account name; constructing one performs the only
/// input validation the engine does, before any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSession {
    account: String,
}

impl AnalysisSession {
    /// Validate and normalize the account name.
    pub fn new(account: &str) -> Result<Self> {
        let account = account.trim();
        if account.is_empty() {
            return Err(Error::EmptyAccount);
        }
        Ok(Self {
            account: account.to_string(),
        })
    }

    /// The account under analysis.
    pub fn account(&self) -> &str {
        &self.account
    }
}

/// Everything one analysis run derives for display.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Account the run was for
    pub account: String,
    /// Profile snapshot
    pub profile: Profile,
    /// All fetched repositories, most recently updated first
    pub repositories: Vec<RepositorySummary>,
    /// Commits per calendar day across the sampled repositories
    pub daily_histogram: DailyHistogram,
    /// Day with the most commits, if any commits were observed
    pub most_active_day: Option<MostActiveDay>,
    /// Longest run of consecutive days with at least one commit
    pub commit_streak: u32,
    /// Language distribution over the full repository list
    pub languages: LanguageBreakdown,
    /// Repositories whose commit fetch failed; they contribute no dates
    pub skipped_repos: Vec<String>,
}

/// Run one full analysis for the session's account.
pub async fn analyze<S: DataSource>(
    source: &S,
    session: &AnalysisSession,
    limits: &LimitsConfig,
) -> Result<AnalysisResult> {
    let account = session.account();

    let profile = source.fetch_profile(account).await?;
    let repositories = source.fetch_repositories(account).await?;
    tracing::info!(account, repos = repositories.len(), "fetched repository list");

    // Languages come from the full list; commit activity is bounded to the
    // most recently updated repositories (the upstream sort order).
    let languages = LanguageBreakdown::from_repositories(&repositories);
    let targets = &repositories[..repositories.len().min(limits.commit_repo_cap)];
    let since = Utc::now() - Duration::days(limits.lookback_days);

    // Independent fetch per repository, joined into one collection; a failed
    // task is captured as a value so its siblings are unaffected.
    let fetches = targets.iter().map(|repo| async move {
        let outcome = source.fetch_commits(account, &repo.name, since).await;
        (repo.name.as_str(), outcome)
    });
    let outcomes = future::join_all(fetches).await;

    let mut dates = Vec::new();
    let mut skipped_repos = Vec::new();
    let mut unusable = 0usize;
    for (repo_name, outcome) in outcomes {
        match outcome {
            Ok(commits) => {
                for record in &commits {
                    match activity::commit_day(record) {
                        Some(day) => dates.push(day),
                        None => unusable += 1,
                    }
                }
            }
            Err(e) => {
                tracing::warn!(repo = repo_name, error = %e, "commit fetch failed, repository skipped");
                skipped_repos.push(repo_name.to_string());
            }
        }
    }
    if unusable > 0 {
        tracing::debug!(count = unusable, "skipped commits without usable timestamps");
    }

    let daily_histogram = activity::build_histogram(dates.iter().copied());
    let most_active_day = activity::most_active_day(&daily_histogram);
    let commit_streak = streak::longest_streak(&dates);

    Ok(AnalysisResult {
        account: account.to_string(),
        profile,
        repositories,
        daily_histogram,
        most_active_day,
        commit_streak,
        languages,
        skipped_repos,
    })
}
