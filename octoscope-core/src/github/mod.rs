//! GitHub REST API access
//!
//! [`DataSource`] is the seam between the orchestrator and the transport:
//! the live [`GithubClient`] implements it against `api.github.com`, and
//! tests substitute scripted in-memory sources. Each operation is a single
//! atomic success-or-failure outcome; timeout and retry policy live behind
//! this boundary, inside the implementation.

pub mod client;
pub mod models;

pub use client::GithubClient;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::{CommitRecord, Profile, RepositorySummary};

/// The three read operations the analytics engine consumes.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Fetch the account's public profile.
    async fn fetch_profile(&self, account: &str) -> Result<Profile>;

    /// Fetch the account's public repositories, most recently updated first.
    ///
    /// Single page only: repositories beyond the page size are invisible.
    async fn fetch_repositories(&self, account: &str) -> Result<Vec<RepositorySummary>>;

    /// Fetch commits for one repository, bounded to those authored at or
    /// after `since`. Single page only.
    async fn fetch_commits(
        &self,
        account: &str,
        repo: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommitRecord>>;
}
