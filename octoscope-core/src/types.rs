//! Core domain types for octoscope
//!
//! These types are the canonical snapshots the analytics engine consumes.
//! They are produced once per fetch from the GitHub REST API (see
//! [`crate::github`]) and discarded on the next query; nothing here is
//! persisted between runs.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Account** | The GitHub login under analysis |
//! | **Profile** | Public account metadata (name, bio, follower count) |
//! | **Repository** | One public repository owned by the account |
//! | **Commit** | One commit reaching a repository's default branch |
//!
//! Derived metrics (histogram, streak, language shares) live in
//! [`crate::analytics`]; this module only covers what the API returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Profile
// ============================================

/// Public profile metadata for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Account login
    pub login: String,
    /// Display name, if the account set one
    pub name: Option<String>,
    /// Profile bio, if the account set one
    pub bio: Option<String>,
    /// Avatar image URL
    pub avatar_url: String,
    /// Number of public repositories
    pub public_repos: u32,
    /// Number of followers
    pub followers: u32,
}

impl Profile {
    /// Display name falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

// ============================================
// Repository
// ============================================

/// Snapshot of one public repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Upstream repository id
    pub id: u64,
    /// Repository name (without the owner prefix)
    pub name: String,
    /// Short description, if set
    pub description: Option<String>,
    /// Star count
    pub stars: u32,
    /// Fork count
    pub forks: u32,
    /// Primary language, if the repository has detectable code
    pub language: Option<String>,
    /// When the repository was last updated
    pub updated_at: DateTime<Utc>,
}

// ============================================
// Commit
// ============================================

/// One raw commit record, consumed only to produce a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Repository the commit belongs to
    pub repo_name: String,
    /// Author timestamp as reported upstream (ISO 8601). `None` when the
    /// record carries no usable timestamp; such records are skipped during
    /// normalization rather than failing the batch.
    pub authored_at: Option<String>,
}
