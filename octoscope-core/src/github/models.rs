//! Wire-format models for the GitHub REST API
//!
//! These mirror the JSON shapes the API returns and are converted into the
//! crate's domain types immediately after deserialization. Only the fields
//! octoscope reads are declared; serde ignores the rest of each payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::{CommitRecord, Profile, RepositorySummary};

/// Response item for `GET /users/{account}`
#[derive(Debug, Deserialize)]
pub struct RawProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
}

impl From<RawProfile> for Profile {
    fn from(raw: RawProfile) -> Self {
        Profile {
            login: raw.login,
            name: raw.name,
            bio: raw.bio,
            avatar_url: raw.avatar_url,
            public_repos: raw.public_repos,
            followers: raw.followers,
        }
    }
}

/// Response item for `GET /users/{account}/repos`
#[derive(Debug, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<RawRepository> for RepositorySummary {
    fn from(raw: RawRepository) -> Self {
        RepositorySummary {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            language: raw.language,
            updated_at: raw.updated_at,
        }
    }
}

/// Response item for `GET /repos/{owner}/{repo}/commits`
///
/// The author timestamp stays a raw string here: normalization truncates it
/// to a calendar day later, and a missing or malformed value must skip one
/// record rather than fail the whole page.
#[derive(Debug, Deserialize)]
pub struct RawCommit {
    pub commit: RawCommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct RawCommitDetail {
    #[serde(default)]
    pub author: Option<RawCommitAuthor>,
}

#[derive(Debug, Deserialize)]
pub struct RawCommitAuthor {
    #[serde(default)]
    pub date: Option<String>,
}

impl RawCommit {
    /// Attach the repository name and drop everything but the timestamp.
    pub fn into_record(self, repo_name: &str) -> CommitRecord {
        CommitRecord {
            repo_name: repo_name.to_string(),
            authored_at: self.commit.author.and_then(|author| author.date),
        }
    }
}
