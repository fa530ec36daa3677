//! HTTP client for the GitHub REST API
//!
//! Wraps a configured `reqwest::Client` and maps the three resources
//! octoscope consumes (profile, repository list, per-repository commits)
//! into domain types. Transient failures retry with exponential backoff;
//! client errors fail immediately.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;

use super::models::{RawCommit, RawProfile, RawRepository};
use super::DataSource;
use crate::config::{GithubConfig, LimitsConfig};
use crate::error::{Error, Result};
use crate::types::{CommitRecord, Profile, RepositorySummary};

/// Typed client for the GitHub REST API
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    per_page: u32,
    max_retries: usize,
}

impl GithubClient {
    /// Create a client from configuration.
    ///
    /// Returns an error if the configuration is invalid or the underlying
    /// HTTP client cannot be built.
    pub fn new(config: &GithubConfig, limits: &LimitsConfig) -> Result<Self> {
        config.validate()?;
        limits.validate()?;

        let base_url = config.api_url.trim_end_matches('/').to_string();

        // The API rejects requests without a User-Agent
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("octoscope"));

        if let Some(token) = config.resolved_token() {
            let auth_value = format!("Bearer {}", token);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value)
                    .map_err(|e| Error::Config(format!("invalid github token: {}", e)))?,
            );
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            per_page: limits.per_page,
            max_retries: config.max_retries,
        })
    }

    /// Perform one GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| "unknown".to_string());
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// GET with retry for transient failures (5xx, timeouts, connection
    /// errors), exponential backoff between attempts. Non-retryable errors
    /// fail immediately; the final attempt propagates whatever happens.
    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut delay = Duration::from_millis(500);

        for attempt in 0..self.max_retries {
            match self.get_json(url, query).await {
                Ok(value) => return Ok(value),
                Err(e) if is_retryable_error(&e) => {
                    tracing::warn!(
                        url,
                        attempt = attempt + 1,
                        error = %e,
                        "transient GitHub API failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay = std::cmp::min(delay * 2, Duration::from_secs(30));
                }
                Err(e) => return Err(e),
            }
        }

        self.get_json(url, query).await
    }
}

impl DataSource for GithubClient {
    async fn fetch_profile(&self, account: &str) -> Result<Profile> {
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(account));

        let raw: RawProfile = match self.get_with_retry(&url, &[]).await {
            Err(Error::Api { status: 404, .. }) => {
                return Err(Error::AccountNotFound(account.to_string()))
            }
            other => other?,
        };
        Ok(raw.into())
    }

    async fn fetch_repositories(&self, account: &str) -> Result<Vec<RepositorySummary>> {
        let url = format!(
            "{}/users/{}/repos",
            self.base_url,
            urlencoding::encode(account)
        );
        let query = [
            ("sort", "updated".to_string()),
            ("per_page", self.per_page.to_string()),
        ];

        let raw: Vec<RawRepository> = self.get_with_retry(&url, &query).await?;
        Ok(raw.into_iter().map(Into::into).collect())
    }

    async fn fetch_commits(
        &self,
        account: &str,
        repo: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommitRecord>> {
        let url = format!(
            "{}/repos/{}/{}/commits",
            self.base_url,
            urlencoding::encode(account),
            urlencoding::encode(repo)
        );
        let query = [
            ("since", since.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ("per_page", self.per_page.to_string()),
        ];

        let raw: Vec<RawCommit> = self.get_with_retry(&url, &query).await?;
        Ok(raw.into_iter().map(|c| c.into_record(repo)).collect())
    }
}

/// Check if an error is worth retrying (transient)
fn is_retryable_error(error: &Error) -> bool {
    match error {
        // Server-side failures and rate-limit style hiccups
        Error::Api { status, .. } => *status >= 500,
        // Network-level: timeouts and connection failures
        Error::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        _ => false,
    }
}
