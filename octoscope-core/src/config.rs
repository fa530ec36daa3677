//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/octoscope/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/octoscope/` (~/.config/octoscope/)
//! - State/Logs: `$XDG_STATE_HOME/octoscope/` (~/.local/state/octoscope/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// GitHub API access configuration
    #[serde(default)]
    pub github: GithubConfig,

    /// Fetch-scope limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub API access configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GithubConfig {
    /// Base URL of the REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Personal access token. Unauthenticated requests work but hit a much
    /// lower rate limit; the `GITHUB_TOKEN` env var is used as a fallback.
    pub token: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Max retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

impl GithubConfig {
    /// Resolve the token from config or the `GITHUB_TOKEN` env var.
    pub fn resolved_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
    }

    /// Validate configuration, returning an error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::Config("github.api_url must not be empty".to_string()));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "github.api_url must be an http(s) URL, got {:?}",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> usize {
    3
}

/// Fetch-scope limits.
///
/// Defaults reproduce the reference behavior: commit activity from the 5 most
/// recently updated repositories, over a 30-day lookback, one page of up to
/// 100 records per fetch.
#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    /// Number of repositories (in upstream order) contributing commit data
    #[serde(default = "default_commit_repo_cap")]
    pub commit_repo_cap: usize,

    /// Commit lookback window in days
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,

    /// Page size per API call (single page only; the API caps this at 100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            commit_repo_cap: default_commit_repo_cap(),
            lookback_days: default_lookback_days(),
            per_page: default_per_page(),
        }
    }
}

impl LimitsConfig {
    /// Validate configuration, returning an error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.commit_repo_cap == 0 {
            return Err(Error::Config(
                "limits.commit_repo_cap must be at least 1".to_string(),
            ));
        }
        if self.lookback_days < 1 {
            return Err(Error::Config(
                "limits.lookback_days must be at least 1".to_string(),
            ));
        }
        if self.per_page == 0 || self.per_page > 100 {
            return Err(Error::Config(
                "limits.per_page must be between 1 and 100".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_commit_repo_cap() -> usize {
    5
}

fn default_lookback_days() -> i64 {
    30
}

fn default_per_page() -> u32 {
    100
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/octoscope/config.toml` (~/.config/octoscope/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("octoscope").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/octoscope/` (~/.local/state/octoscope/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("octoscope")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/octoscope/octoscope.log` (~/.local/state/octoscope/octoscope.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("octoscope.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert!(config.github.token.is_none());
        assert_eq!(config.limits.commit_repo_cap, 5);
        assert_eq!(config.limits.lookback_days, 30);
        assert_eq!(config.limits.per_page, 100);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[github]
api_url = "https://github.example.com/api/v3"
token = "ghp_test"
timeout_secs = 10

[limits]
commit_repo_cap = 3
lookback_days = 7

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
        assert_eq!(config.github.token.as_deref(), Some("ghp_test"));
        assert_eq!(config.github.timeout_secs, 10);
        assert_eq!(config.limits.commit_repo_cap, 3);
        assert_eq!(config.limits.lookback_days, 7);
        // Unset fields keep their defaults
        assert_eq!(config.limits.per_page, 100);
        assert_eq!(config.github.max_retries, 3);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[limits]\ncommit_repo_cap = 2\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.limits.commit_repo_cap, 2);

        let missing = Config::load_from(&dir.path().join("nope.toml"));
        assert!(missing.is_err());
    }

    #[test]
    fn test_github_config_validation() {
        let config = GithubConfig::default();
        assert!(config.validate().is_ok());

        let config = GithubConfig {
            api_url: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GithubConfig {
            api_url: "ftp://api.github.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_limits_validation() {
        assert!(LimitsConfig::default().validate().is_ok());

        let config = LimitsConfig {
            commit_repo_cap: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = LimitsConfig {
            per_page: 101,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = LimitsConfig {
            lookback_days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
