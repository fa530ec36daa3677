//! # octoscope-core
//!
//! Core library for octoscope - a GitHub profile activity analyzer.
//!
//! This library provides:
//! - Domain types for profiles, repositories, and commits
//! - A typed client for the GitHub REST API
//! - The commit-activity analytics engine (daily histogram, most active day,
//!   commit streak, language distribution)
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! Data flows one way: a [`github::DataSource`] yields immutable profile,
//! repository, and commit snapshots; [`analyze`] feeds them through the pure
//! functions in [`analytics`] and returns an [`AnalysisResult`]. Nothing is
//! cached between runs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use octoscope_core::{analyze, AnalysisSession, Config, GithubClient};
//!
//! # async fn run() -> octoscope_core::Result<()> {
//! let config = Config::load()?;
//! let session = AnalysisSession::new("octocat")?;
//! let client = GithubClient::new(&config.github, &config.limits)?;
//!
//! let result = analyze(&client, &session, &config.limits).await?;
//! println!("longest streak: {} days", result.commit_streak);
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use analyzer::{analyze, AnalysisResult, AnalysisSession};
pub use config::Config;
pub use error::{Error, Result};
pub use github::{DataSource, GithubClient};
pub use types::*;

// Public modules
pub mod analytics;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod format;
pub mod github;
pub mod logging;
pub mod types;
