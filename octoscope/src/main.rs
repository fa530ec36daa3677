//! octoscope - GitHub profile activity analyzer CLI
//!
//! Fetches a profile, its repositories, and recent commit activity, then
//! renders the derived insights (daily commit chart, most active day,
//! commit streak, language distribution).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use octoscope_core::format::format_relative_time;
use octoscope_core::{analyze, AnalysisResult, AnalysisSession, Config, GithubClient};

#[derive(Parser, Debug)]
#[command(name = "octoscope")]
#[command(about = "Analyze a GitHub profile's repositories and commit activity")]
#[command(version)]
struct Args {
    /// GitHub account to analyze
    account: String,

    /// Personal access token (default: config file or GITHUB_TOKEN env var)
    #[arg(long)]
    token: Option<String>,

    /// Number of repository cards to show
    #[arg(long, default_value_t = 6)]
    repos: usize,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,

    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path).context("failed to load configuration")?,
        None => Config::load().context("failed to load configuration")?,
    };
    if let Some(token) = &args.token {
        config.github.token = Some(token.clone());
    }

    // Logging is best-effort; analysis proceeds even if the log dir is unwritable
    let _log_guard = octoscope_core::logging::init(&config.logging).ok();

    let session = AnalysisSession::new(&args.account)?;
    let client = GithubClient::new(&config.github, &config.limits)
        .context("failed to create GitHub client")?;

    let result = analyze(&client, &session, &config.limits)
        .await
        .with_context(|| format!("analysis failed for {}", session.account()))?;

    match args.export.as_deref() {
        Some("json") => print_json(&result)?,
        Some("md") => print_markdown(&result, args.repos, config.limits.lookback_days),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&result, args.repos, config.limits.lookback_days),
    }

    Ok(())
}

fn print_terminal(result: &AnalysisResult, repo_cards: usize, lookback_days: i64) {
    let title = format!("octoscope · {}", result.account);

    // Header
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    // Profile
    println!("PROFILE");
    println!("   {}", result.profile.display_name());
    if let Some(bio) = &result.profile.bio {
        println!("   {}", bio);
    }
    println!(
        "   {} public repos · {} followers",
        result.profile.public_repos, result.profile.followers
    );
    println!();

    // Repositories
    if result.repositories.is_empty() {
        println!("REPOSITORIES");
        println!("   No repositories found for this account.");
        println!();
    } else {
        println!("REPOSITORIES (showing {})", result.repositories.len().min(repo_cards));
        for repo in result.repositories.iter().take(repo_cards) {
            let language = repo.language.as_deref().unwrap_or("-");
            println!(
                "   {:<28} ★ {:<6} ⑂ {:<5} {:<12} updated {}",
                repo.name,
                repo.stars,
                repo.forks,
                language,
                format_relative_time(repo.updated_at)
            );
            if let Some(description) = &repo.description {
                println!("      {}", truncate(description, 70));
            }
        }
        println!();
    }

    // Commit activity chart
    println!("COMMIT ACTIVITY (last {} days)", lookback_days);
    if result.daily_histogram.is_empty() {
        println!("   No commit data available for this period.");
    } else {
        let max = result.daily_histogram.values().copied().max().unwrap_or(1);
        for (date, &count) in &result.daily_histogram {
            let width = scale_bar(count, max, 40);
            println!(
                "   {}  {:>4} {}",
                date.format("%b %d"),
                count,
                "█".repeat(width)
            );
        }
    }
    println!();

    // Insights
    println!("INSIGHTS");
    match &result.most_active_day {
        Some(best) => {
            let plural = if best.count == 1 { "" } else { "s" };
            println!(
                "   Most active day:  {} with {} commit{}",
                best.date.format("%A, %b %-d"),
                best.count,
                plural
            );
        }
        None => println!("   Most active day:  no activity data available"),
    }
    let plural = if result.commit_streak == 1 { "" } else { "s" };
    println!(
        "   Commit streak:    {} day{}",
        result.commit_streak, plural
    );

    if result.languages.is_empty() {
        println!("   Top languages:    no language data available");
    } else {
        println!("   Top languages:");
        for (language, count) in result.languages.top(5) {
            let share = result.languages.percentages.get(&language).copied().unwrap_or(0);
            let plural = if count == 1 { "repo" } else { "repos" };
            println!("      {:<16} {:>3}%  ({} {})", language, share, count, plural);
        }
    }
    println!();

    if !result.skipped_repos.is_empty() {
        println!(
            "   note: commit data unavailable for {}",
            result.skipped_repos.join(", ")
        );
        println!();
    }
}

fn print_markdown(result: &AnalysisResult, repo_cards: usize, lookback_days: i64) {
    println!("# GitHub activity: {}", result.account);
    println!();

    println!("## Profile");
    println!();
    println!("**{}**", result.profile.display_name());
    if let Some(bio) = &result.profile.bio {
        println!();
        println!("{}", bio);
    }
    println!();
    println!(
        "{} public repos · {} followers",
        result.profile.public_repos, result.profile.followers
    );
    println!();

    if !result.repositories.is_empty() {
        println!("## Repositories");
        println!();
        println!("| Repository | Stars | Forks | Language | Updated |");
        println!("|------------|-------|-------|----------|---------|");
        for repo in result.repositories.iter().take(repo_cards) {
            println!(
                "| {} | {} | {} | {} | {} |",
                repo.name,
                repo.stars,
                repo.forks,
                repo.language.as_deref().unwrap_or("-"),
                format_relative_time(repo.updated_at)
            );
        }
        println!();
    }

    println!("## Commit activity (last {} days)", lookback_days);
    println!();
    if result.daily_histogram.is_empty() {
        println!("*No commit data available for this period.*");
    } else {
        println!("| Date | Commits |");
        println!("|------|---------|");
        for (date, count) in &result.daily_histogram {
            println!("| {} | {} |", date, count);
        }
    }
    println!();

    println!("## Insights");
    println!();
    match &result.most_active_day {
        Some(best) => println!(
            "- **Most active day:** {} ({} commits)",
            best.date.format("%A, %b %-d"),
            best.count
        ),
        None => println!("- **Most active day:** no activity data"),
    }
    println!("- **Commit streak:** {} days", result.commit_streak);
    if !result.languages.is_empty() {
        println!("- **Top languages:**");
        for (language, _count) in result.languages.top(5) {
            let share = result.languages.percentages.get(&language).copied().unwrap_or(0);
            println!("  - {}: {}%", language, share);
        }
    }
    println!();

    if !result.skipped_repos.is_empty() {
        println!(
            "*Commit data unavailable for: {}*",
            result.skipped_repos.join(", ")
        );
        println!();
    }

    println!("---");
    println!("*Generated by octoscope*");
}

fn print_json(result: &AnalysisResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Scale a count into a bar width; any non-zero count gets at least one cell.
fn scale_bar(count: u64, max: u64, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (((count as f64 / max as f64) * width as f64).round() as usize).max(1)
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let head: String = text.chars().take(limit).collect();
        format!("{}…", head.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_bar() {
        assert_eq!(scale_bar(0, 10, 40), 0);
        assert_eq!(scale_bar(10, 10, 40), 40);
        assert_eq!(scale_bar(5, 10, 40), 20);
        // Small counts still render a visible bar
        assert_eq!(scale_bar(1, 1000, 40), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-10", 10), "exactly-10");
        assert_eq!(truncate("longer than the limit", 6), "longer…");
    }
}
