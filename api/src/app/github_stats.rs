//! GitHub stats aggregation
//!
//! Composes a profile fetch and a repository-list fetch into the stats
//! payload the frontend renders. The contribution calendar and commit total
//! are synthetic: GitHub's REST API does not expose contribution history, so
//! the heatmap is generated per request.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Days, Utc};
use rand::Rng;

use crate::domain::entities::{ActivityEvent, ContributionDay, GitHubStats, LanguageUsage};
use crate::domain::ports::{GitHubClient, GitHubRepo};
use crate::error::GitHubError;

/// Days covered by the contribution calendar.
const CALENDAR_DAYS: u64 = 365;

/// Repositories shown in the recent-activity feed.
const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Service assembling per-request GitHub stats
pub struct GitHubStatsService {
    github: Arc<dyn GitHubClient>,
}

impl GitHubStatsService {
    pub fn new(github: Arc<dyn GitHubClient>) -> Self {
        Self { github }
    }

    /// Fetch and aggregate stats for a user.
    ///
    /// Either upstream failure aborts the whole aggregation.
    pub async fn aggregate(&self, username: &str) -> Result<GitHubStats, GitHubError> {
        let user = self.github.get_user(username).await?;
        let repos = self.github.list_repos(username).await?;

        let total_stars = repos.iter().map(|r| r.stargazers_count).sum();

        Ok(GitHubStats {
            username: user.login,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            total_stars,
            total_commits: rand::thread_rng().gen_range(200..700),
            most_used_languages: language_usage(&repos),
            contribution_calendar: contribution_calendar(),
            recent_activity: recent_activity(&repos),
        })
    }
}

/// Histogram of primary languages, top 5 by share.
///
/// Percentages are computed over repos that report a language; repos with a
/// null language do not count toward the denominator.
fn language_usage(repos: &[GitHubRepo]) -> Vec<LanguageUsage> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for repo in repos {
        if let Some(language) = repo.language.as_deref() {
            *counts.entry(language).or_insert(0) += 1;
        }
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut usage: Vec<LanguageUsage> = counts
        .into_iter()
        .map(|(language, count)| LanguageUsage {
            language: language.to_string(),
            percentage: ((count as f64 / total as f64) * 100.0).round() as u32,
            color: language_color(language).to_string(),
        })
        .collect();

    usage.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    usage.truncate(5);
    usage
}

/// One year of per-day activity, ascending dates ending today.
fn contribution_calendar() -> Vec<ContributionDay> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    (0..CALENDAR_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Days::new(days_ago);
            let count = rng.gen_range(0..10);
            ContributionDay {
                date: date.format("%Y-%m-%d").to_string(),
                count,
                level: contribution_level(count),
            }
        })
        .collect()
}

/// Bucket a daily count into one of five heatmap intensity levels.
pub(crate) fn contribution_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// The most recently updated repos rendered as push events.
fn recent_activity(repos: &[GitHubRepo]) -> Vec<ActivityEvent> {
    repos
        .iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|repo| ActivityEvent {
            kind: "pushed to".to_string(),
            repo: repo.name.clone(),
            date: format_activity_date(&repo.updated_at),
        })
        .collect()
}

fn format_activity_date(updated_at: &str) -> String {
    DateTime::parse_from_rfc3339(updated_at)
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| updated_at.to_string())
}

/// GitHub's language colors, as rendered on repository pages.
fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#2b7489",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "C" => "#555555",
        "C++" => "#f34b7d",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        "PHP" => "#4F5D95",
        "Swift" => "#ffac45",
        "Kotlin" => "#F18E33",
        "Dart" => "#00B4AB",
        "Shell" => "#89e051",
        "Vue" => "#2c3e50",
        "React" => "#61dafb",
        _ => "#8cc8ff",
    }
}
