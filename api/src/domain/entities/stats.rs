//! Stats payloads returned by the aggregation endpoints.
//!
//! Field names are camelCased on the wire to match what the site's frontend
//! consumes.

use serde::Serialize;

/// Aggregated GitHub profile stats.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubStats {
    pub username: String,
    pub public_repos: i64,
    pub followers: i64,
    pub following: i64,
    pub total_stars: i64,
    pub total_commits: u32,
    pub most_used_languages: Vec<LanguageUsage>,
    pub contribution_calendar: Vec<ContributionDay>,
    pub recent_activity: Vec<ActivityEvent>,
}

/// Share of repositories using a primary language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageUsage {
    pub language: String,
    pub percentage: u32,
    pub color: String,
}

/// One day of the contribution heatmap.
#[derive(Debug, Clone, Serialize)]
pub struct ContributionDay {
    pub date: String,
    pub count: u32,
    /// Intensity bucket 0..=4 derived from `count`
    pub level: u8,
}

/// A repository event in the recent-activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: String,
    pub date: String,
}

/// LeetCode profile summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeStats {
    pub username: String,
    pub total_solved: u32,
    pub total_questions: u32,
    pub easy_solved: u32,
    pub easy_total: u32,
    pub medium_solved: u32,
    pub medium_total: u32,
    pub hard_solved: u32,
    pub hard_total: u32,
    pub acceptance_rate: f64,
    pub ranking: u32,
    pub contribution_points: u32,
    pub reputation: u32,
    pub recent_submissions: Vec<Submission>,
}

/// A recent problem submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub title: String,
    pub difficulty: Difficulty,
    pub status: SubmissionStatus,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmissionStatus {
    Accepted,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Time Limit Exceeded")]
    TimeLimitExceeded,
}

/// Best-effort visitor counters held in process memory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorStats {
    pub total_visitors: u64,
    pub today_visitors: u64,
    pub online_users: u64,
    pub page_views: u64,
    pub unique_visitors: u64,
    pub average_session_time: String,
    pub top_countries: Vec<CountryVisitors>,
}

/// Visitor count attributed to one country.
#[derive(Debug, Clone, Serialize)]
pub struct CountryVisitors {
    pub country: String,
    pub flag: String,
    pub visitors: u64,
}
