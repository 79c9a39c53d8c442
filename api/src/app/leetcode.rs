//! LeetCode stats
//!
//! LeetCode has no official public API, so this returns a fixed profile
//! after an artificial delay that makes the endpoint behave like a remote
//! call. Placeholder, not an integration.

use std::time::Duration;

use crate::domain::entities::{Difficulty, LeetCodeStats, Submission, SubmissionStatus};

const SIMULATED_LATENCY: Duration = Duration::from_secs(1);

pub async fn stats(username: &str) -> LeetCodeStats {
    tokio::time::sleep(SIMULATED_LATENCY).await;

    LeetCodeStats {
        username: username.to_string(),
        total_solved: 127,
        total_questions: 2500,
        easy_solved: 45,
        easy_total: 800,
        medium_solved: 62,
        medium_total: 1200,
        hard_solved: 20,
        hard_total: 500,
        acceptance_rate: 78.5,
        ranking: 245_689,
        contribution_points: 1250,
        reputation: 890,
        recent_submissions: vec![
            Submission {
                title: "Two Sum".to_string(),
                difficulty: Difficulty::Easy,
                status: SubmissionStatus::Accepted,
                timestamp: "2 hours ago".to_string(),
            },
            Submission {
                title: "Binary Tree Inorder Traversal".to_string(),
                difficulty: Difficulty::Easy,
                status: SubmissionStatus::Accepted,
                timestamp: "1 day ago".to_string(),
            },
            Submission {
                title: "Longest Substring Without Repeating Characters".to_string(),
                difficulty: Difficulty::Medium,
                status: SubmissionStatus::Accepted,
                timestamp: "2 days ago".to_string(),
            },
            Submission {
                title: "Median of Two Sorted Arrays".to_string(),
                difficulty: Difficulty::Hard,
                status: SubmissionStatus::WrongAnswer,
                timestamp: "3 days ago".to_string(),
            },
            Submission {
                title: "Add Two Numbers".to_string(),
                difficulty: Difficulty::Medium,
                status: SubmissionStatus::Accepted,
                timestamp: "4 days ago".to_string(),
            },
        ],
    }
}
