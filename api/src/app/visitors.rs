//! Visitor counters
//!
//! Best-effort and in-process only: counts reset to their seed values on
//! every restart. Constructed once at startup and shared by handle; there is
//! no durability guarantee.

use std::sync::RwLock;

use crate::domain::entities::{CountryVisitors, VisitorStats};

pub struct VisitorCounter {
    stats: RwLock<VisitorStats>,
}

impl VisitorCounter {
    pub fn new() -> Self {
        Self {
            stats: RwLock::new(seed_stats()),
        }
    }

    pub fn snapshot(&self) -> VisitorStats {
        self.stats.read().unwrap().clone()
    }

    /// Record one visit.
    ///
    /// Only the totals and page views move; unique-visitor and per-country
    /// numbers keep their seeds.
    pub fn record_visit(&self) {
        let mut stats = self.stats.write().unwrap();
        stats.total_visitors += 1;
        stats.today_visitors += 1;
        stats.page_views += 1;
    }
}

impl Default for VisitorCounter {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_stats() -> VisitorStats {
    VisitorStats {
        total_visitors: 1247,
        today_visitors: 23,
        online_users: 3,
        page_views: 4582,
        unique_visitors: 892,
        average_session_time: "3m 45s".to_string(),
        top_countries: vec![
            country("India", "🇮🇳", 456),
            country("United States", "🇺🇸", 234),
            country("Canada", "🇨🇦", 123),
            country("Germany", "🇩🇪", 89),
            country("Australia", "🇦🇺", 67),
        ],
    }
}

fn country(country: &str, flag: &str, visitors: u64) -> CountryVisitors {
    CountryVisitors {
        country: country.to_string(),
        flag: flag.to_string(),
        visitors,
    }
}
