//! Top-level domain offering.

use chrono::{DateTime, Utc};

use super::suggestion::RECOMMENDED_PRIORITY;

/// A top-level domain offered to customers.
///
/// Only active TLDs are offered. Suggestions rank TLDs by `priority`
/// descending, then `sort_order` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Tld {
    /// Suffix without leading dot, e.g. `"de"`.
    pub name: String,
    /// Sell price in EUR.
    pub sell_price: f64,
    pub is_active: bool,
    /// Manual sort order, lower first.
    pub sort_order: i32,
    pub group_label: Option<String>,
    /// Higher means more recommended.
    pub priority: i32,
    pub priority_rule: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tld {
    /// Returns `true` when the TLD is prioritized high enough to recommend.
    pub fn is_high_priority(&self) -> bool {
        self.priority >= RECOMMENDED_PRIORITY
    }
}
