use serde::{Deserialize, Serialize};
use tracing::debug;

pub type Position = u64;

/// One row of a group's leaderboard.
///
/// `rank` is never read from input: any `rank` key on an incoming record is ignored, whatever its
/// type. It is always written once [`rank_entries`] has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    #[serde(rename = "creditsMinor")]
    pub credits_minor: i64,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Position>,
}

impl LeaderboardEntry {
    pub fn new<U: Into<String>, N: Into<String>>(
        user_id: U,
        username: N,
        credits_minor: i64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            credits_minor,
            rank: None,
        }
    }
}

/// Sort highest balance first and number the rows 1, 2, 3, ...
///
/// Ranks follow position, so equal balances still get distinct ranks. The sort is stable: rows
/// with the same balance keep their input order.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.credits_minor.cmp(&a.credits_minor));
    for (i, e) in entries.iter_mut().enumerate() {
        e.rank = Some(i as Position + 1);
    }
    debug!(n = entries.len(), "ranked leaderboard");
    entries
}
