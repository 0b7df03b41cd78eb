pub mod cards;
pub mod json;
pub mod leaderboard;

pub use cards::{deck, PokerDraw};
pub use leaderboard::{rank_entries, LeaderboardEntry};
