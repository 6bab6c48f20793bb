mod class;
mod leaderboard;
mod stats;

pub use class::*;
pub use leaderboard::*;
pub use stats::*;
