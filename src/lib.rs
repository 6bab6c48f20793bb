//! Scrape per-class CTF statistics and build leaderboards from them.
//!
//! The casual leaderboards come from player profile pages fetched through
//! [`StatsClient`]; the competitive ones from local per-player CSV exports.
//! Both end up as one CSV per [`CtfClass`].

pub mod client;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod model;
pub mod roster;
pub(crate) mod scraper;

pub use client::StatsClient;
pub use config::Config;
pub use error::{LeaderboardError, Result};
pub use leaderboard::casual::{build_casual_leaderboards, run_casual};
pub use leaderboard::competitive::{build_competitive_leaderboards, load_exports, run_competitive};
pub use leaderboard::{read_table, write_table, Leaderboards};
pub use model::*;
pub use roster::read_player_names;
pub use scraper::stats::playtime_to_days;
