use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::client::StatsClient;
use crate::config::Config;
use crate::error::{LeaderboardError, Result};
use crate::leaderboard::Leaderboards;
use crate::model::LeaderboardRow;
use crate::roster::read_player_names;

/// Scrape every named player and fold their class stats into leaderboards.
///
/// Players are fetched one after another. A player whose page cannot be
/// fetched is logged and skipped.
#[instrument(skip_all, fields(host = client.host(), players = names.len()))]
pub async fn build_casual_leaderboards(client: &StatsClient, names: &[String]) -> Leaderboards {
    let mut boards = Leaderboards::new();

    for name in names {
        info!(%name, "Fetching {name}");
        let stats = match client.get_player_stats(name).await {
            Ok(stats) => stats,
            Err(LeaderboardError::UnexpectedStatus { status, .. }) => {
                warn!(%name, %status, "no profile data, skipping player");
                continue;
            }
            Err(e) => {
                warn!(%name, error = %e, "failed to fetch profile, skipping player");
                continue;
            }
        };
        for (class, record) in &stats {
            boards.push(*class, LeaderboardRow::from_record(name.as_str(), record));
        }
    }

    boards.clean();
    boards
}

/// Read the rosters, scrape every player and write `<output>/casual/<Class>.csv`.
pub async fn run_casual(config: &Config) -> Result<Vec<PathBuf>> {
    let names = read_player_names(&config.teams_dir);
    info!(players = names.len(), "Building casual leaderboards");

    let client = StatsClient::new(config.host.clone());
    let boards = build_casual_leaderboards(&client, &names).await;
    boards.write_all(&config.casual_dir())
}
