use std::process::ExitCode;

use ctf_leaderboards::{run_casual, run_competitive, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!(?config, "Starting leaderboard run");

    if let Err(e) = run_casual(&config).await {
        error!(error = %e, "failed to write casual leaderboards");
        return ExitCode::FAILURE;
    }
    if let Err(e) = run_competitive(&config) {
        error!(error = %e, "failed to write competitive leaderboards");
        return ExitCode::FAILURE;
    }

    info!("Done");
    ExitCode::SUCCESS
}
