use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "www.brawl.com";

/// Where a run reads its inputs from and writes its leaderboards to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host serving the `/players/<name>` profile pages.
    pub host: String,
    /// Directory of roster files, one player name per line.
    pub teams_dir: PathBuf,
    /// Directory of competitive exports, `<stats_dir>/<player>/<file>.csv`.
    pub stats_dir: PathBuf,
    /// Root of the `casual/` and `competitive/` leaderboard directories.
    pub output_dir: PathBuf,
}

impl Config {
    /// Defaults, with each field overridable through `CTF_HOST`,
    /// `CTF_TEAMS_DIR`, `CTF_STATS_DIR` and `CTF_OUTPUT_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("CTF_HOST").unwrap_or(defaults.host),
            teams_dir: lookup("CTF_TEAMS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.teams_dir),
            stats_dir: lookup("CTF_STATS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.stats_dir),
            output_dir: lookup("CTF_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }

    pub fn casual_dir(&self) -> PathBuf {
        self.output_dir.join("casual")
    }

    pub fn competitive_dir(&self) -> PathBuf {
        self.output_dir.join("competitive")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            teams_dir: PathBuf::from("teams"),
            stats_dir: PathBuf::from("stats"),
            output_dir: PathBuf::from("leaderboards"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.casual_dir(), PathBuf::from("leaderboards/casual"));
        assert_eq!(
            config.competitive_dir(),
            PathBuf::from("leaderboards/competitive")
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(|key| match key {
            "CTF_HOST" => Some("127.0.0.1:8080".to_string()),
            "CTF_OUTPUT_DIR" => Some("out".to_string()),
            _ => None,
        });
        assert_eq!(config.host, "127.0.0.1:8080");
        assert_eq!(config.teams_dir, PathBuf::from("teams"));
        assert_eq!(config.casual_dir(), PathBuf::from("out/casual"));
    }
}
