use std::fs;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use itertools::Itertools;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::{LeaderboardError, Result};
use crate::leaderboard::Leaderboards;
use crate::model::{CtfClass, LeaderboardRow};
use crate::roster::files_with_extension;

const KIT_TYPE_COLUMN: &str = "kit_type";
const SECONDS_PER_DAY: f64 = 86400.0;

/// One exported stats file: a row per class, told apart by `kit_type`.
#[derive(Debug, Clone)]
pub struct PlayerExport {
    /// Taken from the file stem.
    pub name: String,
    headers: StringRecord,
    kit_type: usize,
    records: Vec<StringRecord>,
}

impl PlayerExport {
    /// Read an export, naming the player after the file.
    pub fn read(path: &Path) -> Result<Self> {
        let csv_err = |source: csv::Error| LeaderboardError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(csv_err)?;
        let headers = reader.headers().map_err(csv_err)?.clone();
        let kit_type = headers
            .iter()
            .position(|h| h.trim() == KIT_TYPE_COLUMN)
            .ok_or_else(|| LeaderboardError::MissingColumn {
                path: path.to_path_buf(),
                column: KIT_TYPE_COLUMN,
            })?;
        let records = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(csv_err)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            headers,
            kit_type,
            records,
        })
    }

    /// The first row for `class`, reindexed onto the leaderboard schema with
    /// playtime converted from seconds to days. Later rows for the same class
    /// are ignored.
    pub fn row_for(&self, class: CtfClass) -> Option<LeaderboardRow> {
        let kit_type = class.kit_type();
        let record = self
            .records
            .iter()
            .find(|r| r.get(self.kit_type).map(str::trim) == Some(kit_type.as_str()))?;

        let mut row = LeaderboardRow::from_lookup(self.name.as_str(), |key| {
            let column = self.headers.iter().position(|h| h.trim() == key)?;
            record.get(column)?.trim().parse().ok()
        });
        row.playtime /= SECONDS_PER_DAY;
        Some(row)
    }
}

/// Load every `<stats_dir>/<player>/<file>.csv` export, in path order.
/// Files that cannot be read are logged and skipped.
#[instrument(fields(dir = %stats_dir.display()))]
pub fn load_exports(stats_dir: &Path) -> Vec<PlayerExport> {
    let player_dirs: Vec<PathBuf> = match fs::read_dir(stats_dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_dir())
            .sorted()
            .collect(),
        Err(e) => {
            warn!(error = %e, "cannot read stats directory");
            return Vec::new();
        }
    };

    let mut exports = Vec::new();
    for dir in player_dirs {
        for path in files_with_extension(&dir, "csv") {
            match PlayerExport::read(&path) {
                Ok(export) => {
                    debug!(path = %path.display(), rows = export.records.len(), "read export");
                    exports.push(export);
                }
                Err(e) => warn!(error = %e, "skipping export"),
            }
        }
    }
    exports
}

/// Build one leaderboard per class from the first matching row of each export.
pub fn build_competitive_leaderboards(exports: &[PlayerExport]) -> Leaderboards {
    let mut boards = Leaderboards::new();
    for class in CtfClass::all() {
        for row in exports.iter().filter_map(|export| export.row_for(class)) {
            boards.push(class, row);
        }
    }
    boards.clean();
    boards
}

/// Read the exports and write `<output>/competitive/<Class>.csv`.
pub fn run_competitive(config: &Config) -> Result<Vec<PathBuf>> {
    let exports = load_exports(&config.stats_dir);
    info!(files = exports.len(), "Building competitive leaderboards");

    let boards = build_competitive_leaderboards(&exports);
    boards.write_all(&config.competitive_dir())
}
