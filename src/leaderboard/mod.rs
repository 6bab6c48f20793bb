pub mod casual;
pub mod competitive;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::{LeaderboardError, Result};
use crate::model::{CtfClass, LeaderboardRow, LeaderboardTable, COLUMN_ORDER};

/// One table per class, built up across all players before being written.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboards {
    tables: BTreeMap<CtfClass, LeaderboardTable>,
}

impl Leaderboards {
    /// An empty table for every class.
    pub fn new() -> Self {
        Self {
            tables: CtfClass::all()
                .map(|class| (class, LeaderboardTable::new(class)))
                .collect(),
        }
    }

    pub fn push(&mut self, class: CtfClass, row: LeaderboardRow) {
        self.tables
            .entry(class)
            .or_insert_with(|| LeaderboardTable::new(class))
            .push(row);
    }

    pub fn get(&self, class: CtfClass) -> Option<&LeaderboardTable> {
        self.tables.get(&class)
    }

    /// Tables in fixed class order.
    pub fn tables(&self) -> impl Iterator<Item = &LeaderboardTable> {
        self.tables.values()
    }

    /// Zero out non-finite values and round everything to 3 decimals.
    pub fn clean(&mut self) {
        self.tables.values_mut().for_each(LeaderboardTable::clean);
    }

    /// Write every table to `<dir>/<Class>.csv`, returning the paths written.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn write_all(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|source| LeaderboardError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        self.tables()
            .map(|table| -> Result<PathBuf> {
                info!(
                    class = %table.class,
                    rows = table.len(),
                    "Creating {} leaderboard",
                    table.class
                );
                let path = dir.join(format!("{}.csv", table.class));
                write_table(table, &path)?;
                Ok(path)
            })
            .collect()
    }
}

impl Default for Leaderboards {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a table as CSV with a header row, even when it has no rows.
pub fn write_table(table: &LeaderboardTable, path: &Path) -> Result<()> {
    let csv_err = |source: csv::Error| LeaderboardError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(COLUMN_ORDER).map_err(csv_err)?;
    for row in &table.rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| LeaderboardError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read back a leaderboard file written by [`write_table`].
pub fn read_table(class: CtfClass, path: &Path) -> Result<LeaderboardTable> {
    let csv_err = |source: csv::Error| LeaderboardError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<LeaderboardRow>, _>>()
        .map_err(csv_err)?;
    Ok(LeaderboardTable { class, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, kills: f64, deaths: f64) -> LeaderboardRow {
        LeaderboardRow::from_lookup(name, |key| match key {
            "playtime" => Some(2.0 / 3.0),
            "kills" => Some(kills),
            "deaths" => Some(deaths),
            "kdr" => Some(kills / deaths),
            _ => None,
        })
    }

    #[test]
    fn test_new_has_every_class() {
        let boards = Leaderboards::new();
        assert_eq!(boards.tables().count(), 15);
        assert!(boards.tables().all(LeaderboardTable::is_empty));
        let order: Vec<CtfClass> = boards.tables().map(|t| t.class).collect();
        assert_eq!(order, CtfClass::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut boards = Leaderboards::new();
        boards.push(CtfClass::Mage, row("alice", 10.0, 0.0));
        boards.push(CtfClass::Mage, row("bob", 7.0, 3.0));
        boards.clean();

        let paths = boards.write_all(dir.path()).unwrap();
        assert_eq!(paths.len(), 15);

        let mage_path = dir.path().join("Mage.csv");
        let content = fs::read_to_string(&mage_path).unwrap();
        assert_eq!(content.lines().next().unwrap(), COLUMN_ORDER.join(","));

        let mage = read_table(CtfClass::Mage, &mage_path).unwrap();
        assert_eq!(&mage, boards.get(CtfClass::Mage).unwrap());
        assert_eq!(mage.rows[0].kdr, 0.0);
        assert_eq!(mage.rows[0].playtime, 0.667);
        assert_eq!(mage.rows[1].kdr, 2.333);

        let mut reread = mage.clone();
        reread.clean();
        assert_eq!(reread, mage);
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        Leaderboards::new().write_all(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("Necro.csv")).unwrap();
        assert_eq!(content.trim_end(), COLUMN_ORDER.join(","));
        let necro = read_table(CtfClass::Necro, &dir.path().join("Necro.csv")).unwrap();
        assert!(necro.is_empty());
    }
}
