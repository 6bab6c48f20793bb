use serde::{Deserialize, Serialize};

use super::{ClassStatRecord, CtfClass};

/// Output column order shared by every leaderboard file.
pub const COLUMN_ORDER: [&str; 12] = [
    "name",
    "playtime",
    "kills",
    "deaths",
    "kdr",
    "flags_captured",
    "flags_recovered",
    "flags_stolen",
    "time_with_flag",
    "damage_dealt",
    "damage_received",
    "hp_restored",
];

/// A single player's line in a class leaderboard.
///
/// Field order matches [`COLUMN_ORDER`]; the CSV header is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub playtime: f64,
    pub kills: f64,
    pub deaths: f64,
    pub kdr: f64,
    pub flags_captured: f64,
    pub flags_recovered: f64,
    pub flags_stolen: f64,
    pub time_with_flag: f64,
    pub damage_dealt: f64,
    pub damage_received: f64,
    pub hp_restored: f64,
}

impl LeaderboardRow {
    /// Reindex arbitrary stat fields onto the fixed schema.
    /// Columns `lookup` has no value for become NaN.
    pub fn from_lookup(name: impl Into<String>, lookup: impl Fn(&str) -> Option<f64>) -> Self {
        let col = |key: &str| lookup(key).unwrap_or(f64::NAN);
        Self {
            name: name.into(),
            playtime: col("playtime"),
            kills: col("kills"),
            deaths: col("deaths"),
            kdr: col("kdr"),
            flags_captured: col("flags_captured"),
            flags_recovered: col("flags_recovered"),
            flags_stolen: col("flags_stolen"),
            time_with_flag: col("time_with_flag"),
            damage_dealt: col("damage_dealt"),
            damage_received: col("damage_received"),
            hp_restored: col("hp_restored"),
        }
    }

    pub fn from_record(name: impl Into<String>, record: &ClassStatRecord) -> Self {
        Self::from_lookup(name, |key| record.get(key))
    }

    fn values_mut(&mut self) -> [&mut f64; 11] {
        [
            &mut self.playtime,
            &mut self.kills,
            &mut self.deaths,
            &mut self.kdr,
            &mut self.flags_captured,
            &mut self.flags_recovered,
            &mut self.flags_stolen,
            &mut self.time_with_flag,
            &mut self.damage_dealt,
            &mut self.damage_received,
            &mut self.hp_restored,
        ]
    }

    /// Replace NaN and infinities with 0 and round to 3 decimals.
    pub fn clean(&mut self) {
        for value in self.values_mut() {
            *value = round3(if value.is_finite() { *value } else { 0.0 });
        }
    }
}

/// Round to 3 decimals, halves to even. Values too large to scale are
/// already whole and come back unchanged.
fn round3(value: f64) -> f64 {
    let scaled = value * 1000.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / 1000.0
}

/// All rows collected for one class, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardTable {
    pub class: CtfClass,
    pub rows: Vec<LeaderboardRow>,
}

impl LeaderboardTable {
    pub fn new(class: CtfClass) -> Self {
        Self {
            class,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: LeaderboardRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clean(&mut self) {
        self.rows.iter_mut().for_each(LeaderboardRow::clean);
    }
}
