use std::collections::BTreeMap;

use super::CtfClass;

/// One player's stats for one class, keyed by normalized label
/// (`"flags_captured"`, `"hp_restored"`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassStatRecord {
    fields: BTreeMap<String, f64>,
}

impl ClassStatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.fields.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.fields.insert(key.into(), value);
    }

    /// Insert `key` with `value` only if the record has no such field yet.
    pub fn insert_default(&mut self, key: &str, value: f64) {
        self.fields.entry(key.to_string()).or_insert(value);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, f64)> for ClassStatRecord {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// The classes a player has stats for, as found on their profile page.
pub type PlayerStatSet = BTreeMap<CtfClass, ClassStatRecord>;
