//! StatCollection and the fixed column layout of the data file.

use crate::models::record::StatRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Header row of the data file, in persisted order.
pub const STAT_COLUMNS: [&str; 15] = [
    "Player",
    "Game",
    "Team Score",
    "Opponent Score",
    "Goals",
    "Assists",
    "Drops",
    "Throwaways",
    "Stall Downs",
    "Total Pulls",
    "Out-of-Bounds Pulls",
    "Pull Success %",
    "Defensive Blocks",
    "Turnovers",
    "Plus/Minus",
];

/// Ordered records, insertion order preserved. Duplicate (player, game)
/// entries are allowed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatCollection {
    records: Vec<StatRecord>,
}

impl StatCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<StatRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StatRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&StatRecord> {
        self.records.last()
    }

    /// New collection with `record` after all existing records.
    pub fn with_record(&self, record: StatRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Distinct player names, sorted, blanks excluded (filter choices besides "All").
    pub fn player_options(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.player.as_str()))
    }

    /// Distinct game labels, sorted, blanks excluded.
    pub fn game_options(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.game.as_str()))
    }
}

impl<'a> IntoIterator for &'a StatCollection {
    type Item = &'a StatRecord;
    type IntoIter = std::slice::Iter<'a, StatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
