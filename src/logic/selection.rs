//! Player/game filtering of a collection.

use crate::models::StatCollection;
use serde::Deserialize;

/// Label of the catch-all filter choice.
pub const ALL: &str = "All";

/// One filter choice: every value, or exactly one. Deserializes from the
/// plain dropdown value, so it can sit directly in a query struct.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value)
        }
    }
}

/// Records matching both selections, original order kept. Never touches `collection`.
pub fn filter(
    collection: &StatCollection,
    player: &Selection,
    game: &Selection,
) -> StatCollection {
    StatCollection::from_records(
        collection
            .iter()
            .filter(|r| player.matches(&r.player) && game.matches(&r.game))
            .cloned()
            .collect(),
    )
}

/// Filter choices as offered in the UI: "All" followed by the sorted distinct values.
pub fn options_with_all(values: Vec<String>) -> Vec<String> {
    std::iter::once(ALL.to_string()).chain(values).collect()
}
