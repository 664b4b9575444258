//! Chart data: one line per player, one point per logged game.

use crate::models::{StatCollection, StatRecord};
use serde::Serialize;

/// A statistic that can be charted over games.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Stat {
    #[default]
    Goals,
    Assists,
    Drops,
    Throwaways,
    StallDowns,
    OutOfBoundsPulls,
    TotalPulls,
    PullSuccessPercent,
    Turnovers,
    DefensiveBlocks,
    PlusMinus,
}

impl Stat {
    /// Chart selector order.
    pub const ALL: [Stat; 11] = [
        Stat::Goals,
        Stat::Assists,
        Stat::Drops,
        Stat::Throwaways,
        Stat::StallDowns,
        Stat::OutOfBoundsPulls,
        Stat::TotalPulls,
        Stat::PullSuccessPercent,
        Stat::Turnovers,
        Stat::DefensiveBlocks,
        Stat::PlusMinus,
    ];

    /// Column label, also used in the chart title.
    pub fn label(self) -> &'static str {
        match self {
            Stat::Goals => "Goals",
            Stat::Assists => "Assists",
            Stat::Drops => "Drops",
            Stat::Throwaways => "Throwaways",
            Stat::StallDowns => "Stall Downs",
            Stat::OutOfBoundsPulls => "Out-of-Bounds Pulls",
            Stat::TotalPulls => "Total Pulls",
            Stat::PullSuccessPercent => "Pull Success %",
            Stat::Turnovers => "Turnovers",
            Stat::DefensiveBlocks => "Defensive Blocks",
            Stat::PlusMinus => "Plus/Minus",
        }
    }

    /// Parse a column label (exact match).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// None only for pull success with no pulls.
    pub fn value(self, record: &StatRecord) -> Option<f64> {
        let v = match self {
            Stat::Goals => record.goals,
            Stat::Assists => record.assists,
            Stat::Drops => record.drops,
            Stat::Throwaways => record.throwaways,
            Stat::StallDowns => record.stall_downs,
            Stat::OutOfBoundsPulls => record.out_of_bounds_pulls,
            Stat::TotalPulls => record.total_pulls,
            Stat::Turnovers => record.turnovers,
            Stat::DefensiveBlocks => record.defensive_blocks,
            Stat::PullSuccessPercent => return record.pull_success_percent,
            Stat::PlusMinus => return Some(record.plus_minus as f64),
        };
        Some(f64::from(v))
    }

    pub fn title(self) -> String {
        format!("{} Over Games", self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendPoint {
    pub game: String,
    pub value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendSeries {
    pub player: String,
    pub points: Vec<TrendPoint>,
}

/// Group `collection` by player (first-appearance order) into chart series.
pub fn trend_series(collection: &StatCollection, stat: Stat) -> Vec<TrendSeries> {
    let mut series: Vec<TrendSeries> = Vec::new();
    for record in collection {
        let point = TrendPoint {
            game: record.game.clone(),
            value: stat.value(record),
        };
        match series.iter_mut().find(|s| s.player == record.player) {
            Some(s) => s.points.push(point),
            None => series.push(TrendSeries {
                player: record.player.clone(),
                points: vec![point],
            }),
        }
    }
    series
}
