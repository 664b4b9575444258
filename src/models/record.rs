//! StatRecord (one persisted row) and StatInput (one form submission).

use crate::logic::DerivedStats;
use crate::models::error::StatsError;
use serde::{Deserialize, Serialize};

/// Raw form submission. Numeric fields default to 0 when omitted; negative
/// values fail deserialization, so they never reach the store.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatInput {
    pub player: String,
    pub game: String,
    pub team_score: u32,
    pub opponent_score: u32,
    pub goals: u32,
    pub assists: u32,
    pub drops: u32,
    pub throwaways: u32,
    pub stall_downs: u32,
    pub defensive_blocks: u32,
    pub total_pulls: u32,
    pub out_of_bounds_pulls: u32,
}

impl StatInput {
    /// Candidate with the two required labels set and every stat at zero.
    pub fn new(player: impl Into<String>, game: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            game: game.into(),
            ..Self::default()
        }
    }
}

/// One logged game performance for one player.
///
/// Field order is the persisted column order; the serde names are the CSV
/// headers. The aliases accept the short naming used by older files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Game")]
    pub game: String,
    #[serde(rename = "Team Score", alias = "Your Score")]
    pub team_score: u32,
    #[serde(rename = "Opponent Score")]
    pub opponent_score: u32,
    #[serde(rename = "Goals")]
    pub goals: u32,
    #[serde(rename = "Assists")]
    pub assists: u32,
    #[serde(rename = "Drops")]
    pub drops: u32,
    #[serde(rename = "Throwaways")]
    pub throwaways: u32,
    #[serde(rename = "Stall Downs")]
    pub stall_downs: u32,
    #[serde(rename = "Total Pulls")]
    pub total_pulls: u32,
    #[serde(rename = "Out-of-Bounds Pulls")]
    pub out_of_bounds_pulls: u32,
    /// None when no pulls were thrown (empty CSV field).
    #[serde(rename = "Pull Success %")]
    pub pull_success_percent: Option<f64>,
    #[serde(rename = "Defensive Blocks", alias = "Ds")]
    pub defensive_blocks: u32,
    #[serde(rename = "Turnovers")]
    pub turnovers: u32,
    #[serde(rename = "Plus/Minus")]
    pub plus_minus: i64,
}

impl StatRecord {
    /// Validate a submission and compute its derived fields.
    /// Empty player or game is rejected; both are stored exactly as submitted.
    pub fn from_input(input: &StatInput) -> Result<Self, StatsError> {
        if input.player.is_empty() {
            return Err(StatsError::Validation("Player"));
        }
        if input.game.is_empty() {
            return Err(StatsError::Validation("Game"));
        }
        let derived = DerivedStats::compute(input);
        Ok(Self {
            player: input.player.clone(),
            game: input.game.clone(),
            team_score: input.team_score,
            opponent_score: input.opponent_score,
            goals: input.goals,
            assists: input.assists,
            drops: input.drops,
            throwaways: input.throwaways,
            stall_downs: input.stall_downs,
            total_pulls: input.total_pulls,
            out_of_bounds_pulls: input.out_of_bounds_pulls,
            pull_success_percent: derived.pull_success_percent,
            defensive_blocks: input.defensive_blocks,
            turnovers: derived.turnovers,
            plus_minus: derived.plus_minus,
        })
    }

    /// Pulls that landed in bounds. Not persisted; clamped at zero when the
    /// out-of-bounds count exceeds the total.
    pub fn in_bounds_pulls(&self) -> u32 {
        self.total_pulls.saturating_sub(self.out_of_bounds_pulls)
    }
}
