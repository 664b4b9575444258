//! Derived statistics computed once, when a submission is accepted.

use crate::models::StatInput;

/// The computed columns of a record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedStats {
    /// Drops + throwaways + stall downs.
    pub turnovers: u32,
    /// (Goals + assists + blocks) - turnovers.
    pub plus_minus: i64,
    /// Total pulls minus out-of-bounds pulls, never below zero.
    pub in_bounds_pulls: u32,
    /// In-bounds share of total pulls as a percentage; None with no pulls.
    pub pull_success_percent: Option<f64>,
}

impl DerivedStats {
    pub fn compute(input: &StatInput) -> Self {
        let turnovers = input
            .drops
            .saturating_add(input.throwaways)
            .saturating_add(input.stall_downs);
        let contributions =
            i64::from(input.goals) + i64::from(input.assists) + i64::from(input.defensive_blocks);
        let plus_minus = contributions - i64::from(turnovers);
        // More out-of-bounds pulls than pulls is accepted; clamp instead of rejecting.
        let in_bounds_pulls = input.total_pulls.saturating_sub(input.out_of_bounds_pulls);
        let pull_success_percent = if input.total_pulls > 0 {
            Some(f64::from(in_bounds_pulls) / f64::from(input.total_pulls) * 100.0)
        } else {
            None
        };
        Self {
            turnovers,
            plus_minus,
            in_bounds_pulls,
            pull_success_percent,
        }
    }
}
