//! Squad aggregation: starting XI selection, armband doubling and team total.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::cli::types::{PlayerId, Position};
use crate::models::{PlayerContribution, Squad, StartingXi, TeamPointsResult, STARTING_XI_SIZE};


/// What the aggregator needs to know about a player for one gameweek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameweekPerformance {
    pub position: Position,
    pub points: i32,
    pub minutes: u32,
}

impl GameweekPerformance {
    pub fn played(&self) -> bool {
        self.minutes > 0
    }
}

/// How starters are picked from each position's eligible players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// First eligible players in squad order.
    #[default]
    SquadOrder,
    /// Highest-scoring eligible players, squad order breaking ties.
    HighestPoints,
}

/// Modifiers supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    pub policy: SelectionPolicy,
    /// Count bench points in the total (bench boost chip).
    pub bench_boost: bool,
}

/// Score a squad for one gameweek.
///
/// Only players with minutes can start. Positions with fewer eligible
/// players than the formation asks for are left short rather than failing;
/// `TeamPointsResult::is_full_xi` reports it.
pub fn aggregate_squad(
    squad: &Squad,
    performances: &HashMap<PlayerId, GameweekPerformance>,
    options: &AggregationOptions,
) -> TeamPointsResult {
    let starting_xi = select_starting_xi(squad, performances, options.policy);

    let bench: Vec<PlayerId> = squad
        .players
        .iter()
        .copied()
        .filter(|id| !starting_xi.contains(*id))
        .collect();

    let armband = armband_holder(squad, &starting_xi, performances);

    let mut total_points: i32 = 0;
    let mut bench_points: i32 = 0;
    let breakdown = squad
        .players
        .iter()
        .map(|&player_id| {
            let performance = performances.get(&player_id);
            let base_points = performance.map_or(0, |p| p.points);
            let starting = starting_xi.contains(player_id);

            let multiplier = if armband == Some(player_id) {
                2
            } else if starting || options.bench_boost {
                1
            } else {
                0
            };
            let final_points = base_points.saturating_mul(i32::from(multiplier));

            if starting {
                total_points = total_points.saturating_add(final_points);
            } else {
                bench_points = bench_points.saturating_add(base_points);
            }

            PlayerContribution {
                player_id,
                position: performance.map(|p| p.position),
                minutes: performance.map_or(0, |p| p.minutes),
                base_points,
                multiplier,
                final_points,
                starting,
            }
        })
        .collect();

    if options.bench_boost {
        total_points = total_points.saturating_add(bench_points);
    }

    if starting_xi.len() < STARTING_XI_SIZE {
        debug!(
            squad_id = %squad.squad_id,
            starters = starting_xi.len(),
            formation = %squad.formation,
            "starting XI is short of eligible players"
        );
    }

    TeamPointsResult {
        squad_id: squad.squad_id,
        total_points,
        bench_points,
        starting_xi,
        bench,
        armband,
        breakdown,
    }
}

/// Fill each position up to the formation's slots from players who played.
pub fn select_starting_xi(
    squad: &Squad,
    performances: &HashMap<PlayerId, GameweekPerformance>,
    policy: SelectionPolicy,
) -> StartingXi {
    let mut xi = StartingXi::default();

    for position in Position::ALL {
        let mut eligible: Vec<(PlayerId, i32)> = squad
            .players
            .iter()
            .filter_map(|id| {
                performances
                    .get(id)
                    .filter(|p| p.position == position && p.played())
                    .map(|p| (*id, p.points))
            })
            .collect();

        if policy == SelectionPolicy::HighestPoints {
            // Stable sort keeps squad order among equal scores.
            eligible.sort_by(|a, b| b.1.cmp(&a.1));
        }

        let slots = squad.formation.slots(position);
        xi.position_mut(position)
            .extend(eligible.into_iter().take(slots).map(|(id, _)| id));
    }

    xi
}

/// The captain if they started and played; otherwise the vice-captain when
/// the captain did not play and the vice-captain started.
fn armband_holder(
    squad: &Squad,
    starting_xi: &StartingXi,
    performances: &HashMap<PlayerId, GameweekPerformance>,
) -> Option<PlayerId> {
    let played = |id: PlayerId| performances.get(&id).is_some_and(|p| p.played());

    if played(squad.captain) {
        starting_xi.contains(squad.captain).then_some(squad.captain)
    } else if played(squad.vice_captain) && starting_xi.contains(squad.vice_captain) {
        Some(squad.vice_captain)
    } else {
        None
    }
}
