//! Bonus point awards for one fixture.
//!
//! Players are ranked by BPS and the three highest *distinct* BPS values earn
//! 3, 2 and 1 bonus points. Everyone sharing a value shares its award, and a
//! BPS of 0 never earns bonus.

use serde::Serialize;

use crate::cli::types::PlayerId;
use crate::engine::bps::compute_bps;
use crate::engine::rules::ScoringRules;
use crate::models::PlayerStatRecord;

#[cfg(test)]
mod tests;

/// Bonus for the first, second and third distinct BPS values.
pub const BONUS_TIERS: [u32; 3] = [3, 2, 1];

/// One ranked player's BPS and bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BonusAward {
    pub player_id: PlayerId,
    pub bps: u32,
    pub bonus: u32,
}

/// Ranked bonus awards for a fixture, BPS descending then player id ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BonusTable {
    awards: Vec<BonusAward>,
}

impl BonusTable {
    pub fn awards(&self) -> &[BonusAward] {
        &self.awards
    }

    /// Bonus for a player; 0 for anyone not ranked.
    pub fn bonus_for(&self, player_id: PlayerId) -> u32 {
        self.award_for(player_id).map_or(0, |a| a.bonus)
    }

    /// Computed BPS for a ranked player.
    pub fn bps_for(&self, player_id: PlayerId) -> Option<u32> {
        self.award_for(player_id).map(|a| a.bps)
    }

    pub fn total_awarded(&self) -> u32 {
        self.awards.iter().map(|a| a.bonus).sum()
    }

    pub fn len(&self) -> usize {
        self.awards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }

    fn award_for(&self, player_id: PlayerId) -> Option<&BonusAward> {
        self.awards.iter().find(|a| a.player_id == player_id)
    }
}

/// Rank every player with minutes in the fixture and assign bonus.
///
/// Players with no minutes are left out of the table. The result depends
/// only on the records' contents, not on their order.
pub fn calculate_bonus<'a, I>(rules: &ScoringRules, records: I) -> BonusTable
where
    I: IntoIterator<Item = &'a PlayerStatRecord>,
{
    let mut ranked: Vec<(PlayerId, u32)> = records
        .into_iter()
        .filter(|r| r.played())
        .map(|r| (r.player_id, compute_bps(rules, r.position, r)))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut tier = 0usize;
    let mut previous: Option<u32> = None;
    let awards = ranked
        .into_iter()
        .map(|(player_id, bps)| {
            match previous {
                Some(value) if value != bps => tier += 1,
                _ => {}
            }
            previous = Some(bps);

            let bonus = if bps > 0 {
                BONUS_TIERS.get(tier).copied().unwrap_or(0)
            } else {
                0
            };

            BonusAward {
                player_id,
                bps,
                bonus,
            }
        })
        .collect();

    BonusTable { awards }
}
