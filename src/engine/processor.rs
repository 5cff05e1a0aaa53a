//! Fixture and gameweek batch processing.
//!
//! Computation is pure ([`score_fixture`]); [`MatchProcessor`] loads inputs
//! from a [`StatStore`], scores them, then writes results back as a separate
//! step.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::cli::types::{FixtureId, Gameweek};
use crate::engine::bonus::calculate_bonus;
use crate::engine::points::total_points;
use crate::engine::rules::ScoringRules;
use crate::error::{Result, ScoringError};
use crate::models::{
    Fixture, FixtureOutcome, FixtureSummary, GameweekReport, PlayerScore, PlayerStatRecord,
};
use crate::storage::StatStore;


/// Score a finished fixture from its stat records.
///
/// Bonus is always recomputed from the records' stats, replacing any bonus
/// they carry, so repeated runs give identical totals.
pub fn score_fixture(
    rules: &ScoringRules,
    fixture: &Fixture,
    records: &[PlayerStatRecord],
) -> Result<FixtureSummary> {
    if !fixture.finished {
        return Err(ScoringError::FixtureNotFinished {
            fixture_id: fixture.fixture_id,
        });
    }
    if records.is_empty() {
        return Err(ScoringError::NoStats {
            fixture_id: fixture.fixture_id,
        });
    }

    let bonus = calculate_bonus(rules, records);

    let mut scores: Vec<PlayerScore> = records
        .iter()
        .map(|record| {
            let awarded = PlayerStatRecord {
                bonus: bonus.bonus_for(record.player_id),
                bps: bonus.bps_for(record.player_id).unwrap_or(0),
                ..record.clone()
            };
            PlayerScore {
                player_id: awarded.player_id,
                position: awarded.position,
                minutes: awarded.minutes,
                bps: awarded.bps,
                bonus: awarded.bonus,
                total_points: total_points(rules, awarded.position, Some(&awarded)),
            }
        })
        .collect();
    scores.sort_by_key(|s| s.player_id);

    Ok(FixtureSummary {
        fixture_id: fixture.fixture_id,
        gameweek: fixture.gameweek,
        players_processed: scores.len(),
        total_bonus_awarded: bonus.total_awarded(),
        scores,
    })
}

/// Batch entry point over a stat store.
pub struct MatchProcessor<'a, S: StatStore> {
    store: &'a mut S,
    rules: ScoringRules,
}

impl<'a, S: StatStore> MatchProcessor<'a, S> {
    pub fn new(store: &'a mut S, rules: ScoringRules) -> Self {
        Self { store, rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score one fixture and write bonus, BPS and totals back to the store.
    pub fn process_fixture(&mut self, fixture_id: FixtureId) -> Result<FixtureSummary> {
        let fixture = self
            .store
            .fixture(fixture_id)?
            .ok_or(ScoringError::FixtureNotFound { fixture_id })?;

        let records = self.store.fixture_stats(fixture_id)?;
        let summary = score_fixture(&self.rules, &fixture, &records)?;
        self.store.write_fixture_scores(&summary)?;

        info!(
            fixture_id = %fixture_id,
            players = summary.players_processed,
            bonus = summary.total_bonus_awarded,
            "fixture processed"
        );
        Ok(summary)
    }

    /// Process every finished fixture in a gameweek.
    ///
    /// Fixtures are scored in parallel and written back one at a time. A
    /// fixture that fails is reported in the returned [`GameweekReport`] and
    /// does not stop the rest.
    pub fn process_gameweek(&mut self, gameweek: Gameweek) -> Result<GameweekReport> {
        let fixtures: Vec<Fixture> = self
            .store
            .fixtures_for_gameweek(gameweek)?
            .into_iter()
            .filter(|f| {
                if !f.finished {
                    debug!(fixture_id = %f.fixture_id, "skipping unfinished fixture");
                }
                f.finished
            })
            .collect();

        if fixtures.is_empty() {
            return Err(ScoringError::NoFixtures { gameweek });
        }

        let loaded: Vec<(Fixture, Result<Vec<PlayerStatRecord>>)> = fixtures
            .into_iter()
            .map(|fixture| {
                let records = self.store.fixture_stats(fixture.fixture_id);
                (fixture, records)
            })
            .collect();

        let rules = &self.rules;
        let scored: Vec<(FixtureId, Result<FixtureSummary>)> = loaded
            .into_par_iter()
            .map(|(fixture, records)| {
                let summary =
                    records.and_then(|records| score_fixture(rules, &fixture, &records));
                (fixture.fixture_id, summary)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(scored.len());
        for (fixture_id, summary) in scored {
            let written = summary.and_then(|summary| {
                self.store.write_fixture_scores(&summary)?;
                Ok(summary)
            });

            match written {
                Ok(summary) => outcomes.push(FixtureOutcome::Processed(summary)),
                Err(e) => {
                    if e.is_precondition() {
                        info!(fixture_id = %fixture_id, reason = %e, "fixture not ready, skipped");
                    } else {
                        warn!(
                            fixture_id = %fixture_id,
                            error = %e,
                            "fixture failed, continuing gameweek"
                        );
                    }
                    outcomes.push(FixtureOutcome::Failed {
                        fixture_id,
                        error: e.to_string(),
                    });
                }
            }
        }

        let report = GameweekReport { gameweek, outcomes };
        info!(
            gameweek = %gameweek,
            processed = report.processed().count(),
            failed = report.failed().count(),
            bonus = report.total_bonus_awarded(),
            "gameweek processed"
        );
        Ok(report)
    }
}
