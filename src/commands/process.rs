//! Process commands: score fixtures and write results back.

use crate::{
    cli::types::{FixtureId, Gameweek},
    engine::processor::MatchProcessor,
    models::{FixtureOutcome, FixtureSummary},
    Result,
};

use super::common::CommandContext;

/// Handle `process fixture`
pub fn handle_process_fixture(
    ctx: &mut CommandContext,
    fixture_id: FixtureId,
    as_json: bool,
) -> Result<FixtureSummary> {
    let mut processor = MatchProcessor::new(&mut ctx.db, ctx.rules.clone());
    let summary = processor.process_fixture(fixture_id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(summary)
}

/// Handle `process gameweek`. Returns whether every fixture succeeded.
pub fn handle_process_gameweek(
    ctx: &mut CommandContext,
    gameweek: Gameweek,
    as_json: bool,
) -> Result<bool> {
    let mut processor = MatchProcessor::new(&mut ctx.db, ctx.rules.clone());
    let report = processor.process_gameweek(gameweek)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Gameweek {} ({})", report.gameweek, ctx.rules.season());
        println!();
        for outcome in &report.outcomes {
            match outcome {
                FixtureOutcome::Processed(summary) => print_summary(summary),
                FixtureOutcome::Failed { fixture_id, error } => {
                    println!("✗ Fixture {}: {}", fixture_id, error);
                }
            }
            println!();
        }
        println!(
            "{} fixtures processed, {} failed, {} players, {} bonus points",
            report.processed().count(),
            report.failed().count(),
            report.players_processed(),
            report.total_bonus_awarded()
        );
    }

    Ok(report.all_succeeded())
}

fn print_summary(summary: &FixtureSummary) {
    println!(
        "✓ Fixture {} (gameweek {}): {} players, {} bonus points",
        summary.fixture_id,
        summary.gameweek,
        summary.players_processed,
        summary.total_bonus_awarded
    );
    println!(
        "{:<10} {:<4} {:>4} {:>4} {:>5} {:>6}",
        "Player", "Pos", "Min", "BPS", "Bonus", "Points"
    );
    for score in &summary.scores {
        println!(
            "{:<10} {:<4} {:>4} {:>4} {:>5} {:>6}",
            score.player_id.to_string(),
            score.position.to_string(),
            score.minutes,
            score.bps,
            score.bonus,
            score.total_points
        );
    }
}
