//! Squad points command implementation

use crate::{
    cli::types::{Gameweek, SquadId},
    engine::squad::{aggregate_squad, AggregationOptions},
    models::TeamPointsResult,
    storage::ScoringDatabase,
    Result,
};

/// Handle the squad-points command
pub fn handle_squad_points(
    db: &ScoringDatabase,
    squad_id: SquadId,
    gameweek: Gameweek,
    options: AggregationOptions,
    as_json: bool,
) -> Result<TeamPointsResult> {
    let squad = db.load_squad(squad_id)?;
    let performances = db.gameweek_performances(gameweek)?;
    let result = aggregate_squad(&squad, &performances, &options);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result);
    }

    let title = if squad.name.is_empty() {
        format!("Squad {}", squad.squad_id)
    } else {
        format!("{} ({})", squad.name, squad.squad_id)
    };
    println!("{} - gameweek {} ({})", title, gameweek, squad.formation);
    println!();
    println!(
        "{:<10} {:<4} {:>4} {:>6} {:>3} {:>6}",
        "Player", "Pos", "Min", "Points", "x", "Total"
    );

    let starters = result.breakdown.iter().filter(|c| c.starting);
    let bench = result.breakdown.iter().filter(|c| !c.starting);
    for (i, c) in starters.chain(bench).enumerate() {
        if i == result.starting_xi.len() {
            println!("-- bench --");
        }
        let marker = if result.armband == Some(c.player_id) {
            " (C)"
        } else {
            ""
        };
        println!(
            "{:<10} {:<4} {:>4} {:>6} {:>3} {:>6}{}",
            c.player_id.to_string(),
            c.position.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            c.minutes,
            c.base_points,
            c.multiplier,
            c.final_points,
            marker
        );
    }

    println!();
    if !result.is_full_xi() {
        println!(
            "Only {} of 11 starting slots filled",
            result.starting_xi.len()
        );
    }
    println!(
        "Total: {} (bench {}{})",
        result.total_points,
        result.bench_points,
        if options.bench_boost { ", boosted" } else { "" }
    );

    Ok(result)
}
