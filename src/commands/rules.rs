//! Rules command: show (and optionally save) the resolved scoring table.

use crate::{
    cli::types::Position,
    config::{rules_path, save_rules, RulesSource},
    engine::rules::{ScoringRules, StatEvent},
    Result,
};

/// Handle the rules command
pub fn handle_rules(
    rules: &ScoringRules,
    source: &RulesSource,
    as_json: bool,
    save: bool,
) -> Result<()> {
    if save {
        let path = rules_path(rules.season());
        save_rules(&path, rules)?;
        eprintln!("✓ Rules written to {}", path.display());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(rules.weights())?);
        return Ok(());
    }

    println!("Scoring rules {} ({})", rules.season(), source);
    println!();
    println!(
        "{:<24} {:>4} {:>4} {:>4} {:>4}",
        "Event", "GK", "DEF", "MID", "FWD"
    );
    for event in StatEvent::ALL {
        let row: Vec<String> = Position::ALL
            .iter()
            .map(|&p| {
                let points = rules.points_for(p, event, unit_count(rules, event, p));
                format!("{:>4}", points)
            })
            .collect();
        println!("{:<24} {}", event_label(rules, event), row.join(" "));
    }

    Ok(())
}

/// Smallest count that earns the event's points for a position.
fn unit_count(rules: &ScoringRules, event: StatEvent, position: Position) -> u32 {
    let w = rules.weights();
    match event {
        StatEvent::Minutes => w.appearance.long_appearance_minutes,
        StatEvent::GoalsConceded => w.goals_conceded_per,
        StatEvent::Saves => w.saves_per,
        StatEvent::DefensiveContribution => match (w.defensive_contribution, position) {
            (Some(dc), Position::Defender) => dc.defender_threshold,
            (Some(dc), _) => dc.outfield_threshold,
            (None, _) => 0,
        },
        _ => 1,
    }
}

fn event_label(rules: &ScoringRules, event: StatEvent) -> String {
    let w = rules.weights();
    match event {
        StatEvent::Minutes => format!("{} ({}+)", event, w.appearance.long_appearance_minutes),
        StatEvent::GoalsConceded => format!("{} (per {})", event, w.goals_conceded_per),
        StatEvent::Saves => format!("{} (per {})", event, w.saves_per),
        StatEvent::DefensiveContribution => match w.defensive_contribution {
            Some(dc) => format!(
                "defensive ({}/{})",
                dc.defender_threshold, dc.outfield_threshold
            ),
            None => "defensive (off)".to_string(),
        },
        _ => event.to_string(),
    }
}
