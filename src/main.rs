//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_scoring::{
    cli::{Commands, FplScoring, ProcessCmd},
    commands::{
        common::CommandContext,
        load::handle_load,
        process::{handle_process_fixture, handle_process_gameweek},
        rules::handle_rules,
        squad_points::handle_squad_points,
    },
    config::load_rules,
    engine::squad::AggregationOptions,
};

/// Log to stderr so stdout stays clean for tables and JSON.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fpl_scoring=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let app = FplScoring::parse();

    match app.command {
        Commands::Rules { json, save } => {
            let (rules, source) = load_rules(app.season, app.rules.as_deref())
                .context("failed to resolve scoring rules")?;
            handle_rules(&rules, &source, json, save)?;
        }

        Commands::Load { file } => {
            let mut ctx = CommandContext::new(app.db, app.season, app.rules.as_deref())?;
            handle_load(&mut ctx.db, &file)
                .with_context(|| format!("failed to load {}", file.display()))?;
        }

        Commands::Process { cmd } => {
            let mut ctx = CommandContext::new(app.db, app.season, app.rules.as_deref())?;
            match cmd {
                ProcessCmd::Fixture { id, json } => {
                    handle_process_fixture(&mut ctx, id, json)
                        .with_context(|| format!("failed to process fixture {}", id))?;
                }
                ProcessCmd::Gameweek { gameweek, json } => {
                    let all_succeeded = handle_process_gameweek(&mut ctx, gameweek, json)
                        .with_context(|| format!("failed to process gameweek {}", gameweek))?;
                    if !all_succeeded {
                        anyhow::bail!("some fixtures in gameweek {} failed", gameweek);
                    }
                }
            }
        }

        Commands::SquadPoints {
            squad,
            gameweek,
            policy,
            bench_boost,
            json,
        } => {
            let ctx = CommandContext::new(app.db, app.season, app.rules.as_deref())?;
            let options = AggregationOptions {
                policy,
                bench_boost,
            };
            handle_squad_points(&ctx.db, squad, gameweek, options, json)?;
        }
    }

    Ok(())
}
