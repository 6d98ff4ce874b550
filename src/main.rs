//! Arena - Entry Point
//!
//! Picks the line-up, runs the battle and narrates it to the console.

use std::io::Stdout;

use anyhow::{Context, Result};
use clap::Parser;

use arena::audio::Announcer;
use arena::data;
use arena::game::{Battle, BattleConfig, BattleMessage, HealPolicy, MessageCategory, TargetPolicy};
use arena::ui::Console;

/// Arena - watch a fixed roster fight to the last one standing
#[derive(Parser, Debug)]
#[command(name = "arena", version)]
#[command(about = "Turn-based arena battle between humans, dragons and giants")]
struct Args {
    /// Combatants to send into the arena (John, Boromir, Evan, Stacy)
    combatants: Vec<String>,

    /// Random seed for reproducible battles
    #[arg(long)]
    seed: Option<u64>,

    /// Round cap before the battle is called a draw
    #[arg(long, default_value_t = arena::game::DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Recompute targets every turn so the fallen cannot act or be hit
    #[arg(long)]
    live_targets: bool,

    /// Stop heals at max health
    #[arg(long)]
    clamp_heals: bool,

    /// Read announcements aloud with the `say` command
    #[arg(long)]
    speech: bool,
}

impl Args {
    fn config(&self) -> BattleConfig {
        let target_policy = if self.live_targets {
            TargetPolicy::LiveOnly
        } else {
            TargetPolicy::RoundSnapshot
        };
        let heal_policy = if self.clamp_heals {
            HealPolicy::ClampToMax
        } else {
            HealPolicy::Uncapped
        };

        BattleConfig::default()
            .with_max_rounds(self.max_rounds)
            .with_target_policy(target_policy)
            .with_heal_policy(heal_policy)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::info!("Starting Arena v{}", env!("CARGO_PKG_VERSION"));

    let lineup = if args.combatants.is_empty() {
        data::default_lineup()
    } else {
        data::lineup(&args.combatants)
    };
    let roster = lineup.context("failed to assemble the line-up")?;

    let battle = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Battle::seeded(roster, seed)
        }
        None => Battle::new(roster),
    }
    .context("failed to set up the battle")?;
    let mut battle = battle.with_config(args.config());

    let mut console = Console::stdout();
    let mut announcer = Announcer::new(args.speech);

    narrate(battle.drain_messages(), &mut console, &mut announcer)?;
    while !battle.is_concluded() {
        battle.play_round().context("battle aborted")?;
        narrate(battle.drain_messages(), &mut console, &mut announcer)?;
    }

    if let Some(outcome) = battle.outcome() {
        log::info!("Arena closed after {} rounds", outcome.rounds());
    }
    Ok(())
}

/// Print pending messages and speak the ones worth hearing
fn narrate(
    messages: Vec<BattleMessage>,
    console: &mut Console<Stdout>,
    announcer: &mut Announcer,
) -> Result<()> {
    for message in &messages {
        console.render(message)?;
        if matches!(
            message.category,
            MessageCategory::Announcement | MessageCategory::Elimination
        ) {
            console.flush()?;
            announcer.announce(&message.text);
        }
    }
    console.flush()?;
    Ok(())
}
