//! Arena entry point: one battle against the Evil Wizard on the console.
mod console;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use combat_core::{
    choose_class, random_seed, ArenaConstants, Battle, BattleEvent, PlayerClass, Reporter,
    SeededDice,
};
use console::{ConsoleInput, ConsoleReporter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClassArg {
    Warrior,
    Mage,
    Archer,
    Paladin,
}

impl From<ClassArg> for PlayerClass {
    fn from(class: ClassArg) -> Self {
        match class {
            ClassArg::Warrior => PlayerClass::Warrior,
            ClassArg::Mage => PlayerClass::Mage,
            ClassArg::Archer => PlayerClass::Archer,
            ClassArg::Paladin => PlayerClass::Paladin,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "arena")]
#[command(about = "Fight the Evil Wizard in a turn-based text battle")]
struct Args {
    /// RNG seed for a reproducible battle; drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file overriding the arena constants
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip the class menu
    #[arg(long, value_enum)]
    class: Option<ClassArg>,
    /// Print a JSON battle summary once the battle ends
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let constants = match &args.config {
        Some(path) => ArenaConstants::load_from_path(path)
            .with_context(|| format!("failed to load arena config {}", path.display()))?,
        None => ArenaConstants::default(),
    };

    let seed = args.seed.unwrap_or_else(random_seed);
    tracing::info!(seed, "arena seed");

    let mut input = ConsoleInput::stdio();
    let mut reporter = ConsoleReporter::new(io::stdout());
    reporter.report(&BattleEvent::Welcome);

    let class = match args.class {
        Some(class) => class.into(),
        None => choose_class(&mut input, &mut reporter).context("no class chosen")?,
    };

    let mut battle = Battle::new(class, constants, SeededDice::seeded(seed));
    battle
        .run(&mut input, &mut reporter)
        .context("battle interrupted")?;

    if args.json {
        let report = serde_json::json!({
            "seed": seed,
            "summary": battle.summary(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
