//! Headless self-play.
//!
//! Plays one seeded match on the virtual clock and prints every message in
//! the chosen language. Task results are decided by a coin with the given
//! success probability.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use path_duel::{
    BoardGenerator, BuiltinLocalizer, Effect, GameConfig, GameError, GameMode, GamePhase,
    GameRng, GameSession, JsonLocalizer, JsonTaskProvider, Language, Localizer,
    SerpentineGenerator, StaticTaskProvider, TaskOutcome, TaskProvider,
};

#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play a headless path-duel match", version)]
struct Cli {
    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Game mode selecting the task set
    #[arg(short, long, default_value = "classic")]
    mode: String,

    /// Display language
    #[arg(short, long)]
    language: Option<String>,

    /// Directory with `<mode>/<language>.json` task lists
    #[arg(long)]
    tasks_dir: Option<PathBuf>,

    /// Directory with `<language>.json` translations
    #[arg(long)]
    locale_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Probability that a task is reported as completed
    #[arg(long, default_value_t = 0.5)]
    success_rate: f64,

    /// Stop after this many turns
    #[arg(long, default_value_t = 500)]
    max_turns: u32,
}

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut coin = config
        .seed
        .map_or_else(GameRng::from_entropy, GameRng::new)
        .for_context("autoplay");

    let generator: Box<dyn BoardGenerator> = Box::new(SerpentineGenerator::default());
    let provider: Box<dyn TaskProvider> = match &cli.tasks_dir {
        Some(dir) => Box::new(JsonTaskProvider::new(dir)),
        None => Box::new(StaticTaskProvider::new()),
    };
    let localizer: Box<dyn Localizer> = match &cli.locale_dir {
        Some(dir) => Box::new(JsonLocalizer::new(dir)),
        None => Box::new(BuiltinLocalizer),
    };

    let mut session = GameSession::new(config, generator, provider, localizer)?;
    if let Some(code) = &cli.language {
        session.set_language(Language::new(code.as_str()));
    }
    session.start_game(GameMode::new(cli.mode.as_str()))?;
    report(&mut session);

    while session.state().phase != GamePhase::Win {
        if session.state().turn.number() > cli.max_turns {
            warn!(max_turns = cli.max_turns, "turn limit reached");
            break;
        }

        if session.state().can_roll() {
            session.roll();
        } else if session.state().can_report() {
            let outcome = if coin.gen_bool(cli.success_rate.clamp(0.0, 1.0)) {
                TaskOutcome::Completed
            } else {
                TaskOutcome::Failed
            };
            session.report(outcome);
        } else if session.is_idle() {
            warn!(phase = ?session.state().phase, "no progress possible");
            break;
        }

        session.run_until_idle();
        report(&mut session);
    }

    let state = session.state();
    info!(
        winner = ?state.winner,
        turns = state.turn.number(),
        elapsed_ms = session.now_ms(),
        "match finished"
    );
    Ok(())
}

fn report(session: &mut GameSession) {
    for effect in session.drain_effects() {
        match effect {
            Effect::Announce(message) => info!("{}", session.render(&message)),
            Effect::TaskAssigned(task) => info!(executor = %task.executor, "task: {}", task.description),
            _ => {}
        }
    }
}
