//! Headless Tekra battle runner.
//!
//! Loads a content directory, starts one encounter and lets the autoplay
//! pilot fight it, logging events and the final outcome.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use tekra_app::autoplay::{self, AutoplayReport};
use tekra_app::config::AppConfig;
use tekra_app::state::AppState;
use tekra_campaign::story::StoryDifficulty;
use tekra_campaign::progress::LEVEL_XP_THRESHOLDS;
use tekra_campaign::{ContentLibrary, PlayerProgress, ProgressSink};
use tekra_sim::BattleEngine;

/// Fight one Tekra encounter headlessly
#[derive(Parser, Debug)]
#[command(name = "tekra")]
#[command(about = "Headless Tekra battle runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (abilities.json, players.json, ...)
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ModeArg::Arcade)]
    mode: ModeArg,

    /// Wave, raid boss, event or story stage id; the first one when omitted
    #[arg(long)]
    target: Option<String>,

    /// Story difficulty
    #[arg(long, value_enum, default_value_t = DifficultyArg::Normal)]
    difficulty: DifficultyArg,

    /// Overrides the config seed
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the config player level
    #[arg(long)]
    level: Option<u32>,

    #[arg(long, default_value_t = 9_000)]
    max_ticks: u64,

    /// Run on the 30Hz game loop thread instead of ticking directly
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Arcade,
    Raid,
    Event,
    Story,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Normal,
    Elite,
    Boss,
}

impl From<DifficultyArg> for StoryDifficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Normal => StoryDifficulty::Normal,
            DifficultyArg::Elite => StoryDifficulty::Elite,
            DifficultyArg::Boss => StoryDifficulty::Boss,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(level) = cli.level {
        config.player_level = level;
    }

    let content = Arc::new(
        ContentLibrary::load_dir(&cli.data)
            .with_context(|| format!("failed to load content from {}", cli.data.display()))?,
    );
    let mut engine = build_engine(&config, Arc::clone(&content))?;
    start(&mut engine, &content, &cli)?;

    let report = if cli.realtime {
        run_realtime(engine, cli.max_ticks)?
    } else {
        autoplay::run_headless(&mut engine, cli.max_ticks)
    };

    info!(
        outcome = ?report.outcome,
        ticks = report.ticks,
        plays = report.plays,
        "Run finished"
    );
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.final_snapshot)?);
    }
    Ok(())
}

fn build_engine(config: &AppConfig, content: Arc<ContentLibrary>) -> Result<BattleEngine> {
    let player = match &config.player_id {
        Some(id) => content.fighters.player(id).cloned(),
        None => content.fighters.players().first().cloned(),
    }
    .context("no player fighter available")?;

    let mut progress = PlayerProgress::new(player.id.clone());
    // Seed the level from the config by granting the XP it takes to reach it.
    let level_index = config.player_level.max(1) as usize - 1;
    if let Some(&xp) = LEVEL_XP_THRESHOLDS.get(level_index).or(LEVEL_XP_THRESHOLDS.last()) {
        progress.add_xp(xp);
    }

    let mut engine = BattleEngine::new(config.sim_config(), content);
    engine.attach_progress(Box::new(progress));
    engine.select_player(player);
    Ok(engine)
}

fn start(engine: &mut BattleEngine, content: &ContentLibrary, cli: &Cli) -> Result<()> {
    let target = cli.target.clone().or_else(|| first_target(content, cli.mode));
    let Some(target) = target else {
        bail!("no {:?} content available", cli.mode);
    };
    info!(mode = ?cli.mode, %target, "Starting");

    match cli.mode {
        ModeArg::Arcade => engine.start_arcade(&target)?,
        ModeArg::Raid => engine.start_raid(&target)?,
        ModeArg::Event => engine.start_event(&target)?,
        ModeArg::Story => engine.start_story(&target, cli.difficulty.into())?,
    }
    Ok(())
}

fn first_target(content: &ContentLibrary, mode: ModeArg) -> Option<String> {
    match mode {
        ModeArg::Arcade => content.arcade.first().map(|w| w.id.clone()),
        ModeArg::Raid => content.raids.first().map(|r| r.id.clone()),
        ModeArg::Event => content.events.first().map(|e| e.id.clone()),
        ModeArg::Story => content
            .chapters
            .iter()
            .flat_map(|c| c.stages.iter())
            .next()
            .map(|s| s.id.clone()),
    }
}

fn run_realtime(engine: BattleEngine, max_ticks: u64) -> Result<AutoplayReport> {
    let state = AppState::new();
    state.start(move || engine)?;
    let report = autoplay::run_realtime(&state, max_ticks);
    state.shutdown()?;
    Ok(report?)
}
