//! # pgg_app
//!
//! Loads the game configuration, applies command-line overrides and runs
//! the engine loop with a scripted input source.
//!
//! ## Startup Sequence
//!
//! 1. Read the JSON config if `--config` is given, else use defaults.
//! 2. Apply flag overrides and validate.
//! 3. Spawn players and enter the tick loop in the menu state.

mod engine;
mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pgg_ecs::ComponentKind;
use pgg_systems::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::{Engine, Frame};
use input::ScriptedInput;

#[derive(Parser)]
#[command(name = "pgg_app", about = "Procedural generation strategy game, headless")]
struct Args {
    /// Path to a JSON game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks (0 = run until quit)
    #[arg(short, long, default_value_t = 0)]
    max_ticks: u64,

    /// Target frames per second
    #[arg(long)]
    fps: Option<f64>,

    /// Seed for map generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability that a grid cell is left empty
    #[arg(long)]
    skip_probability: Option<f64>,

    /// Comma-separated input script, e.g. "confirm,click:40:40,end-turn,quit"
    #[arg(long, default_value = "confirm")]
    script: String,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(skip) = self.skip_probability {
            config.skip_probability = skip;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pgg_app=info".parse()?))
        .init();

    let args = Args::parse();
    let config = args.game_config()?;
    let mut input: ScriptedInput = args.script.parse()?;

    info!(
        title = %config.title,
        grid_width = config.grid_width(),
        grid_height = config.grid_height(),
        players = config.players.len(),
        "game starting"
    );

    let mut engine = Engine::new(config, args.max_ticks);
    let last = engine.run(&mut input)?;

    let world = engine.world();
    info!(
        ticks = engine.tick_id(),
        state = ?engine.state(),
        provinces = world.entities_with(&[ComponentKind::ProvinceInfo]).len(),
        turn = ?engine.turns().turn_number(),
        quit = engine.quit_requested(),
        "game finished"
    );
    match last {
        Frame::Menu(menu) => info!(title = menu.title, "stopped in menu"),
        Frame::Game { commands, turn, .. } => info!(
            draw_commands = commands.len(),
            player = ?turn.map(|t| t.player_name),
            "last frame"
        ),
    }
    Ok(())
}
