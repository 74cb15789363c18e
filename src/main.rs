//! Spritelab demo entry point.
//!
//! A headless run of the sprite-animation sandbox engine:
//! - **bevy_ecs** for the entity-component-system core
//! - **crossbeam-channel** for the interaction bridge
//! - **configparser** for the INI stage configuration
//!
//! The binary builds a small cast of sprites, queues catalog actions on
//! them, plays everything back at a fixed tick rate and prints the settled
//! transforms.
//!
//! # Run Outline
//!
//! 1. Parse CLI flags and load `stage.ini` (defaults if missing)
//! 2. Build the [`Stage`], register step/run observers for logging
//! 3. Spawn the scripted `cat` and `ball` plus `--sprites N` randomized extras
//! 4. `play()`, then tick at `--fps` until every queue settles
//! 5. Print one line per sprite (text table or `--json` lines)
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --sprites 4 --seed 42 --json
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::On;
use clap::Parser;
use log::{error, info, warn};

use spritelab::catalog::Action;
use spritelab::events::playback::{RunFinished, StepStarted};
use spritelab::resources::stageconfig::StageConfig;
use spritelab::resources::worldtime::WorldTime;
use spritelab::stage::Stage;

/// Spritelab sandbox
#[derive(Parser)]
#[command(version, about = "Headless run of the sprite-animation sandbox")]
struct Cli {
    /// Path to the INI configuration file (default: ./stage.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the action catalog in display order and exit.
    #[arg(long)]
    list_actions: bool,

    /// Number of randomized sprites besides the scripted cat and ball.
    #[arg(long, default_value_t = 0)]
    sprites: u32,

    /// Seed for the randomized sprites and queues.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Tick rate of the headless run.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Print final sprite snapshots as JSON lines instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.list_actions {
        for action in Action::ALL {
            println!("{}", action.label());
        }
        return;
    }

    let mut config = match cli.config {
        Some(path) => StageConfig::with_path(path),
        None => StageConfig::new(),
    };
    if let Err(err) = config.load_from_file() {
        warn!("Config not loaded ({}), using defaults", err);
    }
    let (canvas_width, canvas_height) = config.canvas_size();

    let fps = if cli.fps > 0.0 { cli.fps } else { 60.0 };
    let dt = 1.0 / fps;

    let mut stage = Stage::with_config(config);

    stage.world_mut().add_observer(|trigger: On<StepStarted>| {
        let event = trigger.event();
        info!(
            "{} starts step {}: {}",
            event.sprite, event.index, event.action
        );
    });
    stage.world_mut().add_observer(|trigger: On<RunFinished>| {
        info!("{} run complete", trigger.event().sprite);
    });

    // Scripted cast: the cat at the origin, the ball at the spawn point.
    let cat = stage.add_sprite_at("cat", 0.0, 0.0);
    for action in [Action::MoveX, Action::Rotate, Action::IncreaseSize] {
        stage.enqueue_action(cat, action);
    }
    let ball = stage.add_sprite("ball");
    for action in [Action::MoveY, Action::MoveX, Action::GotoOrigin] {
        stage.enqueue_action(ball, action);
    }

    // Randomized extras scattered over the canvas.
    let mut rng = fastrand::Rng::with_seed(cli.seed);
    for n in 0..cli.sprites {
        let x = rng.f32() * canvas_width as f32;
        let y = rng.f32() * canvas_height as f32;
        let id = stage.add_sprite_at(format!("extra{}", n), x, y);
        for _ in 0..rng.usize(1..=4) {
            stage.enqueue_action(id, Action::ALL[rng.usize(..Action::ALL.len())]);
        }
    }

    let started = stage.play();
    info!("Playing {} queue(s) at {} fps", started, fps);

    let ticks = stage.run_until_idle(dt, (fps * 60.0) as u32);
    let elapsed = stage.world().resource::<WorldTime>().elapsed;
    if stage.is_playing() {
        warn!("Stopped after {} tick(s) with playback still running", ticks);
    } else {
        info!("Settled after {} tick(s) ({:.2}s simulated)", ticks, elapsed);
    }

    for view in stage.sprites() {
        if cli.json {
            match serde_json::to_string(&view) {
                Ok(line) => println!("{}", line),
                Err(err) => error!("Snapshot of {} not serializable: {}", view.id, err),
            }
        } else {
            println!(
                "{} {:8} rest=({:.1}, {:.1}) translate=({:.1}, {:.1}) rotation={:.1} scale={:.2}",
                view.id,
                view.asset,
                view.x,
                view.y,
                view.translate_x,
                view.translate_y,
                view.rotation,
                view.scale
            );
        }
    }
}
