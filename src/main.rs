//! Egg Rally headless runner
//!
//! Plays one match with a simple autopilot at the configured tick rate (without
//! sleeping) and logs the outcome.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use egg_rally::{
    Action, Direction, WorldConfig,
    sim::{GameEvent, GameState, Session, overlaps},
    view,
};

/// Give up after this many simulated minutes
#[cfg(not(target_arch = "wasm32"))]
const MAX_MINUTES: u64 = 10;

/// Play one headless Egg Rally match with the autopilot
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(name = "egg-rally", version, about)]
struct Args {
    /// Path to a settings.json (built-in defaults when omitted)
    settings: Option<PathBuf>,
    /// RNG seed for spawn positions and intervals
    #[arg(long, default_value_t = 0x00E6_6E66)]
    seed: u64,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Egg Rally (headless) starting...");

    let config = match &args.settings {
        Some(path) => match WorldConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => {
            log::info!("No settings file given, using defaults");
            WorldConfig::default()
        }
    };
    let seed = args.seed;

    let tick_cap = u64::from(config.fps) * 60 * MAX_MINUTES;
    let mut session = Session::new(config, seed);

    while !session.state().is_terminal() && session.state().ticks < tick_cap {
        let key = autopilot(session.state())
            .and_then(|action| session.state().config.controls.key_for(action))
            .map(str::to_string);
        if let Some(key) = key {
            session.handle(&GameEvent::KeyDown(key));
        }
        session.handle(&GameEvent::Tick);
    }

    let state = session.state();
    let outcome = if state.is_won() {
        "won"
    } else if state.is_game_over() {
        "lost"
    } else {
        "timed out"
    };
    log::info!(
        "Match {} after {} (score {}, hp {})",
        outcome,
        view::format_elapsed(state),
        state.score,
        view::hp_label(state.player.hp, state.player.max_hp)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation core is platform-agnostic; there is no browser front end here
}

/// Chase the boss if it is out, otherwise the nearest eggnemy; attack on contact
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(state: &GameState) -> Option<Action> {
    let body = state.player.aabb();
    let target = match state.boss.active() {
        Some(boss) => boss.aabb(),
        None => state
            .hostiles
            .iter()
            .map(|h| h.aabb())
            .min_by(|a, b| {
                let da = a.center().distance_squared(body.center());
                let db = b.center().distance_squared(body.center());
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })?,
    };

    if overlaps(&body, &target) {
        return Some(Action::Attack);
    }
    let diff = target.center() - body.center();
    let direction = if diff.x.abs() > diff.y.abs() {
        if diff.x > 0.0 { Direction::Right } else { Direction::Left }
    } else if diff.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(Action::Move(direction))
}
