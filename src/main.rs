//! Diamond Quest entry point
//!
//! Headless native runner: loads settings, drives the simulation at a fixed
//! tick (autopilot by default) and prints periodic HUD snapshots as JSON.
//!
//! Usage: `diamond-quest [settings.json]`

use diamond_quest::sim::{GamePhase, GameState, TickInput, tick};
use diamond_quest::{AudioManager, Settings, Tuning};

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };
    match Settings::load_from_path(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{e}; using default settings");
            Settings::default()
        }
    }
}

fn load_tuning(settings: &Settings) -> Tuning {
    settings.load_tuning().unwrap_or_else(|e| {
        log::warn!("{e}; using default tuning");
        Tuning::default()
    })
}

fn wall_clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn print_hud(state: &GameState) {
    match serde_json::to_string(&state.hud()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("HUD snapshot failed: {e}"),
    }
}

fn main() {
    env_logger::init();
    log::info!("Diamond Quest (headless) starting...");

    let settings = load_settings();
    let tuning = load_tuning(&settings);
    let seed = settings.seed.unwrap_or_else(wall_clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut state = GameState::with_tuning(seed, tuning);
    let mut audio = AudioManager::from_settings(&settings);
    let input = TickInput {
        idle_mode: settings.autopilot,
        ..Default::default()
    };

    while state.time_ticks < settings.max_ticks && !state.quit_requested {
        tick(&mut state, &input, &mut audio);

        if settings.hud_interval > 0 && state.time_ticks % settings.hud_interval == 0 {
            print_hud(&state);
        }
        if state.phase.is_terminal() {
            break;
        }
    }

    print_hud(&state);
    match state.phase {
        GamePhase::Victory => log::info!("Victory! Final score {}", state.score),
        GamePhase::GameOver { level } => {
            log::info!("Game over on level {} with score {}", level, state.score)
        }
        phase => log::info!("Stopped after {} ticks ({})", state.time_ticks, phase.label()),
    }
    log::info!("{} sound cues voiced", audio.played());
}
