//! Game state and the level-progression state machine
//!
//! All state that must be reproduced for determinism lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{Level, build_level};
use super::player::Player;
use super::timers::PowerKind;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay on a level
    Playing { level: u32 },
    /// Level cleared; auto-advances when the countdown ends
    LevelComplete { level: u32, ticks_left: u32 },
    /// Out of lives
    GameOver { level: u32 },
    /// Final level cleared
    Victory,
}

/// Something that may move the run to another phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseEvent {
    /// No robots and no boss left alive
    LevelCleared,
    OutOfLives,
    /// Advance input, or the completion countdown ran out
    Advance,
    Restart,
}

impl GamePhase {
    /// Transition table. `None` means the event is ignored in this phase.
    pub fn transition(self, event: PhaseEvent) -> Option<GamePhase> {
        match (self, event) {
            (GamePhase::Playing { level }, PhaseEvent::LevelCleared) => {
                Some(GamePhase::LevelComplete {
                    level,
                    ticks_left: LEVEL_COMPLETE_TICKS,
                })
            }
            (GamePhase::Playing { level }, PhaseEvent::OutOfLives) => {
                Some(GamePhase::GameOver { level })
            }
            (GamePhase::LevelComplete { level, .. }, PhaseEvent::Advance) => {
                if level >= LAST_LEVEL {
                    Some(GamePhase::Victory)
                } else {
                    Some(GamePhase::Playing { level: level + 1 })
                }
            }
            (GamePhase::GameOver { .. } | GamePhase::Victory, PhaseEvent::Restart) => {
                Some(GamePhase::Playing { level: 1 })
            }
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver { .. } | GamePhase::Victory)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GamePhase::Playing { .. } => "playing",
            GamePhase::LevelComplete { .. } => "level_complete",
            GamePhase::GameOver { .. } => "game_over",
            GamePhase::Victory => "victory",
        }
    }
}

/// Seed material for one level's content RNG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub level: u32,
}

impl RngState {
    pub fn new(seed: u64, level: u32) -> Self {
        Self { seed, level }
    }

    pub fn to_rng(&self) -> Pcg32 {
        // Golden-ratio multiply spreads consecutive level numbers apart
        let mix = (self.level as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Pcg32::seed_from_u64(self.seed ^ mix)
    }
}

/// HUD read surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub phase: &'static str,
    pub level: u32,
    pub diamonds: u32,
    pub lives: u32,
    pub score: u64,
    pub stamina: f32,
    pub robots_remaining: usize,
    pub boss_alive: bool,
    pub boss_health: f32,
    /// Active powers with whole seconds remaining
    pub powers: Vec<(PowerKind, u32)>,
    pub power_cooldown_secs: u32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG seed material for the current level
    pub rng_state: RngState,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Smoothed camera left edge
    pub camera_x: f32,
    pub player: Player,
    pub level: Level,
    /// Host should stop the loop
    pub quit_requested: bool,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let rng_state = RngState::new(seed, 1);
        let level = build_level(1, &tuning, &mut rng_state.to_rng());
        let player = Player::new(level.spawn, &tuning.player);
        Self {
            seed,
            rng_state,
            tuning,
            phase: GamePhase::Playing { level: 1 },
            score: 0,
            time_ticks: 0,
            camera_x: 0.0,
            player,
            level,
            quit_requested: false,
        }
    }

    /// Replace the level content and start a fresh player on it
    pub fn load_level(&mut self, n: u32) {
        self.rng_state = RngState::new(self.seed, n);
        self.level = build_level(n, &self.tuning, &mut self.rng_state.to_rng());
        self.player = Player::new(self.level.spawn, &self.tuning.player);
        self.camera_x = 0.0;
    }

    /// Feed an event through the phase table, applying level loads the new
    /// phase implies. Returns whether the phase changed.
    pub fn apply(&mut self, event: PhaseEvent) -> bool {
        let Some(next) = self.phase.transition(event) else {
            return false;
        };
        log::info!("Phase {} -> {} ({:?})", self.phase.label(), next.label(), event);

        match (event, next) {
            (PhaseEvent::Restart, GamePhase::Playing { level }) => {
                self.score = 0;
                self.load_level(level);
            }
            (PhaseEvent::Advance, GamePhase::Playing { level }) => self.load_level(level),
            _ => {}
        }
        self.phase = next;
        true
    }

    pub fn robots_alive(&self) -> usize {
        self.level.robots.iter().filter(|r| r.alive).count()
    }

    /// Both conditions are required for completion
    pub fn level_cleared(&self) -> bool {
        self.robots_alive() == 0 && !self.level.boss.alive
    }

    pub fn hud(&self) -> Hud {
        let level = match self.phase {
            GamePhase::Playing { level }
            | GamePhase::LevelComplete { level, .. }
            | GamePhase::GameOver { level } => level,
            GamePhase::Victory => LAST_LEVEL,
        };
        Hud {
            phase: self.phase.label(),
            level,
            diamonds: self.player.diamonds,
            lives: self.player.lives,
            score: self.score,
            stamina: self.player.stamina.current(),
            robots_remaining: self.robots_alive(),
            boss_alive: self.level.boss.alive,
            boss_health: self.level.boss.health_fraction(),
            powers: self
                .player
                .powers
                .active_list()
                .into_iter()
                .map(|(kind, ticks)| (kind, ticks / SIM_HZ))
                .collect(),
            power_cooldown_secs: self.player.power_cooldown.remaining() / SIM_HZ,
        }
    }
}
