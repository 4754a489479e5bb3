//! Diamond Quest - A side-scrolling platform fighter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, combat, level flow)
//! - `audio`: Notification sink for sound cues fired by the simulation
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime preferences for the host loop

pub mod audio;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use audio::{AudioManager, NullSink, SoundEffect, SoundSink};
pub use settings::{ConfigError, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const SIM_HZ: u32 = 60;

    /// Viewport dimensions
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;
    /// Horizontal extent of every level
    pub const WORLD_WIDTH: f32 = 3000.0;

    /// Downward acceleration per tick (no terminal velocity)
    pub const GRAVITY: f32 = 1.0;
    /// Falling this far below the screen costs diamonds and respawns
    pub const FALL_MARGIN: f32 = 100.0;

    /// Feet within this distance of a platform top walk onto it instead of bumping
    pub const SURFACE_TOLERANCE: f32 = 10.0;
    /// Slack for landing on / bumping a platform edge crossed this tick
    pub const LANDING_TOLERANCE: f32 = 5.0;

    /// Player spawn point (top-left of the box)
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_Y: f32 = SCREEN_HEIGHT - 200.0;

    /// Boss arena band (left edge of the boss box)
    pub const ARENA_MIN_X: f32 = WORLD_WIDTH - 600.0;
    pub const ARENA_MAX_X: f32 = WORLD_WIDTH - 100.0;
    /// Player is held at this x until every robot is down
    pub const ARENA_GATE_X: f32 = WORLD_WIDTH - 500.0;

    /// Number of authored levels
    pub const LAST_LEVEL: u32 = 10;
    /// Pause between clearing a level and the next one (3 seconds)
    pub const LEVEL_COMPLETE_TICKS: u32 = 3 * SIM_HZ;

    /// Camera easing factor toward its target each tick
    pub const CAMERA_SMOOTHING: f32 = 0.1;
}

/// Horizontal direction toward `target` from `from` (+1 or -1)
#[inline]
pub fn toward(from: f32, target: f32) -> f32 {
    if target > from { 1.0 } else { -1.0 }
}

/// Scale an integer-valued quantity and drop the fraction (toward zero)
#[inline]
pub fn scale_trunc(value: f32, factor: f32) -> f32 {
    (value * factor).trunc()
}

/// Spawn point as a vector
#[inline]
pub fn spawn_point() -> Vec2 {
    Vec2::new(consts::SPAWN_X, consts::SPAWN_Y)
}
