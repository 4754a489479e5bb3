//! Level factory
//!
//! `build_level` combines the fixed geometry (ground tiles, boss platform and
//! the authored layout from `layouts`) with randomized collectible placement
//! drawn from a caller-supplied RNG.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::geom::Rect;
use super::layouts::{PlatformSpec, layout};
use super::pickup::{Collectible, CollectibleKind};
use super::robot::Robot;
use super::timers::PowerKind;
use crate::consts::*;
use crate::spawn_point;
use crate::tuning::Tuning;

pub const GROUND_TILE_WIDTH: f32 = 200.0;
pub const GROUND_HEIGHT: f32 = 40.0;

/// Diamonds placed on each eligible platform
const DIAMONDS_PER_PLATFORM: usize = 2;
/// Floating diamonds per level number
const FLOATING_DIAMONDS_PER_LEVEL: u32 = 5;
const MAX_SUPER_DIAMONDS: u32 = 4;

/// Everything a level starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub number: u32,
    /// Ground tiles, then the boss platform, then authored platforms.
    /// Collision resolves in this order.
    pub platforms: Vec<Rect>,
    pub robots: Vec<Robot>,
    pub collectibles: Vec<Collectible>,
    pub boss: Boss,
    pub spawn: Vec2,
}

/// Ground tiles laid edge to edge across the whole world
pub fn ground_tiles() -> impl Iterator<Item = Rect> {
    let count = (WORLD_WIDTH / GROUND_TILE_WIDTH).ceil() as u32;
    (0..count).map(|i| {
        Rect::new(
            i as f32 * GROUND_TILE_WIDTH,
            SCREEN_HEIGHT - GROUND_HEIGHT,
            GROUND_TILE_WIDTH,
            GROUND_HEIGHT,
        )
    })
}

/// Raised platform the boss starts on
pub fn boss_platform() -> Rect {
    Rect::new(WORLD_WIDTH - 300.0, SCREEN_HEIGHT - 100.0, 250.0, 60.0)
}

pub fn boss_spawn() -> Vec2 {
    let platform = boss_platform();
    Vec2::new(platform.x + 50.0, SCREEN_HEIGHT - 160.0)
}

/// Build level `n` (1-based)
pub fn build_level<R: Rng + ?Sized>(n: u32, tuning: &Tuning, rng: &mut R) -> Level {
    let content = layout(n);

    let mut platforms: Vec<Rect> = ground_tiles().collect();
    platforms.push(boss_platform());
    platforms.extend(content.platforms.iter().map(PlatformSpec::rect));

    let robots: Vec<Robot> = content
        .robots
        .iter()
        .map(|spec| {
            let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            Robot::new(spec.kind, spec.pos(), direction, &tuning.robot)
        })
        .collect();

    let mut collectibles = Vec::new();
    place_platform_diamonds(content.platforms, rng, &mut collectibles);
    place_floating_diamonds(n, rng, &mut collectibles);
    place_super_diamonds(n, content.platforms, rng, &mut collectibles);

    let boss = Boss::new(n, boss_spawn(), &tuning.boss);

    log::info!(
        "Built level {}: {} platforms, {} robots, {} collectibles, boss health {}",
        n,
        platforms.len(),
        robots.len(),
        collectibles.len(),
        boss.max_health
    );

    Level {
        number: n,
        platforms,
        robots,
        collectibles,
        boss,
        spawn: spawn_point(),
    }
}

/// Two diamonds resting above each authored platform outside the boss approach
fn place_platform_diamonds<R: Rng + ?Sized>(
    platforms: &[PlatformSpec],
    rng: &mut R,
    out: &mut Vec<Collectible>,
) {
    for spec in platforms.iter().filter(|p| p.x < ARENA_GATE_X) {
        let rect = spec.rect();
        let max_offset = (rect.w as i32 - 20).max(10);
        for _ in 0..DIAMONDS_PER_PLATFORM {
            let x = rect.x + rng.random_range(10..=max_offset) as f32;
            out.push(Collectible::new(
                CollectibleKind::Diamond,
                Vec2::new(x, rect.y - 20.0),
            ));
        }
    }
}

/// Free-floating diamonds, more on later levels, never inside the arena
fn place_floating_diamonds<R: Rng + ?Sized>(n: u32, rng: &mut R, out: &mut Vec<Collectible>) {
    let max_x = (WORLD_WIDTH - 600.0) as i32;
    let max_y = (SCREEN_HEIGHT - 200.0) as i32;
    for _ in 0..n * FLOATING_DIAMONDS_PER_LEVEL {
        let x = rng.random_range(100..=max_x) as f32;
        let y = rng.random_range(200..=max_y) as f32;
        out.push(Collectible::new(CollectibleKind::Diamond, Vec2::new(x, y)));
    }
}

/// Power gems on randomly chosen high platforms; the power type cycles
fn place_super_diamonds<R: Rng + ?Sized>(
    n: u32,
    platforms: &[PlatformSpec],
    rng: &mut R,
    out: &mut Vec<Collectible>,
) {
    let high: Vec<Rect> = platforms
        .iter()
        .map(PlatformSpec::rect)
        .filter(|r| r.y < SCREEN_HEIGHT - 200.0 && r.x < ARENA_MIN_X)
        .collect();
    if high.is_empty() {
        return;
    }

    let count = (n + 1).min(MAX_SUPER_DIAMONDS) as usize;
    for i in 0..count {
        let rect = high[rng.random_range(0..high.len())];
        let power = PowerKind::ALL[i % PowerKind::ALL.len()];
        let x = rect.x + (rect.w as i32 / 2) as f32;
        out.push(Collectible::new(
            CollectibleKind::SuperDiamond(power),
            Vec2::new(x, rect.y - 30.0),
        ));
    }
}
