//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::autopilot::autopilot_input;
use super::geom::Rect;
use super::level::Level;
use super::state::{GamePhase, GameState, PhaseEvent};
use crate::audio::{SoundEffect, SoundSink};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub punch: bool,
    pub kick: bool,
    /// Ask the host to stop
    pub quit: bool,
    /// Start over (game over / victory only)
    pub restart: bool,
    /// Skip the level-complete pause
    pub advance: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, sink: &mut dyn SoundSink) {
    state.time_ticks += 1;

    if input.quit {
        state.quit_requested = true;
        return;
    }

    // Idle/demo mode - AI plays the game
    let mut input = input.clone();
    if input.idle_mode {
        input = TickInput {
            idle_mode: true,
            ..autopilot_input(state)
        };
    }

    // Discrete events; the phase table rejects them where they don't apply.
    // A tick that changes phase does not also simulate.
    if input.restart && state.apply(PhaseEvent::Restart) {
        return;
    }
    if input.advance && state.apply(PhaseEvent::Advance) {
        return;
    }

    match state.phase {
        GamePhase::Playing { .. } => play(state, &input, sink),
        GamePhase::LevelComplete { level, ticks_left } => {
            let ticks_left = ticks_left.saturating_sub(1);
            if ticks_left == 0 {
                state.apply(PhaseEvent::Advance);
            } else {
                state.phase = GamePhase::LevelComplete { level, ticks_left };
            }
        }
        GamePhase::GameOver { .. } | GamePhase::Victory => {}
    }
}

fn play(state: &mut GameState, input: &TickInput, sink: &mut dyn SoundSink) {
    update_camera(state);

    let GameState {
        player,
        level,
        tuning,
        score,
        ..
    } = state;
    let Level {
        platforms,
        robots,
        collectibles,
        boss,
        ..
    } = level;
    let platforms: &[Rect] = platforms;

    // Update order: player, collectibles, robots, boss
    player.update(input, platforms, &tuning.player, sink);

    for collectible in collectibles.iter_mut() {
        *score += collectible.update(player, &tuning.player, &tuning.score, sink);
    }
    collectibles.retain(|c| !c.collected);

    for robot in robots.iter_mut() {
        robot.update(player, platforms, &tuning.robot, &tuning.player, sink);
    }
    let destroyed = robots.iter().filter(|r| !r.alive).count() as u64;
    *score += destroyed * tuning.score.robot_score;
    robots.retain(|r| r.alive);

    if boss.alive {
        boss.update(player, platforms, &tuning.boss, &tuning.player, sink);
        if !boss.alive {
            *score += tuning.score.boss_score;
        }
    }

    if state.player.lives == 0 {
        state.apply(PhaseEvent::OutOfLives);
        return;
    }

    if state.level_cleared() {
        sink.play(SoundEffect::LevelComplete);
        state.apply(PhaseEvent::LevelCleared);
        return;
    }

    // Soft gate: the arena opens once every robot is down
    if state.robots_alive() > 0 && state.player.body.pos.x > ARENA_GATE_X {
        state.player.body.pos.x = ARENA_GATE_X;
    }
}

/// Ease the camera toward the player, clamped to the world
fn update_camera(state: &mut GameState) {
    let target =
        (state.player.body.pos.x - SCREEN_WIDTH / 2.0).clamp(0.0, WORLD_WIDTH - SCREEN_WIDTH);
    state.camera_x += (target - state.camera_x) * CAMERA_SMOOTHING;
}
