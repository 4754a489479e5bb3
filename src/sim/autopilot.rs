//! Demo autopilot
//!
//! Synthesizes player input from the current state: walk right, fight the
//! nearest enemy, hop over walls. Reads state only.

use glam::Vec2;

use super::geom::Rect;
use super::state::{GamePhase, GameState};
use super::tick::TickInput;
use crate::consts::SURFACE_TOLERANCE;

/// Closer than this the autopilot stops walking and fights
const ENGAGE_RANGE: f32 = 30.0;
/// Vertical band in which attacks are attempted
const ATTACK_HEIGHT: f32 = 50.0;

pub fn autopilot_input(state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::Playing { .. } => play(state),
        GamePhase::LevelComplete { .. } => TickInput {
            advance: true,
            ..Default::default()
        },
        GamePhase::GameOver { .. } | GamePhase::Victory => TickInput::default(),
    }
}

/// Robots first (the arena is gated behind them), then the boss
fn target(state: &GameState) -> Option<Vec2> {
    let px = state.player.body.pos.x;
    let by_distance = |a: &Vec2, b: &Vec2| (a.x - px).abs().total_cmp(&(b.x - px).abs());

    let robot = state
        .level
        .robots
        .iter()
        .filter(|r| r.alive)
        .map(|r| r.body.pos)
        .min_by(by_distance);
    robot.or_else(|| state.level.boss.alive.then_some(state.level.boss.body.pos))
}

fn play(state: &GameState) -> TickInput {
    let player = &state.player;
    let tuning = &state.tuning.player;
    let mut input = TickInput::default();

    let (heading_right, dist, dy) = match target(state) {
        Some(t) => {
            let dx = t.x - player.body.pos.x;
            (dx > 0.0, dx.abs(), t.y - player.body.pos.y)
        }
        None => (true, f32::INFINITY, 0.0),
    };

    if dist > ENGAGE_RANGE || player.facing_right != heading_right {
        if heading_right {
            input.right = true;
        } else {
            input.left = true;
        }
    }

    let stamina = player.stamina.current();
    if dy.abs() < ATTACK_HEIGHT && stamina >= tuning.attack_stamina_cost && !player.attacking() {
        if dist < tuning.punch_range {
            input.punch = true;
        } else if dist < tuning.kick_range {
            input.kick = true;
        }
    }

    // Keep enough stamina in reserve for one attack after landing
    let can_jump = player.grounded
        && stamina >= tuning.jump_stamina_cost + tuning.attack_stamina_cost;
    let enemy_overhead = dy < -60.0 && dist < 150.0;
    if can_jump && (enemy_overhead || wall_ahead(state, heading_right)) {
        input.jump = true;
    }

    input
}

/// A platform side blocks the next few steps
fn wall_ahead(state: &GameState, heading_right: bool) -> bool {
    let body = &state.player.body;
    let probe_x = if heading_right {
        body.pos.x + body.size.x
    } else {
        body.pos.x - 8.0
    };
    let probe = Rect::new(probe_x, body.pos.y, 8.0, body.size.y - SURFACE_TOLERANCE - 1.0);
    state.level.platforms.iter().any(|p| probe.intersects(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_level_state() -> GameState {
        let mut state = GameState::new(77);
        state.level.robots.clear();
        state.level.boss.alive = false;
        state.level.collectibles.clear();
        state
    }

    #[test]
    fn test_walks_right_with_nothing_to_fight() {
        let state = empty_level_state();
        let input = autopilot_input(&state);
        assert!(input.right);
        assert!(!input.left && !input.punch && !input.kick);
    }

    #[test]
    fn test_punches_adjacent_enemy() {
        let mut state = GameState::new(77);
        let pos = state.player.body.pos + Vec2::new(20.0, 0.0);
        state.level.robots[0].body.pos = pos;

        let input = autopilot_input(&state);
        assert!(input.punch);
        assert!(!input.right, "already facing the target at close range");
    }

    #[test]
    fn test_turns_to_face_enemy_behind() {
        let mut state = GameState::new(77);
        state.player.body.pos.x = 600.0;
        let pos = state.player.body.pos - Vec2::new(20.0, 0.0);
        state.level.robots[0].body.pos = pos;

        let input = autopilot_input(&state);
        assert!(input.left);
    }

    #[test]
    fn test_no_attack_when_exhausted() {
        let mut state = GameState::new(77);
        let pos = state.player.body.pos + Vec2::new(20.0, 0.0);
        state.level.robots[0].body.pos = pos;
        state.player.stamina.set(5.0);

        let input = autopilot_input(&state);
        assert!(!input.punch && !input.kick);
    }

    #[test]
    fn test_jumps_at_wall() {
        let mut state = empty_level_state();
        state.player.grounded = true;
        let body = state.player.body;
        state
            .level
            .platforms
            .push(Rect::new(body.pos.x + body.size.x + 2.0, body.pos.y - 20.0, 60.0, 40.0));

        assert!(autopilot_input(&state).jump);
    }

    #[test]
    fn test_advances_and_stops() {
        let mut state = empty_level_state();
        state.phase = GamePhase::LevelComplete {
            level: 1,
            ticks_left: 50,
        };
        assert!(autopilot_input(&state).advance);

        state.phase = GamePhase::GameOver { level: 1 };
        assert_eq!(autopilot_input(&state), TickInput::default());
    }
}
