//! Patrolling robots and the melee contract every enemy shares with the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::integrate_and_land;
use super::geom::{Body, Rect};
use super::player::Player;
use super::timers::PowerKind;
use crate::audio::{SoundEffect, SoundSink};
use crate::consts::*;
use crate::toward;
use crate::tuning::{HitTable, PlayerTuning, RobotStats, RobotTuning};

pub const ROBOT_WIDTH: f32 = 28.0;
pub const ROBOT_HEIGHT: f32 = 40.0;

/// Robot variant (stat multiplier tier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotKind {
    Normal,
    Tough,
}

impl RobotKind {
    pub fn stats(self, tuning: &RobotTuning) -> &RobotStats {
        match self {
            RobotKind::Normal => &tuning.normal,
            RobotKind::Tough => &tuning.tough,
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub kind: RobotKind,
    pub body: Body,
    /// Patrol anchor
    pub start_x: f32,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub damage: u32,
    pub alive: bool,
    /// Ticks spent in melee range with a vulnerable player
    pub attack_timer: u32,
    pub grounded: bool,
}

impl Robot {
    /// `direction` picks the initial patrol heading (sign only)
    pub fn new(kind: RobotKind, pos: Vec2, direction: f32, tuning: &RobotTuning) -> Self {
        let stats = kind.stats(tuning);
        let mut body = Body::new(pos, Vec2::new(ROBOT_WIDTH, ROBOT_HEIGHT));
        body.vel.x = tuning.patrol_speed.copysign(direction);
        Self {
            kind,
            body,
            start_x: pos.x,
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            damage: stats.damage,
            alive: true,
            attack_timer: 0,
            grounded: false,
        }
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    pub fn update(
        &mut self,
        player: &mut Player,
        platforms: &[Rect],
        tuning: &RobotTuning,
        player_tuning: &PlayerTuning,
        sink: &mut dyn SoundSink,
    ) {
        if !self.alive {
            return;
        }

        // Sampled before moving; melee checks below reuse it
        let dx = self.body.dx(&player.body);
        if dx < tuning.detection_radius {
            self.body.vel.x = self.speed * toward(self.body.pos.x, player.body.pos.x);
        } else if (self.body.pos.x - self.start_x).abs() > tuning.patrol_distance {
            self.body.vel.x = -self.body.vel.x;
        }

        self.body.apply_gravity(GRAVITY);
        self.grounded = integrate_and_land(&mut self.body, platforms);
        self.body.clamp_to_world(WORLD_WIDTH);

        // Crude ledge avoidance: turn around whenever ground contact is lost
        if !self.grounded && self.body.vel.y >= 0.0 {
            self.body.vel.x = -self.body.vel.x;
        }

        if dx < tuning.melee_radius
            && self.body.dy(&player.body) < tuning.melee_vertical
            && !player.is_invulnerable()
            && !player.attacking()
        {
            self.attack_timer += 1;
            if self.attack_timer > tuning.attack_cadence {
                player.lose_diamonds(self.damage, player_tuning, sink);
                player.invulnerable.set(tuning.strike_invulnerability);
                self.attack_timer = 0;
            }
        }

        take_player_hits(
            &mut self.body,
            &mut self.health,
            dx,
            player,
            &tuning.hits,
            player_tuning,
            SoundEffect::RobotHit,
            sink,
        );

        if self.health <= 0.0 {
            self.alive = false;
            log::debug!("{:?} robot destroyed at x={:.0}", self.kind, self.body.pos.x);
        }
    }
}

/// Apply the player's punch, kick and stomp to an enemy.
///
/// `dx` is the horizontal distance sampled at the start of the enemy's
/// update. Attacks land every tick their window is open and the enemy is in
/// range. Health never drops below zero.
#[allow(clippy::too_many_arguments)]
pub(crate) fn take_player_hits(
    target: &mut Body,
    health: &mut f32,
    dx: f32,
    player: &mut Player,
    hits: &HitTable,
    player_tuning: &PlayerTuning,
    cue: SoundEffect,
    sink: &mut dyn SoundSink,
) {
    let strong = player.has_power(PowerKind::Strength);
    let in_height = target.dy(&player.body) < hits.vertical_range;

    if player.punching() && dx < player_tuning.punch_range && in_height {
        let damage = if strong { hits.punch_damage_strong } else { hits.punch_damage };
        *health = (*health - damage).max(0.0);
        target.vel.x = hits.punch_knockback * player.facing_sign();
        sink.play(cue);
    }

    if player.kicking() && dx < player_tuning.kick_range && in_height {
        let damage = if strong { hits.kick_damage_strong } else { hits.kick_damage };
        *health = (*health - damage).max(0.0);
        target.vel.x = hits.kick_knockback * player.facing_sign();
        target.vel.y = hits.kick_lift;
        sink.play(cue);
    }

    let target_rect = target.rect();
    if player.body.rect().intersects(&target_rect)
        && player.body.bottom() < target_rect.center_y()
        && player.body.vel.y > 0.0
        && !player.stomp_cooldown.active()
    {
        *health = (*health - hits.stomp_damage).max(0.0);
        player.body.vel.y = player_tuning.stomp_bounce;
        player.stomp_cooldown.set(hits.stomp_cooldown);
        player.body.pos.y = target.pos.y - player.body.size.y - hits.stomp_clearance;
        sink.play(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullSink;
    use crate::spawn_point;
    use crate::tuning::Tuning;

    fn floor() -> Vec<Rect> {
        vec![Rect::new(0.0, SCREEN_HEIGHT - 40.0, WORLD_WIDTH, 40.0)]
    }

    fn on_floor(x: f32, h: f32) -> Vec2 {
        Vec2::new(x, SCREEN_HEIGHT - 40.0 - h)
    }

    fn setup(robot_x: f32, player_x: f32) -> (Tuning, Robot, Player) {
        let tuning = Tuning::default();
        let robot = Robot::new(RobotKind::Normal, on_floor(robot_x, ROBOT_HEIGHT), 1.0, &tuning.robot);
        let mut player = Player::new(spawn_point(), &tuning.player);
        player.body.pos = on_floor(player_x, player.body.size.y);
        (tuning, robot, player)
    }

    fn step(robot: &mut Robot, player: &mut Player, tuning: &Tuning, sink: &mut dyn SoundSink) {
        robot.update(player, &floor(), &tuning.robot, &tuning.player, sink);
    }

    #[test]
    fn test_stats_by_kind() {
        let tuning = RobotTuning::default();
        let tough = Robot::new(RobotKind::Tough, Vec2::ZERO, -1.0, &tuning);
        assert_eq!(tough.health, 80.0);
        assert_eq!(tough.speed, 3.0);
        assert_eq!(tough.damage, 8);
        assert_eq!(tough.body.vel.x, -2.0);
    }

    #[test]
    fn test_chases_player_in_detection_radius() {
        let (tuning, mut robot, mut player) = setup(500.0, 380.0);
        step(&mut robot, &mut player, &tuning, &mut NullSink);
        assert_eq!(robot.body.vel.x, -1.5);
        assert_eq!(robot.body.pos.x, 498.5);
        assert!(robot.grounded);
    }

    #[test]
    fn test_patrol_reverses_past_distance() {
        let (tuning, mut robot, mut player) = setup(500.0, 100.0);
        robot.body.pos.x = 601.0;
        step(&mut robot, &mut player, &tuning, &mut NullSink);
        assert_eq!(robot.body.vel.x, -2.0);
    }

    #[test]
    fn test_turns_around_when_ground_is_lost() {
        let tuning = Tuning::default();
        let mut robot = Robot::new(RobotKind::Normal, Vec2::new(500.0, 100.0), 1.0, &tuning.robot);
        let mut player = Player::new(spawn_point(), &tuning.player);
        player.body.pos.x = 2000.0;
        step(&mut robot, &mut player, &tuning, &mut NullSink);
        assert!(!robot.grounded);
        assert_eq!(robot.body.vel.x, -2.0);
    }

    #[test]
    fn test_strikes_after_cadence() {
        let (tuning, mut robot, mut player) = setup(520.0, 500.0);
        robot.speed = 0.0;
        let mut sink = Vec::new();

        for _ in 0..tuning.robot.attack_cadence {
            step(&mut robot, &mut player, &tuning, &mut sink);
        }
        assert_eq!(player.diamonds, tuning.player.start_diamonds);

        step(&mut robot, &mut player, &tuning, &mut sink);
        assert_eq!(player.diamonds, tuning.player.start_diamonds - 7);
        assert_eq!(player.invulnerable.remaining(), tuning.robot.strike_invulnerability);
        assert_eq!(robot.attack_timer, 0);
        assert_eq!(sink, vec![SoundEffect::DiamondLost]);
    }

    #[test]
    fn test_attacking_player_is_not_struck() {
        // Inside melee radius but outside punch range
        let (tuning, mut robot, mut player) = setup(538.0, 500.0);
        robot.speed = 0.0;
        player.punch.set(1000);
        for _ in 0..100 {
            step(&mut robot, &mut player, &tuning, &mut NullSink);
        }
        assert_eq!(robot.attack_timer, 0);
        assert_eq!(robot.health, robot.max_health);
        assert_eq!(player.diamonds, tuning.player.start_diamonds);
    }

    #[test]
    fn test_punch_damage_and_knockback() {
        let (tuning, mut robot, mut player) = setup(520.0, 500.0);
        player.punch.set(10);
        let mut sink = Vec::new();

        step(&mut robot, &mut player, &tuning, &mut sink);
        assert_eq!(robot.health, 15.0);
        assert_eq!(robot.body.vel.x, 5.0);
        assert_eq!(sink, vec![SoundEffect::RobotHit]);

        step(&mut robot, &mut player, &tuning, &mut sink);
        assert_eq!(robot.health, 0.0);
        assert!(!robot.alive);
    }

    #[test]
    fn test_strength_kick_on_tough_robot() {
        let (tuning, _, mut player) = setup(0.0, 500.0);
        let mut robot = Robot::new(RobotKind::Tough, on_floor(540.0, ROBOT_HEIGHT), 1.0, &tuning.robot);
        player.kick.set(10);
        player.powers.strength.set(10);
        player.facing_right = false;

        step(&mut robot, &mut player, &tuning, &mut NullSink);
        assert_eq!(robot.health, 40.0);
        assert!(robot.alive);
        assert_eq!(robot.body.vel, Vec2::new(-8.0, -5.0));
    }

    #[test]
    fn test_out_of_range_attacks_miss() {
        let (tuning, mut robot, mut player) = setup(560.0, 500.0);
        player.punch.set(10);
        step(&mut robot, &mut player, &tuning, &mut NullSink);
        assert_eq!(robot.health, robot.max_health);
    }

    #[test]
    fn test_stomp_bounces_player_once() {
        let (tuning, mut robot, mut player) = setup(500.0, 500.0);
        robot.speed = 0.0;
        player.body.pos.y = robot.body.pos.y - player.body.size.y + 10.0;
        player.body.vel.y = 4.0;
        let mut sink = Vec::new();

        step(&mut robot, &mut player, &tuning, &mut sink);
        assert_eq!(robot.health, 10.0);
        assert_eq!(player.body.vel.y, tuning.player.stomp_bounce);
        assert_eq!(player.body.bottom(), robot.body.pos.y - 1.0);
        assert_eq!(player.stomp_cooldown.remaining(), 10);
        assert_eq!(sink, vec![SoundEffect::RobotHit]);

        // Cooldown blocks a second bounce in the same descent
        player.body.pos.y = robot.body.pos.y - player.body.size.y + 10.0;
        player.body.vel.y = 4.0;
        step(&mut robot, &mut player, &tuning, &mut sink);
        assert_eq!(robot.health, 10.0);
    }

    #[test]
    fn test_dead_robot_is_inert() {
        let (tuning, mut robot, mut player) = setup(520.0, 500.0);
        robot.alive = false;
        robot.health = 0.0;
        let before = robot.clone();
        player.punch.set(10);
        step(&mut robot, &mut player, &tuning, &mut NullSink);
        assert_eq!(robot, before);
    }

    #[test]
    fn test_robot_never_leaves_world() {
        let (tuning, mut robot, mut player) = setup(WORLD_WIDTH - ROBOT_WIDTH, 100.0);
        robot.body.vel.x = 30.0;
        robot.start_x = WORLD_WIDTH;
        step(&mut robot, &mut player, &tuning, &mut NullSink);
        assert!(robot.body.pos.x <= WORLD_WIDTH - ROBOT_WIDTH);
    }
}
