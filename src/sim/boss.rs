//! Level boss
//!
//! Low tiers run a simple strike-or-charge cycle. Higher tiers rotate through
//! four attack patterns on a fixed clock. Below the enrage threshold an
//! overlay speeds up movement and adds a fast extra strike on top of
//! whichever behavior is active.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::integrate_and_land;
use super::geom::{Body, Rect};
use super::player::Player;
use super::robot::take_player_hits;
use crate::audio::{SoundEffect, SoundSink};
use crate::consts::*;
use crate::toward;
use crate::tuning::{BossTuning, PlayerTuning, SimpleCycleTuning};

pub const BOSS_WIDTH: f32 = 60.0;
pub const BOSS_HEIGHT: f32 = 80.0;

/// Attack pattern rotation for tiers above the simple cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPattern {
    #[default]
    Aggressive,
    JumpAttack,
    Charge,
    Defensive,
}

impl BossPattern {
    pub fn next(self) -> Self {
        match self {
            BossPattern::Aggressive => BossPattern::JumpAttack,
            BossPattern::JumpAttack => BossPattern::Charge,
            BossPattern::Charge => BossPattern::Defensive,
            BossPattern::Defensive => BossPattern::Aggressive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub body: Body,
    /// Difficulty tier (the level number)
    pub tier: u32,
    pub health: f32,
    pub max_health: f32,
    pub alive: bool,
    pub base_damage: u32,
    pub grounded: bool,

    pub pattern: BossPattern,
    // Up-counting clocks, reset by the behavior that consumes them
    pub attack_clock: u32,
    pub pattern_clock: u32,
    pub move_clock: u32,
    pub jump_clock: u32,

    pub charging: bool,
    pub charge_ticks: u32,

    /// Renderer pulse phase
    pub animation: f32,
}

impl Boss {
    pub fn new(tier: u32, pos: Vec2, tuning: &BossTuning) -> Self {
        let health = tuning.base_health + tuning.health_per_tier * tier as f32;
        Self {
            body: Body::new(pos, Vec2::new(BOSS_WIDTH, BOSS_HEIGHT)),
            tier,
            health,
            max_health: health,
            alive: true,
            base_damage: tuning.base_damage + tuning.damage_per_tier * tier,
            grounded: false,
            pattern: BossPattern::default(),
            attack_clock: 0,
            pattern_clock: 0,
            move_clock: 0,
            jump_clock: 0,
            charging: false,
            charge_ticks: 0,
            animation: 0.0,
        }
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    pub fn enraged(&self, tuning: &BossTuning) -> bool {
        self.health_fraction() < tuning.enrage_threshold
    }

    /// Horizontal velocity actually applied this tick (enrage scales it
    /// without compounding into the stored value)
    pub fn effective_vel_x(&self, tuning: &BossTuning) -> f32 {
        if self.enraged(tuning) {
            self.body.vel.x * tuning.enrage_speed_factor
        } else {
            self.body.vel.x
        }
    }

    pub fn update(
        &mut self,
        player: &mut Player,
        platforms: &[Rect],
        tuning: &BossTuning,
        player_tuning: &PlayerTuning,
        sink: &mut dyn SoundSink,
    ) {
        if !self.alive {
            return;
        }

        self.animation += 0.1;
        let dist = self.body.dx(&player.body);
        self.attack_clock += 1;
        self.pattern_clock += 1;
        self.move_clock += 1;
        self.jump_clock += 1;

        if self.tier <= tuning.simple_max_tier {
            self.simple_cycle(dist, player, &tuning.simple, player_tuning, sink);
        } else {
            self.pattern_cycle(dist, player, tuning, player_tuning, sink);
        }

        if self.charging {
            self.charge_ticks = self.charge_ticks.saturating_sub(1);
            if self.charge_ticks == 0 {
                self.charging = false;
                self.body.vel.x *= tuning.charge_end_factor;
            }
        }

        if self.enraged(tuning)
            && self.attack_clock > tuning.enrage_cadence
            && dist < tuning.enrage_range
            && !player.is_invulnerable()
            && !player.attacking()
        {
            let damage = self.base_damage.saturating_sub(tuning.enrage_damage_reduction);
            self.strike(player, damage, tuning.enrage_invulnerability, player_tuning, sink);
            self.attack_clock = 0;
        }

        self.body.apply_gravity(GRAVITY);
        let stored_vel_x = self.body.vel.x;
        self.body.vel.x = self.effective_vel_x(tuning);
        self.grounded = integrate_and_land(&mut self.body, platforms);
        self.body.vel.x = stored_vel_x;

        if self.body.pos.x < ARENA_MIN_X {
            self.body.pos.x = ARENA_MIN_X;
            self.body.vel.x = self.body.vel.x.abs();
        } else if self.body.pos.x > ARENA_MAX_X {
            self.body.pos.x = ARENA_MAX_X;
            self.body.vel.x = -self.body.vel.x.abs();
        }

        take_player_hits(
            &mut self.body,
            &mut self.health,
            dist,
            player,
            &tuning.hits,
            player_tuning,
            SoundEffect::BossHit,
            sink,
        );

        if self.health <= 0.0 {
            self.alive = false;
            log::info!("Tier {} boss defeated", self.tier);
        }
    }

    fn simple_cycle(
        &mut self,
        dist: f32,
        player: &mut Player,
        tuning: &SimpleCycleTuning,
        player_tuning: &PlayerTuning,
        sink: &mut dyn SoundSink,
    ) {
        let dir = toward(self.body.pos.x, player.body.pos.x);
        if self.attack_clock > tuning.attack_cadence {
            if dist < tuning.strike_range {
                if !player.is_invulnerable() && !player.attacking() {
                    let inv = tuning.strike_invulnerability;
                    self.strike(player, self.base_damage, inv, player_tuning, sink);
                }
                self.attack_clock = 0;
            } else if dist < tuning.charge_range {
                self.start_charge(tuning.charge_ticks);
                self.body.vel.x = tuning.charge_speed * dir;
                self.attack_clock = 0;
            }
        }

        if !self.charging && self.move_clock > tuning.drift_cadence {
            self.body.vel.x = tuning.drift_speed * dir;
            self.move_clock = 0;
        }
    }

    fn pattern_cycle(
        &mut self,
        dist: f32,
        player: &mut Player,
        tuning: &BossTuning,
        player_tuning: &PlayerTuning,
        sink: &mut dyn SoundSink,
    ) {
        if self.pattern_clock > tuning.pattern_cadence {
            self.pattern = self.pattern.next();
            self.pattern_clock = 0;
            log::debug!("Boss pattern -> {:?}", self.pattern);
        }

        let p = &tuning.patterns;
        let dir = toward(self.body.pos.x, player.body.pos.x);
        let tier = self.tier as f32;
        let open = !player.is_invulnerable();
        match self.pattern {
            BossPattern::Aggressive => {
                self.body.vel.x = (p.aggressive_speed + p.aggressive_speed_per_tier * tier) * dir;
                if dist < p.aggressive_range && open && !player.attacking() {
                    let damage = self.base_damage + p.aggressive_bonus;
                    self.strike(player, damage, p.aggressive_invulnerability, player_tuning, sink);
                }
            }
            BossPattern::JumpAttack => {
                if self.jump_clock > p.jump_cadence && dist < p.jump_trigger_range {
                    self.body.vel.y = p.jump_impulse;
                    self.jump_clock = 0;
                    if dist < p.jump_strike_range
                        && self.body.dy(&player.body) < p.jump_strike_vertical
                        && open
                    {
                        let damage = self.base_damage + p.jump_bonus;
                        self.strike(player, damage, p.jump_invulnerability, player_tuning, sink);
                    }
                }
            }
            BossPattern::Charge => {
                self.start_charge(p.charge_ticks);
                self.body.vel.x = (p.charge_speed + p.charge_speed_per_tier * tier) * dir;
                if dist < p.charge_range && open && !player.attacking() {
                    let damage = self.base_damage + p.charge_bonus;
                    self.strike(player, damage, p.charge_invulnerability, player_tuning, sink);
                }
            }
            BossPattern::Defensive => {
                self.body.vel.x *= p.defensive_slowdown;
                if dist < p.defensive_range && self.move_clock > p.defensive_cadence {
                    // Quick strike lands through the player's own attacks
                    if open {
                        let inv = p.defensive_invulnerability;
                        self.strike(player, self.base_damage, inv, player_tuning, sink);
                    }
                    self.move_clock = 0;
                }
            }
        }
    }

    fn start_charge(&mut self, ticks: u32) {
        self.charging = true;
        self.charge_ticks = ticks;
    }

    fn strike(
        &self,
        player: &mut Player,
        damage: u32,
        invulnerability: u32,
        player_tuning: &PlayerTuning,
        sink: &mut dyn SoundSink,
    ) {
        player.lose_diamonds(damage, player_tuning, sink);
        player.invulnerable.set(invulnerability);
        sink.play(SoundEffect::RobotHit);
    }
}
