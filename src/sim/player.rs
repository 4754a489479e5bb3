//! The player character
//!
//! Player state is a bundle of concurrently active timers rather than one
//! exclusive mode: an attack window, invulnerability, a stomp cooldown and four
//! power buffs can all run at once. The per-tick update is split into small
//! steps that each touch one of those components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Axis, resolve_axis};
use super::geom::{Body, Rect};
use super::tick::TickInput;
use super::timers::{Countdown, PowerKind, PowerTimers, Stamina};
use crate::audio::{SoundEffect, SoundSink};
use crate::consts::*;
use crate::scale_trunc;
use crate::tuning::PlayerTuning;

pub const PLAYER_WIDTH: f32 = 32.0;
pub const PLAYER_HEIGHT: f32 = 48.0;

/// What a visual effect token represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Punch,
    Kick,
    Power(PowerKind),
}

/// Display-only burst drawn at a point for a few ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectToken {
    pub kind: EffectKind,
    pub pos: Vec2,
    pub ticks_left: u32,
    pub size: f32,
    /// Spawned while the strength power was active
    pub powered: bool,
}

impl EffectToken {
    /// Age by one tick; returns false once expired
    fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.size += match self.kind {
            EffectKind::Power(_) => 2.0,
            _ => 1.0,
        };
        self.ticks_left > 0
    }
}

/// The player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Where respawns put the player
    pub spawn: Vec2,
    pub facing_right: bool,
    pub grounded: bool,

    pub diamonds: u32,
    pub lives: u32,
    pub stamina: Stamina,

    /// Punch window (punching while active)
    pub punch: Countdown,
    /// Kick window (kicking while active)
    pub kick: Countdown,
    pub invulnerable: Countdown,
    /// Blocks repeated stomp bounces within one descent
    pub stomp_cooldown: Countdown,
    pub powers: PowerTimers,
    /// Shared lockout between power activations
    pub power_cooldown: Countdown,

    pub effects: Vec<EffectToken>,
    /// Renderer animation counter
    pub animation_frame: u32,
}

impl Player {
    pub fn new(spawn: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            body: Body::new(spawn, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            spawn,
            facing_right: true,
            grounded: false,
            diamonds: tuning.start_diamonds,
            lives: tuning.start_lives,
            stamina: Stamina::new(tuning.max_stamina),
            punch: Countdown::default(),
            kick: Countdown::default(),
            invulnerable: Countdown::default(),
            stomp_cooldown: Countdown::default(),
            powers: PowerTimers::default(),
            power_cooldown: Countdown::new(tuning.power_cooldown),
            effects: Vec::new(),
            animation_frame: 0,
        }
    }

    #[inline]
    pub fn punching(&self) -> bool {
        self.punch.active()
    }

    #[inline]
    pub fn kicking(&self) -> bool {
        self.kick.active()
    }

    #[inline]
    pub fn attacking(&self) -> bool {
        self.punching() || self.kicking()
    }

    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable.active()
    }

    #[inline]
    pub fn has_power(&self, kind: PowerKind) -> bool {
        self.powers.active(kind)
    }

    /// +1 when facing right, -1 when facing left
    #[inline]
    pub fn facing_sign(&self) -> f32 {
        if self.facing_right { 1.0 } else { -1.0 }
    }

    /// Advance the player one tick
    pub fn update(
        &mut self,
        input: &TickInput,
        platforms: &[Rect],
        tuning: &PlayerTuning,
        sink: &mut dyn SoundSink,
    ) {
        self.tick_timers();
        self.stamina.regen(tuning.stamina_regen);
        self.apply_movement_input(input, tuning);
        if input.jump {
            self.try_jump(tuning, sink);
        }
        if input.punch {
            self.try_punch(tuning, sink);
        }
        if input.kick {
            self.try_kick(tuning, sink);
        }
        self.update_invulnerability();
        self.effects.retain_mut(|e| e.tick());

        self.body.apply_gravity(GRAVITY);
        resolve_axis(&mut self.body, platforms, Axis::Horizontal);
        self.grounded = resolve_axis(&mut self.body, platforms, Axis::Vertical).grounded;

        self.body.clamp_to_world(WORLD_WIDTH);
        if self.body.pos.y > SCREEN_HEIGHT + FALL_MARGIN {
            log::debug!("Player fell out of the world");
            self.lose_diamonds(tuning.fall_penalty, tuning, sink);
            self.respawn(tuning);
        }

        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    fn tick_timers(&mut self) {
        self.powers.tick_all();
        self.power_cooldown.tick();
        self.punch.tick();
        self.kick.tick();
        self.stomp_cooldown.tick();
    }

    /// Horizontal speed after the speed power and the low-stamina penalty
    pub fn movement_speed(&self, tuning: &PlayerTuning) -> f32 {
        let mut speed = tuning.base_speed;
        if self.has_power(PowerKind::Speed) {
            speed = scale_trunc(speed, tuning.speed_power_factor);
        }
        if self.stamina.below(tuning.low_stamina_threshold) {
            speed = scale_trunc(speed, tuning.low_stamina_speed_factor);
        }
        speed
    }

    /// Upward launch velocity, boosted by the jump power
    pub fn jump_velocity(&self, tuning: &PlayerTuning) -> f32 {
        if self.has_power(PowerKind::Jump) {
            scale_trunc(tuning.jump_impulse, tuning.jump_power_factor)
        } else {
            tuning.jump_impulse
        }
    }

    fn apply_movement_input(&mut self, input: &TickInput, tuning: &PlayerTuning) {
        let speed = self.movement_speed(tuning);
        self.body.vel.x = 0.0;
        if input.left {
            self.body.vel.x = -speed;
            self.facing_right = false;
        }
        if input.right {
            self.body.vel.x = speed;
            self.facing_right = true;
        }
    }

    fn try_jump(&mut self, tuning: &PlayerTuning, sink: &mut dyn SoundSink) {
        if !self.grounded || !self.stamina.try_spend(tuning.jump_stamina_cost) {
            return;
        }
        self.body.vel.y = self.jump_velocity(tuning);
        self.grounded = false;
        sink.play(SoundEffect::Jump);
    }

    fn try_punch(&mut self, tuning: &PlayerTuning, sink: &mut dyn SoundSink) {
        if self.punch.active() || !self.stamina.try_spend(tuning.attack_stamina_cost) {
            return;
        }
        self.punch.set(tuning.punch_ticks);
        sink.play(SoundEffect::Punch);

        let powered = self.has_power(PowerKind::Strength);
        self.effects.push(EffectToken {
            kind: EffectKind::Punch,
            pos: self.body.pos + Vec2::new(40.0 * self.facing_sign(), 20.0),
            ticks_left: 15,
            size: if powered { 25.0 } else { 20.0 },
            powered,
        });
    }

    fn try_kick(&mut self, tuning: &PlayerTuning, sink: &mut dyn SoundSink) {
        if self.kick.active() || !self.stamina.try_spend(tuning.attack_stamina_cost) {
            return;
        }
        self.kick.set(tuning.kick_ticks);
        sink.play(SoundEffect::Kick);

        let powered = self.has_power(PowerKind::Strength);
        self.effects.push(EffectToken {
            kind: EffectKind::Kick,
            pos: self.body.pos + Vec2::new(50.0 * self.facing_sign(), 30.0),
            ticks_left: 20,
            size: if powered { 30.0 } else { 25.0 },
            powered,
        });
    }

    fn update_invulnerability(&mut self) {
        if self.has_power(PowerKind::Invincible) {
            self.invulnerable.hold(1);
        } else {
            self.invulnerable.tick();
        }
    }

    /// Take damage. Invincible players are fully immune; otherwise the loss is
    /// amplified, stamina drops, and running out of diamonds costs a life.
    pub fn lose_diamonds(&mut self, amount: u32, tuning: &PlayerTuning, sink: &mut dyn SoundSink) {
        if self.has_power(PowerKind::Invincible) {
            return;
        }
        let loss = scale_trunc(amount as f32, tuning.damage_multiplier) as u32;
        self.diamonds = self.diamonds.saturating_sub(loss);
        self.stamina.drain(tuning.damage_stamina_penalty);
        sink.play(SoundEffect::DiamondLost);

        if self.diamonds == 0 {
            self.lose_life(tuning, sink);
        }
    }

    fn lose_life(&mut self, tuning: &PlayerTuning, sink: &mut dyn SoundSink) {
        self.lives = self.lives.saturating_sub(1);
        log::info!("Life lost, {} remaining", self.lives);
        sink.play(SoundEffect::LifeLost);
        self.diamonds = tuning.respawn_diamonds;
        self.stamina.set(tuning.respawn_stamina);
        self.respawn(tuning);
    }

    /// Back to the spawn point with a grace period
    pub fn respawn(&mut self, tuning: &PlayerTuning) {
        self.body.pos = self.spawn;
        self.body.vel = Vec2::ZERO;
        self.grounded = false;
        self.invulnerable.set(tuning.respawn_invulnerability);
    }

    /// Start a power buff. Rejected while the shared cooldown runs.
    pub fn activate_power(
        &mut self,
        kind: PowerKind,
        tuning: &PlayerTuning,
        sink: &mut dyn SoundSink,
    ) -> bool {
        if self.power_cooldown.active() {
            return false;
        }
        self.powers.get_mut(kind).set(tuning.power_ticks(kind));
        sink.play(match kind {
            PowerKind::Speed | PowerKind::Strength => SoundEffect::SpeedBoost,
            PowerKind::Jump => SoundEffect::JumpBoost,
            PowerKind::Invincible => SoundEffect::Invincible,
        });
        self.power_cooldown.set(tuning.power_cooldown);
        self.effects.push(EffectToken {
            kind: EffectKind::Power(kind),
            pos: self.body.pos,
            ticks_left: 60,
            size: 30.0,
            powered: false,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullSink;
    use crate::spawn_point;

    fn floor() -> Vec<Rect> {
        vec![Rect::new(0.0, SCREEN_HEIGHT - 40.0, WORLD_WIDTH, 40.0)]
    }

    fn grounded_player(tuning: &PlayerTuning) -> Player {
        let mut player = Player::new(spawn_point(), tuning);
        player.body.pos.y = SCREEN_HEIGHT - 40.0 - PLAYER_HEIGHT;
        player.update(&TickInput::default(), &floor(), tuning, &mut NullSink);
        assert!(player.grounded);
        player
    }

    fn press(f: impl FnOnce(&mut TickInput)) -> TickInput {
        let mut input = TickInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_punch_rejected_without_stamina() {
        let tuning = PlayerTuning::default();
        let mut player = grounded_player(&tuning);
        // Stays below cost even after this tick's regen
        player.stamina.set(10.0);
        let mut sink = Vec::new();

        player.update(&press(|i| i.punch = true), &floor(), &tuning, &mut sink);
        assert!(!player.punching());
        assert_eq!(player.stamina.current(), 10.5);
        assert!(player.effects.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_punch_spends_stamina_and_spawns_effect() {
        let tuning = PlayerTuning::default();
        let mut player = grounded_player(&tuning);
        let mut sink = Vec::new();

        player.update(&press(|i| i.punch = true), &floor(), &tuning, &mut sink);
        assert!(player.punching());
        assert_eq!(player.stamina.current(), 85.0);
        assert_eq!(player.effects.len(), 1);
        assert_eq!(player.effects[0].kind, EffectKind::Punch);
        assert_eq!(sink, vec![SoundEffect::Punch]);

        // Holding punch does not restart the window or spend more stamina
        player.update(&press(|i| i.punch = true), &floor(), &tuning, &mut sink);
        assert_eq!(player.stamina.current(), 85.5);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_attack_flags_clear_when_window_ends() {
        let tuning = PlayerTuning::default();
        let mut player = grounded_player(&tuning);
        player.update(&press(|i| i.kick = true), &floor(), &tuning, &mut NullSink);
        assert!(player.kicking());

        for _ in 0..tuning.kick_ticks - 1 {
            player.update(&TickInput::default(), &floor(), &tuning, &mut NullSink);
        }
        assert!(player.kicking());
        player.update(&TickInput::default(), &floor(), &tuning, &mut NullSink);
        assert!(!player.kicking());
    }

    #[test]
    fn test_effects_are_pruned() {
        let tuning = PlayerTuning::default();
        let mut player = grounded_player(&tuning);
        player.update(
            &press(|i| {
                i.punch = true;
                i.kick = true;
            }),
            &floor(),
            &tuning,
            &mut NullSink,
        );
        assert_eq!(player.effects.len(), 2);
        for _ in 0..25 {
            player.update(&TickInput::default(), &floor(), &tuning, &mut NullSink);
        }
        assert!(player.effects.is_empty());
    }

    #[test]
    fn test_jump_requires_ground_and_stamina() {
        let tuning = PlayerTuning::default();
        let mut player = grounded_player(&tuning);
        let mut sink = Vec::new();

        player.update(&press(|i| i.jump = true), &floor(), &tuning, &mut sink);
        assert_eq!(sink, vec![SoundEffect::Jump]);
        assert!(!player.grounded);
        assert_eq!(player.body.vel.y, tuning.jump_impulse + GRAVITY);
        assert_eq!(player.stamina.current(), 90.0);

        // Airborne: a second jump is ignored
        player.update(&press(|i| i.jump = true), &floor(), &tuning, &mut sink);
        assert_eq!(sink.len(), 1);

        let mut tired = grounded_player(&tuning);
        tired.stamina.set(5.0);
        let mut sink = Vec::new();
        tired.update(&press(|i| i.jump = true), &floor(), &tuning, &mut sink);
        assert!(sink.is_empty());
        assert!(tired.grounded);
    }

    #[test]
    fn test_jump_power_boosts_impulse() {
        let tuning = PlayerTuning::default();
        let mut player = grounded_player(&tuning);
        player.powers.jump.set(100);
        assert_eq!(player.jump_velocity(&tuning), -17.0);
    }

    #[test]
    fn test_speed_modifiers_compose() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(spawn_point(), &tuning);
        assert_eq!(player.movement_speed(&tuning), 4.0);

        player.powers.speed.set(10);
        assert_eq!(player.movement_speed(&tuning), 6.0);

        player.stamina.set(10.0);
        assert_eq!(player.movement_speed(&tuning), 3.0);

        player.powers.speed.clear();
        assert_eq!(player.movement_speed(&tuning), 2.0);
    }

    #[test]
    fn test_horizontal_world_clamp() {
        let tuning = PlayerTuning::default();
        let mut player = grounded_player(&tuning);
        player.body.pos.x = WORLD_WIDTH - PLAYER_WIDTH - 2.0;

        player.update(&press(|i| i.right = true), &floor(), &tuning, &mut NullSink);
        assert_eq!(player.body.pos.x, WORLD_WIDTH - PLAYER_WIDTH);

        player.body.pos.x = 1.0;
        player.update(&press(|i| i.left = true), &floor(), &tuning, &mut NullSink);
        assert_eq!(player.body.pos.x, 0.0);
        assert!(!player.facing_right);
    }

    #[test]
    fn test_fall_costs_diamonds_once_and_respawns() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(spawn_point(), &tuning);
        player.body.pos.y = SCREEN_HEIGHT + FALL_MARGIN + 5.0;
        let mut sink = Vec::new();

        player.update(&TickInput::default(), &[], &tuning, &mut sink);
        assert_eq!(player.diamonds, 30 - 15);
        assert_eq!(player.body.pos, player.spawn);
        assert_eq!(player.invulnerable.remaining(), tuning.respawn_invulnerability);

        player.update(&TickInput::default(), &[], &tuning, &mut sink);
        let losses = sink.iter().filter(|e| **e == SoundEffect::DiamondLost).count();
        assert_eq!(losses, 1);
        assert_eq!(player.lives, tuning.start_lives);
    }

    #[test]
    fn test_lose_diamonds_scales_damage() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(spawn_point(), &tuning);
        let mut sink = Vec::new();

        player.lose_diamonds(5, &tuning, &mut sink);
        assert_eq!(player.diamonds, 23);
        assert_eq!(player.stamina.current(), 80.0);
        assert_eq!(sink, vec![SoundEffect::DiamondLost]);
    }

    #[test]
    fn test_invincible_player_is_immune() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(spawn_point(), &tuning);
        player.powers.invincible.set(10);
        player.stamina.set(42.0);
        let mut sink = Vec::new();

        player.lose_diamonds(50, &tuning, &mut sink);
        assert_eq!(player.diamonds, tuning.start_diamonds);
        assert_eq!(player.stamina.current(), 42.0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_running_out_of_diamonds_costs_a_life() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(spawn_point(), &tuning);
        player.diamonds = 3;
        player.body.pos = Vec2::new(900.0, 300.0);
        let mut sink = Vec::new();

        player.lose_diamonds(5, &tuning, &mut sink);
        assert_eq!(player.lives, tuning.start_lives - 1);
        assert_eq!(player.diamonds, tuning.respawn_diamonds);
        assert_eq!(player.stamina.current(), tuning.respawn_stamina);
        assert_eq!(player.body.pos, player.spawn);
        assert_eq!(sink, vec![SoundEffect::DiamondLost, SoundEffect::LifeLost]);
    }

    #[test]
    fn test_invincible_power_holds_invulnerability() {
        let tuning = PlayerTuning::default();
        let mut player = grounded_player(&tuning);
        player.powers.invincible.set(3);
        player.update(&TickInput::default(), &floor(), &tuning, &mut NullSink);
        assert!(player.is_invulnerable());

        for _ in 0..3 {
            player.update(&TickInput::default(), &floor(), &tuning, &mut NullSink);
        }
        assert!(!player.is_invulnerable());
    }

    #[test]
    fn test_power_cooldown_gates_activation() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(spawn_point(), &tuning);
        let mut sink = Vec::new();

        // Armed at spawn
        let before = player.powers;
        assert!(!player.activate_power(PowerKind::Speed, &tuning, &mut sink));
        assert_eq!(player.powers, before);
        assert!(sink.is_empty());

        player.power_cooldown.clear();
        assert!(player.activate_power(PowerKind::Strength, &tuning, &mut sink));
        assert_eq!(player.powers.strength.remaining(), tuning.strength_power_ticks);
        assert_eq!(player.power_cooldown.remaining(), tuning.power_cooldown);
        assert_eq!(sink, vec![SoundEffect::SpeedBoost]);

        let before = player.powers;
        assert!(!player.activate_power(PowerKind::Jump, &tuning, &mut sink));
        assert_eq!(player.powers, before);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resources_stay_in_bounds(
                presses in proptest::collection::vec(0u8..64, 1..300),
                hits in proptest::collection::vec(0u32..12, 1..300)
            ) {
                let tuning = PlayerTuning::default();
                let mut player = Player::new(spawn_point(), &tuning);
                let platforms = floor();

                for (i, bits) in presses.iter().enumerate() {
                    let input = TickInput {
                        left: bits & 1 != 0,
                        right: bits & 2 != 0,
                        jump: bits & 4 != 0,
                        punch: bits & 8 != 0,
                        kick: bits & 16 != 0,
                        ..Default::default()
                    };
                    player.update(&input, &platforms, &tuning, &mut NullSink);
                    if bits & 32 != 0 {
                        player.lose_diamonds(hits[i % hits.len()], &tuning, &mut NullSink);
                    }

                    let s = player.stamina.current();
                    prop_assert!((0.0..=tuning.max_stamina).contains(&s), "stamina {}", s);
                    prop_assert!(player.body.is_finite());
                    prop_assert!(player.body.pos.x >= 0.0);
                    prop_assert!(player.body.pos.x <= WORLD_WIDTH - PLAYER_WIDTH);
                    prop_assert!(player.body.pos.y <= SCREEN_HEIGHT + FALL_MARGIN);
                }
            }
        }
    }
}
