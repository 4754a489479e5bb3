//! Data-driven game balance
//!
//! Every number here can be overridden from JSON. Overrides are merged into
//! the defaults key by key at any depth, so omitted fields keep the shipped
//! values of the table they belong to.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::settings::ConfigError;
use crate::sim::PowerKind;

/// Player movement, stamina, damage intake and power-ups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTuning {
    pub start_diamonds: u32,
    pub start_lives: u32,

    pub max_stamina: f32,
    /// Stamina regained per tick
    pub stamina_regen: f32,
    pub jump_stamina_cost: f32,
    pub attack_stamina_cost: f32,
    /// Below this, movement speed is penalized
    pub low_stamina_threshold: f32,
    pub low_stamina_speed_factor: f32,

    pub base_speed: f32,
    pub speed_power_factor: f32,
    /// Negative: up
    pub jump_impulse: f32,
    pub jump_power_factor: f32,
    pub stomp_bounce: f32,

    pub punch_ticks: u32,
    pub kick_ticks: u32,
    pub punch_range: f32,
    pub kick_range: f32,

    /// Incoming diamond loss is scaled by this (fraction dropped)
    pub damage_multiplier: f32,
    pub damage_stamina_penalty: f32,
    pub respawn_diamonds: u32,
    pub respawn_stamina: f32,
    pub respawn_invulnerability: u32,
    pub fall_penalty: u32,

    /// Shared cooldown between power activations (armed at spawn)
    pub power_cooldown: u32,
    pub speed_power_ticks: u32,
    pub jump_power_ticks: u32,
    pub invincible_power_ticks: u32,
    pub strength_power_ticks: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start_diamonds: 30,
            start_lives: 2,

            max_stamina: 100.0,
            stamina_regen: 0.5,
            jump_stamina_cost: 10.0,
            attack_stamina_cost: 15.0,
            low_stamina_threshold: 20.0,
            low_stamina_speed_factor: 0.5,

            base_speed: 4.0,
            speed_power_factor: 1.5,
            jump_impulse: -14.0,
            jump_power_factor: 1.25,
            stomp_bounce: -12.0,

            punch_ticks: 25,
            kick_ticks: 35,
            punch_range: 35.0,
            kick_range: 45.0,

            damage_multiplier: 1.5,
            damage_stamina_penalty: 20.0,
            respawn_diamonds: 20,
            respawn_stamina: 50.0,
            respawn_invulnerability: 180,
            fall_penalty: 10,

            power_cooldown: 300,
            speed_power_ticks: 300,
            jump_power_ticks: 300,
            invincible_power_ticks: 150,
            strength_power_ticks: 300,
        }
    }
}

impl PlayerTuning {
    pub fn power_ticks(&self, kind: PowerKind) -> u32 {
        match kind {
            PowerKind::Speed => self.speed_power_ticks,
            PowerKind::Jump => self.jump_power_ticks,
            PowerKind::Invincible => self.invincible_power_ticks,
            PowerKind::Strength => self.strength_power_ticks,
        }
    }
}

/// How an enemy reacts to the player's punches, kicks and stomps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitTable {
    /// Player attacks only land within this vertical gap
    pub vertical_range: f32,
    pub punch_damage: f32,
    pub punch_damage_strong: f32,
    pub punch_knockback: f32,
    pub kick_damage: f32,
    pub kick_damage_strong: f32,
    pub kick_knockback: f32,
    /// Vertical velocity applied by a kick (negative: up)
    pub kick_lift: f32,
    pub stomp_damage: f32,
    /// Player stomp cooldown after a bounce
    pub stomp_cooldown: u32,
    /// Gap left between the bounced player and the enemy top
    pub stomp_clearance: f32,
}

impl HitTable {
    /// Robot values; the boss carries its own table in `BossTuning`
    pub fn robot() -> Self {
        Self {
            vertical_range: 60.0,
            punch_damage: 15.0,
            punch_damage_strong: 25.0,
            punch_knockback: 5.0,
            kick_damage: 25.0,
            kick_damage_strong: 40.0,
            kick_knockback: 8.0,
            kick_lift: -5.0,
            stomp_damage: 20.0,
            stomp_cooldown: 10,
            stomp_clearance: 1.0,
        }
    }
}

/// Per-variant robot stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotStats {
    pub health: f32,
    pub speed: f32,
    pub damage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotTuning {
    pub normal: RobotStats,
    pub tough: RobotStats,
    /// Initial patrol speed (direction is random)
    pub patrol_speed: f32,
    pub detection_radius: f32,
    pub patrol_distance: f32,
    pub melee_radius: f32,
    pub melee_vertical: f32,
    /// Ticks in melee range before a strike lands
    pub attack_cadence: u32,
    /// Invulnerability granted to the player after a strike
    pub strike_invulnerability: u32,
    pub hits: HitTable,
}

impl Default for RobotTuning {
    fn default() -> Self {
        Self {
            normal: RobotStats {
                health: 30.0,
                speed: 1.5,
                damage: 5,
            },
            tough: RobotStats {
                health: 80.0,
                speed: 3.0,
                damage: 8,
            },
            patrol_speed: 2.0,
            detection_radius: 200.0,
            patrol_distance: 100.0,
            melee_radius: 40.0,
            melee_vertical: 50.0,
            attack_cadence: 60,
            strike_invulnerability: 60,
            hits: HitTable::robot(),
        }
    }
}

/// Tier <= `simple_max_tier`: strike when close, charge from medium range,
/// otherwise drift toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleCycleTuning {
    pub attack_cadence: u32,
    pub strike_range: f32,
    pub strike_invulnerability: u32,
    pub charge_range: f32,
    pub charge_speed: f32,
    pub charge_ticks: u32,
    pub drift_cadence: u32,
    pub drift_speed: f32,
}

impl Default for SimpleCycleTuning {
    fn default() -> Self {
        Self {
            attack_cadence: 60,
            strike_range: 80.0,
            strike_invulnerability: 60,
            charge_range: 150.0,
            charge_speed: 4.0,
            charge_ticks: 30,
            drift_cadence: 120,
            drift_speed: 2.0,
        }
    }
}

/// The four rotating patterns of higher tiers. Speeds are `base + per_tier * tier`;
/// strike damage is the boss base damage plus a per-pattern bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternTuning {
    pub aggressive_speed: f32,
    pub aggressive_speed_per_tier: f32,
    pub aggressive_range: f32,
    pub aggressive_bonus: u32,
    pub aggressive_invulnerability: u32,

    pub jump_cadence: u32,
    pub jump_trigger_range: f32,
    /// Negative: up
    pub jump_impulse: f32,
    pub jump_strike_range: f32,
    pub jump_strike_vertical: f32,
    pub jump_bonus: u32,
    pub jump_invulnerability: u32,

    pub charge_speed: f32,
    pub charge_speed_per_tier: f32,
    pub charge_ticks: u32,
    pub charge_range: f32,
    pub charge_bonus: u32,
    pub charge_invulnerability: u32,

    /// Per-tick velocity decay while defending
    pub defensive_slowdown: f32,
    pub defensive_range: f32,
    pub defensive_cadence: u32,
    pub defensive_invulnerability: u32,
}

impl Default for PatternTuning {
    fn default() -> Self {
        Self {
            aggressive_speed: 3.0,
            aggressive_speed_per_tier: 0.5,
            aggressive_range: 70.0,
            aggressive_bonus: 2,
            aggressive_invulnerability: 45,

            jump_cadence: 60,
            jump_trigger_range: 200.0,
            jump_impulse: -15.0,
            jump_strike_range: 50.0,
            jump_strike_vertical: 30.0,
            jump_bonus: 5,
            jump_invulnerability: 90,

            charge_speed: 5.0,
            charge_speed_per_tier: 1.0,
            charge_ticks: 45,
            charge_range: 60.0,
            charge_bonus: 3,
            charge_invulnerability: 60,

            defensive_slowdown: 0.8,
            defensive_range: 100.0,
            defensive_cadence: 30,
            defensive_invulnerability: 75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossTuning {
    pub base_health: f32,
    pub health_per_tier: f32,
    pub base_damage: u32,
    pub damage_per_tier: u32,
    /// Tiers at or below this use the simple two-mode AI
    pub simple_max_tier: u32,
    pub simple: SimpleCycleTuning,
    /// Ticks per attack pattern in the advanced AI
    pub pattern_cadence: u32,
    pub patterns: PatternTuning,
    /// Velocity factor applied when a charge runs out
    pub charge_end_factor: f32,
    /// Health fraction below which the boss enrages
    pub enrage_threshold: f32,
    pub enrage_speed_factor: f32,
    pub enrage_cadence: u32,
    pub enrage_range: f32,
    /// Subtracted from base damage for the enraged strike
    pub enrage_damage_reduction: u32,
    pub enrage_invulnerability: u32,
    pub hits: HitTable,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            base_health: 100.0,
            health_per_tier: 75.0,
            base_damage: 8,
            damage_per_tier: 2,
            simple_max_tier: 2,
            simple: SimpleCycleTuning::default(),
            pattern_cadence: 90,
            patterns: PatternTuning::default(),
            charge_end_factor: 0.5,
            enrage_threshold: 0.3,
            enrage_speed_factor: 1.5,
            enrage_cadence: 45,
            enrage_range: 90.0,
            enrage_damage_reduction: 2,
            enrage_invulnerability: 30,
            hits: HitTable {
                vertical_range: 80.0,
                punch_damage: 10.0,
                punch_damage_strong: 20.0,
                punch_knockback: 3.0,
                kick_damage: 20.0,
                kick_damage_strong: 35.0,
                kick_knockback: 5.0,
                kick_lift: -3.0,
                stomp_damage: 15.0,
                stomp_cooldown: 15,
                stomp_clearance: 2.0,
            },
        }
    }
}

/// Collectible values and score awards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTuning {
    pub diamond_value: u32,
    pub super_diamond_value: u32,
    pub diamond_score: u64,
    pub super_diamond_score: u64,
    pub robot_score: u64,
    pub boss_score: u64,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            diamond_value: 1,
            super_diamond_value: 5,
            diamond_score: 10,
            super_diamond_score: 50,
            robot_score: 100,
            boss_score: 500,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub robot: RobotTuning,
    pub boss: BossTuning,
    pub score: ScoreTuning,
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge_json(&mut merged, overrides);
        Ok(serde_json::from_value(merged)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}

/// Recursively overlay `patch` onto `base`; objects merge, anything else replaces
fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, patch) => *slot = patch,
    }
}
