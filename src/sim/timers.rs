//! Orthogonal timer and resource components
//!
//! Every cooldown, action window and buff on an entity is a [`Countdown`]
//! measured in ticks. Each countdown is ticked at most once per simulation
//! step and gates exactly one behavior while it is active.

use serde::{Deserialize, Serialize};

/// A frame-count timer that runs down to zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown(u32);

impl Countdown {
    pub const fn new(ticks: u32) -> Self {
        Self(ticks)
    }

    /// Decrement by one tick (saturating)
    #[inline]
    pub fn tick(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, ticks: u32) {
        self.0 = ticks;
    }

    /// Keep the timer at least `ticks` long
    #[inline]
    pub fn hold(&mut self, ticks: u32) {
        self.0 = self.0.max(ticks);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

/// The four timed player buffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerKind {
    Speed,
    Jump,
    Invincible,
    Strength,
}

impl PowerKind {
    pub const ALL: [PowerKind; 4] = [
        PowerKind::Speed,
        PowerKind::Jump,
        PowerKind::Invincible,
        PowerKind::Strength,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerKind::Speed => "speed",
            PowerKind::Jump => "jump",
            PowerKind::Invincible => "invincible",
            PowerKind::Strength => "strength",
        }
    }
}

/// Independent countdowns for each power
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerTimers {
    pub speed: Countdown,
    pub jump: Countdown,
    pub invincible: Countdown,
    pub strength: Countdown,
}

impl PowerTimers {
    pub fn get(&self, kind: PowerKind) -> &Countdown {
        match kind {
            PowerKind::Speed => &self.speed,
            PowerKind::Jump => &self.jump,
            PowerKind::Invincible => &self.invincible,
            PowerKind::Strength => &self.strength,
        }
    }

    pub fn get_mut(&mut self, kind: PowerKind) -> &mut Countdown {
        match kind {
            PowerKind::Speed => &mut self.speed,
            PowerKind::Jump => &mut self.jump,
            PowerKind::Invincible => &mut self.invincible,
            PowerKind::Strength => &mut self.strength,
        }
    }

    #[inline]
    pub fn active(&self, kind: PowerKind) -> bool {
        self.get(kind).active()
    }

    pub fn tick_all(&mut self) {
        for kind in PowerKind::ALL {
            self.get_mut(kind).tick();
        }
    }

    /// Active powers with their remaining ticks, in a stable order
    pub fn active_list(&self) -> Vec<(PowerKind, u32)> {
        PowerKind::ALL
            .iter()
            .filter(|k| self.active(**k))
            .map(|k| (*k, self.get(*k).remaining()))
            .collect()
    }
}

/// A regenerating resource clamped to `[0, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stamina {
    current: f32,
    max: f32,
}

impl Stamina {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn set(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    pub fn regen(&mut self, rate: f32) {
        self.set(self.current + rate);
    }

    /// Debit `cost` if affordable; an unaffordable action leaves stamina untouched
    pub fn try_spend(&mut self, cost: f32) -> bool {
        if self.current < cost {
            return false;
        }
        self.set(self.current - cost);
        true
    }

    /// Unconditional loss (clamped at zero)
    pub fn drain(&mut self, amount: f32) {
        self.set(self.current - amount);
    }

    #[inline]
    pub fn below(&self, threshold: f32) -> bool {
        self.current < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_runs_to_zero() {
        let mut c = Countdown::new(2);
        assert!(c.active());
        c.tick();
        assert_eq!(c.remaining(), 1);
        c.tick();
        assert!(!c.active());
        c.tick();
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_countdown_hold_never_shortens() {
        let mut c = Countdown::new(50);
        c.hold(1);
        assert_eq!(c.remaining(), 50);
        c.clear();
        c.hold(1);
        assert_eq!(c.remaining(), 1);
    }

    #[test]
    fn test_power_timers_are_independent() {
        let mut p = PowerTimers::default();
        p.get_mut(PowerKind::Jump).set(3);
        p.get_mut(PowerKind::Strength).set(1);
        p.tick_all();
        assert!(p.active(PowerKind::Jump));
        assert!(!p.active(PowerKind::Strength));
        assert!(!p.active(PowerKind::Speed));
        assert_eq!(p.active_list(), vec![(PowerKind::Jump, 2)]);
    }

    #[test]
    fn test_stamina_rejects_unaffordable_spend() {
        let mut s = Stamina::new(100.0);
        s.set(10.0);
        assert!(!s.try_spend(15.0));
        assert_eq!(s.current(), 10.0);
        assert!(s.try_spend(10.0));
        assert_eq!(s.current(), 0.0);
    }

    #[test]
    fn test_stamina_clamps() {
        let mut s = Stamina::new(100.0);
        s.regen(5.0);
        assert_eq!(s.current(), 100.0);
        s.drain(250.0);
        assert_eq!(s.current(), 0.0);
        assert!(s.below(20.0));
    }
}
