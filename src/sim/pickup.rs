//! Collectible diamonds

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::player::Player;
use super::timers::PowerKind;
use crate::audio::{SoundEffect, SoundSink};
use crate::tuning::{PlayerTuning, ScoreTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Diamond,
    /// Worth more and grants a power
    SuperDiamond(PowerKind),
}

impl CollectibleKind {
    pub fn size(self) -> f32 {
        match self {
            CollectibleKind::Diamond => 16.0,
            CollectibleKind::SuperDiamond(_) => 24.0,
        }
    }

    fn bob_rate(self) -> f32 {
        match self {
            CollectibleKind::Diamond => 0.2,
            CollectibleKind::SuperDiamond(_) => 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub kind: CollectibleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub collected: bool,
    /// Renderer bob phase
    pub animation: f32,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            collected: false,
            animation: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        let size = self.kind.size();
        Rect::new(self.pos.x, self.pos.y, size, size)
    }

    /// Check for pickup by the player. Returns the score earned this tick.
    pub fn update(
        &mut self,
        player: &mut Player,
        player_tuning: &PlayerTuning,
        score: &ScoreTuning,
        sink: &mut dyn SoundSink,
    ) -> u64 {
        if self.collected {
            return 0;
        }
        self.animation += self.kind.bob_rate();

        if !self.rect().intersects(&player.body.rect()) {
            return 0;
        }
        self.collected = true;

        match self.kind {
            CollectibleKind::Diamond => {
                player.diamonds = player.diamonds.saturating_add(score.diamond_value);
                sink.play(SoundEffect::DiamondCollect);
                score.diamond_score
            }
            CollectibleKind::SuperDiamond(power) => {
                player.diamonds = player.diamonds.saturating_add(score.super_diamond_value);
                // Still worth diamonds when the power is on cooldown
                player.activate_power(power, player_tuning, sink);
                sink.play(SoundEffect::SuperDiamondCollect);
                score.super_diamond_score
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn_point;
    use crate::tuning::Tuning;

    fn player_at(pos: Vec2, tuning: &Tuning) -> Player {
        let mut player = Player::new(spawn_point(), &tuning.player);
        player.body.pos = pos;
        player
    }

    #[test]
    fn test_diamond_pickup() {
        let tuning = Tuning::default();
        let mut player = player_at(Vec2::new(100.0, 100.0), &tuning);
        let mut diamond = Collectible::new(CollectibleKind::Diamond, Vec2::new(110.0, 120.0));
        let mut sink = Vec::new();

        let earned = diamond.update(&mut player, &tuning.player, &tuning.score, &mut sink);
        assert_eq!(earned, 10);
        assert!(diamond.collected);
        assert_eq!(player.diamonds, tuning.player.start_diamonds + 1);
        assert_eq!(sink, vec![SoundEffect::DiamondCollect]);

        // Collected diamonds are inert
        let earned = diamond.update(&mut player, &tuning.player, &tuning.score, &mut sink);
        assert_eq!(earned, 0);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_distant_diamond_only_animates() {
        let tuning = Tuning::default();
        let mut player = player_at(Vec2::new(100.0, 100.0), &tuning);
        let mut diamond = Collectible::new(CollectibleKind::Diamond, Vec2::new(300.0, 100.0));
        let earned = diamond.update(&mut player, &tuning.player, &tuning.score, &mut Vec::new());
        assert_eq!(earned, 0);
        assert!(!diamond.collected);
        assert!(diamond.animation > 0.0);
    }

    #[test]
    fn test_super_diamond_grants_power() {
        let tuning = Tuning::default();
        let mut player = player_at(Vec2::new(100.0, 100.0), &tuning);
        player.power_cooldown.clear();
        let mut gem = Collectible::new(
            CollectibleKind::SuperDiamond(PowerKind::Jump),
            Vec2::new(104.0, 104.0),
        );
        let mut sink = Vec::new();

        let earned = gem.update(&mut player, &tuning.player, &tuning.score, &mut sink);
        assert_eq!(earned, 50);
        assert_eq!(player.diamonds, tuning.player.start_diamonds + 5);
        assert!(player.has_power(PowerKind::Jump));
        assert_eq!(sink, vec![SoundEffect::JumpBoost, SoundEffect::SuperDiamondCollect]);
    }

    #[test]
    fn test_super_diamond_on_cooldown_still_pays() {
        let tuning = Tuning::default();
        let mut player = player_at(Vec2::new(100.0, 100.0), &tuning);
        let mut gem = Collectible::new(
            CollectibleKind::SuperDiamond(PowerKind::Speed),
            Vec2::new(104.0, 104.0),
        );
        let mut sink = Vec::new();

        assert_eq!(gem.update(&mut player, &tuning.player, &tuning.score, &mut sink), 50);
        assert!(!player.has_power(PowerKind::Speed));
        assert_eq!(player.diamonds, tuning.player.start_diamonds + 5);
        assert_eq!(sink, vec![SoundEffect::SuperDiamondCollect]);
    }
}
