//! Sound cue notifications
//!
//! The simulation never plays audio itself: it fires [`SoundEffect`]s into a
//! [`SoundSink`] handed to each tick. What the sink does with them (play a
//! sample, log, record for a test) is up to the host.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    Punch,
    Kick,
    /// Regular diamond picked up
    DiamondCollect,
    /// Player took damage
    DiamondLost,
    /// Robot took a hit (also used for boss strikes on the player)
    RobotHit,
    BossHit,
    /// Power diamond picked up
    SuperDiamondCollect,
    /// Speed power started (strength reuses this cue)
    SpeedBoost,
    JumpBoost,
    Invincible,
    LifeLost,
    LevelComplete,
}

impl SoundEffect {
    /// Stable cue name
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Punch => "punch",
            SoundEffect::Kick => "kick",
            SoundEffect::DiamondCollect => "diamond_collect",
            SoundEffect::DiamondLost => "diamond_lost",
            SoundEffect::RobotHit => "robot_hit",
            SoundEffect::BossHit => "boss_hit",
            SoundEffect::SuperDiamondCollect => "superdiamond_collect",
            SoundEffect::SpeedBoost => "speed_boost",
            SoundEffect::JumpBoost => "jump_boost",
            SoundEffect::Invincible => "invincible",
            SoundEffect::LifeLost => "life_lost",
            SoundEffect::LevelComplete => "level_complete",
        }
    }
}

/// Fire-and-forget receiver for sound cues
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Records cues in order (used by tests and replays)
impl SoundSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Audio manager for the headless host: logs each audible cue
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            played: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Sound-effect volume after mute (0.0 - 1.0)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cues actually voiced so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl SoundSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("sfx {} (vol {:.2})", effect.name(), vol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(SoundEffect::SuperDiamondCollect.name(), "superdiamond_collect");
        assert_eq!(SoundEffect::LevelComplete.name(), "level_complete");
    }

    #[test]
    fn test_recording_sink() {
        let mut sink: Vec<SoundEffect> = Vec::new();
        sink.play(SoundEffect::Jump);
        sink.play(SoundEffect::Kick);
        assert_eq!(sink, vec![SoundEffect::Jump, SoundEffect::Kick]);
    }

    #[test]
    fn test_muted_manager_voices_nothing() {
        let mut audio = AudioManager::from_settings(&Settings {
            muted: true,
            ..Default::default()
        });
        audio.play(SoundEffect::Punch);
        assert_eq!(audio.played(), 0);

        audio.set_muted(false);
        audio.play(SoundEffect::Punch);
        assert_eq!(audio.played(), 1);
    }

    #[test]
    fn test_effective_volume_from_settings() {
        let audio = AudioManager::from_settings(&Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Default::default()
        });
        assert!((audio.effective_volume() - 0.25).abs() < 1e-6);

        let muted = AudioManager::from_settings(&Settings {
            muted: true,
            ..Default::default()
        });
        assert_eq!(muted.effective_volume(), 0.0);
    }
}
