//! Sound cue dispatch
//!
//! Turns engine events into sound effects. The actual playback backend sits
//! behind [`CueSink`]; whatever it does with a cue never reaches the match.

use crate::ports::AudioPort;
use crate::settings::Settings;
use crate::sim::Side;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    Beep,
    /// Human player won the match
    Cheer,
}

impl SoundEffect {
    /// Asset the cue is normally played from
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Beep => "resources/beep.wav",
            SoundEffect::Cheer => "resources/cheer.wav",
        }
    }
}

/// Playback backend. Fire-and-forget.
pub trait CueSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs cues (headless/native runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("cue {:?} ({}) at volume {:.2}", effect, effect.asset(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S = LogSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Cues handed to the sink so far
    cues_played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl<S: CueSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            cues_played: 0,
        }
    }

    /// Build from the player's audio preferences
    pub fn from_settings(sink: S, settings: &Settings) -> Self {
        let mut audio = Self::new(sink);
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

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Number of cues that actually went out
    pub fn cues_played(&self) -> u64 {
        self.cues_played
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
        self.cues_played += 1;
    }
}

impl<S: CueSink> AudioPort for AudioManager<S> {
    fn on_paddle_hit(&mut self, _side: Side) {
        self.play(SoundEffect::Beep);
    }

    fn on_game_over(&mut self, winner: Side) {
        // Only a human win gets a cheer
        if winner == Side::Player {
            self.play(SoundEffect::Cheer);
        }
    }
}
