//! Audio cues driven by simulation events
//!
//! The simulation only emits [`GameEvent`]s. This module maps them to sound
//! effects and hands those to an [`AudioSink`]. A failing sink never stops
//! the game: errors are logged and playback continues with the next cue.

use std::io::{self, Write};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Snake ate food
    Eat,
    /// Snake crashed
    GameOver,
}

impl SoundEffect {
    /// Sound to play for an event, if any
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FoodEaten { .. } => Some(SoundEffect::Eat),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            _ => None,
        }
    }
}

/// Something that can play a one-shot sound
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> io::Result<()>;
}

/// Rings the terminal bell: once for food, twice for game over
pub struct BellSink<W: Write> {
    out: W,
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for BellSink<W> {
    fn play(&mut self, effect: SoundEffect, _volume: f32) -> io::Result<()> {
        let bells: &[u8] = match effect {
            SoundEffect::Eat => b"\x07",
            SoundEffect::GameOver => b"\x07\x07",
        };
        self.out.write_all(bells)?;
        self.out.flush()
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Create a manager configured from settings
    pub fn with_settings(sink: S, settings: &Settings) -> Self {
        let mut audio = Self::new(sink);
        audio.apply_settings(settings);
        audio
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
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

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        log::debug!("Playing {:?} at volume {:.2}", effect, vol);
        if let Err(e) = self.sink.play(effect, vol) {
            log::warn!("Failed to play {:?}: {}", effect, e);
        }
    }

    /// Play the cue for every event that has one
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::from_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
