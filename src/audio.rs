//! Audio dispatch
//!
//! Game events become fire-and-forget sound cues. Nothing here reports back
//! into the simulation, and a cue whose sound failed to load is a no-op.

use crate::assets::{SoundBank, SoundId};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bird flapped
    Flap,
    /// Pipe passed
    Score,
    /// Bird hit a pipe, the floor or the ceiling
    Hit,
}

impl SoundEffect {
    /// Cue for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Flapped => Some(SoundEffect::Flap),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::Hit => Some(SoundEffect::Hit),
            _ => None,
        }
    }
}

/// Platform audio output
pub trait SoundBackend {
    /// Start playing a loaded sound at `volume` (0.0 - 1.0)
    fn play(&mut self, sound: SoundId, volume: f32);

    /// Music channel volume changed
    fn set_music_volume(&mut self, _volume: f32) {}
}

/// Backend that only logs cues, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBackend;

impl SoundBackend for LogBackend {
    fn play(&mut self, sound: SoundId, volume: f32) {
        log::trace!("play sound {} at {:.2}", sound.0, volume);
    }

    fn set_music_volume(&mut self, volume: f32) {
        log::trace!("music volume {:.2}", volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: SoundBackend> {
    backend: B,
    bank: SoundBank,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<B: SoundBackend> AudioManager<B> {
    pub fn new(backend: B, bank: SoundBank) -> Self {
        if bank.flap.is_none() || bank.score.is_none() || bank.hit.is_none() {
            log::warn!("Some sounds failed to load - those cues will be silent");
        }
        let defaults = Settings::default();
        Self {
            backend,
            bank,
            sfx_volume: defaults.sfx_volume,
            music_volume: defaults.music_volume,
            muted: false,
        }
    }

    /// Pick up volume changes from the settings record
    pub fn apply_settings(&mut self, settings: &Settings) {
        let music = settings.music_volume.clamp(0.0, 1.0);
        if music != self.music_volume {
            self.music_volume = music;
            self.backend.set_music_volume(self.effective_music_volume());
        }
        self.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.backend.set_music_volume(self.effective_music_volume());
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sfx_volume }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.music_volume }
    }

    fn sound_for(&self, effect: SoundEffect) -> Option<SoundId> {
        match effect {
            SoundEffect::Flap => self.bank.flap,
            SoundEffect::Score => self.bank.score,
            SoundEffect::Hit => self.bank.hit,
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(sound) = self.sound_for(effect) else {
            return;
        };
        self.backend.play(sound, vol);
    }

    /// Play the cues for a batch of drained events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
