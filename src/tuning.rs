//! Data-driven game balance
//!
//! [`Tuning`] mirrors every gameplay constant in [`crate::consts`]. Missing
//! keys in a tuning file fall back to those defaults, so a minimal JSON can
//! override just the values you care about:
//!
//! ```json
//! { "gravity": 500.0, "lives": null }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::StoreError;

/// Runtime-tunable physics and gameplay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // World
    pub world_width: f32,
    pub world_height: f32,

    // Bird
    pub bird_start_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub gravity: f32,
    pub flap_impulse: f32,
    pub max_fall_speed: f32,
    pub tilt_per_velocity: f32,
    pub max_tilt: f32,

    // Pipes
    pub pipe_width: f32,
    pub pipe_speed: f32,
    pub spawn_interval: f32,
    pub min_gap: u32,
    pub max_gap: u32,
    pub gap_margin: u32,

    // Lives. `None` plays the classic one-hit mode.
    pub lives: Option<u8>,
    pub respawn_delay: f32,
    /// Wipe every pipe when a life is lost
    pub clear_pipes_on_respawn: bool,

    // Feedback
    pub shake_intensity: f32,
    pub shake_decay: f32,
    pub volume_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            bird_start_x: BIRD_START_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            max_fall_speed: MAX_FALL_SPEED,
            tilt_per_velocity: TILT_PER_VELOCITY,
            max_tilt: MAX_TILT,

            pipe_width: PIPE_WIDTH,
            pipe_speed: PIPE_SPEED,
            spawn_interval: PIPE_SPAWN_INTERVAL,
            min_gap: MIN_GAP_SIZE,
            max_gap: MAX_GAP_SIZE,
            gap_margin: GAP_MARGIN,

            lives: Some(START_LIVES),
            respawn_delay: RESPAWN_DELAY,
            clear_pipes_on_respawn: true,

            shake_intensity: SHAKE_INTENSITY,
            shake_decay: SHAKE_DECAY,
            volume_rate: VOLUME_RATE,
        }
    }
}

impl Tuning {
    /// Classic rules: the first hit ends the run
    pub fn classic() -> Self {
        Self {
            lives: None,
            ..Self::default()
        }
    }

    /// Parse a JSON tuning document and sanitize it
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Load a tuning file, falling back to defaults when it is absent or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No tuning file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file: {e}");
                Self::default()
            }
        }
    }

    /// Clamp values into a playable range instead of rejecting them.
    ///
    /// The gap range is ordered and shrunk until the largest gap still fits
    /// between the two margins.
    pub fn sanitized(mut self) -> Self {
        self.world_width = self.world_width.max(1.0);
        self.world_height = self.world_height.max(1.0);
        self.bird_width = self.bird_width.max(1.0);
        self.bird_height = self.bird_height.max(1.0);
        self.max_fall_speed = self.max_fall_speed.max(0.0);
        self.max_tilt = self.max_tilt.abs();
        self.pipe_width = self.pipe_width.max(1.0);
        self.pipe_speed = self.pipe_speed.max(0.0);
        self.spawn_interval = self.spawn_interval.max(0.01);
        self.respawn_delay = self.respawn_delay.max(0.0);
        self.shake_decay = self.shake_decay.clamp(0.0, 1.0);
        self.volume_rate = self.volume_rate.max(0.0);

        if self.min_gap > self.max_gap {
            std::mem::swap(&mut self.min_gap, &mut self.max_gap);
        }
        let height = self.world_height as u32;
        self.gap_margin = self.gap_margin.min(height / 4);
        let room = height.saturating_sub(2 * self.gap_margin).max(1);
        self.max_gap = self.max_gap.clamp(1, room);
        self.min_gap = self.min_gap.clamp(1, self.max_gap);

        if self.lives == Some(0) {
            self.lives = Some(1);
        }
        self
    }

    /// Start position of the bird (center)
    pub fn bird_start_y(&self) -> f32 {
        self.world_height / 2.0
    }
}
