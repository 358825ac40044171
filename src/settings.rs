//! Game settings and preferences
//!
//! Persisted through a [`crate::persistence::SettingsStore`], separately from
//! anything in the simulation.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Screen shake on hits
    pub screen_shake: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 0.7,
            sfx_volume: 1.0,
            screen_shake: true,
        }
    }
}

impl Settings {
    /// Clamp volumes into [0, 1]. NaN counts as silence.
    pub fn sanitized(mut self) -> Self {
        self.music_volume = clamp_volume(self.music_volume);
        self.sfx_volume = clamp_volume(self.sfx_volume);
        self
    }

    /// Nudge both volumes by `delta`, clamped
    pub fn adjust_volume(&mut self, delta: f32) {
        self.music_volume = clamp_volume(self.music_volume + delta);
        self.sfx_volume = clamp_volume(self.sfx_volume + delta);
    }

    pub fn toggle_screen_shake(&mut self) {
        self.screen_shake = !self.screen_shake;
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_nan() { 0.0 } else { vol.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumes_are_clamped() {
        let s = Settings {
            music_volume: 4.0,
            sfx_volume: -1.0,
            screen_shake: false,
        }
        .sanitized();
        assert_eq!(s.music_volume, 1.0);
        assert_eq!(s.sfx_volume, 0.0);

        let nan = Settings {
            music_volume: f32::NAN,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(nan.music_volume, 0.0);
    }

    #[test]
    fn test_adjust_volume_saturates() {
        let mut s = Settings::default();
        s.adjust_volume(0.5);
        assert_eq!(s.sfx_volume, 1.0);
        assert!((s.music_volume - 1.0).abs() < 1e-6);

        s.adjust_volume(-3.0);
        assert_eq!(s.music_volume, 0.0);
        assert_eq!(s.sfx_volume, 0.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "sfx_volume": 0.25 }"#).unwrap();
        assert_eq!(s.sfx_volume, 0.25);
        assert_eq!(s.music_volume, Settings::default().music_volume);
        assert!(s.screen_shake);
    }
}
