//! Settings persistence
//!
//! Features:
//! - Versioned JSON envelope
//! - Atomic writes (tmp file, then rename over the save)
//! - Unreadable or unknown records fall back to defaults

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::settings::Settings;

/// Current settings record layout
pub const SETTINGS_VERSION: u32 = 1;

/// On-disk wrapper around [`Settings`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    settings: Settings,
}

fn encode(settings: &Settings) -> Result<String, StoreError> {
    let envelope = Envelope {
        version: SETTINGS_VERSION,
        settings: settings.sanitized(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn decode(json: &str) -> Result<Settings, StoreError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    if envelope.version != SETTINGS_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: envelope.version,
            expected: SETTINGS_VERSION,
        });
    }
    Ok(envelope.settings.sanitized())
}

/// A place settings records are kept
pub trait SettingsStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Settings>, StoreError>;
    fn save(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

/// Load settings, treating any failure as "no prior settings"
pub fn load_settings(store: &dyn SettingsStore) -> Settings {
    match store.load() {
        Ok(Some(settings)) => {
            log::info!("Loaded settings");
            settings
        }
        Ok(None) => {
            log::info!("Using default settings");
            Settings::default()
        }
        Err(e) => {
            log::warn!("Could not load settings ({e}), using defaults");
            Settings::default()
        }
    }
}

/// Save settings; failures are logged, never fatal
pub fn save_settings(store: &mut dyn SettingsStore, settings: &Settings) -> bool {
    match store.save(settings) {
        Ok(()) => {
            log::info!("Settings saved");
            true
        }
        Err(e) => {
            log::warn!("Could not save settings: {e}");
            false
        }
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        decode(&json).map(Some)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        let json = encode(settings)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }
}

/// In-memory store holding the encoded record
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with a raw record
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>, StoreError> {
        self.record.as_deref().map(decode).transpose()
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.record = Some(encode(settings)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir()
            .join(format!("flappy-core-{}-{nanos}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            music_volume: 0.3,
            sfx_volume: 0.55,
            screen_shake: false,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), Some(settings));
    }

    #[test]
    fn test_empty_store_gives_defaults() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_corrupt_record_gives_defaults() {
        let store = MemoryStore::with_record("\u{0}\u{1}garbage");
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_future_version_is_rejected() {
        let store = MemoryStore::with_record(
            r#"{ "version": 99, "settings": { "music_volume": 0.1, "sfx_volume": 0.1, "screen_shake": false } }"#,
        );
        assert!(matches!(
            store.load(),
            Err(StoreError::UnsupportedVersion { found: 99, .. })
        ));
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_out_of_range_volumes_are_clamped_on_load() {
        let store = MemoryStore::with_record(
            r#"{ "version": 1, "settings": { "music_volume": 7.0, "sfx_volume": -2.0, "screen_shake": true } }"#,
        );
        let settings = store.load().unwrap().unwrap();
        assert_eq!(settings.music_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_file_round_trip() {
        let path = temp_file("settings.json");
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), None);

        let settings = Settings {
            music_volume: 0.125,
            sfx_volume: 0.75,
            screen_shake: false,
        };
        assert!(save_settings(&mut store, &settings));
        assert!(!store.tmp_path().exists());

        let reopened = JsonFileStore::new(&path);
        let loaded = reopened.load().unwrap().unwrap();
        assert!((loaded.music_volume - settings.music_volume).abs() < 1e-6);
        assert!((loaded.sfx_volume - settings.sfx_volume).abs() < 1e-6);
        assert_eq!(loaded.screen_shake, settings.screen_shake);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
