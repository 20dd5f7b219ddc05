//! Game settings and preferences
//!
//! Persisted separately from the player profile, as JSON.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;
use crate::sim::SimConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Area-clear mega shot available (K key)
    pub mega_shot: bool,
    /// White flash when the mega shot fires
    pub screen_flash: bool,
    /// Reduced motion (suppresses flashes)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mega_shot: true,
            screen_flash: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "jungle_run_settings";

    /// Effective screen flash (respects reduced_motion)
    pub fn effective_screen_flash(&self) -> bool {
        self.screen_flash && !self.reduced_motion
    }

    /// Simulation config for a canvas of the given width
    pub fn sim_config(&self, viewport_width: f32) -> SimConfig {
        SimConfig {
            viewport_width,
            mega_shot_enabled: self.mega_shot,
        }
    }

    /// Load settings, falling back to defaults when missing or malformed
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings (fire-and-forget)
    pub fn save(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {}", e),
            },
            Err(e) => log::warn!("Failed to encode settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_reduced_motion_disables_flash() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert!(settings.screen_flash);
        assert!(!settings.effective_screen_flash());
    }

    #[test]
    fn test_sim_config_carries_variant() {
        let settings = Settings {
            mega_shot: false,
            ..Settings::default()
        };
        let config = settings.sim_config(640.0);
        assert_eq!(config.viewport_width, 640.0);
        assert!(!config.mega_shot_enabled);
    }

    #[test]
    fn test_load_save() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        let settings = Settings {
            mega_shot: false,
            screen_flash: false,
            reduced_motion: true,
        };
        settings.save(&mut store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_malformed_and_partial_json() {
        let mut store = MemoryStore::new();
        store
            .set(Settings::STORAGE_KEY, "{not json")
            .expect("memory store write");
        assert_eq!(Settings::load(&store), Settings::default());

        store
            .set(Settings::STORAGE_KEY, r#"{"mega_shot":false}"#)
            .expect("memory store write");
        let loaded = Settings::load(&store);
        assert!(!loaded.mega_shot);
        assert!(loaded.screen_flash);
    }
}
