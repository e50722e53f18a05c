//! World configuration
//!
//! Loaded from the same `settings.json` the game ships with. The simulation
//! treats a loaded config as already validated; `validate` is the loader's job.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controls::Controls;

/// Errors raised while loading a `settings.json`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Immutable world and entity parameters for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Simulation tick rate (ticks per second)
    pub fps: u32,
    pub world_width: u32,
    pub world_height: u32,

    pub egg_width: u32,
    pub egg_height: u32,
    #[serde(rename = "eggInitialHP")]
    pub egg_initial_hp: i32,

    pub eggnemy_width: u32,
    pub eggnemy_height: u32,
    #[serde(rename = "eggnemyInitialHP")]
    pub eggnemy_initial_hp: i32,
    pub initial_number_of_eggnemies: u32,
    /// Kill threshold that unlocks the boss
    pub eggnemies_to_defeat_for_boss: u64,

    pub boss_width: u32,
    pub boss_height: u32,
    /// Zero disables the boss encounter
    #[serde(rename = "bossInitialHP")]
    pub boss_initial_hp: i32,

    #[serde(default)]
    pub controls: Controls,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_width: 400,
            screen_height: 300,
            fps: 30,
            world_width: 800,
            world_height: 600,
            egg_width: 20,
            egg_height: 20,
            egg_initial_hp: 10,
            eggnemy_width: 15,
            eggnemy_height: 15,
            eggnemy_initial_hp: 1,
            initial_number_of_eggnemies: 5,
            eggnemies_to_defeat_for_boss: 10,
            boss_width: 40,
            boss_height: 40,
            boss_initial_hp: 5,
            controls: Controls::default(),
        }
    }
}

impl WorldConfig {
    /// Parse a config from `settings.json` text and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a `settings.json` from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({}x{} world @ {} fps)",
            path.display(),
            config.world_width,
            config.world_height,
            config.fps
        );
        Ok(config)
    }

    /// Check the assumptions the simulation makes about its config
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: u32) -> Result<(), ConfigError> {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive".to_string(),
                });
            }
            Ok(())
        }
        fn fits(field: &'static str, size: u32, world: u32) -> Result<(), ConfigError> {
            if size > world {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{size} exceeds world dimension {world}"),
                });
            }
            Ok(())
        }

        positive("fps", self.fps)?;
        positive("screenWidth", self.screen_width)?;
        positive("screenHeight", self.screen_height)?;
        positive("worldWidth", self.world_width)?;
        positive("worldHeight", self.world_height)?;
        positive("eggWidth", self.egg_width)?;
        positive("eggHeight", self.egg_height)?;
        positive("eggnemyWidth", self.eggnemy_width)?;
        positive("eggnemyHeight", self.eggnemy_height)?;
        positive("bossWidth", self.boss_width)?;
        positive("bossHeight", self.boss_height)?;

        fits("eggWidth", self.egg_width, self.world_width)?;
        fits("eggHeight", self.egg_height, self.world_height)?;
        fits("eggnemyWidth", self.eggnemy_width, self.world_width)?;
        fits("eggnemyHeight", self.eggnemy_height, self.world_height)?;
        fits("bossWidth", self.boss_width, self.world_width)?;
        fits("bossHeight", self.boss_height, self.world_height)?;

        if self.egg_initial_hp <= 0 {
            return Err(ConfigError::Invalid {
                field: "eggInitialHP",
                reason: "must be positive".to_string(),
            });
        }
        if self.eggnemy_initial_hp <= 0 {
            return Err(ConfigError::Invalid {
                field: "eggnemyInitialHP",
                reason: "must be positive".to_string(),
            });
        }
        if self.boss_initial_hp < 0 {
            return Err(ConfigError::Invalid {
                field: "bossInitialHP",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width as f32, self.world_height as f32)
    }

    #[inline]
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    #[inline]
    pub fn egg_size(&self) -> Vec2 {
        Vec2::new(self.egg_width as f32, self.egg_height as f32)
    }

    #[inline]
    pub fn eggnemy_size(&self) -> Vec2 {
        Vec2::new(self.eggnemy_width as f32, self.eggnemy_height as f32)
    }

    #[inline]
    pub fn boss_size(&self) -> Vec2 {
        Vec2::new(self.boss_width as f32, self.boss_height as f32)
    }

    /// Whether this match has a boss encounter at all
    pub fn has_boss(&self) -> bool {
        self.boss_initial_hp > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = r#"{
        "screenWidth": 100,
        "screenHeight": 100,
        "fps": 60,
        "canvasID": "canvas",
        "worldWidth": 200,
        "worldHeight": 200,
        "eggWidth": 20,
        "eggHeight": 20,
        "eggInitialHP": 10,
        "eggnemyWidth": 20,
        "eggnemyHeight": 20,
        "eggnemyInitialHP": 1,
        "initialNumberOfEggnemies": 0,
        "eggnemiesToDefeatForBoss": 3,
        "bossInitialHP": 5,
        "bossWidth": 20,
        "bossHeight": 20
    }"#;

    #[test]
    fn test_parse_settings_json() {
        let config = WorldConfig::from_json(SETTINGS).unwrap();
        assert_eq!(config.fps, 60);
        assert_eq!(config.world_size(), Vec2::new(200.0, 200.0));
        assert_eq!(config.egg_initial_hp, 10);
        assert_eq!(config.eggnemies_to_defeat_for_boss, 3);
        assert_eq!(config.boss_initial_hp, 5);
        assert_eq!(config.initial_number_of_eggnemies, 0);
        // Controls fall back to defaults when absent
        assert_eq!(config.controls, Controls::default());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = WorldConfig::from_json(r#"{ "fps": 60 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let config = WorldConfig {
            fps: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fps", .. }));
    }

    #[test]
    fn test_oversized_boss_rejected() {
        let config = WorldConfig {
            boss_width: 1000,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bossWidth", .. }));
    }

    #[test]
    fn test_zero_boss_hp_disables_boss() {
        let config = WorldConfig {
            boss_initial_hp: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.has_boss());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = WorldConfig::load("/nonexistent/settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_shipped_settings_load_with_arrow_aliases() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/settings.json");
        let config = WorldConfig::load(path).unwrap();
        assert_eq!(config.controls, Controls::default());
        assert_eq!(
            config.controls.action_for("ArrowRight"),
            Some(crate::controls::Action::Move(crate::controls::Direction::Right))
        );
    }
}
