//! Game settings and tuning
//!
//! Everything here has a compiled-in default from `consts`. A JSON file may
//! override any subset of fields.

use std::fmt;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Play field geometry, fixed for the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub width: f32,
    pub height: f32,
    /// Height of the collidable ground strip
    pub ground_height: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl FieldSettings {
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// y of the ground surface
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.height - self.ground_height
    }
}

/// Vehicle physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub rotation_gain: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            rotation_gain: ROTATION_GAIN,
        }
    }
}

/// Obstacle stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Seconds of active play between spawns
    pub interval: f64,
    /// Leftward obstacle speed (pixels/s)
    pub obstacle_speed: f32,
    pub background_speed: f32,
    pub ground_speed: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            interval: SPAWN_INTERVAL,
            obstacle_speed: OBSTACLE_SPEED,
            background_speed: BACKGROUND_SPEED,
            ground_speed: GROUND_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: JUMP_VOLUME,
            music_volume: MUSIC_VOLUME,
            muted: false,
        }
    }
}

/// Complete settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub field: FieldSettings,
    pub physics: PhysicsSettings,
    pub spawn: SpawnSettings,
    pub audio: AudioSettings,
    /// Frame-rate cap of the loop driver
    pub frame_rate: u32,
    /// Largest delta a single tick may carry (seconds)
    pub max_frame_dt: f32,
    /// Seed for obstacle placement
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field: FieldSettings::default(),
            physics: PhysicsSettings::default(),
            spawn: SpawnSettings::default(),
            audio: AudioSettings::default(),
            frame_rate: FRAME_RATE,
            max_frame_dt: MAX_FRAME_DT,
            seed: 0x5EED,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(SettingsError::Parse)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("field.width", f64::from(self.field.width))?;
        positive("field.height", f64::from(self.field.height))?;
        positive("spawn.interval", self.spawn.interval)?;
        positive("max_frame_dt", f64::from(self.max_frame_dt))?;
        if self.frame_rate == 0 {
            return Err(SettingsError::Invalid {
                field: "frame_rate",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..self.field.height).contains(&self.field.ground_height) {
            return Err(SettingsError::Invalid {
                field: "field.ground_height",
                reason: format!(
                    "must lie in [0, {}), got {}",
                    self.field.height, self.field.ground_height
                ),
            });
        }
        Ok(())
    }
}

/// Settings could not be loaded
#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read settings {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed settings JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}
