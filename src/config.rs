//! Tuning and level configuration
//!
//! The original builds of this game kept screen size, map size and unit
//! ratios in process-wide statics, duplicated per level. Here every knob is
//! an explicit struct handed to a constructor, with `Default` reproducing the
//! shipped values and a JSON loader so hosts can tune without recompiling.

use std::error::Error;
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Error raised when a configuration precondition is violated.
///
/// Construction is the only fallible surface of this crate; the per-tick and
/// per-frame paths clamp or no-op instead of failing (a running frame must
/// never crash on bad data).
#[derive(Debug)]
pub enum ConfigError {
    /// A collection that must hold at least one element is empty
    Empty(&'static str),
    /// A value that must be strictly positive is zero or negative
    NonPositive(&'static str),
    /// A tile map row differs in length from the first row
    RaggedMap { row: usize, expected: usize, got: usize },
    /// Configuration JSON failed to parse
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Empty(what) => write!(f, "{what} must not be empty"),
            ConfigError::NonPositive(what) => write!(f, "{what} must be positive"),
            ConfigError::RaggedMap { row, expected, got } => {
                write!(f, "tile map row {row} has {got} cells, expected {expected}")
            }
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Visible window size in display units (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: consts::VIEWPORT_WIDTH,
            height: consts::VIEWPORT_HEIGHT,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::NonPositive("viewport dimensions"));
        }
        Ok(())
    }

    #[inline]
    pub fn as_vec(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Particle trail tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles spawned per emitter update
    pub spawn_per_update: u32,
    /// Guaranteed lifetime in ticks
    pub base_lifespan: u32,
    /// Random extra lifetime, exclusive upper bound (0 disables the jitter)
    pub lifespan_jitter: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            spawn_per_update: consts::PARTICLES_PER_UPDATE,
            base_lifespan: consts::PARTICLE_BASE_LIFESPAN,
            lifespan_jitter: consts::PARTICLE_LIFESPAN_JITTER,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_per_update == 0 {
            return Err(ConfigError::NonPositive("particle spawn count"));
        }
        if self.base_lifespan == 0 {
            return Err(ConfigError::NonPositive("particle base lifespan"));
        }
        Ok(())
    }
}

/// Swim-cycle animation tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frames in the sprite sheet cycle
    pub frame_count: u32,
    /// Real-time delay between frames (seconds)
    pub frame_delay: f32,
    /// Maximum frames advanced in one tick. The drain loop catches up after
    /// hitches but must not stall on a pathological elapsed time.
    pub max_catchup: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_count: consts::PLAYER_FRAME_COUNT,
            frame_delay: consts::PLAYER_ANIMATION_DELAY,
            max_catchup: consts::MAX_ANIMATION_CATCHUP,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count == 0 {
            return Err(ConfigError::NonPositive("animation frame count"));
        }
        if self.frame_delay <= 0.0 {
            return Err(ConfigError::NonPositive("animation frame delay"));
        }
        Ok(())
    }
}

/// Full tuning for the simulation stepper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    pub control: crate::input::ControlTuning,
    pub animation: AnimationConfig,
    /// Control magnitude above which facing updates and the trail emits
    pub emit_threshold: f32,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            control: crate::input::ControlTuning::default(),
            animation: AnimationConfig::default(),
            emit_threshold: consts::EMIT_THRESHOLD,
        }
    }
}

impl StepperConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.animation.validate()?;
        self.control.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_values() {
        let cfg = StepperConfig::default();
        assert_eq!(cfg.animation.frame_count, 16);
        assert!((cfg.animation.frame_delay - 0.1).abs() < 1e-6);
        assert!((cfg.control.deadzone - 0.1).abs() < 1e-6);
        assert!((cfg.emit_threshold - 0.07).abs() < 1e-6);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_from_json_partial_override() {
        let cfg = StepperConfig::from_json(
            r#"{ "animation": { "frame_count": 8 }, "emit_threshold": 0.2 }"#,
        )
        .unwrap();
        assert_eq!(cfg.animation.frame_count, 8);
        assert!((cfg.emit_threshold - 0.2).abs() < 1e-6);
        // Untouched fields keep their defaults
        assert!((cfg.animation.frame_delay - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = StepperConfig::from_json(r#"{ "animation": { "frame_count": 0 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("frame count"));
    }

    #[test]
    fn test_viewport_validation() {
        assert!(ViewportConfig::default().validate().is_ok());
        let bad = ViewportConfig { width: 0.0, height: 480.0 };
        assert!(bad.validate().is_err());
    }
}
