//! Accelerometer input: latest-value handoff and control derivation
//!
//! The platform's sensor callback may fire off the simulation thread. Instead
//! of marshaling, the callback stores the newest reading into a single slot
//! and the stepper polls it at the top of each tick. One writer, one reader,
//! no queue; stale or skipped readings are acceptable.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts;

/// Lock-free single-slot holder for the most recent accelerometer reading.
///
/// Both components are packed into one `AtomicU64` so a reader can never
/// observe x from one reading and y from another.
#[derive(Debug, Default)]
pub struct AccelerometerSlot {
    bits: AtomicU64,
}

impl AccelerometerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a reading (called from the sensor callback)
    pub fn store(&self, reading: Vec2) {
        let packed =
            ((reading.x.to_bits() as u64) << 32) | reading.y.to_bits() as u64;
        self.bits.store(packed, Ordering::Relaxed);
    }

    /// Load the most recent reading (called by the simulation thread)
    pub fn load(&self) -> Vec2 {
        let packed = self.bits.load(Ordering::Relaxed);
        Vec2::new(
            f32::from_bits((packed >> 32) as u32),
            f32::from_bits(packed as u32),
        )
    }
}

/// Mapping from a raw accelerometer vector to a control vector
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTuning {
    /// Per-axis threshold below which a component reads as zero, so the
    /// avatar does not drift on a device lying flat
    pub deadzone: f32,
    /// Componentwise clamp on the derived control vector
    pub max_velocity: Vec2,
    /// Swap x/y for landscape orientation (tilting the long edge steers x)
    pub swap_axes: bool,
    /// Force multiplier applied when feeding the physics body
    pub force_scale: f32,
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self {
            deadzone: consts::CONTROL_DEADZONE,
            max_velocity: Vec2::splat(consts::CONTROL_MAX_VELOCITY),
            swap_axes: true,
            force_scale: consts::CONTROL_FORCE_SCALE,
        }
    }
}

impl ControlTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_velocity.x <= 0.0 || self.max_velocity.y <= 0.0 {
            return Err(ConfigError::NonPositive("control velocity limit"));
        }
        if self.force_scale <= 0.0 {
            return Err(ConfigError::NonPositive("control force scale"));
        }
        Ok(())
    }

    /// Derive the control vector from a raw reading: deadzone each axis,
    /// negate (tilting toward an edge moves the avatar that way), optionally
    /// swap axes, clamp.
    pub fn derive(&self, raw: Vec2) -> Vec2 {
        let gate = |c: f32| if c.abs() > self.deadzone { c } else { 0.0 };
        let v = -Vec2::new(gate(raw.x), gate(raw.y));
        let v = if self.swap_axes { Vec2::new(v.y, v.x) } else { v };
        v.clamp(-self.max_velocity, self.max_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trips_latest_value() {
        let slot = AccelerometerSlot::new();
        assert_eq!(slot.load(), Vec2::ZERO);
        slot.store(Vec2::new(0.5, -0.25));
        slot.store(Vec2::new(-1.0, 0.75));
        assert_eq!(slot.load(), Vec2::new(-1.0, 0.75));
    }

    #[test]
    fn test_deadzone_zeroes_small_components() {
        let tuning = ControlTuning::default();
        assert_eq!(tuning.derive(Vec2::new(0.05, -0.09)), Vec2::ZERO);
        // Only the component above the deadzone survives
        let v = tuning.derive(Vec2::new(0.5, 0.02));
        assert_eq!(v, Vec2::new(0.0, -0.5));
    }

    #[test]
    fn test_axes_swap_and_negate() {
        let tuning = ControlTuning::default();
        // Landscape mapping: control.x <- -raw.y, control.y <- -raw.x
        let v = tuning.derive(Vec2::new(0.4, -0.6));
        assert_eq!(v, Vec2::new(0.6, -0.4));

        let portrait = ControlTuning { swap_axes: false, ..ControlTuning::default() };
        assert_eq!(portrait.derive(Vec2::new(0.4, -0.6)), Vec2::new(-0.4, 0.6));
    }

    #[test]
    fn test_clamped_to_velocity_limit() {
        let tuning = ControlTuning::default();
        let v = tuning.derive(Vec2::new(-9.0, 8.0));
        assert_eq!(v, Vec2::new(-3.0, 3.0));
    }
}
