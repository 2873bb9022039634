//! Conversions between simulation space and display space
//!
//! The physics world works in meters; rendering works in pixels. The two are
//! related by a fixed ratio (100 px per meter by default). Tile cells are a
//! third space: integer grid coordinates obtained by floor-dividing a display
//! position by the tile size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts;

/// Fixed-ratio converter between simulation meters and display pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitConverter {
    ratio: f32,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self {
            ratio: consts::REAL_TO_VIRTUAL_RATIO,
        }
    }
}

impl UnitConverter {
    pub fn new(ratio: f32) -> Result<Self, ConfigError> {
        if ratio <= 0.0 {
            return Err(ConfigError::NonPositive("unit ratio"));
        }
        Ok(Self { ratio })
    }

    /// Pixels per simulation meter
    #[inline]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Simulation meters to display pixels
    #[inline]
    pub fn to_display(&self, v: Vec2) -> Vec2 {
        v * self.ratio
    }

    /// Display pixels to simulation meters
    #[inline]
    pub fn to_simulation(&self, v: Vec2) -> Vec2 {
        v / self.ratio
    }
}

/// Tile-grid cell containing a display-space position.
///
/// Floor division, so negative positions land in negative cells. No bounds
/// checking; callers clamp against the map extents.
#[inline]
pub fn to_cell(v: Vec2, tile_size: u32) -> (i32, i32) {
    let ts = tile_size as f32;
    ((v.x / ts).floor() as i32, (v.y / ts).floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_conversion() {
        let conv = UnitConverter::default();
        assert_eq!(conv.to_display(Vec2::new(4.0, 4.0)), Vec2::new(400.0, 400.0));
        assert_eq!(conv.to_simulation(Vec2::new(400.0, 240.0)), Vec2::new(4.0, 2.4));
    }

    #[test]
    fn test_ratio_must_be_positive() {
        assert!(UnitConverter::new(0.0).is_err());
        assert!(UnitConverter::new(-100.0).is_err());
        assert!(UnitConverter::new(64.0).is_ok());
    }

    #[test]
    fn test_to_cell_floors() {
        assert_eq!(to_cell(Vec2::new(0.0, 0.0), 128), (0, 0));
        assert_eq!(to_cell(Vec2::new(127.9, 128.0), 128), (0, 1));
        assert_eq!(to_cell(Vec2::new(928.0, 608.0), 128), (7, 4));
        // Negative positions floor toward -inf, they do not truncate to 0
        assert_eq!(to_cell(Vec2::new(-0.5, -128.5), 128), (-1, -2));
    }

    proptest! {
        #[test]
        fn prop_round_trip(x in -1e4f32..1e4, y in -1e4f32..1e4) {
            let conv = UnitConverter::default();
            let v = Vec2::new(x, y);
            let back = conv.to_simulation(conv.to_display(v));
            prop_assert!((back - v).length() <= 1e-3 * (1.0 + v.length()));
        }
    }
}
