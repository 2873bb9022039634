//! Camera at a fixed height over the map, clamped to its bounds
//!
//! The camera is a pure state holder with a clamp policy: the stepper writes
//! the followed entity's display position once per tick, and every write is
//! clamped so the viewport never shows past a map edge. It holds no reference
//! to the entity it follows.

use glam::Vec2;

/// 2D camera position in display units
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    position: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clamped position (top-left corner of the viewport)
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the camera, clamping each axis to `[0, map - viewport]`.
    ///
    /// A map smaller than the viewport inverts that range; the clamp
    /// collapses to 0 rather than panicking.
    pub fn set_position(&mut self, p: Vec2, map_px: Vec2, viewport: Vec2) {
        let limit = (map_px - viewport).max(Vec2::ZERO);
        self.position = p.clamp(Vec2::ZERO, limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MAP: Vec2 = Vec2::new(1280.0, 1280.0);
    const VIEWPORT: Vec2 = Vec2::new(800.0, 480.0);

    #[test]
    fn test_clamps_below_zero() {
        let mut cam = Camera::new();
        cam.set_position(Vec2::new(-50.0, -50.0), MAP, VIEWPORT);
        assert_eq!(cam.position(), Vec2::ZERO);
    }

    #[test]
    fn test_clamps_beyond_max() {
        let mut cam = Camera::new();
        cam.set_position(Vec2::new(5000.0, 5000.0), MAP, VIEWPORT);
        assert_eq!(cam.position(), Vec2::new(480.0, 800.0));
    }

    #[test]
    fn test_interior_positions_pass_through() {
        let mut cam = Camera::new();
        cam.set_position(Vec2::new(100.0, 200.0), MAP, VIEWPORT);
        assert_eq!(cam.position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_map_smaller_than_viewport_collapses_to_zero() {
        let mut cam = Camera::new();
        cam.set_position(Vec2::new(300.0, 300.0), Vec2::new(256.0, 256.0), VIEWPORT);
        assert_eq!(cam.position(), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_clamp_invariant(x in -1e5f32..1e5, y in -1e5f32..1e5) {
            let mut cam = Camera::new();
            cam.set_position(Vec2::new(x, y), MAP, VIEWPORT);
            let p = cam.position();
            prop_assert!(p.x >= 0.0 && p.x <= MAP.x - VIEWPORT.x);
            prop_assert!(p.y >= 0.0 && p.y <= MAP.y - VIEWPORT.y);
        }
    }
}
