//! Drawing surface contract and the culled tile-map renderer
//!
//! Rendering proper lives in the host; this crate only decides *what* to draw
//! and *where*. The host hands out opaque [`TextureId`]s from its content
//! pipeline and implements [`DrawSurface`] over its sprite batcher.

use glam::Vec2;

use crate::camera::Camera;
use crate::config::ConfigError;
use crate::map::TileMap;
use crate::units::to_cell;

/// Opaque texture handle minted by the host's content provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// RGBA tint applied to a quad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint(pub [u8; 4]);

impl Tint {
    pub const WHITE: Tint = Tint([255, 255, 255, 255]);
    /// The trail particles' fixed sandy color
    pub const SANDY_BROWN: Tint = Tint([244, 164, 96, 255]);
}

/// Sub-rectangle of a texture, for sprite-sheet frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Textured-quad sink implemented by the host renderer.
///
/// `position` is in display pixels; `origin` is the pivot inside the texture
/// for rotation and placement; `source` selects a sprite-sheet frame
/// (`None` draws the whole texture).
pub trait DrawSurface {
    #[allow(clippy::too_many_arguments)]
    fn draw_quad(
        &mut self,
        texture: TextureId,
        position: Vec2,
        source: Option<SourceRect>,
        tint: Tint,
        rotation: f32,
        origin: Vec2,
        scale: f32,
        depth: f32,
    );
}

/// Draws only the tiles visible through the camera's viewport
#[derive(Debug, Clone)]
pub struct TileMapRenderer {
    palette: Vec<TextureId>,
    tile_size: u32,
}

impl TileMapRenderer {
    pub fn new(palette: Vec<TextureId>, tile_size: u32) -> Result<Self, ConfigError> {
        if palette.is_empty() {
            return Err(ConfigError::Empty("tile palette"));
        }
        if tile_size == 0 {
            return Err(ConfigError::NonPositive("tile size"));
        }
        Ok(Self { palette, tile_size })
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Half-open cell ranges `(min, max)` visible from `camera_pos`.
    ///
    /// The max corner overshoots by one tile so a partially visible column or
    /// row still draws, then both corners clamp to the map extents. Negative
    /// cells (camera forced below zero) clamp to zero instead of indexing.
    pub fn visible_range(
        &self,
        camera_pos: Vec2,
        viewport: Vec2,
        map: &TileMap,
    ) -> ((i32, i32), (i32, i32)) {
        let overshoot = Vec2::splat(self.tile_size as f32);
        let (min_x, min_y) = to_cell(camera_pos, self.tile_size);
        let (max_x, max_y) = to_cell(camera_pos + viewport + overshoot, self.tile_size);
        (
            (min_x.max(0), min_y.max(0)),
            (max_x.min(map.width() as i32), max_y.min(map.height() as i32)),
        )
    }

    /// Draw every visible tile, offset so the camera position maps to the
    /// viewport's top-left corner.
    ///
    /// Row-major, y outer; tiles do not overlap so the order only fixes the
    /// draw-call sequence. Palette indices past the end of the palette clamp
    /// to the last entry rather than crashing a running frame.
    pub fn draw_visible(
        &self,
        camera: &Camera,
        viewport: Vec2,
        map: &TileMap,
        surface: &mut dyn DrawSurface,
    ) {
        let cam = camera.position();
        let ((min_x, min_y), (max_x, max_y)) = self.visible_range(cam, viewport, map);
        let ts = self.tile_size as f32;
        for y in min_y..max_y {
            for x in min_x..max_x {
                let Some(tile) = map.get(x, y) else { continue };
                let idx = (tile as usize).min(self.palette.len() - 1);
                let pos = Vec2::new(x as f32 * ts - cam.x, y as f32 * ts - cam.y);
                surface.draw_quad(
                    self.palette[idx],
                    pos,
                    None,
                    Tint::WHITE,
                    0.0,
                    Vec2::ZERO,
                    1.0,
                    0.0,
                );
            }
        }
    }
}
