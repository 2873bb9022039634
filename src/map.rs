//! Tile map data model
//!
//! A level's floor is a rectangular grid of small integers indexing into a
//! tile texture palette. Immutable for the lifetime of a level; origin at
//! cell (0, 0), each cell `tile_size` pixels square on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Rectangular grid of palette indices, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
}

impl TileMap {
    /// Build a map from rows of palette indices.
    ///
    /// Fails fast on an empty map or ragged rows; a running frame never sees
    /// a malformed map.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(ConfigError::Empty("tile map"));
        }
        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(ConfigError::RaggedMap {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }
            tiles.extend(cells);
        }
        Ok(Self { width, height, tiles })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rows: Vec<Vec<u8>> = serde_json::from_str(json)?;
        Self::from_rows(rows)
    }

    /// Columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Palette index at cell (x, y); `None` out of bounds, negatives included
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// Map extents in display pixels for the given tile size
    #[inline]
    pub fn pixel_size(&self, tile_size: u32) -> Vec2 {
        Vec2::new(
            (self.width as u32 * tile_size) as f32,
            (self.height as u32 * tile_size) as f32,
        )
    }

    /// The built-in demo lagoon.
    ///
    /// Legend: 0 sand, 1 bushes facing bottom, 2 fish starting point,
    /// 3 bushes facing right.
    pub fn lagoon() -> Self {
        let rows = vec![
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 0, 2, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ];
        Self::from_rows(rows).expect("lagoon map is well-formed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lagoon_shape() {
        let map = TileMap::lagoon();
        assert_eq!(map.width(), 10);
        assert_eq!(map.height(), 10);
        assert_eq!(map.get(0, 0), Some(1));
        assert_eq!(map.get(0, 1), Some(3));
        assert_eq!(map.get(2, 2), Some(2));
        assert_eq!(map.pixel_size(128), Vec2::new(1280.0, 1280.0));
    }

    #[test]
    fn test_out_of_bounds_is_none() {
        let map = TileMap::lagoon();
        assert_eq!(map.get(-1, 0), None);
        assert_eq!(map.get(0, -3), None);
        assert_eq!(map.get(10, 0), None);
        assert_eq!(map.get(0, 10), None);
    }

    #[test]
    fn test_rejects_empty_and_ragged() {
        assert!(TileMap::from_rows(vec![]).is_err());
        assert!(TileMap::from_rows(vec![vec![]]).is_err());
        let err = TileMap::from_rows(vec![vec![0, 1], vec![0]]).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_from_json() {
        let map = TileMap::from_json("[[0,1],[2,3]]").unwrap();
        assert_eq!(map.width(), 2);
        assert_eq!(map.get(1, 1), Some(3));
        assert!(TileMap::from_json("[[0,1],[2]]").is_err());
    }
}
