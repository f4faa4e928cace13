//! Map module - manages the static game grid
//!
//! The map is a 20x10 grid of tiles stored in a flat array for cache
//! locality and zero-allocation access. It carries only the static layer
//! (border walls, obstacles) plus the player symbol; enemies and bullets
//! live in the game state and are overlaid at render time.
//! Coordinates: (x, y) where x ranges 0..19 (left to right), y ranges
//! 0..9 (top to bottom). The border occupies x=0, x=19, y=0, y=9.

use crate::types::{Position, Tile, MAP_HEIGHT, MAP_WIDTH};

/// Total number of cells on the map
const MAP_SIZE: usize = (MAP_WIDTH as usize) * (MAP_HEIGHT as usize);

/// The game map - 20 columns x 10 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    /// Flat array of tiles, row-major order (y * WIDTH + x)
    tiles: [Tile; MAP_SIZE],
}

impl Map {
    /// Create a new map with every cell empty (no border drawn yet)
    pub fn new() -> Self {
        Self {
            tiles: [Tile::Empty; MAP_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= MAP_WIDTH as i8 || y < 0 || y >= MAP_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (MAP_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        MAP_WIDTH
    }

    pub fn height(&self) -> u8 {
        MAP_HEIGHT
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.tiles[idx])
    }

    /// Set tile at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, tile: Tile) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Check if (x, y) is an interior cell (strictly inside the border)
    pub fn is_interior(&self, x: i8, y: i8) -> bool {
        x >= 1 && x <= MAP_WIDTH as i8 - 2 && y >= 1 && y <= MAP_HEIGHT as i8 - 2
    }

    /// Check if the tile at (x, y) is an empty interior cell
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        self.is_interior(x, y) && matches!(self.get(x, y), Some(Tile::Empty))
    }

    /// Rebuild the static layer: clear, draw the border, overlay
    /// obstacles, place the player. Deterministic for given inputs.
    pub fn rebuild(&mut self, player: Position, obstacles: &[Position]) {
        self.tiles = [Tile::Empty; MAP_SIZE];

        for x in 0..MAP_WIDTH as i8 {
            self.set(x, 0, Tile::WallH);
            self.set(x, MAP_HEIGHT as i8 - 1, Tile::WallH);
        }
        for y in 0..MAP_HEIGHT as i8 {
            self.set(0, y, Tile::WallV);
            self.set(MAP_WIDTH as i8 - 1, y, Tile::WallV);
        }

        for obstacle in obstacles {
            self.set(obstacle.x, obstacle.y, Tile::Obstacle);
        }

        self.set(player.x, player.y, Tile::Player);
    }

    /// Move the player symbol from one cell to another.
    ///
    /// The caller is responsible for validating the destination first.
    pub fn move_player(&mut self, from: Position, to: Position) {
        self.set(from.x, from.y, Tile::Empty);
        self.set(to.x, to.y, Tile::Player);
    }

    /// Get a reference to the internal tiles array
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}
