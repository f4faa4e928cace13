//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use serde::{Deserialize, Serialize};

/// Map dimensions (columns x rows)
pub const MAP_WIDTH: u8 = 20;
pub const MAP_HEIGHT: u8 = 10;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 100;
pub const BULLET_STEP_MS: u32 = 100;
pub const MESSAGE_HOLD_MS: u32 = 2000;

/// Number of enemies spawned into a fresh game
pub const NEW_GAME_ENEMIES: usize = 4;

/// A single coordinate on the map.
///
/// `x` runs left to right (0..MAP_WIDTH), `y` top to bottom (0..MAP_HEIGHT).
/// Interior cells satisfy `1 <= x <= MAP_WIDTH-2` and `1 <= y <= MAP_HEIGHT-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Offset by a direction's unit delta.
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit coordinate delta (dx, dy).
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Static map tile kinds.
///
/// Enemies and bullets are never baked into the map; they are overlaid by
/// the view at their live coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// Horizontal border segment (top and bottom edges).
    WallH,
    /// Vertical border segment (left and right edges).
    WallV,
    Obstacle,
    Player,
}

impl Tile {
    /// Glyph used when rendering this tile.
    pub fn glyph(&self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::WallH => '-',
            Tile::WallV => '|',
            Tile::Obstacle => '#',
            Tile::Player => 'P',
        }
    }

    /// Whether a bullet stops on this tile.
    pub fn blocks_bullet(&self) -> bool {
        matches!(self, Tile::WallH | Tile::WallV | Tile::Obstacle)
    }
}

/// Glyphs for overlaid entities.
pub const ENEMY_GLYPH: char = 'E';
pub const BULLET_GLYPH: char = '*';

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
    SaveQuit,
}

impl GameAction {
    /// Direction for movement actions, None for fire/quit.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Fire | GameAction::SaveQuit => None,
        }
    }
}

/// Top-level menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    LoadGame,
    Exit,
}
