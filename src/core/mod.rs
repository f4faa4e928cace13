//! Core module - pure game logic with no terminal dependencies
//!
//! This module contains the map, game rules, RNG, and save snapshots.
//! It has zero dependencies on rendering or input handling.

pub mod game_state;
pub mod map;
pub mod rng;
pub mod save;

// Re-export commonly used types
pub use game_state::{default_obstacles, GameState, ShotResult};
pub use map::Map;
pub use rng::SimpleRng;
pub use save::{read_save, save_exists, write_save, SaveState, SAVE_FILE};
