//! Save module - snapshot persistence for the game session
//!
//! A save is a flat snapshot of player, enemies, and obstacles written as
//! a JSON document in one call. Loading validates every coordinate before
//! touching live state, so a corrupt file can never half-apply.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::types::{Position, MAP_HEIGHT, MAP_WIDTH};

/// Default save file name, relative to the working directory.
pub const SAVE_FILE: &str = "battlegrid_save.json";

/// Flat serializable snapshot. No derived data: the map is rebuilt from
/// these fields on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    pub player: Position,
    pub enemies: Vec<Position>,
    pub obstacles: Vec<Position>,
}

impl SaveState {
    /// Capture the persistable parts of a game state.
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: state.player,
            enemies: state.enemies.clone(),
            obstacles: state.obstacles.clone(),
        }
    }

    /// Reject snapshots whose coordinates fall outside the playable
    /// interior. Obstacles may touch any map cell except the border rows
    /// the player needs, so they get the same interior rule here.
    pub fn validate(&self) -> Result<()> {
        let interior = |p: &Position| {
            p.x >= 1 && p.x <= MAP_WIDTH as i8 - 2 && p.y >= 1 && p.y <= MAP_HEIGHT as i8 - 2
        };

        if !interior(&self.player) {
            bail!(
                "player position ({}, {}) outside playable area",
                self.player.x,
                self.player.y
            );
        }
        if let Some(p) = self.enemies.iter().find(|p| !interior(p)) {
            bail!("enemy position ({}, {}) outside playable area", p.x, p.y);
        }
        if let Some(p) = self.obstacles.iter().find(|p| !interior(p)) {
            bail!("obstacle position ({}, {}) outside playable area", p.x, p.y);
        }
        Ok(())
    }

    /// Apply this snapshot onto a game state and rebuild its map.
    pub fn restore(&self, state: &mut GameState) {
        state.player = self.player;
        state.enemies = self.enemies.clone();
        state.obstacles = self.obstacles.clone();
        state.rebuild_map();
    }
}

/// Write the full game snapshot to `path` in a single call.
pub fn write_save(path: impl AsRef<Path>, state: &GameState) -> Result<()> {
    let path = path.as_ref();
    let snapshot = SaveState::capture(state);
    let json = serde_json::to_string_pretty(&snapshot).context("serializing game state")?;
    fs::write(path, json).with_context(|| format!("writing save file {}", path.display()))?;
    Ok(())
}

/// Read and validate a snapshot from `path`.
///
/// Returns the snapshot without touching any live state; the caller
/// decides when to `restore` it. Any failure leaves the caller's state
/// untouched.
pub fn read_save(path: impl AsRef<Path>) -> Result<SaveState> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading save file {}", path.display()))?;
    let snapshot: SaveState =
        serde_json::from_str(&json).context("parsing save file as JSON")?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Check whether a save exists at `path`.
pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_capture_restore_roundtrip() {
        let mut state = GameState::new(3);
        state.spawn_enemies(3);

        let snapshot = SaveState::capture(&state);
        let mut fresh = GameState::new(99);
        snapshot.restore(&mut fresh);

        assert_eq!(fresh.player, state.player);
        assert_eq!(fresh.enemies, state.enemies);
        assert_eq!(fresh.obstacles, state.obstacles);
    }

    #[test]
    fn test_validate_rejects_out_of_range_player() {
        let snapshot = SaveState {
            player: Position::new(0, 0),
            enemies: vec![],
            obstacles: vec![],
        };
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_enemy() {
        let snapshot = SaveState {
            player: Position::new(1, 1),
            enemies: vec![Position::new(19, 5)],
            obstacles: vec![],
        };
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_interior_snapshot() {
        let snapshot = SaveState {
            player: Position::new(1, 1),
            enemies: vec![Position::new(10, 5)],
            obstacles: vec![Position::new(3, 3)],
        };
        assert!(snapshot.validate().is_ok());
    }
}
