//! Game state module - manages the complete game state
//!
//! Ties together the map, enemy list, obstacle layout, and RNG. All game
//! rules live here; terminal I/O stays in `term` and `main` so the rules
//! can be tested headless.

use arrayvec::ArrayVec;

use crate::core::{Map, SimpleRng};
use crate::types::{Direction, GameAction, Position, Tile, MAP_HEIGHT, MAP_WIDTH};

/// Upper bound on a bullet's travel: the player's column has at most
/// `MAP_HEIGHT` cells above it.
pub const MAX_SHOT_LEN: usize = MAP_HEIGHT as usize;

/// Outcome of a single shot, returned so the caller can animate the
/// bullet's path before applying the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotResult {
    /// Cells the bullet passed through, in flight order. Does not include
    /// the cell where it hit an enemy or a blocking tile.
    pub trace: ArrayVec<Position, MAX_SHOT_LEN>,
    /// Enemy cell the bullet hit, if any. At most one enemy dies per shot.
    pub hit: Option<Position>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub map: Map,
    pub player: Position,
    pub enemies: Vec<Position>,
    pub obstacles: Vec<Position>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a fresh state with the default obstacle layout and no
    /// enemies. Call `spawn_enemies` to populate a playable session.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            map: Map::new(),
            player: Position::new(1, 1),
            enemies: Vec::new(),
            obstacles: default_obstacles(),
            rng: SimpleRng::new(seed),
        };
        state.rebuild_map();
        state
    }

    /// Rebuild the static map layer from the current player and obstacles.
    pub fn rebuild_map(&mut self) {
        self.map.rebuild(self.player, &self.obstacles);
    }

    /// Authoritative collision rule: a destination is enterable iff it is
    /// an interior cell, not an obstacle, and not occupied by an enemy.
    /// The player's own cell is deliberately not blocked, so an enemy can
    /// step onto it; that is the loss condition.
    pub fn is_valid_move(&self, pos: Position) -> bool {
        if !self.map.is_interior(pos.x, pos.y) {
            return false;
        }
        if matches!(self.map.get(pos.x, pos.y), Some(Tile::Obstacle)) {
            return false;
        }
        !self.enemies.contains(&pos)
    }

    /// Apply a movement action to the player. Fire and save-quit are
    /// routed by the caller. Returns true if the player moved.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action.direction() {
            Some(dir) => self.try_move(dir),
            None => false,
        }
    }

    /// Move the player one cell if the destination is enterable.
    pub fn try_move(&mut self, dir: Direction) -> bool {
        let dest = self.player.step(dir);
        if !self.is_valid_move(dest) {
            return false;
        }
        self.map.move_player(self.player, dest);
        self.player = dest;
        true
    }

    /// Fire a bullet straight up from the player's column.
    ///
    /// The bullet advances one cell per step. An enemy in its path is
    /// removed and stops the bullet; a wall or obstacle stops it without
    /// a kill. Cells it flew through cleanly are returned for animation.
    pub fn fire(&mut self) -> ShotResult {
        let mut trace = ArrayVec::new();
        let mut bullet = self.player;

        while bullet.y > 0 {
            bullet.y -= 1;

            if let Some(idx) = self.enemies.iter().position(|e| *e == bullet) {
                self.enemies.swap_remove(idx);
                return ShotResult {
                    trace,
                    hit: Some(bullet),
                };
            }

            match self.map.get(bullet.x, bullet.y) {
                Some(tile) if tile.blocks_bullet() => break,
                Some(_) => trace.push(bullet),
                None => break,
            }
        }

        ShotResult { trace, hit: None }
    }

    /// Place `count` enemies on uniformly random open interior cells,
    /// resampling any cell that is already taken. Replaces the current
    /// enemy list.
    pub fn spawn_enemies(&mut self, count: usize) {
        self.enemies.clear();

        for _ in 0..count {
            let pos = loop {
                let x = 1 + self.rng.next_range(MAP_WIDTH as u32 - 2) as i8;
                let y = 1 + self.rng.next_range(MAP_HEIGHT as u32 - 2) as i8;
                let candidate = Position::new(x, y);
                if self.map.is_open(x, y) && !self.enemies.contains(&candidate) {
                    break candidate;
                }
            };
            self.enemies.push(pos);
        }
    }

    /// One wander step: every enemy independently picks a random direction
    /// and moves if the destination is enterable. No coordination.
    pub fn move_enemies(&mut self) {
        for i in 0..self.enemies.len() {
            let dir = self.rng.next_direction();
            let dest = self.enemies[i].step(dir);
            if self.is_valid_move(dest) {
                self.enemies[i] = dest;
            }
        }
    }

    /// True if any enemy stands on the player's cell.
    pub fn player_caught(&self) -> bool {
        self.enemies.contains(&self.player)
    }

    /// True once every enemy has been shot.
    pub fn enemies_cleared(&self) -> bool {
        self.enemies.is_empty()
    }
}

/// The fixed obstacle layout used for a new game.
pub fn default_obstacles() -> Vec<Position> {
    vec![
        Position::new(3, 3),
        Position::new(4, 3),
        Position::new(5, 3),
        Position::new(3, 5),
        Position::new(6, 6),
        Position::new(7, 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_player_on_map() {
        let state = GameState::new(1);
        assert_eq!(state.player, Position::new(1, 1));
        assert_eq!(state.map.get(1, 1), Some(Tile::Player));
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_move_into_border_is_rejected() {
        let mut state = GameState::new(1);
        // Player starts at (1, 1); up and left both lead into the border.
        assert!(!state.try_move(Direction::Up));
        assert!(!state.try_move(Direction::Left));
        assert_eq!(state.player, Position::new(1, 1));
    }

    #[test]
    fn test_move_into_enemy_is_rejected() {
        let mut state = GameState::new(1);
        state.enemies.push(Position::new(2, 1));
        assert!(!state.try_move(Direction::Right));
        assert_eq!(state.player, Position::new(1, 1));
    }

    #[test]
    fn test_move_updates_map_symbol() {
        let mut state = GameState::new(1);
        assert!(state.try_move(Direction::Down));
        assert_eq!(state.map.get(1, 1), Some(Tile::Empty));
        assert_eq!(state.map.get(1, 2), Some(Tile::Player));
    }

    #[test]
    fn test_fire_removes_single_enemy_above() {
        let mut state = GameState::new(1);
        state.player = Position::new(10, 8);
        state.rebuild_map();
        state.enemies.push(Position::new(10, 4));
        state.enemies.push(Position::new(10, 2));

        let shot = state.fire();
        assert_eq!(shot.hit, Some(Position::new(10, 4)));
        assert_eq!(state.enemies, vec![Position::new(10, 2)]);
        // The trace covers only the cells before the hit.
        assert_eq!(
            shot.trace.as_slice(),
            &[
                Position::new(10, 7),
                Position::new(10, 6),
                Position::new(10, 5)
            ]
        );
    }

    #[test]
    fn test_fire_blocked_by_obstacle() {
        let mut state = GameState::new(1);
        state.player = Position::new(4, 5);
        state.rebuild_map();
        // Obstacle at (4, 3) sits between the player and this enemy.
        state.enemies.push(Position::new(4, 2));

        let shot = state.fire();
        assert_eq!(shot.hit, None);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(shot.trace.as_slice(), &[Position::new(4, 4)]);
    }

    #[test]
    fn test_fire_into_wall_kills_nothing() {
        let mut state = GameState::new(1);
        let shot = state.fire();
        assert_eq!(shot.hit, None);
        assert!(shot.trace.is_empty());
    }

    #[test]
    fn test_spawn_enemies_exact_count_on_open_cells() {
        let mut state = GameState::new(42);
        state.spawn_enemies(4);

        assert_eq!(state.enemies.len(), 4);
        for enemy in &state.enemies {
            assert!(state.map.is_open(enemy.x, enemy.y));
        }
        // No duplicates.
        for i in 0..state.enemies.len() {
            for j in i + 1..state.enemies.len() {
                assert_ne!(state.enemies[i], state.enemies[j]);
            }
        }
    }

    #[test]
    fn test_move_enemies_stays_legal() {
        let mut state = GameState::new(7);
        state.spawn_enemies(4);

        for _ in 0..500 {
            state.move_enemies();
            for enemy in &state.enemies {
                assert!(state.map.is_interior(enemy.x, enemy.y));
                assert!(!matches!(
                    state.map.get(enemy.x, enemy.y),
                    Some(Tile::Obstacle)
                ));
            }
        }
    }

    #[test]
    fn test_enemy_can_step_onto_player_cell() {
        let mut state = GameState::new(1);
        // An enemy adjacent to the player may legally enter the player's
        // cell; that is what player_caught detects.
        state.enemies.push(Position::new(1, 2));
        assert!(!state.player_caught());

        state.enemies[0] = state.player;
        assert!(state.player_caught());
    }

    #[test]
    fn test_enemies_cleared() {
        let mut state = GameState::new(1);
        assert!(state.enemies_cleared());
        state.spawn_enemies(1);
        assert!(!state.enemies_cleared());
        state.enemies.clear();
        assert!(state.enemies_cleared());
    }
}
