//! Map tests - static layer invariants

use tui_battlegrid::core::{default_obstacles, Map};
use tui_battlegrid::types::{Position, Tile, MAP_HEIGHT, MAP_WIDTH};

#[test]
fn test_rebuild_border_is_all_walls() {
    let mut map = Map::new();
    map.rebuild(Position::new(1, 1), &default_obstacles());

    for x in 0..MAP_WIDTH as i8 {
        for y in 0..MAP_HEIGHT as i8 {
            let on_border =
                x == 0 || x == MAP_WIDTH as i8 - 1 || y == 0 || y == MAP_HEIGHT as i8 - 1;
            let tile = map.get(x, y).unwrap();
            if on_border {
                assert!(
                    matches!(tile, Tile::WallH | Tile::WallV),
                    "border cell ({}, {}) is {:?}",
                    x,
                    y,
                    tile
                );
            } else {
                assert!(
                    !matches!(tile, Tile::WallH | Tile::WallV),
                    "interior cell ({}, {}) is a wall",
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn test_rebuild_places_player_symbol() {
    let mut map = Map::new();
    let player = Position::new(7, 4);
    map.rebuild(player, &default_obstacles());
    assert_eq!(map.get(7, 4), Some(Tile::Player));
}

#[test]
fn test_rebuild_is_deterministic() {
    let obstacles = default_obstacles();
    let mut a = Map::new();
    let mut b = Map::new();
    a.rebuild(Position::new(2, 2), &obstacles);
    b.rebuild(Position::new(2, 2), &obstacles);
    assert_eq!(a, b);
}

#[test]
fn test_rebuild_clears_previous_state() {
    let mut map = Map::new();
    map.rebuild(Position::new(1, 1), &default_obstacles());
    map.rebuild(Position::new(5, 5), &[]);

    // Old player cell and old obstacles are gone.
    assert_eq!(map.get(1, 1), Some(Tile::Empty));
    assert_eq!(map.get(3, 3), Some(Tile::Empty));
    assert_eq!(map.get(5, 5), Some(Tile::Player));
}

#[test]
fn test_default_obstacles_match_layout() {
    let obstacles = default_obstacles();
    assert_eq!(obstacles.len(), 6);
    assert!(obstacles.contains(&Position::new(3, 3)));
    assert!(obstacles.contains(&Position::new(7, 6)));

    let mut map = Map::new();
    map.rebuild(Position::new(1, 1), &obstacles);
    for obstacle in &obstacles {
        assert_eq!(map.get(obstacle.x, obstacle.y), Some(Tile::Obstacle));
    }
}
