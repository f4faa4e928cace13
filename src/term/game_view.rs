//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, Tile, BULLET_GLYPH, ENEMY_GLYPH, MAP_HEIGHT, MAP_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the grid game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into a framebuffer.
    ///
    /// Enemies and the optional in-flight bullet are overlaid on the
    /// static map at their live coordinates.
    pub fn render(
        &self,
        state: &GameState,
        bullet: Option<Position>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (origin_x, origin_y) = map_origin(viewport);

        // Static layer: border, obstacles, player.
        for y in 0..MAP_HEIGHT as i8 {
            for x in 0..MAP_WIDTH as i8 {
                let tile = state.map.get(x, y).unwrap_or(Tile::Empty);
                fb.put_char(
                    origin_x + x as u16,
                    origin_y + y as u16,
                    tile.glyph(),
                    tile_style(tile),
                );
            }
        }

        // Live enemies.
        for enemy in &state.enemies {
            fb.put_char(
                origin_x + enemy.x as u16,
                origin_y + enemy.y as u16,
                ENEMY_GLYPH,
                enemy_style(),
            );
        }

        // In-flight bullet, if a shot is being animated.
        if let Some(b) = bullet {
            fb.put_char(
                origin_x + b.x as u16,
                origin_y + b.y as u16,
                BULLET_GLYPH,
                bullet_style(),
            );
        }

        // Status line under the map.
        let status = format!("Enemies left: {}", state.enemies.len());
        fb.put_str(
            origin_x,
            origin_y + MAP_HEIGHT as u16 + 1,
            &status,
            CellStyle::default(),
        );
        fb.put_str(
            origin_x,
            origin_y + MAP_HEIGHT as u16 + 2,
            "WASD/arrows move  Space fire  Esc save+quit",
            dim_style(),
        );

        fb
    }

    /// Render the main menu, including the control legend. `notice` is an
    /// optional highlighted line (e.g. a failed-load report).
    pub fn render_menu(&self, notice: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let lines = [
            "Controls:",
            "  W/A/S/D or arrows - move",
            "  Space             - fire (upward)",
            "  Esc               - save and quit",
            "====================",
            "===  Main menu   ===",
            "1. New game",
            "2. Load game",
            "3. Exit",
            "Choose an option:",
        ];

        let (origin_x, origin_y) = map_origin(viewport);
        for (i, line) in lines.iter().enumerate() {
            fb.put_str(origin_x, origin_y + i as u16, line, CellStyle::default());
        }

        if let Some(notice) = notice {
            fb.put_str(
                origin_x,
                origin_y + lines.len() as u16 + 1,
                notice,
                notice_style(),
            );
        }

        fb
    }

    /// Render a full-screen message (death, victory prompt, farewell).
    pub fn render_message(&self, lines: &[&str], viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (origin_x, origin_y) = map_origin(viewport);
        for (i, line) in lines.iter().enumerate() {
            fb.put_str(origin_x, origin_y + i as u16, line, CellStyle::default());
        }

        fb
    }
}

/// Top-left corner of the map area, centered when the viewport allows.
fn map_origin(viewport: Viewport) -> (u16, u16) {
    let x = viewport.width.saturating_sub(MAP_WIDTH as u16) / 2;
    let y = viewport.height.saturating_sub(MAP_HEIGHT as u16 + 3) / 2;
    (x, y)
}

fn tile_style(tile: Tile) -> CellStyle {
    match tile {
        Tile::Empty => dim_style(),
        Tile::WallH | Tile::WallV => CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        },
        Tile::Obstacle => CellStyle {
            fg: Rgb::new(180, 140, 60),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        },
        Tile::Player => CellStyle {
            fg: Rgb::new(80, 220, 80),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        },
    }
}

fn enemy_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(230, 70, 70),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    }
}

fn bullet_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(250, 220, 90),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    }
}

fn dim_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(90, 90, 100),
        bg: Rgb::new(0, 0, 0),
        bold: false,
    }
}

fn notice_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(230, 70, 70),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    }
}
