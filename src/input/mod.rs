//! Key mapping from terminal events to game and menu actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, MenuChoice};

/// Map keyboard input to in-game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::MoveDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::Fire),
        KeyCode::Esc => Some(GameAction::SaveQuit),

        _ => None,
    }
}

/// Map keyboard input to a main-menu choice.
pub fn handle_menu_key(key: KeyEvent) -> Option<MenuChoice> {
    match key.code {
        KeyCode::Char('1') => Some(MenuChoice::NewGame),
        KeyCode::Char('2') => Some(MenuChoice::LoadGame),
        KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(MenuChoice::Exit)
        }
        _ => None,
    }
}

/// Map keyboard input to a yes/no answer at the restart prompt.
pub fn handle_confirm_key(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}

/// Check if key should force-quit regardless of mode.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
