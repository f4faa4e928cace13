//! Terminal grid shooter runner.
//!
//! Drives the menu state machine and the synchronous play loop. It uses
//! crossterm for input and the framebuffer-based renderer in `term`.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_battlegrid::core::{read_save, save_exists, write_save, GameState, SAVE_FILE};
use tui_battlegrid::input::{handle_confirm_key, handle_key_event, handle_menu_key, should_quit};
use tui_battlegrid::term::{GameView, TerminalRenderer, Viewport};
use tui_battlegrid::types::{
    GameAction, MenuChoice, BULLET_STEP_MS, MESSAGE_HOLD_MS, NEW_GAME_ENEMIES, TICK_MS,
};

/// How a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayOutcome {
    /// An enemy caught the player; back to the menu.
    Died,
    /// Board cleared and the player chose to go again.
    ClearedRestart,
    /// Board cleared and the player declined a restart.
    ClearedExit,
    /// Esc: state saved, leave the program.
    SavedQuit,
    /// Ctrl+C style force quit, nothing saved.
    ForceQuit,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView;
    let mut seed = clock_seed();
    let mut notice: Option<String> = None;

    loop {
        let viewport = current_viewport();
        let fb = view.render_menu(notice.as_deref(), viewport);
        term.draw(&fb)?;

        let key = match next_key_press()? {
            Some(key) => key,
            None => continue,
        };
        if should_quit(key) {
            return Ok(());
        }

        match handle_menu_key(key) {
            Some(MenuChoice::NewGame) => {
                // Derive a fresh seed per session from wall-clock jitter.
                seed = seed.wrapping_mul(1_000_003).wrapping_add(clock_seed());
                let mut state = GameState::new(seed);
                state.spawn_enemies(NEW_GAME_ENEMIES);

                notice = None;
                if run_sessions(term, &view, &mut state)? {
                    return Ok(());
                }
            }
            Some(MenuChoice::LoadGame) => {
                if !save_exists(SAVE_FILE) {
                    notice = Some("No saved game found!".to_string());
                    hold(MESSAGE_HOLD_MS);
                    continue;
                }
                match read_save(SAVE_FILE) {
                    Ok(snapshot) => {
                        let mut state = GameState::new(seed);
                        snapshot.restore(&mut state);

                        notice = None;
                        if run_sessions(term, &view, &mut state)? {
                            return Ok(());
                        }
                    }
                    Err(err) => {
                        // A failed load leaves no trace; the menu keeps
                        // its fresh state and just reports the problem.
                        notice = Some(format!("Load failed: {err:#}"));
                        hold(MESSAGE_HOLD_MS);
                    }
                }
            }
            Some(MenuChoice::Exit) => return Ok(()),
            None => {
                notice = Some("Invalid choice, try again.".to_string());
            }
        }
    }
}

/// Play until the player quits or dies. Returns true if the program
/// should exit, false to fall back to the menu.
fn run_sessions(
    term: &mut TerminalRenderer,
    view: &GameView,
    state: &mut GameState,
) -> Result<bool> {
    loop {
        match play(term, view, state)? {
            PlayOutcome::Died => {
                let fb = view.render_message(
                    &["You ran into an enemy!", "Returning to the menu..."],
                    current_viewport(),
                );
                term.draw(&fb)?;
                hold(MESSAGE_HOLD_MS);
                return Ok(false);
            }
            PlayOutcome::ClearedRestart => {
                state.spawn_enemies(NEW_GAME_ENEMIES);
            }
            PlayOutcome::ClearedExit => {
                let fb = view.render_message(&["Thanks for playing!"], current_viewport());
                term.draw(&fb)?;
                hold(MESSAGE_HOLD_MS);
                return Ok(true);
            }
            PlayOutcome::SavedQuit | PlayOutcome::ForceQuit => return Ok(true),
        }
    }
}

/// One play session: input, enemy wandering, win/loss checks.
fn play(term: &mut TerminalRenderer, view: &GameView, state: &mut GameState) -> Result<PlayOutcome> {
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let fb = view.render(state, None, current_viewport());
        term.draw(&fb)?;

        // Input with timeout until next tick; a tick may see no key.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(PlayOutcome::ForceQuit);
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Fire) => animate_shot(term, view, state)?,
                        Some(GameAction::SaveQuit) => {
                            write_save(SAVE_FILE, state)?;
                            return Ok(PlayOutcome::SavedQuit);
                        }
                        Some(action) => {
                            state.apply_action(action);
                        }
                        None => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            state.move_enemies();
        }

        if state.player_caught() {
            return Ok(PlayOutcome::Died);
        }

        if state.enemies_cleared() {
            write_save(SAVE_FILE, state)?;
            return if prompt_restart(term, view)? {
                Ok(PlayOutcome::ClearedRestart)
            } else {
                Ok(PlayOutcome::ClearedExit)
            };
        }
    }
}

/// Fire and animate the bullet cell by cell with a fixed delay.
fn animate_shot(term: &mut TerminalRenderer, view: &GameView, state: &mut GameState) -> Result<()> {
    let shot = state.fire();

    for cell in &shot.trace {
        let fb = view.render(state, Some(*cell), current_viewport());
        term.draw(&fb)?;
        thread::sleep(Duration::from_millis(BULLET_STEP_MS as u64));
    }
    if let Some(hit) = shot.hit {
        // Flash the impact cell; the enemy is already gone from the list.
        let fb = view.render(state, Some(hit), current_viewport());
        term.draw(&fb)?;
        thread::sleep(Duration::from_millis(BULLET_STEP_MS as u64));
    }
    Ok(())
}

/// Ask whether to go another round after clearing the board.
fn prompt_restart(term: &mut TerminalRenderer, view: &GameView) -> Result<bool> {
    let fb = view.render_message(
        &["All enemies are down!", "Play another round? (y/n)"],
        current_viewport(),
    );
    term.draw(&fb)?;

    loop {
        let key = match next_key_press()? {
            Some(key) => key,
            None => continue,
        };
        if should_quit(key) {
            return Ok(false);
        }
        if let Some(answer) = handle_confirm_key(key) {
            return Ok(answer);
        }
    }
}

/// Block until the next key press event.
fn next_key_press() -> Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn hold(ms: u32) {
    thread::sleep(Duration::from_millis(ms as u64));
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
