//! Turn-based terminal grid shooter.
//!
//! The player wanders a bounded grid, dodges randomly moving enemies, and
//! shoots upward to clear them; the session persists to a JSON save file.
//! `core` holds the rules and is terminal-free; `input` and `term` adapt
//! crossterm on either side of it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
