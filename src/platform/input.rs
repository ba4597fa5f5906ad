//! Keyboard and pointer polling

use glam::Vec2;
use macroquad::input::{KeyCode, is_key_down, is_quit_requested, mouse_position};

use crate::sim::{MoveInput, TickInput};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::Left, KeyCode::A];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::Right, KeyCode::D];
const JUMP_KEY: KeyCode = KeyCode::Space;

/// Build a movement snapshot from a key-state query
///
/// Split out from [`poll_input`] so bindings can be checked without a window.
pub fn movement_from_keys(is_down: impl Fn(KeyCode) -> bool) -> MoveInput {
    MoveInput {
        left: LEFT_KEYS.iter().any(|&k| is_down(k)),
        right: RIGHT_KEYS.iter().any(|&k| is_down(k)),
        jump: is_down(JUMP_KEY),
    }
}

/// Snapshot the current input state
///
/// The window must have been set up with `prevent_quit()` for the close
/// signal to reach us instead of exiting the process.
pub fn poll_input() -> TickInput {
    let (x, y) = mouse_position();
    TickInput {
        movement: movement_from_keys(is_key_down),
        pointer: Vec2::new(x, y),
        quit: is_quit_requested(),
    }
}
