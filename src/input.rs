/// Keyboard input mapping.
///
/// The game only understands the four arrow keys, identified by their DOM
/// key codes.  Terminal key events are translated to those codes first so
/// every front-end goes through the same table.

use std::fmt;
use std::str::FromStr;

use crossterm::event::KeyCode;
use thiserror::Error;

use crate::entities::Direction;

pub const KEY_LEFT: u16 = 37;
pub const KEY_UP: u16 = 38;
pub const KEY_RIGHT: u16 = 39;
pub const KEY_DOWN: u16 = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction `{0}`, expected left, right, up or down")]
pub struct ParseDirectionError(pub String);

/// Any code outside 37–40 means "no movement".
pub fn direction_for_key_code(code: u16) -> Option<Direction> {
    match code {
        KEY_LEFT => Some(Direction::Left),
        KEY_UP => Some(Direction::Up),
        KEY_RIGHT => Some(Direction::Right),
        KEY_DOWN => Some(Direction::Down),
        _ => None,
    }
}

/// DOM key code for a terminal key, if it is one the game listens to.
pub fn key_code_for(key: &KeyCode) -> Option<u16> {
    match key {
        KeyCode::Left => Some(KEY_LEFT),
        KeyCode::Up => Some(KEY_UP),
        KeyCode::Right => Some(KEY_RIGHT),
        KeyCode::Down => Some(KEY_DOWN),
        _ => None,
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}
