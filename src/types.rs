// Snake game types
// Board snapshots arrive as JSON from the game transport; moves leave as tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseDirectionError;

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents the four possible movement directions for the snake
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts direction to the token the game server expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Calculates the next cell when moving in this direction
    pub fn apply(&self, cell: &Cell) -> Cell {
        match self {
            Direction::Up => Cell { x: cell.x, y: cell.y.saturating_add(1) },
            Direction::Down => Cell { x: cell.x, y: cell.y.saturating_sub(1) },
            Direction::Left => Cell { x: cell.x.saturating_sub(1), y: cell.y },
            Direction::Right => Cell { x: cell.x.saturating_add(1), y: cell.y },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Read-only view of the board for a single tick.
///
/// `head` is `None` while the snake is not on the board (before spawn or
/// after death). `body` is ordered head-first. `hazards` are the stones.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub size: i32,
    pub head: Option<Cell>,
    #[serde(default)]
    pub body: Vec<Cell>,
    #[serde(default)]
    pub food: Vec<Cell>,
    #[serde(default)]
    pub hazards: Vec<Cell>,
    #[serde(default)]
    pub barriers: Vec<Cell>,
}

impl BoardSnapshot {
    /// Current body length, head included
    pub fn snake_length(&self) -> usize {
        self.body.len()
    }

    /// The food cell the bot chases (the game keeps exactly one on the board)
    pub fn target_food(&self) -> Option<Cell> {
        self.food.first().copied()
    }

    /// The stone the bot may detour through
    pub fn target_hazard(&self) -> Option<Cell> {
        self.hazards.first().copied()
    }
}

/// Request body sent on every game endpoint
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MoveRequest {
    pub turn: i32,
    pub board: BoardSnapshot,
}
