//! Discrete events emitted by the simulation
//!
//! The simulation never performs I/O. Anything a presentation layer should
//! react to (sounds, log lines, HUD flashes) is surfaced here instead.

use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Head left the grid
    Wall,
    /// Head hit its own body
    SelfCollision,
}

/// Event produced during a single `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Food at `cell` was eaten; `score` is the new total
    FoodEaten { cell: Cell, score: u32 },
    /// Run ended
    GameOver { cause: CollisionKind, score: u32 },
    /// State reinitialized after a game over
    Restarted,
    Paused,
    Resumed,
}
