//! Read-only view of the simulation for presentation
//!
//! A snapshot is an owned copy, so a presenter can hold it while the next
//! frame's `tick` mutates the live state.

use serde::{Deserialize, Serialize};

use crate::sim::{Cell, GamePhase, GameState, Grid};

/// Food as seen by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodView {
    pub cell: Cell,
    pub active: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    /// Snake cells, head first
    pub segments: Vec<Cell>,
    pub food: FoodView,
    pub score: u32,
    pub phase: GamePhase,
    pub paused: bool,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            grid: state.grid,
            segments: state.snake.segments().collect(),
            food: FoodView {
                cell: state.food.cell,
                active: state.food.active,
            },
            score: state.score,
            phase: state.phase,
            paused: state.paused,
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.segments.first().copied()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// JSON dump for debugging a frame
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
