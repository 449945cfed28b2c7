//! Grid bounds
//!
//! The grid has no storage of its own; it only answers bounds questions and
//! enumerates cells.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_HEIGHT, GRID_WIDTH, INITIAL_SNAKE_LENGTH};

/// A grid cell, x growing right and y growing down
pub type Cell = IVec2;

/// Logical play field dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        }
    }
}

impl Grid {
    /// Create a grid, clamped so a snake spawned at the centre always fits
    pub fn new(width: i32, height: i32) -> Self {
        let min_width = (2 * (INITIAL_SNAKE_LENGTH as i32 - 1)).max(1);
        Self {
            width: width.max(min_width),
            height: height.max(1),
        }
    }

    /// Check if a cell is within `[0, width) x [0, height)`
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Number of cells on the grid
    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Centre cell (rounded down)
    pub fn center(&self) -> Cell {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| IVec2::new(x, y)))
    }
}
