//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.96, 0.96, 0.96, 1.0];
    pub const GRID_LINE: [f32; 4] = [0.78, 0.78, 0.78, 1.0];
    pub const SNAKE_HEAD: [f32; 4] = [0.0, 0.46, 0.17, 1.0]; // Dark green
    pub const SNAKE_BODY: [f32; 4] = [0.0, 0.89, 0.19, 1.0];
    pub const FOOD: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
    pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PAUSED_TEXT: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
    pub const GAME_OVER_TEXT: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
    pub const FINAL_SCORE_TEXT: [f32; 4] = [0.31, 0.31, 0.31, 1.0];
    pub const PROMPT_TEXT: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
}
