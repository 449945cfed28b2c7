//! Snack - a single-screen grid Snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement clock, direction buffering, collisions, food)
//! - `snapshot`: Read-only view of the simulation for presentation
//! - `renderer`: Backend-neutral draw lists and pixel-space tessellation
//! - `audio`: Sound cues driven by simulation events
//! - `settings`: Player preferences persisted as JSON

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use settings::Settings;
pub use snapshot::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Window size the grid is derived from (pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;
    /// Size of one grid cell (pixels)
    pub const CELL_SIZE: i32 = 20;

    /// Logical grid dimensions (cells)
    pub const GRID_WIDTH: i32 = SCREEN_WIDTH / CELL_SIZE;
    pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / CELL_SIZE;

    /// Seconds between movement steps (~6.67 steps/second)
    pub const MOVE_INTERVAL: f32 = 0.15;
    /// Segments the snake starts with
    pub const INITIAL_SNAKE_LENGTH: usize = 3;
    /// Score awarded per food eaten
    pub const FOOD_REWARD: u32 = 10;

    /// Random samples tried before falling back to scanning free cells
    pub const FOOD_SPAWN_ATTEMPTS: u32 = 256;

    /// Default host frame rate
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta the host forwards to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
}
