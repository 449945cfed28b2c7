//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt` passed to `tick`
//! - Seeded RNG only
//! - No rendering, audio or terminal dependencies

pub mod event;
pub mod grid;
pub mod state;
pub mod tick;

pub use event::{CollisionKind, GameEvent};
pub use grid::{Cell, Grid};
pub use state::{Direction, Food, GamePhase, GameState, Snake};
pub use tick::{Input, StepOutcome, TickInput, spawn_food, step, tick};
