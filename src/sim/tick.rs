//! Frame update and movement step
//!
//! `tick` is called once per rendered frame with the frame's elapsed time.
//! Movement is decoupled from frame rate by the movement clock: at most one
//! step runs per tick, once `MOVE_INTERVAL` seconds have accumulated.

use glam::IVec2;
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use super::event::{CollisionKind, GameEvent};
use super::state::{Direction, GamePhase, GameState};
use crate::consts::{FOOD_REWARD, FOOD_SPAWN_ATTEMPTS, MOVE_INTERVAL};

/// Logical inputs a host maps its keys onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    MoveRight,
    MoveLeft,
    MoveUp,
    MoveDown,
    TogglePause,
    /// Start over after a game over
    Restart,
    /// Handled by the host; the simulation ignores it
    RequestQuit,
}

impl Input {
    /// Direction requested by a movement input
    pub fn direction(self) -> Option<Direction> {
        match self {
            Input::MoveRight => Some(Direction::Right),
            Input::MoveLeft => Some(Direction::Left),
            Input::MoveUp => Some(Direction::Up),
            Input::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Inputs pressed during one frame, in the order they arrived
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub inputs: Vec<Input>,
}

impl TickInput {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    pub fn push(&mut self, input: Input) {
        self.inputs.push(input);
    }

    pub fn contains(&self, input: Input) -> bool {
        self.inputs.contains(&input)
    }

    pub fn quit_requested(&self) -> bool {
        self.contains(Input::RequestQuit)
    }

    /// Clear one-shot inputs after they were processed
    pub fn clear(&mut self) {
        self.inputs.clear();
    }
}

impl From<Input> for TickInput {
    fn from(input: Input) -> Self {
        Self {
            inputs: vec![input],
        }
    }
}

/// Result of a single movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Snake advanced one cell
    Moved { ate_food: bool },
    /// Snake crashed; the game is over
    Collided(CollisionKind),
    /// Game was already over; nothing changed
    Halted,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    if state.phase == GamePhase::GameOver {
        if input.contains(Input::Restart) {
            state.reset();
            state.events.push(GameEvent::Restarted);
            log::info!("Restarted");
        }
        return;
    }

    // Pause toggles are honoured whether or not we are paused
    for _ in input.inputs.iter().filter(|&&i| i == Input::TogglePause) {
        state.paused = !state.paused;
        state.events.push(if state.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
    }

    if state.paused {
        return;
    }

    // Buffer the last valid turn; 180-degree turns are dropped
    for dir in input.inputs.iter().filter_map(|i| i.direction()) {
        if !state.direction.is_opposite(dir) {
            state.pending_direction = dir;
        }
    }

    state.move_timer += dt;
    if state.move_timer >= MOVE_INTERVAL {
        // Excess time is dropped, not carried into the next interval
        state.move_timer = 0.0;
        step(state);
    }
}

/// Run one movement step immediately, ignoring the movement clock
pub fn step(state: &mut GameState) -> StepOutcome {
    if state.phase == GamePhase::GameOver {
        return StepOutcome::Halted;
    }

    state.direction = state.pending_direction;
    let new_head = state.snake.head() + state.direction.delta();

    if !state.grid.contains(new_head) {
        return game_over(state, CollisionKind::Wall);
    }
    if state.snake.hits_body(new_head) {
        return game_over(state, CollisionKind::SelfCollision);
    }

    let ate_food = state.food.active && new_head == state.food.cell;
    state.snake.advance(new_head, ate_food);
    state.steps += 1;

    if ate_food {
        state.food.active = false;
        state.score = state.score.saturating_add(FOOD_REWARD);
        spawn_food(state);
        state.events.push(GameEvent::FoodEaten {
            cell: new_head,
            score: state.score,
        });
    }

    StepOutcome::Moved { ate_food }
}

fn game_over(state: &mut GameState, cause: CollisionKind) -> StepOutcome {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver {
        cause,
        score: state.score,
    });
    log::info!(
        "Game over ({:?}) after {} steps, score {}",
        cause,
        state.steps,
        state.score
    );
    StepOutcome::Collided(cause)
}

/// Place the food on a uniformly random cell not covered by the snake.
///
/// Leaves the food inactive if the snake fills the whole grid.
pub fn spawn_food(state: &mut GameState) {
    state.food.active = false;

    let grid = state.grid;
    if state.snake.len() >= grid.area() {
        log::warn!("No free cell left for food");
        return;
    }

    for _ in 0..FOOD_SPAWN_ATTEMPTS {
        let cell = IVec2::new(
            state.rng.random_range(0..grid.width),
            state.rng.random_range(0..grid.height),
        );
        if !state.snake.contains(cell) {
            state.food.cell = cell;
            state.food.active = true;
            log::debug!("Food spawned at ({}, {})", cell.x, cell.y);
            return;
        }
    }

    // Crowded grid: pick among the free cells directly
    let snake = &state.snake;
    let free = grid.cells().filter(|&c| !snake.contains(c)).choose(&mut state.rng);
    match free {
        Some(cell) => {
            state.food.cell = cell;
            state.food.active = true;
            log::debug!("Food spawned at ({}, {}) after scan", cell.x, cell.y);
        }
        None => log::warn!("No free cell left for food"),
    }
}
