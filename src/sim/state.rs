//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. A host owns one
//! instance and passes it by `&mut` into [`tick`](super::tick::tick).

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use super::grid::{Cell, Grid};
use crate::consts::INITIAL_SNAKE_LENGTH;
use crate::snapshot::Snapshot;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// One-cell offset for moving in this direction (y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Right => IVec2::new(1, 0),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
        }
    }
}

/// The snake body, head first and tail last
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake whose body trails behind `head`, opposite to `direction`
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let back = -direction.delta();
        let body = (0..length.max(1) as i32).map(|i| head + back * i).collect();
        Self { body }
    }

    /// Build a snake from explicit cells, head first
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        debug_assert!(!body.is_empty(), "snake needs at least one segment");
        Self { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Should never happen in practice
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments, head first
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Check if any segment occupies `cell`
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Check if `cell` hits the body, ignoring the head and the current tail.
    ///
    /// The tail vacates its cell on the same step the head moves, so chasing
    /// it is legal.
    pub fn hits_body(&self, cell: Cell) -> bool {
        let len = self.body.len();
        self.body
            .iter()
            .skip(1)
            .take(len.saturating_sub(2))
            .any(|&segment| segment == cell)
    }

    /// Put a new head in front; drop the tail unless growing
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

/// The single food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub cell: Cell,
    pub active: bool,
}

impl Food {
    pub fn inactive() -> Self {
        Self {
            cell: IVec2::ZERO,
            active: false,
        }
    }
}

/// Top-level phase. Pausing is a flag on top of `Playing`, not a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub grid: Grid,
    pub snake: Snake,
    /// Direction applied on the current movement step
    pub direction: Direction,
    /// Direction buffered from the latest valid input
    pub pending_direction: Direction,
    pub food: Food,
    pub score: u32,
    pub phase: GamePhase,
    pub paused: bool,
    /// Seconds accumulated since the last movement step
    pub move_timer: f32,
    /// Movement steps taken this run
    pub steps: u64,
    /// Events from the most recent tick
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game on the default 40x30 grid
    pub fn new(seed: u64) -> Self {
        Self::with_grid(Grid::default(), seed)
    }

    /// Create a new game on a specific grid. Dimensions are re-clamped, so a
    /// grid built as a struct literal is as safe as one from [`Grid::new`].
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        let grid = Grid::new(grid.width, grid.height);
        let mut state = Self {
            seed,
            grid,
            snake: Snake::new(grid.center(), Direction::Right, INITIAL_SNAKE_LENGTH),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: Food::inactive(),
            score: 0,
            phase: GamePhase::Playing,
            paused: false,
            move_timer: 0.0,
            steps: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Reinitialize every entity as at construction. The RNG keeps its
    /// position so consecutive runs get different food.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid.center(), Direction::Right, INITIAL_SNAKE_LENGTH);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.paused = false;
        self.move_timer = 0.0;
        self.steps = 0;
        super::tick::spawn_food(self);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Events emitted by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Read-only copy for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(self)
    }
}
