use std::collections::HashSet;
use std::fmt;

use super::board::{Board, CellId};
use super::direction::Direction;
use super::food::Food;
use super::snake::{Segment, Snake};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The head left the grid
    HitWall,
    /// The head ran into the body
    AteTail,
    /// No free cell is left for food
    BoardFull,
}

impl EndReason {
    pub fn message(self) -> &'static str {
        match self {
            EndReason::HitWall => "hit the wall",
            EndReason::AteTail => "ate its tail",
            EndReason::BoardFull => "filled the board",
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Lifecycle of one game; `GameOver` is absorbing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver(EndReason),
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub snake: Snake,
    /// Cells covered by `snake`, kept in lockstep with it
    pub occupied: HashSet<CellId>,
    /// Current heading; input writes it, each tick reads it once
    pub direction: Direction,
    /// `None` only once the board is full
    pub food: Option<Food>,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub status: Status,
    pub ticks: u64,
}

impl GameState {
    /// Create a running game with a one-segment snake
    pub fn new(
        board: Board,
        start: CellId,
        direction: Direction,
        food: Food,
        tick_interval_ms: u64,
    ) -> Self {
        let snake = Snake::new(Segment::new(board.coord_of(start), start));
        Self::with_snake(board, snake, direction, food, tick_interval_ms)
    }

    /// Create a running game around an existing body
    pub fn with_snake(
        board: Board,
        snake: Snake,
        direction: Direction,
        food: Food,
        tick_interval_ms: u64,
    ) -> Self {
        let occupied = snake.cells().collect();
        Self {
            board,
            snake,
            occupied,
            direction,
            food: Some(food),
            score: 0,
            tick_interval_ms,
            status: Status::Running,
            ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn is_over(&self) -> bool {
        !self.is_running()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.status {
            Status::Running => None,
            Status::GameOver(reason) => Some(reason),
        }
    }

    /// Apply a steering request.
    ///
    /// Returns false and leaves the heading untouched when `direction` would
    /// turn the snake back into its own body, or when the game is over.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.is_over() || direction.is_reversal(self.direction, self.snake.len()) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Read-only view for rendering
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            board: self.board,
            occupied: &self.occupied,
            head: self.snake.head().cell,
            food: self.food,
            score: self.score,
            tick_interval_ms: self.tick_interval_ms,
            status: self.status,
        }
    }
}

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub board: Board,
    pub occupied: &'a HashSet<CellId>,
    pub head: CellId,
    pub food: Option<Food>,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub status: Status,
}

impl BoardView<'_> {
    pub fn game_over_message(&self) -> Option<&'static str> {
        match self.status {
            Status::Running => None,
            Status::GameOver(reason) => Some(reason.message()),
        }
    }
}
