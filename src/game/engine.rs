use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{
    board::{Board, Coord},
    config::GameConfig,
    direction::Direction,
    food::{self, Food},
    snake::Segment,
    state::{EndReason, GameState, Status},
};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the food eaten this step reversed the snake
    pub reversed: bool,
    /// Why the game ended, if it ended on this step
    pub end_reason: Option<EndReason>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game is over
    pub terminated: bool,
    /// Tick period the timer should use from now on
    pub tick_interval_ms: u64,
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create an engine with an entropy-seeded RNG
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game from the configuration
    pub fn reset(&mut self) -> GameState {
        let start = self.config.start_cell();
        let food = Food::new(self.config.first_food_cell(), false);
        info!(
            board_size = self.config.board_size,
            start = %start,
            food = %food.cell,
            "new game"
        );
        GameState::new(
            self.config.board(),
            start,
            self.config.start_direction,
            food,
            self.config.initial_interval_ms,
        )
    }

    /// Advance the game by one tick
    ///
    /// Reversing food is eaten without the head entering its cell: the body
    /// flips and the new head moves one cell past the old tail, so the eaten
    /// cell is left empty.
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if state.is_over() {
            return StepResult {
                terminated: true,
                tick_interval_ms: state.tick_interval_ms,
                info: StepInfo::default(),
            };
        }

        state.ticks += 1;
        let board = state.board;
        let mut info = StepInfo::default();

        let mut next = board.step(state.snake.head().coord, state.direction);
        if let Some(reason) = check_collision(state, next) {
            return self.finish(state, reason, info);
        }

        let eaten = state.food.filter(|food| food.cell == board.cell_of(next));
        if let Some(food) = eaten {
            info.ate_food = true;
            self.reward(state);

            if food.reverses {
                next = reverse_snake(state);
                info.reversed = true;
                debug!(direction = ?state.direction, "snake reversed");
                if let Some(reason) = check_collision(state, next) {
                    return self.finish(state, reason, info);
                }
            }

            grow(state);
        }

        advance(state, next, eaten.is_some());

        if let Some(food) = eaten {
            match self.spawn_next_food(state, food) {
                Some(next_food) => state.food = Some(next_food),
                None => {
                    state.food = None;
                    return self.finish(state, EndReason::BoardFull, info);
                }
            }
        }

        StepResult {
            terminated: false,
            tick_interval_ms: state.tick_interval_ms,
            info,
        }
    }

    fn reward(&self, state: &mut GameState) {
        state.score += self.config.score_step;
        state.tick_interval_ms = state
            .tick_interval_ms
            .saturating_sub(self.config.speed_step_ms)
            .max(self.config.min_interval_ms);
        debug!(
            score = state.score,
            interval_ms = state.tick_interval_ms,
            "food eaten"
        );
    }

    /// Place the next food, preferring any cell other than the one just eaten
    fn spawn_next_food(&mut self, state: &GameState, eaten: Food) -> Option<Food> {
        let cell = food::spawn_food(&mut self.rng, &state.board, &state.occupied, Some(eaten.cell))
            .or_else(|| food::spawn_food(&mut self.rng, &state.board, &state.occupied, None))?;
        let chance = self.config.reverse_food_chance;
        let reverses = chance > 0.0 && self.rng.gen_bool(chance.min(1.0));
        debug!(cell = %cell, reverses, "food spawned");
        Some(Food::new(cell, reverses))
    }

    fn finish(&self, state: &mut GameState, reason: EndReason, info: StepInfo) -> StepResult {
        state.status = Status::GameOver(reason);
        info!(reason = %reason, score = state.score, ticks = state.ticks, "game over");
        StepResult {
            terminated: true,
            tick_interval_ms: state.tick_interval_ms,
            info: StepInfo {
                end_reason: Some(reason),
                ..info
            },
        }
    }
}

/// Check if moving the head to `next` ends the game
fn check_collision(state: &GameState, next: Coord) -> Option<EndReason> {
    if state.board.is_out_of_bounds(next) {
        return Some(EndReason::HitWall);
    }
    if state.occupied.contains(&state.board.cell_of(next)) {
        return Some(EndReason::AteTail);
    }
    None
}

/// Opposite of the direction leading from `from` to `toward`, or of
/// `fallback` when there is no neighbour to look at
fn heading_away(board: &Board, from: Segment, toward: Option<Segment>, fallback: Direction) -> Direction {
    toward
        .and_then(|toward| board.direction_between(from.coord, toward.coord))
        .unwrap_or(fallback)
        .opposite()
}

/// Reverse the body and heading; returns the new next head coordinate
fn reverse_snake(state: &mut GameState) -> Coord {
    state.snake.reverse();
    let head = state.snake.head();
    state.direction = heading_away(&state.board, head, state.snake.neck(), state.direction);
    state.board.step(head.coord, state.direction)
}

/// Append one segment beyond the tail, pointing away from the body.
///
/// The segment is trimmed again by the same tick's `advance`, leaving the old
/// tail in place, so its cell never enters the occupancy set.
fn grow(state: &mut GameState) {
    let board = state.board;
    let tail = state.snake.tail();
    let away = heading_away(&board, tail, state.snake.tail_predecessor(), state.direction);
    let coord = board.wrap(board.step(tail.coord, away));
    state.snake.push_tail(Segment::new(coord, board.cell_of(coord)));
}

/// Move the head into `next` and drop the tail
fn advance(state: &mut GameState, next: Coord, grew: bool) {
    let cell = state.board.cell_of(next);
    state.snake.push_head(Segment::new(next, cell));
    state.occupied.insert(cell);

    if let Some(tail) = state.snake.pop_tail() {
        if !grew {
            state.occupied.remove(&tail.cell);
        }
    }
}
