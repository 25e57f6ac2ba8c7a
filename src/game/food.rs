//! Food placement

use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::HashSet;

use super::board::{Board, CellId};

/// Rejection-sampling draws per board cell before enumerating free cells
const SAMPLES_PER_CELL: usize = 4;

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: CellId,
    /// Eating this food reverses the snake
    pub reverses: bool,
}

impl Food {
    pub fn new(cell: CellId, reverses: bool) -> Self {
        Self { cell, reverses }
    }
}

/// Number of cells that are neither occupied nor `excluded`
pub fn free_cell_count(board: &Board, occupied: &HashSet<CellId>, excluded: Option<CellId>) -> usize {
    let excluded_free = excluded.is_some_and(|cell| board.contains(cell) && !occupied.contains(&cell));
    board.cell_count() - occupied.len() - usize::from(excluded_free)
}

/// Pick a uniformly random cell that is neither occupied nor `excluded`.
///
/// Returns `None` when no such cell exists. Draws are rejection sampled a
/// bounded number of times; past that the free cells are enumerated.
pub fn spawn_food<R: Rng>(
    rng: &mut R,
    board: &Board,
    occupied: &HashSet<CellId>,
    excluded: Option<CellId>,
) -> Option<CellId> {
    if free_cell_count(board, occupied, excluded) == 0 {
        return None;
    }

    let is_free = |cell: &CellId| Some(*cell) != excluded && !occupied.contains(cell);

    for _ in 0..board.cell_count() * SAMPLES_PER_CELL {
        let cell = CellId::new(rng.gen_range(1..=board.cell_count()));
        if is_free(&cell) {
            return Some(cell);
        }
    }

    tracing::warn!(
        occupied = occupied.len(),
        "food sampling exhausted its draws, choosing from free cells"
    );
    board.cells().filter(is_free).choose(rng)
}
