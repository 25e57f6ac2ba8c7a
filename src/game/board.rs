use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;

/// A 1-based linear cell identifier: `row * N + col + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(usize);

impl CellId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (row, col) pair with the origin at the top-left corner.
///
/// Signed so that a step off the edge of the board is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move coordinate by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// What happens when the snake leaves the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Leaving the grid ends the game
    #[default]
    Walls,
    /// Leaving one edge re-enters from the opposite edge
    Wrap,
}

/// Immutable N×N grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: usize,
    boundary: BoundaryMode,
}

impl Board {
    pub fn new(size: usize, boundary: BoundaryMode) -> Self {
        debug_assert!(size > 0, "board must have at least one cell");
        Self { size, boundary }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Linear id of an in-bounds coordinate
    pub fn cell_of(&self, coord: Coord) -> CellId {
        debug_assert!(!self.is_out_of_bounds(coord), "{coord:?} is off the board");
        CellId(coord.row as usize * self.size + coord.col as usize + 1)
    }

    /// Coordinate of a valid cell id
    pub fn coord_of(&self, cell: CellId) -> Coord {
        debug_assert!(self.contains(cell), "cell {cell} is off the board");
        let index = cell.0 - 1;
        Coord::new((index / self.size) as i32, (index % self.size) as i32)
    }

    pub fn contains(&self, cell: CellId) -> bool {
        (1..=self.cell_count()).contains(&cell.0)
    }

    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        let n = self.size as i32;
        coord.row < 0 || coord.row >= n || coord.col < 0 || coord.col >= n
    }

    /// Fold a coordinate back onto the grid (torus arithmetic)
    pub fn wrap(&self, coord: Coord) -> Coord {
        let n = self.size as i32;
        Coord::new(coord.row.rem_euclid(n), coord.col.rem_euclid(n))
    }

    /// The coordinate one step away in `direction`.
    ///
    /// With [`BoundaryMode::Walls`] the result may be out of bounds; callers
    /// check with [`Board::is_out_of_bounds`] before converting it to a cell.
    pub fn step(&self, coord: Coord, direction: Direction) -> Coord {
        let (d_row, d_col) = direction.delta();
        let next = coord.moved_by(d_row, d_col);
        match self.boundary {
            BoundaryMode::Walls => next,
            BoundaryMode::Wrap => self.wrap(next),
        }
    }

    /// Direction that leads from `from` to the adjacent coordinate `to`
    pub fn direction_between(&self, from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(from, direction) == to)
    }

    /// All cell ids in ascending order
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (1..=self.cell_count()).map(CellId)
    }
}
