use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::board::{Board, BoundaryMode, CellId, Coord};
use super::direction::Direction;

/// Largest side length the terminal view can lay out
pub const MAX_BOARD_SIZE: usize = 256;

/// Reasons a configuration is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board_size must be at least 2, got {0}")]
    BoardTooSmall(usize),
    #[error("board_size must be at most {max}, got {0}", max = MAX_BOARD_SIZE)]
    BoardTooLarge(usize),
    #[error("{field} {cell} is outside the board (1..={max})")]
    CellOutOfRange {
        field: &'static str,
        cell: CellId,
        max: usize,
    },
    #[error("start_cell and first_food_cell are both {0}")]
    FoodOnStart(CellId),
    #[error("reverse_food_chance must be in [0, 1], got {0}")]
    InvalidChance(f64),
    #[error("min_interval_ms must be positive")]
    ZeroInterval,
    #[error("initial_interval_ms ({initial}) is below min_interval_ms ({floor})")]
    IntervalBelowFloor { initial: u64, floor: u64 },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub board_size: usize,
    /// Edge behaviour
    pub boundary: BoundaryMode,

    // Speed ramp
    /// Tick period at the start of a game
    pub initial_interval_ms: u64,
    /// Tick period reduction per food eaten
    pub speed_step_ms: u64,
    /// Fastest allowed tick period
    pub min_interval_ms: u64,

    /// Points per food eaten
    pub score_step: u32,
    /// Probability that the next food reverses the snake
    pub reverse_food_chance: f64,

    /// Starting head cell; the board centre when unset
    pub start_cell: Option<CellId>,
    pub start_direction: Direction,
    /// First food cell; `3N - N/3` when unset
    pub first_food_cell: Option<CellId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 12,
            boundary: BoundaryMode::Walls,
            initial_interval_ms: 250,
            speed_step_ms: 10,
            min_interval_ms: 100,
            score_step: 1,
            reverse_food_chance: 0.3,
            start_cell: None,
            start_direction: Direction::Down,
            first_food_cell: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Read a JSON configuration file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_size, self.boundary)
    }

    pub fn start_cell(&self) -> CellId {
        self.start_cell.unwrap_or_else(|| {
            let centre = (self.board_size / 2) as i32;
            self.board().cell_of(Coord::new(centre, centre))
        })
    }

    pub fn first_food_cell(&self) -> CellId {
        self.first_food_cell
            .unwrap_or_else(|| CellId::new(self.board_size * 3 - self.board_size / 3))
    }

    /// Check that all parameters are in valid ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }

        let board = self.board();
        let max = board.cell_count();
        for (field, cell) in [
            ("start_cell", self.start_cell),
            ("first_food_cell", self.first_food_cell),
        ] {
            if let Some(cell) = cell.filter(|&cell| !board.contains(cell)) {
                return Err(ConfigError::CellOutOfRange { field, cell, max });
            }
        }
        // The derived first food cell can exceed tiny boards
        let food = self.first_food_cell();
        if !board.contains(food) {
            return Err(ConfigError::CellOutOfRange {
                field: "first_food_cell",
                cell: food,
                max,
            });
        }
        if self.start_cell() == food {
            return Err(ConfigError::FoodOnStart(food));
        }

        if !(0.0..=1.0).contains(&self.reverse_food_chance) {
            return Err(ConfigError::InvalidChance(self.reverse_food_chance));
        }

        if self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.initial_interval_ms < self.min_interval_ms {
            return Err(ConfigError::IntervalBelowFloor {
                initial: self.initial_interval_ms,
                floor: self.min_interval_ms,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 12);
        assert_eq!(config.initial_interval_ms, 250);
        assert_eq!(config.start_cell(), CellId::new(79));
        assert_eq!(config.first_food_cell(), CellId::new(32));
        assert_eq!(config.start_direction, Direction::Down);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_size_derives_cells() {
        let config = GameConfig::new(20);
        assert_eq!(config.start_cell(), CellId::new(10 * 20 + 10 + 1));
        assert_eq!(config.first_food_cell(), CellId::new(54));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            GameConfig::new(1).validate(),
            Err(ConfigError::BoardTooSmall(1))
        );
        assert_eq!(
            GameConfig::new(MAX_BOARD_SIZE + 1).validate(),
            Err(ConfigError::BoardTooLarge(MAX_BOARD_SIZE + 1))
        );
        assert!(GameConfig::new(MAX_BOARD_SIZE).validate().is_ok());

        let config = GameConfig {
            start_cell: Some(CellId::new(145)),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CellOutOfRange { field: "start_cell", .. })
        ));

        let config = GameConfig {
            start_cell: Some(CellId::new(32)),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FoodOnStart(CellId::new(32))));

        let config = GameConfig {
            reverse_food_chance: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidChance(1.5)));

        let config = GameConfig {
            initial_interval_ms: 50,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::IntervalBelowFloor { initial: 50, floor: 100 })
        ));
    }

    #[test]
    fn test_tiny_board_needs_explicit_food() {
        // 3N - N/3 = 6 does not fit a 2x2 board
        let config = GameConfig::new(2);
        assert!(config.validate().is_err());

        let config = GameConfig {
            first_food_cell: Some(CellId::new(1)),
            ..GameConfig::new(2)
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_json_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "board_size": 16, "boundary": "wrap", "start_direction": "left" }}"#
        )
        .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.board_size, 16);
        assert_eq!(config.boundary, BoundaryMode::Wrap);
        assert_eq!(config.start_direction, Direction::Left);
        assert_eq!(config.min_interval_ms, 100);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "reverse_food_chance": -0.1 }}"#).unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GameConfig::load(&dir.path().join("missing.json")).is_err());
    }
}
