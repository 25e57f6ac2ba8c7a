//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it through [`GameEngine::step`] and [`GameState::steer`].

pub mod board;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use board::{Board, BoundaryMode, CellId, Coord};
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::Food;
pub use snake::{Segment, Snake};
pub use state::{BoardView, EndReason, GameState, Status};
