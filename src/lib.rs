//! Grid Snake - a single-player snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module): board, snake body, food and the tick engine
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Per-session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
