//! Core game logic.
//!
//! Everything here is independent of rendering and input: an externally
//! owned [`GameState`] is advanced by [`GameEngine`] transition functions,
//! once per fixed-interval tick.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickResult};
pub use grid::{Grid, CELL_SIZE};
pub use state::{Cell, GameState};
