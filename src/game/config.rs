use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::grid::Grid;

/// Configuration for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: u32,
    /// Height of the game grid in cells
    pub grid_height: u32,
    /// Row the snake spawns on
    pub spawn_row: u32,
    /// Column of the spawned snake's tail
    pub spawn_col: u32,
    /// Number of segments the snake spawns with
    pub initial_snake_length: u32,
    /// Milliseconds between game ticks
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 50,
            grid_height: 40,
            spawn_row: 6,
            spawn_col: 25,
            initial_snake_length: 4,
            tick_ms: 100,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            grid_width: 10,
            grid_height: 8,
            spawn_row: 2,
            spawn_col: 2,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Grid geometry described by this configuration.
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Starting body, tail first, as a horizontal run on the spawn row.
    /// On the default grid this is `[325, 326, 327, 328]` with the head
    /// at 328.
    pub fn initial_snake(&self) -> Vec<u32> {
        let tail = self.spawn_row * self.grid_width + self.spawn_col;
        (0..self.initial_snake_length).map(|i| tail + i).collect()
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width >= 2 && self.grid_height >= 2,
            "grid must be at least 2x2 cells, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.initial_snake_length >= 2,
            "snake needs at least 2 segments to have a direction"
        );
        ensure!(
            self.spawn_row < self.grid_height,
            "spawn row {} is off a {}-row grid",
            self.spawn_row,
            self.grid_height
        );
        ensure!(
            self.spawn_col + self.initial_snake_length <= self.grid_width,
            "spawn run (column {}, {} segments) does not fit a {}-column grid",
            self.spawn_col,
            self.initial_snake_length,
            self.grid_width
        );
        ensure!(self.tick_ms > 0, "tick interval must be positive");
        Ok(())
    }
}
