//! gridsnake - chase the mouse around a terminal grid
//!
//! This library provides:
//! - Core game logic on a linear-indexed grid (game module)
//! - TUI rendering (render module)
//! - Keyboard handling (input module)
//! - Session play statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
