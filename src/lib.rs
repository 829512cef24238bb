//! Console Snake - a turn-based snake game on a fixed grid
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Line-based input parsing (input module)
//! - Plain-text grid rendering (render module)
//! - The interactive driver loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
