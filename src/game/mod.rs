//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies, so the game can be driven headlessly in tests.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::GameEngine;
pub use state::{CollisionType, GameState, Position, Snake};
