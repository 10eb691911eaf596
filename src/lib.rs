//! Fifteen - Terminal Sliding-Tile Puzzle
//!
//! This module exposes the puzzle logic for testing and external use.

pub mod puzzle;
pub mod scores;
pub mod ui;

pub use puzzle::{
    Board, GameMode, GameStatus, GameTimer, InvalidSizeError, PuzzleEvent, PuzzleSession,
};
pub use scores::{BestScore, ScoreBook, ScoreManager};

/// Smallest supported grid dimension.
pub const MIN_BOARD_SIZE: usize = 2;
/// Largest grid dimension offered by the UI.
pub const MAX_BOARD_SIZE: usize = 6;
/// Grid dimension a fresh session starts with (the classic 15-puzzle).
pub const DEFAULT_BOARD_SIZE: usize = 4;
