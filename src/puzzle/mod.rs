//! Sliding-tile puzzle core: board model, move rules, shuffle, and session
//! state machine.

pub mod logic;
pub mod session;
pub mod timer;
pub mod types;

pub use logic::{grid_neighbors, is_adjacent, shuffle, tile_for_slide, SlideDirection};
pub use session::{moves_limit_for, PuzzleEvent, PuzzleSession};
pub use timer::{format_elapsed, GameTimer};
pub use types::{Board, GameMode, GameStatus, InvalidSizeError};
