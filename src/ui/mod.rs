//! Terminal rendering for the puzzle.

pub mod puzzle_scene;

pub use puzzle_scene::render_puzzle;
