//! Sliding-tile puzzle data structures.
//!
//! The board is a flat row-major sequence of `size * size` cells. Each cell
//! holds a tile label (`1..size*size-1`) or `None` for the single empty cell.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game modes, selectable before shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// No time or move constraint.
    Classic,
    /// Elapsed time tracked and reported at the win.
    Timed,
    /// Loss when the move budget runs out before solving.
    MovesLimited,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Classic, GameMode::Timed, GameMode::MovesLimited];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameMode::Classic)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Timed => "Timed",
            Self::MovesLimited => "Move Limit",
        }
    }

    /// Stable lowercase key used in the score file.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Timed => "timed",
            Self::MovesLimited => "moves",
        }
    }

    /// Next mode in the cycle Classic -> Timed -> MovesLimited -> Classic.
    pub fn next(&self) -> Self {
        match self {
            Self::Classic => Self::Timed,
            Self::Timed => Self::MovesLimited,
            Self::MovesLimited => Self::Classic,
        }
    }
}

/// Lifecycle of one puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Before the first shuffle (or after a size/mode change). Moves are no-ops.
    Idle,
    /// Shuffled and accepting moves.
    InProgress,
    /// Solved. Terminal.
    Won,
    /// Move budget exhausted (MovesLimited only). Terminal.
    Lost,
}

/// Rejected board dimension (outside `2..=Board::SIZE_LIMIT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSizeError(pub usize);

impl fmt::Display for InvalidSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid board size {}; supported range is 2..={}",
            self.0,
            Board::SIZE_LIMIT
        )
    }
}

impl std::error::Error for InvalidSizeError {}

/// The tile arrangement, flat row-major.
///
/// Invariants: exactly one `None` cell, its position cached in `empty_index`;
/// the labels form exactly the set `1..=size*size-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Grid dimension (board is `size` x `size`).
    pub size: usize,
    /// Cell contents; `None` marks the empty cell.
    pub tiles: Vec<Option<u16>>,
    /// Cached position of the empty cell within `tiles`.
    pub empty_index: usize,
}

impl Board {
    /// Largest supported dimension: the highest label of a 256x256 board is
    /// 65535, exactly `u16::MAX`.
    pub const SIZE_LIMIT: usize = 256;

    /// Create a solved board: labels `1..size*size-1` in order, empty cell last.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        if size < 2 || size > Self::SIZE_LIMIT {
            return Err(InvalidSizeError(size));
        }
        let cells = size * size;
        let mut tiles: Vec<Option<u16>> = (1..cells).map(|label| Some(label as u16)).collect();
        tiles.push(None);
        Ok(Self {
            size,
            tiles,
            empty_index: cells - 1,
        })
    }

    /// Number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Restore the solved arrangement in place.
    pub fn reset(&mut self) {
        let cells = self.cell_count();
        for (i, cell) in self.tiles.iter_mut().enumerate() {
            *cell = if i + 1 < cells {
                Some((i + 1) as u16)
            } else {
                None
            };
        }
        self.empty_index = cells - 1;
    }

    /// Exchange the contents of two cells. The caller is responsible for only
    /// swapping legal moves and for keeping `empty_index` current.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.tiles.swap(a, b);
    }

    /// True iff every cell `i` holds label `i + 1` and the final cell is empty.
    pub fn is_solved(&self) -> bool {
        let cells = self.cell_count();
        for i in 0..cells - 1 {
            if self.tiles[i] != Some((i + 1) as u16) {
                return false;
            }
        }
        self.tiles[cells - 1].is_none()
    }

    /// Linear index -> (row, col).
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// (row, col) -> linear index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Snapshot of the tile arrangement for event payloads.
    pub fn snapshot(&self) -> Vec<Option<u16>> {
        self.tiles.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_solved() {
        for size in 2..=6 {
            let board = Board::new(size).unwrap();
            assert_eq!(board.tiles.len(), size * size);
            assert_eq!(board.empty_index, size * size - 1);
            assert!(board.is_solved());
        }
    }

    #[test]
    fn test_new_board_labels_in_order() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            board.tiles,
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                None
            ]
        );
    }

    #[test]
    fn test_size_below_two_rejected() {
        assert_eq!(Board::new(0), Err(InvalidSizeError(0)));
        assert_eq!(Board::new(1), Err(InvalidSizeError(1)));
    }

    #[test]
    fn test_size_above_limit_rejected() {
        assert_eq!(Board::new(257), Err(InvalidSizeError(257)));
        assert_eq!(Board::new(300), Err(InvalidSizeError(300)));
    }

    #[test]
    fn test_largest_supported_board_holds_invariants() {
        let board = Board::new(Board::SIZE_LIMIT).unwrap();
        let cells = Board::SIZE_LIMIT * Board::SIZE_LIMIT;
        assert_eq!(board.tiles.len(), cells);
        assert_eq!(board.empty_index, cells - 1);
        assert_eq!(board.tiles[0], Some(1));
        assert_eq!(board.tiles[cells - 2], Some(u16::MAX));
        assert!(board.is_solved());
    }

    #[test]
    fn test_large_board_label_sequence_is_complete() {
        // Labels must cover 1..size*size-1 with no wraparound gaps
        let board = Board::new(100).unwrap();
        assert_eq!(board.tiles.len(), 10_000);
        for (i, cell) in board.tiles.iter().enumerate().take(9_999) {
            assert_eq!(*cell, Some((i + 1) as u16));
        }
        assert_eq!(board.tiles[9_999], None);
    }

    #[test]
    fn test_invalid_size_error_message() {
        let err = InvalidSizeError(1);
        assert_eq!(err.to_string(), "invalid board size 1; supported range is 2..=256");
    }

    #[test]
    fn test_swap_exchanges_cells() {
        let mut board = Board::new(2).unwrap();
        board.swap(0, 3);
        assert_eq!(board.tiles[0], None);
        assert_eq!(board.tiles[3], Some(1));
        assert!(!board.is_solved());
    }

    #[test]
    fn test_reset_restores_solved_order() {
        let mut board = Board::new(3).unwrap();
        board.swap(0, 8);
        board.swap(2, 5);
        board.empty_index = 0;
        board.reset();
        assert!(board.is_solved());
        assert_eq!(board.empty_index, 8);
    }

    #[test]
    fn test_is_solved_rejects_empty_not_last() {
        let mut board = Board::new(2).unwrap();
        // [1, 2, None, 3]: prefix check alone would pass up to index 1
        board.tiles = vec![Some(1), Some(2), None, Some(3)];
        board.empty_index = 2;
        assert!(!board.is_solved());
    }

    #[test]
    fn test_coordinate_conversions_round_trip() {
        let board = Board::new(4).unwrap();
        for index in 0..board.cell_count() {
            let (row, col) = board.position(index);
            assert_eq!(board.index_of(row, col), index);
        }
        assert_eq!(board.position(7), (1, 3));
        assert_eq!(board.index_of(3, 0), 12);
    }

    #[test]
    fn test_mode_cycle_and_keys() {
        assert_eq!(GameMode::Classic.next(), GameMode::Timed);
        assert_eq!(GameMode::Timed.next(), GameMode::MovesLimited);
        assert_eq!(GameMode::MovesLimited.next(), GameMode::Classic);
        assert_eq!(GameMode::from_index(2), GameMode::MovesLimited);
        assert_eq!(GameMode::from_index(99), GameMode::Classic);
        assert_eq!(GameMode::Timed.key(), "timed");
        assert_eq!(GameMode::MovesLimited.name(), "Move Limit");
    }
}
