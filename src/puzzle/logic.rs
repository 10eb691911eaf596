//! Pure puzzle logic: adjacency, neighbor enumeration, and the random-walk
//! shuffle.
//!
//! Everything here takes an explicit `Rng` so tests can run seeded.

use super::types::Board;
use rand::seq::SliceRandom;
use rand::Rng;

/// True iff the two linear positions are horizontally or vertically
/// neighboring cells on the `size` x `size` grid (Manhattan distance 1,
/// never diagonal). Pure and symmetric.
pub fn is_adjacent(a: usize, b: usize, size: usize) -> bool {
    let (row_a, col_a) = (a / size, a % size);
    let (row_b, col_b) = (b / size, b % size);
    (row_a.abs_diff(row_b) == 1 && col_a == col_b)
        || (col_a.abs_diff(col_b) == 1 && row_a == row_b)
}

/// In-bounds orthogonal neighbors of a linear position, at most four.
pub fn grid_neighbors(index: usize, size: usize) -> Vec<usize> {
    let (row, col) = (index / size, index % size);
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push(index - size);
    }
    if row + 1 < size {
        neighbors.push(index + size);
    }
    if col > 0 {
        neighbors.push(index - 1);
    }
    if col + 1 < size {
        neighbors.push(index + 1);
    }
    neighbors
}

/// Number of randomized empty-cell moves one shuffle walk performs.
pub fn shuffle_walk_length(size: usize) -> u32 {
    (size * size * (5 + size)) as u32
}

/// Shuffle by walking the empty cell through randomized legal moves.
///
/// The board is reset to solved first, so the result is always reachable
/// (hence solvable). The neighbor the empty cell just came from is excluded
/// at each step to avoid wasting entropy on immediate reversals. If the walk
/// happens to land back on the solved arrangement, the whole walk restarts
/// from a fresh solved board. Returns the number of moves applied by the
/// accepted walk.
pub fn shuffle<R: Rng>(board: &mut Board, rng: &mut R) -> u32 {
    loop {
        board.reset();
        let applied = random_walk(board, rng);
        if !board.is_solved() {
            return applied;
        }
    }
}

/// One walk of `shuffle_walk_length` moves. A step whose candidate set is
/// empty (cannot happen for size >= 2, where every cell has at least two
/// neighbors) retries without consuming the budget.
fn random_walk<R: Rng>(board: &mut Board, rng: &mut R) -> u32 {
    let budget = shuffle_walk_length(board.size);
    let mut last_moved: Option<usize> = None;
    let mut applied = 0;
    while applied < budget {
        let candidates: Vec<usize> = grid_neighbors(board.empty_index, board.size)
            .into_iter()
            .filter(|&n| Some(n) != last_moved)
            .collect();
        if let Some(&next) = candidates.choose(rng) {
            last_moved = Some(board.empty_index);
            board.swap(next, board.empty_index);
            board.empty_index = next;
            applied += 1;
        }
    }
    applied
}

/// Direction a tile slides into the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Up,
    Down,
    Left,
    Right,
}

/// The tile that would slide in the given direction, if any.
///
/// A tile slides up by being directly below the empty cell, slides left by
/// being directly to its right, and so on.
pub fn tile_for_slide(board: &Board, direction: SlideDirection) -> Option<usize> {
    let size = board.size;
    let (row, col) = board.position(board.empty_index);
    match direction {
        SlideDirection::Up if row + 1 < size => Some(board.empty_index + size),
        SlideDirection::Down if row > 0 => Some(board.empty_index - size),
        SlideDirection::Left if col + 1 < size => Some(board.empty_index + 1),
        SlideDirection::Right if col > 0 => Some(board.empty_index - 1),
        _ => None,
    }
}
