//! Session lifecycle and the event surface the presentation layer consumes.
//!
//! A [`PuzzleSession`] owns one [`Board`] for its lifetime; changing size or
//! mode means building a fresh session. All mutation happens synchronously in
//! response to `shuffle`, `attempt_move`, and `poll_timer`, which report what
//! happened as [`PuzzleEvent`]s.

use super::logic::{is_adjacent, shuffle};
use super::timer::{format_elapsed, GameTimer};
use super::types::{Board, GameMode, GameStatus, InvalidSizeError};
use rand::Rng;
use std::time::Instant;

/// Move budget for MovesLimited mode.
pub fn moves_limit_for(size: usize) -> u32 {
    (size * size * 2) as u32
}

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleEvent {
    /// A shuffle was accepted; the session is now in progress.
    Shuffled { tiles: Vec<Option<u16>> },
    /// An accepted player move.
    TileMoved {
        tiles: Vec<Option<u16>>,
        moves_count: u32,
    },
    /// The board reached the solved arrangement. Terminal.
    PuzzleSolved {
        moves_count: u32,
        /// Final elapsed whole seconds, Timed mode only.
        elapsed_seconds: Option<u64>,
        /// Final `MM:SS` reading, Timed mode only.
        elapsed: Option<String>,
        message: String,
    },
    /// The move budget ran out before solving. Terminal.
    PuzzleFailed { moves_count: u32, message: String },
    /// The displayed second changed (Timed mode, in progress only).
    TimerTick { elapsed: String },
}

/// One puzzle instance: mode, board, counters, timer, and status.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    pub mode: GameMode,
    pub status: GameStatus,
    pub board: Board,
    pub moves_count: u32,
    /// Budget for MovesLimited; unused in the other modes.
    pub moves_limit: u32,
    pub timer: GameTimer,
}

impl PuzzleSession {
    /// Build an idle session around a solved board. Rejects `size < 2`
    /// without touching anything.
    pub fn new(size: usize, mode: GameMode) -> Result<Self, InvalidSizeError> {
        let board = Board::new(size)?;
        Ok(Self {
            mode,
            status: GameStatus::Idle,
            board,
            moves_count: 0,
            moves_limit: moves_limit_for(size),
            timer: GameTimer::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.board.size
    }

    /// Moves left before the budget runs out; `None` outside MovesLimited.
    pub fn moves_remaining(&self) -> Option<u32> {
        match self.mode {
            GameMode::MovesLimited => Some(self.moves_limit.saturating_sub(self.moves_count)),
            _ => None,
        }
    }

    /// What to show before the first shuffle.
    pub fn start_message(&self) -> String {
        match self.mode {
            GameMode::Classic => "Pick a size and shuffle to begin.".to_string(),
            GameMode::Timed => "Pick a size and shuffle to begin. The clock is on!".to_string(),
            GameMode::MovesLimited => {
                format!("Pick a size and shuffle to begin. Move limit: {}.", self.moves_limit)
            }
        }
    }

    /// Randomize the board and enter InProgress. Resets the move counter and,
    /// in Timed mode, restarts the timer from `now` (stopping any previous
    /// run first). Works from any status, including terminal ones.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R, now: Instant) -> Vec<PuzzleEvent> {
        shuffle(&mut self.board, rng);
        self.moves_count = 0;
        self.status = GameStatus::InProgress;
        match self.mode {
            GameMode::Timed => self.timer.start(now),
            _ => self.timer.stop(),
        }
        vec![PuzzleEvent::Shuffled {
            tiles: self.board.snapshot(),
        }]
    }

    /// Try to slide the tile at `tile_index` into the empty cell.
    ///
    /// Silently ignored unless the session is in progress and the tile is
    /// grid-adjacent to the empty cell. On an accepted move the win check
    /// runs before the move-limit check, so a solving move wins even when it
    /// is also the budget-exhausting one.
    pub fn attempt_move(&mut self, tile_index: usize, now: Instant) -> Vec<PuzzleEvent> {
        if self.status != GameStatus::InProgress {
            return Vec::new();
        }
        if tile_index >= self.board.cell_count()
            || !is_adjacent(tile_index, self.board.empty_index, self.size())
        {
            return Vec::new();
        }

        let empty = self.board.empty_index;
        self.board.swap(tile_index, empty);
        self.board.empty_index = tile_index;
        self.moves_count += 1;

        let mut events = vec![PuzzleEvent::TileMoved {
            tiles: self.board.snapshot(),
            moves_count: self.moves_count,
        }];

        if self.board.is_solved() {
            let elapsed_seconds = self.timer.elapsed_seconds(now);
            let elapsed = elapsed_seconds.map(format_elapsed);
            self.timer.stop();
            self.status = GameStatus::Won;
            events.push(PuzzleEvent::PuzzleSolved {
                moves_count: self.moves_count,
                elapsed_seconds,
                elapsed: elapsed.clone(),
                message: self.win_message(elapsed.as_deref()),
            });
        } else if self.mode == GameMode::MovesLimited && self.moves_count >= self.moves_limit {
            self.timer.stop();
            self.status = GameStatus::Lost;
            events.push(PuzzleEvent::PuzzleFailed {
                moves_count: self.moves_count,
                message: "Out of moves! The puzzle got away this time.".to_string(),
            });
        }
        events
    }

    /// Forward the timer; at most one tick event per displayed second.
    pub fn poll_timer(&mut self, now: Instant) -> Option<PuzzleEvent> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        self.timer
            .poll(now)
            .map(|elapsed| PuzzleEvent::TimerTick { elapsed })
    }

    fn win_message(&self, elapsed: Option<&str>) -> String {
        let size = self.size();
        match elapsed {
            Some(time) => format!(
                "Puzzle {}x{} solved in {} with {} moves!",
                size, size, time, self.moves_count
            ),
            None => format!("Puzzle {}x{} solved in {} moves!", size, size, self.moves_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_and_solved() {
        let session = PuzzleSession::new(4, GameMode::Classic).unwrap();
        assert_eq!(session.status, GameStatus::Idle);
        assert_eq!(session.moves_count, 0);
        assert_eq!(session.moves_limit, 32);
        assert!(session.board.is_solved());
        assert!(!session.timer.is_running());
    }

    #[test]
    fn test_new_session_rejects_tiny_size() {
        assert!(PuzzleSession::new(1, GameMode::Classic).is_err());
        assert!(PuzzleSession::new(0, GameMode::Timed).is_err());
    }

    #[test]
    fn test_new_session_rejects_oversized_board() {
        assert!(PuzzleSession::new(257, GameMode::Classic).is_err());
        assert!(PuzzleSession::new(300, GameMode::MovesLimited).is_err());
    }

    #[test]
    fn test_moves_limit_formula() {
        assert_eq!(moves_limit_for(2), 8);
        assert_eq!(moves_limit_for(3), 18);
        assert_eq!(moves_limit_for(5), 50);
    }

    #[test]
    fn test_moves_remaining_only_in_limited_mode() {
        let session = PuzzleSession::new(3, GameMode::Classic).unwrap();
        assert_eq!(session.moves_remaining(), None);

        let session = PuzzleSession::new(3, GameMode::MovesLimited).unwrap();
        assert_eq!(session.moves_remaining(), Some(18));
    }

    #[test]
    fn test_start_message_mentions_limit() {
        let session = PuzzleSession::new(3, GameMode::MovesLimited).unwrap();
        assert!(session.start_message().contains("18"));
    }
}
