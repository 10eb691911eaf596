//! Best-result persistence.
//!
//! Keeps the best finish per board size and mode in a small JSON file under
//! the platform config directory.

use crate::puzzle::GameMode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A recorded finish for one size/mode combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub moves: u32,
    /// Final elapsed whole seconds; Timed mode only.
    pub seconds: Option<u64>,
}

/// All recorded bests, keyed by `"{size}x{size}-{mode}"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBook {
    pub best: BTreeMap<String, BestScore>,
}

fn score_key(size: usize, mode: GameMode) -> String {
    format!("{}x{}-{}", size, size, mode.key())
}

impl ScoreBook {
    pub fn get(&self, size: usize, mode: GameMode) -> Option<&BestScore> {
        self.best.get(&score_key(size, mode))
    }

    /// Record a win. Returns true when the entry was created or improved.
    ///
    /// Timed mode compares seconds first and breaks ties on moves; the other
    /// modes compare moves alone.
    pub fn record(&mut self, size: usize, mode: GameMode, moves: u32, seconds: Option<u64>) -> bool {
        let key = score_key(size, mode);
        let candidate = BestScore { moves, seconds };
        match self.best.get(&key) {
            Some(current) if !beats(mode, &candidate, current) => false,
            _ => {
                self.best.insert(key, candidate);
                true
            }
        }
    }
}

fn beats(mode: GameMode, candidate: &BestScore, current: &BestScore) -> bool {
    match mode {
        GameMode::Timed => {
            let cand = (candidate.seconds.unwrap_or(u64::MAX), candidate.moves);
            let held = (current.seconds.unwrap_or(u64::MAX), current.moves);
            cand < held
        }
        _ => candidate.moves < current.moves,
    }
}

/// Loads and saves the score file.
pub struct ScoreManager {
    path: PathBuf,
}

impl ScoreManager {
    /// Sets up the config directory for the platform using the
    /// `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "fifteen").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            path: config_dir.join("scores.json"),
        })
    }

    /// Load the score book; a missing file is an empty book.
    pub fn load(&self) -> io::Result<ScoreBook> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ScoreBook::default()),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, book: &ScoreBook) -> io::Result<()> {
        let data = serde_json::to_string_pretty(book)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_result_always_recorded() {
        let mut book = ScoreBook::default();
        assert!(book.record(3, GameMode::Classic, 40, None));
        assert_eq!(
            book.get(3, GameMode::Classic),
            Some(&BestScore { moves: 40, seconds: None })
        );
    }

    #[test]
    fn test_fewer_moves_improves_classic() {
        let mut book = ScoreBook::default();
        book.record(3, GameMode::Classic, 40, None);
        assert!(book.record(3, GameMode::Classic, 35, None));
        assert!(!book.record(3, GameMode::Classic, 35, None));
        assert!(!book.record(3, GameMode::Classic, 50, None));
        assert_eq!(book.get(3, GameMode::Classic).unwrap().moves, 35);
    }

    #[test]
    fn test_timed_compares_seconds_then_moves() {
        let mut book = ScoreBook::default();
        book.record(4, GameMode::Timed, 90, Some(120));
        // Slower but fewer moves does not improve
        assert!(!book.record(4, GameMode::Timed, 60, Some(150)));
        // Same time, fewer moves does
        assert!(book.record(4, GameMode::Timed, 80, Some(120)));
        // Faster always does
        assert!(book.record(4, GameMode::Timed, 95, Some(100)));
        assert_eq!(
            book.get(4, GameMode::Timed),
            Some(&BestScore { moves: 95, seconds: Some(100) })
        );
    }

    #[test]
    fn test_sizes_and_modes_tracked_separately() {
        let mut book = ScoreBook::default();
        book.record(3, GameMode::Classic, 40, None);
        book.record(4, GameMode::Classic, 90, None);
        book.record(3, GameMode::MovesLimited, 15, None);
        assert_eq!(book.best.len(), 3);
        assert_eq!(book.get(3, GameMode::Classic).unwrap().moves, 40);
        assert_eq!(book.get(4, GameMode::Classic).unwrap().moves, 90);
        assert_eq!(book.get(3, GameMode::MovesLimited).unwrap().moves, 15);
        assert!(book.get(5, GameMode::Classic).is_none());
    }

    #[test]
    fn test_book_round_trips_through_json() {
        let mut book = ScoreBook::default();
        book.record(3, GameMode::Timed, 42, Some(61));
        let json = serde_json::to_string(&book).unwrap();
        let restored: ScoreBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.get(3, GameMode::Timed), book.get(3, GameMode::Timed));
    }
}
