use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tileslide_core::MoveMode;

/// Best result for one (move rule, board size) combination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BestScore {
    /// Fewest moves to solve.
    pub move_count: usize,
    /// Time of the record game in seconds.
    pub time_secs: u64,
    /// Unix timestamp when the record was set.
    pub timestamp: u64,
}

/// Outcome of recording a win, for the win-screen overlay.
#[derive(Debug, Clone, Copy)]
pub struct WinRecord {
    /// Best move count before this game, if any.
    pub previous_best: Option<usize>,
    /// Whether this game set a new record.
    pub is_new_best: bool,
}

/// Local best scores, keyed per move rule and board size (`swap.4x4`),
/// persisted as JSON in the platform data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    best: HashMap<String, BestScore>,
    pub games_won: usize,
    pub total_moves: u64,
}

impl ScoreBoard {
    fn save_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tileslide_scores.json")
    }

    /// Load scores from file, falling back to an empty board.
    pub fn load() -> Self {
        match fs::read_to_string(Self::save_path()) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save scores to file. Failures are ignored; losing a record is not
    /// worth interrupting play.
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(Self::save_path(), json);
        }
    }

    fn key(mode: MoveMode, rows: usize, cols: usize) -> String {
        format!("{}.{}x{}", mode.key(), rows, cols)
    }

    /// Best score on record for this configuration.
    pub fn best(&self, mode: MoveMode, rows: usize, cols: usize) -> Option<BestScore> {
        self.best.get(&Self::key(mode, rows, cols)).copied()
    }

    /// Record a won game, keeping the record if it beats the old one.
    pub fn record_win(
        &mut self,
        mode: MoveMode,
        rows: usize,
        cols: usize,
        move_count: usize,
        time_secs: u64,
    ) -> WinRecord {
        let key = Self::key(mode, rows, cols);
        let previous = self.best.get(&key).copied();
        let is_new_best = previous.map_or(true, |record| move_count < record.move_count);

        if is_new_best {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            self.best.insert(
                key,
                BestScore {
                    move_count,
                    time_secs,
                    timestamp,
                },
            );
        }

        self.games_won += 1;
        self.total_moves += move_count as u64;

        WinRecord {
            previous_best: previous.map(|record| record.move_count),
            is_new_best,
        }
    }

    /// All records, sorted by key, for the scores screen.
    pub fn entries(&self) -> Vec<(String, BestScore)> {
        let mut entries: Vec<(String, BestScore)> = self
            .best
            .iter()
            .map(|(key, score)| (key.clone(), *score))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Format seconds as MM:SS.
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_win_is_always_a_record() {
        let mut scores = ScoreBoard::default();
        let record = scores.record_win(MoveMode::Swap, 4, 4, 42, 90);
        assert!(record.is_new_best);
        assert_eq!(record.previous_best, None);
        assert_eq!(scores.best(MoveMode::Swap, 4, 4).unwrap().move_count, 42);
    }

    #[test]
    fn worse_result_keeps_the_old_record() {
        let mut scores = ScoreBoard::default();
        scores.record_win(MoveMode::Swap, 4, 4, 42, 90);
        let record = scores.record_win(MoveMode::Swap, 4, 4, 60, 50);
        assert!(!record.is_new_best);
        assert_eq!(record.previous_best, Some(42));
        assert_eq!(scores.best(MoveMode::Swap, 4, 4).unwrap().move_count, 42);
        assert_eq!(scores.games_won, 2);
    }

    #[test]
    fn records_are_keyed_per_mode_and_size() {
        let mut scores = ScoreBoard::default();
        scores.record_win(MoveMode::Swap, 4, 4, 42, 90);
        assert!(scores.best(MoveMode::Slide, 4, 4).is_none());
        assert!(scores.best(MoveMode::Swap, 3, 3).is_none());

        scores.record_win(MoveMode::Slide, 4, 4, 120, 300);
        assert_eq!(scores.best(MoveMode::Slide, 4, 4).unwrap().move_count, 120);
        assert_eq!(scores.entries().len(), 2);
    }
}
