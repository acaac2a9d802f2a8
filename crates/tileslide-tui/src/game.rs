use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tileslide_core::{Grid, MoveMode, Position, Shuffler};

/// One puzzle session: a scrambled grid plus the counters the engine
/// deliberately does not own (move count, elapsed time, completion latch).
#[derive(Clone)]
pub struct Game {
    /// The board, exclusively owned by this session.
    grid: Grid,
    /// Current move rule. The player may flip this mid-game.
    mode: MoveMode,
    /// Successful moves so far.
    move_count: usize,
    /// Start of the current timing span.
    start_time: Instant,
    /// Time accumulated before `start_time`.
    elapsed: Duration,
    /// Latched once the grid reaches the solved state.
    completed: bool,
}

impl Game {
    /// Start a fresh game on a scrambled `rows x cols` board.
    pub fn new(rows: usize, cols: usize, mode: MoveMode) -> Self {
        let mut grid = Grid::new(rows, cols);
        let steps = Shuffler::default_steps(&grid);
        Shuffler::new().scramble(&mut grid, steps);
        Self::from_parts(grid, mode, 0, Duration::ZERO)
    }

    fn from_parts(grid: Grid, mode: MoveMode, move_count: usize, elapsed: Duration) -> Self {
        let completed = grid.is_complete();
        Self {
            grid,
            mode,
            move_count,
            start_time: Instant::now(),
            elapsed,
            completed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn mode(&self) -> MoveMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MoveMode) {
        self.mode = mode;
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Elapsed play time; frozen once the puzzle is solved.
    pub fn elapsed(&self) -> Duration {
        if self.completed {
            self.elapsed
        } else {
            self.elapsed + self.start_time.elapsed()
        }
    }

    /// Format the elapsed time as MM:SS.
    pub fn elapsed_string(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Attempt a move at `pos` under the session's move rule. Counts the
    /// move and latches completion on success.
    pub fn move_tile(&mut self, pos: Position) -> bool {
        if self.completed {
            return false;
        }
        if !self.grid.move_tile(pos.row as isize, pos.col as isize, self.mode) {
            return false;
        }

        self.move_count += 1;
        if self.grid.is_complete() {
            self.completed = true;
            self.elapsed += self.start_time.elapsed();
        }
        true
    }

    /// Serialize the session for saving.
    pub fn serialize(&self) -> String {
        let state = SaveState {
            grid: self.grid.to_string_compact(),
            mode: self.mode,
            move_count: self.move_count,
            elapsed_secs: self.elapsed().as_secs(),
        };
        serde_json::to_string(&state).unwrap_or_default()
    }

    /// Restore a saved session. Returns `None` for unparseable or corrupt
    /// save data.
    pub fn deserialize(json: &str) -> Option<Self> {
        let state: SaveState = serde_json::from_str(json).ok()?;
        let grid = Grid::from_string(&state.grid)?;
        Some(Self::from_parts(
            grid,
            state.mode,
            state.move_count,
            Duration::from_secs(state.elapsed_secs),
        ))
    }
}

#[derive(Serialize, Deserialize)]
struct SaveState {
    grid: String,
    mode: MoveMode,
    move_count: usize,
    elapsed_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near_solved_game() -> Game {
        // 2x2 with the empty cell one slide away from home.
        let json = r#"{"grid":"2x2:0,_,2,1","mode":"Slide","move_count":3,"elapsed_secs":10}"#;
        Game::deserialize(json).expect("valid save state")
    }

    #[test]
    fn failed_moves_do_not_count() {
        let mut game = near_solved_game();
        assert!(!game.move_tile(Position::new(1, 0)));
        assert_eq!(game.move_count(), 3);
    }

    #[test]
    fn winning_move_latches_completion() {
        let mut game = near_solved_game();
        assert!(!game.is_completed());
        assert!(game.move_tile(Position::new(1, 1)));
        assert!(game.is_completed());
        assert_eq!(game.move_count(), 4);

        // Further input bounces off a finished game.
        assert!(!game.move_tile(Position::new(0, 0)));
        assert_eq!(game.move_count(), 4);
    }

    #[test]
    fn mode_flip_applies_to_the_next_move() {
        let mut game = near_solved_game();
        game.set_mode(MoveMode::Swap);
        // (1,0) is not adjacent to the empty cell but swap reaches it.
        assert!(game.move_tile(Position::new(1, 0)));
        assert_eq!(game.move_count(), 4);
    }

    #[test]
    fn save_round_trip_preserves_the_session() {
        let game = near_solved_game();
        let restored = Game::deserialize(&game.serialize()).expect("round trip");
        assert_eq!(restored.grid(), game.grid());
        assert_eq!(restored.mode(), game.mode());
        assert_eq!(restored.move_count(), game.move_count());
    }

    #[test]
    fn deserialize_rejects_corrupt_grids() {
        let json = r#"{"grid":"2x2:0,0,2,_","mode":"Swap","move_count":0,"elapsed_secs":0}"#;
        assert!(Game::deserialize(json).is_none());
        assert!(Game::deserialize("not json").is_none());
    }

    #[test]
    fn new_game_starts_scrambled_and_reachable() {
        let game = Game::new(4, 4, MoveMode::Swap);
        assert!(game.grid().is_solvable());
        assert_eq!(game.move_count(), 0);
    }
}
