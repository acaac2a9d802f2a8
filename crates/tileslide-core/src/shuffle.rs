use crate::grid::{Grid, MoveMode, Position};
use crate::rng::SimpleRng;

/// Scrambles a grid with a random walk of legal adjacent slides.
///
/// Permuting cells at random can land on a configuration that slide rules
/// can never solve (the classic 15-puzzle parity trap). Walking legal slides
/// away from the solved state instead guarantees the result stays reachable,
/// whichever move mode the player later picks.
pub struct Shuffler {
    rng: SimpleRng,
}

impl Shuffler {
    pub fn new() -> Self {
        Self { rng: SimpleRng::new() }
    }

    /// Deterministic scrambles for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Step budget used when the caller has no opinion. The fifth power is
    /// an empirical "looks well scrambled" constant, not a correctness
    /// requirement.
    pub fn default_steps(grid: &Grid) -> usize {
        grid.rows().pow(5)
    }

    /// Run `steps` iterations of the walk, mutating `grid` in place.
    ///
    /// Each step shuffles the in-bounds orthogonal neighbors of the empty
    /// cell and slides the first one that is not barred by the
    /// anti-backtrack rule: a neighbor matching where the empty cell sat a
    /// step earlier is skipped, so the walk cannot trivially undo itself.
    /// A step where everything is barred just burns budget; that is rare
    /// and harmless.
    pub fn scramble(&mut self, grid: &mut Grid, steps: usize) {
        // Trailing empty-cell positions, newest last, at most two.
        let mut history: Vec<Position> = Vec::with_capacity(2);

        for _ in 0..steps {
            let empty = grid.find_empty_space();
            let (row, col) = (empty.row as isize, empty.col as isize);
            let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
            let mut sources: Vec<(isize, isize)> =
                [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)]
                    .into_iter()
                    .filter(|&(r, c)| r >= 0 && r < rows && c >= 0 && c < cols)
                    .collect();
            self.rng.shuffle(&mut sources);

            for (from_row, from_col) in sources {
                if let Some(prev) = history.first() {
                    if from_row == prev.row as isize && from_col == prev.col as isize {
                        continue;
                    }
                }
                // Always slide while scrambling: physical moves are what
                // keep the state reachable.
                if grid.move_tile(from_row, from_col, MoveMode::Slide) {
                    history.push(Position::new(from_row as usize, from_col as usize));
                    if history.len() > 2 {
                        history.remove(0);
                    }
                    break;
                }
            }
        }
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Scramble in place with a fresh OS-seeded [`Shuffler`].
    pub fn shuffle(&mut self, steps: usize) {
        Shuffler::new().scramble(self, steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_multiset(grid: &Grid) -> Vec<Option<u16>> {
        let mut tiles = Vec::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                tiles.push(grid.tile(Position::new(row, col)));
            }
        }
        tiles.sort_unstable();
        tiles
    }

    #[test]
    fn zero_steps_leaves_the_grid_solved() {
        let mut grid = Grid::new(3, 3);
        Shuffler::with_seed(1).scramble(&mut grid, 0);
        assert!(grid.is_complete());
        assert_eq!(grid, Grid::new(3, 3));
    }

    #[test]
    fn scramble_preserves_the_tile_multiset() {
        for seed in 0..5 {
            let mut grid = Grid::new(4, 4);
            Shuffler::with_seed(seed).scramble(&mut grid, 500);
            assert_eq!(tile_multiset(&grid), tile_multiset(&Grid::new(4, 4)));
        }
    }

    #[test]
    fn scrambled_grids_stay_reachable() {
        for (rows, cols) in [(2, 2), (3, 3), (4, 4), (3, 5), (5, 4)] {
            for seed in 0..10 {
                let mut grid = Grid::new(rows, cols);
                Shuffler::with_seed(seed).scramble(&mut grid, 300);
                assert!(
                    grid.is_solvable(),
                    "{}x{} seed {} walked into an unreachable state",
                    rows,
                    cols,
                    seed
                );
            }
        }
    }

    #[test]
    fn a_single_step_slides_one_neighbor() {
        let mut grid = Grid::new(4, 4);
        Shuffler::with_seed(3).scramble(&mut grid, 1);
        assert!(!grid.is_complete());
        // The empty cell can only have moved one slide away from its corner.
        let empty = grid.find_empty_space();
        let distance = (3 - empty.row) + (3 - empty.col);
        assert_eq!(distance, 1);
    }

    #[test]
    fn default_budget_scrambles_thoroughly() {
        let mut grid = Grid::new(4, 4);
        let steps = Shuffler::default_steps(&grid);
        assert_eq!(steps, 1024);
        Shuffler::with_seed(11).scramble(&mut grid, steps);
        assert!(!grid.is_complete());
        assert!(grid.is_solvable());
    }
}
