use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, col) cell coordinate within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Move rule for a play session.
///
/// This is an external parameter supplied per move; the grid itself does not
/// remember which rule a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveMode {
    /// A tile may only slide into an orthogonally adjacent empty cell.
    Slide,
    /// Any tile may be exchanged directly with the empty cell, regardless of
    /// distance.
    Swap,
}

impl MoveMode {
    /// Short stable name, used in score keys and save files.
    pub fn key(&self) -> &'static str {
        match self {
            MoveMode::Slide => "slide",
            MoveMode::Swap => "swap",
        }
    }
}

impl fmt::Display for MoveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveMode::Slide => write!(f, "sliding only"),
            MoveMode::Swap => write!(f, "swapping"),
        }
    }
}

/// The puzzle grid: `rows x cols` cells, each holding a tile id or the
/// single empty marker (`None`).
///
/// Tile `k` is in its solved position at row `k / cols`, column `k % cols`;
/// the empty marker's solved position is the bottom-right cell. Exactly one
/// cell is empty at all times — the fields are private and every constructor
/// maintains the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell contents.
    cells: Vec<Option<u16>>,
}

impl Grid {
    /// Create a solved grid. Both dimensions must be at least 1; anything
    /// below 2x2 is a degenerate puzzle but still well-formed.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "grid needs at least one row and one column");
        let count = rows * cols;
        let mut cells: Vec<Option<u16>> = (0..count as u16).map(Some).collect();
        cells[count - 1] = None;
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Contents of a cell. Panics if `pos` is out of bounds.
    pub fn tile(&self, pos: Position) -> Option<u16> {
        assert!(pos.row < self.rows && pos.col < self.cols, "position out of bounds");
        self.cells[pos.row * self.cols + pos.col]
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    fn is_space_free(&self, row: isize, col: isize) -> bool {
        self.in_bounds(row, col) && self.cells[row as usize * self.cols + col as usize].is_none()
    }

    /// Locate the empty cell.
    pub fn find_empty_space(&self) -> Position {
        let idx = self
            .cells
            .iter()
            .position(Option::is_none)
            .expect("grid invariant: exactly one empty cell");
        Position::new(idx / self.cols, idx % self.cols)
    }

    /// Find the first orthogonal neighbor of `pos` holding the empty marker,
    /// probing in fixed up, down, left, right order.
    fn adjacent_empty_space(&self, pos: Position) -> Option<Position> {
        let (row, col) = (pos.row as isize, pos.col as isize);
        let neighbors = [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)];
        neighbors
            .into_iter()
            .find(|&(r, c)| self.is_space_free(r, c))
            .map(|(r, c)| Position::new(r as usize, c as usize))
    }

    /// Attempt to move the tile at (`from_row`, `from_col`) into the empty
    /// cell. Returns `true` and mutates the grid on success; returns `false`
    /// with no mutation when the coordinates are out of bounds or, under
    /// [`MoveMode::Slide`], when no orthogonal neighbor is empty.
    ///
    /// Illegal moves are routine player input, not errors, which is why this
    /// reports failure instead of returning a `Result`.
    pub fn move_tile(&mut self, from_row: isize, from_col: isize, mode: MoveMode) -> bool {
        if !self.in_bounds(from_row, from_col) {
            return false;
        }
        let from = Position::new(from_row as usize, from_col as usize);

        let target = match mode {
            MoveMode::Swap => Some(self.find_empty_space()),
            MoveMode::Slide => self.adjacent_empty_space(from),
        };

        match target {
            Some(empty) => {
                let a = from.row * self.cols + from.col;
                let b = empty.row * self.cols + empty.col;
                self.cells.swap(a, b);
                true
            }
            None => false,
        }
    }

    /// Whether every cell except the bottom-right holds its solved tile id.
    ///
    /// The last cell needs no direct check: with all other tiles in place the
    /// single empty marker can only be there.
    pub fn is_complete(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells[..last]
            .iter()
            .enumerate()
            .all(|(i, cell)| *cell == Some(i as u16))
    }

    /// Inversion count over the tile sequence in row-major order, ignoring
    /// the empty cell.
    fn count_inversions(&self) -> usize {
        let tiles: Vec<u16> = self.cells.iter().flatten().copied().collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
            .sum()
    }

    /// Whether this state is reachable from the solved grid under slide
    /// rules, by the classic inversion-parity argument generalized to
    /// rectangular boards.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.count_inversions();
        if self.cols % 2 == 1 {
            inversions % 2 == 0
        } else {
            let empty_row_from_bottom = self.rows - 1 - self.find_empty_space().row;
            (inversions + empty_row_from_bottom) % 2 == 0
        }
    }

    /// Compact single-line form, e.g. `2x2:0,1,2,_` for a solved 2x2 grid.
    pub fn to_string_compact(&self) -> String {
        let cells: Vec<String> = self
            .cells
            .iter()
            .map(|cell| match cell {
                Some(tile) => tile.to_string(),
                None => "_".to_string(),
            })
            .collect();
        format!("{}x{}:{}", self.rows, self.cols, cells.join(","))
    }

    /// Parse the compact form, validating well-formedness: the dimensions
    /// must be positive, the cell count must match, there must be exactly
    /// one empty marker, and the tile ids must be exactly `0..rows*cols-1`.
    pub fn from_string(s: &str) -> Option<Self> {
        let (dims, body) = s.split_once(':')?;
        let (rows, cols) = dims.split_once('x')?;
        let rows: usize = rows.parse().ok()?;
        let cols: usize = cols.parse().ok()?;
        if rows < 1 || cols < 1 {
            return None;
        }

        let count = rows * cols;
        let mut cells = Vec::with_capacity(count);
        for token in body.split(',') {
            match token {
                "_" => cells.push(None),
                tile => cells.push(Some(tile.parse::<u16>().ok()?)),
            }
        }
        if cells.len() != count {
            return None;
        }
        if cells.iter().filter(|cell| cell.is_none()).count() != 1 {
            return None;
        }
        let mut seen = vec![false; count - 1];
        for tile in cells.iter().flatten() {
            let slot = seen.get_mut(*tile as usize)?;
            if *slot {
                return None;
            }
            *slot = true;
        }

        Some(Self { rows, cols, cells })
    }
}

impl fmt::Display for Grid {
    /// Tiles print 1-based, the way players number them; the empty cell
    /// prints as a dot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.rows * self.cols).to_string().len();
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.cells[row * self.cols + col] {
                    Some(tile) => write!(f, "{:>width$} ", tile + 1)?,
                    None => write!(f, "{:>width$} ", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(grid: &Grid) -> Vec<Option<u16>> {
        let mut out = Vec::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                out.push(grid.tile(Position::new(row, col)));
            }
        }
        out
    }

    #[test]
    fn new_grid_is_solved() {
        for (rows, cols) in [(2, 2), (3, 3), (4, 4), (2, 5), (6, 3)] {
            let grid = Grid::new(rows, cols);
            assert!(grid.is_complete(), "{}x{} should start solved", rows, cols);
            assert_eq!(grid.find_empty_space(), Position::new(rows - 1, cols - 1));
        }
    }

    #[test]
    fn new_grid_layout() {
        let grid = Grid::new(2, 2);
        assert_eq!(tiles(&grid), vec![Some(0), Some(1), Some(2), None]);
    }

    #[test]
    fn exactly_one_empty_cell() {
        let mut grid = Grid::new(3, 3);
        for moves in [(2, 1), (1, 1), (1, 2), (0, 2)] {
            assert!(grid.move_tile(moves.0, moves.1, MoveMode::Slide));
            let empties = tiles(&grid).iter().filter(|cell| cell.is_none()).count();
            assert_eq!(empties, 1);
        }
    }

    #[test]
    fn slide_on_2x2_solved_grid() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.move_tile(0, 1, MoveMode::Slide));
        assert_eq!(tiles(&grid), vec![Some(0), None, Some(2), Some(1)]);
        assert!(!grid.is_complete());
    }

    #[test]
    fn slide_fails_without_adjacent_empty() {
        let mut grid = Grid::new(3, 3);
        let before = grid.clone();
        // Tile 0 at (0,0) is two cells away from the empty corner.
        assert!(!grid.move_tile(0, 0, MoveMode::Slide));
        assert_eq!(grid, before);
    }

    #[test]
    fn slide_succeeds_iff_neighbor_is_empty() {
        let grid = Grid::new(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                let mut copy = grid.clone();
                let adjacent = matches!((row, col), (1, 2) | (2, 1));
                assert_eq!(copy.move_tile(row, col, MoveMode::Slide), adjacent);
            }
        }
    }

    #[test]
    fn slide_exchanges_source_and_empty() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.move_tile(2, 1, MoveMode::Slide));
        assert_eq!(grid.find_empty_space(), Position::new(2, 1));
        assert_eq!(grid.tile(Position::new(2, 2)), Some(7));
    }

    #[test]
    fn out_of_bounds_move_is_a_no_op() {
        for mode in [MoveMode::Slide, MoveMode::Swap] {
            let mut grid = Grid::new(4, 4);
            let before = grid.clone();
            assert!(!grid.move_tile(-1, 0, mode));
            assert!(!grid.move_tile(0, -1, mode));
            assert!(!grid.move_tile(4, 0, mode));
            assert!(!grid.move_tile(0, 17, mode));
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn swap_always_succeeds_in_bounds() {
        for row in 0..3 {
            for col in 0..3 {
                let mut grid = Grid::new(3, 3);
                assert!(grid.move_tile(row, col, MoveMode::Swap));
                assert_eq!(grid.find_empty_space(), Position::new(row as usize, col as usize));
            }
        }
    }

    #[test]
    fn swap_relocates_distant_tile() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.move_tile(0, 0, MoveMode::Swap));
        assert_eq!(grid.tile(Position::new(2, 2)), Some(0));
        assert_eq!(grid.tile(Position::new(0, 0)), None);
    }

    #[test]
    fn swap_on_the_empty_cell_itself() {
        let mut grid = Grid::new(3, 3);
        let before = grid.clone();
        assert!(grid.move_tile(2, 2, MoveMode::Swap));
        assert_eq!(grid, before);
    }

    #[test]
    fn solved_grid_is_solvable() {
        assert!(Grid::new(3, 3).is_solvable());
        assert!(Grid::new(4, 4).is_solvable());
        assert!(Grid::new(3, 4).is_solvable());
    }

    #[test]
    fn single_transposition_is_unsolvable() {
        // Swapping two tiles flips permutation parity without moving the
        // empty cell, which is exactly the unreachable case.
        let grid = Grid::from_string("3x3:1,0,2,3,4,5,6,7,_").unwrap();
        assert!(!grid.is_solvable());

        let wide = Grid::from_string("4x4:0,1,2,3,4,5,6,7,8,9,10,11,12,14,13,_").unwrap();
        assert!(!wide.is_solvable());
    }

    #[test]
    fn compact_string_round_trip() {
        let mut grid = Grid::new(4, 3);
        grid.move_tile(3, 1, MoveMode::Slide);
        grid.move_tile(2, 1, MoveMode::Slide);
        let parsed = Grid::from_string(&grid.to_string_compact()).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn from_string_rejects_malformed_input() {
        // No empty marker.
        assert!(Grid::from_string("2x2:0,1,2,3").is_none());
        // Two empty markers.
        assert!(Grid::from_string("2x2:0,1,_,_").is_none());
        // Duplicate tile.
        assert!(Grid::from_string("2x2:0,0,2,_").is_none());
        // Tile id out of range.
        assert!(Grid::from_string("2x2:0,1,9,_").is_none());
        // Wrong cell count.
        assert!(Grid::from_string("2x2:0,1,_").is_none());
        // Garbage headers.
        assert!(Grid::from_string("2x0:").is_none());
        assert!(Grid::from_string("no-header").is_none());
    }

    #[test]
    fn move_mode_serializes_by_variant_name() {
        // Save files store the rule under this name; renaming the variants
        // would orphan existing saves.
        assert_eq!(serde_json::to_string(&MoveMode::Slide).unwrap(), "\"Slide\"");
        assert_eq!(serde_json::from_str::<MoveMode>("\"Swap\"").unwrap(), MoveMode::Swap);
    }

    #[test]
    fn display_is_one_based() {
        let grid = Grid::new(2, 2);
        assert_eq!(format!("{}", grid), "1 2 \n3 . \n");
    }
}
