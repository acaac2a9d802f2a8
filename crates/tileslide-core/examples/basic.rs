//! Basic example of driving the board engine directly.

use tileslide_core::{Grid, MoveMode, Shuffler};

fn main() {
    // Build a solved 4x4 board
    let mut grid = Grid::new(4, 4);
    println!("Solved board:");
    println!("{}", grid);

    // Scramble it with the default random-walk budget
    let steps = Shuffler::default_steps(&grid);
    grid.shuffle(steps);
    println!("Scrambled ({} walk steps):", steps);
    println!("{}", grid);
    println!("Reachable from solved: {}", grid.is_solvable());
    println!("Empty cell at: {:?}\n", grid.find_empty_space());

    // Try a few moves next to the empty cell
    let empty = grid.find_empty_space();
    let attempts = [
        (empty.row as isize - 1, empty.col as isize),
        (empty.row as isize, empty.col as isize - 1),
        (-1, 0),
    ];
    for (row, col) in attempts {
        let moved = grid.move_tile(row, col, MoveMode::Slide);
        println!("slide ({}, {}) -> {}", row, col, moved);
    }
    println!("\nAfter those moves:");
    println!("{}", grid);
    println!("Solved: {}", grid.is_complete());

    // A deterministic scramble for reproducible runs
    let mut replay = Grid::new(3, 3);
    Shuffler::with_seed(42).scramble(&mut replay, 300);
    println!("\nSeeded 3x3 scramble:");
    println!("{}", replay);
    println!("Compact form: {}", replay.to_string_compact());
}
