//! Core sliding-puzzle engine.
//!
//! Owns the grid representation, the randomized-walk scramble, move
//! validation and application, and the completion check. Everything here is
//! pure, synchronous computation: no I/O, no timing, no terminal. The
//! presentation layer is expected to hold a [`Grid`] exclusively, call
//! [`Grid::move_tile`] per player input, and poll [`Grid::is_complete`]
//! after each successful move.

mod grid;
mod rng;
mod shuffle;

pub use grid::{Grid, MoveMode, Position};
pub use rng::SimpleRng;
pub use shuffle::Shuffler;
