//! Core Connect Four game logic: board representation with in-place
//! drop/undo and run-length detection, plus player types.

mod board;
mod player;

pub use board::{Board, Cell, CELLS, COLS, ROWS};
pub use player::Player;
