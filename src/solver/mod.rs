//! Perfect-play search: injective position keys, the transposition table of
//! proven outcomes, and the cache-aware depth-first solver.

mod cache;
mod engine;
mod key;

pub use cache::Outcome;
pub use engine::Solver;
