//! # Connect Four Oracle
//!
//! A perfect-play Connect Four engine: given any legal position it proves,
//! by exhaustive depth-first search over a transposition table, whether the
//! side to move can force a win, and commits a reply that preserves the
//! proven result. A terminal UI built with Ratatui lets a human play
//! against the engine.
//!
//! ## Modules
//!
//! - [`game`] — Board representation, drop/undo, run-length detection
//! - [`solver`] — Position keys, transposition table, game-tree search
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod solver;
pub mod ui;
