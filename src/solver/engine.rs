use std::time::Instant;

use log::debug;

use crate::error::MoveError;
use crate::game::{Board, Player, CELLS, COLS};

use super::cache::{Outcome, TranspositionTable};
use super::key;

/// Candidate exploration order for the search. Ordering is a pure
/// heuristic: it decides how quickly a proof is found, never which result
/// is proven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CandidateOrder {
    /// Strongest connectivity first, ties in ascending column order.
    ScoreDescending,
    /// Plain ascending column order, ignoring scores.
    ColumnAscending,
}

/// Perfect-play engine for one game. Owns the single live board, the
/// transposition table, and the move counter whose parity attributes turns.
///
/// The board is shared by the whole search and mutated in place: trial
/// moves are dropped, explored, and lifted again in strict LIFO order, so
/// no search path ever observes a board other than its own line of play.
pub struct Solver {
    board: Board,
    table: TranspositionTable,
    move_count: u32,
    engine_side: Player,
    first_player: Player,
    nodes: u64,
}

impl Solver {
    /// Create a solver over a starting position.
    ///
    /// `side_to_move` is explicit configuration, never inferred from the
    /// board: the caller states whose turn the supplied position implies.
    /// `engine_side` is the side `play_reply` commits moves for.
    pub fn new(board: Board, side_to_move: Player, engine_side: Player) -> Self {
        let move_count = board.piece_count();
        // Anchor parity so that side_at(move_count) == side_to_move.
        let first_player = if move_count % 2 == 0 {
            side_to_move
        } else {
            side_to_move.other()
        };
        Solver {
            board,
            table: TranspositionTable::new(),
            move_count,
            engine_side,
            first_player,
            nodes: 0,
        }
    }

    /// Read-only snapshot of the live board, for display.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is at the current position.
    pub fn side_to_move(&self) -> Player {
        self.side_at(self.move_count)
    }

    pub fn engine_side(&self) -> Player {
        self.engine_side
    }

    /// Moves played so far, counted from the game's opening position.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Number of positions proven and memoized so far.
    pub fn cache_len(&self) -> usize {
        self.table.len()
    }

    /// Search nodes visited so far, across all replies.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn side_at(&self, move_count: u32) -> Player {
        if move_count % 2 == 0 {
            self.first_player
        } else {
            self.first_player.other()
        }
    }

    /// Apply the opponent's move, then search for and permanently commit the
    /// engine's reply. Returns `Ok(true)` if the committed reply wins the
    /// game on the spot, `Ok(false)` if it merely preserves the engine's
    /// proven result and play continues.
    ///
    /// The column is the one user-facing input: it must name a non-full
    /// column in 0-6, anything else is rejected before the board is touched.
    pub fn play_reply(&mut self, opponent_column: usize) -> Result<bool, MoveError> {
        if opponent_column >= COLS {
            return Err(MoveError::InvalidColumn(opponent_column));
        }
        if self.board.is_column_full(opponent_column) {
            return Err(MoveError::ColumnFull(opponent_column));
        }
        debug_assert_eq!(self.side_to_move(), self.engine_side.other());

        let opponent = self.engine_side.other();
        self.board
            .drop_piece(opponent_column, opponent.to_cell())
            .expect("column checked non-full");
        if self.board.is_full() {
            // The opponent's move filled the last cell: the game ends level
            // and there is no reply to search for.
            self.move_count += 1;
            return Ok(false);
        }
        // The opponent's move plus the reply committed below.
        self.move_count += 2;

        let start = Instant::now();
        let nodes_before = self.nodes;
        let own = self.engine_side.to_cell();

        // First pass: take an immediate win if one exists, discard replies
        // already proven to hand the opponent a forced win, and score the
        // rest by the run length they create.
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for col in self.board.legal_columns() {
            let row = self
                .board
                .drop_piece(col, own)
                .expect("column reported legal");
            let run = self.board.run_length_through(row, col);
            if run >= 4 {
                debug!("reply {col} wins immediately");
                return Ok(true);
            }
            let child_key = key::encode(&self.board);
            self.board.lift_piece(col).expect("piece was just dropped");
            if self.table.get(child_key) == Some(Outcome::MoverWin) {
                // The opponent, to move there, forces a win. Skip without
                // searching.
                continue;
            }
            candidates.push((run, col));
        }

        // Strongest connectivity first; stable sort keeps ascending column
        // order among ties.
        candidates.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, col) in candidates {
            self.board
                .drop_piece(col, own)
                .expect("column reported legal");
            if self.solve(self.move_count) == Outcome::NoMoverWin {
                // The opponent cannot force a win from here: commit.
                debug!(
                    "reply {col} proven safe in {:?} ({} nodes, {} cached positions)",
                    start.elapsed(),
                    self.nodes - nodes_before,
                    self.table.len()
                );
                return Ok(false);
            }
            self.board.lift_piece(col).expect("piece was just dropped");
        }

        // The game is solved: from any reachable position some reply
        // survives the loop above.
        unreachable!("no reply avoids a forced loss; position should not be reachable");
    }

    /// Prove the outcome of the current board for the side to move at
    /// `move_count`. The board is restored exactly on every return path.
    fn solve(&mut self, move_count: u32) -> Outcome {
        self.solve_ordered(move_count, CandidateOrder::ScoreDescending)
    }

    fn solve_ordered(&mut self, move_count: u32, order: CandidateOrder) -> Outcome {
        self.nodes += 1;

        if move_count == CELLS as u32 {
            // Full board: a draw is not a win for the mover.
            return Outcome::NoMoverWin;
        }

        let mover = self.side_at(move_count).to_cell();
        let parent_key = key::encode(&self.board);
        if let Some(proven) = self.table.get(parent_key) {
            return proven;
        }

        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for col in self.board.legal_columns() {
            let row = self
                .board
                .drop_piece(col, mover)
                .expect("column reported legal");
            let run = self.board.run_length_through(row, col);
            if run >= 4 {
                // This single move wins outright. The child position is lost
                // for whoever would move there; the parent is won for the
                // mover.
                let child_key = key::encode(&self.board);
                self.table.put(child_key, Outcome::NoMoverWin);
                self.board.lift_piece(col).expect("piece was just dropped");
                self.table.put(parent_key, Outcome::MoverWin);
                return Outcome::MoverWin;
            }
            self.board.lift_piece(col).expect("piece was just dropped");
            candidates.push((run, col));
        }

        // Candidates were collected in ascending column order; the stable
        // sort keeps that order among equal scores.
        if order == CandidateOrder::ScoreDescending {
            candidates.sort_by(|a, b| b.0.cmp(&a.0));
        }

        for (_, col) in candidates {
            self.board
                .drop_piece(col, mover)
                .expect("column reported legal");
            let child = self.solve_ordered(move_count + 1, order);
            self.board.lift_piece(col).expect("piece was just dropped");
            if child == Outcome::NoMoverWin {
                // The opponent cannot force their own win after this move,
                // so the mover's result is proven; remaining candidates only
                // cost time.
                self.table.put(parent_key, Outcome::MoverWin);
                return Outcome::MoverWin;
            }
        }

        self.table.put(parent_key, Outcome::NoMoverWin);
        Outcome::NoMoverWin
    }
}
