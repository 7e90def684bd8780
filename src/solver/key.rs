use crate::game::{Board, Cell, COLS, ROWS};

/// Encode a board as a compact integer key for the transposition table.
///
/// Each column packs into 7 bits: a stop bit, then one ownership bit per
/// piece from the bottom of the column up (1 for Red). A column therefore
/// maps to a value in 1..=127 that records both how many pieces it holds
/// and who owns each, and the seven columns fold into 49 bits. Two boards
/// produce the same key exactly when every cell matches, so the table can
/// never confuse two positions.
pub fn encode(board: &Board) -> u64 {
    let mut key = 0u64;
    for col in 0..COLS {
        let mut packed = 1u64; // stop bit
        for row in (0..ROWS).rev() {
            match board.get(row, col) {
                Cell::Empty => break, // gravity: everything above is empty too
                cell => packed = (packed << 1) | (cell == Cell::Red) as u64,
            }
        }
        key = (key << 7) | packed;
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_board_key_is_stable() {
        assert_eq!(encode(&Board::new()), encode(&Board::new()));
    }

    #[test]
    fn test_owner_changes_key() {
        let mut red = Board::new();
        red.drop_piece(0, Cell::Red).unwrap();
        let mut yellow = Board::new();
        yellow.drop_piece(0, Cell::Yellow).unwrap();
        assert_ne!(encode(&red), encode(&yellow));
    }

    #[test]
    fn test_column_changes_key() {
        let mut keys = HashSet::new();
        for col in 0..COLS {
            let mut board = Board::new();
            board.drop_piece(col, Cell::Red).unwrap();
            assert!(keys.insert(encode(&board)), "duplicate key for column {col}");
        }
    }

    #[test]
    fn test_stack_order_changes_key() {
        let mut a = Board::new();
        a.drop_piece(2, Cell::Red).unwrap();
        a.drop_piece(2, Cell::Yellow).unwrap();

        let mut b = Board::new();
        b.drop_piece(2, Cell::Yellow).unwrap();
        b.drop_piece(2, Cell::Red).unwrap();

        assert_ne!(encode(&a), encode(&b));
    }

    #[test]
    fn test_extra_piece_changes_key() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        let key_one = encode(&board);
        board.drop_piece(3, Cell::Red).unwrap();
        assert_ne!(key_one, encode(&board));
    }

    #[test]
    fn test_keys_distinct_over_many_boards() {
        // The key must be injective, not merely non-constant: enumerate every
        // two-piece board and demand pairwise-distinct keys. This would fail
        // hard for an encoding that collapses into a handful of values.
        let mut boards = HashSet::new();
        let mut keys = HashSet::new();
        for first_col in 0..COLS {
            for second_col in 0..COLS {
                for first in [Cell::Red, Cell::Yellow] {
                    for second in [Cell::Red, Cell::Yellow] {
                        let mut board = Board::new();
                        board.drop_piece(first_col, first).unwrap();
                        board.drop_piece(second_col, second).unwrap();
                        if boards.insert(board) {
                            keys.insert(encode(&board));
                        }
                    }
                }
            }
        }
        assert_eq!(boards.len(), keys.len());
    }
}
