use crate::error::{MoveError, SetupError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELLS: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The one live board the search mutates in place. `drop_piece` and
/// `lift_piece` must stay strictly balanced: every caller that drops a
/// trial piece lifts it again before returning, so the board a search
/// entered with is the board it leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    fill: [u8; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            fill: [0; COLS],
        }
    }

    /// Build a board from raw cells, validating gravity: within each column
    /// every piece must rest on pieces below it, never on an empty cell.
    /// Row 0 is the top, row 5 the bottom.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Result<Self, SetupError> {
        let mut fill = [0u8; COLS];
        for col in 0..COLS {
            let mut above_empty = false;
            for row in (0..ROWS).rev() {
                match cells[row][col] {
                    Cell::Empty => above_empty = true,
                    _ if above_empty => {
                        return Err(SetupError::FloatingPiece { row, col });
                    }
                    _ => fill[col] += 1,
                }
            }
        }
        Ok(Board { cells, fill })
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.fill[col] as usize == ROWS
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.piece_count() as usize == CELLS
    }

    /// Total number of pieces on the board.
    pub fn piece_count(&self) -> u32 {
        self.fill.iter().map(|&f| f as u32).sum()
    }

    /// Columns that still have room, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = ROWS - 1 - self.fill[col] as usize;
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        self.cells[row][col] = cell;
        self.fill[col] += 1;
        Ok(row)
    }

    /// Remove the topmost piece in a column, returns the row it cleared.
    /// Exactly undoes the most recent `drop_piece` on that column.
    pub fn lift_piece(&mut self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.fill[col] == 0 {
            return Err(MoveError::ColumnEmpty(col));
        }

        let row = ROWS - self.fill[col] as usize;
        debug_assert_ne!(self.cells[row][col], Cell::Empty);
        self.cells[row][col] = Cell::Empty;
        self.fill[col] -= 1;
        Ok(row)
    }

    /// Longest run of same-owner cells through (row, col), across all four
    /// axes. The cell must be non-empty (it is the piece just played).
    /// A return value >= 4 means that piece completed a win.
    pub fn run_length_through(&self, row: usize, col: usize) -> usize {
        debug_assert_ne!(self.cells[row][col], Cell::Empty);

        // (dr, dc) per axis; each axis is walked in both directions.
        const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        let mut best = 0;
        for (dr, dc) in AXES {
            let run = self.run_toward(row, col, dr, dc) + self.run_toward(row, col, -dr, -dc);
            best = best.max(run);
        }
        best + 1
    }

    /// Count consecutive cells matching (row, col) strictly beyond it in
    /// direction (dr, dc), stopping at the grid edge.
    fn run_toward(&self, row: usize, col: usize, dr: i32, dc: i32) -> usize {
        let target = self.cells[row][col];
        let mut count = 0;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while r >= 0
            && r < ROWS as i32
            && c >= 0
            && c < COLS as i32
            && self.cells[r as usize][c as usize] == target
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
