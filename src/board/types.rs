//! Minesweeper board data structures.
//!
//! Rows and columns are 1-indexed throughout: valid coordinates lie in
//! `[1, size]` on both axes.

/// Represents a single cell in the minesweeper grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Whether this cell contains a mine.
    pub has_mine: bool,
    /// Whether this cell has been revealed.
    pub revealed: bool,
    /// Whether this cell has been flagged by the player.
    pub flagged: bool,
    /// Number of adjacent mines (0-8). Only meaningful when `has_mine` is false.
    pub adjacent_mines: u8,
}

/// How a finished board ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

/// Outcome of a single reveal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Out of bounds, already revealed, flagged, or the board is finished.
    AlreadyHandled,
    Revealed,
    RevealedMine,
    RevealedWin,
}

impl RevealOutcome {
    /// Whether the reveal changed the board.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::AlreadyHandled)
    }
}

/// Square minesweeper board. Owns its cells exclusively.
#[derive(Debug, Clone)]
pub struct Board {
    /// The game grid, stored as grid[row - 1][col - 1].
    pub(crate) grid: Vec<Vec<Cell>>,
    pub(crate) size: usize,
    pub(crate) mine_count: usize,
    pub(crate) revealed_count: usize,
    pub(crate) flagged_count: usize,
    /// Mines are not placed until the first reveal, so the first click is safe.
    pub(crate) first_click_pending: bool,
    pub(crate) result: Option<GameResult>,
}

impl Board {
    /// Allocate a `size x size` board of unrevealed, unflagged, mine-free cells.
    ///
    /// `size` must be at least 1.
    pub fn new(size: usize) -> Self {
        Self {
            grid: vec![vec![Cell::default(); size]; size],
            size,
            mine_count: 0,
            revealed_count: 0,
            flagged_count: 0,
            first_click_pending: true,
            result: None,
        }
    }

    /// Build a board with mines at fixed 1-indexed positions and adjacency
    /// counts already computed. Positions outside the board are ignored.
    pub fn with_mines(size: usize, mines: &[(usize, usize)]) -> Self {
        let mut board = Self::new(size);
        for &(row, col) in mines {
            if board.in_bounds(row, col) && !board.grid[row - 1][col - 1].has_mine {
                board.grid[row - 1][col - 1].has_mine = true;
                board.mine_count += 1;
            }
        }
        super::logic::calculate_adjacent_counts(&mut board);
        board.first_click_pending = false;
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged_count
    }

    pub fn first_click_pending(&self) -> bool {
        self.first_click_pending
    }

    /// Non-mine cells; revealing all of them wins the game.
    pub fn safe_cell_count(&self) -> usize {
        self.total_cells().saturating_sub(self.mine_count)
    }

    /// Returns the number of mines remaining (total mines - flags placed).
    /// Can be negative if the player has placed more flags than mines.
    pub fn mines_remaining(&self) -> i64 {
        self.mine_count as i64 - self.flagged_count as i64
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_won(&self) -> bool {
        self.result == Some(GameResult::Won)
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        (1..=self.size).contains(&row) && (1..=self.size).contains(&col)
    }

    /// Read-only cell access.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside `[1, size]`; use [`Board::get`] when
    /// the coordinates are not already known to be valid.
    pub fn cell_at(&self, row: usize, col: usize) -> &Cell {
        &self.grid[row - 1][col - 1]
    }

    /// Bounds-checked cell access.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            Some(&self.grid[row - 1][col - 1])
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.grid[row - 1][col - 1]
    }

    /// Iterate over every cell with its 1-indexed coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| ((r + 1, c + 1), cell))
        })
    }
}
