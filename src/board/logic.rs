//! Minesweeper board logic: mine placement, adjacency counts, reveal and flag
//! mutation, win detection.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Board, GameResult, RevealOutcome};
use crate::scheduler::RevealScheduler;

/// Get valid neighbor coordinates for a cell.
///
/// Returns the 1-indexed `(row, col)` pairs of all in-bounds neighbors (up to
/// 8 directions) of a cell on a `size x size` board.
pub fn get_neighbors(row: usize, col: usize, size: usize) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(8);

    for d_row in -1i64..=1 {
        for d_col in -1i64..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }

            let new_row = row as i64 + d_row;
            let new_col = col as i64 + d_col;

            if new_row >= 1 && new_row <= size as i64 && new_col >= 1 && new_col <= size as i64 {
                neighbors.push((new_row as usize, new_col as usize));
            }
        }
    }

    neighbors
}

/// Whether `(row, col)` lies in the 3x3 exclusion zone around `(avoid_row, avoid_col)`.
fn in_exclusion_zone(row: usize, col: usize, avoid_row: usize, avoid_col: usize) -> bool {
    row.abs_diff(avoid_row) <= 1 && col.abs_diff(avoid_col) <= 1
}

/// Place mines on the board, avoiding the first click cell and its neighbors.
///
/// Every candidate cell (not already a mine, outside the exclusion zone) is
/// equally likely to receive a mine. Adjacency counts are recomputed
/// afterwards and the board stops waiting for its first click.
///
/// Precondition: `mine_count` must not exceed the number of candidate cells.
/// A board that cannot hold the requested mines is filled as far as possible
/// and its mine count reflects what was actually placed.
pub fn place_mines<R: Rng>(
    board: &mut Board,
    mine_count: usize,
    avoid_row: usize,
    avoid_col: usize,
    rng: &mut R,
) {
    let mut candidates: Vec<(usize, usize)> = Vec::new();
    for row in 1..=board.size {
        for col in 1..=board.size {
            if !board.cell_at(row, col).has_mine
                && !in_exclusion_zone(row, col, avoid_row, avoid_col)
            {
                candidates.push((row, col));
            }
        }
    }

    if mine_count > candidates.len() {
        log::warn!(
            "Board saturated: requested {} mines but only {} cells are free",
            mine_count,
            candidates.len()
        );
    }

    candidates.shuffle(rng);
    let mut placed = 0;
    for &(row, col) in candidates.iter().take(mine_count) {
        board.cell_mut(row, col).has_mine = true;
        placed += 1;
    }

    board.mine_count += placed;
    board.first_click_pending = false;
    calculate_adjacent_counts(board);

    log::debug!(
        "Placed {} mines on {}x{} board avoiding ({}, {})",
        placed,
        board.size,
        board.size,
        avoid_row,
        avoid_col
    );
}

/// Calculate adjacent mine counts for all cells.
///
/// For each non-mine cell, counts how many neighboring cells contain mines.
pub fn calculate_adjacent_counts(board: &mut Board) {
    let size = board.size;
    for row in 1..=size {
        for col in 1..=size {
            if board.cell_at(row, col).has_mine {
                continue;
            }

            let count = get_neighbors(row, col, size)
                .into_iter()
                .filter(|&(n_row, n_col)| board.cell_at(n_row, n_col).has_mine)
                .count() as u8;

            board.cell_mut(row, col).adjacent_mines = count;
        }
    }
}

/// Reveal a cell at the given position.
///
/// - Out of bounds, flagged, already revealed, or a finished board: no-op.
/// - A mine ends the game in a loss.
/// - A cell with no adjacent mines schedules its hidden neighbors on
///   `scheduler`, which reveals them one per tick.
/// - Reaching `revealed_count == size² - mine_count` ends the game in a win,
///   even when the cell just revealed was a mine.
pub fn reveal_at(
    board: &mut Board,
    scheduler: &mut RevealScheduler,
    row: usize,
    col: usize,
) -> RevealOutcome {
    if board.is_game_over() {
        return RevealOutcome::AlreadyHandled;
    }

    let Some(cell) = board.get(row, col) else {
        return RevealOutcome::AlreadyHandled;
    };

    if cell.flagged || cell.revealed {
        return RevealOutcome::AlreadyHandled;
    }

    let cell = board.cell_mut(row, col);
    cell.revealed = true;
    let has_mine = cell.has_mine;
    let adjacent_mines = cell.adjacent_mines;
    board.revealed_count += 1;

    if has_mine {
        board.result = Some(GameResult::Lost);
        log::info!("Mine revealed at ({}, {})", row, col);
    } else if adjacent_mines == 0 {
        for (n_row, n_col) in get_neighbors(row, col, board.size) {
            let neighbor = board.cell_at(n_row, n_col);
            if !neighbor.revealed && !neighbor.flagged {
                scheduler.enqueue(n_row, n_col);
            }
        }
    }

    // Reaching the win count wins, whichever branch ran above
    if check_win_condition(board) {
        log::info!("Board cleared after {} reveals", board.revealed_count);
        RevealOutcome::RevealedWin
    } else if has_mine {
        RevealOutcome::RevealedMine
    } else {
        RevealOutcome::Revealed
    }
}

/// Toggle flag on a cell.
///
/// Returns the new flagged state, or `None` if the cell is out of bounds or
/// already revealed (no-op).
pub fn toggle_flag(board: &mut Board, row: usize, col: usize) -> Option<bool> {
    if !board.in_bounds(row, col) || board.cell_at(row, col).revealed {
        return None;
    }

    let cell = board.cell_mut(row, col);
    cell.flagged = !cell.flagged;
    let flagged = cell.flagged;

    if flagged {
        board.flagged_count += 1;
    } else {
        board.flagged_count -= 1;
    }

    log::debug!("Flag at ({}, {}) -> {}", row, col, flagged);
    Some(flagged)
}

/// Reveal all mines on the board (called on game loss).
///
/// Exposes mines for rendering only; `revealed_count` is left untouched.
pub fn reveal_all_mines(board: &mut Board) {
    for row in board.grid.iter_mut() {
        for cell in row.iter_mut() {
            if cell.has_mine {
                cell.revealed = true;
            }
        }
    }
}

/// Check if the player has won the game, recording the win on the board.
///
/// Win condition: every non-mine cell is revealed.
fn check_win_condition(board: &mut Board) -> bool {
    if board.revealed_count == board.safe_cell_count() {
        board.result = Some(GameResult::Won);
        true
    } else {
        false
    }
}
