//! The minesweeper board: grid ownership, mine placement, reveal and flag rules.

pub mod logic;
mod types;

pub use logic::{
    calculate_adjacent_counts, get_neighbors, place_mines, reveal_all_mines, reveal_at,
    toggle_flag,
};
pub use types::{Board, Cell, GameResult, RevealOutcome};
