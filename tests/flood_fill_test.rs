//! Integration test: Mine placement and the tick-driven reveal cascade
//!
//! Drives the board and scheduler directly, with seeded placement, to check
//! the safe first click, adjacency counts and flood-fill termination.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sweep::board::{get_neighbors, place_mines, reveal_at, toggle_flag, Board, RevealOutcome};
use sweep::scheduler::RevealScheduler;

/// Drain the scheduler one task per tick until it is empty.
/// Returns the number of ticks taken.
fn drain(board: &mut Board, scheduler: &mut RevealScheduler) -> usize {
    let mut ticks = 0;
    while scheduler.drain_one(board).is_some() {
        ticks += 1;
        assert!(
            ticks <= board.total_cells(),
            "cascade did not terminate within size^2 ticks"
        );
    }
    ticks
}

// =============================================================================
// Mine Placement
// =============================================================================

#[test]
fn test_first_click_neighborhood_is_always_clear() {
    for seed in 0..50u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = Board::new(8);
        let (row, col) = (1 + (seed as usize % 8), 1 + (seed as usize * 3 % 8));

        place_mines(&mut board, 20, row, col, &mut rng);

        assert_eq!(board.mine_count(), 20);
        let placed = board.cells().filter(|(_, cell)| cell.has_mine).count();
        assert_eq!(placed, 20, "seed {}", seed);
        assert!(!board.cell_at(row, col).has_mine);
        for (n_row, n_col) in get_neighbors(row, col, 8) {
            assert!(
                !board.cell_at(n_row, n_col).has_mine,
                "seed {} placed a mine next to the first click",
                seed
            );
        }
    }
}

#[test]
fn test_adjacency_matches_neighbor_mines() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut board = Board::new(12);
    place_mines(&mut board, 30, 6, 6, &mut rng);

    for ((row, col), cell) in board.cells() {
        if cell.has_mine {
            continue;
        }
        let expected = get_neighbors(row, col, 12)
            .into_iter()
            .filter(|&(r, c)| board.cell_at(r, c).has_mine)
            .count();
        assert_eq!(cell.adjacent_mines as usize, expected, "cell ({}, {})", row, col);
    }
}

#[test]
fn test_corner_first_click_on_small_board() {
    // 5x5 with a corner click excludes only 4 cells, leaving 21 candidates
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut board = Board::new(5);
    place_mines(&mut board, 21, 1, 1, &mut rng);

    assert_eq!(board.mine_count(), 21);
    assert!(!board.cell_at(1, 1).has_mine);
    assert!(!board.cell_at(2, 2).has_mine);
}

// =============================================================================
// Flood Fill
// =============================================================================

#[test]
fn test_cascade_clears_zero_region_and_border() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut board = Board::new(16);
    let mut scheduler = RevealScheduler::new();
    place_mines(&mut board, 25, 8, 8, &mut rng);

    reveal_at(&mut board, &mut scheduler, 8, 8);
    drain(&mut board, &mut scheduler);

    // Every revealed zero has all of its neighbors revealed
    for ((row, col), cell) in board.cells() {
        if cell.revealed && cell.adjacent_mines == 0 {
            for (n_row, n_col) in get_neighbors(row, col, 16) {
                assert!(board.cell_at(n_row, n_col).revealed);
            }
        }
        assert!(!(cell.revealed && cell.has_mine));
    }
}

#[test]
fn test_empty_board_clears_in_one_cascade() {
    let mut board = Board::with_mines(10, &[]);
    let mut scheduler = RevealScheduler::new();

    assert_eq!(
        reveal_at(&mut board, &mut scheduler, 5, 5),
        RevealOutcome::Revealed
    );
    let ticks = drain(&mut board, &mut scheduler);

    assert_eq!(ticks, 99);
    assert!(board.is_won());
    assert_eq!(board.revealed_count(), 100);
}

#[test]
fn test_single_mine_board_is_won_by_cascade() {
    let mut board = Board::with_mines(10, &[(10, 10)]);
    let mut scheduler = RevealScheduler::new();

    assert_eq!(reveal_at(&mut board, &mut scheduler, 1, 1), RevealOutcome::Revealed);
    let ticks = drain(&mut board, &mut scheduler);

    assert!(ticks >= 98);
    assert!(board.is_won());
    assert!(!board.cell_at(10, 10).revealed);
}

#[test]
fn test_flags_block_the_cascade() {
    let mut board = Board::with_mines(6, &[(6, 6)]);
    let mut scheduler = RevealScheduler::new();
    assert_eq!(toggle_flag(&mut board, 3, 3), Some(true));

    reveal_at(&mut board, &mut scheduler, 1, 1);
    drain(&mut board, &mut scheduler);

    assert!(!board.cell_at(3, 3).revealed);
    assert!(board.cell_at(3, 3).flagged);
    assert!(!board.is_won());
    assert_eq!(board.revealed_count(), board.safe_cell_count() - 1);

    // Unflag and reveal the last safe cell by hand
    assert_eq!(toggle_flag(&mut board, 3, 3), Some(false));
    assert_eq!(
        reveal_at(&mut board, &mut scheduler, 3, 3),
        RevealOutcome::RevealedWin
    );
}
