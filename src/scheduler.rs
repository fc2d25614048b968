//! Frame-paced flood fill.
//!
//! Revealing a cell with no adjacent mines doesn't recurse into its
//! neighbors. They are queued here instead and the session drains one task
//! per tick, so a large empty region opens as a visible ripple and the work
//! done in any single frame stays bounded.

use std::collections::{HashSet, VecDeque};

use crate::board::{self, Board, RevealOutcome};

/// FIFO queue of cells waiting to be revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealScheduler {
    queue: VecDeque<(usize, usize)>,
    /// Cells currently in `queue`, so a cell bordering two empty cells is only queued once.
    pending: HashSet<(usize, usize)>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a cell for reveal. Cells already waiting are not queued again.
    pub fn enqueue(&mut self, row: usize, col: usize) {
        if self.pending.insert((row, col)) {
            self.queue.push_back((row, col));
        }
    }

    /// Pop the oldest task and reveal it on `board`.
    ///
    /// Returns the cell and the reveal outcome, or `None` if nothing is queued.
    pub fn drain_one(&mut self, board: &mut Board) -> Option<((usize, usize), RevealOutcome)> {
        let (row, col) = self.queue.pop_front()?;
        self.pending.remove(&(row, col));
        let outcome = board::reveal_at(board, self, row, col);
        Some(((row, col), outcome))
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Next cell to be revealed, if any.
    pub fn peek(&self) -> Option<(usize, usize)> {
        self.queue.front().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(1, 1);
        scheduler.enqueue(2, 2);
        scheduler.enqueue(3, 3);

        assert_eq!(scheduler.len(), 3);
        assert_eq!(scheduler.peek(), Some((1, 1)));

        let mut board = Board::with_mines(5, &[(5, 5), (5, 4), (4, 5), (4, 4)]);
        let (first, _) = scheduler.drain_one(&mut board).unwrap();
        let (second, _) = scheduler.drain_one(&mut board).unwrap();
        assert_eq!(first, (1, 1));
        assert_eq!(second, (2, 2));
    }

    #[test]
    fn test_duplicate_enqueue_is_ignored() {
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(2, 3);
        scheduler.enqueue(2, 3);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_drain_empty_returns_none() {
        let mut scheduler = RevealScheduler::new();
        let mut board = Board::new(3);
        assert!(scheduler.drain_one(&mut board).is_none());
    }

    #[test]
    fn test_drain_one_reveals_single_cell() {
        let mut board = Board::with_mines(3, &[(1, 1)]);
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(2, 2);
        scheduler.enqueue(2, 3);

        let drained = scheduler.drain_one(&mut board);

        assert_eq!(drained, Some(((2, 2), RevealOutcome::Revealed)));
        assert!(board.cell_at(2, 2).revealed);
        assert!(!board.cell_at(2, 3).revealed);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_drained_cell_can_be_queued_again() {
        let mut board = Board::with_mines(3, &[(1, 1)]);
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(2, 2);
        scheduler.drain_one(&mut board);

        scheduler.enqueue(2, 2);
        assert_eq!(
            scheduler.drain_one(&mut board),
            Some(((2, 2), RevealOutcome::AlreadyHandled))
        );
    }

    #[test]
    fn test_flood_fill_drains_whole_region() {
        // Single mine in the corner: everything else is reachable from (1, 1)
        let mut board = Board::with_mines(6, &[(6, 6)]);
        let mut scheduler = RevealScheduler::new();

        board::reveal_at(&mut board, &mut scheduler, 1, 1);

        let mut ticks = 0;
        let mut last = RevealOutcome::Revealed;
        while let Some((_, outcome)) = scheduler.drain_one(&mut board) {
            ticks += 1;
            last = outcome;
            assert!(ticks <= 36, "flood fill did not terminate");
        }

        assert_eq!(last, RevealOutcome::RevealedWin);
        assert_eq!(board.revealed_count(), 35);
        assert!(!board.cell_at(6, 6).revealed);
    }

    #[test]
    fn test_clear() {
        let mut scheduler = RevealScheduler::new();
        scheduler.enqueue(1, 1);
        scheduler.enqueue(1, 2);
        scheduler.clear();

        assert!(scheduler.is_empty());
        assert_eq!(scheduler.peek(), None);

        // Previously pending cells are accepted again after a clear
        scheduler.enqueue(1, 1);
        assert_eq!(scheduler.len(), 1);
    }
}
