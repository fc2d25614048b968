//! Translation between screen coordinates and board cells.

/// Map a pointer position to the 1-indexed `(row, col)` of a square-celled board.
///
/// Returns `None` when the pointer lies outside the board.
pub fn map_pointer_to_cell(
    x: f64,
    y: f64,
    board_origin_x: f64,
    board_origin_y: f64,
    cell_size: f64,
    board_size: usize,
) -> Option<(usize, usize)> {
    BoardGeometry::square(board_origin_x, board_origin_y, cell_size, board_size).map_pointer(x, y)
}

/// Screen placement of a board. Recomputed whenever the viewport changes.
///
/// Cells may be wider than tall: terminal cells are two columns per board cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub board_size: usize,
}

impl BoardGeometry {
    pub fn square(origin_x: f64, origin_y: f64, cell_size: f64, board_size: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_width: cell_size,
            cell_height: cell_size,
            board_size,
        }
    }

    /// Cell under the pointer, or `None` outside `[1, board_size]` on either axis.
    pub fn map_pointer(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return None;
        }

        let col = ((x - self.origin_x) / self.cell_width).floor() + 1.0;
        let row = ((y - self.origin_y) / self.cell_height).floor() + 1.0;
        let max = self.board_size as f64;

        if !(row.is_finite() && col.is_finite()) {
            return None;
        }
        if row < 1.0 || col < 1.0 || row > max || col > max {
            return None;
        }

        Some((row as usize, col as usize))
    }

    /// Top-left screen position of a 1-indexed cell.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.origin_x + (col as f64 - 1.0) * self.cell_width,
            self.origin_y + (row as f64 - 1.0) * self.cell_height,
        )
    }

    /// Screen extent of the whole board.
    pub fn pixel_size(&self) -> (f64, f64) {
        (
            self.cell_width * self.board_size as f64,
            self.cell_height * self.board_size as f64,
        )
    }
}
