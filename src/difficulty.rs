//! Difficulty levels and the fixed mine-density table.

/// Difficulty levels, each mapping to a fraction of the board that holds mines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Beginner)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Expert => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }

    /// Fraction of the board's cells that become mines.
    pub fn density(&self) -> f64 {
        match self {
            Self::Beginner => 0.12,
            Self::Intermediate => 0.16,
            Self::Expert => 0.21,
        }
    }

    /// Mines for a `board_size x board_size` board: floored, never fewer than one.
    pub fn mine_count_for(&self, board_size: usize) -> usize {
        let cells = (board_size * board_size) as f64;
        ((cells * self.density()).floor() as usize).max(1)
    }

    /// Next difficulty in the cycle, wrapping around.
    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    /// Previous difficulty in the cycle, wrapping around.
    pub fn prev(&self) -> Self {
        Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len())
    }
}
