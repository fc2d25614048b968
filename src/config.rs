//! Game settings and command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::build_info::BUILD_LABEL;
use crate::constants::{DEFAULT_BOARD_SIZE, EXCLUSION_ZONE_CELLS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::difficulty::Difficulty;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Board size must be positive")]
    NonPositiveBoardSize,
    #[error("Board size {size} is outside the supported range {min}..={max}")]
    BoardSizeOutOfRange { size: usize, min: usize, max: usize },
    #[error("{mines} mines do not fit on a {size}x{size} board with a safe first click")]
    TooManyMines { size: usize, mines: usize },
}

/// A validated difficulty and board size selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub board_size: usize,
}

impl GameSettings {
    pub fn new(difficulty: Difficulty, board_size: usize) -> Result<Self, SettingsError> {
        if board_size == 0 {
            return Err(SettingsError::NonPositiveBoardSize);
        }
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(SettingsError::BoardSizeOutOfRange {
                size: board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }

        // The first click keeps a 3x3 zone clear; the rest must hold every mine.
        let mines = difficulty.mine_count_for(board_size);
        if mines + EXCLUSION_ZONE_CELLS > board_size * board_size {
            return Err(SettingsError::TooManyMines {
                size: board_size,
                mines,
            });
        }

        Ok(Self {
            difficulty,
            board_size,
        })
    }

    pub fn mine_count(&self) -> usize {
        self.difficulty.mine_count_for(self.board_size)
    }

    /// Same board size, different difficulty.
    pub fn with_difficulty(&self, difficulty: Difficulty) -> Result<Self, SettingsError> {
        Self::new(difficulty, self.board_size)
    }

    /// Same difficulty, different board size.
    pub fn with_board_size(&self, board_size: usize) -> Result<Self, SettingsError> {
        Self::new(self.difficulty, board_size)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Beginner,
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

/// Difficulty names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

/// Sweep - terminal minesweeper
#[derive(Debug, Parser)]
#[command(name = "sweep", version = BUILD_LABEL, about)]
pub struct Cli {
    /// Starting difficulty (changeable from the options screen)
    #[arg(short, long, value_enum, default_value = "beginner")]
    pub difficulty: DifficultyArg,

    /// Board side length in cells
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Seed for mine placement and effects, for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used with --log-file (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Cli {
    pub fn settings(&self) -> Result<GameSettings, SettingsError> {
        GameSettings::new(self.difficulty.into(), self.size)
    }
}
