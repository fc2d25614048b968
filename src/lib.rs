//! Sweep - terminal minesweeper library
//!
//! Board rules, the tick-driven reveal cascade, cosmetic effects and the
//! application screens, independent of any terminal backend.

pub mod animation;
pub mod app;
pub mod backdrop;
pub mod board;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod geometry;
pub mod logging;
pub mod particles;
pub mod scheduler;
pub mod session;

pub use app::{App, AppCommand, Screen};
pub use board::{Board, Cell, GameResult, RevealOutcome};
pub use config::{Cli, GameSettings, SettingsError};
pub use difficulty::Difficulty;
pub use geometry::{map_pointer_to_cell, BoardGeometry};
pub use scheduler::RevealScheduler;
pub use session::{GamePhase, SessionController};
