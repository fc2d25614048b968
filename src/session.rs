//! Game session: lifecycle, first-click arming, timing and input entry points.
//!
//! A session owns exactly one [`Board`] together with the reveal queue and the
//! visual effects scoped to it. Starting a new game replaces all of them.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::{AnimationKind, AnimationTimeline};
use crate::board::{self, Board, GameResult, RevealOutcome};
use crate::config::GameSettings;
use crate::constants::{
    CONFETTI_PARTICLE_COUNT, EXPLOSION_PARTICLE_COUNT, FLAG_ANIMATION_SECONDS,
    REVEAL_ANIMATION_SECONDS,
};
use crate::difficulty::Difficulty;
use crate::particles::{cell_center, ParticleKind, ParticleSystem};
use crate::scheduler::RevealScheduler;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No game has been started yet.
    NotStarted,
    /// Board allocated, mines are placed by the first reveal.
    FirstClickPending,
    InProgress,
    Over(GameResult),
}

impl GamePhase {
    /// Whether the clock runs and actions are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::FirstClickPending | Self::InProgress)
    }
}

#[derive(Debug)]
pub struct SessionController {
    board: Board,
    scheduler: RevealScheduler,
    animations: AnimationTimeline,
    particles: ParticleSystem,
    phase: GamePhase,
    settings: GameSettings,
    mine_count: usize,
    elapsed_seconds: f64,
    flag_mode: bool,
    rng: StdRng,
}

impl SessionController {
    /// Create an idle session seeded from system entropy.
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Create an idle session with reproducible mine placement and effects.
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, rng: StdRng) -> Self {
        Self {
            board: Board::new(settings.board_size),
            scheduler: RevealScheduler::new(),
            animations: AnimationTimeline::new(),
            particles: ParticleSystem::new(),
            phase: GamePhase::NotStarted,
            settings,
            mine_count: settings.mine_count(),
            elapsed_seconds: 0.0,
            flag_mode: false,
            rng,
        }
    }

    /// Start a fresh game, discarding the current board and every pending
    /// reveal, animation and particle.
    pub fn start_new_game(&mut self, difficulty: Difficulty, board_size: usize) {
        self.settings = GameSettings {
            difficulty,
            board_size,
        };
        self.mine_count = difficulty.mine_count_for(board_size);
        self.install_board(Board::new(board_size));
        self.phase = GamePhase::FirstClickPending;

        log::info!(
            "New {} game: {}x{} with {} mines",
            difficulty.name(),
            board_size,
            board_size,
            self.mine_count
        );
    }

    /// Restart with the current difficulty and board size.
    pub fn reset_game(&mut self) {
        self.start_new_game(self.settings.difficulty, self.settings.board_size);
    }

    /// Start a game on a board whose mines are already laid out.
    pub fn start_with_board(&mut self, board: Board) {
        self.settings.board_size = board.size();
        self.mine_count = board.mine_count();
        self.install_board(board);
        self.phase = GamePhase::InProgress;
    }

    fn install_board(&mut self, board: Board) {
        self.board = board;
        self.scheduler.clear();
        self.animations.clear();
        self.particles.clear();
        self.elapsed_seconds = 0.0;
        self.flag_mode = false;
    }

    /// Advance the session by one frame: clock, one queued reveal, effects.
    pub fn tick(&mut self, dt: f64) {
        if self.phase.is_active() {
            self.elapsed_seconds += dt;
        }

        if let Some(((row, col), outcome)) = self.scheduler.drain_one(&mut self.board) {
            self.record_reveal(row, col, outcome);
        }

        self.animations.tick(dt);
        self.particles.tick(dt);
    }

    /// Reveal a cell (or toggle its flag while flag mode is on).
    ///
    /// The first reveal of a game places the mines around the clicked cell.
    /// Ignored before a game starts and after it ends.
    pub fn handle_primary_action(&mut self, row: usize, col: usize) -> RevealOutcome {
        if !self.phase.is_active() {
            return RevealOutcome::AlreadyHandled;
        }
        if self.flag_mode {
            self.handle_secondary_action(row, col);
            return RevealOutcome::AlreadyHandled;
        }
        if !self.board.in_bounds(row, col) {
            return RevealOutcome::AlreadyHandled;
        }

        if self.phase == GamePhase::FirstClickPending {
            board::place_mines(&mut self.board, self.mine_count, row, col, &mut self.rng);
            self.mine_count = self.board.mine_count();
            self.phase = GamePhase::InProgress;
        }

        let outcome = board::reveal_at(&mut self.board, &mut self.scheduler, row, col);
        self.record_reveal(row, col, outcome);
        outcome
    }

    /// Toggle the flag on a cell. Returns the new flagged state, or `None`
    /// when nothing changed.
    pub fn handle_secondary_action(&mut self, row: usize, col: usize) -> Option<bool> {
        if !self.phase.is_active() {
            return None;
        }

        let flagged = board::toggle_flag(&mut self.board, row, col)?;
        self.animations
            .push(AnimationKind::FlagToggle, row, col, FLAG_ANIMATION_SECONDS);
        Some(flagged)
    }

    /// Switch primary actions between revealing and flagging.
    pub fn toggle_flag_mode(&mut self) -> bool {
        self.flag_mode = !self.flag_mode;
        self.flag_mode
    }

    fn record_reveal(&mut self, row: usize, col: usize, outcome: RevealOutcome) {
        match outcome {
            RevealOutcome::AlreadyHandled => {}
            RevealOutcome::Revealed => {
                self.animations
                    .push(AnimationKind::Reveal, row, col, REVEAL_ANIMATION_SECONDS);
            }
            RevealOutcome::RevealedMine => {
                self.animations
                    .push(AnimationKind::Reveal, row, col, REVEAL_ANIMATION_SECONDS);
                self.phase = GamePhase::Over(GameResult::Lost);
                self.scheduler.clear();
                board::reveal_all_mines(&mut self.board);
                self.particles.spawn_burst(
                    &mut self.rng,
                    ParticleKind::Explosion,
                    cell_center(row, col),
                    EXPLOSION_PARTICLE_COUNT,
                );
                log::info!("Game lost after {:.1}s", self.elapsed_seconds);
            }
            RevealOutcome::RevealedWin => {
                self.animations
                    .push(AnimationKind::Reveal, row, col, REVEAL_ANIMATION_SECONDS);
                self.phase = GamePhase::Over(GameResult::Won);
                self.scheduler.clear();
                let middle = self.board.size() / 2 + 1;
                self.particles.spawn_burst(
                    &mut self.rng,
                    ParticleKind::Confetti,
                    cell_center(middle, middle),
                    CONFETTI_PARTICLE_COUNT,
                );
                log::info!("Game won in {:.1}s", self.elapsed_seconds);
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Over(GameResult::Won)
    }

    pub fn flag_mode(&self) -> bool {
        self.flag_mode
    }

    /// Mines minus flags; negative when over-flagged.
    pub fn mines_remaining(&self) -> i64 {
        self.board.mines_remaining()
    }

    pub fn pending_reveals(&self) -> usize {
        self.scheduler.len()
    }

    pub fn animations(&self) -> &AnimationTimeline {
        &self.animations
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }
}
