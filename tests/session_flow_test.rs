//! Integration test: Session lifecycle
//!
//! Plays whole games through `SessionController` and `App`: first-click
//! arming, frame-paced cascades, win/loss transitions and resets.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sweep::app::{App, MenuInput, PlayInput, Screen};
use sweep::board::{place_mines, Board, GameResult, RevealOutcome};
use sweep::config::GameSettings;
use sweep::constants::FRAME_INTERVAL_MS;
use sweep::difficulty::Difficulty;
use sweep::session::{GamePhase, SessionController};

const DT: f64 = FRAME_INTERVAL_MS as f64 / 1000.0;

fn session() -> SessionController {
    SessionController::with_seed(GameSettings::default(), 2024)
}

/// Tick until the reveal queue is empty, with a hard cap of size^2 frames.
fn run_cascade(session: &mut SessionController) {
    let limit = session.board().total_cells();
    for _ in 0..limit {
        if session.pending_reveals() == 0 {
            return;
        }
        session.tick(DT);
    }
    assert_eq!(session.pending_reveals(), 0, "cascade ran past size^2 ticks");
}

/// Reveal every safe cell the player can see, like a perfect player would.
fn clear_board(session: &mut SessionController) {
    let size = session.board().size();
    for row in 1..=size {
        for col in 1..=size {
            let cell = session.board().cell_at(row, col);
            if !cell.has_mine && !cell.revealed {
                session.handle_primary_action(row, col);
                run_cascade(session);
            }
        }
    }
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_perfect_play_wins() {
    let mut session = session();
    session.start_new_game(Difficulty::Intermediate, 12);

    session.handle_primary_action(6, 6);
    run_cascade(&mut session);
    clear_board(&mut session);

    assert!(session.is_won());
    assert_eq!(session.phase(), GamePhase::Over(GameResult::Won));
    assert_eq!(
        session.board().revealed_count(),
        session.board().safe_cell_count()
    );
    assert!(!session.particles().is_empty());
}

#[test]
fn test_detonation_loses_and_exposes_mines() {
    let mut session = session();
    session.start_new_game(Difficulty::Expert, 10);
    session.handle_primary_action(1, 1);

    let mine = session
        .board()
        .cells()
        .find(|(_, cell)| cell.has_mine)
        .map(|(pos, _)| pos)
        .unwrap();
    assert_eq!(
        session.handle_primary_action(mine.0, mine.1),
        RevealOutcome::RevealedMine
    );

    assert_eq!(session.phase(), GamePhase::Over(GameResult::Lost));
    assert_eq!(session.pending_reveals(), 0);
    for (_, cell) in session.board().cells() {
        if cell.has_mine {
            assert!(cell.revealed);
        }
    }
}

#[test]
fn test_prepared_board_from_seeded_placement() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut board = Board::new(9);
    place_mines(&mut board, 10, 5, 5, &mut rng);

    let mut session = session();
    session.start_with_board(board);
    assert_eq!(session.phase(), GamePhase::InProgress);
    assert_eq!(session.mine_count(), 10);

    session.handle_primary_action(5, 5);
    run_cascade(&mut session);
    clear_board(&mut session);
    assert!(session.is_won());
}

#[test]
fn test_win_on_third_distinct_reveal() {
    let mut session = session();
    session.start_with_board(Board::with_mines(2, &[(2, 2)]));

    assert_eq!(session.handle_primary_action(2, 1), RevealOutcome::Revealed);
    assert_eq!(session.handle_primary_action(2, 1), RevealOutcome::AlreadyHandled);
    assert_eq!(session.handle_primary_action(1, 2), RevealOutcome::Revealed);
    assert!(!session.is_over());
    assert_eq!(session.handle_primary_action(1, 1), RevealOutcome::RevealedWin);
    assert!(session.is_won());
}

#[test]
fn test_over_flagging_goes_negative() {
    let mut session = session();
    session.start_with_board(Board::with_mines(5, &[(1, 1)]));

    for col in 1..=3 {
        session.handle_secondary_action(5, col);
    }
    assert_eq!(session.mines_remaining(), -2);
}

#[test]
fn test_reset_mid_cascade() {
    let mut session = session();
    session.start_with_board(Board::with_mines(10, &[(10, 10)]));
    session.handle_primary_action(1, 1);
    session.tick(DT);
    assert!(session.pending_reveals() > 0);

    session.reset_game();

    assert_eq!(session.pending_reveals(), 0);
    assert!(session.animations().is_empty());
    assert_eq!(session.board().revealed_count(), 0);
    assert_eq!(session.phase(), GamePhase::FirstClickPending);

    // The old queue never touches the new board
    for _ in 0..20 {
        session.tick(DT);
    }
    assert_eq!(session.board().revealed_count(), 0);
}

#[test]
fn test_animations_expire_after_cascade() {
    let mut session = session();
    session.start_with_board(Board::with_mines(5, &[(5, 5)]));
    session.handle_primary_action(1, 1);
    run_cascade(&mut session);
    assert!(!session.animations().is_empty());

    for _ in 0..60 {
        session.tick(DT);
    }
    assert!(session.animations().is_empty());
    assert!(session.particles().is_empty());
}

// =============================================================================
// App Flow
// =============================================================================

#[test]
fn test_app_round_trip_through_screens() {
    let mut app = App::new(GameSettings::default(), Some(8));

    app.process_menu_input(MenuInput::Select);
    assert_eq!(app.screen(), Screen::Playing);

    app.process_play_input(PlayInput::Reveal);
    for _ in 0..200 {
        app.tick(DT);
    }
    assert!(app.session().board().revealed_count() > 1);

    app.process_play_input(PlayInput::Back);
    assert_eq!(app.screen(), Screen::Menu);

    // Playing again starts a fresh game
    app.process_menu_input(MenuInput::Select);
    assert_eq!(app.session().phase(), GamePhase::FirstClickPending);
    assert_eq!(app.session().board().revealed_count(), 0);
}
