//! Terminal event dispatch.
//!
//! Maps crossterm key and mouse events onto the UI-agnostic inputs of the
//! current screen.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use sweep::app::{App, AppCommand, MenuInput, OptionsInput, PlayInput, Screen};

use crate::ui::board_scene::{board_geometry, board_viewport};

/// Route one terminal event to the app. `area` is the current terminal size,
/// used to place mouse clicks on the board.
pub fn handle_event(app: &mut App, event: Event, area: Rect) -> AppCommand {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) if app.screen() == Screen::Playing => {
            match map_mouse(app, mouse, area) {
                Some(input) => app.process_play_input(input),
                None => AppCommand::Continue,
            }
        }
        _ => AppCommand::Continue,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> AppCommand {
    match app.screen() {
        Screen::Menu => {
            let input = match key.code {
                KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
                KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
                KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Cancel,
                _ => MenuInput::Other,
            };
            app.process_menu_input(input)
        }
        Screen::Options => {
            let input = match key.code {
                KeyCode::Up | KeyCode::Char('k') => OptionsInput::Up,
                KeyCode::Down | KeyCode::Char('j') => OptionsInput::Down,
                KeyCode::Left | KeyCode::Char('h') => OptionsInput::Left,
                KeyCode::Right | KeyCode::Char('l') => OptionsInput::Right,
                KeyCode::Enter | KeyCode::Char(' ') => OptionsInput::Select,
                KeyCode::Esc => OptionsInput::Cancel,
                _ => OptionsInput::Other,
            };
            app.process_options_input(input)
        }
        Screen::Playing => {
            let input = match key.code {
                KeyCode::Up => PlayInput::Up,
                KeyCode::Down => PlayInput::Down,
                KeyCode::Left => PlayInput::Left,
                KeyCode::Right => PlayInput::Right,
                KeyCode::Enter | KeyCode::Char(' ') => PlayInput::Reveal,
                KeyCode::Char('f') | KeyCode::Char('F') => PlayInput::Flag,
                KeyCode::Tab => PlayInput::ToggleFlagMode,
                KeyCode::Char('r') | KeyCode::Char('R') => PlayInput::Reset,
                KeyCode::Esc => PlayInput::Back,
                _ => PlayInput::Other,
            };
            app.process_play_input(input)
        }
    }
}

fn map_mouse(app: &App, mouse: MouseEvent, area: Rect) -> Option<PlayInput> {
    let viewport = board_viewport(area);
    let visible = mouse.column >= viewport.x
        && mouse.column < viewport.right()
        && mouse.row >= viewport.y
        && mouse.row < viewport.bottom();
    if !visible {
        return None;
    }

    let geometry = board_geometry(area, app.session().board().size());
    let (row, col) = geometry.map_pointer(mouse.column as f64, mouse.row as f64)?;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PlayInput::RevealAt(row, col)),
        MouseEventKind::Down(MouseButton::Right) => Some(PlayInput::FlagAt(row, col)),
        _ => None,
    }
}
