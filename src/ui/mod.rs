pub mod board_scene;
pub mod effects;
pub mod menu_scene;
pub mod options_scene;
pub mod starfield;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use sweep::app::{App, Screen};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = frame.size();

    starfield::render_starfield(frame.buffer_mut(), area, app.backdrop());

    match app.screen() {
        Screen::Menu => menu_scene::render_menu(frame, area, app),
        Screen::Options => options_scene::render_options(frame, area, app),
        Screen::Playing => {
            board_scene::render_board_scene(frame, area, app.session(), app.cursor())
        }
    }
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(v_chunks[1]);

    h_chunks[1]
}
