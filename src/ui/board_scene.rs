//! Minefield rendering: grid, info panel, game-over overlay and effects.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use sweep::animation::{AnimationFrame, AnimationKind};
use sweep::board::{Cell, GameResult};
use sweep::geometry::BoardGeometry;
use sweep::session::{GamePhase, SessionController};

use super::effects::render_particles;

/// Terminal columns per board cell.
const CELL_COLUMNS: u16 = 2;
const INFO_PANEL_WIDTH: u16 = 26;

/// Split the screen into the grid area and the info panel.
fn split_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),                  // Grid area
            Constraint::Length(INFO_PANEL_WIDTH), // Info panel
        ])
        .split(area);
    (chunks[0], chunks[1])
}

fn grid_block() -> Block<'static> {
    Block::default()
        .title(" Minefield ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
}

/// Visible part of the grid: the inside of the grid block. Cells that do not
/// fit are neither drawn nor clickable.
pub fn board_viewport(area: Rect) -> Rect {
    let (grid_area, _) = split_layout(area);
    grid_block().inner(grid_area)
}

/// Where the board sits for a given terminal area.
///
/// Shared by rendering and mouse input so both agree after every resize.
pub fn board_geometry(area: Rect, board_size: usize) -> BoardGeometry {
    let inner = board_viewport(area);

    let grid_width = board_size as u16 * CELL_COLUMNS;
    let grid_height = board_size as u16;
    let x_offset = inner.x + inner.width.saturating_sub(grid_width) / 2;
    let y_offset = inner.y + inner.height.saturating_sub(grid_height) / 2;

    BoardGeometry {
        origin_x: x_offset as f64,
        origin_y: y_offset as f64,
        cell_width: CELL_COLUMNS as f64,
        cell_height: 1.0,
        board_size,
    }
}

/// Render the playing screen.
pub fn render_board_scene(
    frame: &mut Frame,
    area: Rect,
    session: &SessionController,
    cursor: (usize, usize),
) {
    let (grid_area, info_area) = split_layout(area);
    let geometry = board_geometry(area, session.board().size());

    frame.render_widget(Clear, grid_area);
    let block = grid_block();
    let inner = block.inner(grid_area);
    frame.render_widget(block, grid_area);

    render_grid(frame, inner, &geometry, session, cursor);
    render_info_panel(frame, info_area, session);

    if let GamePhase::Over(result) = session.phase() {
        render_game_over_overlay(frame, grid_area, result, session.elapsed_seconds());
    }

    render_particles(frame.buffer_mut(), inner, &geometry, session.particles().particles());
}

fn render_grid(
    frame: &mut Frame,
    inner: Rect,
    geometry: &BoardGeometry,
    session: &SessionController,
    cursor: (usize, usize),
) {
    let board = session.board();
    let game_over = session.is_over();
    let x = geometry.origin_x as u16;
    let width = (board.size() as u16 * CELL_COLUMNS).min(inner.right().saturating_sub(x));

    for row in 1..=board.size() {
        let y = geometry.origin_y as u16 + (row as u16 - 1);
        if y >= inner.bottom() {
            break;
        }

        let spans: Vec<Span> = (1..=board.size())
            .map(|col| {
                let cell = board.cell_at(row, col);
                let frame_state = session.animations().frame_at(row, col);
                let (text, mut style) = cell_display(cell, frame_state);
                if cursor == (row, col) && !game_over {
                    style = style.bg(Color::DarkGray);
                }
                Span::styled(text, style)
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(x, y, width, 1));
    }
}

/// Text and style for a cell, including any in-flight animation.
fn cell_display(cell: &Cell, animation: Option<AnimationFrame>) -> (&'static str, Style) {
    if let Some(frame) = animation {
        match frame.kind {
            AnimationKind::Reveal if frame.progress < 0.5 => {
                let glyph = if frame.progress < 0.25 { "▓▓" } else { "▒▒" };
                return (glyph, Style::default().fg(Color::Gray));
            }
            AnimationKind::FlagToggle if frame.progress < 1.0 => {
                let (text, style) = settled_display(cell);
                return (text, style.add_modifier(Modifier::BOLD).bg(Color::Yellow));
            }
            _ => {}
        }
    }
    settled_display(cell)
}

fn settled_display(cell: &Cell) -> (&'static str, Style) {
    if cell.flagged && !cell.revealed {
        return ("F ", Style::default().fg(Color::Red));
    }

    if !cell.revealed {
        return ("# ", Style::default().fg(Color::Gray));
    }

    if cell.has_mine {
        return ("* ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    }

    let (text, color) = match cell.adjacent_mines {
        0 => (". ", Color::DarkGray),
        1 => ("1 ", Color::Blue),
        2 => ("2 ", Color::Green),
        3 => ("3 ", Color::Red),
        4 => ("4 ", Color::Magenta),
        5 => ("5 ", Color::Yellow),
        6 => ("6 ", Color::Cyan),
        7 => ("7 ", Color::Gray),
        8 => ("8 ", Color::White),
        _ => ("? ", Color::White),
    };
    (text, Style::default().fg(color))
}

fn label_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &SessionController) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let settings = session.settings();
    let board = session.board();

    let mut lines = vec![
        Line::from(Span::styled(
            "Sweep",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        label_line("Difficulty: ", settings.difficulty.name().to_string(), Color::Cyan),
        label_line("Grid: ", format!("{}x{}", board.size(), board.size()), Color::White),
        label_line("Mines: ", session.mine_count().to_string(), Color::White),
    ];

    let remaining = session.mines_remaining();
    let remaining_color = if remaining < 0 { Color::Red } else { Color::White };
    lines.push(label_line("Remaining: ", remaining.to_string(), remaining_color));
    lines.push(label_line(
        "Time: ",
        format!("{:.0}s", session.elapsed_seconds().floor()),
        Color::White,
    ));
    lines.push(Line::from(""));

    let status = match session.phase() {
        GamePhase::NotStarted => Span::raw(""),
        GamePhase::FirstClickPending => {
            Span::styled("Reveal a cell to begin", Style::default().fg(Color::Yellow))
        }
        GamePhase::InProgress if session.flag_mode() => {
            Span::styled("Flag mode", Style::default().fg(Color::LightRed))
        }
        GamePhase::InProgress => Span::styled("Sweeping...", Style::default().fg(Color::Green)),
        GamePhase::Over(GameResult::Won) => {
            Span::styled("Board cleared", Style::default().fg(Color::Green))
        }
        GamePhase::Over(GameResult::Lost) => {
            Span::styled("Mine detonated", Style::default().fg(Color::Red))
        }
    };
    lines.push(Line::from(status));
    lines.push(Line::from(""));

    let controls = [
        "[Arrows] Move",
        "[Enter] Reveal",
        "[F] Flag",
        "[Tab] Flag mode",
        "[Mouse] L reveal, R flag",
        "[R] New game",
        "[Esc] Menu",
    ];
    for control in controls {
        lines.push(Line::from(Span::styled(
            control,
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, result: GameResult, elapsed: f64) {
    let (title, color) = match result {
        GameResult::Won => ("Board Cleared!", Color::Green),
        GameResult::Lost => ("Mine Detonated!", Color::Red),
    };

    let overlay_area = super::centered_rect(area, 30, 6);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Time: {:.1}s", elapsed),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "[R] New game  [Esc] Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
