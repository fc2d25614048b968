//! Title menu.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use sweep::app::{App, MenuItem};
use sweep::build_info::BUILD_LABEL;

pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let menu_area = super::centered_rect(area, 34, 13);
    frame.render_widget(Clear, menu_area);

    let block = Block::default()
        .title(" Sweep ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(menu_area);
    frame.render_widget(block, menu_area);

    let settings = app.settings();
    let mut lines = vec![
        Line::from(Span::styled(
            "S W E E P",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} - {}x{}",
                settings.difficulty.name(),
                settings.board_size,
                settings.board_size
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (index, item) in MenuItem::ALL.iter().enumerate() {
        let selected = index == app.menu_index();
        let (prefix, style) = if selected {
            (
                "> ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::White))
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, item.label()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Up/Down] Select  [Enter] OK",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        BUILD_LABEL,
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
