//! Options screen: difficulty and board size.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use sweep::app::{App, OptionsRow};

pub fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let options_area = super::centered_rect(area, 36, 11);
    frame.render_widget(Clear, options_area);

    let block = Block::default()
        .title(" Options ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(options_area);
    frame.render_widget(block, options_area);

    let settings = app.settings();
    let mut lines = vec![Line::from("")];

    for (index, row) in OptionsRow::ALL.iter().enumerate() {
        let selected = index == app.options_index();
        let label_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let value = match row {
            OptionsRow::Difficulty => Some(settings.difficulty.name().to_string()),
            OptionsRow::BoardSize => Some(format!(
                "{}x{}",
                settings.board_size, settings.board_size
            )),
            OptionsRow::Back => None,
        };

        let mut spans = vec![Span::styled(
            format!("{}{}", if selected { "> " } else { "  " }, row.label()),
            label_style,
        )];
        if let Some(value) = value {
            let arrows = if selected { ("< ", " >") } else { ("  ", "  ") };
            spans.push(Span::raw(": "));
            spans.push(Span::styled(
                format!("{}{}{}", arrows.0, value, arrows.1),
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} mines", settings.mine_count()),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Left/Right] Change  [Esc] Back",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
