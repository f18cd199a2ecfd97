//! Effects tab view - effect definitions available to apply

use super::{modifier_span, row_style};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mut lines: Vec<Line> = vec![];
    for (i, effect) in app.effects.iter().enumerate() {
        let (prefix, style) = row_style(i == app.selected_effect);
        let target = match effect.attribute {
            Some(attribute) => attribute.label(),
            None => "narrative",
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:20}", effect.name), style),
            Span::styled(format!("{:14}", target), Style::default().fg(Color::Gray)),
            modifier_span(effect.modifier),
            Span::styled(
                format!("  {}", effect.duration_label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Definitions "));
    f.render_widget(list, chunks[0]);

    let detail = match app.current_effect() {
        Some(effect) => vec![
            Line::from(Span::styled(effect.name.clone(), Style::default().fg(Color::Yellow))),
            Line::from(""),
            Line::from(effect.description.clone().unwrap_or_default()),
            Line::from(""),
            Line::from(match app.current_player() {
                Some(player) => format!("[a] apply to {}", player.name),
                None => "No player selected".to_string(),
            }),
        ],
        None => vec![Line::from("No effects defined")],
    };
    let detail = Paragraph::new(detail)
        .block(Block::default().borders(Borders::ALL).title(" Detail "))
        .wrap(Wrap { trim: true });
    f.render_widget(detail, chunks[1]);
}
