//! Events tab view - broadcast payloads, newest first

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .event_log
        .iter()
        .map(|entry| match entry.split_once(' ') {
            Some((channel, payload)) => Line::from(vec![
                Span::styled(channel.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled(format!(" {}", payload), Style::default().fg(Color::Gray)),
            ]),
            None => Line::from(entry.clone()),
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Events "))
        .wrap(Wrap { trim: false })
        .scroll((app.events_scroll as u16, 0));

    f.render_widget(paragraph, area);
}
